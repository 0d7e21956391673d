//! Profit Reports

mod errors;
pub(crate) mod report;
pub(crate) mod summary;
