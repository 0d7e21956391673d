//! Profit Attribution Engine

pub mod errors;
pub mod report;
pub(crate) mod repository;
pub mod service;

pub use errors::ProfitServiceError;
pub use service::*;
