//! Stock Movements

mod errors;
pub(crate) mod inbound;
mod listing;
mod movement;
pub(crate) mod outbound;
