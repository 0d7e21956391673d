//! Stock Mutation Engine

pub mod data;
pub mod errors;
pub mod records;
pub mod rules;
pub mod service;

pub use errors::StockServiceError;
pub use service::*;
