//! Administrative operations over the whole store.

pub mod errors;
pub mod records;
pub(crate) mod repository;
pub mod service;

pub use errors::MaintenanceServiceError;
pub use service::*;
