//! Maintenance service errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MaintenanceServiceError {
    #[error("ledger entry not found")]
    NotFound,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for MaintenanceServiceError {
    fn from(error: Error) -> Self {
        match error {
            Error::RowNotFound => Self::NotFound,
            error => Self::Sql(error),
        }
    }
}
