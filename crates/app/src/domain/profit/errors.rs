//! Profit service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfitServiceError {
    #[error("storage error")]
    Sql(#[from] sqlx::Error),
}
