//! Ledger service errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerServiceError {
    #[error("storage error")]
    Sql(#[from] Error),
}
