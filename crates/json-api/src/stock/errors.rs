//! Stock Errors

use salvo::http::StatusError;
use tracing::error;

use stockroom_app::domain::{ledger::LedgerServiceError, stock::StockServiceError};

pub(crate) fn into_status_error(error: StockServiceError) -> StatusError {
    match error {
        StockServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        StockServiceError::InsufficientStock {
            requested,
            available,
        } => StatusError::conflict().brief(format!(
            "Insufficient quantity in stock: requested {requested}, available {available}"
        )),
        StockServiceError::QuantityOverflow => {
            StatusError::bad_request().brief("Resulting quantity is too large")
        }
        StockServiceError::InvalidReference => StatusError::not_found().brief("Product not found"),
        StockServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid stock movement payload")
        }
        StockServiceError::Sql(source) => {
            error!("stock storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn ledger_status_error(error: LedgerServiceError) -> StatusError {
    match error {
        LedgerServiceError::Sql(source) => {
            error!("ledger storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
