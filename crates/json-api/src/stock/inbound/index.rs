//! Inbound Ledger Handler

use salvo::prelude::*;

use crate::{
    extensions::*,
    stock::{errors::ledger_status_error, listing::LedgerResponse},
};

/// Inbound Ledger Handler
#[endpoint(
    tags("inbound"),
    summary = "List Inbound Transactions",
    responses(
        (status_code = StatusCode::OK, description = "Inbound transactions, newest first"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<LedgerResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let entries = state
        .app
        .ledger
        .list_inbound()
        .await
        .map_err(ledger_status_error)?;

    Ok(Json(LedgerResponse {
        transactions: entries.into_iter().map(Into::into).collect(),
    }))
}
