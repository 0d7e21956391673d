//! Delete Transaction Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::info;

use stockroom_app::domain::ledger::records::LedgerKind;

use crate::{
    debug::{DebugMessageResponse, errors::into_status_error},
    extensions::*,
};

/// Delete Transaction Handler
///
/// Removes one ledger row. Product quantities are left as they are.
#[endpoint(
    tags("debug"),
    summary = "Delete Ledger Entry",
    responses(
        (status_code = StatusCode::OK, description = "Transaction deleted"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown ledger or invalid id"),
        (status_code = StatusCode::NOT_FOUND, description = "Transaction not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "debug.delete_transaction", skip(kind, id, depot), err)]
pub(crate) async fn handler(
    kind: PathParam<String>,
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<DebugMessageResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let kind = kind
        .into_inner()
        .parse::<LedgerKind>()
        .or_400("invalid transaction type")?;

    let id = id.into_positive_id("id")?;

    state
        .app
        .maintenance
        .delete_entry(kind, id)
        .await
        .map_err(into_status_error)?;

    info!(%kind, id, "deleted ledger entry");

    Ok(Json(DebugMessageResponse::ok(
        "Transaction deleted successfully",
    )))
}
