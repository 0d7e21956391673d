//! Test Connection Handler

use salvo::prelude::*;

use crate::{
    debug::{DebugMessageResponse, errors::into_status_error},
    extensions::*,
};

/// Test Connection Handler
#[endpoint(
    tags("debug"),
    summary = "Test Database Connection",
    responses(
        (status_code = StatusCode::OK, description = "Database reachable"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Database unreachable"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<DebugMessageResponse>, StatusError> {
    let state = depot.state_or_500()?;

    state
        .app
        .maintenance
        .ping()
        .await
        .map_err(into_status_error)?;

    Ok(Json(DebugMessageResponse::ok(
        "Database connection is working",
    )))
}
