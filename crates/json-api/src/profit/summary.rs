//! Profit Summary Handler

use rust_decimal::Decimal;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, profit::errors::into_status_error};

/// Profit Summary Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProfitSummaryResponse {
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub total_profit: Decimal,
}

/// Profit Summary Handler
#[endpoint(
    tags("profit"),
    summary = "Profit Summary",
    responses(
        (status_code = StatusCode::OK, description = "Total profit over all sales"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ProfitSummaryResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let summary = state
        .app
        .profit
        .profit_summary()
        .await
        .map_err(into_status_error)?;

    Ok(Json(ProfitSummaryResponse {
        total_profit: summary.total_profit,
    }))
}
