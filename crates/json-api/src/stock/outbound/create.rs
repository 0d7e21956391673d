//! Record Outbound Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    extensions::*,
    observability::{StockDirection, record_stock_movement},
    stock::{
        errors::into_status_error,
        movement::{Movement, MovementRequest},
    },
};

/// Outbound Recorded Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OutboundResponse {
    pub success: bool,
    pub message: String,
    pub product_id: i64,
    pub remaining_quantity: i64,
}

/// Record Outbound Handler
///
/// Sells units of a product. Without a price the catalog price is charged.
#[endpoint(
    tags("outbound"),
    summary = "Record Outbound",
    responses(
        (status_code = StatusCode::OK, description = "Outbound transaction recorded"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::CONFLICT, description = "Insufficient quantity in stock"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "outbound.create", skip(json, depot), err)]
pub(crate) async fn handler(
    json: JsonBody<MovementRequest>,
    depot: &mut Depot,
) -> Result<Json<OutboundResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let (product, sale) = Movement::try_from(json.into_inner())
        .or_400("invalid outbound transaction")?
        .into_sale();

    let units = sale.quantity.get();

    let receipt = state
        .app
        .stock
        .record_outbound(product, sale)
        .await
        .map_err(into_status_error)?;

    record_stock_movement(StockDirection::Outbound, units);

    info!(
        product_id = %receipt.product_id,
        entry_id = %receipt.entry_id,
        quantity = units,
        remaining_quantity = receipt.remaining_quantity,
        condition_status = %receipt.condition_status,
        "recorded outbound transaction"
    );

    Ok(Json(OutboundResponse {
        success: true,
        message: "Outbound transaction recorded".to_string(),
        product_id: receipt.product_id.into_i64(),
        remaining_quantity: receipt.remaining_quantity,
    }))
}
