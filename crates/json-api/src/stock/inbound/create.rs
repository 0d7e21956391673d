//! Record Inbound Handler

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use stockroom_app::domain::{
    products::records::{CapacityUnit, ConditionStatus, ProductIdentity},
    stock::data::NewInbound,
    values::{Capacity, Money, Quantity, ValidationError, optional_text, required_text},
};

use crate::{
    extensions::*,
    observability::{StockDirection, record_stock_movement},
    stock::errors::into_status_error,
};

/// Inbound Request
///
/// Describes the product by its identity. A matching catalog entry is
/// restocked, otherwise a new one is created.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct InboundRequest {
    pub brand: Option<String>,
    pub model: Option<String>,

    #[salvo(schema(value_type = Option<f64>))]
    pub capacity: Option<Decimal>,

    /// `GB` or `TB`, anything else is stored as `GB`
    pub capacity_unit: Option<String>,
    pub interface: Option<String>,
    pub form_factor: Option<String>,
    pub warranty_period: Option<String>,
    pub quantity: Option<i64>,

    #[salvo(schema(value_type = Option<f64>))]
    pub unit_price: Option<Decimal>,

    /// `in_stock` or `out_of_stock`
    pub condition_status: Option<String>,
    pub is_active: Option<bool>,
    pub notes: Option<String>,
}

impl TryFrom<InboundRequest> for NewInbound {
    type Error = ValidationError;

    fn try_from(request: InboundRequest) -> Result<Self, Self::Error> {
        let identity = ProductIdentity {
            brand: required_text("brand", request.brand)?,
            model: required_text("model", request.model)?,
            capacity: Capacity::new(request.capacity.ok_or(ValidationError::Missing("capacity"))?)?,
            capacity_unit: CapacityUnit::normalize(request.capacity_unit.as_deref()),
            interface: optional_text(request.interface),
            form_factor: optional_text(request.form_factor),
        };

        Ok(NewInbound {
            identity,
            warranty_period: optional_text(request.warranty_period),
            quantity: Quantity::new(request.quantity.ok_or(ValidationError::Missing("quantity"))?)?,
            unit_price: Money::new(
                request
                    .unit_price
                    .ok_or(ValidationError::Missing("unit_price"))?,
            )?,
            condition_status: request
                .condition_status
                .as_deref()
                .map(str::parse::<ConditionStatus>)
                .transpose()?,
            is_active: request.is_active,
            notes: optional_text(request.notes),
        })
    }
}

/// Inbound Recorded Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct InboundResponse {
    pub success: bool,
    pub message: String,
    pub product_id: i64,

    /// Quantity on hand after the event
    pub new_quantity: i64,

    /// Whether a new catalog entry was created
    pub created: bool,
}

/// Record Inbound Handler
#[endpoint(
    tags("inbound"),
    summary = "Record Inbound",
    responses(
        (status_code = StatusCode::OK, description = "Inbound transaction recorded"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "inbound.create", skip(json, depot), err)]
pub(crate) async fn handler(
    json: JsonBody<InboundRequest>,
    depot: &mut Depot,
) -> Result<Json<InboundResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let inbound = NewInbound::try_from(json.into_inner()).or_400("invalid inbound transaction")?;
    let units = inbound.quantity.get();

    let receipt = state
        .app
        .stock
        .record_inbound(inbound)
        .await
        .map_err(into_status_error)?;

    record_stock_movement(StockDirection::Inbound, units);

    info!(
        product_id = %receipt.product_id,
        entry_id = %receipt.entry_id,
        quantity = units,
        new_quantity = receipt.quantity,
        created = receipt.created,
        "recorded inbound transaction"
    );

    let message = if receipt.created {
        "New product added"
    } else {
        "Stock quantity updated"
    };

    Ok(Json(InboundResponse {
        success: true,
        message: message.to_string(),
        product_id: receipt.product_id.into_i64(),
        new_quantity: receipt.quantity,
        created: receipt.created,
    }))
}
