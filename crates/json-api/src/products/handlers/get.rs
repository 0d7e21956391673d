//! Get Product Handler

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use stockroom_app::domain::products::records::{ProductId, ProductRecord};

use crate::{extensions::*, products::errors::into_status_error};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    pub id: i64,
    pub brand: String,
    pub model: String,

    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub capacity: Decimal,

    /// `GB` or `TB`
    pub capacity_unit: String,
    pub interface: Option<String>,
    pub form_factor: Option<String>,
    pub warranty_period: Option<String>,

    /// Units on hand
    pub quantity: i64,

    /// Current catalog price
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub unit_price: Decimal,

    /// `in_stock` or `out_of_stock`
    pub condition_status: String,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            id: product.id.into_i64(),
            brand: product.brand,
            model: product.model,
            capacity: product.capacity,
            capacity_unit: product.capacity_unit.to_string(),
            interface: product.interface,
            form_factor: product.form_factor,
            warranty_period: product.warranty_period,
            quantity: product.quantity,
            unit_price: product.unit_price,
            condition_status: product.condition_status.to_string(),
            is_active: product.is_active,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

/// Get Product Handler
///
/// Returns a product.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product found"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let id = ProductId::from_i64(id.into_positive_id("id")?);

    let product = state
        .app
        .products
        .get_product(id)
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}
