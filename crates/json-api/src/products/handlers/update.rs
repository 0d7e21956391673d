//! Update Product Handler

use rust_decimal::Decimal;
use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use stockroom_app::domain::{
    products::{
        data::ProductUpdate,
        records::{ConditionStatus, ProductId},
    },
    values::{Money, ValidationError},
};

use crate::{extensions::*, products::errors::into_status_error, products::get::ProductResponse};

/// Update Product Request
///
/// Only supplied fields change. The quantity is never edited here.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProductRequest {
    #[salvo(schema(value_type = Option<f64>))]
    pub unit_price: Option<Decimal>,

    /// `in_stock` or `out_of_stock`
    pub condition_status: Option<String>,
    pub is_active: Option<bool>,
}

impl TryFrom<UpdateProductRequest> for ProductUpdate {
    type Error = ValidationError;

    fn try_from(request: UpdateProductRequest) -> Result<Self, Self::Error> {
        Ok(ProductUpdate {
            unit_price: request.unit_price.map(Money::new).transpose()?,
            condition_status: request
                .condition_status
                .as_deref()
                .map(str::parse::<ConditionStatus>)
                .transpose()?,
            is_active: request.is_active,
        })
    }
}

/// Product Updated Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductUpdatedResponse {
    pub success: bool,
    pub product: ProductResponse,
}

/// Product Update Handler
#[endpoint(
    tags("products"),
    summary = "Update Product",
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(id, json, depot),
    fields(product_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductUpdatedResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let id = ProductId::from_i64(id.into_positive_id("id")?);

    tracing::Span::current().record("product_id", tracing::field::display(id));

    let update = ProductUpdate::try_from(json.into_inner()).or_400("invalid product update")?;

    let product = state
        .app
        .products
        .update_product(id, update)
        .await
        .map_err(into_status_error)?;

    info!(
        product_id = %id,
        unit_price = %product.unit_price,
        condition_status = %product.condition_status,
        is_active = product.is_active,
        "updated product"
    );

    Ok(Json(ProductUpdatedResponse {
        success: true,
        product: product.into(),
    }))
}
