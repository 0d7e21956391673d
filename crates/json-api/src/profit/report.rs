//! Profit Report Handler

use rust_decimal::Decimal;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use stockroom_app::domain::profit::report::{ProfitLine, ProfitReport};

use crate::{extensions::*, profit::errors::into_status_error};

/// Profit attributed to one sale.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProfitLineResponse {
    pub transaction_id: i64,
    pub product_id: i64,
    pub sold_quantity: i64,

    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub sale_price: Decimal,
    pub transaction_date: String,
    pub brand: String,
    pub model: String,

    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub capacity: Decimal,
    pub capacity_unit: String,

    /// Current catalog price
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub product_price: Decimal,

    /// Mean of every inbound price for the product
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub avg_cost: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub revenue: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub profit: Decimal,
}

impl From<ProfitLine> for ProfitLineResponse {
    fn from(line: ProfitLine) -> Self {
        ProfitLineResponse {
            transaction_id: line.transaction_id.into_i64(),
            product_id: line.product_id.into_i64(),
            sold_quantity: line.sold_quantity,
            sale_price: line.sale_price,
            transaction_date: line.transaction_date.to_string(),
            brand: line.product.brand,
            model: line.product.model,
            capacity: line.product.capacity,
            capacity_unit: line.product.capacity_unit.to_string(),
            product_price: line.product_price,
            avg_cost: line.avg_cost,
            revenue: line.revenue,
            profit: line.profit,
        }
    }
}

/// Profit Report Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProfitReportResponse {
    /// Newest first
    pub transactions: Vec<ProfitLineResponse>,

    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub total_profit: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub total_revenue: Decimal,
    pub transaction_count: usize,
}

impl From<ProfitReport> for ProfitReportResponse {
    fn from(report: ProfitReport) -> Self {
        ProfitReportResponse {
            transactions: report.transactions.into_iter().map(Into::into).collect(),
            total_profit: report.total_profit,
            total_revenue: report.total_revenue,
            transaction_count: report.transaction_count,
        }
    }
}

/// Profit Report Handler
#[endpoint(
    tags("profit"),
    summary = "Profit Report",
    responses(
        (status_code = StatusCode::OK, description = "Every sale with its attributed profit"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ProfitReportResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let report = state
        .app
        .profit
        .profit_report()
        .await
        .map_err(into_status_error)?;

    Ok(Json(report.into()))
}
