//! Debug Data Handler

use rust_decimal::Decimal;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use stockroom_app::domain::{
    ledger::records::{InboundRecord, OutboundRecord},
    maintenance::records::DatabaseSnapshot,
};

use crate::{debug::errors::into_status_error, extensions::*, products::get::ProductResponse};

/// Raw ledger row.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LedgerRowResponse {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i64,

    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub unit_price: Decimal,
    pub transaction_date: String,
    pub notes: Option<String>,
}

impl From<InboundRecord> for LedgerRowResponse {
    fn from(record: InboundRecord) -> Self {
        LedgerRowResponse {
            id: record.id.into_i64(),
            product_id: record.product_id.into_i64(),
            quantity: record.quantity,
            unit_price: record.unit_price,
            transaction_date: record.transaction_date.to_string(),
            notes: record.notes,
        }
    }
}

impl From<OutboundRecord> for LedgerRowResponse {
    fn from(record: OutboundRecord) -> Self {
        LedgerRowResponse {
            id: record.id.into_i64(),
            product_id: record.product_id.into_i64(),
            quantity: record.quantity,
            unit_price: record.unit_price,
            transaction_date: record.transaction_date.to_string(),
            notes: record.notes,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TableCounts {
    pub products: usize,
    pub inbound: usize,
    pub outbound: usize,
}

/// Debug Data Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DebugDataResponse {
    pub products: Vec<ProductResponse>,
    pub inbound_transactions: Vec<LedgerRowResponse>,
    pub outbound_transactions: Vec<LedgerRowResponse>,
    pub counts: TableCounts,
}

impl From<DatabaseSnapshot> for DebugDataResponse {
    fn from(snapshot: DatabaseSnapshot) -> Self {
        let counts = TableCounts {
            products: snapshot.products.len(),
            inbound: snapshot.inbound.len(),
            outbound: snapshot.outbound.len(),
        };

        DebugDataResponse {
            products: snapshot.products.into_iter().map(Into::into).collect(),
            inbound_transactions: snapshot.inbound.into_iter().map(Into::into).collect(),
            outbound_transactions: snapshot.outbound.into_iter().map(Into::into).collect(),
            counts,
        }
    }
}

/// Debug Data Handler
///
/// Dumps every table, ordered by id.
#[endpoint(
    tags("debug"),
    summary = "Dump All Data",
    responses(
        (status_code = StatusCode::OK, description = "Every row of every table"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<DebugDataResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let snapshot = state
        .app
        .maintenance
        .snapshot()
        .await
        .map_err(into_status_error)?;

    Ok(Json(snapshot.into()))
}
