//! Ledger rows as returned by the listing endpoints.

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use stockroom_app::domain::ledger::records::{InboundListing, OutboundListing};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LedgerEntryResponse {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i64,

    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub unit_price: Decimal,
    pub transaction_date: String,
    pub notes: Option<String>,
    pub brand: String,
    pub model: String,

    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub capacity: Decimal,
    pub capacity_unit: String,
}

/// Ledger Listing Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LedgerResponse {
    /// Newest first
    pub transactions: Vec<LedgerEntryResponse>,
}

impl From<InboundListing> for LedgerEntryResponse {
    fn from(listing: InboundListing) -> Self {
        let (record, product) = (listing.record, listing.product);

        LedgerEntryResponse {
            id: record.id.into_i64(),
            product_id: record.product_id.into_i64(),
            quantity: record.quantity,
            unit_price: record.unit_price,
            transaction_date: record.transaction_date.to_string(),
            notes: record.notes,
            brand: product.brand,
            model: product.model,
            capacity: product.capacity,
            capacity_unit: product.capacity_unit.to_string(),
        }
    }
}

impl From<OutboundListing> for LedgerEntryResponse {
    fn from(listing: OutboundListing) -> Self {
        let (record, product) = (listing.record, listing.product);

        LedgerEntryResponse {
            id: record.id.into_i64(),
            product_id: record.product_id.into_i64(),
            quantity: record.quantity,
            unit_price: record.unit_price,
            transaction_date: record.transaction_date.to_string(),
            notes: record.notes,
            brand: product.brand,
            model: product.model,
            capacity: product.capacity,
            capacity_unit: product.capacity_unit.to_string(),
        }
    }
}
