//! Ledger Data

use crate::domain::{
    products::records::ProductId,
    values::{Money, Quantity},
};

/// Row appended to either ledger by a stock movement.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLedgerEntry {
    pub product_id: ProductId,
    pub quantity: Quantity,
    pub unit_price: Money,
    pub notes: Option<String>,
}
