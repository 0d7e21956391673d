//! Stock Movement Records

use crate::domain::{
    ledger::records::{InboundId, OutboundId},
    products::records::{ConditionStatus, ProductId},
};

/// Outcome of a restock by identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InboundReceipt {
    pub product_id: ProductId,
    /// Quantity on hand after the event.
    pub quantity: i64,
    /// Whether the event created the catalog entry.
    pub created: bool,
    pub entry_id: InboundId,
}

/// Outcome of a restock of a known product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestockReceipt {
    pub product_id: ProductId,
    pub quantity: i64,
    pub entry_id: InboundId,
}

/// Outcome of a sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaleReceipt {
    pub product_id: ProductId,
    pub remaining_quantity: i64,
    pub condition_status: ConditionStatus,
    pub entry_id: OutboundId,
}
