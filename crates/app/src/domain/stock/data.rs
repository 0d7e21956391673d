//! Stock Movement Data

use crate::domain::{
    products::records::{ConditionStatus, ProductIdentity},
    values::{Money, Quantity},
};

/// Restock event for a product identified by its attributes.
///
/// Creates the product when no entry matches the identity, otherwise merges into it.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInbound {
    pub identity: ProductIdentity,
    pub warranty_period: Option<String>,
    pub quantity: Quantity,
    pub unit_price: Money,
    pub condition_status: Option<ConditionStatus>,
    pub is_active: Option<bool>,
    pub notes: Option<String>,
}

/// Restock event for an existing product. Without a price the ledger records
/// the product's current catalog price.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRestock {
    pub quantity: Quantity,
    pub unit_price: Option<Money>,
    pub notes: Option<String>,
}

/// Sale event. Without a price the product's current catalog price is charged.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSale {
    pub quantity: Quantity,
    pub unit_price: Option<Money>,
    pub notes: Option<String>,
}
