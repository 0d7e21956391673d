//! Products Data

use crate::domain::{
    products::records::{ConditionStatus, ProductIdentity},
    values::Money,
};

/// Partial product edit; only supplied fields change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub unit_price: Option<Money>,
    pub condition_status: Option<ConditionStatus>,
    pub is_active: Option<bool>,
}

impl ProductUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.unit_price.is_none() && self.condition_status.is_none() && self.is_active.is_none()
    }
}

/// Catalog row created by the first inbound event for an identity.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub identity: ProductIdentity,
    pub warranty_period: Option<String>,
    pub quantity: i64,
    pub unit_price: Money,
    pub condition_status: ConditionStatus,
    pub is_active: bool,
}
