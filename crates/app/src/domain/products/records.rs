//! Product Records

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{
    domain::values::{Capacity, ValidationError},
    ids::TypedId,
};

/// Product Id
pub type ProductId = TypedId<ProductRecord>;

/// Unit the capacity figure is expressed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CapacityUnit {
    #[default]
    Gb,
    Tb,
}

impl CapacityUnit {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gb => "GB",
            Self::Tb => "TB",
        }
    }

    /// Unknown or absent units fall back to gigabytes.
    #[must_use]
    pub fn normalize(value: Option<&str>) -> Self {
        match value {
            Some("TB") => Self::Tb,
            _ => Self::Gb,
        }
    }
}

impl Display for CapacityUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for CapacityUnit {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "GB" => Ok(Self::Gb),
            "TB" => Ok(Self::Tb),
            other => Err(ValidationError::Invalid {
                field: "capacity_unit",
                value: other.to_owned(),
            }),
        }
    }
}

/// Stock availability flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ConditionStatus {
    #[default]
    InStock,
    OutOfStock,
}

impl ConditionStatus {
    /// Status implied by a quantity on hand.
    #[must_use]
    pub const fn for_quantity(quantity: i64) -> Self {
        if quantity > 0 {
            Self::InStock
        } else {
            Self::OutOfStock
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InStock => "in_stock",
            Self::OutOfStock => "out_of_stock",
        }
    }
}

impl Display for ConditionStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConditionStatus {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "in_stock" => Ok(Self::InStock),
            "out_of_stock" => Ok(Self::OutOfStock),
            other => Err(ValidationError::Invalid {
                field: "condition_status",
                value: other.to_owned(),
            }),
        }
    }
}

/// Attributes that decide whether two inbound events describe the same product.
///
/// `interface` and `form_factor` compare exactly, so an absent value only
/// matches another absent value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductIdentity {
    pub brand: String,
    pub model: String,
    pub capacity: Capacity,
    pub capacity_unit: CapacityUnit,
    pub interface: Option<String>,
    pub form_factor: Option<String>,
}

impl ProductIdentity {
    /// Stable textual key, used to serialise concurrent inbound events for the same identity.
    #[must_use]
    pub fn lock_key(&self) -> String {
        let optional = |value: &Option<String>| match value {
            Some(value) => format!("={value}"),
            None => "!".to_string(),
        };

        format!(
            "{}\u{1f}{}\u{1f}{}\u{1f}{}\u{1f}{}\u{1f}{}",
            self.brand,
            self.model,
            self.capacity.value().normalize(),
            self.capacity_unit,
            optional(&self.interface),
            optional(&self.form_factor),
        )
    }
}

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub brand: String,
    pub model: String,
    pub capacity: Decimal,
    pub capacity_unit: CapacityUnit,
    pub interface: Option<String>,
    pub form_factor: Option<String>,
    pub warranty_period: Option<String>,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub condition_status: ConditionStatus,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Identity fields shown next to ledger and profit rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductLabel {
    pub brand: String,
    pub model: String,
    pub capacity: Decimal,
    pub capacity_unit: CapacityUnit,
}
