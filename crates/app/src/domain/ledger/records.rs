//! Ledger Records

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{
    domain::{
        products::records::{ProductId, ProductLabel},
        values::ValidationError,
    },
    ids::TypedId,
};

/// Inbound Transaction Id
pub type InboundId = TypedId<InboundRecord>;

/// Outbound Transaction Id
pub type OutboundId = TypedId<OutboundRecord>;

/// Restock event. Quantity and price are the event's own, not running totals.
#[derive(Debug, Clone, PartialEq)]
pub struct InboundRecord {
    pub id: InboundId,
    pub product_id: ProductId,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub transaction_date: Timestamp,
    pub notes: Option<String>,
}

/// Sale event. `unit_price` is the sale price.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundRecord {
    pub id: OutboundId,
    pub product_id: ProductId,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub transaction_date: Timestamp,
    pub notes: Option<String>,
}

/// Ledger row joined with the identity of the product it references.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerListing<R> {
    pub record: R,
    pub product: ProductLabel,
}

pub type InboundListing = LedgerListing<InboundRecord>;
pub type OutboundListing = LedgerListing<OutboundRecord>;

/// Which of the two ledgers a row lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedgerKind {
    Inbound,
    Outbound,
}

impl LedgerKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inbound => "inbound",
            Self::Outbound => "outbound",
        }
    }
}

impl Display for LedgerKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for LedgerKind {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "inbound" => Ok(Self::Inbound),
            "outbound" => Ok(Self::Outbound),
            other => Err(ValidationError::Invalid {
                field: "type",
                value: other.to_owned(),
            }),
        }
    }
}
