//! Validated value types shared by the catalog, ledger and stock modules.

use std::fmt::{Display, Formatter, Result as FmtResult};

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Largest amount representable by a `NUMERIC(10, 2)` column.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),

    #[error("{0} exceeds the maximum of 99999999.99")]
    OutOfRange(&'static str),

    #[error("{field} has an invalid value: {value}")]
    Invalid { field: &'static str, value: String },
}

/// Positive count of units moved by a single stock event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(i64);

impl Quantity {
    /// # Errors
    ///
    /// Returns [`ValidationError::NotPositive`] for zero or negative values.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value <= 0 {
            return Err(ValidationError::NotPositive("quantity"));
        }

        Ok(Self(value))
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl TryFrom<i64> for Quantity {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Positive currency amount with two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    /// # Errors
    ///
    /// Returns an error when the amount rounds to zero or less, or does not fit the column.
    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        positive_amount("unit_price", value).map(Self)
    }

    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

/// Positive storage capacity, paired with a [`CapacityUnit`](super::products::records::CapacityUnit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Capacity(Decimal);

impl Capacity {
    /// # Errors
    ///
    /// Returns an error when the capacity rounds to zero or less, or does not fit the column.
    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        positive_amount("capacity", value).map(Self)
    }

    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }
}

impl Display for Capacity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

/// Trim a required text field, rejecting blank input.
///
/// # Errors
///
/// Returns [`ValidationError::Missing`] for absent or blank values.
pub fn required_text(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    optional_text(value).ok_or(ValidationError::Missing(field))
}

/// Trim an optional text field; blank input counts as absent.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn positive_amount(field: &'static str, value: Decimal) -> Result<Decimal, ValidationError> {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    if rounded <= Decimal::ZERO {
        return Err(ValidationError::NotPositive(field));
    }

    if rounded > MAX_AMOUNT {
        return Err(ValidationError::OutOfRange(field));
    }

    Ok(rounded)
}
