//! Quantity transitions applied by stock movements.

use crate::domain::{
    products::records::ConditionStatus, stock::errors::StockServiceError, values::Quantity,
};

/// Units on hand for a product. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StockLevel(i64);

impl StockLevel {
    /// Negative stored quantities are treated as empty stock.
    #[must_use]
    pub const fn new(quantity: i64) -> Self {
        if quantity < 0 { Self(0) } else { Self(quantity) }
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Level after receiving `quantity` units.
    ///
    /// # Errors
    ///
    /// Returns [`StockServiceError::QuantityOverflow`] when the total does not fit.
    pub fn restocked(self, quantity: Quantity) -> Result<Self, StockServiceError> {
        self.0
            .checked_add(quantity.get())
            .map(Self)
            .ok_or(StockServiceError::QuantityOverflow)
    }

    /// Level after selling `quantity` units.
    ///
    /// # Errors
    ///
    /// Returns [`StockServiceError::InsufficientStock`] when fewer units are on hand.
    pub fn sold(self, quantity: Quantity) -> Result<Self, StockServiceError> {
        if quantity.get() > self.0 {
            return Err(StockServiceError::InsufficientStock {
                requested: quantity.get(),
                available: self.0,
            });
        }

        Ok(Self(self.0 - quantity.get()))
    }

    #[must_use]
    pub const fn condition_status(self) -> ConditionStatus {
        ConditionStatus::for_quantity(self.0)
    }
}
