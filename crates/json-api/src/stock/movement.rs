//! Request body shared by add-quantity and outbound.

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use stockroom_app::domain::{
    products::records::ProductId,
    stock::data::{NewRestock, NewSale},
    values::{Money, Quantity, ValidationError, optional_text},
};

/// Stock Movement Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct MovementRequest {
    pub product_id: Option<i64>,
    pub quantity: Option<i64>,

    /// Defaults to the product's catalog price
    #[salvo(schema(value_type = Option<f64>))]
    pub unit_price: Option<Decimal>,
    pub notes: Option<String>,
}

/// Validated movement against a known product.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Movement {
    pub product: ProductId,
    pub quantity: Quantity,
    pub unit_price: Option<Money>,
    pub notes: Option<String>,
}

impl TryFrom<MovementRequest> for Movement {
    type Error = ValidationError;

    fn try_from(request: MovementRequest) -> Result<Self, Self::Error> {
        let product = match request.product_id {
            Some(id) if id > 0 => ProductId::from_i64(id),
            Some(_) => return Err(ValidationError::NotPositive("product_id")),
            None => return Err(ValidationError::Missing("product_id")),
        };

        Ok(Movement {
            product,
            quantity: Quantity::new(request.quantity.ok_or(ValidationError::Missing("quantity"))?)?,
            unit_price: request.unit_price.map(Money::new).transpose()?,
            notes: optional_text(request.notes),
        })
    }
}

impl Movement {
    pub(crate) fn into_restock(self) -> (ProductId, NewRestock) {
        (
            self.product,
            NewRestock {
                quantity: self.quantity,
                unit_price: self.unit_price,
                notes: self.notes,
            },
        )
    }

    pub(crate) fn into_sale(self) -> (ProductId, NewSale) {
        (
            self.product,
            NewSale {
                quantity: self.quantity,
                unit_price: self.unit_price,
                notes: self.notes,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use testresult::TestResult;

    use super::*;

    fn request() -> MovementRequest {
        MovementRequest {
            product_id: Some(4),
            quantity: Some(2),
            unit_price: None,
            notes: Some("  ".to_string()),
        }
    }

    #[test]
    fn movement_without_price_keeps_it_absent() -> TestResult {
        let movement = Movement::try_from(request())?;

        assert_eq!(movement.product, ProductId::from_i64(4));
        assert_eq!(movement.quantity.get(), 2);
        assert!(movement.unit_price.is_none());
        assert!(movement.notes.is_none());

        Ok(())
    }

    #[test]
    fn movement_rounds_price_to_cents() -> TestResult {
        let movement = Movement::try_from(MovementRequest {
            unit_price: Some(dec!(19.999)),
            ..request()
        })?;

        assert_eq!(movement.unit_price.map(Money::amount), Some(dec!(20.00)));

        Ok(())
    }

    #[test]
    fn movement_requires_positive_product_and_quantity() {
        let cases = [
            (
                MovementRequest {
                    product_id: None,
                    ..request()
                },
                ValidationError::Missing("product_id"),
            ),
            (
                MovementRequest {
                    product_id: Some(0),
                    ..request()
                },
                ValidationError::NotPositive("product_id"),
            ),
            (
                MovementRequest {
                    quantity: Some(0),
                    ..request()
                },
                ValidationError::NotPositive("quantity"),
            ),
        ];

        for (request, expected) in cases {
            assert_eq!(Movement::try_from(request), Err(expected));
        }
    }
}
