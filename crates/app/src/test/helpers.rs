//! Test Helpers

use rust_decimal::Decimal;

use crate::{
    domain::{
        products::records::{CapacityUnit, ProductId, ProductIdentity},
        stock::{
            StockService, StockServiceError,
            data::{NewInbound, NewRestock, NewSale},
            records::{InboundReceipt, RestockReceipt, SaleReceipt},
        },
        values::{Capacity, Money, Quantity},
    },
    test::TestContext,
};

fn quantity(value: i64) -> Quantity {
    Quantity::new(value).expect("positive test quantity")
}

fn money(value: Decimal) -> Money {
    Money::new(value).expect("valid test price")
}

/// Inbound by identity with only brand, model and capacity set.
pub(crate) async fn receive(
    ctx: &TestContext,
    brand: &str,
    model: &str,
    capacity: Decimal,
    units: i64,
    unit_price: Decimal,
) -> Result<InboundReceipt, StockServiceError> {
    ctx.stock
        .record_inbound(NewInbound {
            identity: ProductIdentity {
                brand: brand.to_string(),
                model: model.to_string(),
                capacity: Capacity::new(capacity).expect("valid test capacity"),
                capacity_unit: CapacityUnit::Gb,
                interface: None,
                form_factor: None,
            },
            warranty_period: None,
            quantity: quantity(units),
            unit_price: money(unit_price),
            condition_status: None,
            is_active: None,
            notes: None,
        })
        .await
}

pub(crate) async fn restock(
    ctx: &TestContext,
    product: ProductId,
    units: i64,
    unit_price: Option<Decimal>,
) -> Result<RestockReceipt, StockServiceError> {
    ctx.stock
        .add_quantity(
            product,
            NewRestock {
                quantity: quantity(units),
                unit_price: unit_price.map(money),
                notes: None,
            },
        )
        .await
}

pub(crate) async fn sell(
    ctx: &TestContext,
    product: ProductId,
    units: i64,
    unit_price: Option<Decimal>,
) -> Result<SaleReceipt, StockServiceError> {
    ctx.stock
        .record_outbound(
            product,
            NewSale {
                quantity: quantity(units),
                unit_price: unit_price.map(money),
                notes: Some("test sale".to_string()),
            },
        )
        .await
}
