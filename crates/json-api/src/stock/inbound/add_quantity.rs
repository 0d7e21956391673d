//! Add Quantity Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    extensions::*,
    observability::{StockDirection, record_stock_movement},
    stock::{
        errors::into_status_error,
        movement::{Movement, MovementRequest},
    },
};

/// Quantity Added Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct QuantityAddedResponse {
    pub success: bool,
    pub message: String,
    pub product_id: i64,
    pub new_quantity: i64,
}

/// Add Quantity Handler
///
/// Restocks a known product. The catalog price is left unchanged.
#[endpoint(
    tags("inbound"),
    summary = "Add Quantity",
    responses(
        (status_code = StatusCode::OK, description = "Quantity added"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "inbound.add_quantity", skip(json, depot), err)]
pub(crate) async fn handler(
    json: JsonBody<MovementRequest>,
    depot: &mut Depot,
) -> Result<Json<QuantityAddedResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let (product, restock) = Movement::try_from(json.into_inner())
        .or_400("invalid restock")?
        .into_restock();

    let units = restock.quantity.get();

    let receipt = state
        .app
        .stock
        .add_quantity(product, restock)
        .await
        .map_err(into_status_error)?;

    record_stock_movement(StockDirection::Inbound, units);

    info!(
        product_id = %receipt.product_id,
        entry_id = %receipt.entry_id,
        quantity = units,
        new_quantity = receipt.quantity,
        "added quantity"
    );

    Ok(Json(QuantityAddedResponse {
        success: true,
        message: "Quantity added successfully".to_string(),
        product_id: receipt.product_id.into_i64(),
        new_quantity: receipt.quantity,
    }))
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use stockroom_app::domain::{
        ledger::records::InboundId,
        products::records::ProductId,
        stock::{MockStockService, StockServiceError, records::RestockReceipt},
        values::Money,
    };

    use crate::test_helpers::{TestServices, strict_stock_mock};

    use super::*;

    fn make_service(stock: MockStockService) -> Service {
        TestServices {
            stock,
            ..TestServices::default()
        }
        .service(Router::with_path("inbound/add-quantity").post(handler))
    }

    #[tokio::test]
    async fn add_quantity_success() -> TestResult {
        let mut stock = MockStockService::new();

        stock
            .expect_add_quantity()
            .once()
            .withf(|product, restock| {
                *product == ProductId::from_i64(3)
                    && restock.quantity.get() == 4
                    && restock.unit_price.is_none()
                    && restock.notes.as_deref() == Some("top up")
            })
            .return_once(|_, _| {
                Ok(RestockReceipt {
                    product_id: ProductId::from_i64(3),
                    quantity: 14,
                    entry_id: InboundId::from_i64(9),
                })
            });

        stock.expect_record_inbound().never();
        stock.expect_record_outbound().never();

        let mut res = TestClient::post("http://example.com/inbound/add-quantity")
            .json(&json!({ "product_id": 3, "quantity": 4, "notes": "top up" }))
            .send(&make_service(stock))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: QuantityAddedResponse = res.take_json().await?;

        assert!(body.success);
        assert_eq!(body.product_id, 3);
        assert_eq!(body.new_quantity, 14);

        Ok(())
    }

    #[tokio::test]
    async fn add_quantity_passes_supplied_price() -> TestResult {
        let mut stock = MockStockService::new();

        stock
            .expect_add_quantity()
            .once()
            .withf(|_, restock| restock.unit_price.map(Money::amount) == Some(dec!(42)))
            .return_once(|product, _| {
                Ok(RestockReceipt {
                    product_id: product,
                    quantity: 1,
                    entry_id: InboundId::from_i64(1),
                })
            });

        stock.expect_record_inbound().never();
        stock.expect_record_outbound().never();

        let res = TestClient::post("http://example.com/inbound/add-quantity")
            .json(&json!({ "product_id": 3, "quantity": 1, "unit_price": 42 }))
            .send(&make_service(stock))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn add_quantity_missing_product_returns_404() -> TestResult {
        let mut stock = MockStockService::new();

        stock
            .expect_add_quantity()
            .once()
            .return_once(|_, _| Err(StockServiceError::NotFound));

        stock.expect_record_inbound().never();
        stock.expect_record_outbound().never();

        let res = TestClient::post("http://example.com/inbound/add-quantity")
            .json(&json!({ "product_id": 99, "quantity": 1 }))
            .send(&make_service(stock))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn add_quantity_rejects_invalid_quantity() -> TestResult {
        for body in [
            json!({ "product_id": 3 }),
            json!({ "product_id": 3, "quantity": 0 }),
            json!({ "quantity": 2 }),
        ] {
            let res = TestClient::post("http://example.com/inbound/add-quantity")
                .json(&body)
                .send(&make_service(strict_stock_mock()))
                .await;

            assert_eq!(
                res.status_code,
                Some(StatusCode::BAD_REQUEST),
                "{body} should be rejected"
            );
        }

        Ok(())
    }
}
