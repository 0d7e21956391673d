//! Delete Product Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use stockroom_app::domain::products::records::ProductId;

use crate::{extensions::*, products::errors::into_status_error};

/// Product Deleted Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductDeletedResponse {
    pub success: bool,
    pub message: String,
}

/// Delete Product Handler
///
/// Removes the product together with its inbound and outbound history.
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    responses(
        (status_code = StatusCode::OK, description = "Product deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "products.delete", skip(id, depot), err)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<ProductDeletedResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let id = ProductId::from_i64(id.into_positive_id("id")?);

    state
        .app
        .products
        .delete_product(id)
        .await
        .map_err(into_status_error)?;

    info!(product_id = %id, "deleted product");

    Ok(Json(ProductDeletedResponse {
        success: true,
        message: "Product deleted successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use stockroom_app::domain::products::{MockProductsService, ProductsServiceError};

    use crate::test_helpers::{TestServices, strict_products_mock};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        TestServices {
            products,
            ..TestServices::default()
        }
        .service(Router::with_path("products/{id}").delete(handler))
    }

    #[tokio::test]
    async fn delete_product_success() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_delete_product()
            .once()
            .withf(|id| *id == ProductId::from_i64(5))
            .return_once(|_| Ok(()));

        products.expect_list_products().never();
        products.expect_get_product().never();
        products.expect_update_product().never();

        let response: ProductDeletedResponse = TestClient::delete("http://example.com/products/5")
            .send(&make_service(products))
            .await
            .take_json()
            .await?;

        assert!(response.success);

        Ok(())
    }

    #[tokio::test]
    async fn delete_product_missing_returns_404() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_delete_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::NotFound));

        products.expect_list_products().never();
        products.expect_get_product().never();
        products.expect_update_product().never();

        let res = TestClient::delete("http://example.com/products/5")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn delete_product_negative_id_returns_400() -> TestResult {
        let res = TestClient::delete("http://example.com/products/-5")
            .send(&make_service(strict_products_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
