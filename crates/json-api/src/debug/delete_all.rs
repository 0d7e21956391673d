//! Delete All Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{debug::errors::into_status_error, extensions::*};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DeletedCounts {
    pub products: u64,
    pub inbound: u64,
    pub outbound: u64,
}

/// Delete All Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DeleteAllResponse {
    pub success: bool,
    pub message: String,
    pub deleted: DeletedCounts,
}

/// Delete All Handler
///
/// Wipes sales, then restocks, then products, in one transaction.
#[endpoint(
    tags("debug"),
    summary = "Delete All Data",
    responses(
        (status_code = StatusCode::OK, description = "All data deleted"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "debug.delete_all", skip(depot), err)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<DeleteAllResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let counts = state
        .app
        .maintenance
        .wipe_all()
        .await
        .map_err(into_status_error)?;

    warn!(
        products = counts.products,
        inbound = counts.inbound,
        outbound = counts.outbound,
        "deleted all data"
    );

    Ok(Json(DeleteAllResponse {
        success: true,
        message: "All data deleted successfully".to_string(),
        deleted: DeletedCounts {
            products: counts.products,
            inbound: counts.inbound,
            outbound: counts.outbound,
        },
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use stockroom_app::domain::maintenance::{MockMaintenanceService, records::WipeCounts};

    use crate::test_helpers::TestServices;

    use super::*;

    #[tokio::test]
    async fn delete_all_reports_counts() -> TestResult {
        let mut maintenance = MockMaintenanceService::new();

        maintenance.expect_wipe_all().once().return_once(|| {
            Ok(WipeCounts {
                products: 2,
                inbound: 3,
                outbound: 1,
            })
        });

        maintenance.expect_ping().never();
        maintenance.expect_snapshot().never();
        maintenance.expect_delete_entry().never();

        let service = TestServices {
            maintenance,
            ..TestServices::default()
        }
        .service(Router::with_path("debug/delete-all").delete(handler));

        let body: DeleteAllResponse = TestClient::delete("http://example.com/debug/delete-all")
            .send(&service)
            .await
            .take_json()
            .await?;

        assert!(body.success);
        assert_eq!(body.deleted.products, 2);
        assert_eq!(body.deleted.inbound, 3);
        assert_eq!(body.deleted.outbound, 1);

        Ok(())
    }
}
