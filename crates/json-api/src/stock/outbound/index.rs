//! Outbound Ledger Handler

use salvo::prelude::*;

use crate::{
    extensions::*,
    stock::{errors::ledger_status_error, listing::LedgerResponse},
};

/// Outbound Ledger Handler
#[endpoint(
    tags("outbound"),
    summary = "List Outbound Transactions",
    responses(
        (status_code = StatusCode::OK, description = "Outbound transactions, newest first"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<LedgerResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let entries = state
        .app
        .ledger
        .list_outbound()
        .await
        .map_err(ledger_status_error)?;

    Ok(Json(LedgerResponse {
        transactions: entries.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use stockroom_app::domain::ledger::MockLedgerService;

    use crate::{stock::tests::make_outbound, test_helpers::TestServices};

    use super::*;

    #[tokio::test]
    async fn list_outbound_returns_sales() -> TestResult {
        let mut ledger = MockLedgerService::new();

        ledger
            .expect_list_outbound()
            .once()
            .return_once(|| Ok(vec![make_outbound(4, 2)]));

        ledger.expect_list_inbound().never();

        let service = TestServices {
            ledger,
            ..TestServices::default()
        }
        .service(Router::with_path("outbound").get(handler));

        let body: LedgerResponse = TestClient::get("http://example.com/outbound")
            .send(&service)
            .await
            .take_json()
            .await?;

        let [sale] = body.transactions.as_slice() else {
            return Err("expected exactly one sale".into());
        };

        assert_eq!(sale.id, 4);
        assert_eq!(sale.quantity, 2);
        assert_eq!(sale.unit_price, dec!(80));
        assert_eq!(sale.notes.as_deref(), Some("walk-in"));

        Ok(())
    }
}
