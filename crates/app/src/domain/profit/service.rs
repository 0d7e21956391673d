//! Profit service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::profit::{
        errors::ProfitServiceError,
        report::{ProfitLine, ProfitReport, ProfitSummary},
        repository::PgProfitRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProfitService {
    db: Db,
    repository: PgProfitRepository,
}

impl PgProfitService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProfitRepository::new(),
        }
    }
}

#[async_trait]
impl ProfitService for PgProfitService {
    async fn profit_report(&self) -> Result<ProfitReport, ProfitServiceError> {
        let mut tx = self.db.begin().await?;

        let rows = self.repository.list_sale_profits(&mut tx).await?;

        tx.commit().await?;

        Ok(ProfitReport::from_lines(
            rows.into_iter().map(ProfitLine::from).collect(),
        ))
    }

    async fn profit_summary(&self) -> Result<ProfitSummary, ProfitServiceError> {
        let mut tx = self.db.begin().await?;

        let total_profit = self.repository.total_profit(&mut tx).await?;

        tx.commit().await?;

        Ok(ProfitSummary { total_profit })
    }
}

#[automock]
#[async_trait]
pub trait ProfitService: Send + Sync {
    /// Every sale with its average-cost profit, newest first.
    async fn profit_report(&self) -> Result<ProfitReport, ProfitServiceError>;

    /// Total profit over all sales, without building the report.
    async fn profit_summary(&self) -> Result<ProfitSummary, ProfitServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use testresult::TestResult;

    use crate::{
        domain::{
            ledger::records::LedgerKind,
            maintenance::MaintenanceService,
            products::{ProductsService, data::ProductUpdate},
            values::Money,
        },
        test::{
            TestContext,
            helpers::{receive, restock, sell},
        },
    };

    use super::*;

    #[tokio::test]
    async fn empty_store_has_no_profit() -> TestResult {
        let ctx = TestContext::new().await;

        let report = ctx.profit.profit_report().await?;
        let summary = ctx.profit.profit_summary().await?;

        assert!(report.transactions.is_empty());
        assert_eq!(report.total_profit, Decimal::ZERO);
        assert_eq!(summary.total_profit, Decimal::ZERO);

        Ok(())
    }

    #[tokio::test]
    async fn cost_is_unweighted_mean_of_inbound_prices() -> TestResult {
        let ctx = TestContext::new().await;

        let received = receive(&ctx, "A", "X", dec!(1), 100, dec!(10)).await?;
        restock(&ctx, received.product_id, 1, Some(dec!(30))).await?;
        sell(&ctx, received.product_id, 2, Some(dec!(25))).await?;

        let report = ctx.profit.profit_report().await?;
        let line = report.transactions.first().expect("a profit line");

        assert_eq!(line.avg_cost, dec!(20));
        assert_eq!(line.profit, dec!(10));
        assert_eq!(line.revenue, dec!(50));

        Ok(())
    }

    #[tokio::test]
    async fn cost_ignores_edited_catalog_price() -> TestResult {
        let ctx = TestContext::new().await;

        let received = receive(&ctx, "A", "X", dec!(1), 5, dec!(10)).await?;

        ctx.products
            .update_product(
                received.product_id,
                ProductUpdate {
                    unit_price: Some(Money::new(dec!(99))?),
                    ..ProductUpdate::default()
                },
            )
            .await?;

        sell(&ctx, received.product_id, 1, Some(dec!(15))).await?;

        let report = ctx.profit.profit_report().await?;
        let line = report.transactions.first().expect("a profit line");

        assert_eq!(line.avg_cost, dec!(10));
        assert_eq!(line.product_price, dec!(99));
        assert_eq!(line.profit, dec!(5));

        Ok(())
    }

    #[tokio::test]
    async fn cost_falls_back_to_catalog_price_without_inbound_history() -> TestResult {
        let ctx = TestContext::new().await;

        let received = receive(&ctx, "A", "X", dec!(1), 10, dec!(50)).await?;
        sell(&ctx, received.product_id, 2, Some(dec!(80))).await?;

        ctx.products
            .update_product(
                received.product_id,
                ProductUpdate {
                    unit_price: Some(Money::new(dec!(40))?),
                    ..ProductUpdate::default()
                },
            )
            .await?;

        ctx.maintenance
            .delete_entry(LedgerKind::Inbound, received.entry_id.into_i64())
            .await?;

        let report = ctx.profit.profit_report().await?;
        let summary = ctx.profit.profit_summary().await?;
        let line = report.transactions.first().expect("a profit line");

        assert_eq!(line.avg_cost, dec!(40));
        assert_eq!(line.product_price, dec!(40));
        assert_eq!(line.profit, dec!(80));
        assert_eq!(summary.total_profit, report.total_profit);
        assert_eq!(summary.total_profit, dec!(80));

        Ok(())
    }

    #[tokio::test]
    async fn profit_uses_unrounded_mean_cost() -> TestResult {
        let ctx = TestContext::new().await;

        let received = receive(&ctx, "A", "X", dec!(1), 10, dec!(10)).await?;
        restock(&ctx, received.product_id, 1, Some(dec!(10.01))).await?;
        restock(&ctx, received.product_id, 1, Some(dec!(10.01))).await?;
        sell(&ctx, received.product_id, 7, Some(dec!(9.99))).await?;

        let report = ctx.profit.profit_report().await?;
        let line = report.transactions.first().expect("a profit line");

        assert_eq!(line.avg_cost, dec!(10.01));
        assert_eq!(line.profit, dec!(-0.12));

        Ok(())
    }

    #[tokio::test]
    async fn report_lists_sales_newest_first() -> TestResult {
        let ctx = TestContext::new().await;

        let received = receive(&ctx, "A", "X", dec!(1), 10, dec!(10)).await?;
        let first = sell(&ctx, received.product_id, 1, Some(dec!(12))).await?;
        let second = sell(&ctx, received.product_id, 1, Some(dec!(14))).await?;

        let report = ctx.profit.profit_report().await?;
        let ids: Vec<_> = report.transactions.iter().map(|l| l.transaction_id).collect();

        assert_eq!(ids, vec![second.entry_id, first.entry_id]);
        assert_eq!(report.transaction_count, 2);

        Ok(())
    }

    #[tokio::test]
    async fn summary_matches_report_total() -> TestResult {
        let ctx = TestContext::new().await;

        let a = receive(&ctx, "A", "X", dec!(1), 10, dec!(10)).await?;
        restock(&ctx, a.product_id, 1, Some(dec!(10.01))).await?;
        restock(&ctx, a.product_id, 1, Some(dec!(10.01))).await?;
        let b = receive(&ctx, "B", "Y", dec!(2), 10, dec!(33.33)).await?;

        sell(&ctx, a.product_id, 3, Some(dec!(11))).await?;
        sell(&ctx, a.product_id, 7, Some(dec!(9.99))).await?;
        sell(&ctx, b.product_id, 2, None).await?;

        let report = ctx.profit.profit_report().await?;
        let summary = ctx.profit.profit_summary().await?;
        let summed: Decimal = report.transactions.iter().map(|l| l.profit).sum();

        assert_eq!(summary.total_profit, summed);
        assert_eq!(summary.total_profit, report.total_profit);

        Ok(())
    }
}
