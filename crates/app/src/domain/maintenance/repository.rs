//! Maintenance Repository

use sqlx::{Postgres, Transaction, query};

use crate::domain::maintenance::records::WipeCounts;

const PING_SQL: &str = include_str!("sql/ping.sql");
const WIPE_OUTBOUND_SQL: &str = include_str!("sql/wipe_outbound.sql");
const WIPE_INBOUND_SQL: &str = include_str!("sql/wipe_inbound.sql");
const WIPE_PRODUCTS_SQL: &str = include_str!("sql/wipe_products.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgMaintenanceRepository;

impl PgMaintenanceRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn ping(&self, tx: &mut Transaction<'_, Postgres>) -> Result<(), sqlx::Error> {
        query(PING_SQL).fetch_one(&mut **tx).await?;

        Ok(())
    }

    /// Ledgers first, then the catalog they reference.
    pub(crate) async fn wipe(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<WipeCounts, sqlx::Error> {
        let outbound = query(WIPE_OUTBOUND_SQL)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        let inbound = query(WIPE_INBOUND_SQL)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        let products = query(WIPE_PRODUCTS_SQL)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(WipeCounts {
            products,
            inbound,
            outbound,
        })
    }
}
