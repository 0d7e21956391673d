//! Maintenance service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        ledger::{records::LedgerKind, repository::PgLedgerRepository},
        maintenance::{
            errors::MaintenanceServiceError,
            records::{DatabaseSnapshot, WipeCounts},
            repository::PgMaintenanceRepository,
        },
        products::repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgMaintenanceService {
    db: Db,
    repository: PgMaintenanceRepository,
    products: PgProductsRepository,
    ledger: PgLedgerRepository,
}

impl PgMaintenanceService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgMaintenanceRepository::new(),
            products: PgProductsRepository::new(),
            ledger: PgLedgerRepository::new(),
        }
    }
}

#[async_trait]
impl MaintenanceService for PgMaintenanceService {
    async fn ping(&self) -> Result<(), MaintenanceServiceError> {
        let mut tx = self.db.begin().await?;

        self.repository.ping(&mut tx).await?;

        tx.commit().await?;

        Ok(())
    }

    async fn snapshot(&self) -> Result<DatabaseSnapshot, MaintenanceServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.products.dump_products(&mut tx).await?;
        let inbound = self.ledger.dump_inbound(&mut tx).await?;
        let outbound = self.ledger.dump_outbound(&mut tx).await?;

        tx.commit().await?;

        Ok(DatabaseSnapshot {
            products,
            inbound,
            outbound,
        })
    }

    async fn wipe_all(&self) -> Result<WipeCounts, MaintenanceServiceError> {
        let mut tx = self.db.begin().await?;

        let counts = self.repository.wipe(&mut tx).await?;

        tx.commit().await?;

        info!(
            products = counts.products,
            inbound = counts.inbound,
            outbound = counts.outbound,
            "store wiped"
        );

        Ok(counts)
    }

    async fn delete_entry(&self, kind: LedgerKind, id: i64) -> Result<(), MaintenanceServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.ledger.delete_entry(&mut tx, kind, id).await?;

        if rows_affected == 0 {
            return Err(MaintenanceServiceError::NotFound);
        }

        tx.commit().await?;

        info!(%kind, id, "ledger entry deleted");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait MaintenanceService: Send + Sync {
    /// Round-trip to the database.
    async fn ping(&self) -> Result<(), MaintenanceServiceError>;

    /// Every row of every table.
    async fn snapshot(&self) -> Result<DatabaseSnapshot, MaintenanceServiceError>;

    /// Delete all sales, restocks and products in one transaction.
    async fn wipe_all(&self) -> Result<WipeCounts, MaintenanceServiceError>;

    /// Delete one ledger row. Product quantities are not adjusted.
    async fn delete_entry(&self, kind: LedgerKind, id: i64) -> Result<(), MaintenanceServiceError>;
}
