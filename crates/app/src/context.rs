//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;
use tracing::info;

use crate::{
    database::{self, Db, PoolSettings},
    domain::{
        ledger::{LedgerService, PgLedgerService},
        maintenance::{MaintenanceService, PgMaintenanceService},
        products::{PgProductsService, ProductsService},
        profit::{PgProfitService, ProfitService},
        stock::{PgStockService, StockService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrations(#[source] MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub ledger: Arc<dyn LedgerService>,
    pub stock: Arc<dyn StockService>,
    pub profit: Arc<dyn ProfitService>,
    pub maintenance: Arc<dyn MaintenanceService>,
    db: Option<Db>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or applying migrations fails.
    pub async fn from_database_url(
        url: &str,
        settings: PoolSettings,
        run_migrations: bool,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url, settings)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        if run_migrations {
            db.migrate().await.map_err(AppInitError::Migrations)?;

            info!("database migrations applied");
        }

        Ok(Self::from_db(db))
    }

    /// Build application context around an existing database handle.
    #[must_use]
    pub fn from_db(db: Db) -> Self {
        Self {
            products: Arc::new(PgProductsService::new(db.clone())),
            ledger: Arc::new(PgLedgerService::new(db.clone())),
            stock: Arc::new(PgStockService::new(db.clone())),
            profit: Arc::new(PgProfitService::new(db.clone())),
            maintenance: Arc::new(PgMaintenanceService::new(db.clone())),
            db: Some(db),
        }
    }

    /// Build a context from pre-built services, without an owned database handle.
    #[must_use]
    pub fn from_services(
        products: Arc<dyn ProductsService>,
        ledger: Arc<dyn LedgerService>,
        stock: Arc<dyn StockService>,
        profit: Arc<dyn ProfitService>,
        maintenance: Arc<dyn MaintenanceService>,
    ) -> Self {
        Self {
            products,
            ledger,
            stock,
            profit,
            maintenance,
            db: None,
        }
    }

    /// Close the underlying connection pool, if this context owns one.
    pub async fn close(&self) {
        if let Some(db) = &self.db {
            db.close().await;

            info!("database pool closed");
        }
    }
}
