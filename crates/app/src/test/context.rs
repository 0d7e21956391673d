//! Test context for service-level integration tests.

use crate::{
    database::Db,
    domain::{
        ledger::PgLedgerService, maintenance::PgMaintenanceService,
        products::PgProductsService, profit::PgProfitService, stock::PgStockService,
    },
};

use super::db::TestDb;

pub(crate) struct TestContext {
    pub db: TestDb,
    pub products: PgProductsService,
    pub ledger: PgLedgerService,
    pub stock: PgStockService,
    pub profit: PgProfitService,
    pub maintenance: PgMaintenanceService,
}

impl TestContext {
    pub(crate) async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        Self {
            products: PgProductsService::new(db.clone()),
            ledger: PgLedgerService::new(db.clone()),
            stock: PgStockService::new(db.clone()),
            profit: PgProfitService::new(db.clone()),
            maintenance: PgMaintenanceService::new(db),
            db: test_db,
        }
    }
}
