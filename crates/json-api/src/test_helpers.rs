//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use stockroom_app::{
    context::AppContext,
    domain::{
        ledger::MockLedgerService, maintenance::MockMaintenanceService,
        products::MockProductsService, profit::MockProfitService, stock::MockStockService,
    },
};

use crate::state::State;

/// Mocked services behind a handler under test. Anything not replaced panics when called.
pub(crate) struct TestServices {
    pub products: MockProductsService,
    pub ledger: MockLedgerService,
    pub stock: MockStockService,
    pub profit: MockProfitService,
    pub maintenance: MockMaintenanceService,
}

impl Default for TestServices {
    fn default() -> Self {
        Self {
            products: strict_products_mock(),
            ledger: strict_ledger_mock(),
            stock: strict_stock_mock(),
            profit: strict_profit_mock(),
            maintenance: strict_maintenance_mock(),
        }
    }
}

impl TestServices {
    pub(crate) fn state(self) -> Arc<State> {
        State::shared(AppContext::from_services(
            Arc::new(self.products),
            Arc::new(self.ledger),
            Arc::new(self.stock),
            Arc::new(self.profit),
            Arc::new(self.maintenance),
        ))
    }

    pub(crate) fn service(self, route: Router) -> Service {
        Service::new(Router::new().hoop(inject(self.state())).push(route))
    }
}

pub(crate) fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_update_product().never();
    products.expect_delete_product().never();

    products
}

pub(crate) fn strict_ledger_mock() -> MockLedgerService {
    let mut ledger = MockLedgerService::new();

    ledger.expect_list_inbound().never();
    ledger.expect_list_outbound().never();

    ledger
}

pub(crate) fn strict_stock_mock() -> MockStockService {
    let mut stock = MockStockService::new();

    stock.expect_record_inbound().never();
    stock.expect_add_quantity().never();
    stock.expect_record_outbound().never();

    stock
}

pub(crate) fn strict_profit_mock() -> MockProfitService {
    let mut profit = MockProfitService::new();

    profit.expect_profit_report().never();
    profit.expect_profit_summary().never();

    profit
}

pub(crate) fn strict_maintenance_mock() -> MockMaintenanceService {
    let mut maintenance = MockMaintenanceService::new();

    maintenance.expect_ping().never();
    maintenance.expect_snapshot().never();
    maintenance.expect_wipe_all().never();
    maintenance.expect_delete_entry().never();

    maintenance
}
