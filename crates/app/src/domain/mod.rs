//! Domain

pub mod ledger;
pub mod maintenance;
pub mod products;
pub mod profit;
pub mod stock;
pub mod values;
