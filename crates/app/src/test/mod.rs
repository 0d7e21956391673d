//! Service-level test harness.

mod context;
pub(crate) mod db;
pub(crate) mod helpers;

pub(crate) use context::TestContext;
