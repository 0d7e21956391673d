//! Maintenance Records

use crate::domain::{
    ledger::records::{InboundRecord, OutboundRecord},
    products::records::ProductRecord,
};

/// Raw contents of every table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatabaseSnapshot {
    pub products: Vec<ProductRecord>,
    pub inbound: Vec<InboundRecord>,
    pub outbound: Vec<OutboundRecord>,
}

/// Rows removed by a full wipe, per table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WipeCounts {
    pub products: u64,
    pub inbound: u64,
    pub outbound: u64,
}
