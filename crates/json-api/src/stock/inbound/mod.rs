//! Inbound Handlers

pub(crate) mod add_quantity;
pub(crate) mod create;
pub(crate) mod index;
