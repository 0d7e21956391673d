//! Depot helper extensions.

use std::sync::Arc;

use salvo::prelude::{Depot, StatusError};

use crate::state::State;

/// Access to the shared application state injected by `affix_state`.
pub(crate) trait DepotExt {
    fn state_or_500(&self) -> Result<&Arc<State>, StatusError>;
}

impl DepotExt for Depot {
    fn state_or_500(&self) -> Result<&Arc<State>, StatusError> {
        self.obtain::<Arc<State>>()
            .map_err(|_missing| StatusError::internal_server_error())
    }
}
