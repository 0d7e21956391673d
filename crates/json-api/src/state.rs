//! State

use std::sync::Arc;

use stockroom_app::context::AppContext;

/// Shared by every handler through the depot.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
}

impl State {
    #[must_use]
    pub(crate) fn shared(app: AppContext) -> Arc<Self> {
        Arc::new(Self { app })
    }
}
