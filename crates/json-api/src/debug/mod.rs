//! Administrative endpoints, mounted only when debug routes are enabled.

mod errors;
pub(crate) mod data;
pub(crate) mod delete_all;
pub(crate) mod delete_transaction;
pub(crate) mod test_connection;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

/// Debug Action Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DebugMessageResponse {
    pub success: bool,
    pub message: String,
}

impl DebugMessageResponse {
    fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }
}
