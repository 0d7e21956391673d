//! Debug Errors

use salvo::http::StatusError;
use tracing::error;

use stockroom_app::domain::maintenance::MaintenanceServiceError;

pub(crate) fn into_status_error(error: MaintenanceServiceError) -> StatusError {
    match error {
        MaintenanceServiceError::NotFound => {
            StatusError::not_found().brief("Transaction not found")
        }
        MaintenanceServiceError::Sql(source) => {
            error!("maintenance storage failure: {source}");

            StatusError::internal_server_error().brief("Database operation failed")
        }
    }
}
