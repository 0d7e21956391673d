//! Profit Errors

use salvo::http::StatusError;
use tracing::error;

use stockroom_app::domain::profit::ProfitServiceError;

pub(crate) fn into_status_error(error: ProfitServiceError) -> StatusError {
    match error {
        ProfitServiceError::Sql(source) => {
            error!("profit storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
