//! Path id parsing helpers.

use salvo::{oapi::extract::PathParam, prelude::StatusError};

pub(crate) trait IdParamExt {
    /// Require a strictly positive id.
    fn into_positive_id(self, name: &str) -> Result<i64, StatusError>;
}

impl IdParamExt for PathParam<i64> {
    fn into_positive_id(self, name: &str) -> Result<i64, StatusError> {
        let id = self.into_inner();

        if id > 0 {
            Ok(id)
        } else {
            Err(StatusError::bad_request().brief(format!("{name} must be a positive integer")))
        }
    }
}
