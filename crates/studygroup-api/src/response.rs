//! Structured outcomes returned by the controller.

use serde::Serialize;
use studygroup_core::error::StudyGroupError;

/// Outcome of a controller call. Failures are values, not errors, so
/// callers always get a response they can render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "body")]
pub enum ApiResponse<T> {
    Ok(T),
    BadRequest(String),
    NotFound(String),
    InternalError(String),
}

impl<T> ApiResponse<T> {
    /// HTTP-equivalent status code of this outcome.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiResponse::Ok(_) => 200,
            ApiResponse::BadRequest(_) => 400,
            ApiResponse::NotFound(_) => 404,
            ApiResponse::InternalError(_) => 500,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, ApiResponse::Ok(_))
    }

    /// The success payload, if any.
    pub fn ok(self) -> Option<T> {
        match self {
            ApiResponse::Ok(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<StudyGroupError> for ApiResponse<T> {
    fn from(err: StudyGroupError) -> Self {
        match err {
            StudyGroupError::Validation { .. }
            | StudyGroupError::DuplicateSubject { .. }
            | StudyGroupError::InvalidArgument(_) => ApiResponse::BadRequest(err.to_string()),
            StudyGroupError::NotFound { .. } => ApiResponse::NotFound(err.to_string()),
            StudyGroupError::Database(_) | StudyGroupError::Internal(_) => {
                ApiResponse::InternalError(err.to_string())
            }
        }
    }
}
