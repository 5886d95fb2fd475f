//! Error types for the study group service.

use thiserror::Error;

use crate::models::study_group::Subject;
use crate::models::user::UserId;

#[derive(Debug, Error)]
pub enum StudyGroupError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("User {user_id} already has a study group for {subject}")]
    DuplicateSubject { user_id: UserId, subject: Subject },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl StudyGroupError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

pub type StudyGroupResult<T> = Result<T, StudyGroupError>;
