//! Database-specific error types and conversions.

use studygroup_core::error::StudyGroupError;

/// Database-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SurrealDB error: {0}")]
    Surreal(#[from] surrealdb::Error),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Corrupt record: {0}")]
    Corrupt(String),
}

impl From<DbError> for StudyGroupError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => StudyGroupError::NotFound { entity, id },
            other => StudyGroupError::Database(other.to_string()),
        }
    }
}
