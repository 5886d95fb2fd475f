//! Study Groups Core — domain models, error types and the repository
//! contract shared by the storage and service crates.

pub mod error;
pub mod models;
pub mod repository;

pub use error::{StudyGroupError, StudyGroupResult};
pub use models::study_group::{SortingOrder, StudyGroup, StudyGroupId, Subject};
pub use models::user::{User, UserId};
pub use repository::StudyGroupRepository;
