//! Study Groups API — the controller that applies business rules on
//! top of a [`StudyGroupRepository`](studygroup_core::repository::StudyGroupRepository)
//! and the response outcomes it returns.

pub mod controller;
pub mod response;

pub use controller::StudyGroupController;
pub use response::ApiResponse;
