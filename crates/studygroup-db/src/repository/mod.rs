//! SurrealDB repository implementations.

mod study_group;

pub use study_group::SurrealStudyGroupRepository;
