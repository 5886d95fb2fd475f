//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. Implementations own their
//! concurrency discipline: nothing in the service layer serializes
//! the duplicate-subject check against the create that follows it.

use crate::error::StudyGroupResult;
use crate::models::study_group::{SortingOrder, StudyGroup, StudyGroupId, Subject};
use crate::models::user::UserId;

pub trait StudyGroupRepository: Send + Sync {
    /// Persist a new group and return it with its assigned id.
    fn create_study_group(
        &self,
        group: StudyGroup,
    ) -> impl Future<Output = StudyGroupResult<StudyGroup>> + Send;

    /// All groups, in storage order.
    fn get_study_groups(&self) -> impl Future<Output = StudyGroupResult<Vec<StudyGroup>>> + Send;

    fn get_study_group(
        &self,
        id: StudyGroupId,
    ) -> impl Future<Output = StudyGroupResult<StudyGroup>> + Send;

    /// Groups whose name or subject contains `filter`, sorted by
    /// creation date. No match yields an empty vec, not an error.
    /// Matching is case-sensitive: `"math"` does not match `Math`.
    fn search_study_groups(
        &self,
        filter: &str,
        order: SortingOrder,
    ) -> impl Future<Output = StudyGroupResult<Vec<StudyGroup>>> + Send;

    /// Add a user to a group's members.
    fn join_study_group(
        &self,
        group_id: StudyGroupId,
        user_id: UserId,
    ) -> impl Future<Output = StudyGroupResult<()>> + Send;

    /// Remove a user from a group's members. Non-members are ignored;
    /// an unknown group is `NotFound`.
    fn leave_study_group(
        &self,
        group_id: StudyGroupId,
        user_id: UserId,
    ) -> impl Future<Output = StudyGroupResult<()>> + Send;

    /// Whether the user already belongs to a group for `subject`.
    fn user_has_group_for_subject(
        &self,
        user_id: UserId,
        subject: Subject,
    ) -> impl Future<Output = StudyGroupResult<bool>> + Send;
}
