//! Study group controller — request handling over a repository.

use studygroup_core::error::{StudyGroupError, StudyGroupResult};
use studygroup_core::models::study_group::{SortingOrder, StudyGroup, StudyGroupId};
use studygroup_core::models::user::UserId;
use studygroup_core::repository::StudyGroupRepository;
use tracing::{error, info, warn};

use crate::response::ApiResponse;

/// Study group controller.
///
/// Generic over the repository implementation so that the service
/// layer has no dependency on the database crate. Every call is
/// independent; the controller holds no state besides the repository.
pub struct StudyGroupController<R: StudyGroupRepository> {
    repo: R,
}

impl<R: StudyGroupRepository> StudyGroupController<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Borrow the backing repository, for inspecting its state.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Create a study group unless its creator already has one for the
    /// same subject.
    ///
    /// The check and the create are two separate repository calls;
    /// concurrent creates for the same user and subject can both pass.
    pub async fn create_study_group(&self, group: StudyGroup) -> ApiResponse<StudyGroup> {
        respond("create_study_group", self.try_create(group).await)
    }

    async fn try_create(&self, group: StudyGroup) -> StudyGroupResult<StudyGroup> {
        if let Some(creator) = group.creator() {
            let subject = group.subject();
            if self
                .repo
                .user_has_group_for_subject(creator.id, subject)
                .await?
            {
                return Err(StudyGroupError::DuplicateSubject {
                    user_id: creator.id,
                    subject,
                });
            }
        }

        let created = self.repo.create_study_group(group).await?;
        info!(id = created.id(), subject = %created.subject(), "Study group created");
        Ok(created)
    }

    pub async fn get_study_groups(&self) -> ApiResponse<Vec<StudyGroup>> {
        respond("get_study_groups", self.repo.get_study_groups().await)
    }

    pub async fn search_study_groups(
        &self,
        subject: &str,
        order: SortingOrder,
    ) -> ApiResponse<Vec<StudyGroup>> {
        respond(
            "search_study_groups",
            self.repo.search_study_groups(subject, order).await,
        )
    }

    pub async fn join_study_group(
        &self,
        group_id: StudyGroupId,
        user_id: UserId,
    ) -> ApiResponse<()> {
        respond(
            "join_study_group",
            self.repo.join_study_group(group_id, user_id).await,
        )
    }

    pub async fn leave_study_group(
        &self,
        group_id: StudyGroupId,
        user_id: UserId,
    ) -> ApiResponse<()> {
        respond(
            "leave_study_group",
            self.repo.leave_study_group(group_id, user_id).await,
        )
    }
}

/// Translate a repository outcome into a response, logging failures.
fn respond<T>(operation: &'static str, result: StudyGroupResult<T>) -> ApiResponse<T> {
    match result {
        Ok(value) => ApiResponse::Ok(value),
        Err(err) => {
            let response = ApiResponse::from(err);
            match &response {
                ApiResponse::InternalError(message) => {
                    error!(operation, error = %message, "Request failed");
                }
                ApiResponse::BadRequest(message) | ApiResponse::NotFound(message) => {
                    warn!(operation, reason = %message, "Request rejected");
                }
                ApiResponse::Ok(_) => {}
            }
            response
        }
    }
}
