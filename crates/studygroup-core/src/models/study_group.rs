//! Study group domain model.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{StudyGroupError, StudyGroupResult};
use crate::models::user::User;

pub type StudyGroupId = i64;

/// Minimum study group name length, in characters.
pub const MIN_NAME_LENGTH: usize = 5;
/// Maximum study group name length, in characters.
pub const MAX_NAME_LENGTH: usize = 30;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Subject {
    Math,
    Physics,
    Chemistry,
}

impl Subject {
    pub const ALL: [Subject; 3] = [Subject::Math, Subject::Physics, Subject::Chemistry];

    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Math => "Math",
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subject {
    type Err = StudyGroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subject::ALL
            .into_iter()
            .find(|subject| subject.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StudyGroupError::validation(format!("invalid subject: {s}")))
    }
}

/// Order in which search results are sorted by creation date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SortingOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortingOrder {
    /// Stable sort of `groups` by `create_date` in this order.
    pub fn sort_by_create_date(&self, groups: &mut [StudyGroup]) {
        match self {
            SortingOrder::Ascending => groups.sort_by(|a, b| a.create_date.cmp(&b.create_date)),
            SortingOrder::Descending => groups.sort_by(|a, b| b.create_date.cmp(&a.create_date)),
        }
    }
}

impl fmt::Display for SortingOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortingOrder::Ascending => f.write_str("Ascending"),
            SortingOrder::Descending => f.write_str("Descending"),
        }
    }
}

impl FromStr for SortingOrder {
    type Err = StudyGroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ascending" | "asc" => Ok(SortingOrder::Ascending),
            "descending" | "desc" => Ok(SortingOrder::Descending),
            _ => Err(StudyGroupError::InvalidArgument(format!(
                "unknown sort order: {s}"
            ))),
        }
    }
}

/// A study group for a single subject.
///
/// Name and subject are fixed at construction. Only the member list
/// changes afterwards, and changing it never re-validates the rest of
/// the group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudyGroup {
    id: StudyGroupId,
    name: String,
    subject: Subject,
    create_date: DateTime<Utc>,
    members: Vec<User>,
}

impl StudyGroup {
    /// Build a study group, rejecting names outside
    /// [`MIN_NAME_LENGTH`]..=[`MAX_NAME_LENGTH`] characters.
    ///
    /// `id` is 0 for groups that have not been stored yet.
    pub fn new(
        id: StudyGroupId,
        name: impl Into<String>,
        subject: Subject,
        create_date: DateTime<Utc>,
        members: Vec<User>,
    ) -> StudyGroupResult<Self> {
        let name = name.into();
        let length = name.chars().count();
        if !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&length) {
            return Err(StudyGroupError::validation(format!(
                "name length must be between {MIN_NAME_LENGTH} and {MAX_NAME_LENGTH} \
                 characters, got {length}"
            )));
        }

        Ok(Self {
            id,
            name,
            subject,
            create_date,
            members,
        })
    }

    /// Returns the same group carrying the identity assigned by storage.
    pub fn with_id(self, id: StudyGroupId) -> Self {
        Self { id, ..self }
    }

    pub fn id(&self) -> StudyGroupId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subject(&self) -> Subject {
        self.subject
    }

    pub fn create_date(&self) -> DateTime<Utc> {
        self.create_date
    }

    pub fn members(&self) -> &[User] {
        &self.members
    }

    /// The user who created the group: the first member, if any.
    pub fn creator(&self) -> Option<&User> {
        self.members.first()
    }

    /// Append a member. Users already present are added again.
    pub fn add_member(&mut self, user: User) {
        self.members.push(user);
    }

    /// Remove the first occurrence of `user`. Absent users are ignored.
    pub fn remove_member(&mut self, user: &User) {
        if let Some(pos) = self.members.iter().position(|m| m == user) {
            self.members.remove(pos);
        }
    }

    /// True when the name or subject contains `filter`.
    pub fn matches_filter(&self, filter: &str) -> bool {
        self.name.contains(filter) || self.subject.as_str().contains(filter)
    }
}
