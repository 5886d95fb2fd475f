//! User domain model.

use serde::{Deserialize, Serialize};

pub type UserId = i64;

/// A reference to a user. Study groups hold users by reference only;
/// user accounts live outside this service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct User {
    pub id: UserId,
}

impl User {
    pub fn new(id: UserId) -> Self {
        Self { id }
    }
}

impl From<UserId> for User {
    fn from(id: UserId) -> Self {
        Self::new(id)
    }
}
