//! Project entity and the per-owner quota.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserId;

/// Maximum number of projects a single owner may hold.
pub const PROJECT_QUOTA: usize = 4;

/// Message returned when an owner has reached [`PROJECT_QUOTA`].
pub const PROJECT_QUOTA_MESSAGE: &str = "Project limit reached (max 4 projects)";

/// System-generated project identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(Uuid);

impl ProjectId {
    /// Generate a fresh identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for ProjectId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A named container of tasks owned by one user.
///
/// Projects are never edited or removed once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    id: ProjectId,
    owner_id: UserId,
    title: String,
}

impl Project {
    /// Build a project with a freshly generated identifier.
    ///
    /// Titles are stored verbatim; an empty title is accepted.
    #[must_use]
    pub fn create(owner_id: UserId, title: impl Into<String>) -> Self {
        Self::new(ProjectId::random(), owner_id, title)
    }

    /// Rehydrate a project from stored parts.
    #[must_use]
    pub fn new(id: ProjectId, owner_id: UserId, title: impl Into<String>) -> Self {
        Self {
            id,
            owner_id,
            title: title.into(),
        }
    }

    /// Project identifier.
    #[must_use]
    pub const fn id(&self) -> &ProjectId {
        &self.id
    }

    /// Owning user.
    #[must_use]
    pub const fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    /// Display title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }
}
