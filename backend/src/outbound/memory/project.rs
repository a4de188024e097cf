//! In-memory project repository.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::ports::{ProjectInsertOutcome, ProjectRepository, ProjectRepositoryError};
use crate::domain::{Project, UserId};

/// Thread-safe in-memory project repository.
///
/// Projects are kept in insertion order. The quota check and the insert run
/// under one write lock, so concurrent inserts for an owner cannot overshoot.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    projects: Arc<RwLock<Vec<Project>>>,
}

impl InMemoryProjectRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl std::fmt::Display) -> ProjectRepositoryError {
    ProjectRepositoryError::query(format!("project store lock poisoned: {err}"))
}

fn owned_by<'a>(projects: &'a [Project], owner_id: &'a UserId) -> impl Iterator<Item = &'a Project> {
    projects
        .iter()
        .filter(move |project| project.owner_id() == owner_id)
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn insert_within_quota(
        &self,
        project: &Project,
        quota: usize,
    ) -> Result<ProjectInsertOutcome, ProjectRepositoryError> {
        let mut projects = self.projects.write().map_err(poisoned)?;
        let existing = owned_by(&projects, project.owner_id()).count();
        if existing >= quota {
            return Ok(ProjectInsertOutcome::QuotaExceeded { existing });
        }
        projects.push(project.clone());
        Ok(ProjectInsertOutcome::Inserted)
    }

    async fn list_by_owner(
        &self,
        owner_id: &UserId,
    ) -> Result<Vec<Project>, ProjectRepositoryError> {
        let projects = self.projects.read().map_err(poisoned)?;
        Ok(owned_by(&projects, owner_id).cloned().collect())
    }
}
