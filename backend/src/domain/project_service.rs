//! Project lifecycle service.
//!
//! Implements [`ProjectCommand`] and [`ProjectQuery`] over a
//! [`ProjectRepository`]. The quota check and the insert happen in one
//! repository call, so the repository decides atomically whether the owner
//! still has room.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, warn};

use crate::domain::ports::{
    CreateProjectRequest, ListProjectsRequest, ProjectCommand, ProjectInsertOutcome,
    ProjectQuery, ProjectRepository,
};
use crate::domain::store_call::{DEFAULT_STORE_TIMEOUT, bounded};
use crate::domain::{Error, PROJECT_QUOTA, PROJECT_QUOTA_MESSAGE, Project};

/// Project service implementing the project driving ports.
#[derive(Clone)]
pub struct ProjectLifecycleService<R> {
    project_repo: Arc<R>,
    store_timeout: Duration,
}

impl<R> ProjectLifecycleService<R> {
    /// Create a service using the default store deadline.
    #[must_use]
    pub const fn new(project_repo: Arc<R>) -> Self {
        Self {
            project_repo,
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    /// Override the deadline applied to each store call.
    #[must_use]
    pub const fn with_store_timeout(mut self, store_timeout: Duration) -> Self {
        self.store_timeout = store_timeout;
        self
    }
}

#[async_trait]
impl<R> ProjectCommand for ProjectLifecycleService<R>
where
    R: ProjectRepository,
{
    async fn create_project(&self, request: CreateProjectRequest) -> Result<Project, Error> {
        let owner_id = *request.identity.user_id();
        let project = Project::create(owner_id, request.title);

        let outcome = bounded(
            self.store_timeout,
            "insert_project",
            "Failed to create project",
            self.project_repo
                .insert_within_quota(&project, PROJECT_QUOTA),
        )
        .await?;

        match outcome {
            ProjectInsertOutcome::Inserted => {
                debug!(project_id = %project.id(), owner_id = %owner_id, "project created");
                Ok(project)
            }
            ProjectInsertOutcome::QuotaExceeded { existing } => {
                warn!(owner_id = %owner_id, existing, "project quota reached");
                Err(Error::quota_exceeded(PROJECT_QUOTA_MESSAGE)
                    .with_details(json!({ "limit": PROJECT_QUOTA, "existing": existing })))
            }
        }
    }
}

#[async_trait]
impl<R> ProjectQuery for ProjectLifecycleService<R>
where
    R: ProjectRepository,
{
    async fn list_projects(&self, request: ListProjectsRequest) -> Result<Vec<Project>, Error> {
        let owner_id = request.identity.user_id();
        let projects = bounded(
            self.store_timeout,
            "list_projects",
            "Failed to fetch projects",
            self.project_repo.list_by_owner(owner_id),
        )
        .await?;
        debug!(owner_id = %owner_id, count = projects.len(), "projects listed");
        Ok(projects)
    }
}

#[cfg(test)]
#[path = "project_service_tests.rs"]
mod tests;
