//! Port for project persistence and the quota-guarded insert.

use async_trait::async_trait;

use crate::domain::{Project, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by project repository adapters.
    pub enum ProjectRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "project repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "project repository query failed: {message}",
    }
}

/// Result of a quota-guarded insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectInsertOutcome {
    /// The project was stored.
    Inserted,
    /// The owner already held `existing` projects; nothing was written.
    QuotaExceeded {
        /// Projects the owner held when the insert was refused.
        existing: usize,
    },
}

/// Port for storing and reading projects.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Insert `project` unless its owner already holds `quota` projects.
    ///
    /// Adapters perform the count and the insert atomically per owner, so
    /// concurrent inserts for one owner never overshoot the quota.
    async fn insert_within_quota(
        &self,
        project: &Project,
        quota: usize,
    ) -> Result<ProjectInsertOutcome, ProjectRepositoryError>;

    /// Every project owned by `owner_id`, in store order.
    async fn list_by_owner(&self, owner_id: &UserId)
    -> Result<Vec<Project>, ProjectRepositoryError>;
}

/// Fixture implementation for tests that do not exercise project storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureProjectRepository;

#[async_trait]
impl ProjectRepository for FixtureProjectRepository {
    async fn insert_within_quota(
        &self,
        _project: &Project,
        _quota: usize,
    ) -> Result<ProjectInsertOutcome, ProjectRepositoryError> {
        Ok(ProjectInsertOutcome::Inserted)
    }

    async fn list_by_owner(
        &self,
        _owner_id: &UserId,
    ) -> Result<Vec<Project>, ProjectRepositoryError> {
        Ok(Vec::new())
    }
}
