//! Driving port for task reads.

use async_trait::async_trait;

use crate::domain::{AuthenticatedIdentity, Error, ProjectId, Task, TaskStatusSummary};

/// Request scoped to one project's tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListTasksRequest {
    /// Authenticated caller. Not checked against the project owner.
    pub identity: AuthenticatedIdentity,
    /// Project whose tasks are read.
    pub project_id: ProjectId,
}

/// Driving port for task read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskQuery: Send + Sync {
    /// Tasks filed under the project, in store order.
    async fn list_tasks(&self, request: ListTasksRequest) -> Result<Vec<Task>, Error>;

    /// Per-status counts of the project's tasks.
    async fn summarize_tasks(&self, request: ListTasksRequest)
    -> Result<TaskStatusSummary, Error>;
}

/// Fixture query reporting an empty project.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTaskQuery;

#[async_trait]
impl TaskQuery for FixtureTaskQuery {
    async fn list_tasks(&self, _request: ListTasksRequest) -> Result<Vec<Task>, Error> {
        Ok(Vec::new())
    }

    async fn summarize_tasks(
        &self,
        _request: ListTasksRequest,
    ) -> Result<TaskStatusSummary, Error> {
        Ok(TaskStatusSummary::default())
    }
}
