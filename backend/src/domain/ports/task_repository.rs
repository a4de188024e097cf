//! Port for task persistence.

use async_trait::async_trait;

use crate::domain::{ProjectId, Task, TaskId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by task repository adapters.
    pub enum TaskRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "task repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "task repository query failed: {message}",
    }
}

/// Port for storing, reading and removing tasks.
///
/// `project_id` is a plain reference: adapters do not check that the project
/// exists and never cascade.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Persist a new task.
    async fn insert(&self, task: &Task) -> Result<(), TaskRepositoryError>;

    /// Every task filed under `project_id`, in store order.
    async fn list_by_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<Task>, TaskRepositoryError>;

    /// Find a task by id.
    async fn find_by_id(&self, task_id: &TaskId) -> Result<Option<Task>, TaskRepositoryError>;

    /// Overwrite the stored task with the same id.
    ///
    /// Returns `false` when no such task exists any more.
    async fn update(&self, task: &Task) -> Result<bool, TaskRepositoryError>;

    /// Remove a task. Returns `false` when nothing was removed.
    async fn delete(&self, task_id: &TaskId) -> Result<bool, TaskRepositoryError>;
}

/// Fixture implementation for tests that do not exercise task storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTaskRepository;

#[async_trait]
impl TaskRepository for FixtureTaskRepository {
    async fn insert(&self, _task: &Task) -> Result<(), TaskRepositoryError> {
        Ok(())
    }

    async fn list_by_project(
        &self,
        _project_id: &ProjectId,
    ) -> Result<Vec<Task>, TaskRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _task_id: &TaskId) -> Result<Option<Task>, TaskRepositoryError> {
        Ok(None)
    }

    async fn update(&self, _task: &Task) -> Result<bool, TaskRepositoryError> {
        Ok(false)
    }

    async fn delete(&self, _task_id: &TaskId) -> Result<bool, TaskRepositoryError> {
        Ok(false)
    }
}
