//! In-memory task repository.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::ports::{TaskRepository, TaskRepositoryError};
use crate::domain::{ProjectId, Task, TaskId};

/// Thread-safe in-memory task repository keeping insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::query(format!("task store lock poisoned: {err}"))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, task: &Task) -> Result<(), TaskRepositoryError> {
        let mut tasks = self.tasks.write().map_err(poisoned)?;
        tasks.push(task.clone());
        Ok(())
    }

    async fn list_by_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<Task>, TaskRepositoryError> {
        let tasks = self.tasks.read().map_err(poisoned)?;
        Ok(tasks
            .iter()
            .filter(|task| task.project_id() == project_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, task_id: &TaskId) -> Result<Option<Task>, TaskRepositoryError> {
        let tasks = self.tasks.read().map_err(poisoned)?;
        Ok(tasks.iter().find(|task| task.id() == task_id).cloned())
    }

    async fn update(&self, task: &Task) -> Result<bool, TaskRepositoryError> {
        let mut tasks = self.tasks.write().map_err(poisoned)?;
        let slot = tasks.iter_mut().find(|stored| stored.id() == task.id());
        Ok(slot.map(|stored| *stored = task.clone()).is_some())
    }

    async fn delete(&self, task_id: &TaskId) -> Result<bool, TaskRepositoryError> {
        let mut tasks = self.tasks.write().map_err(poisoned)?;
        let before = tasks.len();
        tasks.retain(|task| task.id() != task_id);
        Ok(tasks.len() != before)
    }
}
