//! Task lifecycle service.
//!
//! Implements [`TaskCommand`] and [`TaskQuery`] over a [`TaskRepository`].
//! Timestamps come from the injected clock. Task routes carry no ownership
//! check: any authenticated caller may act on any project's tasks.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mockable::Clock;
use tracing::debug;

use crate::domain::ports::{
    CreateTaskRequest, DeleteTaskRequest, ListTasksRequest, TaskCommand, TaskQuery,
    TaskRepository, UpdateTaskRequest,
};
use crate::domain::store_call::{DEFAULT_STORE_TIMEOUT, bounded};
use crate::domain::{Error, Task, TaskChanges, TaskDraft, TaskStatus, TaskStatusSummary};

const TASK_NOT_FOUND: &str = "Task not found";

fn parse_status(raw: &str) -> Result<TaskStatus, Error> {
    raw.parse::<TaskStatus>().map_err(|err| {
        Error::invalid_status(err.to_string())
            .with_details(serde_json::json!({ "field": "status", "value": err.value() }))
    })
}

/// Task service implementing the task driving ports.
#[derive(Clone)]
pub struct TaskLifecycleService<R> {
    task_repo: Arc<R>,
    clock: Arc<dyn Clock>,
    store_timeout: Duration,
}

impl<R> TaskLifecycleService<R> {
    /// Create a service using the default store deadline.
    ///
    /// # Examples
    /// ```
    /// # use std::sync::Arc;
    /// # use mockable::DefaultClock;
    /// # use taskboard::domain::TaskLifecycleService;
    /// # use taskboard::domain::ports::FixtureTaskRepository;
    /// let service = TaskLifecycleService::new(
    ///     Arc::new(FixtureTaskRepository),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// ```
    #[must_use]
    pub const fn new(task_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self {
            task_repo,
            clock,
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

impl<R> TaskLifecycleService<R>
where
    R: TaskRepository,
{
    async fn load_tasks(&self, request: &ListTasksRequest) -> Result<Vec<Task>, Error> {
        bounded(
            self.store_timeout,
            "list_tasks",
            "Failed to fetch tasks",
            self.task_repo.list_by_project(&request.project_id),
        )
        .await
    }
}

#[async_trait]
impl<R> TaskCommand for TaskLifecycleService<R>
where
    R: TaskRepository,
{
    async fn create_task(&self, request: CreateTaskRequest) -> Result<Task, Error> {
        let status = match request.status.as_deref() {
            Some(raw) => parse_status(raw)?,
            None => TaskStatus::default(),
        };
        let task = Task::create(
            TaskDraft {
                project_id: request.project_id,
                title: request.title,
                description: request.description,
                status,
            },
            self.clock.utc(),
        );

        bounded(
            self.store_timeout,
            "insert_task",
            "Failed to create task",
            self.task_repo.insert(&task),
        )
        .await?;

        debug!(
            task_id = %task.id(),
            project_id = %task.project_id(),
            user_id = %request.identity.user_id(),
            "task created"
        );
        Ok(task)
    }

    async fn update_task(&self, request: UpdateTaskRequest) -> Result<Task, Error> {
        let status = parse_status(&request.status)?;

        let mut task = bounded(
            self.store_timeout,
            "find_task",
            "Failed to update task",
            self.task_repo.find_by_id(&request.task_id),
        )
        .await?
        .ok_or_else(|| Error::not_found(TASK_NOT_FOUND))?;

        task.apply(
            TaskChanges {
                title: request.title,
                description: request.description,
                status,
            },
            self.clock.utc(),
        );

        let updated = bounded(
            self.store_timeout,
            "update_task",
            "Failed to update task",
            self.task_repo.update(&task),
        )
        .await?;
        if !updated {
            return Err(Error::not_found(TASK_NOT_FOUND));
        }

        debug!(task_id = %task.id(), status = %task.status(), "task updated");
        Ok(task)
    }

    async fn delete_task(&self, request: DeleteTaskRequest) -> Result<(), Error> {
        let removed = bounded(
            self.store_timeout,
            "delete_task",
            "Failed to delete task",
            self.task_repo.delete(&request.task_id),
        )
        .await?;
        if !removed {
            return Err(Error::not_found(TASK_NOT_FOUND));
        }
        debug!(task_id = %request.task_id, "task deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> TaskQuery for TaskLifecycleService<R>
where
    R: TaskRepository,
{
    async fn list_tasks(&self, request: ListTasksRequest) -> Result<Vec<Task>, Error> {
        self.load_tasks(&request).await
    }

    async fn summarize_tasks(
        &self,
        request: ListTasksRequest,
    ) -> Result<TaskStatusSummary, Error> {
        let tasks = self.load_tasks(&request).await?;
        Ok(TaskStatusSummary::tally(&tasks))
    }
}

#[cfg(test)]
#[path = "task_service_tests.rs"]
mod tests;
