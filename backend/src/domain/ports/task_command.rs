//! Driving port for task mutations.
//!
//! Status values arrive as text so the lifecycle service can reject anything
//! outside the three known statuses with `InvalidStatus`.

use async_trait::async_trait;

use crate::domain::{AuthenticatedIdentity, Error, ProjectId, Task, TaskDraft, TaskId, TaskStatus};

/// Request to file a task under a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    /// Authenticated caller. Not checked against the project owner.
    pub identity: AuthenticatedIdentity,
    /// Target project.
    pub project_id: ProjectId,
    /// Title, stored verbatim.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Raw status; `None` means `Pending`.
    pub status: Option<String>,
}

/// Request replacing a task's title, description and status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    /// Authenticated caller.
    pub identity: AuthenticatedIdentity,
    /// Task to replace.
    pub task_id: TaskId,
    /// New title.
    pub title: String,
    /// New description; `None` clears it.
    pub description: Option<String>,
    /// Raw new status.
    pub status: String,
}

/// Request removing a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteTaskRequest {
    /// Authenticated caller.
    pub identity: AuthenticatedIdentity,
    /// Task to remove.
    pub task_id: TaskId,
}

/// Driving port for task write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskCommand: Send + Sync {
    /// Create a task. `completed_at` is never set here.
    async fn create_task(&self, request: CreateTaskRequest) -> Result<Task, Error>;

    /// Replace a task and recompute `completed_at`.
    ///
    /// Fails with `NotFound`, without writing, when the task is missing.
    async fn update_task(&self, request: UpdateTaskRequest) -> Result<Task, Error>;

    /// Remove a task, failing with `NotFound` when it is already gone.
    async fn delete_task(&self, request: DeleteTaskRequest) -> Result<(), Error>;
}

/// Fixture command that validates input but stores nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTaskCommand;

#[async_trait]
impl TaskCommand for FixtureTaskCommand {
    async fn create_task(&self, request: CreateTaskRequest) -> Result<Task, Error> {
        let status = match request.status.as_deref() {
            Some(raw) => raw
                .parse::<TaskStatus>()
                .map_err(|err| Error::invalid_status(err.to_string()))?,
            None => TaskStatus::default(),
        };
        Ok(Task::create(
            TaskDraft {
                project_id: request.project_id,
                title: request.title,
                description: request.description,
                status,
            },
            chrono::Utc::now(),
        ))
    }

    async fn update_task(&self, _request: UpdateTaskRequest) -> Result<Task, Error> {
        Err(Error::not_found("Task not found"))
    }

    async fn delete_task(&self, _request: DeleteTaskRequest) -> Result<(), Error> {
        Err(Error::not_found("Task not found"))
    }
}
