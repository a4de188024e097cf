//! Task entity, its status marker and the derived completion timestamp.
//!
//! Status moves freely between the three values; there is no guarded
//! workflow and no terminal state. `completed_at` is derived from the status
//! on every update, never on creation.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ProjectId;

/// System-generated task identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
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

impl From<Uuid> for TaskId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Lifecycle marker on a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Not started. Entry state when the caller omits a status.
    #[default]
    Pending,
    /// Being worked on.
    #[serde(rename = "In Progress", alias = "InProgress")]
    InProgress,
    /// Done.
    Completed,
}

impl TaskStatus {
    /// Every status in display order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::InProgress, Self::Completed];

    /// Wire and storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when text does not name one of the three statuses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid task status `{value}`; expected one of Pending, In Progress, Completed")]
pub struct ParseTaskStatusError {
    value: String,
}

impl ParseTaskStatusError {
    /// The rejected input.
    #[must_use]
    pub fn value(&self) -> &str {
        self.value.as_str()
    }
}

impl FromStr for TaskStatus {
    type Err = ParseTaskStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "In Progress" | "InProgress" => Ok(Self::InProgress),
            "Completed" => Ok(Self::Completed),
            other => Err(ParseTaskStatusError {
                value: other.to_owned(),
            }),
        }
    }
}

/// Input for a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    /// Project the task is filed under. Not checked for existence.
    pub project_id: ProjectId,
    /// Display title, stored verbatim.
    pub title: String,
    /// Optional free text.
    pub description: Option<String>,
    /// Initial status.
    pub status: TaskStatus,
}

/// Full replacement of a task's editable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskChanges {
    /// New title.
    pub title: String,
    /// New description; `None` clears it.
    pub description: Option<String>,
    /// New status.
    pub status: TaskStatus,
}

/// A unit of work within a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    project_id: ProjectId,
    title: String,
    description: Option<String>,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Create a task from a draft.
    ///
    /// `completed_at` stays empty even when the draft is already `Completed`.
    #[must_use]
    pub fn create(draft: TaskDraft, created_at: DateTime<Utc>) -> Self {
        let TaskDraft {
            project_id,
            title,
            description,
            status,
        } = draft;
        Self {
            id: TaskId::random(),
            project_id,
            title,
            description,
            status,
            created_at,
            completed_at: None,
        }
    }

    /// Rehydrate a task from stored parts.
    #[must_use]
    pub fn from_parts(parts: TaskParts) -> Self {
        let TaskParts {
            id,
            project_id,
            title,
            description,
            status,
            created_at,
            completed_at,
        } = parts;
        Self {
            id,
            project_id,
            title,
            description,
            status,
            created_at,
            completed_at,
        }
    }

    /// Replace title, description and status, then recompute `completed_at`.
    ///
    /// A `Completed` status stamps `now` on every call, including when the
    /// task was already completed. Any other status clears the stamp.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use taskboard::domain::{ProjectId, Task, TaskChanges, TaskDraft, TaskStatus};
    ///
    /// let draft = TaskDraft {
    ///     project_id: ProjectId::random(),
    ///     title: "Write report".into(),
    ///     description: None,
    ///     status: TaskStatus::Pending,
    /// };
    /// let mut task = Task::create(draft, Utc::now());
    /// let now = Utc::now();
    /// task.apply(
    ///     TaskChanges { title: "Write report".into(), description: None, status: TaskStatus::Completed },
    ///     now,
    /// );
    /// assert_eq!(task.completed_at(), Some(now));
    /// ```
    pub fn apply(&mut self, changes: TaskChanges, now: DateTime<Utc>) {
        let TaskChanges {
            title,
            description,
            status,
        } = changes;
        self.title = title;
        self.description = description;
        self.status = status;
        self.completed_at = (status == TaskStatus::Completed).then_some(now);
    }

    /// Task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Owning project.
    #[must_use]
    pub const fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    /// Display title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Optional description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Current status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Creation instant.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Instant of the most recent update that set `Completed`.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }
}

/// Stored representation used by adapters to rebuild a [`Task`].
#[derive(Debug, Clone)]
pub struct TaskParts {
    /// Identifier.
    pub id: TaskId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Title.
    pub title: String,
    /// Description.
    pub description: Option<String>,
    /// Status.
    pub status: TaskStatus,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
    /// Completion instant.
    pub completed_at: Option<DateTime<Utc>>,
}

/// Per-status task counts for one project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatusSummary {
    /// Tasks in `Pending`.
    pub pending: usize,
    /// Tasks in `In Progress`.
    pub in_progress: usize,
    /// Tasks in `Completed`.
    pub completed: usize,
}

impl TaskStatusSummary {
    /// Count the statuses of `tasks`.
    #[must_use]
    pub fn tally<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        tasks
            .into_iter()
            .fold(Self::default(), |mut summary, task| {
                match task.status() {
                    TaskStatus::Pending => summary.pending += 1,
                    TaskStatus::InProgress => summary.in_progress += 1,
                    TaskStatus::Completed => summary.completed += 1,
                }
                summary
            })
    }

    /// Total number of tasks counted.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.pending + self.in_progress + self.completed
    }
}
