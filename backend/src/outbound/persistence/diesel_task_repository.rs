//! PostgreSQL-backed `TaskRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{TaskRepository, TaskRepositoryError};
use crate::domain::{ProjectId, Task, TaskId, TaskParts, TaskStatus};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewTaskRow, TaskRow, TaskUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::tasks;

/// Diesel-backed implementation of the `TaskRepository` port.
#[derive(Clone)]
pub struct DieselTaskRepository {
    pool: DbPool,
}

impl DieselTaskRepository {
    /// Create a new repository with the given connection pool.
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> TaskRepositoryError {
    map_basic_pool_error(error, TaskRepositoryError::connection)
}

fn map_diesel_error(error: &diesel::result::Error) -> TaskRepositoryError {
    map_basic_diesel_error(
        error,
        TaskRepositoryError::query,
        TaskRepositoryError::connection,
    )
}

/// Convert a row, rejecting status text the schema constraint should have
/// kept out.
fn row_to_task(row: TaskRow) -> Result<Task, TaskRepositoryError> {
    let status: TaskStatus = row.status.parse().map_err(|_| {
        warn!(task_id = %row.id, status = row.status.as_str(), "stored task has unknown status");
        TaskRepositoryError::query("stored task has an unknown status")
    })?;
    Ok(Task::from_parts(TaskParts {
        id: TaskId::from(row.id),
        project_id: ProjectId::from(row.project_id),
        title: row.title,
        description: row.description,
        status,
        created_at: row.created_at,
        completed_at: row.completed_at,
    }))
}

#[async_trait]
impl TaskRepository for DieselTaskRepository {
    async fn insert(&self, task: &Task) -> Result<(), TaskRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let status = task.status().as_str();
        let row = NewTaskRow {
            id: *task.id().as_uuid(),
            project_id: *task.project_id().as_uuid(),
            title: task.title(),
            description: task.description(),
            status,
            created_at: task.created_at(),
            completed_at: task.completed_at(),
        };

        diesel::insert_into(tasks::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_diesel_error(&err))
    }

    async fn list_by_project(&self, project_id: &ProjectId) -> Result<Vec<Task>, TaskRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<TaskRow> = tasks::table
            .filter(tasks::project_id.eq(project_id.as_uuid()))
            .order((tasks::created_at.asc(), tasks::id.asc()))
            .select(TaskRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(&err))?;

        rows.into_iter().map(row_to_task).collect()
    }

    async fn find_by_id(&self, task_id: &TaskId) -> Result<Option<Task>, TaskRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<TaskRow> = tasks::table
            .find(task_id.as_uuid())
            .select(TaskRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(&err))?;

        row.map(row_to_task).transpose()
    }

    async fn update(&self, task: &Task) -> Result<bool, TaskRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changes = TaskUpdate {
            title: task.title(),
            description: task.description(),
            status: task.status().as_str(),
            completed_at: task.completed_at(),
        };

        let updated = diesel::update(tasks::table.find(task.id().as_uuid()))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(&err))?;

        Ok(updated > 0)
    }

    async fn delete(&self, task_id: &TaskId) -> Result<bool, TaskRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(tasks::table.find(task_id.as_uuid()))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(&err))?;

        Ok(deleted > 0)
    }
}
