//! Task HTTP handlers.
//!
//! ```text
//! POST   /api/tasks/{projectId}
//! GET    /api/tasks/{projectId}
//! GET    /api/tasks/{projectId}/summary
//! PUT    /api/tasks/{taskId}
//! DELETE /api/tasks/{taskId}
//! ```
//!
//! The same path segment names a project for `POST`/`GET` and a task for
//! `PUT`/`DELETE`. Task routes do not check that the caller owns the project.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{
    CreateTaskRequest, DeleteTaskRequest, ListTasksRequest, UpdateTaskRequest,
};
use crate::domain::{Task, TaskStatusSummary};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::Authenticated;
use crate::inbound::http::schemas::{ErrorSchema, TaskStatusSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_project_id, parse_task_id};

/// Request payload for creating a task.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskBody {
    /// Title, stored verbatim. Empty when omitted.
    #[serde(default)]
    #[schema(example = "Order seeds")]
    pub title: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Initial status. Defaults to `Pending`.
    #[serde(default)]
    #[schema(value_type = Option<TaskStatusSchema>)]
    pub status: Option<String>,
}

/// Request payload replacing a task.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskBody {
    /// New title. Empty when omitted.
    #[serde(default)]
    pub title: String,
    /// New description; omit or send `null` to clear it.
    #[serde(default)]
    pub description: Option<String>,
    /// New status.
    #[schema(value_type = TaskStatusSchema)]
    pub status: String,
}

/// Task as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskBody {
    /// Task identifier.
    #[schema(format = "uuid")]
    pub id: String,
    /// Owning project.
    #[schema(format = "uuid")]
    pub project_id: String,
    /// Title.
    pub title: String,
    /// Description, if any.
    pub description: Option<String>,
    /// Current status.
    #[schema(value_type = TaskStatusSchema)]
    pub status: String,
    /// Creation instant.
    #[schema(format = "date-time")]
    pub created_at: String,
    /// Instant of the latest update that set `Completed`.
    #[schema(format = "date-time")]
    pub completed_at: Option<String>,
}

impl From<Task> for TaskBody {
    fn from(value: Task) -> Self {
        Self {
            id: value.id().to_string(),
            project_id: value.project_id().to_string(),
            title: value.title().to_owned(),
            description: value.description().map(str::to_owned),
            status: value.status().to_string(),
            created_at: value.created_at().to_rfc3339(),
            completed_at: value.completed_at().map(|at| at.to_rfc3339()),
        }
    }
}

/// Response for task creation.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct TaskCreatedBody {
    /// Confirmation text.
    #[schema(example = "Task created")]
    pub message: String,
    /// The stored task.
    pub task: TaskBody,
}

/// Plain confirmation message.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct MessageBody {
    /// Confirmation text.
    #[schema(example = "Task deleted successfully")]
    pub message: String,
}

/// Per-status task counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummaryBody {
    /// Tasks in `Pending`.
    pub pending: usize,
    /// Tasks in `In Progress`.
    pub in_progress: usize,
    /// Tasks in `Completed`.
    pub completed: usize,
    /// All tasks in the project.
    pub total: usize,
}

impl From<TaskStatusSummary> for TaskSummaryBody {
    fn from(value: TaskStatusSummary) -> Self {
        Self {
            pending: value.pending,
            in_progress: value.in_progress,
            completed: value.completed,
            total: value.total(),
        }
    }
}

/// File a task under a project.
#[utoipa::path(
    post,
    path = "/api/tasks/{project_id}",
    params(("project_id" = String, Path, format = "uuid", description = "Project identifier")),
    request_body = CreateTaskBody,
    responses(
        (status = 201, description = "Task created", body = TaskCreatedBody),
        (status = 400, description = "Invalid body or status", body = ErrorSchema),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 500, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["tasks"],
    operation_id = "createTask",
    security(("BearerAuth" = []))
)]
#[post("/tasks/{project_id}")]
pub async fn create_task(
    state: web::Data<HttpState>,
    auth: Authenticated,
    path: web::Path<String>,
    payload: web::Json<CreateTaskBody>,
) -> ApiResult<HttpResponse> {
    let project_id = parse_project_id(&path.into_inner())?;
    let CreateTaskBody {
        title,
        description,
        status,
    } = payload.into_inner();
    let task = state
        .tasks
        .create_task(CreateTaskRequest {
            identity: auth.identity(),
            project_id,
            title,
            description,
            status,
        })
        .await?;
    Ok(HttpResponse::Created().json(TaskCreatedBody {
        message: "Task created".to_owned(),
        task: TaskBody::from(task),
    }))
}

/// List a project's tasks.
#[utoipa::path(
    get,
    path = "/api/tasks/{project_id}",
    params(("project_id" = String, Path, format = "uuid", description = "Project identifier")),
    responses(
        (status = 200, description = "Tasks in the project", body = [TaskBody]),
        (status = 400, description = "Invalid project id", body = ErrorSchema),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 500, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["tasks"],
    operation_id = "listTasks",
    security(("BearerAuth" = []))
)]
#[get("/tasks/{project_id}")]
pub async fn list_tasks(
    state: web::Data<HttpState>,
    auth: Authenticated,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<TaskBody>>> {
    let project_id = parse_project_id(&path.into_inner())?;
    let tasks = state
        .tasks_query
        .list_tasks(ListTasksRequest {
            identity: auth.identity(),
            project_id,
        })
        .await?;
    Ok(web::Json(tasks.into_iter().map(TaskBody::from).collect()))
}

/// Count a project's tasks by status.
#[utoipa::path(
    get,
    path = "/api/tasks/{project_id}/summary",
    params(("project_id" = String, Path, format = "uuid", description = "Project identifier")),
    responses(
        (status = 200, description = "Per-status counts", body = TaskSummaryBody),
        (status = 400, description = "Invalid project id", body = ErrorSchema),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 500, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["tasks"],
    operation_id = "summarizeTasks",
    security(("BearerAuth" = []))
)]
#[get("/tasks/{project_id}/summary")]
pub async fn summarize_tasks(
    state: web::Data<HttpState>,
    auth: Authenticated,
    path: web::Path<String>,
) -> ApiResult<web::Json<TaskSummaryBody>> {
    let project_id = parse_project_id(&path.into_inner())?;
    let summary = state
        .tasks_query
        .summarize_tasks(ListTasksRequest {
            identity: auth.identity(),
            project_id,
        })
        .await?;
    Ok(web::Json(summary.into()))
}

/// Replace a task's title, description and status.
#[utoipa::path(
    put,
    path = "/api/tasks/{task_id}",
    params(("task_id" = String, Path, format = "uuid", description = "Task identifier")),
    request_body = UpdateTaskBody,
    responses(
        (status = 200, description = "Updated task", body = TaskBody),
        (status = 400, description = "Invalid body or status", body = ErrorSchema),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 404, description = "Task not found", body = ErrorSchema),
        (status = 500, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["tasks"],
    operation_id = "updateTask",
    security(("BearerAuth" = []))
)]
#[put("/tasks/{task_id}")]
pub async fn update_task(
    state: web::Data<HttpState>,
    auth: Authenticated,
    path: web::Path<String>,
    payload: web::Json<UpdateTaskBody>,
) -> ApiResult<web::Json<TaskBody>> {
    let task_id = parse_task_id(&path.into_inner())?;
    let UpdateTaskBody {
        title,
        description,
        status,
    } = payload.into_inner();
    let task = state
        .tasks
        .update_task(UpdateTaskRequest {
            identity: auth.identity(),
            task_id,
            title,
            description,
            status,
        })
        .await?;
    Ok(web::Json(task.into()))
}

/// Remove a task.
#[utoipa::path(
    delete,
    path = "/api/tasks/{task_id}",
    params(("task_id" = String, Path, format = "uuid", description = "Task identifier")),
    responses(
        (status = 200, description = "Task deleted", body = MessageBody),
        (status = 400, description = "Invalid task id", body = ErrorSchema),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 404, description = "Task not found", body = ErrorSchema),
        (status = 500, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["tasks"],
    operation_id = "deleteTask",
    security(("BearerAuth" = []))
)]
#[delete("/tasks/{task_id}")]
pub async fn delete_task(
    state: web::Data<HttpState>,
    auth: Authenticated,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageBody>> {
    let task_id = parse_task_id(&path.into_inner())?;
    state
        .tasks
        .delete_task(DeleteTaskRequest {
            identity: auth.identity(),
            task_id,
        })
        .await?;
    Ok(web::Json(MessageBody {
        message: "Task deleted successfully".to_owned(),
    }))
}

#[cfg(test)]
#[path = "tasks_tests.rs"]
mod tests;
