//! Project HTTP handlers.
//!
//! ```text
//! POST /api/projects
//! GET  /api/projects
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Project;
use crate::domain::ports::{CreateProjectRequest, ListProjectsRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::Authenticated;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Request payload for creating a project.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectBody {
    /// Display title. Stored verbatim; empty when omitted.
    #[serde(default)]
    #[schema(example = "Garden redesign")]
    pub title: String,
}

/// Project as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectBody {
    /// Project identifier.
    #[schema(format = "uuid")]
    pub id: String,
    /// Owning user.
    #[schema(format = "uuid")]
    pub owner_id: String,
    /// Display title.
    pub title: String,
}

impl From<Project> for ProjectBody {
    fn from(value: Project) -> Self {
        Self {
            id: value.id().to_string(),
            owner_id: value.owner_id().to_string(),
            title: value.title().to_owned(),
        }
    }
}

/// Create a project owned by the caller.
#[utoipa::path(
    post,
    path = "/api/projects",
    request_body = CreateProjectBody,
    responses(
        (status = 201, description = "Project created", body = ProjectBody),
        (status = 400, description = "Invalid body or project limit reached", body = ErrorSchema),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 500, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["projects"],
    operation_id = "createProject",
    security(("BearerAuth" = []))
)]
#[post("/projects")]
pub async fn create_project(
    state: web::Data<HttpState>,
    auth: Authenticated,
    payload: web::Json<CreateProjectBody>,
) -> ApiResult<HttpResponse> {
    let project = state
        .projects
        .create_project(CreateProjectRequest {
            identity: auth.identity(),
            title: payload.into_inner().title,
        })
        .await?;
    Ok(HttpResponse::Created().json(ProjectBody::from(project)))
}

/// List the caller's projects.
#[utoipa::path(
    get,
    path = "/api/projects",
    responses(
        (status = 200, description = "Projects owned by the caller", body = [ProjectBody]),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 500, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["projects"],
    operation_id = "listProjects",
    security(("BearerAuth" = []))
)]
#[get("/projects")]
pub async fn list_projects(
    state: web::Data<HttpState>,
    auth: Authenticated,
) -> ApiResult<web::Json<Vec<ProjectBody>>> {
    let projects = state
        .projects_query
        .list_projects(ListProjectsRequest {
            identity: auth.identity(),
        })
        .await?;
    Ok(web::Json(projects.into_iter().map(ProjectBody::from).collect()))
}

#[cfg(test)]
#[path = "projects_tests.rs"]
mod tests;
