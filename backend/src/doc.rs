//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint, the request/response bodies and
//! the domain schema wrappers, plus the bearer security scheme. Swagger UI
//! serves it in debug builds and `openapi-dump` prints it for tooling.

use crate::inbound::http::projects::{CreateProjectBody, ProjectBody};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, TaskStatusSchema};
use crate::inbound::http::tasks::{
    CreateTaskBody, MessageBody, TaskBody, TaskCreatedBody, TaskSummaryBody, UpdateTaskBody,
};
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the bearer security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "BearerAuth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Taskboard API",
        description = "Owner-scoped projects and their tasks.",
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("BearerAuth" = [])),
    paths(
        crate::inbound::http::projects::create_project,
        crate::inbound::http::projects::list_projects,
        crate::inbound::http::tasks::create_task,
        crate::inbound::http::tasks::list_tasks,
        crate::inbound::http::tasks::summarize_tasks,
        crate::inbound::http::tasks::update_task,
        crate::inbound::http::tasks::delete_task,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        TaskStatusSchema,
        CreateProjectBody,
        ProjectBody,
        CreateTaskBody,
        UpdateTaskBody,
        TaskBody,
        TaskCreatedBody,
        MessageBody,
        TaskSummaryBody,
    )),
    tags(
        (name = "projects", description = "Projects owned by the caller"),
        (name = "tasks", description = "Tasks filed under a project"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated document.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn object_fields(schema: &RefOr<Schema>) -> Vec<String> {
        match schema {
            RefOr::T(Schema::Object(obj)) => obj.properties.keys().cloned().collect(),
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("Error", &["code", "message", "traceId", "details"])]
    #[case("TaskBody", &["id", "projectId", "status", "createdAt", "completedAt"])]
    #[case("ProjectBody", &["id", "ownerId", "title"])]
    fn schemas_use_camel_case_fields(#[case] name: &str, #[case] fields: &[&str]) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let present = object_fields(schemas.get(name).expect("schema registered"));

        for field in fields {
            assert!(present.iter().any(|f| f == field), "{name} lacks {field}");
        }
    }

    #[rstest]
    #[case("/api/projects")]
    #[case("/api/tasks/{project_id}")]
    #[case("/api/tasks/{project_id}/summary")]
    #[case("/api/tasks/{task_id}")]
    #[case("/health/ready")]
    fn paths_are_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[rstest]
    fn bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("BearerAuth"));
    }
}
