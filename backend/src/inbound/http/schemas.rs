//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their wire shape and live in the inbound adapter
//! where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// A task status outside the three known values.
    #[schema(rename = "invalid_status")]
    InvalidStatus,
    /// The caller already owns four projects.
    #[schema(rename = "quota_exceeded")]
    QuotaExceeded,
    /// Authentication failed or is missing.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The backing store failed or timed out.
    #[schema(rename = "storage_unavailable")]
    StorageUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "quota_exceeded")]
    code: ErrorCodeSchema,
    /// Human-readable message. Generic for server-side failures.
    #[schema(example = "Project limit reached (max 4 projects)")]
    message: String,
    /// Correlation identifier, also sent as the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary details such as the offending field.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::TaskStatus`].
#[derive(ToSchema)]
#[schema(as = TaskStatus)]
pub enum TaskStatusSchema {
    /// Not started.
    #[schema(rename = "Pending")]
    Pending,
    /// Being worked on.
    #[schema(rename = "In Progress")]
    InProgress,
    /// Done.
    #[schema(rename = "Completed")]
    Completed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn error_code_schema_lists_every_code() {
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        for code in [
            "invalid_request",
            "invalid_status",
            "quota_exceeded",
            "unauthorized",
            "not_found",
            "storage_unavailable",
            "internal_error",
        ] {
            assert!(schema_json.contains(code), "missing {code}");
        }
    }

    #[test]
    fn error_schema_uses_camel_case() {
        let schema_json = schema_to_json::<ErrorSchema>();
        assert_eq!(ErrorSchema::name(), "Error");
        assert!(schema_json.contains("traceId"));
    }

    #[test]
    fn task_status_schema_uses_wire_values() {
        let schema_json = schema_to_json::<TaskStatusSchema>();
        assert!(schema_json.contains("In Progress"));
    }
}
