//! Shared validation helpers for inbound HTTP adapters.

use actix_web::HttpRequest;
use actix_web::error::JsonPayloadError;
use serde_json::json;
use tracing::debug;
use uuid::Uuid;

use crate::domain::{Error, ProjectId, TaskId};

/// Validation error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    InvalidUuid,
    MalformedBody,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::InvalidUuid => "invalid_uuid",
            Self::MalformedBody => "malformed_body",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let name = field.as_str();
    Error::invalid_request(format!("{name} must be a valid UUID")).with_details(json!({
        "field": name,
        "value": value,
        "code": ValidationCode::InvalidUuid.as_str(),
    }))
}

pub(crate) fn parse_uuid(value: &str, field: FieldName) -> Result<Uuid, Error> {
    Uuid::parse_str(value).map_err(|_| invalid_uuid_error(field, value))
}

pub(crate) fn parse_project_id(value: &str) -> Result<ProjectId, Error> {
    parse_uuid(value, FieldName::new("projectId")).map(ProjectId::from)
}

pub(crate) fn parse_task_id(value: &str) -> Result<TaskId, Error> {
    parse_uuid(value, FieldName::new("taskId")).map(TaskId::from)
}

/// Turn JSON extractor failures into `400 invalid_request` domain errors.
///
/// Installed through `web::JsonConfig::error_handler` so malformed bodies
/// produce the same envelope as every other validation failure.
#[must_use]
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected malformed JSON body");
    let field = match &err {
        JsonPayloadError::Deserialize(inner) if inner.is_data() => {
            missing_field_name(&inner.to_string())
        }
        _ => None,
    };
    let error = Error::invalid_request(format!("invalid JSON body: {err}")).with_details(json!({
        "field": field.unwrap_or_else(|| "body".to_owned()),
        "code": ValidationCode::MalformedBody.as_str(),
    }));
    error.into()
}

fn missing_field_name(message: &str) -> Option<String> {
    let rest = message.strip_prefix("missing field `")?;
    let end = rest.find('`')?;
    rest.get(..end).map(str::to_owned)
}
