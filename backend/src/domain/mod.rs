//! Domain primitives, ports and lifecycle services.
//!
//! Purpose: Define the project and task entities, the transport-agnostic
//! error type, and the services that enforce the project quota and the task
//! completion timestamp. Nothing here depends on HTTP or Diesel.
//!
//! Public surface:
//! - Error / ErrorCode: failure payload shared by every adapter.
//! - Project / Task / TaskStatus: tracked entities.
//! - AuthenticatedIdentity / BearerToken: caller identity.
//! - ProjectLifecycleService / TaskLifecycleService: driving port
//!   implementations.

pub mod error;
pub mod ports;
pub mod project;
mod project_service;
mod store_call;
pub mod task;
mod task_service;
pub mod trace_id;
pub mod user;

pub use self::error::{DomainError, DomainError as Error, ErrorCode, ErrorValidationError};
pub use self::project::{PROJECT_QUOTA, PROJECT_QUOTA_MESSAGE, Project, ProjectId};
pub use self::project_service::ProjectLifecycleService;
pub use self::store_call::DEFAULT_STORE_TIMEOUT;
pub(crate) use self::store_call::bounded;
pub use self::task::{
    ParseTaskStatusError, Task, TaskChanges, TaskDraft, TaskId, TaskParts, TaskStatus,
    TaskStatusSummary,
};
pub use self::task_service::TaskLifecycleService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{AuthenticatedIdentity, BearerToken, UserId, UserValidationError};
