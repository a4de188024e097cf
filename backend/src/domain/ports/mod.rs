//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`, [`IdentityProvider`]) are implemented by
//! outbound adapters. Driving ports (`*Command`, `*Query`) are implemented by
//! the lifecycle services and consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod identity_provider;
mod project_command;
mod project_query;
mod project_repository;
mod task_command;
mod task_query;
mod task_repository;

#[cfg(test)]
pub use identity_provider::MockIdentityProvider;
pub use identity_provider::{FixtureIdentityProvider, IdentityProvider, IdentityProviderError};
#[cfg(test)]
pub use project_command::MockProjectCommand;
pub use project_command::{CreateProjectRequest, FixtureProjectCommand, ProjectCommand};
#[cfg(test)]
pub use project_query::MockProjectQuery;
pub use project_query::{FixtureProjectQuery, ListProjectsRequest, ProjectQuery};
#[cfg(test)]
pub use project_repository::MockProjectRepository;
pub use project_repository::{
    FixtureProjectRepository, ProjectInsertOutcome, ProjectRepository, ProjectRepositoryError,
};
#[cfg(test)]
pub use task_command::MockTaskCommand;
pub use task_command::{
    CreateTaskRequest, DeleteTaskRequest, FixtureTaskCommand, TaskCommand, UpdateTaskRequest,
};
#[cfg(test)]
pub use task_query::MockTaskQuery;
pub use task_query::{FixtureTaskQuery, ListTasksRequest, TaskQuery};
#[cfg(test)]
pub use task_repository::MockTaskRepository;
pub use task_repository::{FixtureTaskRepository, TaskRepository, TaskRepositoryError};
