//! Driving port for project creation.

use async_trait::async_trait;

use crate::domain::{AuthenticatedIdentity, Error, Project};

/// Request to create a project for the authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    /// Caller who will own the project.
    pub identity: AuthenticatedIdentity,
    /// Display title, stored verbatim.
    pub title: String,
}

/// Driving port for project write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectCommand: Send + Sync {
    /// Create a project owned by the caller.
    ///
    /// Fails with [`ErrorCode::QuotaExceeded`](crate::domain::ErrorCode) once
    /// the caller holds four projects, and with `StorageUnavailable` when the
    /// store fails.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use taskboard::domain::{AuthenticatedIdentity, UserId};
    /// # use taskboard::domain::ports::{CreateProjectRequest, FixtureProjectCommand, ProjectCommand};
    /// # async fn example() -> Result<(), taskboard::domain::Error> {
    /// let identity = AuthenticatedIdentity::new(UserId::random());
    /// let project = FixtureProjectCommand
    ///     .create_project(CreateProjectRequest { identity, title: "Garden".into() })
    ///     .await?;
    /// assert_eq!(project.title(), "Garden");
    /// # Ok(())
    /// # }
    /// ```
    async fn create_project(&self, request: CreateProjectRequest) -> Result<Project, Error>;
}

/// Fixture command that builds projects without storing them.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureProjectCommand;

#[async_trait]
impl ProjectCommand for FixtureProjectCommand {
    async fn create_project(&self, request: CreateProjectRequest) -> Result<Project, Error> {
        Ok(Project::create(
            *request.identity.user_id(),
            request.title,
        ))
    }
}
