//! Driving port for project reads.

use async_trait::async_trait;

use crate::domain::{AuthenticatedIdentity, Error, Project};

/// Request listing the caller's projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListProjectsRequest {
    /// Caller whose projects are listed.
    pub identity: AuthenticatedIdentity,
}

/// Driving port for project read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectQuery: Send + Sync {
    /// Projects owned by the caller, in store order. Never another owner's.
    async fn list_projects(&self, request: ListProjectsRequest) -> Result<Vec<Project>, Error>;
}

/// Fixture query returning no projects.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureProjectQuery;

#[async_trait]
impl ProjectQuery for FixtureProjectQuery {
    async fn list_projects(&self, _request: ListProjectsRequest) -> Result<Vec<Project>, Error> {
        Ok(Vec::new())
    }
}
