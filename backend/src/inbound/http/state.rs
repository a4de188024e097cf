//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::DEFAULT_STORE_TIMEOUT;
use crate::domain::ports::{
    FixtureIdentityProvider, FixtureProjectCommand, FixtureProjectQuery, FixtureTaskCommand,
    FixtureTaskQuery, IdentityProvider, ProjectCommand, ProjectQuery, TaskCommand, TaskQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Project creation.
    pub projects: Arc<dyn ProjectCommand>,
    /// Project listing.
    pub projects_query: Arc<dyn ProjectQuery>,
    /// Task mutations.
    pub tasks: Arc<dyn TaskCommand>,
    /// Task listing and summaries.
    pub tasks_query: Arc<dyn TaskQuery>,
    /// Bearer credential resolution used by the [`Authenticated`] extractor.
    ///
    /// [`Authenticated`]: super::auth::Authenticated
    pub identity: Arc<dyn IdentityProvider>,
    /// Deadline for resolving a bearer credential.
    pub identity_timeout: Duration,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    #[must_use]
    pub const fn new(
        projects: Arc<dyn ProjectCommand>,
        projects_query: Arc<dyn ProjectQuery>,
        tasks: Arc<dyn TaskCommand>,
        tasks_query: Arc<dyn TaskQuery>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            projects,
            projects_query,
            tasks,
            tasks_query,
            identity,
            identity_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    /// Replace the identity provider, keeping every other port.
    #[must_use]
    pub fn with_identity(mut self, identity: Arc<dyn IdentityProvider>) -> Self {
        self.identity = identity;
        self
    }

    /// Override the deadline applied when resolving credentials.
    #[must_use]
    pub const fn with_identity_timeout(mut self, identity_timeout: Duration) -> Self {
        self.identity_timeout = identity_timeout;
        self
    }
}

impl Default for HttpState {
    /// State backed entirely by fixtures. Every bearer token is rejected.
    fn default() -> Self {
        Self::new(
            Arc::new(FixtureProjectCommand),
            Arc::new(FixtureProjectQuery),
            Arc::new(FixtureTaskCommand),
            Arc::new(FixtureTaskQuery),
            Arc::new(FixtureIdentityProvider),
        )
    }
}
