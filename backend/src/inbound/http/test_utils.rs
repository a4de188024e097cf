//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use mockable::DefaultClock;

use crate::domain::{BearerToken, ProjectLifecycleService, TaskLifecycleService, UserId};
use crate::inbound::http::api_scope;
use crate::inbound::http::state::HttpState;
use crate::middleware::Trace;
use crate::outbound::memory::{
    InMemoryProjectRepository, InMemoryTaskRepository, StaticIdentityProvider,
};

/// Token accepted for [`TestBackend::alice`].
pub const ALICE_TOKEN: &str = "alice-token";
/// Token accepted for [`TestBackend::bob`].
pub const BOB_TOKEN: &str = "bob-token";

/// In-memory wiring of the full HTTP surface with two known callers.
pub struct TestBackend {
    /// Shared handler state.
    pub state: web::Data<HttpState>,
    /// Caller holding [`ALICE_TOKEN`].
    pub alice: UserId,
    /// Caller holding [`BOB_TOKEN`].
    pub bob: UserId,
}

impl TestBackend {
    /// Fresh stores and two registered callers.
    pub fn new() -> Self {
        let alice = UserId::random();
        let bob = UserId::random();
        let identity = StaticIdentityProvider::new()
            .with_token(&token(ALICE_TOKEN), alice)
            .with_token(&token(BOB_TOKEN), bob);

        let projects = Arc::new(ProjectLifecycleService::new(Arc::new(
            InMemoryProjectRepository::new(),
        )));
        let tasks = Arc::new(TaskLifecycleService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(DefaultClock),
        ));
        let state = HttpState::new(
            projects.clone(),
            projects,
            tasks.clone(),
            tasks,
            Arc::new(identity),
        );
        Self {
            state: web::Data::new(state),
            alice,
            bob,
        }
    }

    /// Application with trace middleware and the `/api` scope.
    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        App::new()
            .app_data(self.state.clone())
            .wrap(Trace)
            .service(api_scope())
    }
}

fn token(raw: &str) -> BearerToken {
    BearerToken::new(raw).expect("test tokens are non-empty")
}

/// `Authorization` header value for `token`.
pub fn bearer(token: &str) -> (actix_web::http::header::HeaderName, String) {
    (
        actix_web::http::header::AUTHORIZATION,
        format!("Bearer {token}"),
    )
}
