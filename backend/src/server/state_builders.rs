//! Builders selecting adapters for the shared HTTP state.
//!
//! A configured pool selects the Diesel adapters; otherwise state lives in
//! memory for the lifetime of the process. A development identity, when
//! configured, is consulted before the stored credentials.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};

use taskboard::domain::ports::{
    IdentityProvider, IdentityProviderError, ProjectCommand, ProjectQuery, ProjectRepository,
    TaskCommand, TaskQuery, TaskRepository,
};
use taskboard::domain::{
    AuthenticatedIdentity, BearerToken, ProjectLifecycleService, TaskLifecycleService,
};
use taskboard::inbound::http::state::HttpState;
use taskboard::outbound::memory::{
    InMemoryProjectRepository, InMemoryTaskRepository, StaticIdentityProvider,
};
use taskboard::outbound::persistence::{
    DieselIdentityProvider, DieselProjectRepository, DieselTaskRepository,
};

use super::ServerConfig;

/// Try the static development identity first, then the stored credentials.
struct LayeredIdentityProvider {
    dev: StaticIdentityProvider,
    stored: Option<Arc<dyn IdentityProvider>>,
}

#[async_trait]
impl IdentityProvider for LayeredIdentityProvider {
    async fn resolve(
        &self,
        token: &BearerToken,
    ) -> Result<Option<AuthenticatedIdentity>, IdentityProviderError> {
        if let Some(identity) = self.dev.resolve(token).await? {
            return Ok(Some(identity));
        }
        match &self.stored {
            Some(stored) => stored.resolve(token).await,
            None => Ok(None),
        }
    }
}

fn build_identity(config: &ServerConfig, clock: &Arc<dyn Clock>) -> Arc<dyn IdentityProvider> {
    let dev = config.dev_identity.as_ref().map_or_else(
        StaticIdentityProvider::new,
        |(token, user_id)| StaticIdentityProvider::new().with_token(token, *user_id),
    );
    let stored = config.db_pool.as_ref().map(|pool| {
        Arc::new(DieselIdentityProvider::new(pool.clone(), clock.clone()))
            as Arc<dyn IdentityProvider>
    });
    Arc::new(LayeredIdentityProvider { dev, stored })
}

/// Driving ports for one pair of repositories.
struct LifecyclePorts {
    projects: Arc<dyn ProjectCommand>,
    projects_query: Arc<dyn ProjectQuery>,
    tasks: Arc<dyn TaskCommand>,
    tasks_query: Arc<dyn TaskQuery>,
}

fn lifecycle_ports<P, T>(
    project_repo: P,
    task_repo: T,
    clock: Arc<dyn Clock>,
    store_timeout: Duration,
) -> LifecyclePorts
where
    P: ProjectRepository + 'static,
    T: TaskRepository + 'static,
{
    let projects = Arc::new(
        ProjectLifecycleService::new(Arc::new(project_repo)).with_store_timeout(store_timeout),
    );
    let tasks = Arc::new(
        TaskLifecycleService::new(Arc::new(task_repo), clock).with_store_timeout(store_timeout),
    );
    LifecyclePorts {
        projects: projects.clone(),
        projects_query: projects,
        tasks: tasks.clone(),
        tasks_query: tasks,
    }
}

/// Wire lifecycle services and the identity provider into [`HttpState`].
pub(super) fn build_http_state(config: &ServerConfig) -> HttpState {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let ports = config.db_pool.as_ref().map_or_else(
        || {
            lifecycle_ports(
                InMemoryProjectRepository::new(),
                InMemoryTaskRepository::new(),
                clock.clone(),
                config.store_timeout,
            )
        },
        |pool| {
            lifecycle_ports(
                DieselProjectRepository::new(pool.clone()),
                DieselTaskRepository::new(pool.clone()),
                clock.clone(),
                config.store_timeout,
            )
        },
    );

    HttpState::new(
        ports.projects,
        ports.projects_query,
        ports.tasks,
        ports.tasks_query,
        build_identity(config, &clock),
    )
    .with_identity_timeout(config.store_timeout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;

    use rstest::{fixture, rstest};
    use taskboard::domain::UserId;
    use taskboard::domain::ports::{CreateProjectRequest, ListProjectsRequest};

    #[fixture]
    fn config() -> ServerConfig {
        ServerConfig::new(SocketAddr::from(([127, 0, 0, 1], 0)))
    }

    fn token(raw: &str) -> BearerToken {
        BearerToken::new(raw).expect("non-empty token")
    }

    #[rstest]
    #[tokio::test]
    async fn without_dev_identity_every_token_is_rejected(config: ServerConfig) {
        let state = build_http_state(&config);

        let resolved = state
            .identity
            .resolve(&token("anything"))
            .await
            .expect("lookup succeeds");

        assert!(resolved.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn dev_identity_resolves_to_its_user(config: ServerConfig) {
        let user = UserId::random();
        let state = build_http_state(&config.with_dev_identity(token("local-dev"), user));

        let resolved = state
            .identity
            .resolve(&token("local-dev"))
            .await
            .expect("lookup succeeds")
            .expect("dev token accepted");

        assert_eq!(resolved.user_id(), &user);
    }

    #[rstest]
    #[tokio::test]
    async fn in_memory_state_persists_between_calls(config: ServerConfig) {
        let identity = AuthenticatedIdentity::new(UserId::random());
        let state = build_http_state(&config);

        state
            .projects
            .create_project(CreateProjectRequest {
                identity,
                title: "Allotment".to_owned(),
            })
            .await
            .expect("project created");
        let listed = state
            .projects_query
            .list_projects(ListProjectsRequest { identity })
            .await
            .expect("projects listed");

        assert_eq!(listed.len(), 1);
    }

    #[rstest]
    fn identity_lookups_share_the_store_timeout(config: ServerConfig) {
        let timeout = Duration::from_millis(750);

        let state = build_http_state(&config.with_store_timeout(timeout));

        assert_eq!(state.identity_timeout, timeout);
    }
}
