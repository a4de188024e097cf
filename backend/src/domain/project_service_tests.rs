//! Tests for the project lifecycle service.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{MockProjectRepository, ProjectRepositoryError};
use crate::domain::{AuthenticatedIdentity, ErrorCode, UserId};

#[fixture]
fn identity() -> AuthenticatedIdentity {
    AuthenticatedIdentity::new(UserId::random())
}

fn create_request(identity: AuthenticatedIdentity, title: &str) -> CreateProjectRequest {
    CreateProjectRequest {
        identity,
        title: title.to_owned(),
    }
}

#[rstest]
#[tokio::test]
async fn create_project_stores_under_the_caller(identity: AuthenticatedIdentity) {
    let owner = *identity.user_id();
    let mut repo = MockProjectRepository::new();
    repo.expect_insert_within_quota()
        .withf(move |project, quota| project.owner_id() == &owner && *quota == PROJECT_QUOTA)
        .times(1)
        .return_once(|_, _| Ok(ProjectInsertOutcome::Inserted));

    let service = ProjectLifecycleService::new(Arc::new(repo));
    let project = service
        .create_project(create_request(identity, "Launch"))
        .await
        .expect("create succeeds");

    assert_eq!(project.owner_id(), &owner);
    assert_eq!(project.title(), "Launch");
}

#[rstest]
#[tokio::test]
async fn create_project_reports_quota(identity: AuthenticatedIdentity) {
    let mut repo = MockProjectRepository::new();
    repo.expect_insert_within_quota()
        .times(1)
        .return_once(|_, _| Ok(ProjectInsertOutcome::QuotaExceeded { existing: 4 }));

    let service = ProjectLifecycleService::new(Arc::new(repo));
    let err = service
        .create_project(create_request(identity, "Fifth"))
        .await
        .expect_err("quota exceeded");

    assert_eq!(err.code(), ErrorCode::QuotaExceeded);
    assert_eq!(err.message(), "Project limit reached (max 4 projects)");
    assert_eq!(
        err.details(),
        Some(&serde_json::json!({ "limit": 4, "existing": 4 }))
    );
}

#[rstest]
#[case(ProjectRepositoryError::connection("refused"))]
#[case(ProjectRepositoryError::query("syntax"))]
#[tokio::test]
async fn create_project_maps_store_failures(
    identity: AuthenticatedIdentity,
    #[case] failure: ProjectRepositoryError,
) {
    let mut repo = MockProjectRepository::new();
    repo.expect_insert_within_quota()
        .times(1)
        .return_once(move |_, _| Err(failure));

    let service = ProjectLifecycleService::new(Arc::new(repo));
    let err = service
        .create_project(create_request(identity, "Broken"))
        .await
        .expect_err("store failure");

    assert_eq!(err.code(), ErrorCode::StorageUnavailable);
    assert_eq!(err.message(), "Failed to create project");
}

#[rstest]
#[tokio::test]
async fn list_projects_reads_only_the_callers_projects(identity: AuthenticatedIdentity) {
    let owner = *identity.user_id();
    let stored = vec![Project::create(owner, "One"), Project::create(owner, "Two")];
    let expected = stored.clone();

    let mut repo = MockProjectRepository::new();
    repo.expect_list_by_owner()
        .withf(move |candidate| candidate == &owner)
        .times(1)
        .return_once(move |_| Ok(stored));

    let service = ProjectLifecycleService::new(Arc::new(repo));
    let projects = service
        .list_projects(ListProjectsRequest { identity })
        .await
        .expect("list succeeds");

    assert_eq!(projects, expected);
}

/// Repository whose calls never finish, used to exercise the deadline.
struct StalledProjectRepository;

#[async_trait]
impl ProjectRepository for StalledProjectRepository {
    async fn insert_within_quota(
        &self,
        _project: &Project,
        _quota: usize,
    ) -> Result<ProjectInsertOutcome, ProjectRepositoryError> {
        std::future::pending().await
    }

    async fn list_by_owner(
        &self,
        _owner_id: &UserId,
    ) -> Result<Vec<Project>, ProjectRepositoryError> {
        std::future::pending().await
    }
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn list_projects_times_out_as_storage_unavailable(identity: AuthenticatedIdentity) {
    let service = ProjectLifecycleService::new(Arc::new(StalledProjectRepository))
        .with_store_timeout(Duration::from_millis(50));

    let err = service
        .list_projects(ListProjectsRequest { identity })
        .await
        .expect_err("deadline elapses");

    assert_eq!(err.code(), ErrorCode::StorageUnavailable);
    assert_eq!(err.message(), "Failed to fetch projects");
}
