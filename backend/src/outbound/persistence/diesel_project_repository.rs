//! PostgreSQL-backed `ProjectRepository` implementation using Diesel ORM.
//!
//! Quota enforcement runs in one transaction that first takes a
//! transaction-scoped advisory lock keyed on the owner. Concurrent creates for
//! the same owner queue behind the lock, so the count they observe always
//! includes every committed sibling.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_types::Text;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{ProjectInsertOutcome, ProjectRepository, ProjectRepositoryError};
use crate::domain::{Project, ProjectId, UserId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewProjectRow, ProjectRow};
use super::pool::{DbPool, PoolError};
use super::schema::projects;

const OWNER_LOCK_SQL: &str = "SELECT pg_advisory_xact_lock(hashtextextended($1, 0))";

/// Diesel-backed implementation of the `ProjectRepository` port.
#[derive(Clone)]
pub struct DieselProjectRepository {
    pool: DbPool,
}

impl DieselProjectRepository {
    /// Create a new repository with the given connection pool.
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ProjectRepositoryError {
    map_basic_pool_error(error, ProjectRepositoryError::connection)
}

fn map_diesel_error(error: &diesel::result::Error) -> ProjectRepositoryError {
    map_basic_diesel_error(
        error,
        ProjectRepositoryError::query,
        ProjectRepositoryError::connection,
    )
}

fn row_to_project(row: ProjectRow) -> Project {
    Project::new(
        ProjectId::from(row.id),
        UserId::from(row.owner_id),
        row.title,
    )
}

/// Result of the locked count-then-insert.
enum Locked {
    Inserted,
    Full(i64),
}

#[async_trait]
impl ProjectRepository for DieselProjectRepository {
    async fn insert_within_quota(
        &self,
        project: &Project,
        quota: usize,
    ) -> Result<ProjectInsertOutcome, ProjectRepositoryError> {
        use diesel_async::AsyncConnection as _;
        use diesel_async::scoped_futures::ScopedFutureExt as _;

        let limit = i64::try_from(quota).unwrap_or(i64::MAX);
        let owner = *project.owner_id().as_uuid();
        let row = NewProjectRow {
            id: *project.id().as_uuid(),
            owner_id: owner,
            title: project.title(),
        };
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let outcome = conn
            .transaction::<_, diesel::result::Error, _>(|tx| {
                async move {
                    diesel::sql_query(OWNER_LOCK_SQL)
                        .bind::<Text, _>(owner.to_string())
                        .execute(tx)
                        .await?;

                    let existing: i64 = projects::table
                        .filter(projects::owner_id.eq(owner))
                        .count()
                        .get_result(tx)
                        .await?;
                    if existing >= limit {
                        return Ok(Locked::Full(existing));
                    }

                    diesel::insert_into(projects::table)
                        .values(&row)
                        .execute(tx)
                        .await?;
                    Ok(Locked::Inserted)
                }
                .scope_boxed()
            })
            .await
            .map_err(|err| map_diesel_error(&err))?;

        match outcome {
            Locked::Inserted => Ok(ProjectInsertOutcome::Inserted),
            Locked::Full(existing) => {
                debug!(owner_id = %owner, existing, "project quota reached");
                Ok(ProjectInsertOutcome::QuotaExceeded {
                    existing: usize::try_from(existing).unwrap_or(usize::MAX),
                })
            }
        }
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Project>, ProjectRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ProjectRow> = projects::table
            .filter(projects::owner_id.eq(owner_id.as_uuid()))
            .order((projects::created_at.asc(), projects::id.asc()))
            .select(ProjectRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(&err))?;

        Ok(rows.into_iter().map(row_to_project).collect())
    }
}
