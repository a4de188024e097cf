//! PostgreSQL-backed `IdentityProvider` reading the `access_tokens` table.
//!
//! Tokens are looked up by SHA-256 fingerprint; raw credentials never reach
//! the database. Issuing tokens is left to whichever service owns signup and
//! login.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use mockable::Clock;
use tracing::debug;

use crate::domain::ports::{IdentityProvider, IdentityProviderError};
use crate::domain::{AuthenticatedIdentity, BearerToken, UserId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::AccessTokenRow;
use super::pool::{DbPool, PoolError};
use super::schema::access_tokens;

/// Diesel-backed implementation of the `IdentityProvider` port.
#[derive(Clone)]
pub struct DieselIdentityProvider {
    pool: DbPool,
    clock: Arc<dyn Clock>,
}

impl DieselIdentityProvider {
    /// Create a provider that judges expiry against `clock`.
    #[must_use]
    pub fn new(pool: DbPool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }
}

fn map_pool_error(error: PoolError) -> IdentityProviderError {
    map_basic_pool_error(error, IdentityProviderError::connection)
}

fn map_diesel_error(error: &diesel::result::Error) -> IdentityProviderError {
    map_basic_diesel_error(
        error,
        IdentityProviderError::query,
        IdentityProviderError::connection,
    )
}

/// Identity for a stored token, or `None` once `expires_at` has passed.
fn live_identity(row: &AccessTokenRow, now: DateTime<Utc>) -> Option<AuthenticatedIdentity> {
    match row.expires_at {
        Some(expires_at) if expires_at <= now => None,
        _ => Some(AuthenticatedIdentity::new(UserId::from(row.user_id))),
    }
}

#[async_trait]
impl IdentityProvider for DieselIdentityProvider {
    async fn resolve(
        &self,
        token: &BearerToken,
    ) -> Result<Option<AuthenticatedIdentity>, IdentityProviderError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<AccessTokenRow> = access_tokens::table
            .find(token.fingerprint())
            .select(AccessTokenRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(&err))?;

        let identity = row.as_ref().and_then(|row| live_identity(row, self.clock.utc()));
        if row.is_some() && identity.is_none() {
            debug!("bearer token has expired");
        }
        Ok(identity)
    }
}
