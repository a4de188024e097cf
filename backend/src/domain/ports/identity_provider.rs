//! Port resolving bearer credentials to authenticated callers.
//!
//! Credential issuance (signup, login, password hashing) belongs to an
//! external collaborator. This port only answers "who holds this token?".

use async_trait::async_trait;

use crate::domain::{AuthenticatedIdentity, BearerToken};

use super::define_port_error;

define_port_error! {
    /// Errors raised by identity provider adapters.
    pub enum IdentityProviderError {
        /// Credential store connection could not be established.
        Connection { message: String } =>
            "identity provider connection failed: {message}",
        /// Credential lookup failed during execution.
        Query { message: String } =>
            "identity provider query failed: {message}",
    }
}

/// Port resolving a bearer token to the identity it was issued for.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve `token`. Unknown or expired tokens yield `Ok(None)`.
    async fn resolve(
        &self,
        token: &BearerToken,
    ) -> Result<Option<AuthenticatedIdentity>, IdentityProviderError>;
}

/// Fixture provider that rejects every credential.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureIdentityProvider;

#[async_trait]
impl IdentityProvider for FixtureIdentityProvider {
    async fn resolve(
        &self,
        _token: &BearerToken,
    ) -> Result<Option<AuthenticatedIdentity>, IdentityProviderError> {
        Ok(None)
    }
}
