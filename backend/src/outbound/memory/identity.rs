//! Static identity provider for local runs without a credential store.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::ports::{IdentityProvider, IdentityProviderError};
use crate::domain::{AuthenticatedIdentity, BearerToken, UserId};

/// Resolves a fixed set of tokens, keyed by fingerprint.
///
/// Raw tokens are not retained once the provider is built.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentityProvider {
    users_by_fingerprint: HashMap<String, UserId>,
}

impl StaticIdentityProvider {
    /// Provider that knows no tokens.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `token` as a credential for `user_id`.
    #[must_use]
    pub fn with_token(mut self, token: &BearerToken, user_id: UserId) -> Self {
        self.users_by_fingerprint
            .insert(token.fingerprint(), user_id);
        self
    }

    /// Number of registered tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users_by_fingerprint.len()
    }

    /// Whether no tokens are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users_by_fingerprint.is_empty()
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn resolve(
        &self,
        token: &BearerToken,
    ) -> Result<Option<AuthenticatedIdentity>, IdentityProviderError> {
        Ok(self
            .users_by_fingerprint
            .get(&token.fingerprint())
            .copied()
            .map(AuthenticatedIdentity::new))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolves_registered_tokens_only() {
        let user = UserId::random();
        let known = BearerToken::new("known").expect("token");
        let unknown = BearerToken::new("unknown").expect("token");
        let provider = StaticIdentityProvider::new().with_token(&known, user);

        let resolved = provider.resolve(&known).await.expect("lookup");
        assert_eq!(resolved, Some(AuthenticatedIdentity::new(user)));
        assert!(provider.resolve(&unknown).await.expect("lookup").is_none());
        assert_eq!(provider.len(), 1);
    }
}
