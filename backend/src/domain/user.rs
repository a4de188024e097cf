//! Caller identity primitives.
//!
//! Users themselves live with the external identity collaborator. The domain
//! only sees their identifier, wrapped in an [`AuthenticatedIdentity`] once a
//! bearer credential has been resolved.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;
use zeroize::Zeroizing;

/// Validation errors raised when constructing identity values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The identifier was blank.
    #[error("user id must not be empty")]
    EmptyId,
    /// The identifier was not a canonical UUID.
    #[error("user id must be a valid UUID")]
    InvalidId,
    /// The bearer credential was blank.
    #[error("bearer token must not be empty")]
    EmptyToken,
}

/// Stable user identifier, used as the ownership key for projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid);

impl UserId {
    /// Validate and construct a [`UserId`] from text.
    ///
    /// # Errors
    /// Returns [`UserValidationError`] for blank or non-UUID input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let raw = id.as_ref();
        if raw.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if raw.trim() != raw {
            return Err(UserValidationError::InvalidId);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }

    /// Generate a random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for UserId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0.to_string()
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A caller whose bearer credential has been verified.
///
/// Only identity providers (and test fixtures) build these. Handlers pass the
/// value straight into owner-scoped commands and queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedIdentity {
    user_id: UserId,
}

impl AuthenticatedIdentity {
    /// Wrap a verified user identifier.
    #[must_use]
    pub const fn new(user_id: UserId) -> Self {
        Self { user_id }
    }

    /// The verified caller.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }
}

/// Opaque bearer credential presented by a caller.
///
/// The raw value is zeroised on drop and never printed. Stores and logs only
/// ever see its [`fingerprint`](BearerToken::fingerprint).
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(Zeroizing<String>);

impl BearerToken {
    /// Wrap a raw credential.
    ///
    /// # Errors
    /// Returns [`UserValidationError::EmptyToken`] for blank input.
    pub fn new(raw: impl Into<String>) -> Result<Self, UserValidationError> {
        let secret = Zeroizing::new(raw.into());
        if secret.trim().is_empty() {
            return Err(UserValidationError::EmptyToken);
        }
        Ok(Self(secret))
    }

    /// Raw credential text.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }

    /// Lowercase hex SHA-256 digest of the credential.
    ///
    /// # Examples
    /// ```
    /// use taskboard::domain::BearerToken;
    ///
    /// let token = BearerToken::new("secret").unwrap();
    /// assert_eq!(token.fingerprint().len(), 64);
    /// ```
    #[must_use]
    pub fn fingerprint(&self) -> String {
        hex::encode(Sha256::digest(self.0.as_bytes()))
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BearerToken").field(&"<redacted>").finish()
    }
}
