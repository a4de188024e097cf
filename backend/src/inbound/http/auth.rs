//! Bearer authentication extractor.
//!
//! Handlers take an [`Authenticated`] argument. Extraction reads the
//! `Authorization: Bearer <token>` header and resolves it through the
//! [`IdentityProvider`](crate::domain::ports::IdentityProvider) held in
//! [`HttpState`]. Requests without a valid credential are answered with
//! `401` before the handler body runs.

use actix_web::http::header::AUTHORIZATION;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::LocalBoxFuture;
use tracing::{debug, error};

use crate::domain::{AuthenticatedIdentity, BearerToken, Error, bounded};

use super::state::HttpState;

const BEARER_PREFIX: &str = "bearer ";

/// Identity of the caller, resolved from the bearer credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Authenticated(pub AuthenticatedIdentity);

impl Authenticated {
    /// The resolved identity.
    #[must_use]
    pub const fn identity(self) -> AuthenticatedIdentity {
        self.0
    }
}

fn bearer_token(req: &HttpRequest) -> Result<BearerToken, Error> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| Error::unauthorized("Missing bearer token"))?;
    let value = header
        .to_str()
        .map_err(|_| Error::unauthorized("Malformed authorization header"))?;
    let credential = value
        .get(..BEARER_PREFIX.len())
        .filter(|scheme| scheme.eq_ignore_ascii_case(BEARER_PREFIX))
        .and_then(|_| value.get(BEARER_PREFIX.len()..))
        .ok_or_else(|| Error::unauthorized("Missing bearer token"))?;
    BearerToken::new(credential.trim()).map_err(|_| Error::unauthorized("Missing bearer token"))
}

impl FromRequest for Authenticated {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let parsed = bearer_token(req);
        let app_state = req.app_data::<web::Data<HttpState>>().cloned();
        Box::pin(async move {
            let token = parsed?;
            let state = app_state.ok_or_else(|| {
                error!("HttpState missing from app data; cannot authenticate");
                Error::internal("authentication is not configured")
            })?;
            let resolved = bounded(
                state.identity_timeout,
                "resolve_identity",
                "Failed to verify credentials",
                state.identity.resolve(&token),
            )
            .await?;
            resolved.map(Self).ok_or_else(|| {
                debug!(fingerprint = %token.fingerprint(), "bearer token rejected");
                Error::unauthorized("Invalid or expired token").into()
            })
        })
    }
}
