//! HTTP server configuration object.

use std::net::SocketAddr;
use std::time::Duration;

use taskboard::domain::{BearerToken, DEFAULT_STORE_TIMEOUT, UserId};
use taskboard::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) store_timeout: Duration,
    pub(crate) dev_identity: Option<(BearerToken, UserId)>,
}

impl ServerConfig {
    /// In-memory adapters, no development identity, default store timeout.
    #[must_use]
    pub const fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            store_timeout: DEFAULT_STORE_TIMEOUT,
            dev_identity: None,
        }
    }

    /// Use Diesel adapters backed by `pool`.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Bound every storage call by `timeout`.
    #[must_use]
    pub const fn with_store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = timeout;
        self
    }

    /// Accept `token` as `user_id` in addition to any stored credentials.
    #[must_use]
    pub fn with_dev_identity(mut self, token: BearerToken, user_id: UserId) -> Self {
        self.dev_identity = Some((token, user_id));
        self
    }
}
