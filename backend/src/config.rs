//! Application settings loaded via OrthoConfig.
//!
//! Values come from `TASKBOARD_*` environment variables, an optional
//! configuration file and command-line flags, in OrthoConfig's usual order.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{DEFAULT_STORE_TIMEOUT, UserId, UserValidationError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Settings for the `taskboard` server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TASKBOARD")]
pub struct AppSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection string. Without it the server keeps state in
    /// memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Per-call storage timeout in milliseconds.
    pub store_timeout_ms: Option<u64>,
    /// Bearer token accepted for [`AppSettings::dev_user_id`].
    pub dev_token: Option<String>,
    /// User the development token authenticates.
    pub dev_user_id: Option<String>,
    /// Emit JSON log lines instead of plain text. Read through
    /// [`AppSettings::log_json`], which defaults to `true`.
    pub log_json: Option<bool>,
}

/// Errors raised while interpreting loaded settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// `bind_addr` is not a socket address.
    #[error("invalid bind address {value:?}: {source}")]
    BindAddr {
        /// Offending value.
        value: String,
        /// Parser error.
        #[source]
        source: std::net::AddrParseError,
    },
    /// `dev_user_id` is not a UUID.
    #[error("invalid development user id: {0}")]
    DevUserId(#[from] UserValidationError),
    /// `pool_max_size` is zero.
    #[error("pool_max_size must be at least 1")]
    PoolMaxSize,
    /// Only one half of the development identity was supplied.
    #[error("dev_token and dev_user_id must be set together")]
    IncompleteDevIdentity,
}

impl AppSettings {
    /// Listening address, `0.0.0.0:8080` unless configured.
    ///
    /// # Errors
    ///
    /// [`SettingsError::BindAddr`] when the value does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|source| SettingsError::BindAddr {
            value: value.to_owned(),
            source,
        })
    }

    /// Pool size, 10 unless configured.
    ///
    /// # Errors
    ///
    /// [`SettingsError::PoolMaxSize`] when the configured size is zero.
    pub fn pool_max_size(&self) -> Result<u32, SettingsError> {
        match self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE) {
            0 => Err(SettingsError::PoolMaxSize),
            size => Ok(size),
        }
    }

    /// Storage timeout applied by the lifecycle services.
    #[must_use]
    pub fn store_timeout(&self) -> Duration {
        self.store_timeout_ms
            .map_or(DEFAULT_STORE_TIMEOUT, Duration::from_millis)
    }

    /// Whether logs are emitted as JSON, `true` unless configured.
    #[must_use]
    pub fn log_json(&self) -> bool {
        self.log_json.unwrap_or(true)
    }

    /// The configured development identity, if both halves are present.
    ///
    /// # Errors
    ///
    /// [`SettingsError::IncompleteDevIdentity`] when only one half is set and
    /// [`SettingsError::DevUserId`] when the user id is not a UUID.
    pub fn dev_identity(&self) -> Result<Option<(String, UserId)>, SettingsError> {
        match (&self.dev_token, &self.dev_user_id) {
            (None, None) => Ok(None),
            (Some(token), Some(user)) => Ok(Some((token.clone(), UserId::new(user)?))),
            _ => Err(SettingsError::IncompleteDevIdentity),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 7] = [
        "TASKBOARD_BIND_ADDR",
        "TASKBOARD_DATABASE_URL",
        "TASKBOARD_POOL_MAX_SIZE",
        "TASKBOARD_STORE_TIMEOUT_MS",
        "TASKBOARD_DEV_TOKEN",
        "TASKBOARD_DEV_USER_ID",
        "TASKBOARD_LOG_JSON",
    ];

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("taskboard")]).expect("config should load")
    }

    fn cleared() -> Vec<(&'static str, Option<String>)> {
        VARS.iter().map(|name| (*name, None)).collect()
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(cleared());

        let settings = load_from_empty_args();

        assert_eq!(
            settings.bind_addr().expect("default parses"),
            "0.0.0.0:8080".parse::<SocketAddr>().expect("literal")
        );
        assert!(settings.database_url.is_none());
        assert_eq!(settings.pool_max_size().expect("default size"), 10);
        assert_eq!(settings.store_timeout(), DEFAULT_STORE_TIMEOUT);
        assert!(settings.log_json());
        assert!(settings.dev_identity().expect("no identity").is_none());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let user = "3fa85f64-5717-4562-b3fc-2c963f66afa6";
        let mut vars = cleared();
        vars.extend([
            ("TASKBOARD_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            (
                "TASKBOARD_DATABASE_URL",
                Some("postgres://localhost/taskboard".to_owned()),
            ),
            ("TASKBOARD_POOL_MAX_SIZE", Some("3".to_owned())),
            ("TASKBOARD_STORE_TIMEOUT_MS", Some("250".to_owned())),
            ("TASKBOARD_DEV_TOKEN", Some("local-dev".to_owned())),
            ("TASKBOARD_DEV_USER_ID", Some(user.to_owned())),
            ("TASKBOARD_LOG_JSON", Some("false".to_owned())),
        ]);
        let _guard = lock_env(vars);

        let settings = load_from_empty_args();

        assert_eq!(
            settings.bind_addr().expect("configured address"),
            "127.0.0.1:9000".parse::<SocketAddr>().expect("literal")
        );
        assert_eq!(
            settings.database_url.as_deref(),
            Some("postgres://localhost/taskboard")
        );
        assert_eq!(settings.pool_max_size().expect("configured size"), 3);
        assert_eq!(settings.store_timeout(), Duration::from_millis(250));
        assert!(!settings.log_json());
        let (token, id) = settings
            .dev_identity()
            .expect("valid identity")
            .expect("identity configured");
        assert_eq!(token, "local-dev");
        assert_eq!(id.to_string(), user);
    }

    #[rstest]
    fn half_a_dev_identity_is_rejected() {
        let mut vars = cleared();
        vars.push(("TASKBOARD_DEV_TOKEN", Some("local-dev".to_owned())));
        let _guard = lock_env(vars);

        let settings = load_from_empty_args();

        assert!(matches!(
            settings.dev_identity(),
            Err(SettingsError::IncompleteDevIdentity)
        ));
    }

    #[rstest]
    fn malformed_bind_addr_is_reported() {
        let mut vars = cleared();
        vars.push(("TASKBOARD_BIND_ADDR", Some("not-an-address".to_owned())));
        let _guard = lock_env(vars);

        let settings = load_from_empty_args();

        assert!(matches!(
            settings.bind_addr(),
            Err(SettingsError::BindAddr { .. })
        ));
    }

    #[rstest]
    fn zero_pool_size_is_rejected() {
        let mut vars = cleared();
        vars.push(("TASKBOARD_POOL_MAX_SIZE", Some("0".to_owned())));
        let _guard = lock_env(vars);

        let settings = load_from_empty_args();

        assert!(matches!(
            settings.pool_max_size(),
            Err(SettingsError::PoolMaxSize)
        ));
    }

    #[rstest]
    #[case(Some("true"), true)]
    #[case(Some("false"), false)]
    #[case(None, true)]
    fn log_format_follows_the_environment(#[case] raw: Option<&str>, #[case] expected: bool) {
        let mut vars = cleared();
        vars.push(("TASKBOARD_LOG_JSON", raw.map(str::to_owned)));
        let _guard = lock_env(vars);

        let settings = load_from_empty_args();

        assert_eq!(settings.log_json(), expected);
    }
}
