//! Deadline applied to every store call made by the lifecycle services.
//!
//! Store calls are the only suspension points in the services. Each one is
//! bounded; an elapsed deadline surfaces as `StorageUnavailable` and is never
//! retried.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tracing::error;

use super::Error;

/// Deadline used when configuration does not supply one.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Await `call` for at most `limit`.
///
/// Port errors are logged here and replaced with a `StorageUnavailable`
/// error carrying `failure_message`, so internal detail never reaches
/// callers.
pub(crate) async fn bounded<T, E, F>(
    limit: Duration,
    operation: &'static str,
    failure_message: &'static str,
    call: F,
) -> Result<T, Error>
where
    F: Future<Output = Result<T, E>>,
    E: Display,
{
    match tokio::time::timeout(limit, call).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => {
            error!(operation, error = %err, "store call failed");
            Err(Error::storage_unavailable(failure_message))
        }
        Err(_) => {
            error!(
                operation,
                timeout_ms = u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
                "store call timed out"
            );
            Err(Error::storage_unavailable(failure_message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;

    #[tokio::test]
    async fn passes_through_success() {
        let value = bounded(Duration::from_secs(1), "op", "failed", async {
            Ok::<_, String>(7)
        })
        .await
        .expect("call succeeds");
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn port_errors_become_storage_unavailable() {
        let err = bounded(Duration::from_secs(1), "op", "Failed to fetch", async {
            Err::<(), _>("connection reset")
        })
        .await
        .expect_err("port error surfaces");
        assert_eq!(err.code(), ErrorCode::StorageUnavailable);
        assert_eq!(err.message(), "Failed to fetch");
    }

    #[tokio::test(start_paused = true)]
    async fn elapsed_deadline_becomes_storage_unavailable() {
        let err = bounded(Duration::from_millis(10), "op", "Failed to fetch", async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok::<_, String>(())
        })
        .await
        .expect_err("deadline elapses");
        assert_eq!(err.code(), ErrorCode::StorageUnavailable);
    }
}
