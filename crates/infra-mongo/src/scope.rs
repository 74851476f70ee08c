// Scoped Timeouts

use jobboard_core::{AppError, Result};
use std::future::Future;
use std::time::Duration;

/// Run `fut` bounded by `timeout`. On expiry the future is dropped, which
/// abandons the in-flight request.
pub(crate) async fn scoped<T, F>(operation: &'static str, timeout: Duration, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(timeout, fut).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(operation, timeout_secs = timeout.as_secs(), "Store operation timed out");
            Err(AppError::Timeout {
                operation,
                timeout_secs: timeout.as_secs(),
            })
        }
    }
}
