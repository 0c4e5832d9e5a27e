//! Single-retry execution of identity-provider operations.

use std::future::Future;
use std::time::Duration;

use crate::classifier::{ClassifiedError, classify};
use crate::provider::ProviderError;

/// Retry behavior, decoupled from the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts allowed, counting the first one.
    pub max_attempts: u32,
    /// Delay before the retried attempt.
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            backoff: Duration::from_millis(500),
        }
    }
}

/// Run `operation`, retrying once after `policy.backoff` if the failure
/// classifies as retryable.
///
/// At most one retry is performed even when `max_attempts` allows more;
/// `max_attempts <= 1` disables retrying entirely. Terminal failures return
/// immediately without a second invocation. The operation must be safe to
/// repeat; that is the caller's obligation, not enforced here.
///
/// The backoff is an ordinary await, so dropping the returned future during
/// it (e.g. the client disconnected) means the retried call never fires.
pub async fn run_with_retry<T, F, Fut>(
    policy: RetryPolicy,
    mut operation: F,
) -> Result<T, ClassifiedError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ProviderError>>,
{
    match operation().await {
        Ok(value) => Ok(value),
        Err(raw) => {
            let classified = classify(&raw);
            if !classified.retryable || policy.max_attempts <= 1 {
                return Err(classified);
            }
            tracing::debug!(
                backoff_ms = policy.backoff.as_millis() as u64,
                kind = ?classified.kind,
                "retrying provider operation"
            );
            tokio::time::sleep(policy.backoff).await;
            operation().await.map_err(|raw| classify(&raw))
        }
    }
}
