//! Retry policy and response classification shared by both connectors.
//!
//! Every API call is classified into one of three buckets: fatal client
//! errors surface immediately, not-found becomes an absent result at the
//! connector boundary, and rate-limit or server errors are retried with
//! exponential backoff.

use std::future::Future;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use backon::{ExponentialBuilder, Retryable};

use crate::migrate::{emit, MigrationProgress, ProgressCallback};

/// Default maximum retry attempts after the initial call.
pub const DEFAULT_MAX_RETRIES: usize = 5;

/// Default base delay between retries.
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_secs(1);

/// Ceiling on a single backoff wait.
pub const MAX_BACKOFF: Duration = Duration::from_secs(60);

/// Classification of an HTTP status for retry purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// 2xx.
    Success,
    /// 404: a valid absent/empty result, not an error.
    NotFound,
    /// 403, 429, 5xx: retried with backoff.
    Retryable,
    /// 400, 401, and anything else: surfaced immediately.
    Fatal,
}

/// Classify an HTTP status code.
#[must_use]
pub fn classify_status(status: u16) -> StatusClass {
    match status {
        200..=299 => StatusClass::Success,
        404 => StatusClass::NotFound,
        403 | 429 => StatusClass::Retryable,
        500..=599 => StatusClass::Retryable,
        _ => StatusClass::Fatal,
    }
}

/// Retry policy for a single logical API call.
///
/// The delay before attempt `n` (counted from 0) is `base_delay * 2^n`,
/// capped at [`MAX_BACKOFF`]. Jitter is deliberately off so the schedule
/// stays predictable for the operator countdown.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum retry attempts after the initial call.
    pub max_retries: usize,
    /// Base delay; doubled on each retry.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            base_delay: DEFAULT_BASE_DELAY,
        }
    }
}

impl RetryPolicy {
    #[must_use]
    pub fn new(max_retries: usize, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
        }
    }

    /// Build the exponential backoff schedule for this policy.
    #[must_use]
    pub fn backoff(&self) -> ExponentialBuilder {
        ExponentialBuilder::default()
            .with_min_delay(self.base_delay)
            .with_max_delay(MAX_BACKOFF)
            .with_factor(2.0)
            .with_max_times(self.max_retries)
    }

    /// Execute `operation` with retry on errors `is_retryable` accepts.
    ///
    /// The operation runs at most `max_retries + 1` times. Before each wait
    /// a [`MigrationProgress::RetryBackoff`] event is emitted so the CLI can
    /// render a countdown; on eventual success the caller cannot observe
    /// that a retry occurred. After exhaustion the last retryable error is
    /// returned.
    pub async fn run<T, E, F, Fut, IsRetryable, ShortMsg>(
        &self,
        mut operation: F,
        is_retryable: IsRetryable,
        short_message: ShortMsg,
        context: &str,
        on_progress: Option<&ProgressCallback>,
    ) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: std::error::Error + Send + Sync + 'static,
        IsRetryable: Fn(&E) -> bool,
        ShortMsg: Fn(&E) -> String,
    {
        let context = context.to_string();

        // Track attempt number for progress reporting
        let attempt = AtomicU32::new(0);

        let retry_op = || {
            attempt.fetch_add(1, Ordering::SeqCst);
            operation()
        };

        retry_op
            .retry(self.backoff())
            .notify(|err: &E, dur: Duration| {
                let current_attempt = attempt.load(Ordering::SeqCst);
                emit(
                    on_progress,
                    MigrationProgress::RetryBackoff {
                        context: context.clone(),
                        retry_after_ms: dur.as_millis() as u64,
                        attempt: current_attempt,
                    },
                );
                tracing::warn!(
                    "Retryable failure on {}, waiting {:?} (attempt {}): {}",
                    context,
                    dur,
                    current_attempt,
                    short_message(err)
                );
            })
            .when(is_retryable)
            .await
    }
}
