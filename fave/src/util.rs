use std::future::Future;
use std::time::Duration;

use tokio_retry::strategy::ExponentialBackoff;
use tokio_retry::RetryIf;

use twitter_client::Error;

pub const STOP_AFTER_ATTEMPTS: usize = 3;
pub const WAIT_MIN_MS: u64 = 2000;
pub const WAIT_MAX: Duration = Duration::from_secs(10);
pub const MAX_CONCURRENT_REQUESTS: usize = 5;

/// Delays between like attempts: exponential from 2s, capped at 10s, with
/// one fewer delay than total attempts.
pub(crate) fn retry_strategy() -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(WAIT_MIN_MS)
        .max_delay(WAIT_MAX)
        .take(STOP_AFTER_ATTEMPTS - 1)
}

/// Run `f`, retrying server errors on the schedule above. All other errors
/// return on first occurrence; after exhaustion the last error is returned.
pub(crate) fn retry<R, T: Future<Output = Result<R, Error>>, F: FnMut() -> T>(
    f: F,
) -> impl Future<Output = Result<R, Error>> {
    RetryIf::spawn(retry_strategy(), f, |e: &Error| e.retryable())
}
