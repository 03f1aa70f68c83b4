//! Bounded retry with a fixed interval and cooperative cancellation.

use std::fmt::Display;
use std::future::Future;
use std::pin::pin;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 4;
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// How many times to try and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    interval: Duration,
}

impl RetryPolicy {
    /// A `max_attempts` of zero still makes one attempt.
    pub fn new(max_attempts: u32, interval: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            interval,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_INTERVAL)
    }
}

/// Why [`connect`] gave up.
#[derive(Debug, Error)]
pub enum ConnectError<E> {
    /// The cancel signal fired while waiting after `attempt` failed.
    #[error("connect cancelled after attempt {attempt}")]
    Cancelled { attempt: u32 },

    /// Every attempt failed; `last` is the final attempt's error.
    #[error("{last}")]
    Exhausted { attempts: u32, last: E },
}

impl<E> ConnectError<E> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ConnectError::Cancelled { .. })
    }

    /// Number of attempts made before giving up.
    pub fn attempts(&self) -> u32 {
        match self {
            ConnectError::Cancelled { attempt } => *attempt,
            ConnectError::Exhausted { attempts, .. } => *attempts,
        }
    }

    pub fn last_error(&self) -> Option<&E> {
        match self {
            ConnectError::Exhausted { last, .. } => Some(last),
            ConnectError::Cancelled { .. } => None,
        }
    }

    pub fn into_last_error(self) -> Option<E> {
        match self {
            ConnectError::Exhausted { last, .. } => Some(last),
            ConnectError::Cancelled { .. } => None,
        }
    }
}

/// Run `attempt_fn` until it succeeds, attempts run out, or `cancel` fires.
///
/// ## Algorithm
/// 1. Call `attempt_fn(n)` for n = 1, 2, ... and return the first `Ok`
/// 2. After a failure with attempts left, wait `policy.interval()`
/// 3. If `cancel` completes first (or already has), stop with
///    [`ConnectError::Cancelled`]
/// 4. After the last failed attempt, return [`ConnectError::Exhausted`]
///    holding that attempt's error, unless `cancel` has completed by then
///
/// The interval is fixed; there is no backoff. Pass
/// `std::future::pending()` for a signal that never fires.
pub async fn connect<T, E, F, Fut, C>(
    policy: &RetryPolicy,
    cancel: C,
    mut attempt_fn: F,
) -> Result<T, ConnectError<E>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    C: Future<Output = ()>,
    E: Display,
{
    let max_attempts = policy.max_attempts();
    let mut cancel = pin!(cancel);
    let mut attempt = 1;

    loop {
        debug!("Connect attempt {}/{}", attempt, max_attempts);

        let err = match attempt_fn(attempt).await {
            Ok(handle) => {
                if attempt > 1 {
                    info!("Connected on attempt {}/{}", attempt, max_attempts);
                }
                return Ok(handle);
            }
            Err(err) => err,
        };

        if attempt >= max_attempts {
            // Poll once; a cancel that fired during the final attempt wins
            tokio::select! {
                biased;
                _ = &mut cancel => {
                    info!("Connect cancelled after attempt {}", attempt);
                    return Err(ConnectError::Cancelled { attempt });
                }
                _ = std::future::ready(()) => {}
            }

            warn!(
                "Connect attempt {}/{} failed, giving up: {}",
                attempt, max_attempts, err
            );
            return Err(ConnectError::Exhausted {
                attempts: attempt,
                last: err,
            });
        }

        warn!(
            "Connect attempt {}/{} failed, retrying in {:?}: {}",
            attempt,
            max_attempts,
            policy.interval(),
            err
        );

        tokio::select! {
            biased;
            _ = &mut cancel => {
                info!("Connect cancelled after attempt {}", attempt);
                return Err(ConnectError::Cancelled { attempt });
            }
            _ = tokio::time::sleep(policy.interval()) => {}
        }

        attempt += 1;
    }
}
