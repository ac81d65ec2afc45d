//! Bounded retry of per-item work.

use std::future::Future;

use crate::error::Result;

/// What happened across all attempts for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryOutcome<T> {
    /// Value of the first successful attempt.
    pub value: Option<T>,
    /// Attempts actually made.
    pub attempts: u32,
}

impl<T> RetryOutcome<T> {
    pub fn succeeded(&self) -> bool {
        self.value.is_some()
    }

    /// Whether more than one attempt was needed or made.
    pub fn retried(&self) -> bool {
        self.attempts > 1
    }
}

/// Run `op` up to `max_attempts` times, stopping at the first `Some`.
///
/// `op` receives the 1-based attempt number. `Ok(None)` is a recoverable
/// failure and triggers the next attempt; `Err` aborts immediately. No
/// delay is inserted between attempts.
pub async fn with_attempts<T, F, Fut>(max_attempts: u32, mut op: F) -> Result<RetryOutcome<T>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Option<T>>>,
{
    let max_attempts = max_attempts.max(1);
    let mut attempts = 0;

    while attempts < max_attempts {
        attempts += 1;
        if let Some(value) = op(attempts).await? {
            return Ok(RetryOutcome {
                value: Some(value),
                attempts,
            });
        }
        tracing::debug!("Attempt {}/{} failed", attempts, max_attempts);
    }

    Ok(RetryOutcome {
        value: None,
        attempts,
    })
}
