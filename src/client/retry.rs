//! Outcome classification and backoff for the transport retry loop.

use std::fmt;
use std::time::Duration;

use reqwest::StatusCode;

use crate::options::ClientOptions;

/// The class of a single HTTP exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// 4xx other than 422 and 429.
    ClientError,
    /// 422.
    Validation,
    /// 429.
    RateLimited,
    /// 5xx and above.
    ServerError,
    /// Connect failure or read/write timeout.
    ConnectionFailure,
}

impl Outcome {
    pub fn from_status(status: StatusCode) -> Self {
        match status.as_u16() {
            200..=299 => Self::Success,
            422 => Self::Validation,
            429 => Self::RateLimited,
            s if s >= 500 => Self::ServerError,
            _ => Self::ClientError,
        }
    }

    /// `Some(ConnectionFailure)` for transport errors worth retrying.
    pub fn from_transport(err: &reqwest::Error) -> Option<Self> {
        (err.is_connect() || err.is_timeout()).then_some(Self::ConnectionFailure)
    }

    pub fn is_retryable(self) -> bool {
        matches!(
            self,
            Self::RateLimited | Self::ServerError | Self::ConnectionFailure
        )
    }
}

/// Why an attempt is being retried.
#[derive(Debug)]
pub enum RetryReason<'a> {
    Status(StatusCode),
    Transport(&'a reqwest::Error),
}

impl fmt::Display for RetryReason<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(status) => write!(f, "HTTP {}", status.as_u16()),
            Self::Transport(err) => write!(f, "{err}"),
        }
    }
}

/// Attempt cap plus capped exponential backoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    initial_delay: Duration,
    max_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, initial_delay: Duration, max_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            initial_delay,
            max_delay,
        }
    }

    pub fn from_options(opts: &ClientOptions) -> Self {
        Self::new(
            opts.max_attempts(),
            opts.retry_initial_delay,
            opts.retry_max_delay,
        )
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Whether attempt number `attempt` (1-based) that ended in `outcome`
    /// should be followed by another one.
    pub fn should_retry(&self, outcome: Outcome, attempt: u32) -> bool {
        outcome.is_retryable() && attempt < self.max_attempts
    }

    /// Delay to wait after attempt number `attempt` (1-based) failed:
    /// `initial * 2^(attempt-1)`, capped at the maximum.
    pub fn delay(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(31);
        self.initial_delay
            .checked_mul(1u32 << exponent)
            .map_or(self.max_delay, |d| d.min(self.max_delay))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_options(&ClientOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_backoff_doubles_and_caps_at_ten_seconds() {
        let policy = RetryPolicy::default();
        let delays: Vec<u64> = (1..=7).map(|a| policy.delay(a).as_secs()).collect();
        assert_eq!(delays, vec![1, 2, 4, 8, 10, 10, 10]);
    }

    #[test]
    fn backoff_is_non_decreasing_for_large_attempt_numbers() {
        let policy = RetryPolicy::new(100, Duration::from_millis(3), Duration::from_millis(50));
        let mut previous = Duration::ZERO;
        for attempt in 1..100 {
            let delay = policy.delay(attempt);
            assert!(delay >= previous);
            assert!(delay <= Duration::from_millis(50));
            previous = delay;
        }
    }

    #[test]
    fn statuses_are_classified() {
        assert_eq!(Outcome::from_status(StatusCode::OK), Outcome::Success);
        assert_eq!(Outcome::from_status(StatusCode::NO_CONTENT), Outcome::Success);
        assert_eq!(Outcome::from_status(StatusCode::NOT_FOUND), Outcome::ClientError);
        assert_eq!(
            Outcome::from_status(StatusCode::UNPROCESSABLE_ENTITY),
            Outcome::Validation
        );
        assert_eq!(
            Outcome::from_status(StatusCode::TOO_MANY_REQUESTS),
            Outcome::RateLimited
        );
        assert_eq!(
            Outcome::from_status(StatusCode::BAD_GATEWAY),
            Outcome::ServerError
        );
    }

    #[test]
    fn only_transient_outcomes_are_retryable() {
        for status in [400u16, 401, 403, 404, 409, 422] {
            let outcome = Outcome::from_status(StatusCode::from_u16(status).unwrap());
            assert!(!outcome.is_retryable(), "{status} must not be retried");
        }
        for status in [429u16, 500, 502, 503, 504] {
            let outcome = Outcome::from_status(StatusCode::from_u16(status).unwrap());
            assert!(outcome.is_retryable(), "{status} must be retried");
        }
        assert!(Outcome::ConnectionFailure.is_retryable());
    }

    #[test]
    fn attempt_cap_is_enforced() {
        let policy = RetryPolicy::new(3, Duration::ZERO, Duration::ZERO);
        assert!(policy.should_retry(Outcome::ServerError, 1));
        assert!(policy.should_retry(Outcome::ServerError, 2));
        assert!(!policy.should_retry(Outcome::ServerError, 3));
        assert!(!policy.should_retry(Outcome::ClientError, 1));
    }

    #[test]
    fn zero_attempts_is_coerced_to_one() {
        let policy = RetryPolicy::new(0, Duration::ZERO, Duration::ZERO);
        assert_eq!(policy.max_attempts(), 1);
        assert!(!policy.should_retry(Outcome::ServerError, 1));
    }
}
