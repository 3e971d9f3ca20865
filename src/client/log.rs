//! Request logging sink.

use std::time::Duration;

use reqwest::{Method, StatusCode};

use super::retry::RetryReason;

/// Receives best-effort notifications about each logical call.
///
/// Implementations must not panic. Swap in a custom sink with
/// [`BaseClient::with_request_log`](super::BaseClient::with_request_log).
pub trait RequestLog: Send + Sync {
    /// Before the first attempt.
    fn request_started(&self, method: &Method, path: &str);

    /// Before sleeping ahead of attempt `attempt + 1`.
    fn retrying(&self, path: &str, reason: &RetryReason<'_>, attempt: u32, delay: Duration);

    /// After a terminal HTTP response was received (success or mapped error).
    fn request_finished(&self, method: &Method, path: &str, status: StatusCode, elapsed: Duration);
}

/// Default sink: `tracing` events with target `immich_sdk`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl RequestLog for TracingLog {
    fn request_started(&self, method: &Method, path: &str) {
        tracing::debug!(target: "immich_sdk", "{method} {path}");
    }

    fn retrying(&self, path: &str, reason: &RetryReason<'_>, attempt: u32, delay: Duration) {
        tracing::warn!(
            target: "immich_sdk",
            attempt,
            delay_ms = delay.as_millis() as u64,
            "Retrying after {reason}: {path}"
        );
    }

    fn request_finished(&self, method: &Method, path: &str, status: StatusCode, elapsed: Duration) {
        tracing::debug!(
            target: "immich_sdk",
            "{method} {path} -> {} ({:.2}s)",
            status.as_u16(),
            elapsed.as_secs_f64()
        );
    }
}
