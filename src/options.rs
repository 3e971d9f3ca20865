use std::time::Duration;

use crate::error::{ImmichError, Result};

/// Configures timeout, retry and logging behavior of the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientOptions {
    /// Per-attempt request timeout.
    pub timeout: Duration,
    /// Maximum number of attempts per call, including the first one.
    /// `0` is treated as `1`.
    pub max_retries: u32,
    /// Emit request/retry/completion log events.
    pub enable_logging: bool,
    /// Delay before the first retry; doubles on each subsequent retry.
    pub retry_initial_delay: Duration,
    /// Upper bound for a single retry delay.
    pub retry_max_delay: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_retries: 3,
            enable_logging: true,
            retry_initial_delay: Duration::from_secs(1),
            retry_max_delay: Duration::from_secs(10),
        }
    }
}

impl ClientOptions {
    /// Effective attempt cap.
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.max(1)
    }

    /// Reads overrides from the environment on top of [`ClientOptions::default`].
    ///
    /// - `IMMICH_TIMEOUT_SECS`: request timeout in (fractional) seconds
    /// - `IMMICH_MAX_RETRIES`: attempt cap
    /// - `IMMICH_ENABLE_LOGGING`: `true`/`false`/`1`/`0`
    ///
    /// Unset variables keep their default; malformed ones are an error.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        if let Some(raw) = non_empty(lookup("IMMICH_TIMEOUT_SECS")) {
            let secs: f64 = raw
                .parse()
                .map_err(|_| ImmichError::Config(format!("IMMICH_TIMEOUT_SECS is not a number: {raw}")))?;
            opts.timeout = Duration::try_from_secs_f64(secs)
                .map_err(|_| ImmichError::Config(format!("IMMICH_TIMEOUT_SECS is out of range: {raw}")))?;
        }
        if let Some(raw) = non_empty(lookup("IMMICH_MAX_RETRIES")) {
            opts.max_retries = raw.parse().map_err(|_| {
                ImmichError::Config(format!("IMMICH_MAX_RETRIES is not a non-negative integer: {raw}"))
            })?;
        }
        if let Some(raw) = non_empty(lookup("IMMICH_ENABLE_LOGGING")) {
            opts.enable_logging = match raw.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(ImmichError::Config(format!(
                        "IMMICH_ENABLE_LOGGING is not a boolean: {raw}"
                    )))
                }
            };
        }

        Ok(opts)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_match_documented_values() {
        let opts = ClientOptions::default();
        assert_eq!(opts.timeout, Duration::from_secs(30));
        assert_eq!(opts.max_retries, 3);
        assert!(opts.enable_logging);
        assert_eq!(opts.retry_initial_delay, Duration::from_secs(1));
        assert_eq!(opts.retry_max_delay, Duration::from_secs(10));
    }

    #[test]
    fn zero_retries_still_makes_one_attempt() {
        let opts = ClientOptions {
            max_retries: 0,
            ..Default::default()
        };
        assert_eq!(opts.max_attempts(), 1);
    }

    #[test]
    fn env_overrides_are_applied() {
        let opts = ClientOptions::from_lookup(lookup(&[
            ("IMMICH_TIMEOUT_SECS", "2.5"),
            ("IMMICH_MAX_RETRIES", "5"),
            ("IMMICH_ENABLE_LOGGING", "off"),
        ]))
        .unwrap();
        assert_eq!(opts.timeout, Duration::from_millis(2500));
        assert_eq!(opts.max_retries, 5);
        assert!(!opts.enable_logging);
    }

    #[test]
    fn blank_env_values_keep_defaults() {
        let opts = ClientOptions::from_lookup(lookup(&[("IMMICH_MAX_RETRIES", "  ")])).unwrap();
        assert_eq!(opts, ClientOptions::default());
    }

    #[test]
    fn malformed_env_values_are_rejected() {
        let err = ClientOptions::from_lookup(lookup(&[("IMMICH_MAX_RETRIES", "-1")])).unwrap_err();
        assert!(matches!(err, ImmichError::Config(_)));

        let err = ClientOptions::from_lookup(lookup(&[("IMMICH_ENABLE_LOGGING", "maybe")])).unwrap_err();
        assert!(matches!(err, ImmichError::Config(_)));
    }
}
