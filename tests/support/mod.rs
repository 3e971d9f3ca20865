//! Helpers shared by the mock-server test suites.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use immich_sdk::client::RetryReason;
use immich_sdk::{ClientOptions, ImmichClient, RequestLog};
use reqwest::{Method, StatusCode};

pub const API_KEY: &str = "test-key";

/// Options with millisecond backoff so retry tests stay fast.
pub fn fast_options(max_retries: u32) -> ClientOptions {
    ClientOptions {
        max_retries,
        retry_initial_delay: Duration::from_millis(1),
        retry_max_delay: Duration::from_millis(5),
        ..Default::default()
    }
}

/// Records every sink call as a line of text.
#[derive(Default)]
pub struct RecordingLog {
    events: Mutex<Vec<String>>,
}

impl RecordingLog {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.events()
            .iter()
            .filter(|e| e.starts_with(prefix))
            .count()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl RequestLog for RecordingLog {
    fn request_started(&self, method: &Method, path: &str) {
        self.push(format!("start {method} {path}"));
    }

    fn retrying(&self, path: &str, reason: &RetryReason<'_>, attempt: u32, _delay: Duration) {
        self.push(format!("retry {attempt} {reason} {path}"));
    }

    fn request_finished(&self, method: &Method, path: &str, status: StatusCode, _elapsed: Duration) {
        self.push(format!("finish {method} {path} {}", status.as_u16()));
    }
}

/// A client pointed at `url` with fast retries and a recording sink.
pub fn client(url: &str, max_retries: u32) -> (ImmichClient, Arc<RecordingLog>) {
    client_with(url, fast_options(max_retries))
}

pub fn client_with(url: &str, options: ClientOptions) -> (ImmichClient, Arc<RecordingLog>) {
    let log = Arc::new(RecordingLog::default());
    let client = ImmichClient::with_options(url, API_KEY, options)
        .unwrap()
        .with_request_log(log.clone());
    (client, log)
}
