use std::fmt;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::log::{RequestLog, TracingLog};
use super::request::{ApiRequest, ApiResponse, MultipartForm, Query, RequestBody};
use super::retry::{Outcome, RetryPolicy, RetryReason};
use crate::error::{ImmichError, Result};
use crate::options::ClientOptions;

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Shared transport used by every resource client: attaches the API key,
/// applies the timeout, retries transient failures and maps error responses.
///
/// Cheap to clone; all state is read-only after construction.
#[derive(Clone)]
pub struct BaseClient {
    base_url: String,
    http: Client,
    options: ClientOptions,
    retry: RetryPolicy,
    log: Arc<dyn RequestLog>,
}

impl fmt::Debug for BaseClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("options", &self.options)
            .finish()
    }
}

impl BaseClient {
    pub fn new(base_url: &str, api_key: &str, options: ClientOptions) -> Result<Self> {
        let mut key = HeaderValue::from_str(api_key)
            .map_err(|e| ImmichError::InvalidHeader(format!("Invalid API key header value: {e}")))?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);

        let http = Client::builder()
            .default_headers(headers)
            .timeout(options.timeout)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            retry: RetryPolicy::from_options(&options),
            options,
            log: Arc::new(TracingLog),
        })
    }

    /// Replaces the log sink (the default emits `tracing` events).
    pub fn with_request_log(mut self, log: Arc<dyn RequestLog>) -> Self {
        self.log = log;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Build the full URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Perform one logical call, retrying 429/5xx responses and connection
    /// failures up to the attempt cap.
    ///
    /// Returns the 2xx response as-is. A terminal non-2xx response becomes
    /// [`ImmichError::Validation`] (422) or [`ImmichError::Http`]; a terminal
    /// transport failure is returned unchanged as [`ImmichError::Transport`].
    pub fn execute(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let headers = extra_headers(request)?;
        let logging = self.options.enable_logging;
        let started = Instant::now();

        if logging {
            self.log.request_started(request.method(), request.path());
        }

        let mut attempt = 1;
        let response = loop {
            match self.send_once(request, &headers) {
                Ok(response) => {
                    let outcome = Outcome::from_status(response.status());
                    if !self.retry.should_retry(outcome, attempt) {
                        break response;
                    }
                    self.wait_before_retry(request, &RetryReason::Status(response.status()), attempt);
                }
                Err(err) => {
                    let retry = Outcome::from_transport(&err)
                        .is_some_and(|outcome| self.retry.should_retry(outcome, attempt));
                    if !retry {
                        return Err(ImmichError::Transport(err));
                    }
                    self.wait_before_retry(request, &RetryReason::Transport(&err), attempt);
                }
            }
            attempt += 1;
        };

        if logging {
            self.log.request_finished(
                request.method(),
                request.path(),
                response.status(),
                started.elapsed(),
            );
        }

        if response.status().is_success() {
            Ok(response)
        } else {
            Err(error_from_response(&response))
        }
    }

    fn send_once(&self, request: &ApiRequest, headers: &HeaderMap) -> reqwest::Result<ApiResponse> {
        let mut builder = self
            .http
            .request(request.method().clone(), self.url(request.path()));

        if !request.query_pairs().is_empty() {
            builder = builder.query(request.query_pairs());
        }

        builder = match request.body() {
            Some(RequestBody::Json(value)) => builder.json(value),
            Some(RequestBody::Bytes(bytes)) => builder.body(bytes.clone()),
            Some(RequestBody::Multipart(form)) => builder.multipart(form.to_form()?),
            None => builder,
        };

        let response = builder.headers(headers.clone()).send()?;
        ApiResponse::read(response)
    }

    fn wait_before_retry(&self, request: &ApiRequest, reason: &RetryReason<'_>, attempt: u32) {
        let delay = self.retry.delay(attempt);
        if self.options.enable_logging {
            self.log.retrying(request.path(), reason, attempt, delay);
        }
        thread::sleep(delay);
    }

    // ---- convenience wrappers for common HTTP verbs -----------------------

    pub fn get(&self, path: &str, query: Query) -> Result<ApiResponse> {
        self.execute(&ApiRequest::get(path).query(query))
    }

    pub fn post_multipart(&self, path: &str, form: MultipartForm) -> Result<ApiResponse> {
        self.execute(&ApiRequest::post(path).multipart(form))
    }

    pub fn delete(&self, path: &str) -> Result<ApiResponse> {
        self.execute(&ApiRequest::delete(path))
    }

    // ---- typed dispatch used by the resource clients -----------------------

    /// Execute and decode the JSON body.
    pub fn fetch<T: DeserializeOwned>(&self, request: &ApiRequest) -> Result<T> {
        self.execute(request)?.json()
    }

    /// Execute and return the raw body, for binary endpoints.
    pub fn fetch_bytes(&self, request: &ApiRequest) -> Result<Vec<u8>> {
        Ok(self.execute(request)?.into_bytes())
    }

    /// Execute and discard the body.
    pub fn send(&self, request: &ApiRequest) -> Result<()> {
        self.execute(request).map(drop)
    }
}

/// Extra headers of a request, validated once per logical call.
fn extra_headers(request: &ApiRequest) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    for (name, value) in request.headers() {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ImmichError::InvalidHeader(format!("{name}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| ImmichError::InvalidHeader(format!("{name}: {e}")))?;
        headers.insert(name, value);
    }
    Ok(headers)
}

// ---------------------------------------------------------------------------
// Error mapping
// ---------------------------------------------------------------------------

/// Map a terminal non-2xx response to `Validation` (422) or `Http`.
pub(crate) fn error_from_response(response: &ApiResponse) -> ImmichError {
    let text = response.text();
    let mut message = None;
    let mut details = None;

    // Malformed JSON leaves message/details unset.
    if response.is_json() {
        if let Ok(Value::Object(data)) = response.json::<Value>() {
            message = ["message", "error"]
                .iter()
                .filter_map(|key| data.get(*key))
                .find_map(message_text);
            if let Some(Value::Array(items)) = data.get("details") {
                details = Some(items.clone());
            }
        }
    }

    let status = response.status().as_u16();
    let message = message.unwrap_or_else(|| text.clone());

    if status == 422 {
        ImmichError::Validation {
            status,
            message,
            details: details.unwrap_or_default(),
        }
    } else {
        ImmichError::Http {
            status,
            message,
            body: response.bytes().to_vec(),
        }
    }
}

/// Empty and falsy values do not count as a message.
fn message_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(a) if a.is_empty() => None,
        Value::Object(o) if o.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::CONTENT_TYPE;
    use reqwest::StatusCode;

    fn response(status: u16, content_type: Option<&str>, body: &str) -> ApiResponse {
        let mut headers = HeaderMap::new();
        if let Some(ct) = content_type {
            headers.insert(CONTENT_TYPE, HeaderValue::from_str(ct).unwrap());
        }
        ApiResponse::from_parts(
            StatusCode::from_u16(status).unwrap(),
            headers,
            body.as_bytes().to_vec(),
        )
    }

    #[test]
    fn maps_json_message_for_http_errors() {
        let err = error_from_response(&response(
            404,
            Some("application/json"),
            r#"{"message":"Not found"}"#,
        ));
        match err {
            ImmichError::Http {
                status,
                message,
                body,
            } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Not found");
                assert_eq!(body, br#"{"message":"Not found"}"#);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn falls_back_to_error_field_then_raw_text() {
        let err = error_from_response(&response(
            400,
            Some("application/json; charset=utf-8"),
            r#"{"message":"","error":"Bad Request"}"#,
        ));
        assert_eq!(err.message(), Some("Bad Request"));

        let err = error_from_response(&response(503, Some("text/plain"), "upstream down"));
        assert_eq!(err.message(), Some("upstream down"));
        assert_eq!(err.status_code(), Some(503));
    }

    #[test]
    fn non_utf8_error_bodies_are_kept_verbatim() {
        let raw = vec![0xff, 0xd8, 0xff, 0x00];
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("image/jpeg"));
        let err = error_from_response(&ApiResponse::from_parts(
            StatusCode::INTERNAL_SERVER_ERROR,
            headers,
            raw.clone(),
        ));
        assert_eq!(err.body(), Some(raw.as_slice()));
        assert_eq!(err.status_code(), Some(500));
        assert!(err.body_text().is_some());
    }

    #[test]
    fn malformed_json_keeps_raw_text() {
        let err = error_from_response(&response(500, Some("application/json"), "{oops"));
        assert_eq!(err.message(), Some("{oops"));
    }

    #[test]
    fn json_array_body_has_no_message() {
        let err = error_from_response(&response(409, Some("application/json"), r#"["a"]"#));
        assert_eq!(err.message(), Some(r#"["a"]"#));
    }

    #[test]
    fn maps_422_to_validation_with_details() {
        let err = error_from_response(&response(
            422,
            Some("application/json"),
            r#"{"message":"bad input","details":[{"field":"name"}]}"#,
        ));
        assert!(err.is_validation());
        assert_eq!(err.status_code(), Some(422));
        assert_eq!(err.message(), Some("bad input"));
        assert_eq!(err.details(), &[serde_json::json!({"field": "name"})]);
    }

    #[test]
    fn validation_without_details_has_empty_list() {
        let err = error_from_response(&response(
            422,
            Some("application/json"),
            r#"{"message":"bad","details":"not a list"}"#,
        ));
        assert!(err.is_validation());
        assert!(err.details().is_empty());
    }

    #[test]
    fn non_string_messages_are_stringified() {
        let err = error_from_response(&response(
            400,
            Some("application/json"),
            r#"{"message":["name must be a string"]}"#,
        ));
        assert_eq!(err.message(), Some(r#"["name must be a string"]"#));
    }

    #[test]
    fn invalid_api_key_is_rejected_at_construction() {
        let err = BaseClient::new("http://localhost", "bad\nkey", ClientOptions::default()).unwrap_err();
        assert!(matches!(err, ImmichError::InvalidHeader(_)));
    }

    #[test]
    fn trailing_slashes_are_stripped_once() {
        let base = BaseClient::new("http://localhost:2283///", "k", ClientOptions::default()).unwrap();
        assert_eq!(base.base_url(), "http://localhost:2283");
        assert_eq!(base.url("/api/albums"), "http://localhost:2283/api/albums");
    }

    #[test]
    fn debug_output_redacts_the_key() {
        let base = BaseClient::new("http://localhost", "secret-key", ClientOptions::default()).unwrap();
        let debug = format!("{base:?}");
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("<redacted>"));
    }
}
