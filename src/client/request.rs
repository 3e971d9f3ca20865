//! Request and response values exchanged with [`BaseClient`](super::BaseClient).

use std::fmt::Display;

use reqwest::blocking::multipart;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Ordered query parameters. Keys are sent verbatim; values are rendered
/// with `Display` (`bool` becomes `true`/`false`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, key: &str, value: impl Display) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Adds the pair only when `value` is set.
    pub fn push_opt<T: Display>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.push(key, v),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

/// Percent-encodes one path segment, so a caller-supplied name containing
/// `/`, `?`, `#` or spaces stays inside its segment.
pub(crate) fn path_segment(value: &str) -> String {
    let Ok(mut url) = Url::parse("http://localhost/") else {
        return value.to_string();
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.clear().push(value);
    }
    url.path().trim_start_matches('/').to_string()
}

// ---------------------------------------------------------------------------
// Multipart bodies
// ---------------------------------------------------------------------------

/// A file attached to a [`MultipartForm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub mime: String,
}

/// Multipart form fields and files.
///
/// Kept as plain data so the same form can be rebuilt for every attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartForm {
    fields: Vec<(String, String)>,
    files: Vec<FilePart>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Attaches a file as `application/octet-stream`.
    pub fn file(self, field: impl Into<String>, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.file_with_mime(field, file_name, bytes, "application/octet-stream")
    }

    pub fn file_with_mime(
        mut self,
        field: impl Into<String>,
        file_name: impl Into<String>,
        bytes: Vec<u8>,
        mime: impl Into<String>,
    ) -> Self {
        self.files.push(FilePart {
            field: field.into(),
            file_name: file_name.into(),
            bytes,
            mime: mime.into(),
        });
        self
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn files(&self) -> &[FilePart] {
        &self.files
    }

    pub(crate) fn to_form(&self) -> reqwest::Result<multipart::Form> {
        let mut form = multipart::Form::new();
        for (name, value) in &self.fields {
            form = form.text(name.clone(), value.clone());
        }
        for file in &self.files {
            let part = multipart::Part::bytes(file.bytes.clone())
                .file_name(file.file_name.clone())
                .mime_str(&file.mime)?;
            form = form.part(file.field.clone(), part);
        }
        Ok(form)
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// The body of a request. Exactly one kind per request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(serde_json::Value),
    Bytes(Vec<u8>),
    Multipart(MultipartForm),
}

/// A logical API call: everything needed to (re)send one request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Query,
    body: Option<RequestBody>,
    headers: Vec<(String, String)>,
}

impl ApiRequest {
    /// `path` is relative to the configured base URL, e.g. `/api/albums`.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Query::default(),
            body: None,
            headers: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    /// Serializes `body` as the JSON payload, replacing any previous body.
    pub fn json<T: Serialize + ?Sized>(self, body: &T) -> Result<Self> {
        Ok(self.json_value(serde_json::to_value(body)?))
    }

    pub fn json_value(mut self, body: serde_json::Value) -> Self {
        self.body = Some(RequestBody::Json(body));
        self
    }

    pub fn bytes(mut self, body: Vec<u8>) -> Self {
        self.body = Some(RequestBody::Bytes(body));
        self
    }

    pub fn multipart(mut self, form: MultipartForm) -> Self {
        self.body = Some(RequestBody::Multipart(form));
        self
    }

    /// Adds a header sent on top of the defaults; a header with the same
    /// name as a default (including `x-api-key`) replaces it.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        self.query.pairs()
    }

    pub fn body(&self) -> Option<&RequestBody> {
        self.body.as_ref()
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// A fully read HTTP response.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl ApiResponse {
    pub(crate) fn read(response: reqwest::blocking::Response) -> reqwest::Result<Self> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes()?.to_vec();
        Ok(Self::from_parts(status, headers, body))
    }

    pub fn from_parts(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// `true` when the `content-type` header announces a JSON body.
    pub fn is_json(&self) -> bool {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.starts_with("application/json"))
            .unwrap_or(false)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.body
    }

    /// Body decoded as UTF-8, with invalid sequences replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn query_skips_unset_values_and_keeps_order() {
        let query = Query::new()
            .push("albumId", "a-1")
            .push_opt("assetId", None::<&str>)
            .push_opt("shared", Some(true))
            .push("size", 10);
        assert_eq!(
            query.pairs(),
            &[
                ("albumId".to_string(), "a-1".to_string()),
                ("shared".to_string(), "true".to_string()),
                ("size".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn path_segments_are_percent_encoded() {
        assert_eq!(path_segment("rating"), "rating");
        assert_eq!(path_segment("a/b?c#d e"), "a%2Fb%3Fc%23d%20e");
        assert_eq!(path_segment("100%"), "100%25");
    }

    #[test]
    fn last_body_kind_wins() {
        let request = ApiRequest::post("/api/assets")
            .json_value(serde_json::json!({"a": 1}))
            .multipart(MultipartForm::new().text("deviceId", "cli"));
        assert!(matches!(request.body(), Some(RequestBody::Multipart(_))));
    }

    #[test]
    fn multipart_form_builds_with_custom_mime() {
        let form = MultipartForm::new()
            .text("deviceAssetId", "x")
            .file_with_mime("assetData", "a.jpg", vec![1, 2, 3], "image/jpeg");
        assert_eq!(form.fields().len(), 1);
        assert_eq!(form.files()[0].mime, "image/jpeg");
        assert!(form.to_form().is_ok());
    }

    #[test]
    fn invalid_mime_is_reported() {
        let form = MultipartForm::new().file_with_mime("file", "a", vec![], "not a mime");
        assert!(form.to_form().is_err());
    }

    #[test]
    fn response_detects_json_content_type() {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        let resp = ApiResponse::from_parts(StatusCode::OK, headers, br#"{"ok":true}"#.to_vec());
        assert!(resp.is_json());
        let value: serde_json::Value = resp.json().unwrap();
        assert_eq!(value["ok"], true);

        let plain = ApiResponse::from_parts(StatusCode::OK, HeaderMap::new(), b"ok".to_vec());
        assert!(!plain.is_json());
        assert_eq!(plain.text(), "ok");
    }
}
