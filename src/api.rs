//! Portal HTTP API client
//!
//! Thin JSON-over-HTTP wrapper around `reqwest`. Two operations: a generic
//! `post` helper mirroring the portal's JSON contract, and `submit_form`,
//! which sends a serialized form and decodes the portal's standard reply.
//!
//! A non-2xx status is a *handled* outcome, never an `Err`; only transport
//! or JSON-decoding failures surface as errors.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const USER_AGENT: &str = concat!("campusdesk/", env!("CARGO_PKG_VERSION"));

/// HTTP method declared by a form, defaulting to POST
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMethod {
    #[default]
    Post,
    Get,
}

impl FormMethod {
    /// Parse a form's declared method; anything unrecognized falls back to POST
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("get") {
            FormMethod::Get
        } else {
            FormMethod::Post
        }
    }
}

/// The portal's standard JSON reply to a form submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServerReply {
    /// Human-readable outcome message
    pub message: Option<String>,
    /// Location the client should navigate to after a successful submit
    pub redirect: Option<String>,
}

/// Decoded outcome of a form submission
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    /// Whether the HTTP status was in the 2xx range
    pub ok: bool,
    pub status: u16,
    pub reply: ServerReply,
}

/// Response of the generic JSON `post` helper
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// Whether the HTTP status was in the 2xx range
    pub ok: bool,
    pub status: u16,
    pub body: serde_json::Value,
}

/// Portal API client
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .gzip(true)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Resolve a form action against the portal base URL. Absolute URLs pass
    /// through; an empty action falls back to the portal root.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if path.is_empty() {
            return self.base_url.clone();
        }
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// POST a JSON body and decode the JSON response.
    ///
    /// `ok` reflects the HTTP status class; a non-2xx response still
    /// resolves successfully.
    pub async fn post(&self, path: &str, body: &serde_json::Value) -> Result<ApiResponse> {
        let url = self.endpoint(path);
        tracing::debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("request to {} failed", url))?;

        let status = response.status();
        let body: serde_json::Value = response
            .json()
            .await
            .with_context(|| format!("invalid JSON from {}", url))?;

        Ok(ApiResponse {
            ok: status.is_success(),
            status: status.as_u16(),
            body,
        })
    }

    /// Submit serialized form fields to the given action URL and decode the
    /// portal's standard reply
    pub async fn submit_form(
        &self,
        action: &str,
        method: FormMethod,
        fields: &[(String, String)],
    ) -> Result<SubmitOutcome> {
        let url = self.endpoint(action);
        tracing::info!("Submitting form to {} ({:?})", url, method);

        let request = match method {
            FormMethod::Post => {
                let mut form = reqwest::multipart::Form::new();
                for (name, value) in fields {
                    form = form.text(name.clone(), value.clone());
                }
                self.http.post(&url).multipart(form)
            }
            FormMethod::Get => {
                let query: Vec<(&str, &str)> = fields
                    .iter()
                    .map(|(n, v)| (n.as_str(), v.as_str()))
                    .collect();
                self.http.get(&url).query(&query)
            }
        };

        let response = request
            .send()
            .await
            .with_context(|| format!("request to {} failed", url))?;

        let status = response.status();
        let reply: ServerReply = response
            .json()
            .await
            .with_context(|| format!("invalid JSON from {}", url))?;

        tracing::debug!("Form submission status {}: {:?}", status, reply);

        Ok(SubmitOutcome {
            ok: status.is_success(),
            status: status.as_u16(),
            reply,
        })
    }
}
