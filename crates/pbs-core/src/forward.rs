//! The forwarding operation: one outbound call, one normalized envelope.
//!
//! All failure classes are folded into [`Envelope::Error`]; nothing
//! escapes this boundary as a Rust error. No retries, no backoff, no
//! cancellation of an in-flight call.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap};
use serde_json::Value;
use tracing::{debug, info};

use crate::config::ApiConfig;
use crate::envelope::{Envelope, ErrorEnvelope, RateLimit, ResultEnvelope};
use crate::request::{ForwardRequest, Method, build_url};

/// Header carrying the subscription key on every upstream request.
pub const SUBSCRIPTION_KEY_HEADER: &str = "Subscription-Key";

const RATE_LIMIT_LIMIT: &str = "x-rate-limit-limit";
const RATE_LIMIT_REMAINING: &str = "x-rate-limit-remaining";
const RATE_LIMIT_RESET: &str = "x-rate-limit-reset";

/// Client for the upstream PBS API.
///
/// Cheap to clone; the inner reqwest client is reference-counted.
#[derive(Debug, Clone)]
pub struct PbsClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl PbsClient {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Forward a request to the upstream API and normalize the outcome.
    ///
    /// Dispatches exactly one outbound call. The per-request timeout
    /// comes from the descriptor; a timeout is reported as the
    /// no-response failure class.
    pub async fn forward(&self, request: &ForwardRequest) -> Envelope {
        info!(
            method = %request.method,
            endpoint = %request.endpoint,
            "Accessing PBS API endpoint"
        );

        let url = build_url(&self.config, &request.endpoint);
        let key = request
            .subscription_key
            .as_deref()
            .unwrap_or(&self.config.subscription_key);

        let builder = match request.method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
        }
        .header(SUBSCRIPTION_KEY_HEADER, key)
        .header(ACCEPT, "application/json")
        .query(&request.params)
        .timeout(Duration::from_millis(request.timeout_ms));

        match builder.send().await {
            Ok(response) => normalize_response(response).await,
            Err(err) if err.is_builder() => Envelope::Error(ErrorEnvelope::setup(err.to_string())),
            Err(err) => {
                debug!(error = %err, "No response from upstream");
                Envelope::Error(ErrorEnvelope::no_response())
            }
        }
    }
}

/// Normalize a response-bearing call: 2xx becomes a result envelope,
/// anything else the rejected error branch. Both share the same header
/// copy and rate-limit extraction.
async fn normalize_response(response: reqwest::Response) -> Envelope {
    let status = response.status();
    let status_text = status.canonical_reason().unwrap_or_default().to_string();
    let headers = flatten_headers(response.headers());
    let rate_limit = extract_rate_limit(response.headers());
    let body = read_body(response).await;

    if status.is_success() {
        Envelope::Success(ResultEnvelope {
            status: status.as_u16(),
            status_text,
            headers,
            body,
            rate_limit,
        })
    } else {
        Envelope::Error(ErrorEnvelope::rejected(
            status.as_u16(),
            status_text,
            headers,
            body,
            rate_limit,
        ))
    }
}

/// Read the body as JSON, falling back to the raw text for upstream
/// responses that are not valid JSON.
async fn read_body(response: reqwest::Response) -> Value {
    match response.text().await {
        Ok(text) if text.is_empty() => Value::Null,
        Ok(text) => serde_json::from_str(&text).unwrap_or(Value::String(text)),
        Err(_) => Value::Null,
    }
}

fn flatten_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect()
}

/// Extract the three rate-limit headers if any of them is present.
fn extract_rate_limit(headers: &HeaderMap) -> Option<RateLimit> {
    let get = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };
    let rate_limit = RateLimit {
        limit: get(RATE_LIMIT_LIMIT),
        remaining: get(RATE_LIMIT_REMAINING),
        reset: get(RATE_LIMIT_RESET),
    };
    if rate_limit.is_empty() {
        None
    } else {
        Some(rate_limit)
    }
}
