//! Forward request descriptor and upstream URL construction.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::config::ApiConfig;

/// Default per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// HTTP method accepted by the passthrough tool.
///
/// GET is the default and the right choice for nearly all upstream
/// endpoints; POST is passed through without validating that the
/// endpoint supports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Method {
    #[default]
    #[serde(rename = "GET", alias = "get")]
    Get,
    #[serde(rename = "POST", alias = "post")]
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => f.write_str("GET"),
            Self::Post => f.write_str("POST"),
        }
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            other => Err(format!("unsupported HTTP method: {other} (expected GET or POST)")),
        }
    }
}

/// A single passthrough request to the upstream API.
///
/// This mirrors the `pbs_api` tool's input schema; each adapter
/// deserializes or shapes its own input into this type and hands it to
/// [`crate::PbsClient::forward`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ForwardRequest {
    /// Logical endpoint path; the empty string targets the bare base URL.
    pub endpoint: String,
    /// HTTP method, GET unless the caller says otherwise.
    pub method: Method,
    /// Query parameters, passed through unmodified.
    pub params: BTreeMap<String, String>,
    /// Caller-supplied subscription key overriding the configured one.
    pub subscription_key: Option<String>,
    /// Per-call timeout in milliseconds.
    #[serde(rename = "timeout")]
    pub timeout_ms: u64,
}

impl Default for ForwardRequest {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            method: Method::default(),
            params: BTreeMap::new(),
            subscription_key: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ForwardRequest {
    /// Request for the given endpoint with all other fields defaulted.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }
}

/// Join an endpoint path onto the configured base URL.
///
/// An empty endpoint targets the base URL unmodified; anything else is
/// separated from it by exactly one slash. Endpoint contents are not
/// validated beyond that: the upstream is the source of truth for which
/// paths exist.
#[must_use]
pub fn build_url(config: &ApiConfig, endpoint: &str) -> String {
    if endpoint.is_empty() {
        return config.base_url.clone();
    }
    if endpoint.starts_with('/') {
        format!("{}{}", config.base_url, endpoint)
    } else {
        format!("{}/{}", config.base_url, endpoint)
    }
}
