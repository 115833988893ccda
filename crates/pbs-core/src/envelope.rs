//! Result and error envelopes produced by the forwarding operation.
//!
//! Both envelope kinds are constructed fresh per call, rendered for the
//! requesting adapter, and discarded; nothing is cached or shared.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// Fixed message for the sent-but-no-response failure class.
pub const NO_RESPONSE_MESSAGE: &str = "No response received from server";

/// Rate-limit metadata reported by the upstream via response headers.
///
/// Only the headers actually present are set; absent ones are omitted
/// from the serialized form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RateLimit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset: Option<String>,
}

impl RateLimit {
    /// True when no rate-limit header was present at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.limit.is_none() && self.remaining.is_none() && self.reset.is_none()
    }
}

/// Envelope for a successful (2xx) upstream call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEnvelope {
    pub status: u16,
    pub status_text: String,
    pub headers: BTreeMap<String, String>,
    pub body: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit: Option<RateLimit>,
}

/// Envelope for a failed call; always serializes with `error: true`.
///
/// The variants are the three mutually exclusive failure classes: the
/// upstream answered with a non-2xx status, the request went out but
/// nothing came back, or the request could not even be dispatched. Each
/// variant carries only the fields that exist for its class.
#[derive(Debug, Clone)]
pub enum ErrorEnvelope {
    /// The upstream responded with a non-2xx status code.
    Rejected {
        status: u16,
        status_text: String,
        headers: BTreeMap<String, String>,
        body: Value,
        rate_limit: Option<RateLimit>,
        help_message: Option<String>,
    },
    /// The request was sent but no response was received (includes
    /// timeouts).
    NoResponse { message: String },
    /// The request could not be constructed or dispatched.
    Setup { message: String },
}

impl ErrorEnvelope {
    /// Build the rejected branch, enriching well-known status codes with
    /// a fixed help message.
    #[must_use]
    pub fn rejected(
        status: u16,
        status_text: String,
        headers: BTreeMap<String, String>,
        body: Value,
        rate_limit: Option<RateLimit>,
    ) -> Self {
        Self::Rejected {
            help_message: help_message_for(status).map(str::to_string),
            status,
            status_text,
            headers,
            body,
            rate_limit,
        }
    }

    /// Build the sent-but-no-response branch with its fixed message.
    #[must_use]
    pub fn no_response() -> Self {
        Self::NoResponse {
            message: NO_RESPONSE_MESSAGE.to_string(),
        }
    }

    /// Build the setup-failure branch carrying the raw failure message.
    #[must_use]
    pub fn setup(message: impl Into<String>) -> Self {
        Self::Setup {
            message: message.into(),
        }
    }

    /// Upstream status code, present only for the rejected branch.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Help message, present only for enriched rejected statuses.
    #[must_use]
    pub fn help_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { help_message, .. } => help_message.as_deref(),
            _ => None,
        }
    }
}

/// Fixed hints for the status codes callers most commonly trip over.
fn help_message_for(status: u16) -> Option<&'static str> {
    match status {
        400 => Some("Bad Request. Check if all required parameters are provided correctly."),
        401 => Some(
            "Authentication failed. The PBS API requires proper authentication. \
             Check if you need to register for API access at https://dev.pbs.gov.au/contacts.html",
        ),
        415 => Some("Unsupported Media Type. Make sure to set the Accept header to 'application/json'."),
        429 => Some(
            "Rate limit exceeded. The PBS API has a limit of 5 requests per time window. \
             Wait for the rate limit to reset before making more requests.",
        ),
        _ => None,
    }
}

impl Serialize for ErrorEnvelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("error", &true)?;
        match self {
            Self::Rejected {
                status,
                status_text,
                headers,
                body,
                rate_limit,
                help_message,
            } => {
                map.serialize_entry("status", status)?;
                map.serialize_entry("statusText", status_text)?;
                map.serialize_entry("headers", headers)?;
                map.serialize_entry("body", body)?;
                if let Some(rate_limit) = rate_limit {
                    map.serialize_entry("rateLimit", rate_limit)?;
                }
                if let Some(help) = help_message {
                    map.serialize_entry("helpMessage", help)?;
                }
            }
            Self::NoResponse { message } | Self::Setup { message } => {
                map.serialize_entry("message", message)?;
            }
        }
        map.end()
    }
}

/// Uniform outcome of the forwarding operation, independent of which
/// adapter requested it.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Envelope {
    Success(ResultEnvelope),
    Error(ErrorEnvelope),
}

impl Envelope {
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Render the envelope as the fenced JSON text block every adapter
    /// hands back to its caller.
    #[must_use]
    pub fn render(&self) -> ToolOutput {
        ToolOutput::json_block(self)
    }
}

/// A single piece of tool output content.
#[derive(Debug, Clone, Serialize)]
pub struct ContentItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

/// Tool output in the tool-protocol result shape:
/// `{"content": [{"type": "text", "text": ...}]}`.
#[derive(Debug, Clone, Serialize)]
pub struct ToolOutput {
    pub content: Vec<ContentItem>,
}

impl ToolOutput {
    /// Wrap a serializable value in a fenced ```json text block.
    #[must_use]
    pub fn json_block<T: Serialize>(value: &T) -> Self {
        let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string());
        Self {
            content: vec![ContentItem {
                kind: "text".to_string(),
                text: format!("```json\n{pretty}\n```"),
            }],
        }
    }

    /// First text content item, the piece the CLI prints.
    #[must_use]
    pub fn first_text(&self) -> &str {
        self.content.first().map_or("", |item| item.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejected_envelope_serializes_flat_with_error_flag() {
        let envelope = ErrorEnvelope::rejected(
            429,
            "Too Many Requests".to_string(),
            BTreeMap::new(),
            json!({"detail": "slow down"}),
            Some(RateLimit {
                remaining: Some("0".to_string()),
                ..RateLimit::default()
            }),
        );
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["error"], json!(true));
        assert_eq!(value["status"], json!(429));
        assert_eq!(value["statusText"], json!("Too Many Requests"));
        assert_eq!(value["rateLimit"], json!({"remaining": "0"}));
        assert!(
            value["helpMessage"]
                .as_str()
                .unwrap()
                .contains("Rate limit exceeded")
        );
    }

    #[test]
    fn help_message_present_exactly_for_known_codes() {
        for status in [400, 401, 415, 429] {
            let envelope =
                ErrorEnvelope::rejected(status, String::new(), BTreeMap::new(), Value::Null, None);
            assert!(
                envelope.help_message().is_some_and(|m| !m.is_empty()),
                "expected help message for {status}"
            );
        }
        for status in [403, 404, 500, 503] {
            let envelope =
                ErrorEnvelope::rejected(status, String::new(), BTreeMap::new(), Value::Null, None);
            assert!(
                envelope.help_message().is_none(),
                "unexpected help message for {status}"
            );
        }
    }

    #[test]
    fn no_response_envelope_carries_only_the_fixed_message() {
        let value = serde_json::to_value(ErrorEnvelope::no_response()).unwrap();
        assert_eq!(
            value,
            json!({"error": true, "message": NO_RESPONSE_MESSAGE})
        );
    }

    #[test]
    fn setup_envelope_carries_only_the_raw_message() {
        let value = serde_json::to_value(ErrorEnvelope::setup("bad url")).unwrap();
        assert_eq!(value, json!({"error": true, "message": "bad url"}));
    }

    #[test]
    fn result_envelope_omits_absent_rate_limit() {
        let envelope = ResultEnvelope {
            status: 200,
            status_text: "OK".to_string(),
            headers: BTreeMap::new(),
            body: json!({"data": []}),
            rate_limit: None,
        };
        let value = serde_json::to_value(&envelope).unwrap();
        assert!(value.get("rateLimit").is_none());
        assert_eq!(value["statusText"], json!("OK"));
    }

    #[test]
    fn render_wraps_the_envelope_in_a_fenced_json_block() {
        let envelope = Envelope::Error(ErrorEnvelope::setup("boom"));
        let output = envelope.render();
        assert_eq!(output.content.len(), 1);
        assert_eq!(output.content[0].kind, "text");
        let text = output.first_text();
        assert!(text.starts_with("```json\n"));
        assert!(text.ends_with("\n```"));
        assert!(text.contains("\"error\": true"));
    }
}
