//! Transport seam between the chat session and the remote answer service.
//!
//! The session only sees the [`Transport`] trait. [`HttpTransport`] is the
//! production implementation; tests substitute their own.

mod http;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

pub use http::{HistoryEntry, HttpTransport};

/// Decoded body of a successful `/ask` exchange.
///
/// The service is expected to reply with `{"answer": "..."}`, but any JSON
/// body is a well-formed reply; one without a usable `answer` is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answer {
    answer: Option<String>,
}

impl Answer {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            answer: Some(text.into()),
        }
    }

    /// A reply that carries no answer field.
    pub const fn empty() -> Self {
        Self { answer: None }
    }

    /// Reads the `answer` field of a reply body.
    ///
    /// Strings are taken verbatim and non-zero numbers as their JSON text.
    /// Anything else (missing field, null, bool, zero, array, object, or a
    /// body that is not an object) counts as no answer.
    pub fn from_body(body: &Value) -> Self {
        let answer = match body.get("answer") {
            Some(Value::String(text)) => Some(text.clone()),
            Some(Value::Number(n)) if n.as_f64().is_some_and(|f| f.abs() > 0.0) => {
                Some(n.to_string())
            }
            _ => None,
        };
        Self { answer }
    }

    /// The answer text, or `None` if the field was absent, null, or empty.
    pub fn text(&self) -> Option<&str> {
        self.answer.as_deref().filter(|text| !text.is_empty())
    }
}

/// Failure of a single request/response exchange.
///
/// Callers that render to the user collapse every variant into one message;
/// the detail is kept for logs.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with status {status}")]
    Status { url: String, status: StatusCode },

    #[error("malformed response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// One question in, one answer (or error) out.
///
/// Dropping the returned future abandons the exchange.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn ask(&self, question: &str) -> Result<Answer, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_answer_text_present() {
        let answer = Answer::from_body(&json!({"answer": "Hi there"}));
        assert_eq!(answer.text(), Some("Hi there"));
    }

    #[test]
    fn test_answer_missing_field() {
        let answer = Answer::from_body(&json!({}));
        assert_eq!(answer, Answer::empty());
        assert!(answer.text().is_none());
    }

    #[test]
    fn test_answer_null_or_empty_is_treated_as_missing() {
        assert!(Answer::from_body(&json!({"answer": null})).text().is_none());
        assert!(Answer::from_body(&json!({"answer": ""})).text().is_none());
    }

    #[test]
    fn test_answer_ignores_extra_fields() {
        let answer = Answer::from_body(&json!({"answer": "ok", "model": "llama"}));
        assert_eq!(answer.text(), Some("ok"));
    }

    #[test]
    fn test_non_object_bodies_have_no_answer() {
        for body in [json!(["leaked"]), json!("x"), json!(42), json!(null), json!(true)] {
            assert_eq!(Answer::from_body(&body), Answer::empty(), "body: {body}");
        }
    }

    #[test]
    fn test_numeric_answer_is_shown_as_text() {
        assert_eq!(Answer::from_body(&json!({"answer": 42})).text(), Some("42"));
        assert_eq!(Answer::from_body(&json!({"answer": 2.5})).text(), Some("2.5"));
        assert!(Answer::from_body(&json!({"answer": 0})).text().is_none());
    }

    #[test]
    fn test_structured_answer_has_no_text() {
        assert!(Answer::from_body(&json!({"answer": {"text": "hi"}})).text().is_none());
        assert!(Answer::from_body(&json!({"answer": ["hi"]})).text().is_none());
        assert!(Answer::from_body(&json!({"answer": true})).text().is_none());
    }

    #[test]
    fn test_answer_whitespace_is_kept_verbatim() {
        let answer = Answer::new("  spaced  ");
        assert_eq!(answer.text(), Some("  spaced  "));
    }

    #[test]
    fn test_transport_error_display() {
        let err = TransportError::Status {
            url: "http://localhost:8000/ask".to_string(),
            status: StatusCode::BAD_GATEWAY,
        };
        assert!(err.to_string().contains("502"));
        assert!(err.to_string().contains("/ask"));
    }
}
