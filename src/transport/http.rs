use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{Answer, Transport, TransportError};

#[derive(Debug, Serialize)]
struct AskRequest<'a> {
    question: &'a str,
}

/// One row of the service's question/answer log, as served by `/history`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HistoryEntry {
    pub question: String,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Transport talking JSON over HTTP to a question/answer service.
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Creates a transport for the service rooted at `base_url`.
    ///
    /// With `timeout` set, an exchange that does not complete in time fails
    /// like any other transport error.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.trim_end_matches('/'))
    }

    /// Fetches the service's recent question/answer log, newest first.
    pub async fn history(&self) -> Result<Vec<HistoryEntry>, TransportError> {
        let url = self.url("history");
        tracing::debug!(%url, "fetching history");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| TransportError::Request {
                url: url.clone(),
                source,
            })?;

        decode_json(url, response).await
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn ask(&self, question: &str) -> Result<Answer, TransportError> {
        let url = self.url("ask");
        tracing::debug!(%url, chars = question.chars().count(), "sending question");

        let response = self
            .client
            .post(&url)
            .json(&AskRequest { question })
            .send()
            .await
            .map_err(|source| TransportError::Request {
                url: url.clone(),
                source,
            })?;

        let body: serde_json::Value = decode_json(url, response).await?;
        let answer = Answer::from_body(&body);
        tracing::debug!(has_answer = answer.text().is_some(), "received reply");
        Ok(answer)
    }
}

async fn decode_json<T: DeserializeOwned>(
    url: String,
    response: Response,
) -> Result<T, TransportError> {
    let status = response.status();
    if !status.is_success() {
        return Err(TransportError::Status { url, status });
    }

    let body = match response.bytes().await {
        Ok(body) => body,
        Err(source) => return Err(TransportError::Request { url, source }),
    };

    serde_json::from_slice(&body).map_err(|source| TransportError::Decode { url, source })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_path() {
        let transport = HttpTransport::new("http://localhost:8000", None).unwrap();
        assert_eq!(transport.url("ask"), "http://localhost:8000/ask");
    }

    #[test]
    fn test_url_trims_trailing_slash() {
        let transport = HttpTransport::new("http://localhost:8000/", None).unwrap();
        assert_eq!(transport.url("ask"), "http://localhost:8000/ask");
    }

    #[test]
    fn test_url_keeps_base_path() {
        let transport = HttpTransport::new("https://example.com/bot/", None).unwrap();
        assert_eq!(transport.url("history"), "https://example.com/bot/history");
    }

    #[test]
    fn test_ask_request_serialization() {
        let body = serde_json::to_value(AskRequest {
            question: "What are your hours?",
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"question": "What are your hours?"}));
    }

    #[test]
    fn test_history_entry_tolerates_missing_fields() {
        let entries: Vec<HistoryEntry> =
            serde_json::from_str(r#"[{"question": "hi"}, {"question": "q", "answer": "a", "timestamp": "2025-01-01 09:00:00"}]"#)
                .unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].answer.is_none());
        assert_eq!(entries[1].answer.as_deref(), Some("a"));
    }
}
