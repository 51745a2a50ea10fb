//! CompletionBackend implementation for GeminiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{BackendError, CompletionBackend};

use super::client::GeminiClient;

#[async_trait]
impl CompletionBackend for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, BackendError> {
        let api_key = self.api_key()?;
        let body = self.build_request_body(prompt);
        let url = self.api_url();

        debug!(model = %self.config.model, prompt_len = prompt.len(), "Gemini API request");

        let response = self
            .http
            .post(&url)
            .query(&[("key", api_key.as_str())])
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| BackendError::NetworkError(e.without_url().to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(BackendError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(BackendError::ApiError(format!("HTTP {status}: {text}")));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| BackendError::ParseError(e.without_url().to_string()))?;

        debug!(response = %json, "Gemini API response");
        self.parse_response(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeminiConfig;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response on a local port and return the API base.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });
        format!("http://{addr}/v1beta/models")
    }

    async fn read_request(socket: &mut tokio::net::TcpStream) {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                return;
            }
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf);
            if let Some(end) = text.find("\r\n\r\n") {
                let length = text[..end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if buf.len() >= end + 4 + length {
                    return;
                }
            }
        }
    }

    fn client(api_base: String) -> GeminiClient {
        let config = GeminiConfig::default()
            .with_api_base(api_base)
            .with_api_key("test-key")
            .with_timeouts(Duration::from_secs(2), Duration::from_secs(5));
        GeminiClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn successful_response_returns_text() {
        let base = serve_once(
            "200 OK",
            r#"{"candidates":[{"content":{"parts":[{"text":"Drink water."}]}}]}"#,
        )
        .await;
        let reply = client(base).complete("How do I stay hydrated?").await.unwrap();
        assert_eq!(reply, "Drink water.");
    }

    #[tokio::test]
    async fn server_error_is_api_error() {
        let base = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#).await;
        let err = client(base).complete("hello").await.unwrap_err();
        match err {
            BackendError::ApiError(message) => {
                assert!(message.contains("500"));
                assert!(message.contains("boom"));
            }
            other => panic!("expected ApiError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn too_many_requests_is_rate_limited() {
        let base = serve_once("429 Too Many Requests", "{}").await;
        let err = client(base).complete("hello").await.unwrap_err();
        assert!(matches!(err, BackendError::RateLimited));
    }

    #[tokio::test]
    async fn malformed_body_is_parse_error() {
        let base = serve_once("200 OK", "not json").await;
        let err = client(base).complete("hello").await.unwrap_err();
        assert!(matches!(err, BackendError::ParseError(_)));
    }

    #[tokio::test]
    async fn refused_connection_is_network_error() {
        let err = client("http://127.0.0.1:9/v1beta/models".into())
            .complete("hello")
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::NetworkError(_)));
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_request() {
        let config = GeminiConfig::default()
            .with_api_base("http://127.0.0.1:9/v1beta/models")
            .with_api_key_env("MEDCHAT_TEST_UNSET_GEMINI_KEY");
        let err = GeminiClient::new(config)
            .unwrap()
            .complete("hello")
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::MissingApiKey(_)));
    }
}
