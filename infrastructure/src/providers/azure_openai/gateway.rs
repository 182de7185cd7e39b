//! Azure OpenAI completion gateway
//!
//! Implements `CompletionGateway` over the chat completions REST API.
//! The API is stateless, so each call carries the full transcript.

use super::types;
use crate::config::FileAzureOpenAiConfig;
use async_trait::async_trait;
use quizbot_application::{CompletionGateway, GatewayError};
use quizbot_domain::{GenerationParams, Message};
use std::time::Duration;
use tracing::{debug, info};

/// Connection settings for one Azure OpenAI deployment
#[derive(Clone)]
pub struct AzureOpenAiSettings {
    pub endpoint: String,
    pub api_key: String,
    pub api_version: String,
    /// Deployment name
    pub model: String,
}

impl TryFrom<&FileAzureOpenAiConfig> for AzureOpenAiSettings {
    type Error = GatewayError;

    fn try_from(config: &FileAzureOpenAiConfig) -> Result<Self, Self::Error> {
        let require = |value: &Option<String>, name: &str| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(String::from)
                .ok_or_else(|| GatewayError::NotConfigured(format!("azure_openai.{} is missing", name)))
        };

        Ok(Self {
            endpoint: require(&config.endpoint, "endpoint")?,
            api_key: require(&config.api_key, "api_key")?,
            api_version: require(&config.api_version, "api_version")?,
            model: require(&config.model, "model")?,
        })
    }
}

pub struct AzureOpenAiGateway {
    client: reqwest::Client,
    settings: AzureOpenAiSettings,
}

impl AzureOpenAiGateway {
    /// Create a gateway. With `timeout` set, a request that takes longer
    /// fails with `GatewayError::Timeout`.
    pub fn new(
        settings: AzureOpenAiSettings,
        timeout: Option<Duration>,
    ) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder().user_agent("quizbot/0.4");
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        info!(model = %settings.model, "Azure OpenAI gateway initialized");
        Ok(Self { client, settings })
    }

    /// Endpoint for the configured deployment
    pub fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.settings.endpoint.trim_end_matches('/'),
            self.settings.model,
            self.settings.api_version
        )
    }
}

#[async_trait]
impl CompletionGateway for AzureOpenAiGateway {
    async fn complete(
        &self,
        transcript: &[Message],
        params: &GenerationParams,
    ) -> Result<String, GatewayError> {
        let body = types::build_request(transcript, params);

        debug!(
            model = %self.settings.model,
            messages = transcript.len(),
            "Calling Azure OpenAI chat completions"
        );

        let response = self
            .client
            .post(self.completions_url())
            .header("api-key", &self.settings.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout
                } else {
                    GatewayError::ConnectionError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(GatewayError::RequestFailed(format!(
                "HTTP {} {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown"),
                detail
            )));
        }

        let parsed: types::ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        types::extract_reply(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_config() -> FileAzureOpenAiConfig {
        FileAzureOpenAiConfig {
            endpoint: Some("https://example.openai.azure.com/".to_string()),
            api_key: Some("secret".to_string()),
            api_version: Some("2024-06-01".to_string()),
            model: Some("gpt-4o".to_string()),
        }
    }

    #[test]
    fn test_settings_from_config() {
        let settings = AzureOpenAiSettings::try_from(&file_config()).unwrap();
        assert_eq!(settings.model, "gpt-4o");
    }

    #[test]
    fn test_settings_reject_missing_values() {
        let mut config = file_config();
        config.api_key = None;
        let err = AzureOpenAiSettings::try_from(&config).err().unwrap();
        assert!(err.to_string().contains("api_key"));
    }

    #[test]
    fn test_completions_url() {
        let settings = AzureOpenAiSettings::try_from(&file_config()).unwrap();
        let gateway = AzureOpenAiGateway::new(settings, None).unwrap();
        assert_eq!(
            gateway.completions_url(),
            "https://example.openai.azure.com/openai/deployments/gpt-4o/chat/completions?api-version=2024-06-01"
        );
    }

    // ==================== Local HTTP server ====================

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    async fn read_request(stream: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = stream.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
                let length = head
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Answer one request with `status` and `body`; yields the raw request
    async fn serve_once(
        status: &'static str,
        body: String,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endpoint = format!("http://{}", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let request = read_request(&mut stream).await;
            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
            request
        });
        (endpoint, handle)
    }

    fn gateway_for(endpoint: String, timeout: Option<Duration>) -> AzureOpenAiGateway {
        let mut config = file_config();
        config.endpoint = Some(endpoint);
        let settings = AzureOpenAiSettings::try_from(&config).unwrap();
        AzureOpenAiGateway::new(settings, timeout).unwrap()
    }

    fn transcript() -> Vec<Message> {
        vec![Message::system("persona"), Message::user("こんにちは")]
    }

    #[tokio::test]
    async fn test_complete_returns_first_choice() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"やあ"},"finish_reason":"stop"}]}"#;
        let (endpoint, server) = serve_once("200 OK", body.to_string()).await;
        let gateway = gateway_for(endpoint, None);

        let reply = gateway
            .complete(&transcript(), &GenerationParams::default())
            .await
            .unwrap();
        assert_eq!(reply, "やあ");

        let request = server.await.unwrap();
        assert!(request.starts_with(
            "POST /openai/deployments/gpt-4o/chat/completions?api-version=2024-06-01 "
        ));
        assert!(request.to_ascii_lowercase().contains("api-key: secret"));
        assert!(request.contains(r#""max_tokens":1000"#));
        assert!(request.contains("こんにちは"));
    }

    #[tokio::test]
    async fn test_complete_reports_http_status_and_body() {
        let (endpoint, server) = serve_once("503 Service Unavailable", "busy".to_string()).await;
        let gateway = gateway_for(endpoint, None);

        let err = gateway
            .complete(&transcript(), &GenerationParams::default())
            .await
            .unwrap_err();
        match err {
            GatewayError::RequestFailed(detail) => {
                assert_eq!(detail, "HTTP 503 Service Unavailable: busy");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_complete_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endpoint = format!("http://{}", listener.local_addr().unwrap());
        let server = tokio::spawn(async move {
            // accept and never answer
            let (stream, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
            drop(stream);
        });
        let gateway = gateway_for(endpoint, Some(Duration::from_millis(200)));

        let err = gateway
            .complete(&transcript(), &GenerationParams::default())
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Timeout));
        server.abort();
    }

    #[tokio::test]
    async fn test_complete_reports_refused_connection() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endpoint = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);
        let gateway = gateway_for(endpoint, None);

        let err = gateway
            .complete(&transcript(), &GenerationParams::default())
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::ConnectionError(_)));
    }
}
