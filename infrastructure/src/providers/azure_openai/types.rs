//! Wire types for the Azure OpenAI chat completions API
//!
//! Converts domain transcript entries into request bodies and extracts
//! the reply text from responses.

use quizbot_application::GatewayError;
use quizbot_domain::{GenerationParams, Message};
use serde::{Deserialize, Serialize};

// ─── Domain → Azure ──────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub messages: Vec<ChatMessage<'a>>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
    pub stop: &'a [String],
    pub stream: bool,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: Vec<ContentPart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentPart<'a> {
    Text { text: &'a str },
}

/// Build a request body from a transcript and the fixed parameters.
pub fn build_request<'a>(
    transcript: &'a [Message],
    params: &'a GenerationParams,
) -> ChatCompletionRequest<'a> {
    ChatCompletionRequest {
        messages: transcript
            .iter()
            .map(|m| ChatMessage {
                role: m.role.as_str(),
                content: vec![ContentPart::Text { text: &m.content }],
            })
            .collect(),
        max_tokens: params.max_tokens,
        temperature: params.temperature,
        frequency_penalty: params.frequency_penalty,
        presence_penalty: params.presence_penalty,
        stop: &params.stop,
        stream: params.stream,
    }
}

// ─── Azure → Domain ──────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Extract the first choice's text.
pub fn extract_reply(response: ChatCompletionResponse) -> Result<String, GatewayError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| GatewayError::InvalidResponse("response has no choices".to_string()))?;

    choice.message.content.ok_or_else(|| {
        GatewayError::InvalidResponse(format!(
            "choice has no content (finish_reason: {})",
            choice.finish_reason.as_deref().unwrap_or("unknown")
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let transcript = vec![Message::system("persona"), Message::user("こんにちは")];
        let params = GenerationParams::default();
        let body = serde_json::to_value(build_request(&transcript, &params)).unwrap();

        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"][0]["type"], "text");
        assert_eq!(body["messages"][1]["content"][0]["text"], "こんにちは");
        assert_eq!(body["max_tokens"], 1000);
        assert_eq!(body["temperature"], 0.5);
        assert_eq!(body["frequency_penalty"], 0.0);
        assert_eq!(body["stop"][0], "\n");
        assert_eq!(body["stream"], false);
    }

    #[test]
    fn test_extract_reply() {
        let json = r#"{"choices":[{"message":{"role":"assistant","content":"やあ"},"finish_reason":"stop"}]}"#;
        let response: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(extract_reply(response).unwrap(), "やあ");
    }

    #[test]
    fn test_extract_reply_without_choices() {
        let response: ChatCompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(
            extract_reply(response),
            Err(GatewayError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_extract_reply_filtered_content() {
        let json = r#"{"choices":[{"message":{"role":"assistant"},"finish_reason":"content_filter"}]}"#;
        let response: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        let err = extract_reply(response).unwrap_err();
        assert!(err.to_string().contains("content_filter"));
    }
}
