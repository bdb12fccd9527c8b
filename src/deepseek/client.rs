// DeepSeek vision API client
// Author: kelexine (https://github.com/kelexine)

use super::models::{ChatMessage, ChatRequest, ChatResponse, ContentPart, ImageUrl, MessageContent};
use crate::config::DeepSeekConfig;
use crate::error::{RelayError, Result};
use crate::utils::logging::sanitize;
use crate::vision::VisionRequest;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Instruction prompt sent alongside every image.
const PROMPT: &str = "What’s in this image? Be brief, it's for image alt description on a social network. Don't write in the first person.";

/// Hard ceiling on generated description length, not negotiable per request.
const MAX_TOKENS: u32 = 85;

/// Provider cost/quality knob for image understanding.
const DETAIL: &str = "low";

/// Client for the DeepSeek vision API.
///
/// Wraps a pooled reqwest client and the upstream settings. One instance is
/// built at startup and shared across requests; each description is a single
/// blocking call with no retry and no streaming.
pub struct VisionClient {
    http_client: Client,
    config: DeepSeekConfig,
}

impl VisionClient {
    /// Create a new vision client with a pooled, keep-alive HTTP client.
    pub fn new(config: &DeepSeekConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .tcp_nodelay(true)
            .use_rustls_tls()
            .build()?;

        debug!("Created HTTP client with connection pooling and keep-alive");

        Ok(Self {
            http_client,
            config: config.clone(),
        })
    }

    /// Request an alt-text description for the referenced image.
    ///
    /// Sends one chat-completions POST and extracts the first choice's
    /// message content. A transport failure surfaces its own message; a reply
    /// without extractable text (non-JSON and error-shaped bodies included)
    /// is a [`RelayError::GenerationFailed`].
    pub async fn describe(&self, request: &VisionRequest) -> Result<String> {
        let url = format!("{}/chat/completions", self.config.api_base_url);
        debug!("Calling chat completions for model: {}", self.config.model);

        let payload = ChatRequest {
            model: self.config.model.clone(),
            messages: build_messages(request),
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(
                "Vision API returned HTTP {} - Response body: {}",
                status,
                sanitize(&body)
            );
        }

        let parsed: ChatResponse = serde_json::from_str(&body).unwrap_or_else(|e| {
            warn!("Vision API response is not completion-shaped: {}", e);
            ChatResponse::default()
        });

        match parsed.description() {
            Some(text) => {
                debug!("Generated description ({} chars)", text.len());
                Ok(text.to_string())
            }
            None => Err(RelayError::GenerationFailed),
        }
    }
}

/// Shape the outbound message array: a user turn carrying the instruction
/// prompt and the image reference, plus a system turn pinning the answer
/// language when one was requested.
fn build_messages(request: &VisionRequest) -> Vec<ChatMessage> {
    let mut messages = vec![ChatMessage {
        role: "user".to_string(),
        content: MessageContent::Parts(vec![
            ContentPart::Text {
                text: PROMPT.to_string(),
            },
            ContentPart::ImageUrl {
                image_url: ImageUrl {
                    url: request.image_url.clone(),
                    detail: Some(DETAIL.to_string()),
                },
            },
        ]),
    }];

    if let Some(lang) = &request.lang {
        messages.push(ChatMessage {
            role: "system".to_string(),
            content: MessageContent::Text(format!(
                "Answer only in this language (code): \"{}\"",
                lang
            )),
        });
    }

    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote_request(lang: Option<&str>) -> VisionRequest {
        VisionRequest::from_remote_url(
            "https://example.com/cat.jpg",
            lang.map(|l| l.to_string()),
        )
    }

    #[test]
    fn test_message_shape_without_lang() {
        let messages = build_messages(&remote_request(None));
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, "user");

        let json = serde_json::to_value(&messages[0]).unwrap();
        assert_eq!(json["content"][0]["type"], "text");
        assert_eq!(json["content"][1]["type"], "image_url");
        assert_eq!(
            json["content"][1]["image_url"]["url"],
            "https://example.com/cat.jpg"
        );
        assert_eq!(json["content"][1]["image_url"]["detail"], "low");
    }

    #[test]
    fn test_lang_appends_system_turn() {
        let messages = build_messages(&remote_request(Some("fr")));
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].role, "system");

        let json = serde_json::to_value(&messages[1]).unwrap();
        assert_eq!(json["content"], "Answer only in this language (code): \"fr\"");
    }

    #[test]
    fn test_request_carries_token_ceiling() {
        let payload = ChatRequest {
            model: "deepseek-vision".to_string(),
            messages: build_messages(&remote_request(None)),
            max_tokens: MAX_TOKENS,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["max_tokens"], 85);
        assert_eq!(json["model"], "deepseek-vision");
    }
}
