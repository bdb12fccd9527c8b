//! Chat-completions API type definitions.
//!
//! This module defines the request and response structures for the OpenAI-style
//! chat-completions wire format the DeepSeek vision API speaks: message arrays
//! with mixed text/image content parts going out, a `choices` array coming back.

// Author: kelexine (https://github.com/kelexine)

use serde::{Deserialize, Serialize};

/// Chat-completions request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The model that will produce the completion.
    pub model: String,

    /// Input messages.
    pub messages: Vec<ChatMessage>,

    /// The maximum number of tokens to generate before stopping.
    pub max_tokens: u32,
}

/// A single message in the conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// The role of the message sender ("user" or "system").
    pub role: String,
    /// The content of the message.
    pub content: MessageContent,
}

/// Message content - can be simple text or structured parts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

/// Content part types
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// A text content part.
    Text { text: String },
    /// An image reference, either a fetchable URL or an inline data URI.
    ImageUrl { image_url: ImageUrl },
}

/// Image reference with the provider's cost/quality knob.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageUrl {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Chat-completions response body. Error-shaped upstream replies deserialize
/// to an empty `choices` array rather than failing outright.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// One completion candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: ChoiceMessage,
}

/// The message carried by a completion candidate.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatResponse {
    /// Extract the generated description: the first choice's message content.
    /// An empty string counts as absent.
    pub fn description(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .filter(|text| !text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_extraction() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"A cat on a sofa."}}]}"#,
        )
        .unwrap();
        assert_eq!(response.description(), Some("A cat on a sofa."));
    }

    #[test]
    fn test_empty_choices_has_no_description() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert_eq!(response.description(), None);
    }

    #[test]
    fn test_error_shaped_response_has_no_description() {
        let response: ChatResponse =
            serde_json::from_str(r#"{"error":{"message":"invalid api key"}}"#).unwrap();
        assert_eq!(response.description(), None);
    }

    #[test]
    fn test_empty_content_counts_as_absent() {
        let response: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":""}}]}"#).unwrap();
        assert_eq!(response.description(), None);
    }

    #[test]
    fn test_image_part_serialization() {
        let part = ContentPart::ImageUrl {
            image_url: ImageUrl {
                url: "https://example.com/cat.jpg".to_string(),
                detail: Some("low".to_string()),
            },
        };
        let json = serde_json::to_value(&part).unwrap();
        assert_eq!(json["type"], "image_url");
        assert_eq!(json["image_url"]["url"], "https://example.com/cat.jpg");
        assert_eq!(json["image_url"]["detail"], "low");
    }
}
