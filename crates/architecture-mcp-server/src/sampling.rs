//! Outbound sampling: the request the relay sends to its host and the
//! normalization of whatever the host sends back.

use async_trait::async_trait;
use rmcp::model::{Content, CreateMessageRequestParam, Role, SamplingMessage};
use rmcp::{Peer, RoleServer};
use serde::Deserialize;
use serde_json::Value;

use crate::config::{ContextScope, SamplingSettings};
use crate::{ConsultationError, Result};

/// A single-prompt sampling request.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingRequest {
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub include_context: ContextScope,
}

impl SamplingRequest {
    pub fn new(prompt: String, settings: &SamplingSettings) -> Self {
        Self {
            prompt,
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
            include_context: settings.include_context,
        }
    }
}

/// Reply as handed back by the host. `content` stays undecoded until
/// [`SamplingReply::text`] runs.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplingReply {
    #[serde(default)]
    pub content: Option<Value>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub stop_reason: Option<String>,
}

/// The three content shapes a host may use for text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ReplyContent {
    Plain(String),
    Single(TextPart),
    Sequence(Vec<Value>),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TextPart {
    pub text: String,
}

impl ReplyContent {
    pub fn decode(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|_| ConsultationError::InvalidFormat)
    }

    /// Only the first element of a sequence is consulted.
    pub fn into_text(self) -> Result<String> {
        match self {
            Self::Plain(text) => Ok(text),
            Self::Single(part) => Ok(part.text),
            Self::Sequence(parts) => parts
                .into_iter()
                .next()
                .and_then(|first| match first.get("text") {
                    Some(Value::String(text)) => Some(text.clone()),
                    _ => None,
                })
                .ok_or(ConsultationError::InvalidFormat),
        }
    }
}

impl SamplingReply {
    pub fn with_content(content: Value) -> Self {
        Self {
            content: Some(content),
            ..Default::default()
        }
    }

    /// Extract non-blank text from the reply content.
    pub fn text(&self) -> Result<String> {
        let content = match &self.content {
            None | Some(Value::Null) => return Err(ConsultationError::MissingContent),
            Some(content) => content.clone(),
        };

        let text = ReplyContent::decode(content)?.into_text()?;
        if text.trim().is_empty() {
            return Err(ConsultationError::EmptyResponse);
        }
        Ok(text)
    }
}

/// Host-side capability that turns a prompt into generated text.
#[async_trait]
pub trait SamplingHost: Send + Sync {
    /// `Ok(None)` means the host answered without a reply object.
    async fn sample(&self, request: SamplingRequest) -> Result<Option<SamplingReply>>;
}

/// [`SamplingHost`] backed by the connected MCP client.
#[derive(Clone)]
pub struct PeerSampler {
    peer: Peer<RoleServer>,
}

impl PeerSampler {
    pub fn new(peer: Peer<RoleServer>) -> Self {
        Self { peer }
    }
}

#[async_trait]
impl SamplingHost for PeerSampler {
    async fn sample(&self, request: SamplingRequest) -> Result<Option<SamplingReply>> {
        let params = CreateMessageRequestParam {
            messages: vec![SamplingMessage {
                role: Role::User,
                content: Content::text(request.prompt),
            }],
            model_preferences: None,
            system_prompt: None,
            include_context: Some(request.include_context.into()),
            temperature: Some(request.temperature),
            max_tokens: request.max_tokens,
            stop_sequences: None,
            metadata: None,
        };

        let result = self
            .peer
            .create_message(params)
            .await
            .map_err(|e| ConsultationError::upstream_call(e.to_string()))?;

        // Re-encode so typed replies go through the same normalizer as raw ones.
        let content = serde_json::to_value(&result.message.content)
            .map_err(|_| ConsultationError::InvalidFormat)?;

        Ok(Some(SamplingReply {
            content: Some(content),
            model: Some(result.model),
            stop_reason: result.stop_reason,
        }))
    }
}
