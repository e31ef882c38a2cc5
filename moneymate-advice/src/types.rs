use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_MAX_TOKENS: u32 = 200;
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Shown in place of advice whenever the service is not consulted or fails
pub const FALLBACK_HEADER: &str = "AI quota/API issue detected. Showing mock advice:\n";

/// Request parameters for the chat-completions endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct LlmSettings {
    pub model: String,
    /// Scheme + host, without the `/v1/...` path
    pub base_url: String,
    pub max_tokens: u32,
    pub temperature: f64,
    /// None leaves the bound to the service
    pub timeout: Option<Duration>,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            timeout: None,
        }
    }
}

/// Any way the advice request can fail
#[derive(Error, Debug)]
pub enum AdviceError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("advice service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode advice response: {0}")]
    Decode(String),

    #[error("advice response contained no choices")]
    NoChoices,

    #[error("advice response had no text")]
    EmptyContent,
}

#[derive(Debug)]
pub enum FallbackReason {
    MissingCredential,
    Service(AdviceError),
}

/// Outcome of asking for advice. Both variants are normal results.
#[derive(Debug)]
pub enum Advice {
    Generated(String),
    Fallback(FallbackReason),
}

impl Advice {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Advice::Fallback(_))
    }

    /// Text to show the user; never empty.
    pub fn text(&self) -> String {
        match self {
            Advice::Generated(text) => text.clone(),
            Advice::Fallback(FallbackReason::MissingCredential) => FALLBACK_HEADER.to_string(),
            Advice::Fallback(FallbackReason::Service(e)) => format!(
                "{FALLBACK_HEADER}(Error: {e})\nProviding a mock recommendation instead."
            ),
        }
    }

    pub fn source(&self) -> AdviceSource {
        match self {
            Advice::Generated(_) => AdviceSource::Generated,
            Advice::Fallback(FallbackReason::MissingCredential) => AdviceSource::MissingCredential,
            Advice::Fallback(FallbackReason::Service(_)) => AdviceSource::ServiceError,
        }
    }
}

/// Serializable tag for where the advice text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdviceSource {
    Generated,
    MissingCredential,
    ServiceError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_texts() {
        let missing = Advice::Fallback(FallbackReason::MissingCredential);
        assert_eq!(missing.text(), FALLBACK_HEADER);
        assert!(missing.is_fallback());

        let failed = Advice::Fallback(FallbackReason::Service(AdviceError::Status {
            status: 429,
            body: "quota exceeded".to_string(),
        }));
        assert_eq!(
            failed.text(),
            "AI quota/API issue detected. Showing mock advice:\n\
             (Error: advice service returned 429: quota exceeded)\n\
             Providing a mock recommendation instead."
        );
        assert_eq!(failed.source(), AdviceSource::ServiceError);
    }

    #[test]
    fn test_generated_text() {
        let advice = Advice::Generated("Cook at home twice 🍳".to_string());
        assert_eq!(advice.text(), "Cook at home twice 🍳");
        assert!(!advice.is_fallback());
        assert_eq!(
            serde_json::to_value(advice.source()).unwrap(),
            "generated"
        );
    }
}
