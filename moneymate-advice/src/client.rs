use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::types::{Advice, AdviceError, FallbackReason, LlmSettings};

const MAX_ERROR_BODY: usize = 500;

#[derive(Serialize)]
struct Msg<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct Req<'a> {
    model: &'a str,
    messages: Vec<Msg<'a>>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Deserialize)]
struct Resp {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MsgOut,
}

#[derive(Deserialize)]
struct MsgOut {
    content: Option<String>,
}

/// One-shot chat-completions client for coaching text
#[derive(Debug, Clone)]
pub struct AdviceClient {
    http: reqwest::Client,
    settings: LlmSettings,
}

impl AdviceClient {
    pub fn new(settings: LlmSettings) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().unwrap_or_else(|e| {
            warn!("falling back to default HTTP client: {e}");
            reqwest::Client::new()
        });

        Self { http, settings }
    }

    pub fn settings(&self) -> &LlmSettings {
        &self.settings
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.settings.base_url.trim_end_matches('/')
        )
    }

    /// Ask for advice, turning every failure into a fallback.
    ///
    /// A missing or blank `api_key` skips the request entirely.
    pub async fn advise(&self, api_key: Option<&str>, prompt: &str) -> Advice {
        let Some(key) = api_key.map(str::trim).filter(|k| !k.is_empty()) else {
            info!("no API key supplied; using fallback advice");
            return Advice::Fallback(FallbackReason::MissingCredential);
        };

        match self.request_advice(key, prompt).await {
            Ok(text) => Advice::Generated(text),
            Err(e) => {
                warn!("advice request failed: {e}");
                Advice::Fallback(FallbackReason::Service(e))
            }
        }
    }

    /// Send a single user message and return the first choice's text.
    pub async fn request_advice(&self, api_key: &str, prompt: &str) -> Result<String, AdviceError> {
        let body = Req {
            model: &self.settings.model,
            messages: vec![Msg {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        };

        let url = self.endpoint();
        debug!(
            "POST {} model={} max_tokens={} prompt_chars={}",
            url,
            self.settings.model,
            self.settings.max_tokens,
            prompt.chars().count()
        );

        let resp = self
            .http
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {api_key}"))
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let txt = resp.text().await?;
        if !status.is_success() {
            return Err(AdviceError::Status {
                status: status.as_u16(),
                body: truncate(txt.trim(), MAX_ERROR_BODY),
            });
        }

        let out: Resp =
            serde_json::from_str(&txt).map_err(|e| AdviceError::Decode(e.to_string()))?;
        let choice = out.choices.into_iter().next().ok_or(AdviceError::NoChoices)?;
        let content = choice
            .message
            .content
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or(AdviceError::EmptyContent)?;

        info!("received {} chars of advice", content.chars().count());
        Ok(content)
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}…", &s[..idx]),
        None => s.to_string(),
    }
}
