//! moneymate-advice: coaching prompt construction and the chat-completions client

pub mod client;
pub mod prompt;
pub mod types;

pub use client::AdviceClient;
pub use prompt::build_prompt;
pub use types::{Advice, AdviceError, AdviceSource, FallbackReason, LlmSettings};
