use anyhow::Result;
use std::io::{self, Write};

/// Read an API key from stdin. The value lives only for this run.
pub fn prompt_secret(label: &str) -> Result<Option<String>> {
    eprint!("{}: ", label);
    io::stderr().flush().ok();
    let mut s = String::new();
    io::stdin().read_line(&mut s)?;
    Ok(normalize_key(&s))
}

/// Pick the key to use: an explicit one wins, otherwise ask if requested.
pub fn resolve_api_key(explicit: Option<String>, ask: bool) -> Result<Option<String>> {
    if let Some(key) = explicit.as_deref().and_then(normalize_key) {
        return Ok(Some(key));
    }
    if ask {
        return prompt_secret("Enter your OpenAI API key (kept private, won't be saved)");
    }
    Ok(None)
}

fn normalize_key(raw: &str) -> Option<String> {
    let key = raw.trim();
    if key.is_empty() {
        None
    } else {
        Some(key.to_string())
    }
}
