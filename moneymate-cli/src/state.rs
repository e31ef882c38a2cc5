use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Per-user settings directory. Only configuration lives here; transactions,
/// advice and credentials are never written to disk.
pub fn moneymate_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("MONEYMATE_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".moneymate"))
}

pub fn ensure_moneymate_home() -> Result<PathBuf> {
    let dir = moneymate_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
