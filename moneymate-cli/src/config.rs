use anyhow::{Context, Result};
use moneymate_advice::LlmSettings;
use moneymate_core::{BudgetLine, CategoryBudget};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::state::{ensure_moneymate_home, moneymate_home};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub llm: LlmSection,
    #[serde(default)]
    pub week: WeekSection,
    #[serde(default = "CategoryBudget::default_lines")]
    pub budgets: Vec<BudgetLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSection {
    pub model: String,
    pub base_url: String,
    pub temperature: f64,
    pub max_tokens: u32,
    /// Unset = no client-side timeout
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekSection {
    /// IANA zone used to decide "today"; unset = system local time
    pub timezone: Option<String>,
}

impl Default for LlmSection {
    fn default() -> Self {
        let d = LlmSettings::default();
        Self {
            model: d.model,
            base_url: d.base_url,
            temperature: d.temperature,
            max_tokens: d.max_tokens,
            timeout_secs: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm: LlmSection::default(),
            week: WeekSection::default(),
            budgets: CategoryBudget::default_lines(),
        }
    }
}

impl Config {
    /// Validated budget table built from the `[[budgets]]` entries
    pub fn budget(&self) -> Result<CategoryBudget> {
        CategoryBudget::new(self.budgets.clone()).context("invalid [[budgets]] in config")
    }

    pub fn llm_settings(&self) -> LlmSettings {
        LlmSettings {
            model: self.llm.model.clone(),
            base_url: self.llm.base_url.clone(),
            max_tokens: self.llm.max_tokens,
            temperature: self.llm.temperature,
            timeout: self.llm.timeout_secs.map(Duration::from_secs),
        }
    }

    /// Fail early on settings that would only surface mid-run
    pub fn validate(&self) -> Result<()> {
        self.budget()?;
        if let Some(tz) = &self.week.timezone {
            moneymate_core::time::parse_timezone(tz)?;
        }
        Ok(())
    }
}

/// Default config location; resolving it never touches the filesystem.
pub fn config_path() -> Result<PathBuf> {
    Ok(moneymate_home()?.join("config.toml"))
}

/// Load `path` (or the default location); a missing file means defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let p = match path {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Ok(p) => p,
            Err(e) => {
                tracing::debug!("no settings directory ({e:#}); using defaults");
                return Ok(Config::default());
            }
        },
    };
    if !p.is_file() {
        tracing::debug!("no config at {}; using defaults", p.display());
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    let cfg = parse_config(&s).with_context(|| format!("parse {}", p.display()))?;
    tracing::debug!("loaded config from {}", p.display());
    Ok(cfg)
}

pub fn parse_config(s: &str) -> Result<Config> {
    let cfg: Config = toml::from_str(s)?;
    cfg.validate()?;
    Ok(cfg)
}

pub fn save_config(cfg: &Config, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn init_config(path: Option<&Path>) -> Result<()> {
    let p = match path {
        Some(p) => p.to_path_buf(),
        None => ensure_moneymate_home()?.join("config.toml"),
    };
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default(), &p)?;
    println!("Wrote {}", p.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_defaults() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.budget().unwrap(), CategoryBudget::default());
        assert_eq!(cfg.llm_settings(), LlmSettings::default());
    }

    #[test]
    fn test_partial_override() {
        let cfg = parse_config(
            r#"
[llm]
model = "gpt-4o-mini"
timeout_secs = 20

[week]
timezone = "America/Los_Angeles"

[[budgets]]
category = "Groceries"
limit = 120.0

[[budgets]]
category = "Coffee"
limit = 15.5
"#,
        )
        .unwrap();

        let llm = cfg.llm_settings();
        assert_eq!(llm.model, "gpt-4o-mini");
        assert_eq!(llm.max_tokens, 200);
        assert_eq!(llm.timeout, Some(Duration::from_secs(20)));

        let budget = cfg.budget().unwrap();
        let names: Vec<_> = budget.categories().collect();
        assert_eq!(names, vec!["Groceries", "Coffee"]);
        assert_eq!(budget.limit("Coffee"), Some(15.5));
    }

    #[test]
    fn test_rejects_invalid_budgets_and_timezone() {
        assert!(parse_config("budgets = []").is_err());
        assert!(
            parse_config(
                r#"
[[budgets]]
category = "Food"
limit = -5.0
"#
            )
            .is_err()
        );
        assert!(parse_config("[week]\ntimezone = \"Nowhere/Special\"").is_err());
    }

    #[test]
    fn test_missing_file_is_defaults_without_creating_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        assert_eq!(load_config(Some(&path)).unwrap(), Config::default());
        assert!(!dir.path().join("nested").exists());
    }

    #[test]
    fn test_save_creates_parent_and_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.week.timezone = Some("Europe/Berlin".to_string());
        save_config(&cfg, &path).unwrap();
        assert_eq!(load_config(Some(&path)).unwrap(), cfg);
    }

    #[test]
    fn test_default_round_trips_through_toml() {
        let s = toml::to_string_pretty(&Config::default()).unwrap();
        assert_eq!(parse_config(&s).unwrap(), Config::default());
    }
}
