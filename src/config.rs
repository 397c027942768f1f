use crate::stories::{FilterMode, SortMode};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://hckrnews.com";
pub const DEFAULT_COMMENTS_BASE_URL: &str = "https://news.ycombinator.com/item?id=";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub default_filter: FilterMode,
    #[serde(default)]
    pub default_sort: SortMode,
    /// Days fetched at startup, counting today
    #[serde(default = "default_initial_days")]
    pub initial_days: u32,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_comments_base_url")]
    pub comments_base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_initial_days() -> u32 {
    2
}

fn default_request_timeout() -> u64 {
    10
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_comments_base_url() -> String {
    DEFAULT_COMMENTS_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    format!("hckr-tui/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_filter: FilterMode::default(),
            default_sort: SortMode::default(),
            initial_days: default_initial_days(),
            request_timeout_secs: default_request_timeout(),
            base_url: default_base_url(),
            comments_base_url: default_comments_base_url(),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join("hckr-tui");

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        Ok(config_dir)
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            let config = Config::default();
            config.save()?;
            return Ok(config);
        }

        let content = fs::read_to_string(&path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let mut config: Config = serde_json::from_str(content)?;
        config.normalize();
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Clamp values a hand-edited file may have broken.
    pub fn normalize(&mut self) {
        if self.initial_days == 0 {
            self.initial_days = 1;
        }
        if self.request_timeout_secs == 0 {
            self.request_timeout_secs = 1;
        }
        let trimmed = self.base_url.trim().trim_end_matches('/');
        self.base_url = if trimmed.is_empty() {
            default_base_url()
        } else {
            trimmed.to_string()
        };
        if self.comments_base_url.trim().is_empty() {
            self.comments_base_url = default_comments_base_url();
        }
    }

    #[doc(hidden)]
    pub fn test_config() -> Self {
        Self {
            base_url: "http://localhost.invalid".to_string(),
            ..Self::default()
        }
    }
}
