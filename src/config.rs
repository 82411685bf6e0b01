use crate::api::PressDirectory;
use crate::pipeline::{DEFAULT_PAGE_SIZE, PipelineConfig};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const APP_DIR: &str = "vidnews-cli";
pub const CLIENT_ID_VAR: &str = "NAVER_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "NAVER_CLIENT_SECRET";

/// Upper bound the search API accepts for `display`.
const MAX_PAGE_SIZE: u32 = 100;

/// API credentials. Only ever sent as request headers.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Read both credentials from the environment, after loading a `.env`
    /// from the working directory or the config directory if one exists.
    pub fn from_env() -> Result<Self> {
        Self::try_load_dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| -> Result<String> {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .with_context(|| {
                    format!(
                        "{name} not set.\n\n\
                        Export {CLIENT_ID_VAR} and {CLIENT_SECRET_VAR}, or put them in\n  \
                        ./.env or ~/.config/{APP_DIR}/.env"
                    )
                })
        };
        Ok(Self {
            client_id: read(CLIENT_ID_VAR)?,
            client_secret: read(CLIENT_SECRET_VAR)?,
        })
    }

    fn try_load_dotenv() {
        match dotenvy::dotenv() {
            Ok(_) => return,
            Err(e) if e.not_found() => {}
            Err(e) => warn!(error = %e, "could not read ./.env"),
        }
        if let Some(dir) = dirs::config_dir() {
            let path = dir.join(APP_DIR).join(".env");
            if path.exists() {
                load_dotenv_file(&path);
            }
        }
    }
}

/// Load `path` into the environment. A malformed file is logged, not fatal,
/// so the missing-variable error that follows still reaches the user.
fn load_dotenv_file(path: &Path) -> bool {
    match dotenvy::from_path(path) {
        Ok(()) => true,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read .env file");
            false
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_video_filter")]
    pub video_filter: bool,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// Extra domain → publisher names layered over the built-in table.
    #[serde(default)]
    pub press_overrides: BTreeMap<String, String>,
}

pub fn default_keywords() -> Vec<String> {
    [
        "육군",
        "국방",
        "외교",
        "안보",
        "북한",
        "신병교육대",
        "훈련",
        "간부",
        "장교",
        "부사관",
        "병사",
        "용사",
        "군무원",
    ]
    .iter()
    .map(|k| k.to_string())
    .collect()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_video_filter() -> bool {
    true
}

fn default_request_timeout() -> u64 {
    15
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keywords: default_keywords(),
            page_size: default_page_size(),
            video_filter: default_video_filter(),
            request_timeout_secs: default_request_timeout(),
            press_overrides: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(APP_DIR);

        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        Ok(dir)
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`, writing defaults there on first run.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Config::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let mut config: Config = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        config.sanitize();
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn sanitize(&mut self) {
        self.keywords.retain(|k| !k.trim().is_empty());
        if self.keywords.is_empty() {
            self.keywords = default_keywords();
        }
        self.page_size = self.page_size.clamp(1, MAX_PAGE_SIZE);
        if self.request_timeout_secs == 0 {
            self.request_timeout_secs = default_request_timeout();
        }
    }

    pub fn set_page_size(&mut self, page_size: u32) {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
    }

    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            page_size: self.page_size,
            video_filter: self.video_filter,
            press_directory: PressDirectory::with_overrides(&self.press_overrides),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_secret() {
        let creds = Credentials::new("my-id", "hunter2");
        let shown = format!("{:?}", creds);
        assert!(shown.contains("my-id"));
        assert!(!shown.contains("hunter2"));
    }

    #[test]
    fn malformed_dotenv_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "VIDNEWS_TEST_BROKEN=\"unterminated\n").unwrap();
        assert!(!load_dotenv_file(&path));
        assert!(!load_dotenv_file(&dir.path().join("missing.env")));
    }

    #[test]
    fn sanitize_restores_defaults() {
        let mut config = Config {
            keywords: vec![" ".to_string()],
            page_size: 500,
            request_timeout_secs: 0,
            ..Config::default()
        };
        config.sanitize();
        assert_eq!(config.keywords.len(), 13);
        assert_eq!(config.page_size, 100);
        assert_eq!(config.request_timeout_secs, 15);
    }
}
