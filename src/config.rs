use crate::teams::DEFAULT_MIN_NAME_LEN;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding `dictionary.path`
pub const NAMES_CSV_ENV: &str = "PLAYBILL_NAMES_CSV";
/// Environment variable overriding `teams.path`
pub const TEAMS_FILE_ENV: &str = "PLAYBILL_TEAMS_FILE";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dictionary: DictionaryConfig,
    #[serde(default)]
    pub teams: TeamsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct DictionaryConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TeamsConfig {
    pub path: Option<PathBuf>,
    #[serde(default = "default_min_name_len")]
    pub min_name_len: usize,
}

fn default_min_name_len() -> usize {
    DEFAULT_MIN_NAME_LEN
}

impl Default for TeamsConfig {
    fn default() -> Self {
        Self { path: None, min_name_len: DEFAULT_MIN_NAME_LEN }
    }
}

#[derive(Debug, Serialize, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        // If config doesn't exist, create default
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save_to(&config_path)?;
            return Ok(default_config.with_env_overrides());
        }

        Ok(Self::load_from(&config_path)?.with_env_overrides())
    }

    /// Read an explicit config file without applying environment overrides
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).context("Failed to write config file")?;

        Ok(())
    }

    /// Apply `PLAYBILL_NAMES_CSV` and `PLAYBILL_TEAMS_FILE` when set
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(path) = env::var_os(NAMES_CSV_ENV).filter(|v| !v.is_empty()) {
            self.dictionary.path = Some(PathBuf::from(path));
        }
        if let Some(path) = env::var_os(TEAMS_FILE_ENV).filter(|v| !v.is_empty()) {
            self.teams.path = Some(PathBuf::from(path));
        }
        self
    }
}

fn get_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "playbill", "playbill")
        .context("Failed to determine config directory")?;

    Ok(proj_dirs.config_dir().join("config.toml"))
}
