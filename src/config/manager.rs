use anyhow::{Context, Result, bail};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::paths;

/// Endpoint used when neither the CLI nor the config file names one.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000";

/// Settings in the `[askbot]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskbotConfig {
    /// Base URL of the answer service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Per-exchange timeout in seconds. Unset means wait indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/askbot/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub askbot: AskbotConfig,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// The answer service base URL.
    pub endpoint: String,
    /// Per-exchange timeout.
    pub timeout: Option<Duration>,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Priority: CLI options, then the config file, then built-in defaults.
///
/// # Errors
///
/// Returns an error if the endpoint is not an http(s) URL or the timeout is
/// zero.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let endpoint = options
        .endpoint
        .as_ref()
        .or(config_file.askbot.endpoint.as_ref())
        .map_or(DEFAULT_ENDPOINT, String::as_str)
        .trim()
        .to_string();

    validate_endpoint(&endpoint)?;

    let timeout = match options.timeout_secs.or(config_file.askbot.timeout_secs) {
        Some(0) => bail!(
            "Invalid timeout: 0 seconds\n\n\
             Use a positive number of seconds, or leave it unset to wait indefinitely."
        ),
        Some(secs) => Some(Duration::from_secs(secs)),
        None => None,
    };

    Ok(ResolvedConfig { endpoint, timeout })
}

/// Checks that `endpoint` is an absolute http or https URL.
pub(crate) fn validate_endpoint(endpoint: &str) -> Result<()> {
    let url = Url::parse(endpoint).with_context(|| {
        format!(
            "Invalid endpoint URL: '{endpoint}'\n\n\
             Expected something like {DEFAULT_ENDPOINT}"
        )
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        bail!(
            "Invalid endpoint URL: '{endpoint}'\n\n\
             Only http:// and https:// endpoints are supported"
        );
    }

    Ok(())
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/askbot/config.toml`
    /// or `~/.config/askbot/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self::at(paths::config_dir()?.join("config.toml")))
    }

    /// Creates a config manager for an explicit file path.
    pub fn at(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
        crate::fs::atomic_write(&self.config_path, &contents)
    }

    /// Loads the config file, falling back to defaults if it is missing.
    ///
    /// A file that exists but cannot be parsed is an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if !self.config_path.exists() {
            tracing::debug!(path = %self.config_path.display(), "no config file, using defaults");
            return Ok(ConfigFile::default());
        }
        self.load()
    }
}
