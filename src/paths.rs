//! XDG-style path utilities for configuration.
//!
//! Prefers XDG Base Directory conventions over OS-specific locations, so
//! macOS users also find the config under `~/.config`.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "askbot";

/// Returns the configuration directory for askbot.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/askbot` if `XDG_CONFIG_HOME` is set and non-empty
/// 2. `~/.config/askbot` otherwise
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var_os("XDG_CONFIG_HOME") {
        Some(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join(APP_DIR)),
        _ => {
            let home = dirs::home_dir().context("Failed to determine home directory")?;
            Ok(home.join(".config").join(APP_DIR))
        }
    }
}
