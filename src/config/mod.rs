//! Configuration file management and endpoint resolution.

mod manager;

pub use manager::{
    AskbotConfig, ConfigFile, ConfigManager, DEFAULT_ENDPOINT, ResolveOptions, ResolvedConfig,
    resolve_config,
};
pub(crate) use manager::validate_endpoint;
