//! Subcommand implementations.

/// One-shot question command handler.
pub mod ask;

/// Chat mode command handler.
pub mod chat;

/// Configure command handler.
pub mod configure;

/// Server history command handler.
pub mod history;

use anyhow::Result;

use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use crate::transport::HttpTransport;

/// Endpoint overrides shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct ConnectionOptions {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Resolves the connection settings and builds the HTTP transport.
fn connect(options: &ConnectionOptions) -> Result<(ResolvedConfig, HttpTransport)> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default()?;

    let resolved = resolve_config(
        &ResolveOptions {
            endpoint: options.endpoint.clone(),
            timeout_secs: options.timeout_secs,
        },
        &file_config,
    )?;
    tracing::debug!(endpoint = %resolved.endpoint, timeout = ?resolved.timeout, "resolved configuration");

    let transport = HttpTransport::new(resolved.endpoint.clone(), resolved.timeout)?;
    Ok((resolved, transport))
}
