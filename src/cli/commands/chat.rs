use anyhow::Result;

use super::{ConnectionOptions, connect};
use crate::chat::{ChatRepl, ReplConfig};

pub async fn run_chat(connection: &ConnectionOptions) -> Result<()> {
    let (resolved, transport) = connect(connection)?;

    let config = ReplConfig {
        endpoint: resolved.endpoint,
        timeout: resolved.timeout,
    };
    let mut repl = ChatRepl::new(config, transport);
    repl.run().await
}
