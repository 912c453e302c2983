//! Server-side question/answer log.

use anyhow::{Context, Result};

use super::{ConnectionOptions, connect};
use crate::chat::NO_RESPONSE;
use crate::transport::HistoryEntry;
use crate::ui::{Spinner, Style};

/// Fetches and prints up to `limit` of the service's most recent exchanges.
pub async fn run_history(limit: usize, connection: &ConnectionOptions) -> Result<()> {
    let (resolved, transport) = connect(connection)?;

    let spinner = Spinner::new("Fetching history...");
    let entries = transport.history().await;
    spinner.stop();

    let entries =
        entries.with_context(|| format!("Failed to fetch history from {}", resolved.endpoint))?;

    if entries.is_empty() {
        println!("No questions recorded yet.");
        return Ok(());
    }

    for entry in entries.iter().take(limit) {
        print_entry(entry);
    }

    Ok(())
}

fn print_entry(entry: &HistoryEntry) {
    if let Some(timestamp) = &entry.timestamp {
        println!("{}", Style::secondary(timestamp));
    }
    println!("  {}  {}", Style::user("you"), entry.question);
    println!(
        "  {}  {}",
        Style::bot("bot"),
        entry
            .answer
            .as_deref()
            .filter(|answer| !answer.is_empty())
            .unwrap_or(NO_RESPONSE)
    );
    println!();
}
