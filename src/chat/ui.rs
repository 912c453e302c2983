//! Chat mode UI components.

use crate::status;
use crate::ui::Style;

use super::command::SlashCommand;
use super::repl::ReplConfig;
use super::session::{MessageRecord, Sender};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(config: &ReplConfig) {
    status!(
        "{} {} - {}",
        Style::header("askbot"),
        Style::version(format!("v{VERSION}")),
        Style::secondary(&config.endpoint)
    );
    status!();
}

pub fn print_goodbye() {
    status!("{}", Style::success("Goodbye!"));
}

pub fn print_config(config: &ReplConfig) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        Style::value(&config.endpoint)
    );
    println!(
        "  {}    {}",
        Style::label("timeout"),
        config.timeout.map_or_else(
            || Style::secondary("(none)"),
            |t| Style::value(format!("{}s", t.as_secs()))
        )
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    for cmd in SlashCommand::ALL {
        println!(
            "  {}  {}",
            Style::command(format!("/{:<7}", cmd.name())),
            Style::secondary(cmd.description())
        );
    }
    println!(
        "  {}",
        Style::hint("Start a message with // to send text beginning with /")
    );
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}

const fn sender_label(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "you",
        Sender::Bot => "bot",
    }
}

pub fn print_record(record: &MessageRecord) {
    let label = match record.sender {
        Sender::User => Style::user(sender_label(record.sender)),
        Sender::Bot => Style::bot(sender_label(record.sender)),
    };
    println!(
        "{} {label}  {}",
        Style::secondary(record.timestamp.format("%H:%M")),
        record.text
    );
    println!();
}

pub fn print_transcript(history: &[MessageRecord]) {
    if history.is_empty() {
        println!("{}", Style::hint("No messages yet."));
        println!();
        return;
    }
    for record in history {
        print_record(record);
    }
}
