//! Chat session controller and the interactive front end around it.
//!
//! [`ChatSession`] holds the conversation state and knows nothing about the
//! terminal; [`ChatRepl`] drives it from an inquire prompt.

/// Slash command parsing and autocomplete.
pub mod command;
mod repl;
mod session;
mod ui;

pub use repl::{ChatRepl, ReplConfig};
pub use session::{
    ChatSession, ERROR_CONTACTING_SERVER, MessageRecord, NO_RESPONSE, PendingQuestion, Rejection,
    Reply, Sender, SubmitOutcome,
};
