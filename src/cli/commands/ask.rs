//! One-shot question handler.

use anyhow::{Result, bail};

use super::{ConnectionOptions, connect};
use crate::chat::{ChatSession, Rejection, Reply, SubmitOutcome};
use crate::ui::Spinner;

/// Sends `question` as a single-exchange session and prints the reply.
///
/// The reply text goes to stdout whatever the outcome. Returns
/// `exitcode::UNAVAILABLE` when the service could not be reached.
pub async fn run_ask(
    question: String,
    connection: &ConnectionOptions,
) -> Result<exitcode::ExitCode> {
    let (_, transport) = connect(connection)?;

    let mut session = ChatSession::new();
    session.edit_buffer(question);

    let spinner = Spinner::new("Sending...");
    let outcome = session.submit(&transport).await;
    spinner.stop();

    let reply = match outcome {
        SubmitOutcome::Replied(reply) => reply,
        SubmitOutcome::Rejected(Rejection::Blank) => bail!("Question is empty"),
        SubmitOutcome::Rejected(rejection) => bail!("{rejection}"),
    };

    if let Some(record) = session.history().last() {
        println!("{}", record.text);
    }

    Ok(if reply == Reply::Error {
        exitcode::UNAVAILABLE
    } else {
        exitcode::OK
    })
}
