use chrono::{DateTime, Local};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::transport::{Answer, Transport, TransportError};

/// Bot text used when the service replies without an answer.
pub const NO_RESPONSE: &str = "No response";

/// Bot text used for every transport failure.
pub const ERROR_CONTACTING_SERVER: &str = "Error contacting server";

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(0);

/// Origin of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// One line of the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRecord {
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Local>,
}

impl MessageRecord {
    fn now(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
            timestamp: Local::now(),
        }
    }
}

/// Why a submission was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The input buffer is empty or whitespace only.
    Blank,
    /// Another exchange is still outstanding.
    Pending,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => f.write_str("Nothing to send"),
            Self::Pending => f.write_str("Still waiting for the previous answer"),
        }
    }
}

impl std::error::Error for Rejection {}

/// Which kind of bot record a resolved exchange produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// The service's answer, verbatim.
    Answer,
    /// The service replied without an answer; [`NO_RESPONSE`] was recorded.
    NoResponse,
    /// The exchange failed; [`ERROR_CONTACTING_SERVER`] was recorded.
    Error,
}

/// Result of [`ChatSession::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected(Rejection),
    Replied(Reply),
}

/// An accepted question whose exchange has not been resolved yet.
///
/// Only [`ChatSession::begin_submit`] creates one and [`ChatSession::resolve`]
/// consumes it, so each accepted question gets exactly one reply. The token
/// is bound to the session that issued it.
#[derive(Debug)]
#[must_use = "a pending question must be resolved or the session stays pending"]
pub struct PendingQuestion {
    session_id: u64,
    question: String,
}

impl PendingQuestion {
    pub fn question(&self) -> &str {
        &self.question
    }
}

/// Chat session controller.
///
/// Owns the input buffer, the append-only history and the request gate.
/// The history is only ever exposed as a shared slice.
#[derive(Debug)]
pub struct ChatSession {
    id: u64,
    input_buffer: String,
    history: Vec<MessageRecord>,
    pending: bool,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            id: NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed),
            input_buffer: String::new(),
            history: Vec::new(),
            pending: false,
        }
    }

    pub fn input_buffer(&self) -> &str {
        &self.input_buffer
    }

    pub fn history(&self) -> &[MessageRecord] {
        &self.history
    }

    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    /// Replaces the input buffer verbatim. Allowed while pending.
    pub fn edit_buffer(&mut self, text: impl Into<String>) {
        self.input_buffer = text.into();
    }

    /// Accepts the buffer as a question.
    ///
    /// Records the raw buffer text as a user message, clears the buffer and
    /// closes the gate to further submissions until [`Self::resolve`].
    pub fn begin_submit(&mut self) -> Result<PendingQuestion, Rejection> {
        if self.pending {
            tracing::debug!("submission rejected: exchange in flight");
            return Err(Rejection::Pending);
        }
        if self.input_buffer.trim().is_empty() {
            return Err(Rejection::Blank);
        }

        let question = std::mem::take(&mut self.input_buffer);
        self.history
            .push(MessageRecord::now(Sender::User, question.as_str()));
        self.pending = true;

        Ok(PendingQuestion {
            session_id: self.id,
            question,
        })
    }

    /// Records the bot reply for `question` and reopens the gate.
    ///
    /// Returns `None` and records nothing if `question` was issued by
    /// another session. The reply text is then `history().last()`.
    pub fn resolve(
        &mut self,
        question: PendingQuestion,
        result: Result<Answer, TransportError>,
    ) -> Option<Reply> {
        if question.session_id != self.id || !self.pending {
            tracing::warn!(
                session = self.id,
                issued_by = question.session_id,
                "ignoring reply for a question this session is not waiting on"
            );
            return None;
        }
        tracing::trace!(question = %question.question, "resolving exchange");
        Some(self.record_reply(result))
    }

    fn record_reply(&mut self, result: Result<Answer, TransportError>) -> Reply {
        let (reply, text) = match result {
            Ok(answer) => answer.text().map_or_else(
                || (Reply::NoResponse, NO_RESPONSE.to_string()),
                |text| (Reply::Answer, text.to_string()),
            ),
            Err(err) => {
                tracing::warn!(error = %err, "exchange failed");
                (Reply::Error, ERROR_CONTACTING_SERVER.to_string())
            }
        };

        self.history.push(MessageRecord::now(Sender::Bot, text));
        self.pending = false;
        reply
    }

    /// Submits the buffer through `transport` and waits for the reply.
    pub async fn submit<T>(&mut self, transport: &T) -> SubmitOutcome
    where
        T: Transport + ?Sized,
    {
        let question = match self.begin_submit() {
            Ok(question) => question,
            Err(rejection) => return SubmitOutcome::Rejected(rejection),
        };

        let result = transport.ask(question.question()).await;
        SubmitOutcome::Replied(self.record_reply(result))
    }
}
