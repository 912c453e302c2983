//! # askbot - Terminal Chat Client
//!
//! `askbot` is a command-line chat client for question/answer HTTP services.
//! Each message is sent as `POST /ask` with `{"question": "..."}` and the
//! `answer` field of the reply is shown in the conversation.
//!
//! ## Features
//!
//! - **Interactive mode**: Chat-style sessions with `askbot chat`
//! - **One-shot questions**: `askbot ask <question>` for scripts and pipes
//! - **Server history**: Browse what the service has recorded with `askbot history`
//!
//! ## Quick Start
//!
//! ```bash
//! # Start a chat session against the default endpoint
//! askbot
//!
//! # Ask a single question
//! askbot ask What are your hours?
//!
//! # Talk to another service
//! askbot --endpoint https://bot.example.com chat
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/askbot/config.toml`:
//!
//! ```toml
//! [askbot]
//! endpoint = "http://127.0.0.1:8000"
//! timeout_secs = 30
//! ```

/// Chat session controller and interactive mode.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and endpoint resolution.
pub mod config;

/// File system utilities.
pub mod fs;

/// Diagnostic logging setup.
pub mod logging;

/// Global output configuration (quiet mode, colors).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Transport to the remote answer service.
pub mod transport;

/// Terminal UI components (spinner, colors).
pub mod ui;
