use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use std::time::Duration;

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::session::{ChatSession, Rejection, SubmitOutcome};
use super::ui;
use crate::transport::Transport;
use crate::ui::{Spinner, is_prompt_cancelled};

/// Settings shown by `/config`.
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Base URL of the answer service.
    pub endpoint: String,
    /// Per-exchange timeout, if any.
    pub timeout: Option<Duration>,
}

/// Interactive prompt driving a [`ChatSession`].
pub struct ChatRepl<T> {
    config: ReplConfig,
    session: ChatSession,
    transport: T,
}

impl<T: Transport> ChatRepl<T> {
    pub fn new(config: ReplConfig, transport: T) -> Self {
        Self {
            config,
            session: ChatSession::new(),
            transport,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header(&self.config);

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_placeholder("Type a message...")
                .with_help_message("Enter to send, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd) {
                            break;
                        }
                    }
                    Input::Unknown(cmd) => {
                        ui::print_error(&format!(
                            "Unknown command: /{cmd} (start with // to send text beginning with /)"
                        ));
                    }
                    Input::Text(text) => {
                        self.send(text).await;
                    }
                },
                Err(e) if is_prompt_cancelled(&e) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        tracing::info!(messages = self.session.history().len(), "chat session ended");
        ui::print_goodbye();
        Ok(())
    }

    fn handle_command(&self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Config => {
                ui::print_config(&self.config);
                true
            }
            SlashCommand::Help => {
                ui::print_help();
                true
            }
            SlashCommand::Log => {
                ui::print_transcript(self.session.history());
                true
            }
            SlashCommand::Quit => false,
        }
    }

    async fn send(&mut self, text: String) {
        self.session.edit_buffer(text);

        let spinner = Spinner::new("Sending...");
        let outcome = self.session.submit(&self.transport).await;
        spinner.stop();

        match outcome {
            SubmitOutcome::Replied(_) => {
                if let Some(record) = self.session.history().last() {
                    ui::print_record(record);
                }
            }
            SubmitOutcome::Rejected(Rejection::Blank) => {}
            SubmitOutcome::Rejected(rejection @ Rejection::Pending) => {
                ui::print_error(&rejection.to_string());
            }
        }
    }
}
