//! Chat input classification.
//!
//! A line starting with `/` is a command. `//` escapes a message that
//! itself starts with a slash: `//etc/hosts?` sends `/etc/hosts?`.

use inquire::autocompletion::{Autocomplete, Replacement};

/// Commands available inside a chat session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlashCommand {
    Config,
    Help,
    Log,
    Quit,
}

impl SlashCommand {
    /// Every command, in the order shown by `/help`.
    pub const ALL: [Self; 4] = [Self::Config, Self::Help, Self::Log, Self::Quit];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::Help => "help",
            Self::Log => "log",
            Self::Quit => "quit",
        }
    }

    /// Extra names accepted for the command.
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Config => &[],
            Self::Help => &["?"],
            Self::Log => &["history"],
            Self::Quit => &["exit", "q"],
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Config => "Show current configuration",
            Self::Help => "Show available commands",
            Self::Log => "Show this session's messages",
            Self::Quit => "Exit chat mode",
        }
    }

    fn from_word(word: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|cmd| cmd.name() == word || cmd.aliases().contains(&word))
    }

    fn matches_prefix(self, prefix: &str) -> bool {
        self.name().starts_with(prefix) || self.aliases().iter().any(|a| a.starts_with(prefix))
    }

    /// The line shown in the autocomplete menu.
    fn suggestion(self) -> String {
        format!("/{:<8}{}", self.name(), self.description())
    }
}

/// A classified prompt line.
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    /// A message to send, kept as typed apart from a `//` escape.
    Text(String),
    Command(SlashCommand),
    /// A `/word` that names no command.
    Unknown(String),
    Empty,
}

pub fn parse_input(input: &str) -> Input {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Input::Empty;
    }

    if trimmed.starts_with("//") {
        let slash_at = input.len() - input.trim_start().len();
        let mut text = input.to_string();
        text.remove(slash_at);
        return Input::Text(text);
    }

    let Some(command) = trimmed.strip_prefix('/') else {
        return Input::Text(input.to_string());
    };

    let word = command.split_whitespace().next().unwrap_or_default();
    SlashCommand::from_word(word)
        .map_or_else(|| Input::Unknown(command.to_string()), Input::Command)
}

/// Completes `/` prefixes against [`SlashCommand::ALL`].
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        let Some(prefix) = input.strip_prefix('/') else {
            return Ok(Vec::new());
        };
        if prefix.starts_with('/') {
            return Ok(Vec::new());
        }

        Ok(SlashCommand::ALL
            .into_iter()
            .filter(|cmd| cmd.matches_prefix(prefix))
            .map(SlashCommand::suggestion)
            .collect())
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        Ok(highlighted_suggestion.and_then(|line| {
            SlashCommand::ALL
                .into_iter()
                .find(|cmd| cmd.suggestion() == line)
                .map(|cmd| format!("/{}", cmd.name()))
        }))
    }
}
