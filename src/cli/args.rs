use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "askbot")]
#[command(about = "Terminal chat client for question/answer services")]
#[command(version)]
pub struct Args {
    /// Answer service base URL (overrides the config file)
    #[arg(short = 'e', long, global = true)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress status output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive chat session (default)
    Chat,
    /// Ask a single question and print the answer
    Ask {
        /// The question to send
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
    /// Show recent questions and answers recorded by the service
    History {
        /// Maximum number of entries to show
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,
    },
    /// Configure askbot settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let args = Args::try_parse_from(["askbot"]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_ask_joins_words() {
        let args = Args::try_parse_from(["askbot", "ask", "What", "are", "your", "hours?"]).unwrap();
        match args.command {
            Some(Command::Ask { question }) => {
                assert_eq!(question.join(" "), "What are your hours?");
            }
            other => panic!("Expected Command::Ask, got {other:?}"),
        }
    }

    #[test]
    fn test_ask_requires_question() {
        assert!(Args::try_parse_from(["askbot", "ask"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "askbot",
            "history",
            "-n",
            "3",
            "--endpoint",
            "http://localhost:9000",
            "-vv",
        ])
        .unwrap();
        assert_eq!(args.endpoint.as_deref(), Some("http://localhost:9000"));
        assert_eq!(args.verbose, 2);
        assert!(matches!(args.command, Some(Command::History { limit: 3 })));
    }

    #[test]
    fn test_history_default_limit() {
        let args = Args::try_parse_from(["askbot", "history"]).unwrap();
        assert!(matches!(args.command, Some(Command::History { limit: 10 })));
    }
}
