use anyhow::Result;
use clap::Parser;

use askbot_cli::cli::commands::{ConnectionOptions, ask, chat, configure, history};
use askbot_cli::cli::{Args, Command};
use askbot_cli::{logging, output};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(output::OutputConfig::from_flags(args.quiet, args.no_color));
    logging::init(args.verbose);
    tracing::debug!(?args, "parsed arguments");

    let connection = ConnectionOptions {
        endpoint: args.endpoint,
        timeout_secs: args.timeout,
    };

    match args.command {
        Some(Command::Ask { question }) => {
            let code = ask::run_ask(question.join(" "), &connection).await?;
            if code != exitcode::OK {
                std::process::exit(code);
            }
        }
        Some(Command::History { limit }) => {
            history::run_history(limit, &connection).await?;
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        Some(Command::Chat) | None => {
            chat::run_chat(&connection).await?;
        }
    }

    Ok(())
}
