//! Configure command handler for editing default settings.

use anyhow::Result;
use inquire::Text;
use inquire::validator::Validation;

use crate::config::{
    AskbotConfig, ConfigFile, ConfigManager, DEFAULT_ENDPOINT, validate_endpoint,
};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the current settings. Otherwise prompts for the
/// endpoint and timeout and saves them.
pub fn run_configure(show: bool) -> Result<()> {
    if show {
        let manager = ConfigManager::new()?;
        let config = manager.load_or_default()?;
        print_current_settings(&manager, &config);
        return Ok(());
    }
    handle_prompt_cancellation(run_configure_inner)
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default()?;

    print_current_settings(&manager, &config);

    let endpoint = prompt_endpoint(config.askbot.endpoint.as_deref())?;
    let timeout_secs = prompt_timeout(config.askbot.timeout_secs)?;

    config.askbot = AskbotConfig {
        endpoint: Some(endpoint),
        timeout_secs,
    };
    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

fn print_current_settings(manager: &ConfigManager, config: &ConfigFile) {
    println!("{}", Style::header("Current settings"));
    println!(
        "  {}  {}",
        Style::label("endpoint"),
        config.askbot.endpoint.as_deref().map_or_else(
            || Style::secondary(format!("(default: {DEFAULT_ENDPOINT})")),
            Style::value
        )
    );
    println!(
        "  {}   {}",
        Style::label("timeout"),
        config.askbot.timeout_secs.map_or_else(
            || Style::secondary("(none)"),
            |secs| Style::value(format!("{secs}s"))
        )
    );
    println!(
        "  {}      {}",
        Style::label("file"),
        Style::secondary(manager.config_path().display())
    );
    println!();
}

fn prompt_endpoint(current: Option<&str>) -> Result<String> {
    let endpoint = Text::new("Endpoint URL:")
        .with_default(current.unwrap_or(DEFAULT_ENDPOINT))
        .with_validator(|input: &str| {
            Ok(match validate_endpoint(input.trim()) {
                Ok(()) => Validation::Valid,
                Err(e) => Validation::Invalid(e.to_string().into()),
            })
        })
        .prompt()?;

    Ok(endpoint.trim().to_string())
}

fn prompt_timeout(current: Option<u64>) -> Result<Option<u64>> {
    let initial = current.map(|secs| secs.to_string()).unwrap_or_default();
    let input = Text::new("Request timeout in seconds:")
        .with_initial_value(&initial)
        .with_help_message("Leave empty to wait indefinitely")
        .with_validator(|input: &str| {
            Ok(match parse_timeout(input) {
                Ok(_) => Validation::Valid,
                Err(message) => Validation::Invalid(message.into()),
            })
        })
        .prompt()?;

    Ok(parse_timeout(&input).unwrap_or_default())
}

fn parse_timeout(input: &str) -> Result<Option<u64>, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    match input.parse::<u64>() {
        Ok(0) | Err(_) => Err("Enter a positive whole number of seconds".to_string()),
        Ok(secs) => Ok(Some(secs)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timeout_empty_means_none() {
        assert_eq!(parse_timeout(""), Ok(None));
        assert_eq!(parse_timeout("   "), Ok(None));
    }

    #[test]
    fn test_parse_timeout_valid() {
        assert_eq!(parse_timeout("30"), Ok(Some(30)));
        assert_eq!(parse_timeout(" 5 "), Ok(Some(5)));
    }

    #[test]
    fn test_parse_timeout_invalid() {
        assert!(parse_timeout("0").is_err());
        assert!(parse_timeout("-3").is_err());
        assert!(parse_timeout("soon").is_err());
    }
}
