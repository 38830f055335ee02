//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use fileshelf_core::config::{AppConfig, redact_url};
use fileshelf_core::error::AppError;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration, with secrets masked
    Show,
    /// Check that the configuration selects known backends
    Validate,
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    config: &AppConfig,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let redacted = redacted(config);
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&redacted)?),
                OutputFormat::Table => print_summary(&redacted),
            }
        }
        ConfigCommand::Validate => {
            validate(config)?;
            output::print_success(&format!("Configuration '{config_path}' is valid"));
            print_summary(&redacted(config));
        }
    }

    Ok(())
}

fn redacted(config: &AppConfig) -> AppConfig {
    let mut config = config.clone();
    config.database.url = redact_url(&config.database.url);
    config.cache.redis.url = redact_url(&config.cache.redis.url);
    config
}

fn print_summary(config: &AppConfig) {
    output::print_kv("Server", &config.server.bind_address());
    output::print_kv("Store", &config.database.provider);
    if config.database.provider == "postgres" {
        output::print_kv("Database URL", &config.database.url);
    }
    output::print_kv("Cache", &config.cache.provider);
    if config.cache.provider == "redis" {
        output::print_kv("Redis URL", &config.cache.redis.url);
    }
    output::print_kv("Token header", &config.auth.token_header);
    output::print_kv("Token key prefix", &config.auth.token_key_prefix);
    output::print_kv("Log level", &config.logging.level);
    output::print_kv("Log format", &config.logging.format);
}

fn validate(config: &AppConfig) -> Result<(), AppError> {
    if !matches!(config.database.provider.as_str(), "postgres" | "memory") {
        return Err(AppError::configuration(format!(
            "Unknown database provider: '{}'",
            config.database.provider
        )));
    }
    if !matches!(config.cache.provider.as_str(), "redis" | "memory") {
        return Err(AppError::configuration(format!(
            "Unknown cache provider: '{}'",
            config.cache.provider
        )));
    }
    if config.auth.token_header.trim().is_empty() {
        return Err(AppError::configuration("auth.token_header must not be empty"));
    }
    if !matches!(config.logging.format.as_str(), "json" | "pretty") {
        return Err(AppError::configuration(format!(
            "Unknown log format: '{}'",
            config.logging.format
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_unknown_provider_is_invalid() {
        let mut config = AppConfig::default();
        config.database.provider = "sqlite".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_show_masks_passwords() {
        let mut config = AppConfig::default();
        config.database.url = "postgres://shelf:hunter2@db/shelf".to_string();
        let shown = redacted(&config);
        assert_eq!(shown.database.url, "postgres://shelf:****@db/shelf");
    }
}
