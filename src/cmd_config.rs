//! Config subcommand handlers for AutoApply.

use autoapply_config::{Config, ConfigError, ConfigLoader, ConfigValidator, ValidationResult};

use crate::cli::ConfigAction;

/// Handle config subcommands.
pub(crate) fn handle_config_command(
    action: ConfigAction,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Validate => config_validate(config),
        ConfigAction::Show => config_show(config),
    }
}

fn config_validate(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let result = ConfigValidator::validate(config);
    print!("{}", render_report(&result));
    ensure_valid(&result)?;
    println!("Configuration is valid");
    Ok(())
}

fn config_show(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    print!("{}", ConfigLoader::to_toml(config)?);
    Ok(())
}

/// Turn the first validation error into a [`ConfigError`].
pub(crate) fn ensure_valid(result: &ValidationResult) -> Result<(), ConfigError> {
    match result.errors.first() {
        Some(error) => Err(ConfigError::InvalidValue {
            field: error.path.clone(),
            message: error.message.clone(),
        }),
        None => Ok(()),
    }
}

fn render_report(result: &ValidationResult) -> String {
    let mut out = String::new();
    for error in &result.errors {
        out.push_str(&format!("error:   {}: {}\n", error.path, error.message));
    }
    for warning in &result.warnings {
        out.push_str(&format!("warning: {}: {}\n", warning.path, warning.message));
    }
    out
}
