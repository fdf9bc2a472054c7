//! Configuration validation.

use crate::schema::Config;

/// Upper bound for `session.token_ttl_seconds` (ten years).
pub const MAX_TOKEN_TTL_SECONDS: u64 = 10 * 365 * 24 * 60 * 60;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_server(config, &mut result);
        Self::validate_database(config, &mut result);
        Self::validate_automation(config, &mut result);
        Self::validate_session(config, &mut result);

        result
    }

    fn validate_server(config: &Config, result: &mut ValidationResult) {
        if config.server.port == 0 {
            result.add_error(ValidationError::new("server.port", "Port cannot be 0"));
        }

        if config.server.host.is_empty() {
            result.add_error(ValidationError::new("server.host", "Host cannot be empty"));
        }
    }

    fn validate_database(config: &Config, result: &mut ValidationResult) {
        if config.database.probe_limit == 0 {
            result.add_error(ValidationError::new(
                "database.probe_limit",
                "probe_limit must be greater than 0",
            ));
        }

        if config.database.path.is_none() {
            result.add_warning(ValidationWarning::new(
                "database.path",
                "Database path not set, jobs are kept in memory and lost on restart",
            ));
        }
    }

    fn validate_automation(config: &Config, result: &mut ValidationResult) {
        let automation = &config.automation;

        match automation.endpoint {
            Some(ref endpoint) => match url::Url::parse(endpoint) {
                Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
                Ok(_) => result.add_error(ValidationError::new(
                    "automation.endpoint",
                    "endpoint must start with http:// or https://",
                )),
                Err(e) => result.add_error(ValidationError::new(
                    "automation.endpoint",
                    format!("endpoint is not a valid URL: {}", e),
                )),
            },
            None => {
                result.add_warning(ValidationWarning::new(
                    "automation.endpoint",
                    "Automation endpoint not set, automation runs will fail",
                ));
                if automation.api_key.is_some() {
                    result.add_warning(ValidationWarning::new(
                        "automation.api_key",
                        "api_key is set but unused without an endpoint",
                    ));
                }
            }
        }

        if automation.timeout_seconds == 0 {
            result.add_error(ValidationError::new(
                "automation.timeout_seconds",
                "timeout_seconds must be greater than 0",
            ));
        }
    }

    fn validate_session(config: &Config, result: &mut ValidationResult) {
        if config.session.user_id.is_empty() {
            result.add_error(ValidationError::new(
                "session.user_id",
                "Mock user id cannot be empty",
            ));
        }

        if config.session.token_ttl_seconds > MAX_TOKEN_TTL_SECONDS {
            result.add_error(ValidationError::new(
                "session.token_ttl_seconds",
                format!("token_ttl_seconds must be at most {}", MAX_TOKEN_TTL_SECONDS),
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
