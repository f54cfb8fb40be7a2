//! Configuration validation.

use crate::schema::Config;

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

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
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

        Self::validate_source(config, &mut result);
        Self::validate_output(config, &mut result);
        Self::validate_fetch(config, &mut result);
        Self::validate_logging(config, &mut result);

        result
    }

    fn validate_source(config: &Config, result: &mut ValidationResult) {
        let source = &config.source;
        if source.url.is_some() && source.path.is_some() {
            result.add_error(ValidationError::new(
                "source",
                "set either source.url or source.path, not both",
            ));
        }

        if let Some(ref raw) = source.url {
            match url::Url::parse(raw) {
                Ok(url) if matches!(url.scheme(), "http" | "https") => {}
                Ok(url) => result.add_error(ValidationError::new(
                    "source.url",
                    format!("unsupported scheme '{}'", url.scheme()),
                )),
                Err(e) => result.add_error(ValidationError::new(
                    "source.url",
                    format!("invalid URL: {}", e),
                )),
            }
        }

        if let Some(ref path) = source.path {
            if path.as_os_str().is_empty() {
                result.add_error(ValidationError::new("source.path", "path is empty"));
            }
        }
    }

    fn validate_output(config: &Config, result: &mut ValidationResult) {
        if config.output.path.as_os_str().is_empty() {
            result.add_error(ValidationError::new("output.path", "path is empty"));
        }
    }

    fn validate_fetch(config: &Config, result: &mut ValidationResult) {
        if config.fetch.timeout_seconds == 0 {
            result.add_error(ValidationError::new(
                "fetch.timeout_seconds",
                "timeout must be greater than 0",
            ));
        } else if config.fetch.timeout_seconds > 300 {
            result.add_warning(ValidationWarning::new(
                "fetch.timeout_seconds",
                "timeout is very high (> 5 minutes)",
            ));
        }

        if config.fetch.user_agent.trim().is_empty() {
            result.add_warning(ValidationWarning::new(
                "fetch.user_agent",
                "empty user agent; some servers reject such requests",
            ));
        }
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        let level = config.logging.level.to_lowercase();
        if !valid_levels.contains(&level.as_str()) && !level.contains('=') {
            result.add_warning(ValidationWarning::new(
                "logging.level",
                format!("unknown log level '{}'", config.logging.level),
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
