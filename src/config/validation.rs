use super::{
    parse_level, HandlerConfig, DEFAULT_DISCARD_LOG_LEVEL, DEFAULT_DISPATCH_LOG_LEVEL,
    LOG_LEVELS,
};
use anyhow::Result;
use log::LevelFilter;
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}
#[derive(Debug, Default)]
pub struct ConfigValidator;
impl ConfigValidator {
    pub fn new() -> Self {
        Self
    }
    pub fn validate_config(&self, config: &HandlerConfig) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        self.validate_level(
            "discard_log_level",
            &config.discard_log_level,
            &mut errors,
        );
        self.validate_level(
            "dispatch_log_level",
            &config.dispatch_log_level,
            &mut errors,
        );
        self.validate_panic_visibility(config, &mut warnings);
        ValidationResult {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
    fn validate_level(
        &self,
        field: &str,
        value: &str,
        errors: &mut Vec<ValidationError>,
    ) {
        if parse_level(value).is_none() {
            errors
                .push(ValidationError {
                    field: field.to_string(),
                    message: format!("Invalid log level: {}", value),
                    suggestion: Some(format!("Use one of: {:?}", LOG_LEVELS)),
                });
        }
    }
    fn validate_panic_visibility(
        &self,
        config: &HandlerConfig,
        warnings: &mut Vec<ValidationWarning>,
    ) {
        if config.catch_panics && parse_level(&config.discard_log_level)
            == Some(LevelFilter::Off)
        {
            warnings
                .push(ValidationWarning {
                    field: "discard_log_level".to_string(),
                    message: "Caught panics with no handler or fallback will vanish without a trace"
                        .to_string(),
                    suggestion: Some(
                        "Register a fallback or raise discard_log_level to warn".to_string(),
                    ),
                });
        }
    }
    pub fn validate_and_fix_config(
        &self,
        config: &mut HandlerConfig,
    ) -> Result<ValidationResult> {
        let result = self.validate_config(config);
        if parse_level(&config.discard_log_level).is_none() {
            config.discard_log_level = DEFAULT_DISCARD_LOG_LEVEL.to_string();
        }
        if parse_level(&config.dispatch_log_level).is_none() {
            config.dispatch_log_level = DEFAULT_DISPATCH_LOG_LEVEL.to_string();
        }
        Ok(result)
    }
}
