use super::HandlerConfig;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigTemplate {
    pub name: String,
    pub description: String,
    pub config: HandlerConfig,
}
#[derive(Debug, Default)]
pub struct TemplateManager {
    templates: BTreeMap<String, ConfigTemplate>,
}
impl TemplateManager {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_builtin_templates() -> Self {
        let mut manager = Self::new();
        manager.load_builtin_templates();
        manager
    }
    pub fn load_builtin_templates(&mut self) {
        let lenient = ConfigTemplate {
            name: "lenient".to_string(),
            description: "Contain panics, warn about dropped failures".to_string(),
            config: HandlerConfig::default(),
        };
        let strict = ConfigTemplate {
            name: "strict".to_string(),
            description: "Let panics through, report dropped failures as errors".to_string(),
            config: HandlerConfig {
                catch_panics: false,
                discard_log_level: "error".to_string(),
                dispatch_log_level: "debug".to_string(),
            },
        };
        let silent = ConfigTemplate {
            name: "silent".to_string(),
            description: "Contain everything and keep the log quiet".to_string(),
            config: HandlerConfig {
                catch_panics: true,
                discard_log_level: "off".to_string(),
                dispatch_log_level: "trace".to_string(),
            },
        };
        for template in [lenient, strict, silent] {
            self.templates.insert(template.name.clone(), template);
        }
    }
    pub fn get_template(&self, name: &str) -> Option<&ConfigTemplate> {
        self.templates.get(name)
    }
    pub fn list_templates(&self) -> Vec<&ConfigTemplate> {
        self.templates.values().collect()
    }
    pub fn create_from_template(
        &self,
        template_name: &str,
        overrides: &ConfigOverrides,
    ) -> Result<HandlerConfig> {
        let template = self
            .get_template(template_name)
            .ok_or_else(|| anyhow::anyhow!("Template '{}' not found", template_name))?;
        let mut config = template.config.clone();
        if let Some(catch_panics) = overrides.catch_panics {
            config.catch_panics = catch_panics;
        }
        if let Some(level) = &overrides.discard_log_level {
            config.discard_log_level = level.clone();
        }
        if let Some(level) = &overrides.dispatch_log_level {
            config.dispatch_log_level = level.clone();
        }
        Ok(config)
    }
}
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub catch_panics: Option<bool>,
    pub discard_log_level: Option<String>,
    pub dispatch_log_level: Option<String>,
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigValidator;
    #[test]
    fn test_builtin_templates() {
        let manager = TemplateManager::with_builtin_templates();
        let names: Vec<&str> = manager
            .list_templates()
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["lenient", "silent", "strict"]);
        let validator = ConfigValidator::new();
        for template in manager.list_templates() {
            assert!(validator.validate_config(&template.config).is_valid);
        }
        assert!(!manager.get_template("strict").unwrap().config.catch_panics);
    }
    #[test]
    fn test_overrides_apply() {
        let manager = TemplateManager::with_builtin_templates();
        let overrides = ConfigOverrides {
            catch_panics: Some(true),
            discard_log_level: Some("info".to_string()),
            dispatch_log_level: None,
        };
        let config = manager.create_from_template("strict", &overrides).unwrap();
        assert!(config.catch_panics);
        assert_eq!(config.discard_log_level, "info");
        assert_eq!(config.dispatch_log_level, "debug");
    }
    #[test]
    fn test_unknown_template() {
        let manager = TemplateManager::with_builtin_templates();
        let err = manager
            .create_from_template("paranoid", &ConfigOverrides::default())
            .unwrap_err();
        assert!(err.to_string().contains("paranoid"));
    }
}
