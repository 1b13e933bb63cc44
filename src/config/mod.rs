pub mod templates;
pub mod validation;
pub use templates::{ConfigOverrides, ConfigTemplate, TemplateManager};
pub use validation::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};
use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, str::FromStr};
pub const DEFAULT_DISCARD_LOG_LEVEL: &str = "warn";
pub const DEFAULT_DISPATCH_LOG_LEVEL: &str = "debug";
pub const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandlerConfig {
    /// Turn panics inside guarded operations into `PanicError` faults.
    ///
    /// The process panic hook still runs before the unwind is caught, so the
    /// default hook prints the panic message to stderr. Install a quieter hook
    /// with `std::panic::set_hook` if that output is unwanted.
    pub catch_panics: bool,
    /// Level used when a failure matches nothing and is dropped.
    pub discard_log_level: String,
    pub dispatch_log_level: String,
}
impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            catch_panics: true,
            discard_log_level: DEFAULT_DISCARD_LOG_LEVEL.to_string(),
            dispatch_log_level: DEFAULT_DISPATCH_LOG_LEVEL.to_string(),
        }
    }
}
impl HandlerConfig {
    /// Reads a JSON config. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {:?}", path))?;
        let config: HandlerConfig = serde_json::from_str(&data)
            .with_context(|| format!("invalid config file {:?}", path))?;
        Ok(config)
    }
    /// Like [`load`](Self::load), but a missing file is an error. Use this when
    /// the caller named the path explicitly.
    pub fn load_existing(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found: {:?}", path));
        }
        Self::load(path)
    }
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("cannot create directory {:?}", parent))?;
            }
        }
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data).with_context(|| format!("cannot write config file {:?}", path))?;
        Ok(())
    }
    pub fn discard_level(&self) -> LevelFilter {
        parse_level(&self.discard_log_level).unwrap_or(LevelFilter::Warn)
    }
    pub fn dispatch_level(&self) -> LevelFilter {
        parse_level(&self.dispatch_log_level).unwrap_or(LevelFilter::Debug)
    }
}
pub fn parse_level(value: &str) -> Option<LevelFilter> {
    LevelFilter::from_str(value.trim()).ok()
}
