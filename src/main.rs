use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueHint};
use env_logger::Env;
use faultroute::config::{ConfigOverrides, ConfigValidator, TemplateManager};
use faultroute::{DispatchStats, ExceptionHandler, Fault, HandlerConfig};
use log::{info, LevelFilter};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
#[derive(Parser, Debug)]
#[command(
    name = "faultroute",
    author,
    version,
    about = "Inspect and exercise faultroute handler configurations",
    long_about = r#"
faultroute - declarative exception routing

The library routes failures of guarded operations to handlers registered per
exact error kind, with an optional catch-all. This tool manages the JSON
configuration that controls panic containment and logging, and runs a short
demonstration against it.

EXAMPLES:
  faultroute show-config --template strict     # Print a builtin template
  faultroute init-config faultroute.json       # Write the default config
  faultroute check-config faultroute.json      # Validate a config file
  faultroute demo --config faultroute.json -v  # Run the routing scenarios
    "#
)]
struct Opt {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}
#[derive(Subcommand, Debug)]
enum Commands {
    ShowConfig {
        #[arg(
            short,
            long,
            value_name = "PATH",
            value_hint = ValueHint::FilePath,
            help = "Config file to load",
            conflicts_with = "template"
        )]
        config: Option<PathBuf>,
        #[arg(short, long, value_name = "NAME", help = "Builtin template to print")]
        template: Option<String>,
    },
    CheckConfig {
        #[arg(value_name = "PATH", value_hint = ValueHint::FilePath)]
        path: PathBuf,
    },
    InitConfig {
        #[arg(value_name = "PATH", value_hint = ValueHint::FilePath)]
        path: PathBuf,
        #[arg(short, long, value_name = "NAME", default_value = "lenient")]
        template: String,
        #[arg(long, help = "Disable panic containment")]
        no_catch_panics: bool,
        #[arg(short, long, help = "Overwrite an existing file")]
        force: bool,
    },
    Demo {
        #[arg(short, long, value_name = "PATH", value_hint = ValueHint::FilePath)]
        config: Option<PathBuf>,
    },
}
#[derive(Debug, thiserror::Error)]
#[error("record {0} not found")]
struct NotFoundError(String);
#[derive(Debug, thiserror::Error)]
#[error("operation timed out after {0}ms")]
struct TimeoutError(u64);
#[derive(Debug, thiserror::Error)]
#[error("i/o failure: {0}")]
struct IOError(String);
fn main() -> Result<()> {
    let opt = Opt::parse();
    let log_level = match opt.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_env(
            Env::default().default_filter_or(log_level.to_string()),
        )
        .init();
    match opt.command {
        Commands::ShowConfig { config, template } => {
            handle_show_config(config, template)?;
        }
        Commands::CheckConfig { path } => {
            handle_check_config(&path)?;
        }
        Commands::InitConfig { path, template, no_catch_panics, force } => {
            handle_init_config(&path, &template, no_catch_panics, force)?;
        }
        Commands::Demo { config } => {
            handle_demo(config)?;
        }
    }
    Ok(())
}
fn load_config(path: Option<PathBuf>) -> Result<HandlerConfig> {
    match path {
        Some(path) => HandlerConfig::load_existing(&path),
        None => Ok(HandlerConfig::default()),
    }
}
fn handle_show_config(config: Option<PathBuf>, template: Option<String>) -> Result<()> {
    let config = match template {
        Some(name) => {
            TemplateManager::with_builtin_templates()
                .create_from_template(&name, &ConfigOverrides::default())?
        }
        None => load_config(config)?,
    };
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
fn handle_check_config(path: &Path) -> Result<()> {
    let config = HandlerConfig::load_existing(path)?;
    let result = ConfigValidator::new().validate_config(&config);
    for warning in &result.warnings {
        println!("warning: {}: {}", warning.field, warning.message);
        if let Some(suggestion) = &warning.suggestion {
            println!("  hint: {}", suggestion);
        }
    }
    for error in &result.errors {
        println!("error: {}: {}", error.field, error.message);
        if let Some(suggestion) = &error.suggestion {
            println!("  hint: {}", suggestion);
        }
    }
    if !result.is_valid {
        return Err(
            anyhow::anyhow!(
                "{:?} has {} invalid setting(s)", path, result.errors.len()
            ),
        );
    }
    println!("✓ {:?} is valid", path);
    Ok(())
}
fn handle_init_config(
    path: &Path,
    template: &str,
    no_catch_panics: bool,
    force: bool,
) -> Result<()> {
    if path.exists() && !force {
        println!("Config already exists at {:?}", path);
        println!("Use --force to overwrite it");
        return Ok(());
    }
    let overrides = ConfigOverrides {
        catch_panics: no_catch_panics.then_some(false),
        ..ConfigOverrides::default()
    };
    let config = TemplateManager::with_builtin_templates()
        .create_from_template(template, &overrides)?;
    config.save(path).with_context(|| format!("cannot initialise {:?}", path))?;
    println!("✓ Wrote '{}' config to {:?}", template, path);
    Ok(())
}
struct ScenarioReport {
    title: &'static str,
    returned: String,
    recorded: Vec<String>,
}
fn handle_demo(config: Option<PathBuf>) -> Result<()> {
    let config = load_config(config)?;
    info!("running demo with {:?}", config);
    let (reports, totals) = run_demo(&config)?;
    for (index, report) in reports.iter().enumerate() {
        println!("{}. {}", index + 1, report.title);
        println!("   returned: {}", report.returned);
        println!("   recorded: {:?}", report.recorded);
        println!();
    }
    println!("stats (all scenarios): {}", serde_json::to_string(&totals)?);
    Ok(())
}
fn run_demo(config: &HandlerConfig) -> Result<(Vec<ScenarioReport>, DispatchStats)> {
    let log = Arc::new(Mutex::new(Vec::<String>::new()));
    let mut reports = Vec::new();
    let mut totals = DispatchStats::default();
    let sink = log.clone();
    let mut handler = ExceptionHandler::with_config(config.clone());
    handler
        .handle::<NotFoundError, _>(move |e| {
            info!("handling {}", e);
            if let Ok(mut entries) = sink.lock() {
                entries.push("handled:NotFound".to_string());
            }
        })?;
    let value = handler
        .run_function(
            || -> Result<String, Fault> { Err(NotFoundError("user-42".into()).into()) },
            "<default>".to_string(),
        );
    reports.push(report("handler registered for the raised kind", &log, &value));
    totals.merge(handler.stats());
    let sink = log.clone();
    let mut handler = ExceptionHandler::with_config(config.clone());
    handler
        .handle::<TimeoutError, _>(|_| {})?
        .unhandled(move |fault| {
            if let Ok(mut entries) = sink.lock() {
                entries.push(format!("fallback:{}", fault.kind()));
            }
        });
    handler.run_action(|| Err(IOError("disk unplugged".into()).into()));
    reports.push(report("unmatched kind routed to the fallback", &log, &()));
    totals.merge(handler.stats());
    let mut handler = ExceptionHandler::with_config(config.clone());
    handler.run_action(|| Err(TimeoutError(1500).into()));
    reports.push(report("nothing registered: the failure is dropped", &log, &()));
    totals.merge(handler.stats());
    Ok((reports, totals))
}
fn report<T: std::fmt::Debug>(
    title: &'static str,
    log: &Arc<Mutex<Vec<String>>>,
    value: &T,
) -> ScenarioReport {
    let recorded = match log.lock() {
        Ok(mut entries) => std::mem::take(&mut *entries),
        Err(_) => Vec::new(),
    };
    ScenarioReport {
        title,
        returned: format!("{:?}", value),
        recorded,
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    #[test]
    fn test_verbose_flag_after_subcommand() {
        let opt = Opt::try_parse_from(
                ["faultroute", "demo", "--config", "faultroute.json", "-vv"],
            )
            .unwrap();
        assert_eq!(opt.verbose, 2);
        assert!(matches!(opt.command, Commands::Demo { config: Some(_) }));
        let opt = Opt::try_parse_from(["faultroute", "-v", "check-config", "a.json"]).unwrap();
        assert_eq!(opt.verbose, 1);
    }
    #[test]
    fn test_explicit_config_path_must_exist() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("faultroute.json");
        let err = load_config(Some(missing.clone())).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
        assert!(handle_check_config(&missing).is_err());
        assert_eq!(load_config(None).unwrap(), HandlerConfig::default());
    }
    #[test]
    fn test_demo_records_each_scenario() {
        let (reports, totals) = run_demo(&HandlerConfig::default()).unwrap();
        let recorded: Vec<&Vec<String>> = reports.iter().map(|r| &r.recorded).collect();
        assert_eq!(recorded[0], &vec!["handled:NotFound".to_string()]);
        assert_eq!(recorded[1], &vec!["fallback:IOError".to_string()]);
        assert!(recorded[2].is_empty());
        assert_eq!(reports[0].returned, "\"<default>\"");
        assert_eq!((totals.handled, totals.fallback, totals.discarded), (1, 1, 1));
        assert_eq!(totals.total_runs(), 3);
    }
}
