//! Command line interface
//!
//! Every command loads the layered configuration, initializes logging on
//! stderr and writes its report to the given writer.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use plinth_browser::animation::animation_selector;
use plinth_browser::platforms::{bootstrap_module, create_browser_platform};
use plinth_domain::ports::OverrideRecord;
use plinth_domain::value_objects::{Binding, Lifetime};
use plinth_infrastructure::config::{AppConfig, ConfigLoader};
use plinth_infrastructure::di::PlatformContext;
use plinth_infrastructure::logging::init_logging;
use serde::Serialize;
use tracing::info;

/// Command line interface for Plinth
#[derive(Parser, Debug)]
#[command(name = "plinth")]
#[command(about = "Plinth - Hierarchical platform composition")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print the binding table of the composed contexts
    Inspect {
        /// Emit JSON instead of a text table
        #[arg(long)]
        json: bool,

        /// Include the application context
        #[arg(long)]
        application: bool,
    },
    /// Print the capability implementations selected for the environment
    Probe,
    /// Compose the platform and application contexts and report readiness
    Boot,
}

/// Run the parsed command, writing the report to stdout
pub fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    init_logging(config.logging.clone()).context("Failed to initialize logging")?;
    info!(command = ?cli.command, "Running command");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(cli.command, &config, &mut out)
}

/// Load configuration, requiring an explicitly named file to exist
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let loader = match path {
        Some(path) => {
            ensure!(path.exists(), "Configuration file not found: {}", path.display());
            ConfigLoader::new().with_config_path(path)
        }
        None => ConfigLoader::new(),
    };
    loader.load().context("Failed to load configuration")
}

/// Run one command against a loaded configuration
pub fn execute<W: Write>(command: Command, config: &AppConfig, out: &mut W) -> Result<()> {
    match command {
        Command::Inspect { json, application } => inspect(config, json, application, out),
        Command::Probe => probe(config, out),
        Command::Boot => boot(config, out),
    }
}

/// One row of the binding table
#[derive(Debug, Serialize)]
pub struct BindingRow {
    pub identity: &'static str,
    pub strategy: &'static str,
    pub lifetime: &'static str,
    pub multi: bool,
    pub origin: &'static str,
    pub sensitive: bool,
    pub trusted_override: bool,
}

impl From<&Binding> for BindingRow {
    fn from(binding: &Binding) -> Self {
        Self {
            identity: binding.identity().name(),
            strategy: binding.strategy().kind(),
            lifetime: match binding.lifetime() {
                Lifetime::Singleton => "singleton",
                Lifetime::Transient => "transient",
            },
            multi: binding.is_multi(),
            origin: binding.origin(),
            sensitive: binding.is_sensitive(),
            trusted_override: binding.is_trusted_override(),
        }
    }
}

/// Inspection report of one context
#[derive(Debug, Serialize)]
pub struct ContextReport {
    pub name: String,
    pub state: String,
    pub parent: Option<String>,
    pub bindings: Vec<BindingRow>,
    pub overrides: Vec<OverrideRecord>,
}

impl From<&PlatformContext> for ContextReport {
    fn from(context: &PlatformContext) -> Self {
        Self {
            name: context.name().to_string(),
            state: context.state().to_string(),
            parent: context.parent().map(|parent| parent.name().to_string()),
            bindings: context.registry().bindings().iter().map(BindingRow::from).collect(),
            overrides: context.registry().overrides().to_vec(),
        }
    }
}

fn inspect<W: Write>(config: &AppConfig, json: bool, application: bool, out: &mut W) -> Result<()> {
    let platform = create_browser_platform(config).context("Failed to create browser platform")?;
    let mut reports = vec![ContextReport::from(platform.as_ref())];
    if application {
        let app = bootstrap_module(&platform, &config.composition)
            .context("Failed to bootstrap application")?;
        reports.push(ContextReport::from(app.as_ref()));
    }

    if json {
        serde_json::to_writer_pretty(&mut *out, &reports)?;
        writeln!(out)?;
        return Ok(());
    }

    for report in &reports {
        match &report.parent {
            Some(parent) => writeln!(out, "context: {} ({}, parent: {})", report.name, report.state, parent)?,
            None => writeln!(out, "context: {} ({})", report.name, report.state)?,
        }
        writeln!(
            out,
            "  {:<28} {:<10} {:<10} {:<6} {:<18} FLAGS",
            "IDENTITY", "STRATEGY", "LIFETIME", "MULTI", "ORIGIN"
        )?;
        for row in &report.bindings {
            let mut flags = Vec::new();
            if row.sensitive {
                flags.push("sensitive");
            }
            if row.trusted_override {
                flags.push("trusted");
            }
            writeln!(
                out,
                "  {:<28} {:<10} {:<10} {:<6} {:<18} {}",
                row.identity,
                row.strategy,
                row.lifetime,
                if row.multi { "yes" } else { "no" },
                row.origin,
                flags.join(",")
            )?;
        }
        for record in &report.overrides {
            writeln!(
                out,
                "  override: {} {} -> {}{}",
                record.identity,
                record.replaced_origin,
                record.origin,
                if record.is_untrusted() { " (untrusted)" } else { "" }
            )?;
        }
    }
    Ok(())
}

fn probe<W: Write>(config: &AppConfig, out: &mut W) -> Result<()> {
    let env = &config.environment;
    let features: Vec<&str> = env.features.iter().map(String::as_str).collect();
    writeln!(out, "platform: {}", env.platform)?;
    writeln!(out, "features: {}", if features.is_empty() { "-".to_string() } else { features.join(", ") })?;

    let selector = animation_selector();
    let (tag, _) = selector
        .select(env)
        .with_context(|| format!("Probe for '{}' failed", selector.capability()))?;
    writeln!(out, "{} -> {}", selector.capability(), tag)?;
    Ok(())
}

fn boot<W: Write>(config: &AppConfig, out: &mut W) -> Result<()> {
    let platform = create_browser_platform(config).context("Failed to create browser platform")?;
    writeln!(out, "platform {}: {}", platform.name(), platform.state())?;
    writeln!(out, "  initializers: {}", platform.initialized_actions().join(", "))?;

    let app = bootstrap_module(&platform, &config.composition)
        .context("Failed to bootstrap application")?;
    writeln!(out, "{}: {} (parent: {})", app.name(), app.state(), platform.name())?;
    writeln!(out, "  bindings: {}", app.registry().len())?;
    writeln!(out, "  debug probe: {}", if config.composition.debug_probe { "on" } else { "off" })?;
    Ok(())
}
