use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use promptbook::prompt::TemplateLoader;
use promptbook::Registry;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

mod cli;
mod config;

use cli::Cli;
use cli::commands::Commands;
use config::Config;

fn setup_logging(log_level: Option<&str>) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("promptbook")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("promptbook.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // RUST_LOG wins over the configured level
    let env = env_logger::Env::default().default_filter_or(log_level.unwrap_or("info"));
    env_logger::Builder::from_env(env)
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

/// Build the registry once at startup from config
fn build_registry(config: &Config) -> Result<Registry> {
    let mut registry = if config.templates.builtins {
        Registry::with_builtins().context("Failed to register built-in prompts")?
    } else {
        Registry::new()
    };

    if let Some(dir) = &config.templates.dir {
        let loader = TemplateLoader::new(dir);
        loader
            .load_into(&mut registry, config.templates.on_duplicate)
            .context(format!("Failed to load templates from {}", dir.display()))?;
    }

    info!("Registry ready with {} templates", registry.len());
    Ok(registry)
}

/// Dispatch a subcommand and return its stdout text
fn run_application(cli: &Cli, registry: &Registry) -> Result<String> {
    if cli.is_verbose() {
        eprintln!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        Commands::List => handle_list_command(registry, cli.is_verbose()),
        Commands::Show { key } => handle_show_command(registry, key),
        Commands::Placeholders { key } => handle_placeholders_command(registry, key),
        Commands::Render { key, params } => handle_render_command(registry, key, params),
    }
}

fn handle_list_command(registry: &Registry, verbose: bool) -> Result<String> {
    info!("Listing {} templates", registry.len());
    if registry.is_empty() {
        return Ok(format!("{}\n", "No templates registered".yellow()));
    }

    let mut out = String::new();
    for key in registry.keys() {
        let template = registry.template(key)?;
        if template.has_placeholders() {
            out.push_str(&format!("{} [{}]\n", key.green(), template.placeholders().join(", ")));
        } else {
            out.push_str(&format!("{}\n", key.green()));
        }
        if verbose {
            out.push_str(&format!("  {} bytes\n", template.body().len()));
        }
    }
    Ok(out)
}

fn handle_show_command(registry: &Registry, key: &str) -> Result<String> {
    info!("Showing template: {}", key);
    Ok(registry.get(key)?.to_string())
}

fn handle_placeholders_command(registry: &Registry, key: &str) -> Result<String> {
    info!("Listing placeholders for: {}", key);
    let mut out = String::new();
    for name in registry.placeholders(key)? {
        out.push_str(name);
        out.push('\n');
    }
    Ok(out)
}

fn handle_render_command(registry: &Registry, key: &str, params: &[(String, String)]) -> Result<String> {
    info!("Rendering template '{}' with {} params", key, params.len());
    let params: HashMap<String, String> = params.iter().cloned().collect();
    Ok(registry.render(key, &params)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(config.log_level.as_deref()).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);

    let registry = build_registry(&config)?;

    let output = run_application(&cli, &registry).context("Application failed")?;
    print!("{}", output);

    Ok(())
}
