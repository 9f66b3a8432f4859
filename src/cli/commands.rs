//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - list: list registered templates
//! - show: print a template body verbatim
//! - placeholders: list a template's placeholder names
//! - render: render a template with `-p name=value` parameters

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Promptbook - A registry of named LLM prompt templates
#[derive(Parser, Debug)]
#[command(name = "promptbook")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List registered templates
    List,

    /// Print a template body exactly as registered
    Show {
        /// Template key
        key: String,
    },

    /// List the placeholder names in a template
    Placeholders {
        /// Template key
        key: String,
    },

    /// Render a template, substituting every placeholder
    Render {
        /// Template key
        key: String,

        /// Placeholder value as name=value (repeatable)
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
}

/// Parse a `name=value` pair; the value may itself contain `=`
fn parse_param(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{}'", s))?;
    if name.is_empty() {
        return Err(format!("missing parameter name in '{}'", s));
    }
    Ok((name.to_string(), value.to_string()))
}
