//! CLI module for promptbook - command-line interface and subcommands.
//!
//! Provides subcommands to list, show, and render registered templates.

pub mod commands;

pub use commands::Cli;
