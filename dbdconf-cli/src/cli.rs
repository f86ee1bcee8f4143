//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{DefaultsCommand, GetCommand, ListCommand, SetCommand, UnsetCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for editing slurmdbd configuration artifacts.
#[derive(Parser)]
#[command(name = "dbdconf")]
#[command(version, about = "Edit slurmdbd configuration files", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Path to the configuration file
    #[arg(
        long,
        value_name = "PATH",
        global = true,
        env = "DBDCONF_FILE",
        default_value = "/etc/slurmdbd.conf"
    )]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the value of one configuration key
    Get(GetCommand),

    /// Set a configuration key, validating the value
    Set(SetCommand),

    /// Remove a configuration key
    Unset(UnsetCommand),

    /// List the configuration document
    List(ListCommand),

    /// Edit the environment-defaults file
    Defaults(DefaultsCommand),
}
