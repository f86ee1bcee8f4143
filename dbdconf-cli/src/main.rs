//! Main entry point for the dbdconf CLI.
//!
//! This is the command-line interface for the slurmdbd configuration
//! editor. It provides commands for managing the configuration file:
//! - `get`: Print the value of one configuration key
//! - `set`: Set a configuration key, with validation
//! - `unset`: Remove a configuration key
//! - `list`: List the whole document
//! - `defaults`: Upsert or unset variables in the environment-defaults file

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = dbdconf::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        file: cli.file,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Get(cmd) => cmd.execute(&global),
        cli::Command::Set(cmd) => cmd.execute(&global),
        cli::Command::Unset(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Defaults(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
