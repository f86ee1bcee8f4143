//! Shared helpers for command implementations.

use std::path::PathBuf;

use dbdconf::ConfEditor;

use crate::error::CliError;

/// Options shared by every subcommand.
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Path to the configuration file.
    pub file: PathBuf,
}

/// Open the configuration editor on the configured path.
pub fn open_editor(global: &GlobalOptions) -> Result<ConfEditor, CliError> {
    if global.verbose {
        eprintln!("INFO: using configuration file {}", global.file.display());
    }
    ConfEditor::open(&global.file).map_err(CliError::from)
}
