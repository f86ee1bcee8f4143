//! Defaults command implementation.
//!
//! Edits the shell-sourced environment-defaults file, which is a separate
//! artifact from the configuration file and preserves everything not
//! explicitly targeted.

use clap::{Args, Subcommand};
use std::path::PathBuf;

use dbdconf::DefaultsEditor;

use crate::error::CliError;
use crate::utils::GlobalOptions;

/// Edit the environment-defaults file.
#[derive(Args)]
pub struct DefaultsCommand {
    /// Path to the environment-defaults file
    #[arg(
        long,
        value_name = "PATH",
        env = "DBDCONF_DEFAULTS_FILE",
        default_value = "/etc/default/slurmdbd"
    )]
    pub defaults_file: PathBuf,

    #[command(subcommand)]
    pub action: DefaultsAction,
}

/// Defaults file actions.
#[derive(Subcommand)]
pub enum DefaultsAction {
    /// Set an environment variable (written upper-cased)
    Set {
        /// The variable name, matched case-insensitively
        name: String,
        /// The value to assign
        value: String,
    },
    /// Remove an environment variable; a no-op if absent
    Unset {
        /// The variable name, matched case-insensitively
        name: String,
    },
}

impl DefaultsCommand {
    /// Execute the defaults command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let editor = DefaultsEditor::new(&self.defaults_file);

        match self.action {
            DefaultsAction::Set { name, value } => {
                editor.set_var(&name, &value)?;
                if !global.quiet {
                    println!("{}={value}", name.to_uppercase());
                }
            }
            DefaultsAction::Unset { name } => {
                editor.unset_var(&name)?;
            }
        }

        Ok(())
    }
}
