//! Get command implementation.

use clap::Args;
use dbdconf::lookup;

use crate::error::CliError;
use crate::utils::{open_editor, GlobalOptions};

/// Print the value of one configuration key.
#[derive(Args)]
pub struct GetCommand {
    /// The configuration key, in its on-disk spelling (e.g. DbdPort)
    pub key: String,
}

impl GetCommand {
    /// Execute the get command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let token = lookup(&self.key)?;
        let editor = open_editor(global)?;

        match editor.get_raw(token) {
            Some(value) => {
                println!("{value}");
                Ok(())
            }
            None => Err(CliError::SemanticFailure(format!(
                "{} is not set in {}",
                token,
                global.file.display()
            ))),
        }
    }
}
