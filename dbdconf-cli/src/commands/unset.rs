//! Unset command implementation.

use clap::Args;
use dbdconf::lookup;

use crate::error::CliError;
use crate::utils::{open_editor, GlobalOptions};

/// Remove a configuration key.
#[derive(Args)]
pub struct UnsetCommand {
    /// The configuration key, in its on-disk spelling (e.g. DbdPort)
    pub key: String,

    /// Succeed silently when the key is not set
    #[arg(long)]
    pub if_present: bool,
}

impl UnsetCommand {
    /// Execute the unset command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let token = lookup(&self.key)?;
        let mut editor = open_editor(global)?;

        if self.if_present && !editor.contains(token) {
            return Ok(());
        }

        editor.unset(token)?;
        editor.dump()?;
        Ok(())
    }
}
