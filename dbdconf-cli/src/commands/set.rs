//! Set command implementation.

use clap::Args;
use dbdconf::lookup;

use crate::error::CliError;
use crate::utils::{open_editor, GlobalOptions};

/// Set a configuration key, validating the value.
#[derive(Args)]
pub struct SetCommand {
    /// The configuration key, in its on-disk spelling (e.g. DbdPort)
    pub key: String,

    /// The value, in its on-disk string form
    pub value: String,
}

impl SetCommand {
    /// Execute the set command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let token = lookup(&self.key)?;
        let mut editor = open_editor(global)?;

        editor.set_raw(token, self.value.as_str())?;
        editor.dump()?;

        if !global.quiet {
            println!("{token}={}", self.value);
        }
        Ok(())
    }
}
