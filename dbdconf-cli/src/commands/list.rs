//! List command implementation.
//!
//! This module implements the `list` command, which displays the
//! configuration document in plain `Key=Value` or JSON form.

use clap::{Args, ValueEnum};
use std::io::Write;

use crate::error::CliError;
use crate::utils::{open_editor, GlobalOptions};

/// List the configuration document.
#[derive(Args)]
pub struct ListCommand {
    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "plain",
        env = "DBDCONF_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,
}

/// Output format for list command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `Key=Value` line per entry, in document order
    Plain,
    /// JSON array of key/value objects, in document order
    Json,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let editor = open_editor(global)?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();

        match self.format {
            OutputFormat::Plain => {
                for (token, value) in editor.entries() {
                    writeln!(handle, "{token}={value}")?;
                }
            }
            OutputFormat::Json => {
                let entries: Vec<serde_json::Value> = editor
                    .entries()
                    .map(|(token, value)| {
                        serde_json::json!({
                            "key": token,
                            "value": value,
                        })
                    })
                    .collect();
                let rendered = serde_json::to_string_pretty(&entries)
                    .map_err(|e| CliError::InvalidArguments(format!("JSON encoding: {e}")))?;
                writeln!(handle, "{rendered}")?;
            }
        }

        Ok(())
    }
}
