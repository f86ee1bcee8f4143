//! Command implementations.
//!
//! Each submodule implements one subcommand as a clap `Args` struct with
//! an `execute` method taking the shared global options.

pub mod defaults;
pub mod get;
pub mod list;
pub mod set;
pub mod unset;

pub use defaults::DefaultsCommand;
pub use get::GetCommand;
pub use list::ListCommand;
pub use set::SetCommand;
pub use unset::UnsetCommand;
