#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # dbdconf
//!
//! A library for editing the configuration artifacts of a cluster
//! accounting daemon: its main `Key=Value` configuration file and its
//! shell-sourced environment-defaults file.
//!
//! ## Core Types
//!
//! - [`ConfEditor`] and [`ConfigToken`]: the typed configuration editor
//!   over the closed key vocabulary
//! - [`DefaultsEditor`]: minimally-invasive upserts in the defaults file
//! - [`Endpoint`]: backend database endpoint parsing
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use dbdconf::{ConfEditor, ConfigToken};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let mut editor = ConfEditor::open(dir.path().join("slurmdbd.conf")).unwrap();
//!
//! editor.set(ConfigToken::DbdHost, "slurmdbd-0").unwrap();
//! editor.set(ConfigToken::DebugLevel, "info").unwrap();
//! editor.dump().unwrap();
//! ```
//!
//! The two editors deliberately differ in how they treat content they did
//! not write: the configuration file is system-generated, so comments are
//! dropped and a fresh banner is emitted on every dump, while the defaults
//! file is hand-edited, so everything not explicitly targeted is preserved
//! verbatim.

pub mod atomic;
pub mod conf;
pub mod defaults;
pub mod endpoint;
pub mod error;
pub mod logging;

// Re-export key types at crate root for convenience
pub use conf::{lookup, ConfEditor, ConfigToken, Value, ValueKind};
pub use defaults::DefaultsEditor;
pub use endpoint::{preferred_endpoint, Endpoint};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
