//! The configuration document and its editor.
//!
//! This module implements the typed key/value engine for the accounting
//! daemon's configuration file:
//!
//! - [`token`]: the closed vocabulary of recognized keys and the per-key
//!   value-kind dispatch table
//! - [`validate`]: pure validation predicates, one family per semantic
//!   type
//! - [`value`]: the semantic [`Value`] type and its string conversions
//! - [`editor`]: [`ConfEditor`], the load/mutate/dump surface
//!
//! # Examples
//!
//! ```
//! use dbdconf::conf::{ConfEditor, ConfigToken};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let mut editor = ConfEditor::open(dir.path().join("slurmdbd.conf")).unwrap();
//!
//! editor.set(ConfigToken::StorageHost, "10.0.0.5").unwrap();
//! editor.set(ConfigToken::StoragePort, 3306_u64).unwrap();
//! editor.set(ConfigToken::TrackWCKey, false).unwrap();
//! editor.dump().unwrap();
//!
//! let reloaded = ConfEditor::open(editor.path()).unwrap();
//! assert_eq!(reloaded.get_bool(ConfigToken::TrackWCKey), Some(false));
//! ```

pub mod editor;
pub mod token;
pub mod validate;
pub mod value;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at module root
pub use editor::ConfEditor;
pub use token::{lookup, ConfigToken, ValueKind, ALL_TOKENS};
pub use value::Value;
