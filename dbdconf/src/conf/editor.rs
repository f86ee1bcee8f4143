//! The configuration file editor.
//!
//! [`ConfEditor`] owns one configuration document: it loads the file into
//! an in-memory mapping keyed by registry tokens, exposes validated
//! accessors, and serializes the mapping back to disk with a generated
//! banner. Comments in the source file are dropped on load; the file is
//! system-generated, so the banner is the only comment it ever carries.
//!
//! The editor assumes exclusive access to its file: a single owner drives
//! `load`/mutate/`dump` to completion, and nothing here locks against a
//! concurrent writer.

use std::fs;
use std::path::{Path, PathBuf};

use crate::atomic::write_atomic;
use crate::conf::token::{lookup, ConfigToken};
use crate::conf::validate::check_value;
use crate::conf::value::Value;
use crate::error::{Error, Result};

/// Editor for one accounting-daemon configuration file.
///
/// # Examples
///
/// ```
/// use dbdconf::conf::{ConfEditor, ConfigToken};
///
/// let dir = tempfile::tempdir().unwrap();
/// let mut editor = ConfEditor::open(dir.path().join("slurmdbd.conf")).unwrap();
///
/// editor.set(ConfigToken::DbdHost, "slurmdbd-0").unwrap();
/// editor.set(ConfigToken::DbdPort, 6819_u64).unwrap();
/// editor.dump().unwrap();
///
/// assert_eq!(editor.get_raw(ConfigToken::DbdHost), Some("slurmdbd-0"));
/// ```
#[derive(Debug)]
pub struct ConfEditor {
    path: PathBuf,
    // Insertion-ordered document; overwriting keeps the original position.
    entries: Vec<(ConfigToken, String)>,
}

impl ConfEditor {
    /// Open the configuration file at `path`.
    ///
    /// If the file does not exist it is created empty and the document
    /// starts empty; otherwise the file is loaded immediately.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be created or read, or a
    /// [`Error::Parse`] if existing content is unparseable.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut editor = Self {
            path,
            entries: Vec::new(),
        };

        if editor.path.exists() {
            editor.load()?;
        } else {
            log::debug!("creating configuration file at {}", editor.path.display());
            fs::File::create(&editor.path)?;
        }

        Ok(editor)
    }

    /// The path of the managed file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the document holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The number of entries in the document.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over the document in its natural order.
    pub fn entries(&self) -> impl Iterator<Item = (ConfigToken, &str)> {
        self.entries
            .iter()
            .map(|(token, value)| (*token, value.as_str()))
    }

    /// (Re)load the document from disk.
    ///
    /// Comment lines (leading `#`) and blank lines are discarded. Every
    /// remaining line is split on its first `=` and the key resolved
    /// through the registry; duplicate keys keep the last value. The load
    /// is all-or-nothing: any bad line leaves the in-memory document in
    /// its pre-load state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for an unrecognized key or a line without
    /// `=`, or an I/O error if the file cannot be read.
    pub fn load(&mut self) -> Result<()> {
        log::debug!("parsing configuration at {}", self.path.display());
        let contents = fs::read_to_string(&self.path)?;

        let mut parsed: Vec<(ConfigToken, String)> = Vec::new();
        for (index, line) in contents.lines().enumerate() {
            if line.starts_with('#') || line.trim().is_empty() {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(Error::Parse {
                    path: self.path.clone(),
                    line: index + 1,
                    message: format!("missing '=' separator in '{line}'"),
                });
            };

            let token = lookup(key).map_err(|_| Error::Parse {
                path: self.path.clone(),
                line: index + 1,
                message: format!("unrecognized configuration option '{key}'"),
            })?;

            Self::insert(&mut parsed, token, value.to_string());
        }

        if parsed.is_empty() {
            log::debug!("parsed configuration file {} is empty", self.path.display());
        }
        self.entries = parsed;
        Ok(())
    }

    /// Serialize the document back to disk.
    ///
    /// The output is a three-line banner followed by one `Key=Value` line
    /// per entry in document order, written atomically. An empty document
    /// is written anyway, with a warning.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be replaced.
    pub fn dump(&self) -> Result<()> {
        if self.entries.is_empty() {
            log::warn!("writing empty configuration to {}", self.path.display());
        }

        log::debug!("dumping configuration to {}", self.path.display());
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.6f");
        let mut out = format!("#\n# {} generated at {timestamp}\n#\n", self.path.display());
        for (token, value) in &self.entries {
            out.push_str(token.as_str());
            out.push('=');
            out.push_str(value);
            out.push('\n');
        }

        write_atomic(&self.path, &out)
    }

    /// Discard the in-memory document, keeping the path for later use.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Get the stored string for `token`, if present.
    #[must_use]
    pub fn get_raw(&self, token: ConfigToken) -> Option<&str> {
        self.entries
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, value)| value.as_str())
    }

    /// Whether `token` is present in the document.
    #[must_use]
    pub fn contains(&self, token: ConfigToken) -> bool {
        self.get_raw(token).is_some()
    }

    /// Set `token` to a raw string, after validation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] if the value fails the token's
    /// validator; the document is left unmodified in that case.
    pub fn set_raw(&mut self, token: ConfigToken, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        check_value(token, &value)?;
        Self::insert(&mut self.entries, token, value);
        Ok(())
    }

    /// Set `token` from a semantic value.
    ///
    /// The value is converted to its canonical string form, validated,
    /// and stored; any prior value is overwritten in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] if the value does not fit the
    /// token's kind or fails its validator.
    ///
    /// # Examples
    ///
    /// ```
    /// use dbdconf::conf::{ConfEditor, ConfigToken};
    ///
    /// let dir = tempfile::tempdir().unwrap();
    /// let mut editor = ConfEditor::open(dir.path().join("slurmdbd.conf")).unwrap();
    ///
    /// editor.set(ConfigToken::ArchiveEvents, true).unwrap();
    /// editor.set(ConfigToken::StoragePort, 3306_u64).unwrap();
    /// assert!(editor.set(ConfigToken::DebugLevel, "nonsense").is_err());
    /// ```
    pub fn set(&mut self, token: ConfigToken, value: impl Into<Value>) -> Result<()> {
        let stored = value.into().to_storage(token)?;
        self.set_raw(token, stored)
    }

    /// Get the semantic value for `token`, if present.
    #[must_use]
    pub fn get(&self, token: ConfigToken) -> Option<Value> {
        self.get_raw(token).map(|raw| Value::from_storage(token, raw))
    }

    /// Get a boolean token as a three-way result.
    ///
    /// Returns `Some(true)` for `yes`, `Some(false)` for `no`, and `None`
    /// when the key is absent or holds unvalidated non-boolean text.
    #[must_use]
    pub fn get_bool(&self, token: ConfigToken) -> Option<bool> {
        match self.get(token) {
            Some(Value::Bool(flag)) => Some(flag),
            _ => None,
        }
    }

    /// Get a numeric token as an integer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] if the stored text (for example
    /// hand-edited on disk) is not a decimal number.
    pub fn get_number(&self, token: ConfigToken) -> Result<Option<u64>> {
        match self.get(token) {
            None => Ok(None),
            Some(Value::Number(n)) => Ok(Some(n)),
            Some(_) => Err(Error::InvalidValue {
                key: token.as_str(),
                reason: format!(
                    "stored value is not a number: {}",
                    self.get_raw(token).unwrap_or_default()
                ),
            }),
        }
    }

    /// Get a list token as its elements.
    #[must_use]
    pub fn get_list(&self, token: ConfigToken) -> Option<Vec<String>> {
        match self.get(token) {
            Some(Value::List(elements)) => Some(elements),
            Some(Value::Text(text)) => Some(vec![text]),
            _ => None,
        }
    }

    /// Get a pair-list token as `(key, value)` tuples.
    #[must_use]
    pub fn get_pairs(&self, token: ConfigToken) -> Option<Vec<(String, String)>> {
        match self.get(token) {
            Some(Value::Pairs(pairs)) => Some(pairs),
            _ => None,
        }
    }

    /// Remove `token` from the document.
    ///
    /// Removal is strict: deleting an absent key is an error. Callers
    /// wanting idempotent unset should check [`contains`](Self::contains)
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotPresent`] if the key is not set.
    pub fn unset(&mut self, token: ConfigToken) -> Result<()> {
        match self.entries.iter().position(|(t, _)| *t == token) {
            Some(index) => {
                self.entries.remove(index);
                Ok(())
            }
            None => Err(Error::KeyNotPresent {
                key: token.as_str(),
            }),
        }
    }

    /// Replace the whole document from a flat `name -> value` mapping.
    ///
    /// This is the bulk path used when regenerating the file from
    /// assembled parameters (defaults, relation data, user overrides).
    /// Every name is resolved through the registry and every value
    /// validated before anything is stored, so a failure leaves the
    /// document untouched. Entries with empty values are skipped: absence
    /// of a key, not an empty assignment, encodes "unset".
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnrecognizedKey`] for an unknown name or
    /// [`Error::InvalidValue`] for a rejected value.
    pub fn apply_parameters<I, K, V>(&mut self, parameters: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut replacement: Vec<(ConfigToken, String)> = Vec::new();
        for (name, value) in parameters {
            let value = value.as_ref();
            if value.is_empty() {
                continue;
            }
            let token = lookup(name.as_ref())?;
            check_value(token, value)?;
            Self::insert(&mut replacement, token, value.to_string());
        }

        self.entries = replacement;
        Ok(())
    }

    // Last occurrence wins, but the first occurrence keeps its position.
    fn insert(entries: &mut Vec<(ConfigToken, String)>, token: ConfigToken, value: String) {
        match entries.iter_mut().find(|(t, _)| *t == token) {
            Some(entry) => entry.1 = value,
            None => entries.push((token, value)),
        }
    }
}
