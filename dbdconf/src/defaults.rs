//! Editor for the daemon's environment-defaults file.
//!
//! Unlike the configuration editor, this file is hand-edited and consumed
//! by a shell loader, so edits are minimally invasive: comments, blank
//! lines, and anything that is not a `KEY=VALUE` declaration are preserved
//! verbatim and in order. Keys are matched case-insensitively and always
//! written upper-cased.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::atomic::write_atomic;
use crate::error::Result;

/// Editor for a shell-sourced `KEY=VALUE` defaults file.
///
/// # Examples
///
/// ```
/// use dbdconf::defaults::DefaultsEditor;
///
/// let dir = tempfile::tempdir().unwrap();
/// let editor = DefaultsEditor::new(dir.path().join("slurmdbd"));
///
/// editor.set_var("mysql_unix_port", "\"/var/run/mysql.sock\"").unwrap();
/// editor.unset_var("mysql_unix_port").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct DefaultsEditor {
    path: PathBuf,
}

impl DefaultsEditor {
    /// Create an editor for the defaults file at `path`.
    ///
    /// The file is not touched until [`apply`](Self::apply) runs; a
    /// missing file is treated as empty.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the managed file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply a batch of upserts and deletions.
    ///
    /// Each change pairs a variable name with `Some(value)` to set it or
    /// `None` to unset it. Existing declarations are matched by
    /// case-insensitive name and rewritten in place (or dropped); names
    /// never seen in the file are appended at the end in the order given.
    /// Unsetting a variable that does not exist is a no-op. Everything
    /// else in the file is preserved verbatim.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read or replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use dbdconf::defaults::DefaultsEditor;
    ///
    /// let dir = tempfile::tempdir().unwrap();
    /// let editor = DefaultsEditor::new(dir.path().join("slurmdbd"));
    /// editor
    ///     .apply([("baz", Some("new")), ("added", Some("1")), ("gone", None)])
    ///     .unwrap();
    /// ```
    pub fn apply<I, K, V>(&self, changes: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        // Normalize requested names once; a repeated name keeps its first
        // position with the last requested value, like the editors' maps.
        let mut requested: Vec<(String, Option<String>)> = Vec::new();
        for (name, value) in changes {
            let name = name.as_ref().to_lowercase();
            let value = value.map(|v| v.as_ref().to_string());
            match requested.iter_mut().find(|(n, _)| *n == name) {
                Some(entry) => entry.1 = value,
                None => requested.push((name, value)),
            }
        }

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };

        let mut updated: Vec<String> = Vec::new();
        let mut matched: Vec<&str> = Vec::new();

        for line in contents.lines() {
            // Comments are never declarations.
            if line.starts_with('#') {
                updated.push(line.to_string());
                continue;
            }

            // Anything without an '=' is not ours to touch either.
            let Some((name, _)) = line.split_once('=') else {
                updated.push(line.to_string());
                continue;
            };

            let lowered = name.to_lowercase();
            let Some((requested_name, value)) =
                requested.iter().find(|(n, _)| *n == lowered)
            else {
                updated.push(line.to_string());
                continue;
            };

            matched.push(requested_name);
            match value {
                // Unset: drop the declaration entirely.
                None => {}
                Some(value) => updated.push(format!("{}={value}", lowered.to_uppercase())),
            }
        }

        for (name, value) in &requested {
            if matched.iter().any(|m| *m == name.as_str()) {
                continue;
            }
            if let Some(value) = value {
                updated.push(format!("{}={value}", name.to_uppercase()));
            }
        }

        log::debug!(
            "rewriting defaults file {} ({} line(s))",
            self.path.display(),
            updated.len()
        );
        let mut out = updated.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        write_atomic(&self.path, &out)
    }

    /// Set a single variable.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be rewritten.
    pub fn set_var(&self, name: &str, value: &str) -> Result<()> {
        self.apply([(name, Some(value))])
    }

    /// Unset a single variable; a no-op if it is not declared.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be rewritten.
    pub fn unset_var(&self, name: &str) -> Result<()> {
        self.apply([(name, None::<&str>)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_fixture(dir: &TempDir, contents: &str) -> DefaultsEditor {
        let path = dir.path().join("slurmdbd");
        fs::write(&path, contents).unwrap();
        DefaultsEditor::new(path)
    }

    #[test]
    fn test_upsert_preserves_order_and_untouched_lines() {
        let dir = TempDir::new().unwrap();
        let editor = write_fixture(&dir, "# header\nFOO=bar\nBAZ=qux\n");

        editor
            .apply([("baz", Some("new")), ("added", Some("1"))])
            .unwrap();

        assert_eq!(
            fs::read_to_string(editor.path()).unwrap(),
            "# header\nFOO=bar\nBAZ=new\nADDED=1\n"
        );
    }

    #[test]
    fn test_unset_drops_declaration() {
        let dir = TempDir::new().unwrap();
        let editor = write_fixture(&dir, "# header\nFOO=bar\nBAZ=qux\n");

        editor.apply([("baz", None::<&str>)]).unwrap();

        assert_eq!(
            fs::read_to_string(editor.path()).unwrap(),
            "# header\nFOO=bar\n"
        );
    }

    #[test]
    fn test_unset_of_absent_variable_is_noop() {
        let dir = TempDir::new().unwrap();
        let editor = write_fixture(&dir, "FOO=bar\n");

        editor.unset_var("missing").unwrap();

        assert_eq!(fs::read_to_string(editor.path()).unwrap(), "FOO=bar\n");
    }

    #[test]
    fn test_match_is_case_insensitive_write_is_uppercase() {
        let dir = TempDir::new().unwrap();
        let editor = write_fixture(&dir, "MySql_Unix_Port=/old.sock\n");

        editor.set_var("MYSQL_UNIX_PORT", "/new.sock").unwrap();

        assert_eq!(
            fs::read_to_string(editor.path()).unwrap(),
            "MYSQL_UNIX_PORT=/new.sock\n"
        );
    }

    #[test]
    fn test_lines_without_separator_are_preserved() {
        let dir = TempDir::new().unwrap();
        let editor = write_fixture(&dir, "not a declaration\nFOO=bar\n");

        editor.set_var("foo", "baz").unwrap();

        assert_eq!(
            fs::read_to_string(editor.path()).unwrap(),
            "not a declaration\nFOO=baz\n"
        );
    }

    #[test]
    fn test_missing_file_is_created_on_upsert() {
        let dir = TempDir::new().unwrap();
        let editor = DefaultsEditor::new(dir.path().join("slurmdbd"));

        editor.set_var("foo", "bar").unwrap();

        assert_eq!(fs::read_to_string(editor.path()).unwrap(), "FOO=bar\n");
    }

    #[test]
    fn test_unset_everything_leaves_empty_file() {
        let dir = TempDir::new().unwrap();
        let editor = write_fixture(&dir, "FOO=bar\n");

        editor.unset_var("foo").unwrap();

        assert_eq!(fs::read_to_string(editor.path()).unwrap(), "");
    }

    #[test]
    fn test_repeated_name_last_value_wins() {
        let dir = TempDir::new().unwrap();
        let editor = DefaultsEditor::new(dir.path().join("slurmdbd"));

        editor
            .apply([("foo", Some("first")), ("FOO", Some("second"))])
            .unwrap();

        assert_eq!(fs::read_to_string(editor.path()).unwrap(), "FOO=second\n");
    }

    #[test]
    fn test_value_may_contain_separator() {
        let dir = TempDir::new().unwrap();
        let editor = write_fixture(&dir, "OPTS=a=1,b=2\n");

        editor.set_var("opts", "a=3").unwrap();

        assert_eq!(fs::read_to_string(editor.path()).unwrap(), "OPTS=a=3\n");
    }
}
