//! Atomic file replacement.
//!
//! Both managed files are rewritten wholesale on every persist. Writing
//! through a temporary file in the target directory and renaming over the
//! destination means a crash mid-write leaves the previous content intact
//! instead of a truncated file.

use std::io::Write;
use std::path::Path;

use crate::error::Result;

/// Replace `path` with `contents` via a temporary file and rename.
///
/// The temporary file is created in the destination's parent directory so
/// the final rename stays on one filesystem. Ownership and permission bits
/// of the new file are the caller's responsibility.
///
/// # Errors
///
/// Returns an I/O error if the temporary file cannot be created, written,
/// or renamed into place.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
