//! Destination directory, collision-safe naming, and whole-file writes.
//!
//! Files are written to a uniquely named temp file in the destination
//! directory and linked into place, so a reader never sees a half-written
//! image under its final name. Existing files are never truncated or replaced.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Temp files are `.imgfetch-<random>.part` next to their destination.
const TEMP_PREFIX: &str = ".imgfetch-";
const TEMP_SUFFIX: &str = ".part";

/// Create `dir` (and parents) if missing. Safe to call repeatedly; existing
/// contents are left alone.
pub fn prepare_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("could not create directory {}", dir.display()))?;
    Ok(())
}

/// Names of the entries currently in `dir`.
pub fn list_names(dir: &Path) -> io::Result<HashSet<String>> {
    let mut names = HashSet::new();
    for entry in fs::read_dir(dir)? {
        names.insert(entry?.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

/// First name not in `existing`: `candidate` itself, else `stem_1.ext`,
/// `stem_2.ext`, ...
///
/// Terminates after at most `existing.len() + 1` probes.
pub fn resolve_collision(candidate: &str, existing: &HashSet<String>) -> String {
    if !existing.contains(candidate) {
        return candidate.to_string();
    }
    let (stem, ext) = split_name(candidate);
    (1u64..)
        .map(|n| format!("{stem}_{n}{ext}"))
        .find(|name| !existing.contains(name))
        .unwrap_or_else(|| candidate.to_string())
}

/// Resolve `candidate` against the current contents of `dir`.
pub fn resolve_in_dir(dir: &Path, candidate: &str) -> io::Result<PathBuf> {
    let existing = list_names(dir)?;
    Ok(dir.join(resolve_collision(candidate, &existing)))
}

/// Write `bytes` to `final_path` in one go via a temp file in the same
/// directory, linked into place without replacing anything.
///
/// Fails with `AlreadyExists` if `final_path` exists. On any error the temp
/// file is removed and `final_path` is left untouched.
pub fn write_new_file(final_path: &Path, bytes: &[u8]) -> io::Result<u64> {
    let dir = match final_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::Builder::new()
        .prefix(TEMP_PREFIX)
        .suffix(TEMP_SUFFIX)
        .tempfile_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist_noclobber(final_path).map_err(|e| e.error)?;
    Ok(bytes.len() as u64)
}

/// Split into (stem, ".ext") the way `Path::file_stem`/`extension` do;
/// dotfiles like `.png` have no extension.
fn split_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(i) if i > 0 => name.split_at(i),
        _ => (name, ""),
    }
}
