//! Input document discovery

use crate::error::{Result, SplitError};
use std::ffi::OsStr;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// All files in `dir` with the given extension, sorted by file name
///
/// The extension comparison ignores ASCII case. A missing directory is
/// treated as an empty one.
pub fn list_candidates(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(SplitError::Discovery {
                dir: dir.to_path_buf(),
                source,
            })
        }
    };

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| SplitError::Discovery {
            dir: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && has_extension(&path, extension) {
            candidates.push(path);
        }
    }

    candidates.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(candidates)
}

/// The first candidate of [`list_candidates`]
pub fn discover_input(dir: &Path, extension: &str) -> Result<PathBuf> {
    list_candidates(dir, extension)?
        .into_iter()
        .next()
        .ok_or_else(|| SplitError::NoInputDocument {
            dir: dir.to_path_buf(),
            extension: extension.to_string(),
        })
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}
