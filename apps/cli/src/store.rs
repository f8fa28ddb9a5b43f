//! Phrase and statistics files on disk.

use crate::error::StoreError;
use crate::stats::RepetitionStats;
use drill_core::{parse_phrases, PhraseBook};
use std::collections::VecDeque;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Resolve a data file.
///
/// Returns `file` when it exists as given. Otherwise searches `search_root`
/// breadth-first for a file with the same name (hidden directories and
/// `target` are skipped). When nothing is found an empty file is created at
/// `file`.
pub fn locate_or_create(file: &Path, search_root: &Path) -> Result<PathBuf, StoreError> {
    if file.is_file() {
        return Ok(file.to_path_buf());
    }

    if let Some(name) = file.file_name() {
        if let Some(found) = find_by_name(search_root, name) {
            tracing::info!(path = %found.display(), "found data file");
            return Ok(found);
        }
    }

    if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
    }
    File::create(file).map_err(|e| StoreError::io(file, e))?;
    tracing::info!(path = %file.display(), "created empty data file");

    Ok(file.to_path_buf())
}

fn find_by_name(root: &Path, name: &std::ffi::OsStr) -> Option<PathBuf> {
    let mut queue = VecDeque::from([root.to_path_buf()]);

    while let Some(dir) = queue.pop_front() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(dir = %dir.display(), error = %e, "skipping unreadable directory");
                continue;
            }
        };

        let mut paths: Vec<PathBuf> = entries.filter_map(|e| e.ok()).map(|e| e.path()).collect();
        paths.sort();

        for path in paths {
            if path.is_file() {
                if path.file_name() == Some(name) {
                    return Some(path);
                }
            } else if path.is_dir() && !is_skipped_dir(&path) {
                queue.push_back(path);
            }
        }
    }

    None
}

fn is_skipped_dir(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.') || n == "target")
}

/// Read and parse a phrase file. Malformed lines are logged and skipped.
pub fn load_phrases(path: &Path) -> Result<PhraseBook, StoreError> {
    let content = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
    let book = parse_phrases(&content);

    for warning in book.warnings() {
        tracing::warn!(file = %path.display(), "{warning}");
    }
    tracing::info!(file = %path.display(), phrases = book.len(), "loaded phrases");

    Ok(book)
}

/// Read the statistics document. A missing or blank file means no statistics yet.
pub fn load_stats(path: &Path) -> Result<RepetitionStats, StoreError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(RepetitionStats::default()),
        Err(e) => return Err(StoreError::io(path, e)),
    };

    if content.trim().is_empty() {
        return Ok(RepetitionStats::default());
    }

    serde_json::from_str(&content).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the statistics document atomically as indented UTF-8 JSON.
pub fn save_stats(path: &Path, stats: &RepetitionStats) -> Result<(), StoreError> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;

    let temp_file = NamedTempFile::new_in(parent).map_err(|e| StoreError::io(parent, e))?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        serde_json::to_writer_pretty(&mut writer, stats).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        writer.write_all(b"\n").map_err(|e| StoreError::io(path, e))?;
        writer.flush().map_err(|e| StoreError::io(path, e))?;
    }

    temp_file
        .persist(path)
        .map_err(|e| StoreError::io(path, e.error))?;
    tracing::debug!(file = %path.display(), records = stats.len(), "saved repetition stats");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skipped_dirs() {
        assert!(is_skipped_dir(Path::new("/repo/.git")));
        assert!(is_skipped_dir(Path::new("/repo/target")));
        assert!(!is_skipped_dir(Path::new("/repo/data")));
    }
}
