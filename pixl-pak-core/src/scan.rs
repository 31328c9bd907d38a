use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Recursively collect every regular file under `root`.
///
/// Entries are sorted by file name within each directory, so the result is
/// stable across runs. Symlinks are neither followed nor returned. Walk
/// errors are logged and the affected subtree is skipped.
pub fn scan_dir(root: impl AsRef<Path>) -> Vec<PathBuf> {
    let root = root.as_ref();
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::warn!("Skipping unreadable entry under {}: {e}", root.display());
                continue;
            }
        };
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    log::debug!("Scanned {} files under {}", files.len(), root.display());
    files
}
