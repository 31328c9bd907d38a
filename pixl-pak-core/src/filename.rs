use std::path::{Component, Path};

use crate::error::{PakError, Result};
use crate::spec;

/// Turn a scanned path into its archive name: relative to `root`, `/`-separated.
pub fn entry_name(root: &Path, path: &Path) -> Result<String> {
    let relative = path.strip_prefix(root).map_err(|_| PakError::PathOutsideSource {
        path: path.to_path_buf(),
        root: root.to_path_buf(),
    })?;

    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => {
                let part = part.to_str().ok_or_else(|| PakError::InvalidEntryName {
                    path: path.to_path_buf(),
                    reason: "path is not valid UTF-8",
                })?;
                parts.push(part);
            }
            Component::CurDir => {}
            _ => {
                return Err(PakError::PathOutsideSource {
                    path: path.to_path_buf(),
                    root: root.to_path_buf(),
                });
            }
        }
    }

    let name = parts.join("/");
    if name.is_empty() {
        return Err(PakError::InvalidEntryName {
            path: path.to_path_buf(),
            reason: "name is empty",
        });
    }
    if name.contains('\0') {
        return Err(PakError::InvalidEntryName {
            path: path.to_path_buf(),
            reason: "name contains NUL",
        });
    }
    if name.len() > spec::MAX_NAME_LEN {
        return Err(PakError::InvalidEntryName {
            path: path.to_path_buf(),
            reason: "name exceeds 1024 bytes",
        });
    }

    Ok(name)
}

/// Ensure an archive name only has normal components, so joining it onto an
/// output directory stays inside that directory.
pub fn check_entry_name(name: &str) -> Result<&Path> {
    let path = Path::new(name);
    if name.is_empty() {
        return Err(PakError::UnsafeEntryName(name.to_string()));
    }
    for component in path.components() {
        match component {
            Component::Normal(_) => {}
            _ => return Err(PakError::UnsafeEntryName(name.to_string())),
        }
    }
    Ok(path)
}
