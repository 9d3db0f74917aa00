//! Native mirror implementation: recursive diff-copy-delete
//!
//! Used where rsync is unavailable (or undesirable in tests). Copies files
//! whose size or mtime differ, then removes destination entries absent from
//! the source.

use std::path::Path;

use walkdir::WalkDir;

use super::Mirror;
use crate::error::Result;

pub struct NativeMirror;

impl Mirror for NativeMirror {
    fn sync(&self, from: &Path, to: &Path, exclude: &[String]) -> Result<()> {
        copy_tree(from, to, exclude)?;
        delete_stale(from, to, exclude)?;
        Ok(())
    }
}

fn is_excluded(path: &Path, exclude: &[String]) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| exclude.iter().any(|e| e == name))
}

fn copy_tree(from: &Path, to: &Path, exclude: &[String]) -> Result<()> {
    let walker = WalkDir::new(from)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_excluded(e.path(), exclude));

    for entry in walker {
        let entry = entry.map_err(into_io)?;
        let rel = match entry.path().strip_prefix(from) {
            Ok(rel) if rel.as_os_str().is_empty() => continue,
            Ok(rel) => rel,
            Err(_) => continue,
        };
        let dest = to.join(rel);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&dest)?;
        } else if needs_copy(entry.path(), &dest) {
            if let Some(parent) = dest.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::copy(entry.path(), &dest)?;
            copy_mtime(entry.path(), &dest)?;
        }
    }
    Ok(())
}

/// Carry the source mtime over so the next sync's diff sees the copy as
/// up to date. `fs::copy` does not preserve timestamps.
fn copy_mtime(source: &Path, dest: &Path) -> Result<()> {
    let mtime = source.metadata()?.modified()?;
    let file = std::fs::File::options().write(true).open(dest)?;
    file.set_modified(mtime)?;
    Ok(())
}

/// Cheap file-level diff: size and mtime. Copies on any doubt.
fn needs_copy(source: &Path, dest: &Path) -> bool {
    let (Ok(src_meta), Ok(dst_meta)) = (source.metadata(), dest.metadata()) else {
        return true;
    };
    if src_meta.len() != dst_meta.len() {
        return true;
    }
    match (src_meta.modified(), dst_meta.modified()) {
        (Ok(src_mtime), Ok(dst_mtime)) => src_mtime != dst_mtime,
        _ => true,
    }
}

fn delete_stale(from: &Path, to: &Path, exclude: &[String]) -> Result<()> {
    let walker = WalkDir::new(to)
        .contents_first(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_excluded(e.path(), exclude));

    for entry in walker {
        let entry = entry.map_err(into_io)?;
        let rel = match entry.path().strip_prefix(to) {
            Ok(rel) if rel.as_os_str().is_empty() => continue,
            Ok(rel) => rel,
            Err(_) => continue,
        };
        if from.join(rel).exists() {
            continue;
        }
        if entry.file_type().is_dir() {
            std::fs::remove_dir_all(entry.path())?;
        } else {
            std::fs::remove_file(entry.path())?;
        }
    }
    Ok(())
}

fn into_io(err: walkdir::Error) -> crate::error::MsyncError {
    crate::error::MsyncError::IoError {
        message: err.to_string(),
    }
}
