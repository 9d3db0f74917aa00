//! High-speed module mirroring into dependents' install locations
//!
//! The mirror is a capability: callers pick an implementation (an external
//! `rsync` process, or a native recursive diff-copy-delete) and the rest of
//! the tool stays decoupled from the copy mechanism. A mirror makes the
//! destination exactly match the source, deletions included, minus a fixed
//! set of housekeeping paths.

pub mod native;
pub mod rsync;

pub use native::NativeMirror;
pub use rsync::RsyncMirror;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::module::Module;

/// Install location inside a dependent's working tree
pub const INSTALL_ROOT: &str = "node_modules";

/// Housekeeping paths that are never mirrored. Excluding the install root
/// keeps generated dependency trees from being mirrored into themselves.
pub const DEFAULT_EXCLUDES: &[&str] = &[".DS_Store", INSTALL_ROOT, ".tmp"];

/// One-shot directory synchronization capability
pub trait Mirror {
    /// Make `to` exactly mirror `from`, excluding any path whose name
    /// matches an entry in `exclude`. Stale destination entries are deleted.
    fn sync(&self, from: &Path, to: &Path, exclude: &[String]) -> Result<()>;
}

/// The `(name, dir)` pair a sync operates on
#[derive(Debug, Clone)]
pub struct ModuleRef {
    pub name: String,
    pub dir: PathBuf,
}

impl From<&Module> for ModuleRef {
    fn from(module: &Module) -> Self {
        ModuleRef {
            name: module.name.clone(),
            dir: module.dir.clone(),
        }
    }
}

/// Mirror `from`'s working tree into `to`'s install location
/// (`<to.dir>/node_modules/<from.name>/`), creating it if absent.
pub fn sync_module(mirror: &dyn Mirror, from: &ModuleRef, to: &ModuleRef) -> Result<()> {
    let dest = to.dir.join(INSTALL_ROOT).join(&from.name);
    std::fs::create_dir_all(&dest)?;

    let exclude: Vec<String> = DEFAULT_EXCLUDES.iter().map(|s| (*s).to_string()).collect();
    mirror.sync(&from.dir, &dest, &exclude)
}
