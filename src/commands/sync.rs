//! Sync command implementation
//!
//! Mirrors a module's working tree into the install location of every module
//! that depends on it, then rewrites each dependant's sentinel file so a
//! running file-watcher picks up the change.

use std::path::PathBuf;

use console::Style;

use crate::cli::SyncArgs;
use crate::commands::helpers;
use crate::error::{MsyncError, Result};
use crate::mirror::{self, Mirror, ModuleRef, NativeMirror, RsyncMirror};
use crate::notify;
use crate::resolver;

/// Run the sync command
pub fn run(workspace: Option<PathBuf>, args: SyncArgs) -> Result<()> {
    let (_root, _settings, mut store) = helpers::load_workspace(workspace)?;

    let Some(name) =
        helpers::select_module(args.module, &store, args.include_ignored, "Select a module")?
    else {
        return Ok(());
    };

    // Ignored modules are never sync targets unless included
    store.retain_visible(args.include_ignored);

    let dependents = resolver::depends_on_names(&name, &store);
    if dependents.is_empty() {
        println!("No modules depend on {name}.");
        return Ok(());
    }

    let mirror: Box<dyn Mirror> = if args.native {
        Box::new(NativeMirror)
    } else {
        Box::new(RsyncMirror)
    };

    let source = store
        .get(&name)
        .map(ModuleRef::from)
        .ok_or_else(|| MsyncError::ModuleNotFound { name: name.clone() })?;

    let magenta = Style::new().magenta();
    println!(
        "Syncing {} into {} dependant module(s):",
        magenta.apply_to(&name),
        dependents.len()
    );

    for dependent in &dependents {
        let target = store
            .get(dependent)
            .ok_or_else(|| MsyncError::ModuleNotFound {
                name: dependent.clone(),
            })?;

        mirror::sync_module(mirror.as_ref(), &source, &ModuleRef::from(target))?;
        notify::notify_change(target)?;

        println!("  {} {}", Style::new().green().apply_to("✓"), dependent);
    }

    Ok(())
}
