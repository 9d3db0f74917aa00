//! Version-bump propagation over the module dependency graph
//!
//! A bump visits the root module, then every module that depends on it,
//! transitively, depth-first in preorder. Each visited module gets a new
//! version written into its manifest, and each dependent additionally gets
//! its declared range on the parent rewritten before its own bump. Writes
//! are best-effort: a failure partway through a cascade aborts the remainder
//! and leaves earlier writes in place.

use crate::audit::{AuditRow, AuditTable, ParentRef};
use crate::error::{MsyncError, Result};
use crate::module::ModuleStore;
use crate::resolver;
use crate::version::{self, ReleaseType};

/// Options controlling a bump cascade
#[derive(Debug, Clone)]
pub struct BumpOptions {
    /// Write mutated manifests back to disk (false = dry run)
    pub persist: bool,
    /// Release type forced onto dependents. Defaults to `patch`: a dependent
    /// only needs a conservative re-release to pick up the new range.
    pub dependent_release: ReleaseType,
}

impl BumpOptions {
    pub fn new(persist: bool) -> Self {
        Self {
            persist,
            dependent_release: ReleaseType::Patch,
        }
    }
}

/// Bump `root` with `release` and cascade through its dependents.
///
/// Returns the audit rows for the full cascade. On failure the rows
/// accumulated so far are lost; use [`bump_into`] when the caller needs to
/// report the completed prefix alongside the error.
pub fn bump(
    store: &mut ModuleStore,
    root: &str,
    release: ReleaseType,
    options: &BumpOptions,
) -> Result<AuditTable> {
    let mut table = AuditTable::default();
    bump_into(store, root, release, options, &mut table)?;
    Ok(table)
}

/// Like [`bump`], appending rows into a caller-owned table so a partial
/// cascade remains reportable when the recursion aborts.
pub fn bump_into(
    store: &mut ModuleStore,
    root: &str,
    release: ReleaseType,
    options: &BumpOptions,
    table: &mut AuditTable,
) -> Result<()> {
    if !store.contains(root) {
        return Err(MsyncError::ModuleNotFound {
            name: root.to_string(),
        });
    }
    let mut path = Vec::new();
    bump_module(store, root, release, None, options, table, &mut path)
}

#[allow(clippy::too_many_arguments)]
fn bump_module(
    store: &mut ModuleStore,
    name: &str,
    release: ReleaseType,
    parent: Option<ParentRef>,
    options: &BumpOptions,
    table: &mut AuditTable,
    path: &mut Vec<String>,
) -> Result<()> {
    if path.iter().any(|visited| visited == name) {
        let chain = path
            .iter()
            .map(String::as_str)
            .chain([name])
            .collect::<Vec<_>>()
            .join(" -> ");
        return Err(MsyncError::CircularDependency { chain });
    }
    path.push(name.to_string());

    let new_version = {
        let module = store
            .get_mut(name)
            .ok_or_else(|| MsyncError::ModuleNotFound {
                name: name.to_string(),
            })?;
        // `latest` is the externally supplied baseline and is never
        // reassigned mid-cascade: a module reached through a second incoming
        // edge recomputes the same new version, not a stacked one.
        let new_version = version::increment(&module.latest, release);
        module.manifest.version = Some(new_version.to_string());
        module.version = new_version.clone();
        if options.persist {
            module.save_manifest()?;
        }
        new_version
    };

    table.push(AuditRow {
        action: release,
        module: name.to_string(),
        version: new_version.to_string(),
        reference: parent,
    });

    // Resolved against the live, already-mutated snapshot
    let dependents = resolver::depends_on_names(name, store);

    for dependent in dependents {
        {
            let module =
                store
                    .get_mut(&dependent)
                    .ok_or_else(|| MsyncError::ModuleNotFound {
                        name: dependent.clone(),
                    })?;
            module
                .manifest
                .set_dependency_range(name, &new_version.to_string());
            if options.persist {
                module.save_manifest()?;
            }
        }

        bump_module(
            store,
            &dependent,
            options.dependent_release,
            Some(ParentRef {
                name: name.to_string(),
                version: new_version.to_string(),
            }),
            options,
            table,
            path,
        )?;
    }

    path.pop();
    Ok(())
}
