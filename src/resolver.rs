//! Dependent resolution over the module snapshot
//!
//! A module A depends on module B iff B's name appears as a key in one of
//! A's dependency sections. Edges are derived on demand and never cached:
//! the bump engine mutates the snapshot mid-cascade, so each recursion level
//! must observe the current state.

use crate::module::{Module, ModuleStore};

/// Every module in the store (excluding `name` itself) that declares a
/// dependency on `name`, in store order. An empty result is normal and
/// terminates a bump cascade on that branch.
pub fn depends_on<'a>(name: &str, store: &'a ModuleStore) -> Vec<&'a Module> {
    store
        .iter()
        .filter(|m| m.name != name && m.depends_on(name))
        .collect()
}

/// Like [`depends_on`], returning names only. Used by the bump engine, which
/// needs to re-borrow the store mutably between lookups.
pub fn depends_on_names(name: &str, store: &ModuleStore) -> Vec<String> {
    depends_on(name, store)
        .into_iter()
        .map(|m| m.name.clone())
        .collect()
}
