//! Change notification via a sentinel file
//!
//! After a module is mirrored into a dependent, the dependent's file-watcher
//! usually ignores the install root, so nothing reloads. Rewriting a small
//! sentinel file inside the dependent's compiled-output directory perturbs
//! the filesystem where the watcher is looking. Only the write side effect
//! matters; the embedded counter exists for human debugging.

use std::path::Path;

use crate::error::Result;
use crate::module::Module;

/// Sentinel filename inside a module's compiled-output directory
pub const SENTINEL_FILE: &str = "__msync.js";

const COUNTER_KEY: &str = "saveTotal";

/// Write (or rewrite) the sentinel file for `module`.
///
/// No-op when the module is ignored, has no compiled-output directory
/// configured, or the directory does not exist yet (nothing has been built).
/// These are valid steady states, not failures.
pub fn notify_change(module: &Module) -> Result<()> {
    if module.ignored {
        return Ok(());
    }
    let Some(ref output_dir) = module.output_dir else {
        return Ok(());
    };
    if !output_dir.exists() {
        return Ok(());
    }

    let file = output_dir.join(SENTINEL_FILE);
    let total = next_total(&file);
    let text = format!(
        "/*\n  TEMPORARY FILE GENERATED BY msync.\n  \
         Rewriting it causes the file-watcher to reload the mirrored module.\n  \
         It is safe to delete this file.\n\n  {COUNTER_KEY}: {total}\n*/\n"
    );
    std::fs::write(&file, text)?;
    Ok(())
}

/// Counter value for the next write: previous value + 1, or 0 when the file
/// is missing or its counter line is malformed.
fn next_total(file: &Path) -> u64 {
    std::fs::read_to_string(file)
        .ok()
        .and_then(|text| parse_total(&text))
        .map_or(0, |total| total + 1)
}

/// Strict counter grammar: a line `saveTotal: <decimal digits>`, surrounding
/// whitespace allowed. Anything else yields None.
fn parse_total(text: &str) -> Option<u64> {
    for line in text.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix(COUNTER_KEY) {
            let rest = rest.trim_start().strip_prefix(':')?;
            return rest.trim().parse().ok();
        }
    }
    None
}
