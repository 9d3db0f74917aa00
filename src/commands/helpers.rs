//! Shared command plumbing: workspace loading and module selection

use std::path::PathBuf;

use inquire::Select;

use crate::config::Settings;
use crate::error::{MsyncError, Result};
use crate::module::ModuleStore;

/// Locate the workspace from the given (or current) directory, load the
/// settings and the full module snapshot.
pub fn load_workspace(workspace: Option<PathBuf>) -> Result<(PathBuf, Settings, ModuleStore)> {
    let start = match workspace {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let root = Settings::find_from(&start).ok_or(MsyncError::ConfigNotFound)?;
    let settings = Settings::load(&root)?;
    let store = settings.load_modules(&root)?;
    Ok((root, settings, store))
}

/// Resolve the module a command operates on: validate an explicit name, or
/// prompt interactively. Returns None when the prompt was cancelled.
pub fn select_module(
    requested: Option<String>,
    store: &ModuleStore,
    include_ignored: bool,
    prompt: &str,
) -> Result<Option<String>> {
    if let Some(name) = requested {
        let Some(module) = store.get(&name) else {
            return Err(MsyncError::ModuleNotFound { name });
        };
        if module.ignored && !include_ignored {
            return Err(MsyncError::ModuleIgnored { name });
        }
        return Ok(Some(name));
    }

    let names = store.visible_names(include_ignored);
    if names.is_empty() {
        println!("No modules found.");
        return Ok(None);
    }

    let selection = Select::new(prompt, names)
        .with_page_size(10)
        .with_help_message("↑↓ to move, ENTER to select, ESC to cancel")
        .prompt_skippable()?;

    Ok(selection)
}
