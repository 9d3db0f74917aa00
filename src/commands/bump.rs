//! Bump command implementation
//!
//! Bumps a module version and all references to it in dependant modules.
//! The cascade is reported as a table even when it aborts partway: whatever
//! prefix completed is what the user needs to see.

use std::path::PathBuf;

use console::Style;
use inquire::Select;

use crate::audit::AuditTable;
use crate::bump::{self, BumpOptions};
use crate::cli::BumpArgs;
use crate::commands::helpers;
use crate::error::Result;
use crate::module::ModuleStore;
use crate::resolver;
use crate::version::ReleaseType;

/// Run the bump command
pub fn run(workspace: Option<PathBuf>, args: BumpArgs) -> Result<()> {
    let (_root, _settings, mut store) = helpers::load_workspace(workspace)?;

    let Some(name) =
        helpers::select_module(args.module, &store, args.include_ignored, "Select a module")?
    else {
        return Ok(());
    };

    // Ignored modules never participate in the cascade unless included
    store.retain_visible(args.include_ignored);

    print_target(&store, &name);

    let Some(release) = select_release(args.release)? else {
        return Ok(());
    };

    if args.dry_run {
        println!("{}", Style::new().dim().apply_to("Dry run...no files will be saved."));
        println!();
    }

    let options = BumpOptions::new(!args.dry_run);
    let mut table = AuditTable::default();
    let outcome = bump::bump_into(&mut store, &name, release, &options, &mut table);

    print_cascade(&table);

    if args.dry_run {
        println!();
        println!("{}", Style::new().dim().apply_to("No files were saved."));
    }

    outcome
}

/// Show the selected module and its dependants before the release prompt,
/// so the user sees what the cascade will touch.
fn print_target(store: &ModuleStore, name: &str) {
    let Some(module) = store.get(name) else {
        return;
    };

    println!(
        "  {} {}",
        Style::new().bold().yellow().apply_to(&module.name),
        Style::new().magenta().apply_to(&module.version),
    );
    let dependents = resolver::depends_on_names(name, store);
    if !dependents.is_empty() {
        println!(
            "    {} {}",
            Style::new().dim().apply_to("dependants:"),
            dependents.join(", ")
        );
    }
    println!();
}

fn select_release(requested: Option<ReleaseType>) -> Result<Option<ReleaseType>> {
    if let Some(release) = requested {
        return Ok(Some(release));
    }

    let choices = vec!["patch", "minor", "major"];
    let Some(choice) = Select::new("Release", choices)
        .with_help_message("↑↓ to move, ENTER to select, ESC to cancel")
        .prompt_skippable()?
    else {
        return Ok(None);
    };

    Ok(Some(choice.parse()?))
}

fn print_cascade(table: &AuditTable) {
    let Some((root, dependents)) = table.rows().split_first() else {
        return;
    };

    let cyan = Style::new().cyan();
    let magenta = Style::new().magenta();
    let yellow = Style::new().yellow();

    println!(
        "  {} update {} to version {}",
        cyan.apply_to(root.action.as_str().to_uppercase()),
        magenta.apply_to(&root.module),
        magenta.apply_to(&root.version),
    );

    if dependents.is_empty() {
        return;
    }

    println!();
    println!("{}", Style::new().dim().apply_to("Dependant modules:"));
    for row in dependents {
        let reference = row
            .reference
            .as_ref()
            .map(|r| format!("{} ({})", r.name, r.version))
            .unwrap_or_default();
        println!(
            "  {}  {}  {}  {}",
            cyan.apply_to(row.action.as_str().to_uppercase()),
            magenta.apply_to(&row.module),
            magenta.apply_to(&row.version),
            yellow.apply_to(reference),
        );
    }
}
