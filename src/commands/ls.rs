//! List command implementation

use std::path::PathBuf;

use console::Style;

use crate::cli::LsArgs;
use crate::commands::helpers;
use crate::error::Result;
use crate::module::ModuleStore;
use crate::resolver;

/// Run the ls command
pub fn run(workspace: Option<PathBuf>, args: LsArgs) -> Result<()> {
    let (root, _settings, store) = helpers::load_workspace(workspace)?;

    if store.is_empty() {
        println!("No modules found.");
        return Ok(());
    }

    println!(
        "Modules in {}:",
        Style::new().dim().apply_to(root.display())
    );
    print_modules(&store, args.include_ignored);

    Ok(())
}

fn print_modules(store: &ModuleStore, include_ignored: bool) {
    let bold = Style::new().bold().yellow();
    let magenta = Style::new().magenta();
    let dim = Style::new().dim();

    for module in store.iter() {
        if module.ignored && !include_ignored {
            continue;
        }

        let ignored_marker = if module.ignored { " (ignored)" } else { "" };
        println!(
            "  {} {}{}",
            bold.apply_to(&module.name),
            magenta.apply_to(&module.version),
            dim.apply_to(ignored_marker),
        );

        let dependents = resolver::depends_on_names(&module.name, store);
        if !dependents.is_empty() {
            println!("    {} {}", dim.apply_to("dependants:"), dependents.join(", "));
        }
    }
}
