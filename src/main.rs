//! msync - version bump propagation and local module mirroring
//!
//! A command line tool for workspaces of interdependent modules: bump a
//! module and every dependant re-releases with an updated range; mirror a
//! built module into dependants for fast local iteration.

use clap::Parser;

use msync::cli::{Cli, Commands};
use msync::commands;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Ls(args) => commands::ls::run(cli.workspace, args),
        Commands::Bump(args) => commands::bump::run(cli.workspace, args),
        Commands::Sync(args) => commands::sync::run(cli.workspace, args),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
