//! CLI definitions using clap derive API
//!
//! One submodule per command's argument types:
//! - ls: List command arguments
//! - bump: Bump command arguments
//! - sync: Sync command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod bump;
pub mod completions;
pub mod ls;
pub mod sync;

pub use bump::BumpArgs;
pub use completions::CompletionsArgs;
pub use ls::LsArgs;
pub use sync::SyncArgs;

/// msync - multi-module version and sync tool
///
/// Propagates version bumps through dependent modules and mirrors built
/// modules into dependents' install locations for fast local iteration.
#[derive(Parser, Debug)]
#[command(
    name = "msync",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Version bump propagation and local module mirroring",
    long_about = "msync manages a workspace of interdependent modules that reference each \
                  other via semantic-version ranges. It propagates version bumps through \
                  every dependent module and mirrors built modules into dependents' \
                  node_modules for fast local iteration.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  msync ls                         \x1b[90m# List workspace modules\x1b[0m\n   \
                  msync bump client -r minor       \x1b[90m# Minor-bump client, patch dependants\x1b[0m\n   \
                  msync bump client -r minor -d    \x1b[90m# Dry run, nothing saved\x1b[0m\n   \
                  msync sync client                \x1b[90m# Mirror client into its dependants\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Workspace directory (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "MSYNC_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List workspace modules and their dependants
    Ls(LsArgs),

    /// Bump a module version and all references to it in dependant modules
    Bump(BumpArgs),

    /// Mirror a module into its dependants' install locations
    Sync(SyncArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
