use clap::Parser;

use crate::version::ReleaseType;

/// Arguments for the bump command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Bump interactively:\n    msync bump\n\n\
                  Minor-bump a module and patch its dependants:\n    msync bump client -r minor\n\n\
                  Preview without saving:\n    msync bump client -r major --dry-run")]
pub struct BumpArgs {
    /// Module to bump. Prompts interactively when omitted
    pub module: Option<String>,

    /// Release type for the root module (dependants always get a patch)
    #[arg(long, short = 'r', value_enum)]
    pub release: Option<ReleaseType>,

    /// Compute the cascade without saving any files
    #[arg(long = "dry-run", short = 'd')]
    pub dry_run: bool,

    /// Include modules flagged as ignored
    #[arg(long = "include-ignored", short = 'i')]
    pub include_ignored: bool,
}
