use clap::Parser;

/// Arguments for the sync command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Mirror a module into every dependant:\n    msync sync client\n\n\
                  Use the built-in copier instead of rsync:\n    msync sync client --native")]
pub struct SyncArgs {
    /// Module to mirror into its dependants. Prompts interactively when omitted
    pub module: Option<String>,

    /// Include modules flagged as ignored
    #[arg(long = "include-ignored", short = 'i')]
    pub include_ignored: bool,

    /// Use the native copier instead of invoking rsync
    #[arg(long)]
    pub native: bool,
}
