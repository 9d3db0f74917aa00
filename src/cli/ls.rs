use clap::Parser;

/// Arguments for the ls command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List modules:\n    msync ls\n\n\
                  Include ignored modules:\n    msync ls -i")]
pub struct LsArgs {
    /// Include modules flagged as ignored
    #[arg(long = "include-ignored", short = 'i')]
    pub include_ignored: bool,
}
