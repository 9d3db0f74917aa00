use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    msync completions bash > ~/.bash_completion.d/msync\n\n\
                  Generate zsh completions:\n    msync completions zsh > ~/.zfunc/_msync\n\n\
                  Generate fish completions:\n    msync completions fish > ~/.config/fish/completions/msync.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
