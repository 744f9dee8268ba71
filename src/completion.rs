//! # Shell Completion Module
//!
//! Completion scripts are generated from clap's command definitions.
//!
//! ## Usage
//!
//! ```bash
//! # Generate bash completions
//! spotcrates completion bash > ~/.local/share/bash-completion/completions/spotcrates
//!
//! # Generate zsh completions
//! spotcrates completion zsh > ~/.config/zsh/completions/_spotcrates
//! ```

use crate::cli::Shell;
use clap::Command;
use clap_complete::{generate, Generator, Shell as CompletionShell};
use std::io::{self, Write};

/// Generate shell completions for the given shell
pub fn generate_completions<G: Generator>(gen: G, cmd: &mut Command) {
    write_completions(gen, cmd, &mut io::stdout());
}

/// Write a completion script for `cmd` to `out`.
pub fn write_completions<G: Generator>(gen: G, cmd: &mut Command, out: &mut dyn Write) {
    let name = cmd.get_name().to_string();
    generate(gen, cmd, name, out);
}

/// Convert our Shell enum to clap_complete's Shell enum
pub fn shell_to_completion_shell(shell: &Shell) -> CompletionShell {
    match shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use clap::CommandFactory;

    #[test]
    fn test_shell_conversion() {
        assert_eq!(shell_to_completion_shell(&Shell::Zsh), CompletionShell::Zsh);
        assert_eq!(shell_to_completion_shell(&Shell::PowerShell), CompletionShell::PowerShell);
    }

    #[test]
    fn test_fish_script_lists_subcommands() {
        let mut out = Vec::new();
        write_completions(CompletionShell::Fish, &mut Args::command(), &mut out);
        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("complete -c spotcrates"));
        assert!(script.contains("list-playlists"));
        assert!(script.contains("randomize"));
    }
}
