//! Shell completions generation.
//!
//! Generates shell completion scripts for bash, zsh, fish, and PowerShell.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::TdoError;

/// Generate the completion script for the given shell.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn generate_completions(shell: Shell) -> Result<String, TdoError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "tdo", &mut buf);
    String::from_utf8(buf).map_err(|e| TdoError::Config(format!("UTF-8 error: {e}")))
}
