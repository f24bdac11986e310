use anyhow::Result;

use super::args::{Arguments, Command};
use super::commands::{generate::generate, init::init};
use super::exit_status::ExitStatus;

/// Main entry point for the ploc CLI.
///
/// Dispatches to the appropriate command handler based on the parsed
/// arguments. Returns `Err` if the command fails (e.g. malformed backend
/// catalog); the caller maps that to `ExitStatus::Error`.
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Generate(cmd)) => generate(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
