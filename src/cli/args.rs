//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all Ploc
//! commands, using clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `generate`: Rewrite the backend catalog and frontend locale trees with
//!   tagged pseudo-translations
//! - `init`: Initialize ploc configuration file

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by generating commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Target locale code (overrides config file)
    #[arg(long)]
    pub target_locale: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate pseudo-translations for the backend catalog and the frontend locale trees
    Generate(GenerateCommand),
    /// Initialize a new .plocrc.json configuration file
    Init,
}
