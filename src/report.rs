//! Report formatting and printing utilities.
//!
//! This module is separate from the transformer logic so ploc can be used
//! as a library without printing side effects.

use std::path::Path;

use colored::Colorize;

use crate::config::CONFIG_FILE_NAME;
use crate::pipeline::{BackendReport, FrontendReport, PipelineOutcome};

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print_config_source(from_file: bool) {
    if from_file {
        println!("{}", format!("Using {}", CONFIG_FILE_NAME).dimmed());
    } else {
        println!("{}", "Using default configuration".dimmed());
    }
}

pub fn print_backend(outcome: &PipelineOutcome<BackendReport>) {
    match outcome {
        PipelineOutcome::SkippedMissing(path) => print_skip(path),
        PipelineOutcome::Completed(report) => {
            println!(
                "{} Generated {} with {} entries",
                SUCCESS_MARK.green(),
                report.output.display().to_string().bold(),
                report.entry_count
            );
        }
    }
}

pub fn print_frontend(outcome: &PipelineOutcome<FrontendReport>, verbose: bool) {
    match outcome {
        PipelineOutcome::SkippedMissing(path) => print_skip(path),
        PipelineOutcome::Completed(report) => {
            println!(
                "{} Updated {} and {} with {} keys",
                SUCCESS_MARK.green(),
                report.source_output.display().to_string().bold(),
                report.target_output.display().to_string().bold(),
                report.key_count
            );
            if verbose {
                for key in &report.added_keys {
                    println!("  {} {}", "+".green(), key);
                }
            }
        }
    }
}

fn print_skip(path: &Path) {
    println!("{} {}", "File not found:".yellow(), path.display());
}
