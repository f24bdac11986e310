use anyhow::{Context, Result};

use super::super::args::GenerateCommand;
use super::super::exit_status::ExitStatus;
use crate::config::{ConfigLoadResult, load_config};
use crate::pipeline::{process_backend, process_frontend};
use crate::report;

/// Run both transformers in their fixed order: backend catalog first, then
/// the frontend key tree. A fatal backend error aborts the run before the
/// frontend operation starts; a missing input file only skips its own
/// operation.
pub fn generate(cmd: GenerateCommand) -> Result<ExitStatus> {
    let current_dir =
        std::env::current_dir().context("Failed to determine current directory")?;
    let ConfigLoadResult { mut config, from_file } = load_config(&current_dir)?;
    config.apply_overrides(cmd.common.target_locale.as_deref());
    config.validate()?;

    let verbose = cmd.common.verbose;
    if verbose {
        report::print_config_source(from_file);
    }

    let backend = process_backend(&config)?;
    report::print_backend(&backend);

    let frontend = process_frontend(&config)?;
    report::print_frontend(&frontend, verbose);

    Ok(ExitStatus::Success)
}
