use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::PipelineOutcome;
use crate::config::Config;
use crate::json_writer;

/// A gotext message catalog.
///
/// Only `language` and the per-message `translation` are rewritten. Every
/// other field (`id`, `placeholders`, `translatorComment`, `fuzzy`, ...)
/// rides through the flattened maps untouched.
#[derive(Debug, Serialize, Deserialize)]
pub struct Catalog {
    pub language: String,
    pub messages: Vec<MessageEntry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageEntry {
    pub message: String,
    #[serde(default)]
    pub translation: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug)]
pub struct BackendReport {
    pub output: PathBuf,
    pub entry_count: usize,
}

/// Rewrite the backend catalog as a tagged pseudo-translation.
///
/// Retags `language` with the configured target locale and overwrites every
/// message's `translation` with the tag prefix plus its source text,
/// discarding any prior translation. Message order is preserved. A missing
/// catalog skips the operation; a malformed one is a fatal error.
pub fn process_backend(config: &Config) -> Result<PipelineOutcome<BackendReport>> {
    let source = Path::new(&config.backend_source);
    if !source.exists() {
        return Ok(PipelineOutcome::SkippedMissing(source.to_path_buf()));
    }

    let content = fs::read_to_string(source)
        .with_context(|| format!("Failed to read message catalog: {}", source.display()))?;
    let mut catalog: Catalog = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse message catalog: {}", source.display()))?;

    catalog.language = config.target_locale.clone();
    let tag = config.tag();
    for entry in &mut catalog.messages {
        entry.translation = Value::String(format!("{}{}", tag, entry.message));
    }

    let output = Path::new(&config.backend_target);
    let value = serde_json::to_value(&catalog)
        .with_context(|| format!("Failed to serialize message catalog: {}", output.display()))?;
    json_writer::write_sorted(output, &value)?;

    Ok(PipelineOutcome::Completed(BackendReport {
        output: output.to_path_buf(),
        entry_count: catalog.messages.len(),
    }))
}
