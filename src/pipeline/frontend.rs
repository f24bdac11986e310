use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;

use super::PipelineOutcome;
use crate::config::Config;
use crate::json_writer::LocaleTree;
use crate::nested::MergeOutcome;
use crate::utils::display_label;

#[derive(Debug)]
pub struct FrontendReport {
    pub source_output: PathBuf,
    pub target_output: PathBuf,
    pub key_count: usize,
    /// Keys that were missing from the source tree and filled with a
    /// humanized label this run.
    pub added_keys: Vec<String>,
}

/// Mirror the frontend key list into the source and target locale trees.
///
/// Keys missing from the source tree are merged in with a humanized label
/// derived from their final segment; existing leaves are never touched.
/// The target tree is rebuilt from scratch with a tagged copy of every
/// string leaf the key list reaches. Non-string values (nested subtrees)
/// produce no target entry.
pub fn process_frontend(config: &Config) -> Result<PipelineOutcome<FrontendReport>> {
    let keys_path = Path::new(&config.frontend_keys);
    if !keys_path.exists() {
        return Ok(PipelineOutcome::SkippedMissing(keys_path.to_path_buf()));
    }

    let keys = read_key_list(keys_path)?;

    let mut source = LocaleTree::load_or_default(Path::new(&config.frontend_source));
    let mut target = LocaleTree::empty(Path::new(&config.frontend_target));
    let tag = config.tag();

    let mut added_keys = Vec::new();
    for key in &keys {
        let effective = match source.get(key) {
            Some(value) => value.clone(),
            None => {
                let label = display_label(key);
                if source.merge(key, Value::String(label.clone())) == MergeOutcome::Inserted {
                    added_keys.push(key.clone());
                }
                Value::String(label)
            }
        };

        if let Value::String(text) = effective {
            target.merge(key, Value::String(format!("{}{}", tag, text)));
        }
    }

    source.save()?;
    target.save()?;

    Ok(PipelineOutcome::Completed(FrontendReport {
        source_output: source.path().to_path_buf(),
        target_output: target.path().to_path_buf(),
        key_count: keys.len(),
        added_keys,
    }))
}

/// Read the newline-separated key list, trimming whitespace and ignoring
/// blank lines. Failing to read the file once its existence is confirmed
/// is fatal.
fn read_key_list(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read key list: {}", path.display()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}
