use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value};

use crate::nested::{self, MergeOutcome};

/// Serialize a JSON value with recursively sorted object keys, four-space
/// indentation, and a trailing newline.
///
/// All output files go through this function so reruns produce byte-stable,
/// diff-friendly results regardless of insertion order.
pub fn to_sorted_string(value: &Value) -> Result<String> {
    let sorted = sort_keys(value);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    sorted
        .serialize(&mut serializer)
        .context("Failed to serialize JSON")?;

    let mut content = String::from_utf8(buf).context("Serialized JSON was not valid UTF-8")?;
    content.push('\n');
    Ok(content)
}

/// Write a JSON value to `path` via [`to_sorted_string`], creating parent
/// directories as needed.
pub fn write_sorted(path: &Path, value: &Value) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let content = to_sorted_string(value)?;
    fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
}

fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));

            let mut sorted = Map::new();
            for (key, val) in entries {
                sorted.insert(key.clone(), sort_keys(val));
            }
            Value::Object(sorted)
        }
        // Arrays keep their element order; only object keys are normalized.
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        other => other.clone(),
    }
}

/// A locale tree bound to its file on disk.
///
/// Wraps the nested map with the dot-path operations the transformers need
/// and with the deterministic save path.
pub struct LocaleTree {
    file_path: PathBuf,
    data: Map<String, Value>,
}

impl LocaleTree {
    /// An empty tree that will be written to `path` on save.
    pub fn empty(path: &Path) -> Self {
        Self {
            file_path: path.to_path_buf(),
            data: Map::new(),
        }
    }

    /// Load an existing tree, falling back to an empty one when the file is
    /// missing, unreadable, malformed, or not a JSON object.
    ///
    /// The fallback is silent: a broken source tree is regenerated from the
    /// key list on the next save. Hand edits in such a file are lost.
    pub fn load_or_default(path: &Path) -> Self {
        let data = fs::read_to_string(path)
            .ok()
            .and_then(|content| serde_json::from_str::<Value>(&content).ok())
            .and_then(|value| match value {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .unwrap_or_default();

        Self {
            file_path: path.to_path_buf(),
            data,
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Look up a dot-path key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        nested::get(&self.data, key)
    }

    /// Write-once merge of a dot-path key.
    pub fn merge(&mut self, key: &str, value: Value) -> MergeOutcome {
        nested::set_if_absent(&mut self.data, key, value)
    }

    /// Save the tree with sorted keys and stable indentation.
    pub fn save(&self) -> Result<()> {
        write_sorted(&self.file_path, &Value::Object(self.data.clone()))
    }
}
