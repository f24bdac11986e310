//! Dot-path access to nested locale trees.
//!
//! A locale tree is a JSON object whose values are either string leaves or
//! further objects. Keys like `"HomePage.cta.startNow"` address a leaf by
//! descending one object level per dot-separated segment. Both operations
//! match on `Value` variants explicitly: anything that is not
//! `Value::Object` terminates a lookup and is replaced during a merge.

use serde_json::{Map, Value};

/// Outcome of a write-once merge at a nested path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The final segment was vacant and the value was written there.
    Inserted,
    /// The final segment already held a value; nothing was written.
    Kept,
}

/// Look up the value at a dot-separated path.
///
/// Returns `None` the first time a segment is missing or the current node
/// is not an object. Never panics for a malformed path.
pub fn get<'a>(root: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = root.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Write `value` at a dot-separated path unless a value is already there.
///
/// Intermediate objects are created as needed; a non-object node found at
/// an intermediate position is replaced with a fresh empty object. The
/// final segment is never overwritten, so existing leaves survive
/// regeneration (write-once merge).
pub fn set_if_absent(root: &mut Map<String, Value>, path: &str, value: Value) -> MergeOutcome {
    let segments: Vec<&str> = path.split('.').collect();
    let Some((last, intermediate)) = segments.split_last() else {
        return MergeOutcome::Kept;
    };

    let mut current = root;
    for segment in intermediate {
        let node = current
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !node.is_object() {
            *node = Value::Object(Map::new());
        }
        current = node.as_object_mut().unwrap();
    }

    if current.contains_key(*last) {
        MergeOutcome::Kept
    } else {
        current.insert(last.to_string(), value);
        MergeOutcome::Inserted
    }
}
