//! Reading loosely-typed memo entries into import records.
//!
//! Client-side stores are untyped JSON, so each entry is checked on its
//! own: one bad entry never hides the good ones around it.

use serde_json::Value;

use memo_core::{ImportRecord, SourceEntry};

/// Read one entry as a record.
///
/// Requires string `title`, `content` and `category` and an array `tags`.
/// Non-string tags are dropped. A string or numeric `id` is kept as a
/// string; anything else leaves the record without an ID.
pub fn parse_record(value: &Value) -> Result<ImportRecord, String> {
    let obj = value
        .as_object()
        .ok_or_else(|| "entry is not an object".to_string())?;

    let text = |field: &str| -> Result<String, String> {
        obj.get(field)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| format!("missing string field `{}`", field))
    };

    let title = text("title")?;
    let content = text("content")?;
    let category = text("category")?;
    let tags = obj
        .get("tags")
        .and_then(Value::as_array)
        .ok_or_else(|| "missing array field `tags`".to_string())?;

    let id = match obj.get("id") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    };

    Ok(ImportRecord {
        id,
        title,
        content,
        category,
        tags: tags
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
    })
}

/// Read the entry at `index` (zero-based), turning a malformed entry into a
/// per-record failure message.
pub fn entry_from_value(index: usize, value: &Value) -> SourceEntry {
    match parse_record(value) {
        Ok(record) => SourceEntry::Record(record),
        Err(reason) => {
            let label = match value.get("title").and_then(Value::as_str) {
                Some(title) => format!("\"{}\"", title),
                None => format!("#{}", index + 1),
            };
            SourceEntry::Rejected(format!("Failed to import memo {}: {}", label, reason))
        }
    }
}
