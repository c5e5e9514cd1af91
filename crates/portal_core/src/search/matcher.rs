//! Case-insensitive substring matching over untyped records.

use serde_json::Value;

/// True when any of `fields` contains `query`, ignoring case.
///
/// Fields are dotted paths (`author.name`). String fields match by
/// substring; array fields match when any scalar element does. Other
/// value kinds never match. An empty query matches everything.
pub fn matches_search(record: &Value, query: &str, fields: &[&str]) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    fields
        .iter()
        .any(|field| match lookup_path(record, field) {
            Some(Value::String(text)) => text.to_lowercase().contains(&needle),
            Some(Value::Array(items)) => items.iter().any(|item| {
                scalar_text(item).is_some_and(|text| text.to_lowercase().contains(&needle))
            }),
            _ => false,
        })
}

fn lookup_path<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(record, |current, segment| current.get(segment))
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
