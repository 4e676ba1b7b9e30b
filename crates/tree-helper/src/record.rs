//! Records and their child links

use serde_json::{Map, Value};

use crate::error::{Result, TreeError};

/// One node's payload plus its linkage fields
pub type Record = Map<String, Value>;

/// Iterate over the child records stored under `key`
///
/// Yields nothing if the field is absent or not an array. Array elements
/// that are not JSON objects are skipped.
pub fn children<'a>(record: &'a Record, key: &str) -> impl DoubleEndedIterator<Item = &'a Record> {
    record
        .get(key)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_object)
}

/// Mutable counterpart of [`children`]
pub fn children_mut<'a>(
    record: &'a mut Record,
    key: &str,
) -> impl DoubleEndedIterator<Item = &'a mut Record> {
    record
        .get_mut(key)
        .and_then(Value::as_array_mut)
        .into_iter()
        .flatten()
        .filter_map(Value::as_object_mut)
}

/// Check if a record has at least one child record under `key`
pub fn has_children(record: &Record, key: &str) -> bool {
    children(record, key).next().is_some()
}

/// Convert a JSON array of objects into records
pub fn records_from_value(value: Value) -> Result<Vec<Record>> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(TreeError::NotAnArray {
                found: kind_of(&other),
            })
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(record) => Ok(record),
            other => Err(TreeError::NotARecord {
                index,
                found: kind_of(&other),
            }),
        })
        .collect()
}

/// Parse JSON text holding an array of records
pub fn records_from_str(json: &str) -> Result<Vec<Record>> {
    let value: Value = serde_json::from_str(json)?;
    records_from_value(value)
}

/// Wrap records back into a JSON array
pub fn records_to_value(records: Vec<Record>) -> Value {
    Value::Array(records.into_iter().map(Value::Object).collect())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
