//! Structure-preserving filter, map and walk operations

use serde_json::Value;

use crate::config::{TreeConfig, DEFAULT_CHILDREN};
use crate::record::{children_mut, Record};
use crate::walk::TreeWalker;
use crate::{into_ok, lift};

/// Prune a tree down to the records matching `predicate` and their ancestors
///
/// A record survives if `predicate` accepts it or if any of its descendants
/// survives. The predicate is called once per record, after that record's
/// subtree has been decided, and sees the rebuilt copy holding only the
/// surviving children. Filtering an already filtered tree with the same
/// predicate therefore changes nothing. The input is left untouched.
pub fn filter<F>(tree: &[Record], config: &TreeConfig, mut predicate: F) -> Vec<Record>
where
    F: FnMut(&Record) -> bool,
{
    into_ok(try_filter(tree, config, lift(&mut predicate)))
}

/// Fallible form of [`filter`]
pub fn try_filter<F, E>(tree: &[Record], config: &TreeConfig, mut predicate: F) -> Result<Vec<Record>, E>
where
    F: FnMut(&Record) -> Result<bool, E>,
{
    filter_level(tree.iter(), &config.children, &mut predicate)
}

fn filter_level<'a, F, E>(
    records: impl Iterator<Item = &'a Record>,
    children_key: &str,
    predicate: &mut F,
) -> Result<Vec<Record>, E>
where
    F: FnMut(&Record) -> Result<bool, E>,
{
    let mut kept = Vec::new();

    for record in records {
        let mut copy = Record::new();
        let mut survivors = None;

        for (field, value) in record {
            match value {
                Value::Array(items) if field == children_key => {
                    let nested = items.iter().filter_map(Value::as_object);
                    survivors = Some(filter_level(nested, children_key, predicate)?);
                }
                _ => {
                    copy.insert(field.clone(), value.clone());
                }
            }
        }

        let has_survivors = survivors.as_ref().is_some_and(|s| !s.is_empty());
        if let Some(survivors) = survivors {
            let survivors = survivors.into_iter().map(Value::Object).collect();
            copy.insert(children_key.to_string(), Value::Array(survivors));
        }

        if predicate(&copy)? || has_survivors {
            kept.push(copy);
        }
    }

    Ok(kept)
}

/// Call `f` on every record in pre-order
pub fn for_each<F>(tree: &[Record], config: &TreeConfig, mut f: F)
where
    F: FnMut(&Record),
{
    into_ok(try_for_each(tree, config, lift(&mut f)))
}

/// Fallible form of [`for_each`]; stops at the first error
pub fn try_for_each<F, E>(tree: &[Record], config: &TreeConfig, mut f: F) -> Result<(), E>
where
    F: FnMut(&Record) -> Result<(), E>,
{
    TreeWalker::pre_order(tree, &config.children).try_for_each(|record| f(record))
}

/// Call `f` on every record in pre-order, allowing it to edit the record
///
/// A record's children are read after `f` returns, so children added or
/// removed by `f` are walked accordingly.
pub fn for_each_mut<F>(tree: &mut [Record], config: &TreeConfig, mut f: F)
where
    F: FnMut(&mut Record),
{
    let mut stack: Vec<&mut Record> = tree.iter_mut().rev().collect();
    while let Some(record) = stack.pop() {
        f(&mut *record);
        stack.extend(children_mut(record, &config.children).rev());
    }
}

/// Options for [`tree_map`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeMapOptions {
    /// Name of the children field, `"children"` if omitted
    pub children: Option<String>,
}

impl TreeMapOptions {
    pub fn new(children: impl Into<String>) -> Self {
        Self {
            children: Some(children.into()),
        }
    }

    pub fn children_key(&self) -> &str {
        self.children.as_deref().unwrap_or(DEFAULT_CHILDREN)
    }
}

impl From<&TreeConfig> for TreeMapOptions {
    fn from(config: &TreeConfig) -> Self {
        Self::new(config.children.clone())
    }
}

/// Reshape every record of a tree while keeping its nesting
///
/// Each record is replaced by `conversion(record)`. Records with a non-empty
/// children array additionally get a children field holding their converted
/// children, overriding any such field the conversion produced. Elements of
/// that array that are not records are carried over unchanged. Leaves yield
/// the converted shape only. `conversion` runs once per record, on
/// a parent before its children.
pub fn tree_map<F>(tree: &[Record], options: &TreeMapOptions, mut conversion: F) -> Vec<Record>
where
    F: FnMut(&Record) -> Record,
{
    into_ok(try_tree_map(tree, options, lift(&mut conversion)))
}

/// Reshape a single record and its subtree, see [`tree_map`]
pub fn tree_map_each<F>(record: &Record, options: &TreeMapOptions, mut conversion: F) -> Record
where
    F: FnMut(&Record) -> Record,
{
    into_ok(map_record(record, options.children_key(), &mut lift(&mut conversion)))
}

/// Fallible form of [`tree_map`]
pub fn try_tree_map<F, E>(tree: &[Record], options: &TreeMapOptions, mut conversion: F) -> Result<Vec<Record>, E>
where
    F: FnMut(&Record) -> Result<Record, E>,
{
    let children_key = options.children_key();
    tree.iter()
        .map(|record| map_record(record, children_key, &mut conversion))
        .collect()
}

fn map_record<F, E>(record: &Record, children_key: &str, conversion: &mut F) -> Result<Record, E>
where
    F: FnMut(&Record) -> Result<Record, E>,
{
    let mut converted = conversion(record)?;

    match record.get(children_key) {
        Some(Value::Array(items)) if !items.is_empty() => {
            let mapped = items
                .iter()
                .map(|item| match item {
                    Value::Object(child) => map_record(child, children_key, conversion).map(Value::Object),
                    other => Ok(other.clone()),
                })
                .collect::<Result<Vec<_>, E>>()?;
            converted.insert(children_key.to_string(), Value::Array(mapped));
        }
        _ => {}
    }

    Ok(converted)
}
