//! Conversion between flat parent-linked lists and nested trees

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use log::debug;
use serde_json::Value;

use crate::config::TreeConfig;
use crate::key::NodeKey;
use crate::record::Record;
use crate::walk::TreeWalker;

/// Build a tree from a flat list linked by parent identifiers
///
/// Takes ownership of the records and nests them under their parents'
/// children fields. Every record gets a children array: an existing array
/// is kept and appended to, anything else is replaced by an empty one.
/// A record whose parent identifier is absent or matches no record becomes
/// a root. Siblings keep their input order.
///
/// Identifiers are expected to be unique. If two records share one, the
/// later record is the one children attach to. Cyclic parent links are
/// not supported: records on a cycle are not reachable from any root and
/// are left out of the result.
pub fn list_to_tree(list: Vec<Record>, config: &TreeConfig) -> Vec<Record> {
    let total = list.len();
    let mut slots: Vec<Option<Record>> = Vec::with_capacity(total);
    let mut positions: HashMap<NodeKey, usize> = HashMap::with_capacity(total);

    for (position, mut record) in list.into_iter().enumerate() {
        if !matches!(record.get(&config.children), Some(Value::Array(_))) {
            record.insert(config.children.clone(), Value::Array(Vec::new()));
        }

        if let Some(key) = NodeKey::of(&record, &config.id) {
            match positions.entry(key) {
                Entry::Occupied(mut entry) => {
                    debug!(
                        "duplicate id {} at position {} replaces position {}",
                        entry.key(),
                        position,
                        entry.get()
                    );
                    entry.insert(position);
                }
                Entry::Vacant(entry) => {
                    entry.insert(position);
                }
            }
        }

        slots.push(Some(record));
    }

    // Second pass in input order decides where each record goes
    let mut attached: Vec<Vec<usize>> = vec![Vec::new(); total];
    let mut roots = Vec::new();
    for (position, record) in slots.iter().enumerate() {
        let parent = record
            .as_ref()
            .and_then(|record| NodeKey::of(record, &config.pid))
            .and_then(|key| positions.get(&key).copied());

        match parent {
            Some(parent) => attached[parent].push(position),
            None => roots.push(position),
        }
    }

    // Pre-order over positions reachable from the roots
    let mut reachable = Vec::with_capacity(total);
    let mut stack: Vec<usize> = roots.iter().rev().copied().collect();
    while let Some(position) = stack.pop() {
        reachable.push(position);
        stack.extend(attached[position].iter().rev());
    }

    if reachable.len() < total {
        debug!(
            "{} of {} records sit on a parent cycle and were dropped",
            total - reachable.len(),
            total
        );
    }

    // Reverse pre-order finishes every subtree before its parent
    for &position in reachable.iter().rev() {
        let children: Vec<Value> = attached[position]
            .iter()
            .filter_map(|&child| slots[child].take())
            .map(Value::Object)
            .collect();

        if let Some(Some(record)) = slots.get_mut(position) {
            if let Some(Value::Array(existing)) = record.get_mut(&config.children) {
                existing.extend(children);
            }
        }
    }

    debug!("list_to_tree: {} records, {} roots", total, roots.len());

    roots
        .into_iter()
        .filter_map(|position| slots[position].take())
        .collect()
}

/// Flatten a tree into its nodes in pre-order
///
/// The returned records are borrowed from `tree`; nothing is cloned.
pub fn tree_to_list<'a>(tree: &'a [Record], config: &TreeConfig) -> Vec<&'a Record> {
    TreeWalker::pre_order(tree, &config.children).collect()
}
