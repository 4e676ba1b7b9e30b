//! Finding records anywhere in a tree

use log::trace;

use crate::config::TreeConfig;
use crate::record::Record;
use crate::walk::TreeWalker;
use crate::{into_ok, lift};

/// Find the first record matching `predicate`
///
/// Records are visited breadth-first: roots first, then every child in the
/// order it was queued behind its parent.
pub fn find_node<'a, F>(tree: &'a [Record], config: &TreeConfig, mut predicate: F) -> Option<&'a Record>
where
    F: FnMut(&Record) -> bool,
{
    into_ok(try_find_node(tree, config, lift(&mut predicate)))
}

/// Find every record matching `predicate`, in breadth-first order
pub fn find_node_all<'a, F>(tree: &'a [Record], config: &TreeConfig, mut predicate: F) -> Vec<&'a Record>
where
    F: FnMut(&Record) -> bool,
{
    into_ok(try_find_node_all(tree, config, lift(&mut predicate)))
}

/// Fallible form of [`find_node`]
///
/// The first error returned by `predicate` stops the search and is passed
/// back unchanged.
pub fn try_find_node<'a, F, E>(
    tree: &'a [Record],
    config: &TreeConfig,
    mut predicate: F,
) -> Result<Option<&'a Record>, E>
where
    F: FnMut(&Record) -> Result<bool, E>,
{
    for record in TreeWalker::breadth_first(tree, &config.children) {
        if predicate(record)? {
            return Ok(Some(record));
        }
    }
    Ok(None)
}

/// Fallible form of [`find_node_all`]
pub fn try_find_node_all<'a, F, E>(
    tree: &'a [Record],
    config: &TreeConfig,
    mut predicate: F,
) -> Result<Vec<&'a Record>, E>
where
    F: FnMut(&Record) -> Result<bool, E>,
{
    let mut found = Vec::new();
    for record in TreeWalker::breadth_first(tree, &config.children) {
        if predicate(record)? {
            found.push(record);
        }
    }
    trace!("find_node_all: {} matches", found.len());
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::records_from_value;
    use serde_json::json;

    fn sample() -> Vec<Record> {
        records_from_value(json!([
            {"id": 1, "tag": "a", "children": [
                {"id": 2, "tag": "b", "children": [{"id": 4, "tag": "a"}]},
                {"id": 3, "tag": "a"}
            ]}
        ]))
        .unwrap()
    }

    fn id(record: &Record) -> i64 {
        record["id"].as_i64().unwrap()
    }

    #[test]
    fn test_find_node_breadth_first() {
        let tree = sample();
        let config = TreeConfig::default();

        // 3 is a shallower match than 4 even though 4 comes first in pre-order
        let found = find_node(&tree, &config, |r| r["tag"] == "a" && id(r) != 1);
        assert_eq!(found.map(id), Some(3));
    }

    #[test]
    fn test_find_node_missing() {
        let tree = sample();
        let config = TreeConfig::default();
        assert!(find_node(&tree, &config, |r| id(r) == 99).is_none());
    }

    #[test]
    fn test_find_node_all() {
        let tree = sample();
        let config = TreeConfig::default();
        let found: Vec<_> = find_node_all(&tree, &config, |r| r["tag"] == "a")
            .into_iter()
            .map(id)
            .collect();
        assert_eq!(found, vec![1, 3, 4]);

        assert!(find_node_all(&tree, &config, |_| false).is_empty());
    }

    #[test]
    fn test_find_node_stops_at_first_match() {
        let tree = sample();
        let config = TreeConfig::default();
        let mut calls = 0;
        find_node(&tree, &config, |r| {
            calls += 1;
            id(r) == 2
        });
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_try_find_node_propagates_error() {
        let tree = sample();
        let config = TreeConfig::default();

        let result = try_find_node(&tree, &config, |r| {
            if id(r) == 2 {
                Err("bad record")
            } else {
                Ok(id(r) == 4)
            }
        });
        assert_eq!(result, Err("bad record"));

        let result: Result<_, ()> = try_find_node_all(&tree, &config, |r| Ok(id(r) > 2));
        assert_eq!(result.unwrap().len(), 2);
    }
}
