//! Root-to-node ancestor chains

use std::collections::{HashSet, VecDeque};

use log::trace;

use crate::config::TreeConfig;
use crate::record::{children, Record};
use crate::{into_ok, lift};

/// Depth-first search that keeps the chain of ancestors of the current record
///
/// The work list starts with the roots. A record seen for the first time is
/// pushed on the path and its children are queued ahead of everything else;
/// the record itself stays queued behind them. Meeting it again at the front
/// means its subtree is exhausted, so the path backtracks one level.
struct PathSearch<'a, 'k> {
    children_key: &'k str,
    pending: VecDeque<&'a Record>,
    path: Vec<&'a Record>,
    visited: HashSet<*const Record>,
}

impl<'a, 'k> PathSearch<'a, 'k> {
    fn new(roots: &'a [Record], children_key: &'k str) -> Self {
        Self {
            children_key,
            pending: roots.iter().collect(),
            path: Vec::new(),
            visited: HashSet::new(),
        }
    }

    /// Step onto the next unvisited record and return it
    ///
    /// On return the record is the last element of the path.
    fn enter_next(&mut self) -> Option<&'a Record> {
        while let Some(&front) = self.pending.front() {
            if !self.visited.insert(front as *const Record) {
                self.path.pop();
                self.pending.pop_front();
                continue;
            }

            for child in children(front, self.children_key).rev() {
                self.pending.push_front(child);
            }
            self.path.push(front);
            return Some(front);
        }
        None
    }
}

/// Find the first record matching `predicate` together with its ancestors
///
/// Returns the chain from a root down to the matching record, inclusive.
/// Records are tested in pre-order.
pub fn find_path<'a, F>(tree: &'a [Record], config: &TreeConfig, mut predicate: F) -> Option<Vec<&'a Record>>
where
    F: FnMut(&Record) -> bool,
{
    into_ok(try_find_path(tree, config, lift(&mut predicate)))
}

/// Find the ancestor chain of every record matching `predicate`
///
/// Chains are returned in pre-order of their matching records.
pub fn find_path_all<'a, F>(tree: &'a [Record], config: &TreeConfig, mut predicate: F) -> Vec<Vec<&'a Record>>
where
    F: FnMut(&Record) -> bool,
{
    into_ok(try_find_path_all(tree, config, lift(&mut predicate)))
}

/// Fallible form of [`find_path`]
pub fn try_find_path<'a, F, E>(
    tree: &'a [Record],
    config: &TreeConfig,
    mut predicate: F,
) -> Result<Option<Vec<&'a Record>>, E>
where
    F: FnMut(&Record) -> Result<bool, E>,
{
    let mut search = PathSearch::new(tree, &config.children);
    while let Some(record) = search.enter_next() {
        if predicate(record)? {
            trace!("find_path: match at depth {}", search.path.len());
            return Ok(Some(search.path));
        }
    }
    Ok(None)
}

/// Fallible form of [`find_path_all`]
pub fn try_find_path_all<'a, F, E>(
    tree: &'a [Record],
    config: &TreeConfig,
    mut predicate: F,
) -> Result<Vec<Vec<&'a Record>>, E>
where
    F: FnMut(&Record) -> Result<bool, E>,
{
    let mut search = PathSearch::new(tree, &config.children);
    let mut paths = Vec::new();
    while let Some(record) = search.enter_next() {
        if predicate(record)? {
            paths.push(search.path.clone());
        }
    }
    trace!("find_path_all: {} matches", paths.len());
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::records_from_value;
    use serde_json::json;

    fn sample() -> Vec<Record> {
        records_from_value(json!([
            {"id": 1, "children": [
                {"id": 2, "children": [
                    {"id": 4, "children": []},
                    {"id": 5}
                ]},
                {"id": 3, "children": []}
            ]},
            {"id": 6, "children": [{"id": 7}]}
        ]))
        .unwrap()
    }

    fn id(record: &Record) -> i64 {
        record["id"].as_i64().unwrap()
    }

    fn ids(path: &[&Record]) -> Vec<i64> {
        path.iter().map(|r| id(r)).collect()
    }

    #[test]
    fn test_find_path_backtracks() {
        let tree = sample();
        let config = TreeConfig::default();

        let path = find_path(&tree, &config, |r| id(r) == 3).unwrap();
        assert_eq!(ids(&path), vec![1, 3]);

        let path = find_path(&tree, &config, |r| id(r) == 5).unwrap();
        assert_eq!(ids(&path), vec![1, 2, 5]);

        let path = find_path(&tree, &config, |r| id(r) == 7).unwrap();
        assert_eq!(ids(&path), vec![6, 7]);
    }

    #[test]
    fn test_find_path_root_match() {
        let tree = sample();
        let config = TreeConfig::default();
        let path = find_path(&tree, &config, |r| id(r) == 6).unwrap();
        assert_eq!(ids(&path), vec![6]);
    }

    #[test]
    fn test_find_path_missing() {
        let tree = sample();
        let config = TreeConfig::default();
        assert!(find_path(&tree, &config, |r| id(r) == 42).is_none());
        assert!(find_path(&[], &config, |_| true).is_none());
    }

    #[test]
    fn test_find_path_visits_in_pre_order() {
        let tree = sample();
        let config = TreeConfig::default();
        let mut seen = Vec::new();
        find_path(&tree, &config, |r| {
            seen.push(id(r));
            false
        });
        assert_eq!(seen, vec![1, 2, 4, 5, 3, 6, 7]);
    }

    #[test]
    fn test_find_path_all() {
        let tree = sample();
        let config = TreeConfig::default();

        let paths = find_path_all(&tree, &config, |r| matches!(id(r), 4 | 3 | 7));
        let paths: Vec<_> = paths.iter().map(|p| ids(p)).collect();
        assert_eq!(paths, vec![vec![1, 2, 4], vec![1, 3], vec![6, 7]]);

        assert!(find_path_all(&tree, &config, |_| false).is_empty());
    }

    #[test]
    fn test_find_path_all_nested_matches() {
        let tree = sample();
        let config = TreeConfig::default();

        let paths = find_path_all(&tree, &config, |r| id(r) <= 2);
        let paths: Vec<_> = paths.iter().map(|p| ids(p)).collect();
        assert_eq!(paths, vec![vec![1], vec![1, 2]]);
    }

    #[test]
    fn test_path_borrows_source_records() {
        let tree = sample();
        let config = TreeConfig::default();
        let path = find_path(&tree, &config, |r| id(r) == 6).unwrap();
        assert!(std::ptr::eq(path[0], &tree[1]));
    }

    #[test]
    fn test_custom_children_key() {
        let tree = records_from_value(json!([
            {"id": 1, "items": [{"id": 2}], "children": [{"id": 3}]}
        ]))
        .unwrap();
        let config = TreeConfig::new().with_children("items");

        assert_eq!(ids(&find_path(&tree, &config, |r| id(r) == 2).unwrap()), vec![1, 2]);
        assert!(find_path(&tree, &config, |r| id(r) == 3).is_none());
    }

    #[test]
    fn test_try_find_path_propagates_error() {
        let tree = sample();
        let config = TreeConfig::default();

        let result = try_find_path(&tree, &config, |r| {
            if id(r) == 5 {
                Err(format!("cannot inspect {}", id(r)))
            } else {
                Ok(false)
            }
        });
        assert_eq!(result, Err("cannot inspect 5".to_string()));

        let result = try_find_path_all(&tree, &config, |r| {
            if id(r) == 3 {
                Err(())
            } else {
                Ok(true)
            }
        });
        assert!(result.is_err());
    }
}
