//! Iterative traversal over record trees

use std::collections::VecDeque;

use crate::record::{children, Record};

/// Traversal order for walking a tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Visit a node, then its whole subtree, then its next sibling
    PreOrder,
    /// Visit nodes in the order they leave a FIFO work queue seeded with the roots
    BreadthFirst,
}

/// Iterator walking every record of a tree exactly once
///
/// Uses an explicit work list instead of recursion, so arbitrarily deep
/// trees do not grow the call stack.
pub struct TreeWalker<'a, 'k> {
    children_key: &'k str,
    order: TraversalOrder,
    pending: VecDeque<&'a Record>,
}

impl<'a, 'k> TreeWalker<'a, 'k> {
    /// Create a new walker over `roots`, following children under `children_key`
    pub fn new(roots: &'a [Record], children_key: &'k str, order: TraversalOrder) -> Self {
        Self {
            children_key,
            order,
            pending: roots.iter().collect(),
        }
    }

    /// Walk in pre-order
    pub fn pre_order(roots: &'a [Record], children_key: &'k str) -> Self {
        Self::new(roots, children_key, TraversalOrder::PreOrder)
    }

    /// Walk breadth-first
    pub fn breadth_first(roots: &'a [Record], children_key: &'k str) -> Self {
        Self::new(roots, children_key, TraversalOrder::BreadthFirst)
    }

    pub fn order(&self) -> TraversalOrder {
        self.order
    }
}

impl<'a> Iterator for TreeWalker<'a, '_> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.pending.pop_front()?;

        match self.order {
            TraversalOrder::PreOrder => {
                // Children go ahead of everything queued, in their own order
                for child in children(current, self.children_key).rev() {
                    self.pending.push_front(child);
                }
            }
            TraversalOrder::BreadthFirst => {
                self.pending.extend(children(current, self.children_key));
            }
        }

        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::records_from_value;
    use serde_json::json;

    fn sample() -> Vec<Record> {
        records_from_value(json!([
            {"id": 1, "children": [
                {"id": 2, "children": [{"id": 4}]},
                {"id": 3}
            ]},
            {"id": 5, "children": [{"id": 6}]}
        ]))
        .unwrap()
    }

    fn ids<'a>(walker: impl Iterator<Item = &'a Record>) -> Vec<i64> {
        walker.map(|r| r["id"].as_i64().unwrap()).collect()
    }

    #[test]
    fn test_pre_order() {
        let tree = sample();
        assert_eq!(ids(TreeWalker::pre_order(&tree, "children")), vec![1, 2, 4, 3, 5, 6]);
    }

    #[test]
    fn test_breadth_first() {
        let tree = sample();
        let walker = TreeWalker::breadth_first(&tree, "children");
        assert_eq!(walker.order(), TraversalOrder::BreadthFirst);
        assert_eq!(ids(walker), vec![1, 5, 2, 3, 6, 4]);
    }

    #[test]
    fn test_other_children_key_is_invisible() {
        let tree = sample();
        assert_eq!(ids(TreeWalker::pre_order(&tree, "items")), vec![1, 5]);
    }

    #[test]
    fn test_empty_tree() {
        let tree: Vec<Record> = Vec::new();
        assert_eq!(TreeWalker::pre_order(&tree, "children").count(), 0);
    }
}
