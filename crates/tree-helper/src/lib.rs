//! Tree Helper Library
//!
//! Converts between flat, parent-linked lists of records and nested trees,
//! and searches, prunes and reshapes such trees. Records are dynamically
//! shaped JSON objects; the three fields that link them (identifier,
//! children, parent identifier) are named through [`TreeConfig`].
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use tree_helper::prelude::*;
//!
//! let list = records_from_value(json!([
//!     {"id": 1, "pid": 0, "name": "system"},
//!     {"id": 2, "pid": 1, "name": "users"},
//!     {"id": 3, "pid": 1, "name": "roles"},
//! ]))
//! .unwrap();
//!
//! let config = TreeConfig::default();
//! let tree = list_to_tree(list, &config);
//! assert_eq!(tree.len(), 1);
//!
//! let path = find_path(&tree, &config, |r| r["name"] == "roles").unwrap();
//! let names: Vec<_> = path.iter().map(|r| r["name"].as_str().unwrap()).collect();
//! assert_eq!(names, ["system", "roles"]);
//! ```

use std::convert::Infallible;

pub mod config;
pub mod convert;
pub mod error;
pub mod key;
pub mod path;
pub mod record;
pub mod search;
pub mod transform;
pub mod walk;

pub use config::{PartialTreeConfig, TreeConfig};
pub use convert::{list_to_tree, tree_to_list};
pub use error::TreeError;
pub use key::NodeKey;
pub use path::{find_path, find_path_all, try_find_path, try_find_path_all};
pub use record::{records_from_str, records_from_value, records_to_value, Record};
pub use search::{find_node, find_node_all, try_find_node, try_find_node_all};
pub use transform::{
    filter, for_each, for_each_mut, tree_map, tree_map_each, try_filter, try_for_each,
    try_tree_map, TreeMapOptions,
};
pub use walk::{TraversalOrder, TreeWalker};

/// Re-export commonly used types and operations
pub mod prelude {
    pub use crate::{
        filter, find_node, find_node_all, find_path, find_path_all, for_each, for_each_mut,
        list_to_tree, records_from_str, records_from_value, records_to_value, tree_map,
        tree_map_each, tree_to_list, PartialTreeConfig, Record, TreeConfig, TreeError,
        TreeMapOptions,
    };
}

// The infallible operations run their `try_` counterparts with this error type
fn into_ok<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

fn lift<'f, F, T>(f: &'f mut F) -> impl FnMut(&Record) -> Result<T, Infallible> + 'f
where
    F: FnMut(&Record) -> T,
{
    move |record| Ok(f(record))
}
