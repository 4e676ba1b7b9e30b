//! Builds a navigation menu from a flat backend response and prints it
//!
//! Usage:
//!   RUST_LOG=debug cargo run --example menu_tree

use anyhow::Result;
use log::info;
use serde_json::Value;
use tree_helper::prelude::*;

const RESPONSE: &str = r#"[
    {"id": 10, "pid": 0, "name": "Dashboard", "path": "/dashboard"},
    {"id": 20, "pid": 0, "name": "System", "path": "/system"},
    {"id": 21, "pid": 20, "name": "Users", "path": "/system/users"},
    {"id": 22, "pid": 20, "name": "Roles", "path": "/system/roles", "hidden": true},
    {"id": 23, "pid": 22, "name": "Grants", "path": "/system/roles/grants"},
    {"id": 30, "pid": 0, "name": "About", "path": "/about", "hidden": true}
]"#;

fn main() -> Result<()> {
    env_logger::init();

    let config = TreeConfig::default();
    let list = records_from_str(RESPONSE)?;
    info!("loaded {} menu records", list.len());

    let tree = list_to_tree(list, &config);

    println!("Full menu:");
    print_tree(&tree, &config);

    // Hidden entries disappear unless something below them is visible
    let visible = filter(&tree, &config, |r| r.get("hidden") != Some(&Value::Bool(true)));
    println!();
    println!("Visible menu:");
    print_tree(&visible, &config);

    let routes = tree_map(&visible, &TreeMapOptions::from(&config), |r| {
        let mut route = Record::new();
        route.insert("path".into(), r["path"].clone());
        route.insert("meta".into(), serde_json::json!({ "title": r["name"] }));
        route
    });
    println!();
    println!("Routes:");
    println!("{}", serde_json::to_string_pretty(&records_to_value(routes))?);

    Ok(())
}

fn print_tree(tree: &[Record], config: &TreeConfig) {
    for record in tree_to_list(tree, config) {
        let depth = find_path(tree, config, |r| std::ptr::eq(r, record))
            .map(|path| path.len() - 1)
            .unwrap_or(0);
        let name = record["name"].as_str().unwrap_or("?");
        println!("{}{}", "  ".repeat(depth), name);
    }
}
