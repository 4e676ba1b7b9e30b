//! Resolves breadcrumbs and permission lookups in a nested permission tree
//!
//! Usage:
//!   cargo run --example permission_paths [code]

use std::env;

use anyhow::{bail, Context, Result};
use tree_helper::prelude::*;
use tree_helper::try_find_path;

const PERMISSIONS: &str = r#"[
    {"code": "system", "label": "System", "items": [
        {"code": "system:user", "label": "Users", "items": [
            {"code": "system:user:create", "label": "Create user"},
            {"code": "system:user:delete", "label": "Delete user"}
        ]},
        {"code": "system:role", "label": "Roles", "items": [
            {"code": "system:role:assign", "label": "Assign role"}
        ]}
    ]},
    {"code": "report", "label": "Reports", "items": [
        {"code": "report:export", "label": "Export"}
    ]}
]"#;

fn main() -> Result<()> {
    env_logger::init();

    let code = env::args().nth(1).unwrap_or_else(|| "system:role:assign".to_string());

    let config = TreeConfig::new().with_id("code").with_children("items");
    let tree = records_from_str(PERMISSIONS).context("permission tree is not valid")?;

    let breadcrumb = find_path(&tree, &config, |r| r["code"] == code.as_str())
        .with_context(|| format!("no permission with code {}", code))?;
    let labels: Vec<_> = breadcrumb
        .iter()
        .filter_map(|r| r["label"].as_str())
        .collect();
    println!("{}: {}", code, labels.join(" / "));

    let deletes = find_path_all(&tree, &config, |r| {
        r["code"].as_str().is_some_and(|c| c.ends_with(":delete"))
    });
    println!("{} destructive permission(s)", deletes.len());

    // Malformed entries abort the lookup instead of being skipped
    let strict = try_find_path(&tree, &config, |r| match r["code"].as_str() {
        Some(c) => Ok(c == "report:export"),
        None => bail!("permission without code: {:?}", r),
    })?;
    println!("export reachable: {}", strict.is_some());

    Ok(())
}
