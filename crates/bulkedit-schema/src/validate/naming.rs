use crate::{path::child_route, prelude::*, validate::SchemaErrors};

/// Ensure a field name is non-empty and free of path separators.
pub(crate) fn validate_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("name is empty".to_string());
    }
    if name.contains(crate::path::PATH_SEPARATOR) {
        return Err(format!("name '{name}' must not contain '.'"));
    }

    Ok(())
}

/// Check names on every node, opaque composite sub-fields included.
pub fn validate_names(fields: &[FieldNode], errs: &mut SchemaErrors) {
    walk(fields, "", "", errs);
}

fn check(kind: &str, name: Option<&str>, route: &str, errs: &mut SchemaErrors) {
    if let Some(name) = name
        && let Err(msg) = validate_name(name)
    {
        errs.add(route, format!("{kind}: {msg}"));
    }
}

fn walk(fields: &[FieldNode], parent: &str, key: &str, errs: &mut SchemaErrors) {
    for (i, node) in fields.iter().enumerate() {
        let route = child_route(parent, key, i);
        check(&node.kind_name(), node.name(), &route, errs);

        match node {
            FieldNode::Leaf(leaf) => {
                walk(&leaf.fields, &route, "fields", errs);
                for (b, block) in leaf.blocks.iter().enumerate() {
                    let block_route = child_route(&route, "blocks", b);
                    check("block", Some(&block.slug), &block_route, errs);
                    walk(&block.fields, &block_route, "fields", errs);
                }
            }
            FieldNode::Group(group) => walk(&group.fields, &route, "fields", errs),
            FieldNode::Tabs(tabs) => {
                if tabs.tabs.is_empty() {
                    errs.add(route.as_str(), "tabs field declares no tabs");
                }
                for (t, tab) in tabs.tabs.iter().enumerate() {
                    let tab_route = child_route(&route, "tabs", t);
                    check("tab", tab.name.as_deref(), &tab_route, errs);
                    walk(&tab.fields, &tab_route, "fields", errs);
                }
            }
        }
    }
}
