use crate::{
    path::{child_route, join},
    prelude::*,
    validate::SchemaErrors,
};
use std::collections::BTreeMap;

/// Reject data-affecting nodes that would resolve to the same dotted path.
///
/// Paths are resolved with the same rules the flattener uses, so unnamed
/// rows, collapsibles and tabs fold their children into the parent scope.
/// Each opaque composite opens a fresh scope for its own sub-fields.
pub fn validate_unique_paths(fields: &[FieldNode], errs: &mut SchemaErrors) {
    let mut seen = BTreeMap::new();
    walk(fields, "", "", "", &mut seen, errs);
}

fn walk(
    fields: &[FieldNode],
    parent: &str,
    key: &str,
    path: &str,
    seen: &mut BTreeMap<String, String>,
    errs: &mut SchemaErrors,
) {
    for (i, node) in fields.iter().enumerate() {
        let route = child_route(parent, key, i);

        if node.affects_data() {
            let node_path = join(path, node.name());
            if let Some(prev) = seen.insert(node_path.clone(), route.clone()) {
                errs.add(
                    route.as_str(),
                    format!("duplicate field path '{node_path}' (first declared at {prev})"),
                );
            }
        }

        match node {
            FieldNode::Leaf(leaf) => {
                walk(&leaf.fields, &route, "fields", "", &mut BTreeMap::new(), errs);
                for (b, block) in leaf.blocks.iter().enumerate() {
                    let block_route = child_route(&route, "blocks", b);
                    walk(&block.fields, &block_route, "fields", "", &mut BTreeMap::new(), errs);
                }
            }
            FieldNode::Group(group) => {
                let group_path = join(path, group.name.as_deref());
                walk(&group.fields, &route, "fields", &group_path, seen, errs);
            }
            FieldNode::Tabs(tabs) => {
                for (t, tab) in tabs.tabs.iter().enumerate() {
                    let tab_path = if tab.has_name() {
                        join(path, tabs.name.as_deref())
                    } else {
                        path.to_string()
                    };
                    let tab_route = child_route(&route, "tabs", t);
                    walk(&tab.fields, &tab_route, "fields", &tab_path, seen, errs);
                }
            }
        }
    }
}
