//! Schema flattening.
//!
//! Turns a nested field tree into the ordered list of leaves a bulk-edit
//! surface can offer, each with its dotted path and composite label.
//! Traversal is depth-first, pre-order, in declaration order; tabs are
//! visited in declared order.


use crate::{
    LABEL_SEPARATOR,
    obs::sink::{self, EngineEvent},
    translate::Translate,
};
use bulkedit_schema::{
    node::{FieldNode, LeafField},
    path::join,
    types::Label,
};
use serde::Serialize;

///
/// FieldDescriptor
///
/// One selectable leaf. `source` is the leaf as declared; `path` is where
/// it lives in the document.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FieldDescriptor {
    pub label: String,
    pub path: String,
    pub source: LeafField,
}

///
/// FlattenReport
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FlattenReport {
    /// Leaves emitted.
    pub emitted: usize,
    /// Nodes dropped by the exclusion test (subtrees count once).
    pub excluded: usize,
    /// Group and tabs containers recursed into.
    pub containers: usize,
}

/// Flatten a field tree from the root.
#[must_use]
pub fn flatten<T>(fields: &[FieldNode], translate: &T) -> Vec<FieldDescriptor>
where
    T: Translate + ?Sized,
{
    flatten_with_report(fields, translate).0
}

/// Flatten a subtree whose ancestors already resolved to `path` and
/// `label_prefix`.
#[must_use]
pub fn flatten_from<T>(
    fields: &[FieldNode],
    translate: &T,
    path: &str,
    label_prefix: &str,
) -> Vec<FieldDescriptor>
where
    T: Translate + ?Sized,
{
    let mut out = Vec::new();
    let mut report = FlattenReport::default();
    reduce_fields(fields, translate, path, label_prefix, &mut out, &mut report);

    out
}

/// Flatten from the root, returning traversal counters alongside.
#[must_use]
pub fn flatten_with_report<T>(
    fields: &[FieldNode],
    translate: &T,
) -> (Vec<FieldDescriptor>, FlattenReport)
where
    T: Translate + ?Sized,
{
    let mut out = Vec::new();
    let mut report = FlattenReport::default();
    reduce_fields(fields, translate, "", "", &mut out, &mut report);

    sink::record(EngineEvent::Flatten {
        emitted: report.emitted as u64,
        excluded: report.excluded as u64,
    });
    tracing::debug!(
        emitted = report.emitted,
        excluded = report.excluded,
        containers = report.containers,
        "flattened field schema"
    );

    (out, report)
}

/// Join `prefix` and the node's translated label (or name) with `" > "`.
///
/// A node with neither label nor name contributes an empty part, so an
/// unlabelled tabs container under a prefix yields `"<prefix> > "`.
#[must_use]
pub fn compose_label<T>(prefix: &str, node: &FieldNode, translate: &T) -> String
where
    T: Translate + ?Sized,
{
    let part = node_label(node, translate);

    if prefix.is_empty() {
        part
    } else {
        let mut out = String::with_capacity(prefix.len() + LABEL_SEPARATOR.len() + part.len());
        out.push_str(prefix);
        out.push_str(LABEL_SEPARATOR);
        out.push_str(&part);
        out
    }
}

// empty text labels fall through to the name
fn node_label<T>(node: &FieldNode, translate: &T) -> String
where
    T: Translate + ?Sized,
{
    match node.label() {
        Some(Label::Text(text)) if text.is_empty() => {}
        Some(label) => return translate.translate_label(label),
        None => {}
    }

    node.name().map(|n| translate.translate(n)).unwrap_or_default()
}

fn reduce_fields<T>(
    fields: &[FieldNode],
    translate: &T,
    path: &str,
    label_prefix: &str,
    out: &mut Vec<FieldDescriptor>,
    report: &mut FlattenReport,
) where
    T: Translate + ?Sized,
{
    for node in fields {
        // flags only count on nodes that own persisted data
        if node.excluded_from_bulk_edit() {
            tracing::trace!(path, name = node.name(), "excluded from bulk edit");
            report.excluded += 1;
            continue;
        }

        match node {
            FieldNode::Group(group) => {
                report.containers += 1;
                reduce_fields(
                    &group.fields,
                    translate,
                    &join(path, group.name.as_deref()),
                    &compose_label(label_prefix, node, translate),
                    out,
                    report,
                );
            }

            FieldNode::Tabs(tabs) => {
                report.containers += 1;
                let prefix = compose_label(label_prefix, node, translate);

                for tab in &tabs.tabs {
                    // a named tab nests under the container's name, not its own
                    let tab_path = if tab.has_name() {
                        join(path, tabs.name.as_deref())
                    } else {
                        path.to_string()
                    };

                    reduce_fields(&tab.fields, translate, &tab_path, &prefix, out, report);
                }
            }

            // opaque composites land here too: they are never recursed
            FieldNode::Leaf(leaf) => {
                report.emitted += 1;
                out.push(FieldDescriptor {
                    label: compose_label(label_prefix, node, translate),
                    path: join(path, Some(&leaf.name)),
                    source: leaf.clone(),
                });
            }
        }
    }
}
