use crate::{
    column::{Column, ColumnStore},
    config::ColumnConfig,
};
use bulkedit_schema::{
    node::{FieldNode, Tab},
    types::Label,
};

impl ColumnStore {
    /// Initial column state for a schema.
    ///
    /// One column per top-level data field, looking through unnamed
    /// containers. Hidden fields get no column. When `default_columns` is
    /// set those columns lead in the given order and are the only active
    /// ones; otherwise the first `default_active_count` columns are active.
    /// A field named like the reserved accessor gets no column.
    #[must_use]
    pub fn from_fields(fields: &[FieldNode], config: &ColumnConfig) -> Self {
        let mut candidates = Vec::new();
        collect_top_level(fields, &mut candidates);
        candidates.retain(|column| {
            let clash = column.accessor == config.reserved_accessor;
            if clash {
                tracing::warn!(
                    accessor = %column.accessor,
                    "schema field shadows the reserved column, skipped"
                );
            }

            !clash
        });

        let mut columns = match &config.default_columns {
            Some(defaults) => order_by_defaults(candidates, defaults),
            None => candidates
                .into_iter()
                .enumerate()
                .map(|(i, mut column)| {
                    column.active = i < config.default_active_count;
                    column
                })
                .collect(),
        };

        if config.include_select {
            columns.insert(0, Column::reserved(config.reserved_accessor.clone()));
        }

        tracing::debug!(
            columns = columns.len(),
            include_select = config.include_select,
            "built initial column state"
        );

        Self::with_reserved(columns, config.reserved_accessor.clone())
    }
}

fn collect_top_level(fields: &[FieldNode], out: &mut Vec<Column>) {
    for node in fields {
        match node {
            FieldNode::Leaf(leaf) => {
                if leaf.affects_data() && !leaf.flags.is_hidden() {
                    out.push(column_for(&leaf.name, leaf.label.clone()));
                }
            }

            FieldNode::Group(group) => match &group.name {
                Some(name) if !group.flags.is_hidden() => {
                    out.push(column_for(name, group.label.clone()));
                }
                Some(_) => {}
                None => collect_top_level(&group.fields, out),
            },

            FieldNode::Tabs(tabs) => {
                for tab in &tabs.tabs {
                    collect_tab(tab, out);
                }
            }
        }
    }
}

// a named tab is a data field of its own
fn collect_tab(tab: &Tab, out: &mut Vec<Column>) {
    match &tab.name {
        Some(name) => out.push(column_for(name, tab.label.clone())),
        None => collect_top_level(&tab.fields, out),
    }
}

fn column_for(name: &str, label: Option<Label>) -> Column {
    Column {
        name: Some(name.to_string()),
        accessor: name.to_string(),
        label,
        active: false,
    }
}

fn order_by_defaults(mut candidates: Vec<Column>, defaults: &[String]) -> Vec<Column> {
    let mut columns = Vec::with_capacity(candidates.len());

    for accessor in defaults {
        match candidates.iter().position(|c| &c.accessor == accessor) {
            Some(i) => {
                let mut column = candidates.remove(i);
                column.active = true;
                columns.push(column);
            }
            None => tracing::warn!(%accessor, "default column not found in schema"),
        }
    }

    columns.extend(candidates);
    columns
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use bulkedit_schema::{
        node::{GroupField, LeafField, TabsField},
        types::{FieldFlags, FieldType},
    };

    fn schema() -> Vec<FieldNode> {
        vec![
            LeafField::text("title").label("Title").into(),
            LeafField::new("divider", FieldType::Ui).into(),
            GroupField::row(vec![
                LeafField::text("price").into(),
                LeafField::text("sku")
                    .flags(FieldFlags {
                        admin_hidden: true,
                        ..FieldFlags::none()
                    })
                    .into(),
            ])
            .into(),
            GroupField::group("address", vec![LeafField::text("city").into()]).into(),
            TabsField::new(vec![
                Tab::unnamed(vec![LeafField::text("body").into()]),
                Tab::named("seo", vec![LeafField::text("description").into()]),
            ])
            .into(),
        ]
    }

    fn accessors(store: &ColumnStore) -> Vec<&str> {
        store.columns().iter().map(|c| c.accessor.as_str()).collect()
    }

    #[test]
    fn top_level_data_fields_become_columns() {
        let store = ColumnStore::from_fields(&schema(), &ColumnConfig::default());

        assert_eq!(accessors(&store), ["title", "price", "address", "body", "seo"]);
        assert_eq!(store.active_accessors(), ["title", "price", "address", "body"]);
    }

    #[test]
    fn default_columns_lead_and_are_the_only_active_ones() {
        let config = ColumnConfig {
            default_columns: Some(vec!["seo".to_string(), "missing".to_string(), "title".to_string()]),
            ..ColumnConfig::default()
        };

        let store = ColumnStore::from_fields(&schema(), &config);

        assert_eq!(accessors(&store), ["seo", "title", "price", "address", "body"]);
        assert_eq!(store.active_accessors(), ["seo", "title"]);
    }

    #[test]
    fn select_column_is_prepended_when_configured() {
        let config = ColumnConfig {
            include_select: true,
            default_active_count: 1,
            ..ColumnConfig::default()
        };

        let store = ColumnStore::from_fields(&schema(), &config);

        assert_eq!(store.columns()[0].accessor, "_select");
        assert!(store.is_reserved(&store.columns()[0]));
        assert_eq!(store.active_accessors(), ["_select", "title"]);
        assert_eq!(store.interactive_columns().count(), 5);
    }

    #[test]
    fn field_named_like_reserved_accessor_is_skipped() {
        let fields: Vec<FieldNode> = vec![
            LeafField::text("_select").into(),
            LeafField::text("title").into(),
        ];
        let config = ColumnConfig {
            include_select: true,
            ..ColumnConfig::default()
        };

        let mut store = ColumnStore::from_fields(&fields, &config);

        assert_eq!(accessors(&store), ["_select", "title"]);
        assert!(store.toggle_column("title").is_ok());

        let without_select = ColumnStore::from_fields(&fields, &ColumnConfig::default());
        assert_eq!(accessors(&without_select), ["title"]);
    }

    #[test]
    fn empty_schema_has_no_columns() {
        assert!(ColumnStore::from_fields(&[], &ColumnConfig::default()).is_empty());
    }
}
