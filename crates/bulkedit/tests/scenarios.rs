//! End-to-end bulk-edit flows through the public surface.

use bulkedit::{
    core::{
        column::ColumnStore,
        flatten::flatten,
        form::{FormState, FormStateStore},
        selection::{FieldSelect, FieldSelectionController, RepairPolicy},
    },
    error::{Error, ErrorKind, ErrorOrigin},
    prelude::*,
    schema::load_fields,
};

const POSTS: &str = r#"[
    {"type": "text", "name": "title", "label": "Title"},
    {"type": "text", "name": "slug", "unique": true},
    {"type": "ui", "name": "preview", "admin": {"hidden": true}},
    {
        "type": "group",
        "name": "address",
        "fields": [
            {"type": "text", "name": "city"},
            {"type": "text", "name": "zip", "hidden": true}
        ]
    },
    {
        "type": "row",
        "fields": [
            {"type": "number", "name": "price"},
            {"type": "date", "name": "published", "admin": {"readOnly": true}}
        ]
    },
    {
        "type": "tabs",
        "tabs": [
            {"label": "Content", "fields": [{"type": "richText", "name": "body"}]},
            {"name": "meta", "fields": [{"type": "textarea", "name": "description"}]}
        ]
    },
    {
        "type": "array",
        "name": "links",
        "fields": [{"type": "text", "name": "url"}]
    }
]"#;

fn paths(descriptors: &[FieldDescriptor]) -> Vec<&str> {
    descriptors.iter().map(|d| d.path.as_str()).collect()
}

#[test]
fn nested_hidden_field_is_excluded() {
    let fields = vec![
        LeafField::text("title").into(),
        GroupField::group(
            "address",
            vec![
                LeafField::text("city").into(),
                LeafField::text("zip")
                    .flags(FieldFlags {
                        hidden: true,
                        ..FieldFlags::none()
                    })
                    .into(),
            ],
        )
        .into(),
    ];

    let out = flatten(&fields, &Identity);

    assert_eq!(paths(&out), ["title", "address.city"]);
}

#[test]
fn decoded_schema_flattens_end_to_end() {
    let fields = load_fields(POSTS).unwrap();

    let out = flatten(&fields, &Identity);

    assert_eq!(
        paths(&out),
        ["title", "preview", "address.city", "price", "body", "description", "links"]
    );
    let labels: Vec<_> = out.iter().map(|d| d.label.as_str()).collect();
    assert_eq!(labels[0], "Title");
    assert_eq!(labels[2], "address > city");
    assert_eq!(labels[4], "body", "an unlabelled root tabs container adds no prefix");
}

#[test]
fn move_then_toggle_columns() {
    let mut store = ColumnStore::new(vec![
        Column::new("a", true),
        Column::new("b", false),
        Column::new("c", true),
    ]);

    store.move_column(0, 2).unwrap();
    let order: Vec<_> = store.columns().iter().map(|c| c.accessor.as_str()).collect();
    assert_eq!(order, ["b", "c", "a"]);

    store.toggle_column("b").unwrap();
    assert!(store.get("b").unwrap().active);
    store.toggle_column("b").unwrap();
    assert!(!store.get("b").unwrap().active);
}

#[test]
fn shrinking_selection_repairs_form_state() {
    let fields = load_fields(POSTS).unwrap();
    let descriptors = flatten(&fields, &Identity);
    let title = descriptors
        .iter()
        .find(|d| d.path == "title")
        .cloned()
        .unwrap();

    let mut form = FormState::new();
    form.set("title", "Hello");
    form.set("address.city", "Oslo");
    form.set("address.zip", "0150");

    let mut controller = FieldSelectionController::new();
    let change = controller.on_selection_change(Some(vec![title]), &mut form);

    assert_eq!(change.removed, ["address.city", "address.zip"]);
    assert_eq!(form.keys(), ["title"]);
}

#[test]
fn field_select_driven_by_config_policy() {
    let config =
        BulkEditConfig::from_json_str(r#"{"locale":"en","repairPolicy":"setDifference"}"#).unwrap();
    let fields = load_fields(POSTS).unwrap();
    let catalog = Catalog::from_config(&config).message("Title", "Post title");

    let mut select = FieldSelect::new(&fields, &catalog, config.repair_policy);
    assert_eq!(select.options()[0].label, "Post title");

    let mut form = FormState::new();
    select.on_change(Some(&[0, 2]), &mut form).unwrap();
    form.set("title", "x");
    form.set("address.city", "y");

    // same-size swap still prunes under set difference
    let change = select.on_change(Some(&[0, 3]), &mut form).unwrap();

    assert_eq!(select.controller().policy(), RepairPolicy::SetDifference);
    assert_eq!(change.removed, ["address.city"]);
}

#[test]
fn columns_and_selector_from_schema() {
    let config = BulkEditConfig::from_json_str(
        r#"{"columns":{"includeSelect":true,"defaultColumns":["title","price"]}}"#,
    )
    .unwrap();
    let fields = load_fields(POSTS).unwrap();
    let mut store = ColumnStore::from_fields(&fields, &config.columns);

    let ids = SequentialIds::default();
    let selector = ColumnSelector::new("posts", 0, &ids);

    assert_eq!(store.columns()[0].accessor, "_select");
    assert_eq!(
        selector.ids(&store),
        ["title", "price", "slug", "address", "published", "body", "meta", "links"]
    );

    selector
        .on_drag_end(&mut store, DragEnd { from: 1, to: 0 })
        .unwrap();
    assert_eq!(selector.ids(&store)[..2], ["price", "title"]);
    assert_eq!(store.columns()[0].accessor, "_select");

    let chips = selector.chips(&store, &Identity);
    assert_eq!(chips[0].key.to_string(), "posts-price:r0:");
    assert!(chips[0].active);
}

#[test]
fn column_failures_surface_as_public_errors() {
    let mut store = ColumnStore::new(vec![Column::new("a", true)]);

    let err: Error = store.move_column(0, 4).unwrap_err().into();

    assert_eq!(err.kind, ErrorKind::InvalidInput);
    assert_eq!(err.origin, ErrorOrigin::Column);
}

#[test]
fn bad_option_index_surfaces_as_public_error() {
    let fields = load_fields(POSTS).unwrap();
    let mut select = FieldSelect::new(&fields, &Identity, RepairPolicy::default());
    let mut form = FormState::new();
    form.set("title", "x");

    let err: Error = select.on_change(Some(&[99]), &mut form).unwrap_err().into();

    assert_eq!(err.kind, ErrorKind::InvalidInput);
    assert_eq!(err.origin, ErrorOrigin::Selection);
    assert_eq!(form.keys(), ["title"]);
}

#[test]
fn missing_field_type_is_reported_with_name() {
    let err = load_fields(r#"[{"name":"title"}]"#).unwrap_err();

    assert!(
        err.to_string()
            .starts_with(r#"Field "title" is either missing a field type"#),
        "{err}"
    );
}
