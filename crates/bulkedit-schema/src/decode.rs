//! Field-config JSON decoding.
//!
//! The wire shape is the usual CMS field config: a `type` discriminant, an
//! optional `name`/`label`, flags split between the top level and `admin`,
//! and `fields`/`tabs`/`blocks` for anything that nests.

use crate::{path::child_route, prelude::*};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// DecodeError
///

#[derive(Debug, ThisError)]
pub enum DecodeError {
    #[error("invalid field config json: {0}")]
    Json(#[from] serde_json::Error),

    #[error(
        "Field{} is either missing a field type or it does not match an available field type (at {route})",
        quoted(.name.as_deref())
    )]
    MissingFieldType { route: String, name: Option<String> },

    #[error("{field_type} field at {route} requires a name")]
    MissingName { route: String, field_type: String },

    #[error("invalid label at {route}: expected a string or a locale table")]
    InvalidLabel { route: String },
}

impl DecodeError {
    /// Route of the offending node, if the error is tied to one.
    #[must_use]
    pub fn route(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::MissingFieldType { route, .. }
            | Self::MissingName { route, .. }
            | Self::InvalidLabel { route } => Some(route),
        }
    }
}

fn quoted(name: Option<&str>) -> String {
    name.map_or_else(String::new, |n| format!(" \"{n}\""))
}

/// Decode a JSON array of field configs.
pub fn decode_fields(json: &str) -> Result<Vec<FieldNode>, DecodeError> {
    let raw: Vec<RawField> = serde_json::from_str(json)?;
    let fields = convert_fields(raw, "")?;

    tracing::debug!(fields = fields.len(), "decoded field config");

    Ok(fields)
}

/// Decode an already-parsed JSON array of field configs.
pub fn decode_value(value: JsonValue) -> Result<Vec<FieldNode>, DecodeError> {
    let raw: Vec<RawField> = serde_json::from_value(value)?;

    convert_fields(raw, "")
}

// ============================================================================
// Raw wire shape
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawField {
    #[serde(default, rename = "type")]
    field_type: Option<String>,

    #[serde(default)]
    name: Option<String>,

    #[serde(default)]
    label: Option<JsonValue>,

    #[serde(default)]
    hidden: bool,

    #[serde(default)]
    unique: bool,

    #[serde(default)]
    admin: RawAdmin,

    #[serde(default)]
    fields: Vec<RawField>,

    #[serde(default)]
    tabs: Vec<RawTab>,

    #[serde(default)]
    blocks: Vec<RawBlock>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAdmin {
    #[serde(default)]
    hidden: bool,

    #[serde(default)]
    read_only: bool,

    #[serde(default)]
    disable_bulk_edit: bool,
}

#[derive(Debug, Deserialize)]
struct RawTab {
    #[serde(default)]
    name: Option<String>,

    #[serde(default)]
    label: Option<JsonValue>,

    #[serde(default)]
    fields: Vec<RawField>,
}

#[derive(Debug, Deserialize)]
struct RawBlock {
    slug: String,

    #[serde(default)]
    labels: Option<RawBlockLabels>,

    #[serde(default)]
    fields: Vec<RawField>,
}

#[derive(Debug, Deserialize)]
struct RawBlockLabels {
    #[serde(default)]
    singular: Option<JsonValue>,
}

// ============================================================================
// Conversion
// ============================================================================

fn convert_fields(raw: Vec<RawField>, route: &str) -> Result<Vec<FieldNode>, DecodeError> {
    convert_children(raw, route, "")
}

fn convert_children(
    raw: Vec<RawField>,
    parent: &str,
    key: &str,
) -> Result<Vec<FieldNode>, DecodeError> {
    raw.into_iter()
        .enumerate()
        .map(|(i, field)| convert_field(field, &child_route(parent, key, i)))
        .collect()
}

fn convert_field(raw: RawField, route: &str) -> Result<FieldNode, DecodeError> {
    let Some(type_name) = raw.field_type.as_deref() else {
        return Err(DecodeError::MissingFieldType {
            route: route.to_string(),
            name: raw.name,
        });
    };

    let flags = FieldFlags {
        hidden: raw.hidden,
        admin_hidden: raw.admin.hidden,
        read_only: raw.admin.read_only,
        unique: raw.unique,
        disable_bulk_edit: raw.admin.disable_bulk_edit,
    };
    let label = convert_label(raw.label, route)?;

    if type_name == "tabs" {
        let tabs = raw
            .tabs
            .into_iter()
            .enumerate()
            .map(|(i, tab)| convert_tab(tab, &child_route(route, "tabs", i)))
            .collect::<Result<Vec<_>, _>>()?;

        return Ok(FieldNode::Tabs(TabsField {
            name: raw.name,
            label,
            tabs,
        }));
    }

    if let Some(kind) = GroupKind::from_wire(type_name) {
        if kind.requires_name() && raw.name.is_none() {
            return Err(DecodeError::MissingName {
                route: route.to_string(),
                field_type: kind.to_string(),
            });
        }

        // row and collapsible never contribute a path segment
        let name = if kind.requires_name() { raw.name } else { None };

        return Ok(FieldNode::Group(GroupField {
            kind,
            name,
            label,
            flags,
            fields: convert_children(raw.fields, route, "fields")?,
        }));
    }

    let Some(field_type) = FieldType::from_wire(type_name) else {
        return Err(DecodeError::MissingFieldType {
            route: route.to_string(),
            name: raw.name,
        });
    };

    let Some(name) = raw.name else {
        return Err(DecodeError::MissingName {
            route: route.to_string(),
            field_type: field_type.to_string(),
        });
    };

    let fields = convert_children(raw.fields, route, "fields")?;
    let blocks = raw
        .blocks
        .into_iter()
        .enumerate()
        .map(|(i, block)| convert_block(block, &child_route(route, "blocks", i)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FieldNode::Leaf(LeafField {
        name,
        label,
        field_type,
        flags,
        fields,
        blocks,
    }))
}

fn convert_tab(raw: RawTab, route: &str) -> Result<Tab, DecodeError> {
    Ok(Tab {
        name: raw.name,
        label: convert_label(raw.label, route)?,
        fields: convert_children(raw.fields, route, "fields")?,
    })
}

fn convert_block(raw: RawBlock, route: &str) -> Result<Block, DecodeError> {
    let label = match raw.labels {
        Some(labels) => convert_label(labels.singular, route)?,
        None => None,
    };

    Ok(Block {
        slug: raw.slug,
        label,
        fields: convert_children(raw.fields, route, "fields")?,
    })
}

// `false` is accepted as "no label"
fn convert_label(raw: Option<JsonValue>, route: &str) -> Result<Option<Label>, DecodeError> {
    match raw {
        None | Some(JsonValue::Null | JsonValue::Bool(false)) => Ok(None),
        Some(JsonValue::String(text)) => Ok(Some(Label::Text(text))),
        Some(JsonValue::Object(map)) => {
            let mut table = BTreeMap::new();
            for (locale, text) in map {
                let JsonValue::String(text) = text else {
                    return Err(DecodeError::InvalidLabel {
                        route: route.to_string(),
                    });
                };
                table.insert(locale, text);
            }

            Ok(Some(Label::Localized(table)))
        }
        Some(_) => Err(DecodeError::InvalidLabel {
            route: route.to_string(),
        }),
    }
}

///
/// TESTS
///
