use crate::prelude::*;
use derive_more::Display;
use std::collections::BTreeMap;

///
/// FieldType
///
/// Leaf field types. Container types (group, row, collapsible, tabs) are
/// modelled as their own node variants and never appear here.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[remain::sorted]
pub enum FieldType {
    #[display("array")]
    Array,
    #[display("blocks")]
    Blocks,
    #[display("checkbox")]
    Checkbox,
    #[display("code")]
    Code,
    #[display("date")]
    Date,
    #[display("email")]
    Email,
    #[display("json")]
    Json,
    #[display("number")]
    Number,
    #[display("point")]
    Point,
    #[display("radio")]
    Radio,
    #[display("relationship")]
    Relationship,
    #[display("richText")]
    RichText,
    #[display("select")]
    Select,
    #[display("text")]
    Text,
    #[display("textarea")]
    Textarea,
    #[display("ui")]
    Ui,
    #[display("upload")]
    Upload,
}

impl FieldType {
    /// Composite types that hold sub-fields but are edited as one unit.
    #[must_use]
    pub const fn is_opaque_composite(self) -> bool {
        matches!(self, Self::Array | Self::Blocks)
    }

    /// Presentational types never write to the document.
    #[must_use]
    pub const fn affects_data(self) -> bool {
        !matches!(self, Self::Ui)
    }

    /// Resolve a wire name (`"richText"`, `"textarea"`, ...).
    #[must_use]
    pub fn from_wire(name: &str) -> Option<Self> {
        let ty = match name {
            "array" => Self::Array,
            "blocks" => Self::Blocks,
            "checkbox" => Self::Checkbox,
            "code" => Self::Code,
            "date" => Self::Date,
            "email" => Self::Email,
            "json" => Self::Json,
            "number" => Self::Number,
            "point" => Self::Point,
            "radio" => Self::Radio,
            "relationship" => Self::Relationship,
            "richText" => Self::RichText,
            "select" => Self::Select,
            "text" => Self::Text,
            "textarea" => Self::Textarea,
            "ui" => Self::Ui,
            "upload" => Self::Upload,
            _ => return None,
        };

        Some(ty)
    }
}

///
/// GroupKind
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[remain::sorted]
pub enum GroupKind {
    #[display("collapsible")]
    Collapsible,
    #[default]
    #[display("group")]
    Group,
    #[display("row")]
    Row,
}

impl GroupKind {
    #[must_use]
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "collapsible" => Some(Self::Collapsible),
            "group" => Some(Self::Group),
            "row" => Some(Self::Row),
            _ => None,
        }
    }

    /// Only `group` nests its children under its own name.
    #[must_use]
    pub const fn requires_name(self) -> bool {
        matches!(self, Self::Group)
    }
}

///
/// Label
///
/// Either a plain string handed to the translator, or a per-locale table.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Label {
    Text(String),
    Localized(BTreeMap<String, String>),
}

impl Label {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    #[must_use]
    pub fn localized<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::Localized(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

///
/// FieldFlags
///
/// Flags consulted by the bulk-edit exclusion test. `hidden` and `unique`
/// live at the top level of a field config, the rest under `admin`.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldFlags {
    pub hidden: bool,
    pub admin_hidden: bool,
    pub read_only: bool,
    pub unique: bool,
    pub disable_bulk_edit: bool,
}

impl FieldFlags {
    #[must_use]
    pub const fn none() -> Self {
        Self {
            hidden: false,
            admin_hidden: false,
            read_only: false,
            unique: false,
            disable_bulk_edit: false,
        }
    }

    /// True when any flag rules the field out of bulk editing.
    #[must_use]
    pub const fn excludes_bulk_edit(&self) -> bool {
        self.disable_bulk_edit || self.unique || self.hidden || self.admin_hidden || self.read_only
    }

    /// True when the field is hidden from the admin either way.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden || self.admin_hidden
    }
}

///
/// TESTS
///
