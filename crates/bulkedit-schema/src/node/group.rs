use crate::prelude::*;

///
/// GroupField
///
/// `group` nests its children under its own name; `row` and `collapsible`
/// are layout-only and carry no name.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupField {
    #[serde(rename = "type")]
    pub kind: GroupKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,

    #[serde(default)]
    pub flags: FieldFlags,

    pub fields: Vec<FieldNode>,
}

impl GroupField {
    #[must_use]
    pub fn group(name: impl Into<String>, fields: Vec<FieldNode>) -> Self {
        Self {
            kind: GroupKind::Group,
            name: Some(name.into()),
            label: None,
            flags: FieldFlags::none(),
            fields,
        }
    }

    #[must_use]
    pub const fn row(fields: Vec<FieldNode>) -> Self {
        Self::unnamed(GroupKind::Row, fields)
    }

    #[must_use]
    pub const fn collapsible(fields: Vec<FieldNode>) -> Self {
        Self::unnamed(GroupKind::Collapsible, fields)
    }

    const fn unnamed(kind: GroupKind, fields: Vec<FieldNode>) -> Self {
        Self {
            kind,
            name: None,
            label: None,
            flags: FieldFlags::none(),
            fields,
        }
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<Label>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub const fn flags(mut self, flags: FieldFlags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub const fn affects_data(&self) -> bool {
        self.name.is_some()
    }
}
