use crate::prelude::*;

///
/// LeafField
///
/// A terminal field, or an opaque composite (`array`, `blocks`) whose
/// sub-fields travel with it but are never flattened.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeafField {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,

    #[serde(rename = "type")]
    pub field_type: FieldType,

    #[serde(default, skip_serializing_if = "is_default_flags")]
    pub flags: FieldFlags,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldNode>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<Block>,
}

impl LeafField {
    #[must_use]
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            label: None,
            field_type,
            flags: FieldFlags::none(),
            fields: Vec::new(),
            blocks: Vec::new(),
        }
    }

    #[must_use]
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Text)
    }

    /// Array composite carrying its row schema.
    #[must_use]
    pub fn array(name: impl Into<String>, fields: Vec<FieldNode>) -> Self {
        Self {
            fields,
            ..Self::new(name, FieldType::Array)
        }
    }

    /// Blocks composite carrying its block definitions.
    #[must_use]
    pub fn blocks(name: impl Into<String>, blocks: Vec<Block>) -> Self {
        Self {
            blocks,
            ..Self::new(name, FieldType::Blocks)
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
        self.field_type.affects_data()
    }

    #[must_use]
    pub const fn is_opaque_composite(&self) -> bool {
        self.field_type.is_opaque_composite()
    }
}

///
/// Block
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub slug: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,

    pub fields: Vec<FieldNode>,
}

impl Block {
    #[must_use]
    pub fn new(slug: impl Into<String>, fields: Vec<FieldNode>) -> Self {
        Self {
            slug: slug.into(),
            label: None,
            fields,
        }
    }
}

fn is_default_flags(flags: &FieldFlags) -> bool {
    *flags == FieldFlags::none()
}
