use crate::prelude::*;

///
/// TabsField
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabsField {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,

    pub tabs: Vec<Tab>,
}

impl TabsField {
    #[must_use]
    pub const fn new(tabs: Vec<Tab>) -> Self {
        Self {
            name: None,
            label: None,
            tabs,
        }
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<Label>) -> Self {
        self.label = Some(label.into());
        self
    }
}

///
/// Tab
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,

    pub fields: Vec<FieldNode>,
}

impl Tab {
    #[must_use]
    pub const fn unnamed(fields: Vec<FieldNode>) -> Self {
        Self {
            name: None,
            label: None,
            fields,
        }
    }

    #[must_use]
    pub fn named(name: impl Into<String>, fields: Vec<FieldNode>) -> Self {
        Self {
            name: Some(name.into()),
            label: None,
            fields,
        }
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<Label>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub const fn has_name(&self) -> bool {
        self.name.is_some()
    }
}
