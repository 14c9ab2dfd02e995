mod group;
mod leaf;
mod tabs;

pub use group::*;
pub use leaf::*;
pub use tabs::*;

use crate::prelude::*;

///
/// FieldNode
///
/// One node of a field schema tree. Only `Group` and `Tabs` are containers
/// in the traversal sense; opaque composites (array, blocks) are leaves that
/// happen to carry sub-fields.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "node", rename_all = "camelCase")]
pub enum FieldNode {
    Leaf(LeafField),
    Group(GroupField),
    Tabs(TabsField),
}

impl FieldNode {
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Leaf(leaf) => Some(&leaf.name),
            Self::Group(group) => group.name.as_deref(),
            Self::Tabs(tabs) => tabs.name.as_deref(),
        }
    }

    #[must_use]
    pub const fn label(&self) -> Option<&Label> {
        match self {
            Self::Leaf(leaf) => leaf.label.as_ref(),
            Self::Group(group) => group.label.as_ref(),
            Self::Tabs(tabs) => tabs.label.as_ref(),
        }
    }

    /// Whether this node owns a slot in the persisted document.
    #[must_use]
    pub const fn affects_data(&self) -> bool {
        match self {
            Self::Leaf(leaf) => leaf.affects_data(),
            Self::Group(group) => group.affects_data(),
            Self::Tabs(_) => false,
        }
    }

    #[must_use]
    pub const fn flags(&self) -> FieldFlags {
        match self {
            Self::Leaf(leaf) => leaf.flags,
            Self::Group(group) => group.flags,
            Self::Tabs(_) => FieldFlags::none(),
        }
    }

    /// Exclusion test for bulk editing. Flags only count on data-affecting nodes.
    #[must_use]
    pub const fn excluded_from_bulk_edit(&self) -> bool {
        self.affects_data() && self.flags().excludes_bulk_edit()
    }

    /// Short kind name used in diagnostics.
    #[must_use]
    pub fn kind_name(&self) -> String {
        match self {
            Self::Leaf(leaf) => leaf.field_type.to_string(),
            Self::Group(group) => group.kind.to_string(),
            Self::Tabs(_) => "tabs".to_string(),
        }
    }
}

impl From<LeafField> for FieldNode {
    fn from(leaf: LeafField) -> Self {
        Self::Leaf(leaf)
    }
}

impl From<GroupField> for FieldNode {
    fn from(group: GroupField) -> Self {
        Self::Group(group)
    }
}

impl From<TabsField> for FieldNode {
    fn from(tabs: TabsField) -> Self {
        Self::Tabs(tabs)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_only_exclude_data_affecting_nodes() {
        let hidden = FieldFlags {
            hidden: true,
            ..FieldFlags::none()
        };

        let data = FieldNode::from(LeafField::new("zip", FieldType::Text).flags(hidden));
        let ui = FieldNode::from(LeafField::new("banner", FieldType::Ui).flags(hidden));

        assert!(data.excluded_from_bulk_edit());
        assert!(!ui.excluded_from_bulk_edit());
    }

    #[test]
    fn unnamed_groups_do_not_affect_data() {
        let row = FieldNode::from(GroupField::row(vec![]).flags(FieldFlags {
            read_only: true,
            ..FieldFlags::none()
        }));
        let named = FieldNode::from(GroupField::group("address", vec![]));

        assert!(!row.affects_data());
        assert!(!row.excluded_from_bulk_edit());
        assert!(named.affects_data());
    }

    #[test]
    fn tabs_never_affect_data() {
        let tabs = FieldNode::from(TabsField::new(vec![Tab::named("meta", vec![])]));

        assert!(!tabs.affects_data());
        assert_eq!(tabs.kind_name(), "tabs");
        assert_eq!(tabs.name(), None);
    }
}
