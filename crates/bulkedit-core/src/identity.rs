//! Presenter identity.
//!
//! A diffing presenter reconciles elements by key. The same logical column
//! can be visible several times at once (nested editors), so its key is a
//! function of owner, column, nesting depth and the rendering instance.

use derive_more::{Deref, Display, From};
use serde::Serialize;
use std::{
    cell::{Cell, RefCell},
    fmt,
};
use ulid::{Generator, Ulid};

///
/// InstanceId
///
/// Opaque per-render-instance token.
///

#[derive(Clone, Debug, Deref, Display, Eq, From, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct InstanceId(String);

impl InstanceId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

///
/// InstanceIdSource
///

pub trait InstanceIdSource {
    fn next_id(&self) -> InstanceId;
}

///
/// SequentialIds
/// Deterministic source for tests and snapshot rendering.
///

#[derive(Debug, Default)]
pub struct SequentialIds {
    next: Cell<u64>,
}

impl SequentialIds {
    #[must_use]
    pub const fn starting_at(first: u64) -> Self {
        Self {
            next: Cell::new(first),
        }
    }
}

impl InstanceIdSource for SequentialIds {
    fn next_id(&self) -> InstanceId {
        let n = self.next.get();
        self.next.set(n.wrapping_add(1));

        InstanceId(format!(":r{n}:"))
    }
}

///
/// UlidIds
///
/// Monotonic ULIDs; ids minted within the same millisecond still sort in
/// creation order.
///

pub struct UlidIds {
    generator: RefCell<Generator>,
}

impl UlidIds {
    #[must_use]
    pub fn new() -> Self {
        Self {
            generator: RefCell::new(Generator::new()),
        }
    }
}

impl Default for UlidIds {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for UlidIds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UlidIds").finish_non_exhaustive()
    }
}

impl InstanceIdSource for UlidIds {
    fn next_id(&self) -> InstanceId {
        let ulid = self.generator.borrow_mut().generate().unwrap_or_else(|err| {
            // monotonic overflow within one millisecond
            tracing::warn!(error = %err, "ulid generator overflow, minting a fresh ulid");
            Ulid::new()
        });

        InstanceId(ulid.to_string())
    }
}

///
/// ColumnRef
///
/// Column part of a presenter key: the column name, or its index when the
/// column is unnamed. Indices render as `#{index}` so an unnamed column
/// never shares a key with a column literally named after a number.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColumnRef {
    Name(String),
    Index(usize),
}

impl ColumnRef {
    #[must_use]
    pub fn new(name: Option<&str>, index: usize) -> Self {
        match name {
            Some(name) if !name.is_empty() => Self::Name(name.to_string()),
            _ => Self::Index(index),
        }
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Index(index) => write!(f, "#{index}"),
        }
    }
}

///
/// PresenterKey
///
/// Rendered as `{owner}-{column}{instance}`, with `-{depth}-` inserted
/// before the instance when `depth > 0`.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct PresenterKey {
    pub owner: String,
    pub column: ColumnRef,
    pub depth: usize,
    pub instance: InstanceId,
}

impl PresenterKey {
    #[must_use]
    pub fn new(
        owner: impl Into<String>,
        column: ColumnRef,
        depth: usize,
        instance: InstanceId,
    ) -> Self {
        Self {
            owner: owner.into(),
            column,
            depth,
            instance,
        }
    }
}

impl fmt::Display for PresenterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.owner, self.column)?;
        if self.depth > 0 {
            write!(f, "-{}-", self.depth)?;
        }

        write!(f, "{}", self.instance)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn key_renders_depth_only_when_nested() {
        let instance = InstanceId::new(":r0:");

        let top = PresenterKey::new("posts", ColumnRef::new(Some("title"), 0), 0, instance.clone());
        let nested = PresenterKey::new("posts", ColumnRef::new(Some("title"), 0), 2, instance);

        assert_eq!(top.to_string(), "posts-title:r0:");
        assert_eq!(nested.to_string(), "posts-title-2-:r0:");
    }

    #[test]
    fn unnamed_column_falls_back_to_index() {
        assert_eq!(ColumnRef::new(None, 3), ColumnRef::Index(3));
        assert_eq!(ColumnRef::new(Some(""), 1).to_string(), "#1");
    }

    #[test]
    fn numeric_name_and_index_render_distinct_keys() {
        let instance = InstanceId::new(":r0:");
        let named = PresenterKey::new("posts", ColumnRef::new(Some("1"), 2), 0, instance.clone());
        let unnamed = PresenterKey::new("posts", ColumnRef::new(None, 1), 0, instance);

        assert_eq!(named.to_string(), "posts-1:r0:");
        assert_eq!(unnamed.to_string(), "posts-#1:r0:");
    }

    #[test]
    fn sequential_ids_are_distinct_and_ordered() {
        let ids = SequentialIds::starting_at(5);

        assert_eq!(ids.next_id().as_str(), ":r5:");
        assert_eq!(ids.next_id().as_str(), ":r6:");
    }

    #[test]
    fn simultaneous_instances_never_collide() {
        let ids = SequentialIds::default();
        let mut keys = BTreeSet::new();

        for depth in 0..3 {
            for _ in 0..2 {
                let instance = ids.next_id();
                for (i, name) in ["title", "status"].into_iter().enumerate() {
                    let key = PresenterKey::new(
                        "posts",
                        ColumnRef::new(Some(name), i),
                        depth,
                        instance.clone(),
                    );
                    assert!(keys.insert(key.to_string()), "duplicate key {key}");
                }
            }
        }

        assert_eq!(keys.len(), 12);
    }

    #[test]
    fn ulid_ids_are_monotonic() {
        let ids = UlidIds::new();
        let a = ids.next_id();
        let b = ids.next_id();

        assert!(a < b);
        assert_eq!(a.len(), 26);
    }
}
