//! Field schema vocabulary for bulk-edit surfaces.
//!
//! ## Crate layout
//! - `node`: the closed field-node sum type (leaf, group, tabs).
//! - `path`: dotted path joining and route rendering.
//! - `types`: field-type and group-kind vocabularies, labels, flags.
//! - `decode`: field-config JSON into typed nodes.
//! - `validate`: structural checks over a decoded tree.

pub mod decode;
pub mod node;
pub mod path;
pub mod types;
pub mod validate;

use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        node::*,
        types::{FieldFlags, FieldType, GroupKind, Label},
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    DecodeError(#[from] decode::DecodeError),

    #[error(transparent)]
    SchemaErrors(#[from] validate::SchemaErrors),
}

/// Decode a field-config document and validate it in one step.
pub fn load_fields(json: &str) -> Result<Vec<node::FieldNode>, Error> {
    let fields = decode::decode_fields(json)?;
    validate::validate_fields(&fields)?;

    Ok(fields)
}
