//! ## Crate layout
//! - `core`: flattening, field selection with form-state repair, column
//!   state, presenter identity, configuration and observability.
//! - `schema`: field-node vocabulary, JSON decoding and validation.
//! - `error`: the public error type.
//!
//! The `prelude` module carries the domain vocabulary a bulk-edit surface
//! needs; errors and observability stay behind their own paths.

pub use bulkedit_core as core;
pub use bulkedit_schema as schema;

pub mod error;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use crate::core::{LABEL_SEPARATOR, SELECT_ACCESSOR, config::BulkEditConfig};
pub use error::Error;

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::{
        column::{ColumnChip, DragEnd},
        config::BulkEditConfig,
        identity::{InstanceIdSource as _, SequentialIds, UlidIds},
        prelude::*,
        selection::SelectOption,
        translate::{Catalog, Identity},
    };
}
