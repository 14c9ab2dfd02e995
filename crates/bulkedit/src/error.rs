use bulkedit_core::{
    column::ColumnError,
    config::ConfigError,
    selection::SelectError,
    error::{ErrorClass, ErrorOrigin as CoreErrorOrigin, InternalError},
};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind + origin taxonomy.
///

#[derive(Debug, Deserialize, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }
}

impl From<InternalError> for Error {
    fn from(err: InternalError) -> Self {
        let kind = match err.class {
            ErrorClass::InvalidInput => ErrorKind::InvalidInput,
            ErrorClass::NotFound => ErrorKind::NotFound,
            ErrorClass::Unsupported => ErrorKind::Unsupported,
        };

        Self::new(kind, err.origin.into(), err.message)
    }
}

impl From<ColumnError> for Error {
    fn from(err: ColumnError) -> Self {
        InternalError::from(err).into()
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        InternalError::from(err).into()
    }
}

impl From<SelectError> for Error {
    fn from(err: SelectError) -> Self {
        InternalError::from(err).into()
    }
}

impl From<bulkedit_schema::Error> for Error {
    fn from(err: bulkedit_schema::Error) -> Self {
        InternalError::from(err).into()
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    /// Input was rejected; the caller can fix it.
    InvalidInput,

    /// A referenced column or field does not exist.
    NotFound,

    /// The operation is not allowed on this target.
    Unsupported,
}

///
/// ErrorOrigin
/// Public origin taxonomy for callers.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Column,
    Config,
    Schema,
    Selection,
}

impl From<CoreErrorOrigin> for ErrorOrigin {
    fn from(origin: CoreErrorOrigin) -> Self {
        match origin {
            CoreErrorOrigin::Column => Self::Column,
            CoreErrorOrigin::Config => Self::Config,
            CoreErrorOrigin::Schema => Self::Schema,
            CoreErrorOrigin::Selection => Self::Selection,
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_errors_map_to_public_kinds() {
        let err = Error::from(ColumnError::ReservedColumn {
            accessor: "_select".to_string(),
        });

        assert_eq!(err.kind, ErrorKind::Unsupported);
        assert_eq!(err.origin, ErrorOrigin::Column);
        assert!(err.to_string().contains("_select"));
    }

    #[test]
    fn schema_errors_are_invalid_input() {
        let err: Error = bulkedit_schema::load_fields(r#"[{"type":"nope"}]"#)
            .unwrap_err()
            .into();

        assert_eq!(err.kind, ErrorKind::InvalidInput);
        assert_eq!(err.origin, ErrorOrigin::Schema);
    }
}
