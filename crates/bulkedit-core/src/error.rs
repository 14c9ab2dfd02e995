use crate::{column::ColumnError, config::ConfigError, selection::SelectError};
use std::fmt;
use thiserror::Error as ThisError;

///
/// InternalError
///
/// Structured runtime error with a stable internal classification.
/// Not a stable API; intended for internal use and may change without notice.
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct InternalError {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl InternalError {
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
        }
    }

    /// Construct a schema-origin invalid-input error.
    pub(crate) fn schema_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::InvalidInput, ErrorOrigin::Schema, message)
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.class, ErrorClass::NotFound)
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}:{}: {}", self.origin, self.class, self.message)
    }
}

impl From<ColumnError> for InternalError {
    fn from(err: ColumnError) -> Self {
        let class = match err {
            ColumnError::UnknownAccessor { .. } => ErrorClass::NotFound,
            ColumnError::IndexOutOfRange { .. } => ErrorClass::InvalidInput,
            ColumnError::ReservedColumn { .. } => ErrorClass::Unsupported,
        };

        Self::new(class, ErrorOrigin::Column, err.to_string())
    }
}

impl From<ConfigError> for InternalError {
    fn from(err: ConfigError) -> Self {
        Self::new(ErrorClass::InvalidInput, ErrorOrigin::Config, err.to_string())
    }
}

impl From<SelectError> for InternalError {
    fn from(err: SelectError) -> Self {
        Self::new(ErrorClass::InvalidInput, ErrorOrigin::Selection, err.to_string())
    }
}

impl From<bulkedit_schema::Error> for InternalError {
    fn from(err: bulkedit_schema::Error) -> Self {
        Self::schema_invalid(err.to_string())
    }
}

///
/// ErrorClass
/// Internal error taxonomy for runtime classification.
/// Not a stable API; may change without notice.
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    InvalidInput,
    NotFound,
    Unsupported,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InvalidInput => "invalid_input",
            Self::NotFound => "not_found",
            Self::Unsupported => "unsupported",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
/// Internal origin taxonomy for runtime classification.
/// Not a stable API; may change without notice.
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
    Column,
    Config,
    Schema,
    Selection,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Column => "column",
            Self::Config => "config",
            Self::Schema => "schema",
            Self::Selection => "selection",
        };
        write!(f, "{label}")
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_errors_keep_their_class() {
        let err = InternalError::from(ColumnError::UnknownAccessor {
            accessor: "nope".to_string(),
        });

        assert!(err.is_not_found());
        assert_eq!(err.origin, ErrorOrigin::Column);
        assert_eq!(
            err.display_with_class(),
            "column:not_found: unknown column accessor 'nope'"
        );
    }

    #[test]
    fn out_of_range_is_invalid_input() {
        let err = InternalError::from(ColumnError::IndexOutOfRange { index: 9, len: 3 });

        assert_eq!(err.class, ErrorClass::InvalidInput);
    }

    #[test]
    fn select_errors_are_selection_invalid_input() {
        let err = InternalError::from(SelectError::IndexOutOfRange { index: 4, len: 2 });

        assert_eq!(
            err.display_with_class(),
            "selection:invalid_input: option index 4 is out of range for 2 options"
        );
    }
}
