//! Runtime configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config.

use crate::{SELECT_ACCESSOR, selection::RepairPolicy};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

///
/// BulkEditConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BulkEditConfig {
    /// Active locale for localized labels.
    pub locale: String,

    /// Locale tried when a label has no entry for `locale`.
    pub fallback_locale: Option<String>,

    pub repair_policy: RepairPolicy,

    pub columns: ColumnConfig,
}

impl Default for BulkEditConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            fallback_locale: Some("en".to_string()),
            repair_policy: RepairPolicy::default(),
            columns: ColumnConfig::default(),
        }
    }
}

impl BulkEditConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;

        tracing::debug!(
            locale = %config.locale,
            repair_policy = ?config.repair_policy,
            "loaded bulk-edit config"
        );

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.locale.is_empty() {
            return Err(ConfigError::Invalid("locale is empty".to_string()));
        }
        if self.fallback_locale.as_deref() == Some("") {
            return Err(ConfigError::Invalid("fallbackLocale is empty".to_string()));
        }

        self.columns.validate()
    }
}

///
/// ColumnConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColumnConfig {
    /// Accessor of the reserved, non-interactive selection column.
    pub reserved_accessor: String,

    /// Explicit set of initially active columns, by accessor.
    pub default_columns: Option<Vec<String>>,

    /// Number of leading columns activated when `default_columns` is unset.
    pub default_active_count: usize,

    /// Prepend the reserved selection column.
    pub include_select: bool,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            reserved_accessor: SELECT_ACCESSOR.to_string(),
            default_columns: None,
            default_active_count: 4,
            include_select: false,
        }
    }
}

impl ColumnConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reserved_accessor.is_empty() {
            return Err(ConfigError::Invalid(
                "columns.reservedAccessor is empty".to_string(),
            ));
        }
        if let Some(defaults) = &self.default_columns
            && defaults.iter().any(|a| *a == self.reserved_accessor)
        {
            return Err(ConfigError::Invalid(format!(
                "columns.defaultColumns must not list the reserved accessor '{}'",
                self.reserved_accessor
            )));
        }

        Ok(())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = BulkEditConfig::from_json_str("{}").expect("defaults are valid");

        assert_eq!(config, BulkEditConfig::default());
        assert_eq!(config.columns.reserved_accessor, "_select");
        assert_eq!(config.repair_policy, RepairPolicy::CountDecrease);
    }

    #[test]
    fn camel_case_fields_parse() {
        let config = BulkEditConfig::from_json_str(
            r#"{
                "locale": "de",
                "fallbackLocale": null,
                "repairPolicy": "setDifference",
                "columns": {"defaultColumns": ["title"], "includeSelect": true}
            }"#,
        )
        .unwrap();

        assert_eq!(config.locale, "de");
        assert_eq!(config.fallback_locale, None);
        assert_eq!(config.repair_policy, RepairPolicy::SetDifference);
        assert_eq!(config.columns.default_columns, Some(vec!["title".to_string()]));
        assert!(config.columns.include_select);
        assert_eq!(config.columns.default_active_count, 4);
    }

    #[test]
    fn rejects_reserved_default_column() {
        let err = BulkEditConfig::from_json_str(r#"{"columns":{"defaultColumns":["_select"]}}"#)
            .unwrap_err();

        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_empty_locale_and_bad_json() {
        assert!(matches!(
            BulkEditConfig::from_json_str(r#"{"locale":""}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            BulkEditConfig::from_json_str(r#"{"repairPolicy":"sometimes"}"#),
            Err(ConfigError::Json(_))
        ));
    }
}
