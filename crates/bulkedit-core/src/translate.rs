//! Translation seam.
//!
//! The core never looks up strings itself; callers inject a `Translate`
//! implementation bound to the active locale.

use crate::config::BulkEditConfig;
use bulkedit_schema::types::Label;
use std::collections::BTreeMap;

///
/// Translate
///

pub trait Translate {
    /// Translate a plain label or field name. Must be total.
    fn translate(&self, text: &str) -> String;

    fn locale(&self) -> Option<&str> {
        None
    }

    fn fallback_locale(&self) -> Option<&str> {
        None
    }

    /// Resolve a label. Locale tables resolve locale, then fallback locale,
    /// then their first entry; plain text goes through `translate`.
    fn translate_label(&self, label: &Label) -> String {
        match label {
            Label::Text(text) => self.translate(text),
            Label::Localized(table) => resolve_localized(table, self.locale(), self.fallback_locale())
                .map(str::to_string)
                .unwrap_or_default(),
        }
    }
}

impl<F> Translate for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, text: &str) -> String {
        self(text)
    }
}

fn resolve_localized<'a>(
    table: &'a BTreeMap<String, String>,
    locale: Option<&str>,
    fallback: Option<&str>,
) -> Option<&'a str> {
    locale
        .and_then(|l| table.get(l))
        .or_else(|| fallback.and_then(|l| table.get(l)))
        .or_else(|| table.values().next())
        .map(String::as_str)
}

///
/// Identity
/// Returns every label unchanged.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl Translate for Identity {
    fn translate(&self, text: &str) -> String {
        text.to_string()
    }
}

///
/// Catalog
///
/// Locale-bound message catalog. Unknown keys translate to themselves.
///

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    locale: String,
    fallback_locale: Option<String>,
    messages: BTreeMap<String, String>,
}

impl Catalog {
    #[must_use]
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            fallback_locale: None,
            messages: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn from_config(config: &BulkEditConfig) -> Self {
        Self {
            locale: config.locale.clone(),
            fallback_locale: config.fallback_locale.clone(),
            messages: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn fallback(mut self, locale: impl Into<String>) -> Self {
        self.fallback_locale = Some(locale.into());
        self
    }

    #[must_use]
    pub fn message(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.messages.insert(key.into(), text.into());
        self
    }

    pub fn extend<K, V>(&mut self, entries: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.messages
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl Translate for Catalog {
    fn translate(&self, text: &str) -> String {
        self.messages
            .get(text)
            .cloned()
            .unwrap_or_else(|| text.to_string())
    }

    fn locale(&self) -> Option<&str> {
        Some(&self.locale)
    }

    fn fallback_locale(&self) -> Option<&str> {
        self.fallback_locale.as_deref()
    }
}

///
/// TESTS
///
