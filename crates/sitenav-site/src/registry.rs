//! Locale registry with a guaranteed root locale.
//!
//! Locales are collected with [`LocaleRegistryBuilder`] and frozen into a
//! [`LocaleRegistry`] by [`LocaleRegistryBuilder::finalize`]. The finalized
//! registry stores the root locale in its own field, so a registry without
//! a root cannot exist.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::ser::{Serialize, SerializeMap, Serializer};
use sitenav_nav::{LocaleCode, LocaleKey};

use crate::{Locale, SiteError};

/// Loose BCP-47 shape: primary language subtag plus optional subtags.
static LANGUAGE_TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{1,8})*$").expect("invalid language tag regex")
});

/// Collects locales before the root locale is known to exist.
#[derive(Debug, Default)]
pub struct LocaleRegistryBuilder {
    root: Option<Locale>,
    named: BTreeMap<LocaleCode, Locale>,
}

impl LocaleRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a locale under its own key.
    ///
    /// # Errors
    ///
    /// Returns `SiteError::DuplicateLocale` if the key is taken and
    /// `SiteError::InvalidLanguageTag` if the language tag is malformed.
    pub fn register(&mut self, locale: Locale) -> Result<(), SiteError> {
        if !LANGUAGE_TAG_PATTERN.is_match(&locale.language_tag) {
            return Err(SiteError::InvalidLanguageTag {
                locale: locale.key.clone(),
                tag: locale.language_tag.clone(),
            });
        }

        match &locale.key {
            LocaleKey::Root => {
                if self.root.is_some() {
                    return Err(SiteError::DuplicateLocale(LocaleKey::Root));
                }
                self.root = Some(locale);
            }
            LocaleKey::Named(code) => {
                if self.named.contains_key(code) {
                    return Err(SiteError::DuplicateLocale(locale.key.clone()));
                }
                self.named.insert(code.clone(), locale);
            }
        }
        Ok(())
    }

    /// Freeze the registry.
    ///
    /// # Errors
    ///
    /// Returns `SiteError::MissingRootLocale` if no root locale was registered.
    pub fn finalize(self) -> Result<LocaleRegistry, SiteError> {
        let root = self.root.ok_or(SiteError::MissingRootLocale)?;
        Ok(LocaleRegistry {
            root,
            named: self.named,
        })
    }
}

/// Finalized mapping from locale key to locale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocaleRegistry {
    root: Locale,
    named: BTreeMap<LocaleCode, Locale>,
}

impl LocaleRegistry {
    pub fn root(&self) -> &Locale {
        &self.root
    }

    /// Locale registered under `key`, if any.
    pub fn get(&self, key: &LocaleKey) -> Option<&Locale> {
        match key {
            LocaleKey::Root => Some(&self.root),
            LocaleKey::Named(code) => self.named.get(code),
        }
    }

    /// Locale to serve for a requested key.
    ///
    /// Keys that were never registered, including malformed ones, resolve
    /// to the root locale. This never fails.
    pub fn resolve_fallback(&self, key: &str) -> &Locale {
        if key == LocaleKey::ROOT {
            return &self.root;
        }
        if let Some(locale) = self.named.get(key) {
            return locale;
        }
        tracing::debug!(requested = key, "Locale not registered, falling back to root");
        &self.root
    }

    /// All locales, root first, then named locales sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = &Locale> {
        std::iter::once(&self.root).chain(self.named.values())
    }

    /// Named locales sorted by key.
    pub fn named(&self) -> impl Iterator<Item = &Locale> {
        self.named.values()
    }

    /// Number of registered locales, root included.
    pub fn len(&self) -> usize {
        self.named.len() + 1
    }

    /// Always false: a finalized registry holds at least the root locale.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Serialize for LocaleRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for locale in self.iter() {
            map.serialize_entry(locale.key.as_str(), locale)?;
        }
        map.end()
    }
}
