//! Locale keys and site base paths.
//!
//! Every internal link is checked against a prefix derived from these two
//! values: the site [`BasePath`] for the root locale, and
//! `<base>/<code>/` for a named locale.

use std::borrow::Borrow;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::NavError;

/// Accepted shape of a named locale key (`en`, `zh`, `zh-hans`, `pt-br`).
static LOCALE_CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z]{2,3}(-[a-z0-9]{2,8})*$").expect("invalid locale code regex")
});

/// Key under which a locale is registered.
///
/// The root locale is served at the site base path without a locale
/// segment. Named locales are served under `/<code>/`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LocaleKey {
    /// The locale served at the site base path.
    Root,
    /// A locale served under its own path segment.
    Named(LocaleCode),
}

/// Validated code of a named locale.
///
/// Only [`LocaleKey::parse`] creates one, so a code is never `root` and
/// always matches the language code shape.
///
/// ```compile_fail
/// use sitenav_nav::{LocaleCode, LocaleKey};
///
/// let key = LocaleKey::Named(LocaleCode("root".to_owned()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocaleCode(String);

impl LocaleCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LocaleCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl LocaleKey {
    /// Reserved key for the root locale.
    pub const ROOT: &'static str = "root";

    /// Parse a locale key from configuration.
    ///
    /// `"root"` maps to [`LocaleKey::Root`]. Anything else must look like a
    /// lowercase language code, optionally followed by subtags.
    pub fn parse(key: &str) -> Result<Self, NavError> {
        if key == Self::ROOT {
            return Ok(Self::Root);
        }
        if LOCALE_CODE_PATTERN.is_match(key) {
            Ok(Self::Named(LocaleCode(key.to_owned())))
        } else {
            Err(NavError::InvalidLocaleKey(key.to_owned()))
        }
    }

    /// Key as written in configuration.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Root => Self::ROOT,
            Self::Named(code) => code.as_str(),
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, Self::Root)
    }
}

impl fmt::Display for LocaleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for LocaleKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Normalized site base path.
///
/// Always starts and ends with `/`. The empty string and `/` both
/// normalize to `/`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct BasePath(String);

impl BasePath {
    /// Base path of a site served from the domain root.
    pub fn root() -> Self {
        Self("/".to_owned())
    }

    /// Parse and normalize a base path.
    ///
    /// Adds missing leading and trailing slashes. Rejects values that look
    /// like URLs or carry a query, fragment, whitespace, or empty segments.
    pub fn parse(raw: &str) -> Result<Self, NavError> {
        let invalid = |reason: &'static str| NavError::InvalidBasePath {
            path: raw.to_owned(),
            reason,
        };

        let trimmed = raw.trim_matches('/');
        if trimmed.is_empty() {
            return Ok(Self::root());
        }
        if raw.contains("://") {
            return Err(invalid("must be a path, not a URL"));
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(invalid("must not contain whitespace"));
        }
        if raw.contains(['?', '#']) {
            return Err(invalid("must not contain a query or fragment"));
        }
        if trimmed.contains("//") {
            return Err(invalid("must not contain empty segments"));
        }

        Ok(Self(format!("/{trimmed}/")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Prefix every internal link of `locale` must start with.
    ///
    /// ```
    /// use sitenav_nav::{BasePath, LocaleKey};
    ///
    /// let base = BasePath::parse("/Docs/").unwrap();
    /// assert_eq!(base.locale_prefix(&LocaleKey::Root), "/Docs/");
    /// assert_eq!(base.locale_prefix(&LocaleKey::parse("en").unwrap()), "/Docs/en/");
    /// ```
    pub fn locale_prefix(&self, locale: &LocaleKey) -> String {
        match locale {
            LocaleKey::Root => self.0.clone(),
            LocaleKey::Named(code) => format!("{}{code}/", self.0),
        }
    }
}

impl Default for BasePath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
