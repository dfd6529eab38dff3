//! Fully built locale configuration.

use serde::Serialize;
use sitenav_nav::{LocaleKey, NavLink, SidebarGroup};

/// Footer text shown on every page of a locale.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Footer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

/// One language variant of the site with its own nav and sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Locale {
    /// Registration key. Serialized as the key of the locales map.
    #[serde(skip)]
    pub key: LocaleKey,
    /// Name shown in the language switcher (e.g. "English", "中文").
    pub label: String,
    /// BCP-47 tag emitted as the page `lang` attribute.
    pub language_tag: String,
    /// Locale-specific site description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub nav: Vec<NavLink>,
    pub sidebar: Vec<SidebarGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,
    /// Text of the "edit this page" link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_link_text: Option<String>,
}

impl Locale {
    /// Locale with empty nav and sidebar.
    pub fn new(key: LocaleKey, label: impl Into<String>, language_tag: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
            language_tag: language_tag.into(),
            description: None,
            nav: Vec::new(),
            sidebar: Vec::new(),
            footer: None,
            edit_link_text: None,
        }
    }
}
