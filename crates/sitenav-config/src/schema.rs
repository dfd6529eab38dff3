//! Versioned configuration schema.
//!
//! Every config file carries a top-level `schema_version` (missing means
//! version 1). Older versions are deserialized into their own types and
//! migrated forward one version at a time until they reach
//! [`CURRENT_SCHEMA_VERSION`].
//!
//! Version 1 is the legacy layout that mirrors the `VitePress` config
//! object (`base`, `src_dir`, locale `lang`, items as `{text, link}` or
//! `{text, items}`). Version 2 groups site settings under `[site]` and uses
//! `{label, target}` / `{label, children}` items.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::{
    Config, ConfigError, FooterSection, LocaleSection, NavEntrySection, SidebarEntrySection,
    SiteSection, SocialLinkSection, ThemeSection,
};

/// Schema version produced by [`parse`].
pub const CURRENT_SCHEMA_VERSION: u32 = 2;

/// Parse a config file, migrating older schema versions.
pub(crate) fn parse(content: &str) -> Result<Config, ConfigError> {
    let table: toml::Table = toml::from_str(content)?;

    let version = match table.get("schema_version") {
        None => 1,
        Some(value) => value
            .as_integer()
            .and_then(|v| u32::try_from(v).ok())
            .filter(|&v| v > 0)
            .ok_or_else(|| {
                ConfigError::Validation("schema_version must be a positive integer".to_owned())
            })?,
    };

    match version {
        1 => {
            let legacy: v1::Document = toml::Value::Table(table).try_into()?;
            tracing::info!(
                from = 1,
                to = CURRENT_SCHEMA_VERSION,
                "Migrating legacy configuration schema"
            );
            Ok(migrate_v1(legacy))
        }
        CURRENT_SCHEMA_VERSION => Ok(toml::Value::Table(table).try_into()?),
        other => Err(ConfigError::UnsupportedSchema(other)),
    }
}

/// Migrate a version 1 document to version 2.
///
/// A theme-level `edit_link.text` becomes each locale's edit link text
/// unless the locale sets its own.
pub(crate) fn migrate_v1(doc: v1::Document) -> Config {
    let (edit_link_pattern, edit_link_text) = match doc.theme.edit_link {
        Some(edit) => (edit.pattern, edit.text),
        None => (None, None),
    };

    let locales = doc
        .locales
        .into_iter()
        .map(|(key, locale)| {
            let section = LocaleSection {
                label: locale.label.unwrap_or_else(|| key.clone()),
                language_tag: locale.lang.unwrap_or_else(|| v1::DEFAULT_LANG.to_owned()),
                description: locale.description,
                edit_link_text: locale.edit_link_text.or_else(|| edit_link_text.clone()),
                nav: locale
                    .nav
                    .into_iter()
                    .map(|link| NavEntrySection {
                        label: link.text,
                        target: link.link,
                    })
                    .collect(),
                sidebar: locale.sidebar.into_iter().map(v1::Item::migrate).collect(),
                footer: locale.footer.map(|footer| FooterSection {
                    message: footer.message,
                    copyright: footer.copyright,
                }),
            };
            (key, section)
        })
        .collect();

    Config {
        schema_version: CURRENT_SCHEMA_VERSION,
        site: SiteSection {
            title: doc.title,
            description: doc.description,
            base_path: doc.base,
            source_dir: doc.src_dir,
        },
        theme: ThemeSection {
            social_links: doc
                .theme
                .social_links
                .into_iter()
                .map(|social| SocialLinkSection {
                    icon: social.icon,
                    link: social.link,
                })
                .collect(),
            edit_link_pattern,
            last_updated_format: None,
        },
        locales,
        ..Config::default()
    }
}

/// Version 1 (legacy) document types.
pub(crate) mod v1 {
    use super::{BTreeMap, Deserialize, SidebarEntrySection};

    /// `VitePress` default for the `lang` attribute.
    pub(crate) const DEFAULT_LANG: &str = "en-US";

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    pub(crate) struct Document {
        pub base: String,
        pub title: String,
        pub description: String,
        pub src_dir: Option<String>,
        pub locales: BTreeMap<String, Locale>,
        pub theme: Theme,
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    pub(crate) struct Locale {
        pub label: Option<String>,
        pub lang: Option<String>,
        pub description: Option<String>,
        pub edit_link_text: Option<String>,
        pub nav: Vec<Link>,
        pub sidebar: Vec<Item>,
        pub footer: Option<Footer>,
    }

    #[derive(Debug, Deserialize)]
    pub(crate) struct Link {
        pub text: String,
        pub link: String,
    }

    #[derive(Debug, Deserialize)]
    pub(crate) struct Item {
        pub text: String,
        pub link: Option<String>,
        pub items: Option<Vec<Item>>,
    }

    impl Item {
        pub(crate) fn migrate(self) -> SidebarEntrySection {
            SidebarEntrySection {
                label: self.text,
                target: self.link,
                children: self
                    .items
                    .map(|items| items.into_iter().map(Item::migrate).collect()),
            }
        }
    }

    #[derive(Debug, Deserialize)]
    pub(crate) struct Footer {
        pub message: Option<String>,
        pub copyright: Option<String>,
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    pub(crate) struct Theme {
        pub social_links: Vec<SocialLink>,
        pub edit_link: Option<EditLink>,
    }

    #[derive(Debug, Deserialize)]
    pub(crate) struct SocialLink {
        pub icon: String,
        pub link: String,
    }

    #[derive(Debug, Deserialize)]
    pub(crate) struct EditLink {
        pub pattern: Option<String>,
        pub text: Option<String>,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const LEGACY: &str = r#"
base = "/RedisShake/"
title = "RedisShake"
description = "RedisShake is a tool for processing and migrating Redis data."
src_dir = "./src"

[theme]
social_links = [{ icon = "github", link = "https://github.com/tair-opensource/RedisShake" }]
edit_link = { pattern = "https://github.com/tair-opensource/RedisShake/edit/v4/docs/src/:path", text = "Edit this page" }

[locales.root]
label = "中文"
lang = "zh-Hans"
nav = [
    { text = "主页", link = "/RedisShake/" },
    { text = "使用文档", link = "/RedisShake/zh/guide/getting-started" },
]

[[locales.root.sidebar]]
text = "介绍"
items = [
    { text = "快速上手", link = "/RedisShake/zh/guide/getting-started" },
    { text = "function", items = [{ text = "最佳实践", link = "/RedisShake/zh/function/best_practices" }] },
]

[locales.root.footer]
message = "Released under the MIT License."
copyright = "Copyright © 2019-present Tair"

[locales.en]
label = "English"
"#;

    #[test]
    fn test_missing_version_is_legacy() {
        let config = parse(LEGACY).unwrap();

        assert_eq!(config.schema_version, CURRENT_SCHEMA_VERSION);
        assert_eq!(config.site.base_path, "/RedisShake/");
        assert_eq!(config.site.title, "RedisShake");
        assert_eq!(config.site.source_dir.as_deref(), Some("./src"));
    }

    #[test]
    fn test_migrate_v1_locales() {
        let config = parse(LEGACY).unwrap();

        let root = &config.locales["root"];
        assert_eq!(root.label, "中文");
        assert_eq!(root.language_tag, "zh-Hans");
        assert_eq!(
            root.nav[1],
            NavEntrySection {
                label: "使用文档".to_owned(),
                target: "/RedisShake/zh/guide/getting-started".to_owned(),
            }
        );
        assert_eq!(
            root.sidebar[0].children.as_ref().unwrap()[1],
            SidebarEntrySection {
                label: "function".to_owned(),
                target: None,
                children: Some(vec![SidebarEntrySection {
                    label: "最佳实践".to_owned(),
                    target: Some("/RedisShake/zh/function/best_practices".to_owned()),
                    children: None,
                }]),
            }
        );
        assert_eq!(
            root.footer.as_ref().unwrap().copyright.as_deref(),
            Some("Copyright © 2019-present Tair")
        );

        let en = &config.locales["en"];
        assert_eq!(en.language_tag, "en-US");
        assert!(en.nav.is_empty());
    }

    #[test]
    fn test_migrate_v1_edit_link() {
        let config = parse(LEGACY).unwrap();

        assert_eq!(
            config.theme.edit_link_pattern.as_deref(),
            Some("https://github.com/tair-opensource/RedisShake/edit/v4/docs/src/:path")
        );
        assert_eq!(
            config.locales["en"].edit_link_text.as_deref(),
            Some("Edit this page")
        );
        assert_eq!(config.theme.social_links[0].icon, "github");
    }

    #[test]
    fn test_parse_current_version() {
        let toml = r#"
schema_version = 2

[site]
title = "Docs"
base_path = "/docs/"

[locales.root]
label = "English"
language_tag = "en"
nav = [{ label = "Guide", target = "/docs/guide" }]
"#;
        let config = parse(toml).unwrap();

        assert_eq!(config.site.title, "Docs");
        assert_eq!(config.locales["root"].nav[0].target, "/docs/guide");
    }

    #[test]
    fn test_unsupported_future_version() {
        let err = parse("schema_version = 3").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedSchema(3)));
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_invalid_version_value() {
        for toml in ["schema_version = 0", "schema_version = \"2\"", "schema_version = -1"] {
            let err = parse(toml).unwrap_err();
            assert!(
                matches!(err, ConfigError::Validation(_)),
                "Expected ConfigError::Validation for {toml}, got {err:?}"
            );
        }
    }
}
