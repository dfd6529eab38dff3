//! Site composition: global settings plus the locale registry.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;
use sitenav_nav::{BasePath, LinkProblem, NavError, check_nav, flatten_links, validate_sidebar};

use crate::drift::{StructuralDriftWarning, detect_drift};
use crate::{LocaleRegistry, SiteError};

/// Placeholder replaced with the page source path in edit links.
const EDIT_LINK_PLACEHOLDER: &str = ":path";

/// Site-wide settings supplied alongside the locales.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SiteSettings {
    pub title: String,
    pub description: String,
    /// Base path as configured; normalized during composition.
    pub base_path: String,
    /// Markdown source directory handed through to the renderer.
    pub source_dir: PathBuf,
    pub theme: ThemeSettings,
}

/// Theme options shared by all locales.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettings {
    pub social_links: Vec<SocialLink>,
    /// Absolute URL containing `:path`, e.g.
    /// `https://github.com/org/repo/edit/main/docs/:path`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_link_pattern: Option<String>,
    /// Display format for "last updated" timestamps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_format: Option<String>,
}

/// Icon link in the site header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    /// Icon name understood by the renderer (e.g. "github").
    pub icon: String,
    pub link: String,
}

/// Validated configuration handed to the renderer.
///
/// Only produced by [`compose`], so holding one means every invariant
/// has been checked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    title: String,
    description: String,
    base_path: BasePath,
    source_dir: PathBuf,
    locales: LocaleRegistry,
    theme: ThemeSettings,
}

impl SiteConfig {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn base_path(&self) -> &BasePath {
        &self.base_path
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn locales(&self) -> &LocaleRegistry {
        &self.locales
    }

    pub fn theme(&self) -> &ThemeSettings {
        &self.theme
    }
}

/// Result of a successful composition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Composition {
    pub config: SiteConfig,
    /// Non-fatal findings to show the build operator.
    pub warnings: Vec<StructuralDriftWarning>,
}

/// Merge site settings with a finalized registry and validate the result.
///
/// Steps, each fail-fast:
/// 1. normalize the base path
/// 2. validate title, social links, and edit link pattern
/// 3. re-validate every locale's nav and sidebar against the final base path
/// 4. check that internal nav targets resolve to a sidebar page or a
///    locale home
///
/// Locales whose top-level sidebar shape differs from root are reported
/// as [`StructuralDriftWarning`]s without failing.
pub fn compose(
    settings: &SiteSettings,
    registry: LocaleRegistry,
) -> Result<Composition, SiteError> {
    let base_path = BasePath::parse(&settings.base_path)?;
    validate_settings(settings)?;

    for locale in registry.iter() {
        check_nav(&locale.key, &locale.nav, &base_path)?;
        validate_sidebar(&locale.key, &locale.sidebar, &base_path)?;
    }
    check_nav_targets_resolve(&registry, &base_path)?;

    let warnings = detect_drift(&registry);
    for warning in &warnings {
        tracing::warn!(
            locale = %warning.locale,
            root_groups = warning.root_groups,
            locale_groups = warning.locale_groups,
            "{warning}"
        );
    }

    tracing::info!(
        locales = registry.len(),
        base_path = %base_path,
        warnings = warnings.len(),
        "Composed site configuration"
    );

    Ok(Composition {
        config: SiteConfig {
            title: settings.title.clone(),
            description: settings.description.clone(),
            base_path,
            source_dir: settings.source_dir.clone(),
            locales: registry,
            theme: settings.theme.clone(),
        },
        warnings,
    })
}

fn validate_settings(settings: &SiteSettings) -> Result<(), SiteError> {
    if settings.title.trim().is_empty() {
        return Err(SiteError::InvalidSetting {
            field: "title",
            message: "cannot be empty".to_owned(),
        });
    }

    for social in &settings.theme.social_links {
        if social.icon.is_empty() {
            return Err(SiteError::InvalidSetting {
                field: "theme.socialLinks",
                message: format!("link {:?} has no icon", social.link),
            });
        }
        require_absolute_url(&social.link, "theme.socialLinks")?;
    }

    if let Some(pattern) = &settings.theme.edit_link_pattern {
        require_absolute_url(pattern, "theme.editLinkPattern")?;
        if !pattern.contains(EDIT_LINK_PLACEHOLDER) {
            return Err(SiteError::InvalidSetting {
                field: "theme.editLinkPattern",
                message: format!("{pattern:?} must contain {EDIT_LINK_PLACEHOLDER}"),
            });
        }
    }

    Ok(())
}

fn require_absolute_url(raw: &str, field: &'static str) -> Result<(), SiteError> {
    let invalid = |reason: String| SiteError::InvalidSetting {
        field,
        message: format!("{raw:?} is not an absolute URL ({reason})"),
    };
    let parsed = url::Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if parsed.host_str().is_none() {
        return Err(invalid("missing host".to_owned()));
    }
    Ok(())
}

/// Every internal nav target must name a sidebar page of some locale or a
/// locale home path.
fn check_nav_targets_resolve(
    registry: &LocaleRegistry,
    base: &BasePath,
) -> Result<(), SiteError> {
    let homes: Vec<String> = registry
        .iter()
        .map(|locale| {
            let prefix = base.locale_prefix(&locale.key);
            match prefix.trim_end_matches('/') {
                "" => "/".to_owned(),
                bare => bare.to_owned(),
            }
        })
        .collect();

    let pages: HashSet<&str> = registry
        .iter()
        .flat_map(|locale| flatten_links(&locale.sidebar))
        .filter_map(|link| link.target.page_path())
        .chain(homes.iter().map(String::as_str))
        .collect();

    for locale in registry.iter() {
        for link in &locale.nav {
            if let Some(path) = link.target.page_path()
                && !pages.contains(path)
            {
                return Err(NavError::InvalidLink {
                    locale: locale.key.clone(),
                    label: link.label.clone(),
                    target: link.target.as_str().to_owned(),
                    problem: LinkProblem::DeadLink,
                }
                .into());
            }
        }
    }

    Ok(())
}
