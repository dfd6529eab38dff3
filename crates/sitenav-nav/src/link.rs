//! Navigation links and link target validation.

use crate::{BasePath, LinkProblem, LocaleKey, NavError};

/// Destination of a navigation entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum LinkTarget {
    /// Site-relative path, including the base path (e.g. `/Docs/en/guide`).
    Internal(String),
    /// Absolute URL to another site.
    External(String),
}

impl LinkTarget {
    /// Classify a raw target string.
    ///
    /// Anything starting with a single `/` is internal. Everything else,
    /// including protocol-relative `//host` targets, is treated as external
    /// and must pass URL validation.
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.starts_with('/') && !raw.starts_with("//") {
            Self::Internal(raw)
        } else {
            Self::External(raw)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Internal(path) | Self::External(path) => path,
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal(_))
    }

    /// Page path an internal target resolves to.
    ///
    /// Drops any query or fragment and the trailing slash, so `/guide/`,
    /// `/guide#setup`, and `/guide` resolve to the same page. Returns
    /// `None` for external targets.
    pub fn page_path(&self) -> Option<&str> {
        match self {
            Self::Internal(path) => Some(page_path(path)),
            Self::External(_) => None,
        }
    }
}

/// Strip query, fragment, and trailing slash from an internal path.
pub(crate) fn page_path(path: &str) -> &str {
    let end = path.find(['#', '?']).unwrap_or(path.len());
    let path = &path[..end];
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}

/// A labelled link, used both in the top nav and as a sidebar leaf.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NavLink {
    /// Display text.
    pub label: String,
    /// Link destination.
    pub target: LinkTarget,
}

impl NavLink {
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: LinkTarget::parse(target),
        }
    }
}

/// Check a single link against the locale it belongs to.
///
/// Internal targets must start with the locale prefix derived from `base`
/// (`<base>` for root, `<base><code>/` for named locales); the prefix
/// without its trailing slash is accepted as well. External targets must
/// parse as absolute URLs, and `http`/`https` URLs must name a host.
///
/// ```
/// use sitenav_nav::{validate_link, BasePath, LocaleKey, NavLink};
///
/// let base = BasePath::parse("/Docs/").unwrap();
/// assert!(validate_link(&NavLink::new("Start", "/Docs/guide/start"), &LocaleKey::Root, &base).is_ok());
/// assert!(validate_link(&NavLink::new("Start", "/guide/start"), &LocaleKey::Root, &base).is_err());
/// ```
pub fn validate_link(link: &NavLink, locale: &LocaleKey, base: &BasePath) -> Result<(), NavError> {
    let invalid = |problem: LinkProblem| NavError::InvalidLink {
        locale: locale.clone(),
        label: link.label.clone(),
        target: link.target.as_str().to_owned(),
        problem,
    };

    match &link.target {
        LinkTarget::Internal(path) => {
            let prefix = base.locale_prefix(locale);
            let bare_prefix = prefix.trim_end_matches('/');
            if path.starts_with(&prefix) || (!bare_prefix.is_empty() && path == bare_prefix) {
                Ok(())
            } else {
                Err(invalid(LinkProblem::MissingPrefix { expected: prefix }))
            }
        }
        LinkTarget::External(raw) => match url::Url::parse(raw) {
            Ok(parsed) => {
                if matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_none() {
                    Err(invalid(LinkProblem::MalformedUrl("missing host".to_owned())))
                } else {
                    Ok(())
                }
            }
            Err(e) => Err(invalid(LinkProblem::MalformedUrl(e.to_string()))),
        },
    }
}
