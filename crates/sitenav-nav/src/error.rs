//! Navigation validation errors.

use crate::LocaleKey;

/// Reason a link target was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LinkProblem {
    /// Internal target outside the locale's path prefix.
    #[error("internal link must start with {expected:?}")]
    MissingPrefix {
        /// Prefix the target was expected to start with.
        expected: String,
    },
    /// External target that is not an absolute URL.
    #[error("not a valid absolute URL ({0})")]
    MalformedUrl(String),
    /// Internal nav target with no matching sidebar page or locale home.
    #[error("target is not a page of any sidebar")]
    DeadLink,
}

/// Error raised while building or validating a locale's navigation.
///
/// Every variant names the locale and the offending label or target so
/// that a failed build points straight at the configuration entry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    /// Link target failed validation.
    #[error("Invalid link \"{label}\" -> {target:?} in locale {locale}: {problem}")]
    InvalidLink {
        locale: LocaleKey,
        label: String,
        target: String,
        problem: LinkProblem,
    },
    /// Two top-level nav entries share a label.
    #[error("Duplicate nav label {label:?} in locale {locale}")]
    DuplicateNavLabel { locale: LocaleKey, label: String },
    /// Two sidebar entries point at the same target.
    #[error(
        "Duplicate sidebar target {target:?} in locale {locale}: used by \"{first}\" and \"{second}\""
    )]
    DuplicateLinkTarget {
        locale: LocaleKey,
        target: String,
        /// Label of the first entry with this target.
        first: String,
        /// Label of the repeated entry.
        second: String,
    },
    /// Sidebar group without children.
    #[error("Sidebar group \"{group}\" in locale {locale} has no items")]
    EmptyGroup {
        locale: LocaleKey,
        /// Labels from the top-level group down, joined with ` > `.
        group: String,
    },
    /// Locale key is neither `root` nor a language code.
    #[error("Invalid locale key {0:?}: expected \"root\" or a language code such as \"en\"")]
    InvalidLocaleKey(String),
    /// Site base path cannot be normalized.
    #[error("Invalid base path {path:?}: {reason}")]
    InvalidBasePath { path: String, reason: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_problem_messages() {
        let missing = LinkProblem::MissingPrefix {
            expected: "/Docs/en/".to_owned(),
        };
        assert_eq!(missing.to_string(), r#"internal link must start with "/Docs/en/""#);
        assert_eq!(
            LinkProblem::MalformedUrl("relative URL without a base".to_owned()).to_string(),
            "not a valid absolute URL (relative URL without a base)"
        );
        assert_eq!(LinkProblem::DeadLink.to_string(), "target is not a page of any sidebar");
    }

    #[test]
    fn test_invalid_link_embeds_problem() {
        let err = NavError::InvalidLink {
            locale: LocaleKey::Root,
            label: "Guide".to_owned(),
            target: "/guide".to_owned(),
            problem: LinkProblem::DeadLink,
        };
        assert_eq!(
            err.to_string(),
            r#"Invalid link "Guide" -> "/guide" in locale root: target is not a page of any sidebar"#
        );
    }
}
