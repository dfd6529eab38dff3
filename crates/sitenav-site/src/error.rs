//! Site composition errors.

use sitenav_nav::{LocaleKey, NavError};

/// Error that aborts a site build.
///
/// Composition is fail-fast: the first error found is returned and no
/// partial configuration is produced.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SiteError {
    /// Nav or sidebar validation failed.
    #[error(transparent)]
    Nav(#[from] NavError),
    /// A locale key was registered twice.
    #[error("Locale {0} is already registered")]
    DuplicateLocale(LocaleKey),
    /// No locale was registered under `root`.
    #[error("No root locale registered: one locale must use the key \"root\"")]
    MissingRootLocale,
    /// Locale language tag is not a BCP-47 tag.
    #[error("Invalid language tag {tag:?} for locale {locale}")]
    InvalidLanguageTag { locale: LocaleKey, tag: String },
    /// Site-wide setting failed validation.
    #[error("Invalid site setting {field}: {message}")]
    InvalidSetting {
        /// Setting path (e.g. "`theme.editLinkPattern`").
        field: &'static str,
        message: String,
    },
}
