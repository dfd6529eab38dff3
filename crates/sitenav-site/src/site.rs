//! End-to-end build from declarative locale specs.

use sitenav_nav::{BasePath, GroupSpec, LocaleKey, NavEntry, SectionBuilder};

use crate::composer::{Composition, SiteSettings, compose};
use crate::{Footer, Locale, LocaleRegistryBuilder, SiteError};

/// Declarative description of one locale, as supplied by a config loader.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocaleSpec {
    /// `"root"` or a language code.
    pub key: String,
    pub label: String,
    pub language_tag: String,
    pub description: Option<String>,
    pub nav: Vec<NavEntry>,
    pub sidebar: Vec<GroupSpec>,
    pub footer: Option<Footer>,
    pub edit_link_text: Option<String>,
}

/// Build every locale, register them, and compose the site.
///
/// Locales are built in the given order with the site base path; the first
/// failure aborts the build.
///
/// ```
/// use sitenav_nav::{GroupSpec, ItemSpec, NavEntry};
/// use sitenav_site::{LocaleSpec, SiteSettings, build_site};
///
/// let settings = SiteSettings {
///     title: "Docs".to_owned(),
///     base_path: "/docs/".to_owned(),
///     ..SiteSettings::default()
/// };
/// let root = LocaleSpec {
///     key: "root".to_owned(),
///     label: "English".to_owned(),
///     language_tag: "en".to_owned(),
///     nav: vec![NavEntry::new("Guide", "/docs/guide")],
///     sidebar: vec![GroupSpec::new("Guide", vec![ItemSpec::link("Guide", "/docs/guide")])],
///     ..LocaleSpec::default()
/// };
///
/// let composition = build_site(&settings, vec![root]).unwrap();
/// assert_eq!(composition.config.base_path().as_str(), "/docs/");
/// ```
pub fn build_site(
    settings: &SiteSettings,
    locales: Vec<LocaleSpec>,
) -> Result<Composition, SiteError> {
    let base = BasePath::parse(&settings.base_path)?;
    let mut registry = LocaleRegistryBuilder::new();

    for spec in locales {
        let key = LocaleKey::parse(&spec.key)?;
        let builder = SectionBuilder::new(key.clone()).with_base_path(base.clone());
        let nav = builder.build_nav(spec.nav)?;
        let sidebar = builder.build_sidebar(spec.sidebar)?;
        tracing::debug!(locale = %key, nav = nav.len(), groups = sidebar.len(), "Built locale");

        registry.register(Locale {
            key,
            label: spec.label,
            language_tag: spec.language_tag,
            description: spec.description,
            nav,
            sidebar,
            footer: spec.footer,
            edit_link_text: spec.edit_link_text,
        })?;
    }

    compose(settings, registry.finalize()?)
}
