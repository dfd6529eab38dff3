//! Per-locale construction of nav and sidebar from declarative specs.

use std::collections::HashSet;

use crate::link::validate_link;
use crate::sidebar::validate_sidebar;
use crate::{BasePath, LocaleKey, NavError, NavLink, SidebarGroup, SidebarItem};

/// Top nav entry as declared in configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub label: String,
    pub target: String,
}

impl NavEntry {
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }
}

impl<L: Into<String>, T: Into<String>> From<(L, T)> for NavEntry {
    fn from((label, target): (L, T)) -> Self {
        Self::new(label, target)
    }
}

/// Declared sidebar entry: a leaf link or a nested group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemSpec {
    Link { label: String, target: String },
    Group(GroupSpec),
}

impl ItemSpec {
    pub fn link(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self::Link {
            label: label.into(),
            target: target.into(),
        }
    }

    pub fn group(label: impl Into<String>, items: Vec<ItemSpec>) -> Self {
        Self::Group(GroupSpec::new(label, items))
    }
}

/// Declared sidebar group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupSpec {
    pub label: String,
    pub items: Vec<ItemSpec>,
}

impl GroupSpec {
    pub fn new(label: impl Into<String>, items: Vec<ItemSpec>) -> Self {
        Self {
            label: label.into(),
            items,
        }
    }

    fn into_group(self) -> SidebarGroup {
        SidebarGroup {
            label: self.label,
            children: self.items.into_iter().map(ItemSpec::into_item).collect(),
        }
    }
}

impl ItemSpec {
    fn into_item(self) -> SidebarItem {
        match self {
            Self::Link { label, target } => SidebarItem::Link(NavLink::new(label, target)),
            Self::Group(spec) => SidebarItem::Group(spec.into_group()),
        }
    }
}

/// Builds the nav and sidebar of one locale.
///
/// Links are validated against the locale prefix computed from the key
/// and base path the builder was created with.
///
/// ```
/// use sitenav_nav::{GroupSpec, ItemSpec, LocaleKey, SectionBuilder};
///
/// let builder = SectionBuilder::new(LocaleKey::parse("en").unwrap());
/// let nav = builder.build_nav([("Home", "/en/"), ("Guide", "/en/guide/start")]).unwrap();
/// let sidebar = builder
///     .build_sidebar(vec![GroupSpec::new("Guide", vec![ItemSpec::link("Start", "/en/guide/start")])])
///     .unwrap();
/// assert_eq!(nav.len(), 2);
/// assert_eq!(sidebar[0].children.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct SectionBuilder {
    locale: LocaleKey,
    base: BasePath,
}

impl SectionBuilder {
    /// Builder for a site served from the domain root.
    pub fn new(locale: LocaleKey) -> Self {
        Self {
            locale,
            base: BasePath::root(),
        }
    }

    #[must_use]
    pub fn with_base_path(mut self, base: BasePath) -> Self {
        self.base = base;
        self
    }

    pub fn locale(&self) -> &LocaleKey {
        &self.locale
    }

    /// Build the top nav from ordered `(label, target)` entries.
    ///
    /// Fails on the first repeated label or invalid link.
    pub fn build_nav<I>(&self, entries: I) -> Result<Vec<NavLink>, NavError>
    where
        I: IntoIterator,
        I::Item: Into<NavEntry>,
    {
        let nav: Vec<NavLink> = entries
            .into_iter()
            .map(|entry| {
                let entry = entry.into();
                NavLink::new(entry.label, entry.target)
            })
            .collect();
        check_nav(&self.locale, &nav, &self.base)?;
        Ok(nav)
    }

    /// Build the sidebar from ordered group specs.
    ///
    /// Fails on the first empty group, invalid link, or repeated target.
    pub fn build_sidebar(&self, groups: Vec<GroupSpec>) -> Result<Vec<SidebarGroup>, NavError> {
        let sidebar: Vec<SidebarGroup> = groups.into_iter().map(GroupSpec::into_group).collect();
        validate_sidebar(&self.locale, &sidebar, &self.base)?;
        Ok(sidebar)
    }
}

/// Validate a built nav: unique labels and valid links, in declared order.
pub fn check_nav(locale: &LocaleKey, nav: &[NavLink], base: &BasePath) -> Result<(), NavError> {
    let mut labels = HashSet::new();
    for link in nav {
        if !labels.insert(link.label.as_str()) {
            return Err(NavError::DuplicateNavLabel {
                locale: locale.clone(),
                label: link.label.clone(),
            });
        }
        validate_link(link, locale, base)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::LinkTarget;

    fn en() -> SectionBuilder {
        SectionBuilder::new(LocaleKey::parse("en").unwrap())
    }

    #[test]
    fn test_build_nav_preserves_order() {
        let nav = en()
            .build_nav([
                ("Home", "/en/"),
                ("User Guide", "/en/guide/getting-started"),
                ("Tair", "https://www.alibabacloud.com/product/tair"),
            ])
            .unwrap();

        assert_eq!(
            nav,
            vec![
                NavLink {
                    label: "Home".to_owned(),
                    target: LinkTarget::Internal("/en/".to_owned()),
                },
                NavLink {
                    label: "User Guide".to_owned(),
                    target: LinkTarget::Internal("/en/guide/getting-started".to_owned()),
                },
                NavLink {
                    label: "Tair".to_owned(),
                    target: LinkTarget::External(
                        "https://www.alibabacloud.com/product/tair".to_owned()
                    ),
                },
            ]
        );
    }

    #[test]
    fn test_build_nav_rejects_duplicate_label() {
        let err = en()
            .build_nav([("Guide", "/en/a"), ("Guide", "/en/b")])
            .unwrap_err();

        assert_eq!(
            err,
            NavError::DuplicateNavLabel {
                locale: LocaleKey::parse("en").unwrap(),
                label: "Guide".to_owned(),
            }
        );
    }

    #[test]
    fn test_build_nav_allows_duplicate_targets() {
        let nav = en()
            .build_nav([("Guide", "/en/guide"), ("Docs", "/en/guide")])
            .unwrap();
        assert_eq!(nav.len(), 2);
    }

    #[test]
    fn test_build_nav_validates_prefix() {
        let err = en().build_nav([("Home", "/")]).unwrap_err();
        assert!(matches!(err, NavError::InvalidLink { .. }));
    }

    #[test]
    fn test_build_nav_empty() {
        let nav = en().build_nav(Vec::<NavEntry>::new()).unwrap();
        assert!(nav.is_empty());
    }

    #[test]
    fn test_build_sidebar_nested_groups() {
        let sidebar = en()
            .build_sidebar(vec![
                GroupSpec::new(
                    "Filter and Processing",
                    vec![
                        ItemSpec::link("Built-in Filter Rules", "/en/filter/filter"),
                        ItemSpec::group(
                            "Function",
                            vec![ItemSpec::link("What is function", "/en/filter/function")],
                        ),
                    ],
                ),
                GroupSpec::new(
                    "Others",
                    vec![ItemSpec::link("Redis Modules", "/en/others/modules")],
                ),
            ])
            .unwrap();

        assert_eq!(
            sidebar,
            vec![
                SidebarGroup::new(
                    "Filter and Processing",
                    vec![
                        SidebarItem::link("Built-in Filter Rules", "/en/filter/filter"),
                        SidebarItem::Group(SidebarGroup::new(
                            "Function",
                            vec![SidebarItem::link("What is function", "/en/filter/function")],
                        )),
                    ],
                ),
                SidebarGroup::new(
                    "Others",
                    vec![SidebarItem::link("Redis Modules", "/en/others/modules")],
                ),
            ]
        );
    }

    #[test]
    fn test_build_sidebar_rejects_empty_group() {
        let err = en()
            .build_sidebar(vec![GroupSpec::new("Writer", vec![])])
            .unwrap_err();

        assert_eq!(
            err,
            NavError::EmptyGroup {
                locale: LocaleKey::parse("en").unwrap(),
                group: "Writer".to_owned(),
            }
        );
    }

    #[test]
    fn test_build_sidebar_single_child_group_is_valid() {
        let sidebar = en()
            .build_sidebar(vec![GroupSpec::new(
                "Writer",
                vec![ItemSpec::link("Redis Writer", "/en/writer/redis_writer")],
            )])
            .unwrap();
        assert_eq!(sidebar.len(), 1);
    }

    #[test]
    fn test_build_sidebar_rejects_repeated_target() {
        // Repeated targets like this were common in early revisions of the zh sidebar.
        let err = SectionBuilder::new(LocaleKey::Root)
            .build_sidebar(vec![GroupSpec::new(
                "介绍",
                vec![
                    ItemSpec::link("什么是 RedisShake", "/zh/guide/getting-started"),
                    ItemSpec::link("快速上手", "/zh/guide/getting-started"),
                ],
            )])
            .unwrap_err();

        assert!(matches!(err, NavError::DuplicateLinkTarget { ref target, .. }
            if target == "/zh/guide/getting-started"));
    }

    #[test]
    fn test_builder_uses_base_path() {
        let base = BasePath::parse("/RedisShake/").unwrap();
        let builder = SectionBuilder::new(LocaleKey::Root).with_base_path(base);

        assert!(builder.build_nav([("Home", "/RedisShake/")]).is_ok());
        assert!(builder.build_nav([("Home", "/")]).is_err());
    }
}
