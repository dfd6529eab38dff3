//! Sidebar tree and its structural checks.

use std::collections::HashMap;

use crate::link::validate_link;
use crate::{BasePath, LocaleKey, NavError, NavLink};

/// Entry of a sidebar group.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum SidebarItem {
    /// Page link.
    Link(NavLink),
    /// Nested group.
    Group(SidebarGroup),
}

impl SidebarItem {
    pub fn link(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self::Link(NavLink::new(label, target))
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Link(link) => &link.label,
            Self::Group(group) => &group.label,
        }
    }
}

/// Labelled group of sidebar entries. Groups have no link of their own.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SidebarGroup {
    /// Section heading.
    pub label: String,
    /// Entries in declared order.
    pub children: Vec<SidebarItem>,
}

impl SidebarGroup {
    pub fn new(label: impl Into<String>, children: Vec<SidebarItem>) -> Self {
        Self {
            label: label.into(),
            children,
        }
    }
}

/// Iterate over every link of a sidebar, depth-first in declared order.
///
/// The iterator is lazy and borrows the tree. Clone it (or call this
/// function again) to walk the links a second time.
///
/// ```
/// use sitenav_nav::{flatten_links, SidebarGroup, SidebarItem};
///
/// let sidebar = vec![SidebarGroup::new(
///     "Guide",
///     vec![
///         SidebarItem::link("Intro", "/guide/intro"),
///         SidebarItem::Group(SidebarGroup::new("More", vec![SidebarItem::link("Deep", "/guide/deep")])),
///         SidebarItem::link("Config", "/guide/config"),
///     ],
/// )];
/// let targets: Vec<_> = flatten_links(&sidebar).map(|l| l.target.as_str()).collect();
/// assert_eq!(targets, ["/guide/intro", "/guide/deep", "/guide/config"]);
/// ```
pub fn flatten_links(sidebar: &[SidebarGroup]) -> FlattenLinks<'_> {
    FlattenLinks {
        groups: sidebar.iter(),
        stack: Vec::new(),
    }
}

/// Iterator returned by [`flatten_links`].
#[derive(Clone, Debug)]
pub struct FlattenLinks<'a> {
    groups: std::slice::Iter<'a, SidebarGroup>,
    stack: Vec<std::slice::Iter<'a, SidebarItem>>,
}

impl<'a> Iterator for FlattenLinks<'a> {
    type Item = &'a NavLink;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let next = if let Some(items) = self.stack.last_mut() {
                items.next()
            } else {
                let group = self.groups.next()?;
                self.stack.push(group.children.iter());
                continue;
            };

            match next {
                Some(SidebarItem::Link(link)) => return Some(link),
                Some(SidebarItem::Group(group)) => self.stack.push(group.children.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Validate a locale's whole sidebar.
///
/// Checks, in order, that no group is empty, that every link passes
/// [`validate_link`], and that no two links lead to the same page (see
/// [`LinkTarget::page_path`](crate::LinkTarget::page_path)). Returns the
/// first problem found.
pub fn validate_sidebar(
    locale: &LocaleKey,
    sidebar: &[SidebarGroup],
    base: &BasePath,
) -> Result<(), NavError> {
    for group in sidebar {
        check_not_empty(locale, group, &mut Vec::new())?;
    }

    // Keyed by page path: `/a`, `/a/` and `/a#b` are the same page.
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for link in flatten_links(sidebar) {
        validate_link(link, locale, base)?;
        let page = link.target.page_path().unwrap_or(link.target.as_str());
        if let Some(first) = seen.insert(page, link.label.as_str()) {
            return Err(NavError::DuplicateLinkTarget {
                locale: locale.clone(),
                target: link.target.as_str().to_owned(),
                first: first.to_owned(),
                second: link.label.clone(),
            });
        }
    }

    Ok(())
}

/// Depth-first search for a group without children.
fn check_not_empty<'a>(
    locale: &LocaleKey,
    group: &'a SidebarGroup,
    path: &mut Vec<&'a str>,
) -> Result<(), NavError> {
    path.push(&group.label);
    if group.children.is_empty() {
        return Err(NavError::EmptyGroup {
            locale: locale.clone(),
            group: path.join(" > "),
        });
    }
    for child in &group.children {
        if let SidebarItem::Group(nested) = child {
            check_not_empty(locale, nested, path)?;
        }
    }
    path.pop();
    Ok(())
}
