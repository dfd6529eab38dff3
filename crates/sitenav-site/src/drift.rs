//! Cross-locale structural drift detection.
//!
//! Translations tend to fall behind (or run ahead of) the root locale as
//! documentation evolves. Top-level sidebar groups are matched by position
//! only, since their labels are translated.

use std::fmt;

use serde::Serialize;
use sitenav_nav::{LocaleKey, SidebarGroup};

use crate::LocaleRegistry;

/// Non-fatal report that a locale's top-level sidebar differs from root.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuralDriftWarning {
    pub locale: LocaleKey,
    /// Top-level group count of the root locale.
    pub root_groups: usize,
    /// Top-level group count of this locale.
    pub locale_groups: usize,
    /// Labels of this locale's groups with no root group at the same position.
    pub extra_groups: Vec<String>,
    /// Labels of root groups with no group at the same position in this locale.
    pub missing_groups: Vec<String>,
}

impl fmt::Display for StructuralDriftWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Locale {} has {} top-level sidebar groups, root has {}",
            self.locale, self.locale_groups, self.root_groups
        )?;
        if !self.extra_groups.is_empty() {
            write!(f, "; not in root: {}", self.extra_groups.join(", "))?;
        }
        if !self.missing_groups.is_empty() {
            write!(f, "; missing: {}", self.missing_groups.join(", "))?;
        }
        Ok(())
    }
}

/// Compare every named locale's top-level group count against root.
///
/// Produces one warning per locale whose count differs, in key order.
pub fn detect_drift(registry: &LocaleRegistry) -> Vec<StructuralDriftWarning> {
    let root = &registry.root().sidebar;

    registry
        .named()
        .filter(|locale| locale.sidebar.len() != root.len())
        .map(|locale| StructuralDriftWarning {
            locale: locale.key.clone(),
            root_groups: root.len(),
            locale_groups: locale.sidebar.len(),
            extra_groups: labels_from(&locale.sidebar, root.len()),
            missing_groups: labels_from(root, locale.sidebar.len()),
        })
        .collect()
}

fn labels_from(groups: &[SidebarGroup], position: usize) -> Vec<String> {
    groups.iter().skip(position).map(|g| g.label.clone()).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sitenav_nav::SidebarItem;

    use super::*;
    use crate::{Locale, LocaleRegistryBuilder};

    fn locale(key: LocaleKey, groups: &[&str]) -> Locale {
        let prefix = match &key {
            LocaleKey::Root => "/".to_owned(),
            LocaleKey::Named(code) => format!("/{code}/"),
        };
        let mut locale = Locale::new(key, "x", "en");
        locale.sidebar = groups
            .iter()
            .enumerate()
            .map(|(i, label)| {
                SidebarGroup::new(*label, vec![SidebarItem::link("p", format!("{prefix}{i}"))])
            })
            .collect();
        locale
    }

    fn registry(root: &[&str], named: Vec<(&str, Vec<&str>)>) -> LocaleRegistry {
        let mut builder = LocaleRegistryBuilder::new();
        builder.register(locale(LocaleKey::Root, root)).unwrap();
        for (code, groups) in named {
            builder
                .register(locale(LocaleKey::parse(code).unwrap(), &groups))
                .unwrap();
        }
        builder.finalize().unwrap()
    }

    #[test]
    fn test_matching_counts_produce_no_warning() {
        let registry = registry(&["介绍", "Reader"], vec![("en", vec!["Introduction", "Reader"])]);
        assert!(detect_drift(&registry).is_empty());
    }

    #[test]
    fn test_locale_ahead_of_root() {
        let registry = registry(
            &["介绍", "Reader", "Writer", "过滤与加工"],
            vec![(
                "en",
                vec!["Introduction", "Reader", "Writer", "Filter", "Others"],
            )],
        );

        let warnings = detect_drift(&registry);

        assert_eq!(
            warnings,
            vec![StructuralDriftWarning {
                locale: LocaleKey::parse("en").unwrap(),
                root_groups: 4,
                locale_groups: 5,
                extra_groups: vec!["Others".to_owned()],
                missing_groups: vec![],
            }]
        );
        assert_eq!(
            warnings[0].to_string(),
            "Locale en has 5 top-level sidebar groups, root has 4; not in root: Others"
        );
    }

    #[test]
    fn test_locale_behind_root() {
        let registry = registry(&["A", "B", "C"], vec![("en", vec!["A"])]);

        let warnings = detect_drift(&registry);

        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].missing_groups, vec!["B", "C"]);
        assert!(warnings[0].extra_groups.is_empty());
    }

    #[test]
    fn test_one_warning_per_drifting_locale() {
        let registry = registry(
            &["A", "B"],
            vec![
                ("en", vec!["A", "B"]),
                ("ja", vec!["A"]),
                ("zh", vec!["A", "B", "C"]),
            ],
        );

        let drifted: Vec<_> = detect_drift(&registry)
            .into_iter()
            .map(|w| w.locale.to_string())
            .collect();

        assert_eq!(drifted, vec!["ja", "zh"]);
    }
}
