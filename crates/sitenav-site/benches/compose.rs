//! Benchmarks for site composition.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sitenav_nav::{GroupSpec, ItemSpec, NavEntry};
use sitenav_site::{LocaleSpec, SiteSettings, build_site};

/// Locale with `groups` top-level groups of `pages` links each.
fn locale_spec(key: &str, groups: usize, pages: usize) -> LocaleSpec {
    let prefix = if key == "root" {
        "/docs/".to_owned()
    } else {
        format!("/docs/{key}/")
    };

    let sidebar = (0..groups)
        .map(|g| {
            let items = (0..pages)
                .map(|p| {
                    ItemSpec::link(format!("Page {p}"), format!("{prefix}section-{g}/page-{p}"))
                })
                .collect();
            GroupSpec::new(format!("Section {g}"), items)
        })
        .collect();

    LocaleSpec {
        key: key.to_owned(),
        label: key.to_owned(),
        language_tag: "en".to_owned(),
        nav: vec![
            NavEntry::new("Home", prefix.clone()),
            NavEntry::new("Guide", format!("{prefix}section-0/page-0")),
        ],
        sidebar,
        ..LocaleSpec::default()
    }
}

fn bench_build_site(c: &mut Criterion) {
    let settings = SiteSettings {
        title: "Docs".to_owned(),
        base_path: "/docs/".to_owned(),
        ..SiteSettings::default()
    };

    let mut group = c.benchmark_group("build_site");

    for pages in [10, 100] {
        group.bench_with_input(BenchmarkId::new("locales_3", pages), &pages, |b, &pages| {
            b.iter(|| {
                let locales = ["root", "en", "zh"]
                    .into_iter()
                    .map(|key| locale_spec(key, 8, pages))
                    .collect();
                build_site(&settings, locales).unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_site);
criterion_main!(benches);
