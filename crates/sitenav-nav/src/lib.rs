//! Navigation model for sitenav.
//!
//! This crate holds the per-locale building blocks of a documentation
//! site's navigation:
//!
//! - [`NavLink`] / [`LinkTarget`]: a labelled internal path or external URL
//! - [`SidebarGroup`] / [`SidebarItem`]: the nested sidebar tree
//! - [`LocaleKey`] / [`BasePath`]: where a locale is served, which fixes
//!   the prefix its internal links must carry
//! - [`SectionBuilder`]: turns declarative nav entries and group specs
//!   into a validated nav and sidebar
//!
//! Validation is pure and fail-fast. The first problem is returned as a
//! [`NavError`] naming the locale and the offending entry.
//!
//! # Example
//!
//! ```
//! use sitenav_nav::{flatten_links, BasePath, GroupSpec, ItemSpec, LocaleKey, SectionBuilder};
//!
//! let base = BasePath::parse("/RedisShake/").unwrap();
//! let builder = SectionBuilder::new(LocaleKey::Root).with_base_path(base);
//!
//! let sidebar = builder
//!     .build_sidebar(vec![GroupSpec::new(
//!         "Reader",
//!         vec![
//!             ItemSpec::link("Sync Reader", "/RedisShake/reader/sync_reader"),
//!             ItemSpec::link("Scan Reader", "/RedisShake/reader/scan_reader"),
//!         ],
//!     )])
//!     .unwrap();
//!
//! assert_eq!(flatten_links(&sidebar).count(), 2);
//! ```

mod builder;
mod error;
mod link;
mod locale;
mod sidebar;

pub use builder::{GroupSpec, ItemSpec, NavEntry, SectionBuilder, check_nav};
pub use error::{LinkProblem, NavError};
pub use link::{LinkTarget, NavLink, validate_link};
pub use locale::{BasePath, LocaleCode, LocaleKey};
pub use sidebar::{FlattenLinks, SidebarGroup, SidebarItem, flatten_links, validate_sidebar};
