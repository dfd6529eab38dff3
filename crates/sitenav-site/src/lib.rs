//! Locale registry and site composition for sitenav.
//!
//! This crate provides:
//! - [`Locale`]: one language variant with its nav, sidebar, and footer
//! - [`LocaleRegistry`]: locales keyed by [`LocaleKey`](sitenav_nav::LocaleKey),
//!   with a root locale guaranteed by construction and fallback to it
//! - [`compose`]: merges site settings with the registry into a validated
//!   [`SiteConfig`]
//! - [`build_site`]: the whole pipeline from declarative [`LocaleSpec`]s
//!
//! The output [`SiteConfig`] serializes to the JSON consumed by the
//! external renderer. Identical input produces identical output.

mod composer;
mod drift;
mod error;
mod locale;
mod registry;
mod site;

pub use composer::{Composition, SiteConfig, SiteSettings, SocialLink, ThemeSettings, compose};
pub use drift::{StructuralDriftWarning, detect_drift};
pub use error::SiteError;
pub use locale::{Footer, Locale};
pub use registry::{LocaleRegistry, LocaleRegistryBuilder};
pub use site::{LocaleSpec, build_site};
