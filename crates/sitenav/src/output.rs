//! Colored terminal output for build reports.
//!
//! Everything goes to stderr; stdout is reserved for `build --stdout`.

use console::{Style, Term};
use sitenav_site::{SiteConfig, StructuralDriftWarning};

/// Terminal output formatter.
pub(crate) struct Output {
    term: Term,
    green: Style,
    yellow: Style,
    red: Style,
    heading: Style,
    dim: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
            heading: Style::new().cyan().bold(),
            dim: Style::new().dim(),
        }
    }

    fn line(&self, msg: &str) {
        let _ = self.term.write_line(msg);
    }

    /// Print a `label: value` line with a dimmed label.
    pub(crate) fn field(&self, label: &str, value: impl std::fmt::Display) {
        self.line(&format!("{} {value}", self.dim.apply_to(format!("{label}:"))));
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        self.line(&self.green.apply_to(msg).to_string());
    }

    /// Print a structural drift warning (yellow).
    pub(crate) fn drift(&self, warning: &StructuralDriftWarning) {
        self.line(&self.yellow.apply_to(format!("Warning: {warning}")).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        self.line(&self.red.apply_to(msg).to_string());
    }

    /// Print the site title followed by one summary line per locale.
    pub(crate) fn site_summary(&self, site: &SiteConfig) {
        self.line(
            &self
                .heading
                .apply_to(format!("{} ({})", site.title(), site.base_path()))
                .to_string(),
        );
        for locale in site.locales().iter() {
            self.line(&format!(
                "  {:<8} {} nav, {} sidebar group(s)  {}",
                locale.key.as_str(),
                locale.nav.len(),
                locale.sidebar.len(),
                self.dim.apply_to(&locale.language_tag)
            ));
        }
    }
}
