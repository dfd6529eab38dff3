//! Configuration management for sitenav.
//!
//! Parses `sitenav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. Files written
//! for older schema versions are migrated on load up to
//! [`CURRENT_SCHEMA_VERSION`].
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.title`
//! - `site.description`
//! - `site.base_path`
//! - `theme.edit_link_pattern`
//! - `theme.social_links[].link`

mod expand;
mod schema;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use sitenav_nav::{GroupSpec, ItemSpec, NavEntry};
use sitenav_site::{Footer, LocaleSpec, SiteSettings, SocialLink, ThemeSettings};

pub use schema::CURRENT_SCHEMA_VERSION;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override site base path.
    pub base_path: Option<String>,
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override output file for the composed site config.
    pub output_path: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "sitenav.toml";

/// Source directory used when `site.source_dir` is not set.
const DEFAULT_SOURCE_DIR: &str = "docs";

/// Application configuration (current schema version).
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Schema version; always [`CURRENT_SCHEMA_VERSION`] after loading.
    pub schema_version: u32,
    /// Site-wide settings.
    pub site: SiteSection,
    /// Theme options shared by all locales.
    pub theme: ThemeSection,
    /// Output configuration (paths are relative strings from TOML).
    output: OutputConfigRaw,
    /// Locales keyed by `root` or language code.
    pub locales: BTreeMap<String, LocaleSection>,

    /// Resolved source directory (set after loading).
    #[serde(skip)]
    pub source_dir_resolved: PathBuf,
    /// Source directory as written in the config file or on the command
    /// line. Emitted in the site config so the output does not depend on
    /// where the project is checked out.
    #[serde(skip)]
    pub source_dir_configured: PathBuf,
    /// Resolved output configuration (set after loading).
    #[serde(skip)]
    pub output_resolved: OutputConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// `[site]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
    /// Base path the site is served under.
    pub base_path: String,
    /// Markdown source directory, relative to the config file.
    pub source_dir: Option<String>,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            base_path: "/".to_owned(),
            source_dir: None,
        }
    }
}

/// `[theme]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ThemeSection {
    pub social_links: Vec<SocialLinkSection>,
    pub edit_link_pattern: Option<String>,
    pub last_updated_format: Option<String>,
}

/// Entry of `theme.social_links`.
#[derive(Debug, Deserialize)]
pub struct SocialLinkSection {
    pub icon: String,
    pub link: String,
}

/// Raw output configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct OutputConfigRaw {
    path: Option<String>,
    pretty: Option<bool>,
}

/// Resolved output configuration with absolute paths.
#[derive(Debug, Default)]
pub struct OutputConfig {
    /// File the composed site config is written to.
    pub path: PathBuf,
    /// Whether JSON output is pretty-printed.
    pub pretty: bool,
}

/// `[locales.<key>]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LocaleSection {
    /// Name shown in the language switcher.
    pub label: String,
    /// BCP-47 language tag.
    pub language_tag: String,
    pub description: Option<String>,
    pub edit_link_text: Option<String>,
    pub nav: Vec<NavEntrySection>,
    pub sidebar: Vec<SidebarEntrySection>,
    pub footer: Option<FooterSection>,
}

/// Top nav entry.
#[derive(Debug, PartialEq, Eq, Deserialize)]
pub struct NavEntrySection {
    pub label: String,
    pub target: String,
}

/// Sidebar entry: a link when `target` is set, a group when `children` is.
#[derive(Debug, PartialEq, Eq, Deserialize)]
pub struct SidebarEntrySection {
    pub label: String,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub children: Option<Vec<SidebarEntrySection>>,
}

/// `[locales.<key>.footer]` section.
#[derive(Debug, Deserialize)]
pub struct FooterSection {
    pub message: Option<String>,
    pub copyright: Option<String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.base_path`").
        field: String,
        /// Error message (e.g., "${`DOCS_BASE`} not set").
        message: String,
    },
    /// Schema version newer than this build understands.
    #[error(
        "Unsupported configuration schema version {0} (latest supported is {CURRENT_SCHEMA_VERSION})"
    )]
    UnsupportedSchema(u32),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `sitenav.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, no config file
    /// can be discovered, or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let path = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                path.to_path_buf()
            }
            None => Self::discover_config().ok_or_else(|| {
                ConfigError::NotFound(PathBuf::from(CONFIG_FILENAME))
            })?,
        };

        let mut config = Self::load_from_file(&path)?;

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(base_path) = &settings.base_path {
            self.site.base_path.clone_from(base_path);
        }
        if let Some(source_dir) = &settings.source_dir {
            self.source_dir_resolved.clone_from(source_dir);
            self.source_dir_configured.clone_from(source_dir);
        }
        if let Some(output_path) = &settings.output_path {
            self.output_resolved.path.clone_from(output_path);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_config_from(current)
    }

    fn discover_config_from(mut current: PathBuf) -> Option<PathBuf> {
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            site: SiteSection::default(),
            theme: ThemeSection::default(),
            output: OutputConfigRaw::default(),
            locales: BTreeMap::new(),
            source_dir_resolved: base.join(DEFAULT_SOURCE_DIR),
            source_dir_configured: PathBuf::from(DEFAULT_SOURCE_DIR),
            output_resolved: OutputConfig {
                path: base.join(".sitenav").join("site.json"),
                pretty: true,
            },
            config_path: None,
        }
    }

    /// Parse configuration from a TOML string, migrating older schemas.
    ///
    /// Paths are resolved against `config_dir`. No environment expansion
    /// or validation is performed.
    pub fn from_toml(content: &str, config_dir: &Path) -> Result<Self, ConfigError> {
        let mut config = schema::parse(content)?;
        config.resolve_paths(config_dir);
        Ok(config)
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = schema::parse(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        tracing::debug!(
            path = %path.display(),
            locales = config.locales.len(),
            "Loaded configuration"
        );

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks the structure of the file. Link, locale, and nav rules are
    /// enforced when the site is composed.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;

        if self.locales.is_empty() {
            return Err(ConfigError::Validation(
                "at least one [locales.<key>] section is required".to_owned(),
            ));
        }

        for (key, locale) in &self.locales {
            require_non_empty(&locale.language_tag, &format!("locales.{key}.language_tag"))?;
            for (i, entry) in locale.sidebar.iter().enumerate() {
                let field = format!("locales.{key}.sidebar[{i}]");
                if entry.children.is_none() {
                    return Err(ConfigError::Validation(format!(
                        "{field} must be a group with children"
                    )));
                }
                check_entry_shape(entry, &field)?;
            }
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        expand::expand_in_place(&mut self.site.title, "site.title")?;
        expand::expand_in_place(&mut self.site.description, "site.description")?;
        expand::expand_in_place(&mut self.site.base_path, "site.base_path")?;

        if let Some(pattern) = &mut self.theme.edit_link_pattern {
            expand::expand_in_place(pattern, "theme.edit_link_pattern")?;
        }

        for (i, social) in self.theme.social_links.iter_mut().enumerate() {
            expand::expand_in_place(&mut social.link, &format!("theme.social_links[{i}].link"))?;
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.source_dir_configured =
            PathBuf::from(self.site.source_dir.as_deref().unwrap_or(DEFAULT_SOURCE_DIR));
        self.source_dir_resolved = config_dir.join(&self.source_dir_configured);
        self.output_resolved = OutputConfig {
            path: config_dir.join(
                self.output
                    .path
                    .as_deref()
                    .unwrap_or(".sitenav/site.json"),
            ),
            pretty: self.output.pretty.unwrap_or(true),
        };
    }

    /// Site-wide settings for composition.
    pub fn site_settings(&self) -> SiteSettings {
        SiteSettings {
            title: self.site.title.clone(),
            description: self.site.description.clone(),
            base_path: self.site.base_path.clone(),
            source_dir: self.source_dir_configured.clone(),
            theme: ThemeSettings {
                social_links: self
                    .theme
                    .social_links
                    .iter()
                    .map(|social| SocialLink {
                        icon: social.icon.clone(),
                        link: social.link.clone(),
                    })
                    .collect(),
                edit_link_pattern: self.theme.edit_link_pattern.clone(),
                last_updated_format: self.theme.last_updated_format.clone(),
            },
        }
    }

    /// Declarative locale specs, in key order.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if a sidebar entry is neither a
    /// link nor a group.
    pub fn locale_specs(&self) -> Result<Vec<LocaleSpec>, ConfigError> {
        self.locales
            .iter()
            .map(|(key, locale)| -> Result<LocaleSpec, ConfigError> {
                let sidebar = locale
                    .sidebar
                    .iter()
                    .enumerate()
                    .map(|(i, entry)| {
                        let field = format!("locales.{key}.sidebar[{i}]");
                        match to_item_spec(entry, &field)? {
                            ItemSpec::Group(group) => Ok(group),
                            ItemSpec::Link { .. } => Err(ConfigError::Validation(format!(
                                "{field} must be a group with children"
                            ))),
                        }
                    })
                    .collect::<Result<Vec<GroupSpec>, ConfigError>>()?;

                Ok(LocaleSpec {
                    key: key.clone(),
                    label: locale.label.clone(),
                    language_tag: locale.language_tag.clone(),
                    description: locale.description.clone(),
                    nav: locale
                        .nav
                        .iter()
                        .map(|entry| NavEntry::new(entry.label.clone(), entry.target.clone()))
                        .collect(),
                    sidebar,
                    footer: locale.footer.as_ref().map(|footer| Footer {
                        message: footer.message.clone(),
                        copyright: footer.copyright.clone(),
                    }),
                    edit_link_text: locale.edit_link_text.clone(),
                })
            })
            .collect()
    }
}

/// Check that an entry is either a link or a group, recursively.
fn check_entry_shape(entry: &SidebarEntrySection, field: &str) -> Result<(), ConfigError> {
    to_item_spec(entry, field).map(|_| ())
}

fn to_item_spec(entry: &SidebarEntrySection, field: &str) -> Result<ItemSpec, ConfigError> {
    match (&entry.target, &entry.children) {
        (Some(target), None) => Ok(ItemSpec::link(entry.label.clone(), target.clone())),
        (None, Some(children)) => {
            let items = children
                .iter()
                .enumerate()
                .map(|(i, child)| to_item_spec(child, &format!("{field}.children[{i}]")))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(ItemSpec::group(entry.label.clone(), items))
        }
        (Some(_), Some(_)) => Err(ConfigError::Validation(format!(
            "{field} (\"{}\") cannot have both target and children",
            entry.label
        ))),
        (None, None) => Err(ConfigError::Validation(format!(
            "{field} (\"{}\") needs a target or children",
            entry.label
        ))),
    }
}
