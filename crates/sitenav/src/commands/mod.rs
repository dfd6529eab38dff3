//! CLI command implementations.

mod build;
mod check;

use std::path::PathBuf;

use clap::Args;
use sitenav_config::{CliSettings, Config};
use sitenav_site::{Composition, build_site};

use crate::error::CliError;
use crate::output::Output;

pub(crate) use build::BuildArgs;
pub(crate) use check::CheckArgs;

/// Arguments shared by `build` and `check`.
#[derive(Args)]
pub(crate) struct SourceArgs {
    /// Path to configuration file (default: auto-discover sitenav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Site base path (overrides config).
    #[arg(long, env = "SITENAV_BASE_PATH")]
    base_path: Option<String>,

    /// Markdown source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

impl SourceArgs {
    /// Load the config and compose the site, reporting drift warnings.
    fn compose(
        &self,
        output: &Output,
        output_path: Option<PathBuf>,
    ) -> Result<(Config, Composition), CliError> {
        let cli_settings = CliSettings {
            base_path: self.base_path.clone(),
            source_dir: self.source_dir.clone(),
            output_path,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        if let Some(path) = &config.config_path {
            output.field("Config", path.display());
        }
        tracing::debug!(
            source_dir = %config.source_dir_resolved.display(),
            base_path = %config.site.base_path,
            "Resolved configuration"
        );

        let composition = build_site(&config.site_settings(), config.locale_specs()?)?;

        for warning in &composition.warnings {
            output.drift(warning);
        }

        Ok((config, composition))
    }
}
