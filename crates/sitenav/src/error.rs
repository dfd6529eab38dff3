//! CLI error types.

use sitenav_config::ConfigError;
use sitenav_site::SiteError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Site(#[from] SiteError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize site config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0} structural drift warning(s) reported")]
    Warnings(usize),
}
