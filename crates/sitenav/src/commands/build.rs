//! `sitenav build` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use sitenav_site::SiteConfig;

use super::SourceArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output file for the site config JSON (default: .sitenav/site.json).
    #[arg(short, long, conflicts_with = "stdout")]
    output: Option<PathBuf>,

    /// Write the site config JSON to stdout instead of a file.
    #[arg(long)]
    stdout: bool,
}

impl BuildArgs {
    pub(crate) fn verbose(&self) -> bool {
        self.source.verbose
    }

    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let (config, composition) = self.source.compose(output, self.output.clone())?;
        let json = render_json(&composition.config, config.output_resolved.pretty)?;

        if self.stdout {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
            return Ok(());
        }

        let path = &config.output_resolved.path;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &json)?;
        tracing::debug!(path = %path.display(), bytes = json.len(), "Wrote site config");

        output.field("Output", path.display());
        output.success(&format!(
            "Site config for {} locale(s) written",
            composition.config.locales().len()
        ));
        Ok(())
    }
}

/// Serialize the site config as JSON.
fn render_json(config: &SiteConfig, pretty: bool) -> Result<String, CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(config)?
    } else {
        serde_json::to_string(config)?
    };
    Ok(json)
}
