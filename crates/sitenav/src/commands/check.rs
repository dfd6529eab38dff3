//! `sitenav check` command implementation.

use clap::Args;

use super::SourceArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Treat structural drift warnings as errors.
    #[arg(long)]
    deny_warnings: bool,
}

impl CheckArgs {
    pub(crate) fn verbose(&self) -> bool {
        self.source.verbose
    }

    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let (_, composition) = self.source.compose(output, None)?;
        output.site_summary(&composition.config);

        if self.deny_warnings && !composition.warnings.is_empty() {
            return Err(CliError::Warnings(composition.warnings.len()));
        }

        output.success("Site config is valid");
        Ok(())
    }
}
