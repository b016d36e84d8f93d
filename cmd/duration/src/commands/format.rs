//! Format command.

use clap::Args;
use giztoy_duration::Duration;
use tracing::debug;

use super::{output_result, Conversion};
use crate::Cli;

/// Format nanosecond counts as duration strings.
#[derive(Args)]
pub struct FormatCommand {
    /// Nanosecond counts, may be negative
    #[arg(required = true, allow_negative_numbers = true)]
    pub nanos: Vec<i64>,
}

impl FormatCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let results: Vec<Conversion> = self
            .nanos
            .iter()
            .map(|&nanos| {
                let d = Duration::from_nanos(nanos);
                debug!(nanos, duration = %d, "formatted duration");
                Conversion::new(nanos.to_string(), d)
            })
            .collect();

        output_result(cli, &results)
    }
}
