//! Parse command.

use anyhow::Context as _;
use clap::Args;
use giztoy_duration::Duration;
use tracing::debug;

use super::{output_result, Conversion};
use crate::Cli;

/// Parse duration strings into nanoseconds.
#[derive(Args)]
pub struct ParseCommand {
    /// Duration strings, e.g. 300ms, -1.5h, 2h45m
    #[arg(required = true, allow_hyphen_values = true)]
    pub inputs: Vec<String>,
}

impl ParseCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let results = self
            .inputs
            .iter()
            .map(|input| {
                let d: Duration = input
                    .parse()
                    .with_context(|| format!("cannot parse {:?}", input))?;
                debug!(input = %input, nanos = d.as_nanos(), "parsed duration");
                Ok(Conversion::new(input.as_str(), d))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        output_result(cli, &results)
    }
}
