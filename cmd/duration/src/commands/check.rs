//! Check command.

use std::collections::BTreeMap;

use clap::Args;
use tracing::info;

use super::{load_durations, output_result};
use crate::Cli;

/// Validate and normalize a file of named durations.
///
/// The file is a YAML or JSON map such as:
///
/// ```yaml
/// connect: 5s
/// read: 90s
/// idle: 1500000000   # integer nanoseconds
/// ```
///
/// Prints the same map with every value in canonical form.
#[derive(Args)]
pub struct CheckCommand {
    /// Input file (YAML or JSON)
    #[arg(short = 'f', long = "file")]
    pub file: String,
}

impl CheckCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let durations = load_durations(&self.file)?;
        info!(file = %self.file, count = durations.len(), "loaded durations");

        let normalized: BTreeMap<&str, String> = durations
            .iter()
            .map(|(name, d)| (name.as_str(), d.to_string()))
            .collect();

        output_result(cli, &normalized)
    }
}
