//! Utility functions for CLI commands.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context as _;
use giztoy_duration::Duration;
use serde::Serialize;

use crate::Cli;

/// A converted duration as printed by the commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub input: String,
    pub nanos: i64,
    pub duration: String,
}

impl Conversion {
    pub fn new(input: impl Into<String>, d: Duration) -> Self {
        Self {
            input: input.into(),
            nanos: d.as_nanos(),
            duration: d.to_string(),
        }
    }
}

/// Loads a map of named durations from a YAML or JSON file.
///
/// Values may be duration strings or integer nanoseconds.
pub fn load_durations(path: &str) -> anyhow::Result<BTreeMap<String, Duration>> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?;
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("yaml");

    let result = match ext.to_lowercase().as_str() {
        "json" => serde_json::from_str(&content).with_context(|| format!("invalid {}", path))?,
        _ => serde_yaml::from_str(&content).with_context(|| format!("invalid {}", path))?,
    };

    Ok(result)
}

/// Renders a result as JSON or YAML.
pub fn render<T: Serialize>(result: &T, as_json: bool) -> anyhow::Result<String> {
    if as_json {
        let mut out = serde_json::to_string_pretty(result)?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(serde_yaml::to_string(result)?)
    }
}

/// Outputs result as JSON or YAML to the file or stdout chosen on the command line.
pub fn output_result<T: Serialize>(cli: &Cli, result: &T) -> anyhow::Result<()> {
    let output = render(result, cli.json)?;

    match cli.output.as_deref() {
        Some(path) => {
            std::fs::write(path, output).with_context(|| format!("failed to write {}", path))?
        }
        None => print!("{}", output),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_durations_yaml() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "connect: 5s\nread: 1m30s\nidle: 1500000000").unwrap();

        let got = load_durations(file.path().to_str().unwrap()).unwrap();
        assert_eq!(got["connect"], Duration::from_secs(5));
        assert_eq!(got["read"], Duration::from_secs(90));
        assert_eq!(got["idle"], Duration::from_millis(1500));
    }

    #[test]
    fn test_load_durations_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"poll": "250ms", "backoff": "-1.5h"}}"#).unwrap();

        let got = load_durations(file.path().to_str().unwrap()).unwrap();
        assert_eq!(got["poll"].to_string(), "250ms");
        assert_eq!(got["backoff"].as_nanos(), -5_400_000_000_000);
    }

    #[test]
    fn test_load_durations_rejects_bad_value() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "connect: 5s\nread: 1hm45mss").unwrap();

        let err = load_durations(file.path().to_str().unwrap()).unwrap_err();
        assert!(format!("{:#}", err).contains("invalid value"), "{:#}", err);
    }

    #[test]
    fn test_render() {
        let c = Conversion::new("90s", Duration::from_secs(90));

        let json = render(&c, true).unwrap();
        assert!(json.contains(r#""duration": "1m30s""#), "{}", json);
        assert!(json.contains(r#""nanos": 90000000000"#), "{}", json);

        let yaml = render(&c, false).unwrap();
        assert!(yaml.contains("duration: 1m30s"), "{}", yaml);
    }
}
