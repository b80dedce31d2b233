//! Driver configuration.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// How summaries are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One report line per workout.
    #[default]
    Text,
    /// One JSON object per workout.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Configuration for the summary driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverConfig {
    /// JSON feed to read. The built-in sample feed is used when absent.
    pub feed_path: Option<PathBuf>,

    pub output: OutputFormat,

    /// Number of generated workouts appended to the feed.
    pub generate: usize,

    /// Seed for generated workouts.
    pub seed: Option<u64>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            feed_path: None,
            output: OutputFormat::Text,
            generate: 0,
            seed: None,
        }
    }
}

impl DriverConfig {
    /// Reads `WORKOUT_FEED`, `WORKOUT_OUTPUT`, `WORKOUT_GENERATE` and `WORKOUT_SEED`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Bad values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            feed_path: lookup("WORKOUT_FEED")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
            output: parse_or("WORKOUT_OUTPUT", &lookup, defaults.output),
            generate: parse_or("WORKOUT_GENERATE", &lookup, defaults.generate),
            seed: lookup("WORKOUT_SEED").and_then(|raw| match raw.parse() {
                Ok(seed) => Some(seed),
                Err(_) => {
                    warn!("Ignoring invalid WORKOUT_SEED: {raw}");
                    None
                }
            }),
        }
    }
}

fn parse_or<T: FromStr>(key: &str, lookup: &impl Fn(&str) -> Option<String>, default: T) -> T {
    match lookup(key) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {key}: {raw}");
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = DriverConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, DriverConfig::default());
    }

    #[test]
    fn test_reads_all_keys() {
        let config = DriverConfig::from_lookup(lookup_from(&[
            ("WORKOUT_FEED", "feed.json"),
            ("WORKOUT_OUTPUT", "JSON"),
            ("WORKOUT_GENERATE", "10"),
            ("WORKOUT_SEED", "42"),
        ]));

        assert_eq!(config.feed_path, Some(PathBuf::from("feed.json")));
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.generate, 10);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = DriverConfig::from_lookup(lookup_from(&[
            ("WORKOUT_OUTPUT", "xml"),
            ("WORKOUT_GENERATE", "many"),
            ("WORKOUT_SEED", "-1"),
        ]));

        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.generate, 0);
        assert_eq!(config.seed, None);
    }
}
