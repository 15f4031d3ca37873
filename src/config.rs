//! Command line configuration.
//!
//! Read from the environment after `.env` has been loaded. Bad values are
//! logged and replaced by the defaults.

use crate::models::BandCount;
use std::str::FromStr;

pub const ENV_OUTPUT: &str = "TECHCALC_OUTPUT";
pub const ENV_CHUNK_BITS: &str = "TECHCALC_CHUNK_BITS";
pub const ENV_BAND_COUNTS: &str = "TECHCALC_BAND_COUNTS";
pub const ENV_LOG_CONFIG: &str = "TECHCALC_LOG_CONFIG";

pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "terminal" | "text" => Ok(OutputFormat::Terminal),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format {other:?}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub output: OutputFormat,
    /// Bits per display group for binary and hex output.
    pub chunk_bits: usize,
    /// Band counts tried, in order, when encoding a value.
    pub band_counts: Vec<BandCount>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output: OutputFormat::Terminal,
            chunk_bits: 8,
            band_counts: BandCount::ALL.to_vec(),
        }
    }
}

impl Config {
    /// Build from process environment variables.
    pub fn from_env() -> Config {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup, so tests need not touch the environment.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(output) = lookup(ENV_OUTPUT) {
            match output.parse() {
                Ok(output) => config.output = output,
                Err(e) => log::warn!("{ENV_OUTPUT}: {e}, using {:?}", config.output),
            }
        }

        if let Some(bits) = lookup(ENV_CHUNK_BITS) {
            match bits.trim().parse::<usize>() {
                Ok(bits) if bits > 0 => config.chunk_bits = bits,
                _ => log::warn!(
                    "{ENV_CHUNK_BITS}: {bits:?} is not a positive number, using {}",
                    config.chunk_bits
                ),
            }
        }

        if let Some(counts) = lookup(ENV_BAND_COUNTS) {
            match parse_band_counts(&counts) {
                Some(counts) => config.band_counts = counts,
                None => log::warn!("{ENV_BAND_COUNTS}: {counts:?} is not a list of 4, 5 or 6"),
            }
        }

        log::debug!("config: {config:?}");
        config
    }
}

/// Path of the log4rs file. Read on its own because logging has to be up
/// before [`Config`] can report bad values.
pub fn log_config_path<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(ENV_LOG_CONFIG).unwrap_or_else(|| DEFAULT_LOG_CONFIG.to_string())
}

/// Parse a comma separated band count list such as `"5,4"`.
pub fn parse_band_counts(s: &str) -> Option<Vec<BandCount>> {
    let counts = s
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<u8>()
                .ok()
                .and_then(|n| BandCount::try_from(n).ok())
        })
        .collect::<Option<Vec<BandCount>>>()?;
    if counts.is_empty() {
        None
    } else {
        Some(counts)
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
    fn test_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.chunk_bits, 8);
        assert_eq!(config.band_counts, BandCount::ALL.to_vec());
    }

    #[test]
    fn test_from_lookup() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_OUTPUT, "JSON"),
            (ENV_CHUNK_BITS, "4"),
            (ENV_BAND_COUNTS, "5, 4"),
        ]));
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.chunk_bits, 4);
        assert_eq!(config.band_counts, vec![BandCount::Five, BandCount::Four]);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_OUTPUT, "xml"),
            (ENV_CHUNK_BITS, "0"),
            (ENV_BAND_COUNTS, "4,7"),
        ]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_log_config_path() {
        assert_eq!(log_config_path(|_| None), DEFAULT_LOG_CONFIG);
        let lookup = lookup_from(&[(ENV_LOG_CONFIG, "/etc/techcalc/log4rs.yml")]);
        assert_eq!(log_config_path(lookup), "/etc/techcalc/log4rs.yml");
    }

    #[test]
    fn test_parse_band_counts() {
        assert_eq!(parse_band_counts("6"), Some(vec![BandCount::Six]));
        assert_eq!(parse_band_counts(""), None);
        assert_eq!(parse_band_counts("4,,5"), None);
    }
}
