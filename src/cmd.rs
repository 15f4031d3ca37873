//! Command dispatch for the `techcalc` binary.
//!
//! Kept out of `main.rs` so it can be tested.

use crate::config::{parse_band_counts, Config, OutputFormat};
use crate::error::{Error, ResistorError};
use crate::models::{BandColor, Cidr, Radix, ResistorBandSet};
use crate::output;
use crate::processing;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

pub const USAGE: &str = "\
techcalc subnet <ip>/<prefix> | <ip> <prefix>
techcalc mask <prefix> | <dotted mask>
techcalc base <value> <bin|dec|hex>
techcalc bands <color> <color> <color> <color> [<color> [<color>]]
techcalc encode <value> [<tolerance %>] [<band counts, e.g. 4,5,6>]";

/// Run one command, returning the text to print.
pub fn run(args: &[&str], config: &Config) -> Result<String, Error> {
    let (command, rest) = args
        .split_first()
        .ok_or_else(|| Error::Usage(USAGE.to_string()))?;
    log::debug!("run({command}, {rest:?})");

    match *command {
        "subnet" => subnet(rest, config),
        "mask" => mask(rest),
        "base" => base(rest, config),
        "bands" => bands(rest, config),
        "encode" => encode(rest, config),
        other => Err(Error::Usage(format!("unknown command {other:?}\n{USAGE}"))),
    }
}

/// Split a command line into words, keeping 'quoted words' together.
pub fn split_and_strip(input: &str) -> Vec<&str> {
    RE.find_iter(input)
        .map(|m| m.as_str().trim().trim_matches('\'').trim_matches('"'))
        .filter(|word| !word.is_empty())
        .collect()
}
lazy_static! {
    static ref RE: Regex =
        Regex::new(r#"'([^']*)'\s*|\"([^\"]*)\"\s*|([^'\s]*)\s*"#).expect("Invalid Regex?");
}

fn render<T: Serialize>(
    value: &T,
    config: &Config,
    terminal: impl FnOnce(&T) -> String,
    csv: impl FnOnce(&T) -> String,
) -> Result<String, Error> {
    match config.output {
        OutputFormat::Terminal => Ok(terminal(value)),
        OutputFormat::Csv => Ok(csv(value)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)? + "\n"),
    }
}

fn subnet(args: &[&str], config: &Config) -> Result<String, Error> {
    let cidr: Cidr = match args {
        [cidr] => cidr.parse()?,
        [ip, prefix] => format!("{ip}/{prefix}").parse()?,
        _ => return Err(Error::Usage("subnet <ip>/<prefix>".to_string())),
    };
    let report = processing::subnet_report_for(&cidr)?;
    render(
        &report,
        config,
        output::render_subnet_report,
        output::subnet_report_csv,
    )
}

fn mask(args: &[&str]) -> Result<String, Error> {
    let [arg] = args else {
        return Err(Error::Usage("mask <prefix> | <dotted mask>".to_string()));
    };
    if arg.contains('.') {
        let prefix = processing::mask_to_cidr(arg)?;
        return Ok(format!("/{prefix}\n"));
    }
    let prefix: u8 = arg
        .trim_start_matches('/')
        .parse()
        .map_err(|_| Error::Usage(format!("{arg:?} is not a prefix length")))?;
    Ok(format!(
        "mask {} wildcard {}\n",
        processing::cidr_to_mask(prefix)?,
        processing::cidr_to_wildcard(prefix)?
    ))
}

fn base(args: &[&str], config: &Config) -> Result<String, Error> {
    let [value, radix] = args else {
        return Err(Error::Usage("base <value> <bin|dec|hex>".to_string()));
    };
    let radix: Radix = radix.parse()?;
    // Report the parse failure itself rather than a bare "invalid".
    processing::parse_in_base(value, radix)?;
    let conversions = processing::convert_all(value, radix).unwrap_or_default();
    let chunk_bits = config.chunk_bits;
    render(
        &conversions,
        config,
        |c| output::render_conversions(c, chunk_bits),
        output::conversions_csv,
    )
}

fn bands(args: &[&str], config: &Config) -> Result<String, Error> {
    let colors = args
        .iter()
        .map(|name| name.parse::<BandColor>())
        .collect::<Result<Vec<BandColor>, ResistorError>>()?;
    let (set, count) = ResistorBandSet::from_colors(&colors)?;
    let value = processing::decode(&set, count);
    render(
        &value,
        config,
        |v| {
            format!(
                "{}\n{}",
                output::render_bands(&set.physical(count)),
                output::render_resistor_value(v)
            )
        },
        output::resistor_value_csv,
    )
}

fn encode(args: &[&str], config: &Config) -> Result<String, Error> {
    let (value, rest) = args
        .split_first()
        .ok_or_else(|| Error::Usage("encode <value> [<tolerance %>] [<counts>]".to_string()))?;
    let tolerance = match rest.first() {
        Some(t) => Some(
            t.trim_end_matches('%')
                .parse::<f64>()
                .map_err(|_| Error::Usage(format!("{t:?} is not a tolerance")))?,
        ),
        None => None,
    };
    let counts = match rest.get(1) {
        Some(counts) => parse_band_counts(counts)
            .ok_or_else(|| Error::Usage(format!("{counts:?} is not a list of 4, 5 or 6")))?,
        None => config.band_counts.clone(),
    };

    let ohms = processing::parse_value(value)?;
    let encoded = processing::encode(ohms, tolerance, &counts)?;
    render(
        &encoded,
        config,
        |e| {
            format!(
                "{} ({}{})\n",
                output::render_bands(&e.bands.physical(e.band_count)),
                e.band_count,
                if e.approximate { ", approximate" } else { "" }
            )
        },
        output::encoded_bands_csv,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terminal() -> Config {
        colored::control::set_override(false);
        Config::default()
    }

    #[test]
    fn test_split_and_strip_complex() {
        let input = "bands brown  'black' red \"gold\"";
        let expected = vec!["bands", "brown", "black", "red", "gold"];
        assert_eq!(split_and_strip(input), expected);
    }

    #[test]
    fn test_split_and_strip_nospaces() {
        assert_eq!(split_and_strip("NoSpacesHere"), vec!["NoSpacesHere"]);
        assert!(split_and_strip("   ").is_empty());
    }

    #[test]
    fn test_run_subnet() {
        let out = run(&["subnet", "192.168.1.100/24"], &terminal()).unwrap();
        assert!(out.contains("192.168.1.0/24"));
        let out = run(&["subnet", "192.168.1.100", "24"], &terminal()).unwrap();
        assert!(out.contains("Usable hosts: 254"));
        assert!(matches!(
            run(&["subnet", "192.168.1.100/40"], &terminal()),
            Err(Error::Subnet(_))
        ));
    }

    #[test]
    fn test_run_mask() {
        assert_eq!(
            run(&["mask", "/20"], &terminal()).unwrap(),
            "mask 255.255.240.0 wildcard 0.0.15.255\n"
        );
        assert_eq!(run(&["mask", "255.255.255.0"], &terminal()).unwrap(), "/24\n");
    }

    #[test]
    fn test_run_base_json() {
        let config = Config {
            output: OutputFormat::Json,
            ..Config::default()
        };
        let out = run(&["base", "42", "dec"], &config).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["hexadecimal"], "2A");
        assert_eq!(json["binary"], "101010");
        assert!(matches!(
            run(&["base", "xyz", "dec"], &config),
            Err(Error::Base(_))
        ));
    }

    #[test]
    fn test_run_bands() {
        let out = run(&["bands", "brown", "black", "red", "gold"], &terminal()).unwrap();
        assert!(out.starts_with("brown black red gold\n"));
        assert!(out.contains("1 kΩ"));
        assert!(matches!(
            run(&["bands", "brown", "pink", "red", "gold"], &terminal()),
            Err(Error::Resistor(ResistorError::UnknownColor(_)))
        ));
    }

    #[test]
    fn test_run_encode() {
        let out = run(&["encode", "1234", "5", "4"], &terminal()).unwrap();
        assert_eq!(out, "brown red red gold (4-band, approximate)\n");
        let out = run(&["encode", "4k7", "5", "4"], &terminal()).unwrap();
        assert_eq!(out, "yellow violet red gold (4-band)\n");
        assert!(matches!(
            run(&["encode", "1k", "7%", "4"], &terminal()),
            Err(Error::Resistor(ResistorError::UnsupportedTolerance(_)))
        ));
    }

    #[test]
    fn test_run_usage() {
        assert!(matches!(run(&[], &terminal()), Err(Error::Usage(_))));
        assert!(matches!(run(&["ping"], &terminal()), Err(Error::Usage(_))));
    }
}
