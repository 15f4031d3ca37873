//! Reading human-entered resistance values such as `"4.7k"`, `"4k7"` or
//! `"220 ohms"`.

use crate::error::ResistorError;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref UNIT: Regex = Regex::new(r"(?i)\s*(ohms?|Ω)$").expect("Invalid Regex?");
    static ref TRAILING_SUFFIX: Regex =
        Regex::new(r"^(\d+(?:\.\d+)?|\.\d+)\s*([TGMkK])?$").expect("Invalid Regex?");
    static ref EMBEDDED_SUFFIX: Regex =
        Regex::new(r"^(\d+)([TGMkK])(\d+)$").expect("Invalid Regex?");
}

fn suffix_multiplier(suffix: &str) -> f64 {
    match suffix {
        "T" => 1e12,
        "G" => 1e9,
        "M" => 1e6,
        "k" | "K" => 1e3,
        _ => 1.0,
    }
}

/// Parse a resistance in ohms.
///
/// A trailing `ohm`, `ohms` or `Ω` is ignored. Magnitude letters `T`, `G`,
/// `M` and `k` work either as a suffix (`"4.7k"`) or in place of the decimal
/// point (`"4k7"`). Lower-case `m` is rejected rather than guessed at, and a
/// leading `R` decimal marker (`"R33"`) is not supported.
///
/// # Examples
/// ```
/// use techcalc::processing::parse_value;
/// assert_eq!(parse_value("4k7").unwrap(), 4700.0);
/// assert_eq!(parse_value("2.2M ohms").unwrap(), 2_200_000.0);
/// ```
pub fn parse_value(s: &str) -> Result<f64, ResistorError> {
    let trimmed = s.trim();
    let value = UNIT.replace(trimmed, "");
    let value = value.trim();

    let parsed = if let Some(caps) = EMBEDDED_SUFFIX.captures(value) {
        format!("{}.{}", &caps[1], &caps[3])
            .parse::<f64>()
            .ok()
            .map(|n| n * suffix_multiplier(&caps[2]))
    } else if let Some(caps) = TRAILING_SUFFIX.captures(value) {
        let multiplier = caps.get(2).map_or(1.0, |m| suffix_multiplier(m.as_str()));
        caps[1].parse::<f64>().ok().map(|n| n * multiplier)
    } else {
        None
    };

    log::trace!("parse_value({s:?}) = {parsed:?}");
    parsed.ok_or_else(|| ResistorError::InvalidValue(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_value("1234").unwrap(), 1234.0);
        assert_eq!(parse_value("0.47").unwrap(), 0.47);
        assert_eq!(parse_value(".5").unwrap(), 0.5);
        assert_eq!(parse_value("  330  ").unwrap(), 330.0);
    }

    #[test]
    fn test_trailing_suffix() {
        assert_eq!(parse_value("1k").unwrap(), 1000.0);
        assert_eq!(parse_value("4.7k").unwrap(), 4700.0);
        assert_eq!(parse_value("10K").unwrap(), 10_000.0);
        assert_eq!(parse_value("1M").unwrap(), 1_000_000.0);
        assert_eq!(parse_value("3 G").unwrap(), 3e9);
        assert_eq!(parse_value("1T").unwrap(), 1e12);
    }

    #[test]
    fn test_embedded_suffix() {
        assert_eq!(parse_value("4k7").unwrap(), 4700.0);
        assert_eq!(parse_value("1M5").unwrap(), 1_500_000.0);
        assert_eq!(parse_value("2K2").unwrap(), 2200.0);
    }

    #[test]
    fn test_unit_words() {
        assert_eq!(parse_value("220 ohms").unwrap(), 220.0);
        assert_eq!(parse_value("220Ohm").unwrap(), 220.0);
        assert_eq!(parse_value("4.7kΩ").unwrap(), 4700.0);
        assert_eq!(parse_value("10 k OHMS").unwrap(), 10_000.0);
    }

    #[test]
    fn test_rejected() {
        for input in ["", "abc", "4x7", "1.2.3", "-5", "5m", "k7", "4k7k", "R33"] {
            assert_eq!(
                parse_value(input).unwrap_err(),
                ResistorError::InvalidValue(input.to_string()),
                "{input:?}"
            );
        }
    }
}
