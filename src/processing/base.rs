//! Positional base conversion on unbounded integers.
//!
//! Parsing and formatting go through [`BigUint`], so a 200-digit hex string
//! converts as exactly as a two-digit one.

use crate::error::BaseError;
use crate::models::{Conversions, Radix};
use itertools::Itertools;
use num_bigint::BigUint;
use num_traits::Zero;

/// Parse `s` as a number in `radix`.
///
/// The whole string must use the radix's digit alphabet. An empty string
/// is not an error and parses to `Ok(None)`.
pub fn parse_in_base(s: &str, radix: Radix) -> Result<Option<BigUint>, BaseError> {
    if s.is_empty() {
        return Ok(None);
    }
    let invalid = || BaseError::InvalidDigits {
        input: s.to_string(),
        radix,
    };
    if !radix.matches_alphabet(s) {
        log::debug!("parse_in_base: {s:?} rejected for {radix}");
        return Err(invalid());
    }
    BigUint::parse_bytes(s.as_bytes(), radix.base())
        .map(Some)
        .ok_or_else(invalid)
}

/// Write `n` in `radix` without leading zeros; hex digits are uppercase.
pub fn format_in_base(n: &BigUint, radix: Radix) -> String {
    if n.is_zero() {
        return "0".to_string();
    }
    let digits = n.to_str_radix(radix.base());
    match radix {
        Radix::Hexadecimal => digits.to_ascii_uppercase(),
        _ => digits,
    }
}

/// Convert `s` from one base to another.
///
/// Returns `None` when `s` is not a valid `from` number. Empty input gives
/// empty output.
///
/// # Examples
/// ```
/// use techcalc::models::Radix;
/// use techcalc::processing::convert;
/// assert_eq!(convert("42", Radix::Decimal, Radix::Hexadecimal).as_deref(), Some("2A"));
/// assert_eq!(convert("xyz", Radix::Decimal, Radix::Binary), None);
/// ```
pub fn convert(s: &str, from: Radix, to: Radix) -> Option<String> {
    match parse_in_base(s, from).ok()? {
        Some(n) => Some(format_in_base(&n, to)),
        None => Some(String::new()),
    }
}

/// Convert `s` into all three bases at once.
///
/// A parse failure gives `None` for the whole result, never a partial one.
pub fn convert_all(s: &str, from: Radix) -> Option<Conversions> {
    let n = match parse_in_base(s, from).ok()? {
        Some(n) => n,
        None => return Some(Conversions::default()),
    };
    Some(Conversions {
        binary: format_in_base(&n, Radix::Binary),
        decimal: format_in_base(&n, Radix::Decimal),
        hexadecimal: format_in_base(&n, Radix::Hexadecimal),
    })
}

/// Left-pad `bits` with zeros to a multiple of `chunk_size` and join the
/// chunks with single spaces.
///
/// A `chunk_size` of zero leaves the input alone.
pub fn format_chunked(bits: &str, chunk_size: usize) -> String {
    if chunk_size == 0 || bits.is_empty() {
        return bits.to_string();
    }
    let len = bits.chars().count();
    let padding = (chunk_size - len % chunk_size) % chunk_size;

    std::iter::repeat('0')
        .take(padding)
        .chain(bits.chars())
        .chunks(chunk_size)
        .into_iter()
        .map(|chunk| chunk.collect::<String>())
        .join(" ")
}

/// Group `digits` for display, `bits_per_group` bits per group.
///
/// Binary groups 8 digits per byte and hex 2; decimal digits do not line up
/// with bits and come back ungrouped.
pub fn format_for_display(digits: &str, radix: Radix, bits_per_group: usize) -> String {
    match radix.bits_per_digit() {
        Some(bits) if bits_per_group >= bits => format_chunked(digits, bits_per_group / bits),
        _ => digits.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_examples() {
        assert_eq!(
            convert("42", Radix::Decimal, Radix::Hexadecimal).unwrap(),
            "2A"
        );
        assert_eq!(
            convert("2a", Radix::Hexadecimal, Radix::Binary).unwrap(),
            "101010"
        );
        assert_eq!(convert("xyz", Radix::Decimal, Radix::Binary), None);
        assert_eq!(convert("102", Radix::Binary, Radix::Decimal), None);
    }

    #[test]
    fn test_convert_empty_passthrough() {
        for from in Radix::ALL {
            for to in Radix::ALL {
                assert_eq!(convert("", from, to).unwrap(), "");
            }
        }
    }

    #[test]
    fn test_leading_zeros_dropped() {
        assert_eq!(convert("000101", Radix::Binary, Radix::Binary).unwrap(), "101");
        assert_eq!(convert("0000", Radix::Hexadecimal, Radix::Decimal).unwrap(), "0");
        assert_eq!(convert("007", Radix::Decimal, Radix::Hexadecimal).unwrap(), "7");
    }

    #[test]
    fn test_large_values_are_exact() {
        let hex = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF";
        let dec = convert(hex, Radix::Hexadecimal, Radix::Decimal).unwrap();
        assert_eq!(dec, "340282366920938463463374607431768211455");
        assert_eq!(convert(&dec, Radix::Decimal, Radix::Hexadecimal).unwrap(), hex);

        let bin = convert(hex, Radix::Hexadecimal, Radix::Binary).unwrap();
        assert_eq!(bin.len(), 128);
        assert!(bin.chars().all(|c| c == '1'));
    }

    #[test]
    fn test_round_trip_all_pairs() {
        let samples = [
            ("1011001110001111", Radix::Binary),
            ("98765432109876543210", Radix::Decimal),
            ("C0FFEE15BAD", Radix::Hexadecimal),
        ];
        for (s, from) in samples {
            for to in Radix::ALL {
                let there = convert(s, from, to).unwrap();
                let back = convert(&there, to, from).unwrap();
                assert_eq!(back, s, "{from} -> {to}");
            }
        }
    }

    #[test]
    fn test_convert_all() {
        let all = convert_all("255", Radix::Decimal).unwrap();
        assert_eq!(all.binary, "11111111");
        assert_eq!(all.decimal, "255");
        assert_eq!(all.hexadecimal, "FF");
        assert_eq!(all.get(Radix::Hexadecimal), "FF");

        assert_eq!(convert_all("", Radix::Binary).unwrap(), Conversions::default());
        assert_eq!(convert_all("12", Radix::Binary), None);
    }

    #[test]
    fn test_parse_in_base() {
        assert_eq!(parse_in_base("", Radix::Decimal).unwrap(), None);
        assert_eq!(
            parse_in_base("ff", Radix::Hexadecimal).unwrap(),
            Some(BigUint::from(255u32))
        );
        assert_eq!(
            parse_in_base("g", Radix::Hexadecimal).unwrap_err(),
            BaseError::InvalidDigits {
                input: "g".to_string(),
                radix: Radix::Hexadecimal
            }
        );
        assert!(parse_in_base(" 1", Radix::Decimal).is_err());
    }

    #[test]
    fn test_format_chunked() {
        assert_eq!(
            format_chunked("11111111100000001", 8),
            "00000001 11111111 00000001"
        );
        assert_eq!(format_chunked("101", 4), "0101");
        assert_eq!(format_chunked("1010101", 3), "001 010 101");
        assert_eq!(format_chunked("11110000", 8), "11110000");
        assert_eq!(format_chunked("", 8), "");
        assert_eq!(format_chunked("101", 0), "101");
    }

    #[test]
    fn test_format_for_display() {
        assert_eq!(
            format_for_display("1000000001", Radix::Binary, 8),
            "00000010 00000001"
        );
        assert_eq!(format_for_display("201", Radix::Hexadecimal, 8), "02 01");
        assert_eq!(format_for_display("513", Radix::Decimal, 8), "513");
    }
}
