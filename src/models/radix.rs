//! Positional number bases supported by the converter.

use crate::error::BaseError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use lazy_static::lazy_static;

lazy_static! {
    static ref BINARY_DIGITS: Regex = Regex::new(r"^[01]+$").expect("Invalid Regex?");
    static ref DECIMAL_DIGITS: Regex = Regex::new(r"^[0-9]+$").expect("Invalid Regex?");
    static ref HEX_DIGITS: Regex = Regex::new(r"^[0-9a-fA-F]+$").expect("Invalid Regex?");
}

/// A number base with a fixed digit alphabet.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Radix {
    Binary,
    Decimal,
    Hexadecimal,
}

impl Radix {
    pub const ALL: [Radix; 3] = [Radix::Binary, Radix::Decimal, Radix::Hexadecimal];

    /// Numeric base.
    pub fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    /// Bits carried by one digit. Decimal digits do not align to bits and
    /// are never chunked.
    pub fn bits_per_digit(self) -> Option<usize> {
        match self {
            Radix::Binary => Some(1),
            Radix::Decimal => None,
            Radix::Hexadecimal => Some(4),
        }
    }

    /// True when every character of `s` is a digit of this base.
    /// The empty string is not a match.
    pub fn matches_alphabet(self, s: &str) -> bool {
        match self {
            Radix::Binary => BINARY_DIGITS.is_match(s),
            Radix::Decimal => DECIMAL_DIGITS.is_match(s),
            Radix::Hexadecimal => HEX_DIGITS.is_match(s),
        }
    }
}

impl std::fmt::Display for Radix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Radix::Binary => "binary",
            Radix::Decimal => "decimal",
            Radix::Hexadecimal => "hexadecimal",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Radix {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bin" | "binary" | "2" => Ok(Radix::Binary),
            "dec" | "decimal" | "10" => Ok(Radix::Decimal),
            "hex" | "hexadecimal" | "16" => Ok(Radix::Hexadecimal),
            _ => Err(BaseError::UnknownRadix(s.to_string())),
        }
    }
}

/// The same number written in all three bases.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversions {
    pub binary: String,
    pub decimal: String,
    pub hexadecimal: String,
}

impl Conversions {
    /// Value for one base.
    pub fn get(&self, radix: Radix) -> &str {
        match radix {
            Radix::Binary => &self.binary,
            Radix::Decimal => &self.decimal,
            Radix::Hexadecimal => &self.hexadecimal,
        }
    }
}
