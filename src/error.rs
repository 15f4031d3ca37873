//! Error types for the calculation engine.
//!
//! Each calculation module has its own error enum so callers can tell a
//! programmer error (a prefix outside `0..=32`) apart from ordinary bad user
//! input. The umbrella [`Error`] is only needed by the binary.

use crate::models::Radix;
use thiserror::Error;

/// Failures of the subnet calculations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubnetError {
    /// Not four dot-separated octets in `0..=255` without leading zeros.
    #[error("invalid IPv4 address: {0:?}")]
    InvalidAddress(String),

    /// CIDR prefix outside `0..=32`.
    #[error("invalid CIDR prefix /{0}, expected 0..=32")]
    InvalidPrefix(u8),

    /// A dotted mask whose one-bits are not contiguous from the left.
    #[error("invalid subnet mask: {0:?}")]
    InvalidMask(String),

    /// Text that is not of the form `a.b.c.d/n`.
    #[error("invalid CIDR notation: {0:?}")]
    InvalidCidr(String),
}

/// Failures of the positional base conversions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BaseError {
    #[error("{input:?} is not a valid {radix} number")]
    InvalidDigits { input: String, radix: Radix },

    #[error("unknown radix {0:?}, expected bin, dec or hex")]
    UnknownRadix(String),
}

/// Failures of the resistor color-code calculations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResistorError {
    /// Text that does not read as a resistance, e.g. `"4x7"`.
    #[error("cannot read {0:?} as a resistance value")]
    InvalidValue(String),

    #[error("unsupported band count {0}, expected 4, 5 or 6")]
    InvalidBandCount(u8),

    #[error("unknown band color {0:?}")]
    UnknownColor(String),

    /// No color band carries exactly this tolerance.
    #[error("unsupported tolerance: {0}% has no standard color band")]
    UnsupportedTolerance(f64),

    /// None of the requested band counts can represent the value.
    #[error("no standard band representation for {0} Ω")]
    NoStandardRepresentation(f64),
}

/// Top-level error type used by the command line front end.
#[derive(Debug, Error)]
pub enum Error {
    #[error("subnet error: {0}")]
    Subnet(#[from] SubnetError),

    #[error("base conversion error: {0}")]
    Base(#[from] BaseError),

    #[error("resistor error: {0}")]
    Resistor(#[from] ResistorError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("usage: {0}")]
    Usage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_tolerance_message() {
        let err = ResistorError::UnsupportedTolerance(7.0);
        assert_eq!(
            err.to_string(),
            "unsupported tolerance: 7% has no standard color band"
        );
    }

    #[test]
    fn test_umbrella_from() {
        let err: Error = SubnetError::InvalidPrefix(33).into();
        assert_eq!(
            err.to_string(),
            "subnet error: invalid CIDR prefix /33, expected 0..=32"
        );
    }
}
