//! Finding the color bands for a resistance.
//!
//! For each requested band count the value is split into a significand of
//! 2 or 3 digits and one of the standard multipliers, then every part is
//! mapped back to a color.

use crate::error::ResistorError;
use crate::models::{
    BandAttribute, BandColor, BandCount, BandRole, ResistorBandSet, DIGIT_PREFERENCE,
    MULTIPLIER_PREFERENCE, TOLERANCE_PREFERENCE,
};
use serde::Serialize;

/// Multipliers with a color band, largest first.
const STANDARD_MULTIPLIERS: [f64; 12] = [
    1e9, 1e8, 1e7, 1e6, 1e5, 1e4, 1e3, 1e2, 1e1, 1.0, 0.1, 0.01,
];

/// Largest relative error accepted by the standard multiplier search.
const MAX_RELATIVE_ERROR: f64 = 0.005;

const FRACTIONAL_MULTIPLIER_PREFERENCE: [BandColor; 2] = [BandColor::Gold, BandColor::Silver];

/// Bands found for a value, with the band count that produced them.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedBands {
    pub bands: ResistorBandSet,
    pub band_count: BandCount,
    /// The bands read back more than 0.5 % away from the requested value.
    pub approximate: bool,
}

/// `significand x multiplier`, and whether it missed the 0.5 % window.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Decomposition {
    significand: u32,
    multiplier: f64,
    approximate: bool,
}

impl EncodedBands {
    /// Colors in physical order.
    pub fn colors(&self) -> Vec<BandColor> {
        self.bands
            .physical(self.band_count)
            .into_iter()
            .flatten()
            .collect()
    }
}

/// Encode `resistance_ohms` as color bands.
///
/// Band counts are tried in the order given and the first that resolves is
/// returned. Without a requested tolerance, 4/5-band sets get gold and
/// 6-band sets brown; 6-band sets also get a brown (100 ppm) temperature
/// coefficient band. Values that no bands rebuild within 0.5 % come back
/// with `approximate` set.
///
/// # Errors
/// * [`ResistorError::UnsupportedTolerance`] - no color carries exactly
///   `tolerance_percent`
/// * [`ResistorError::NoStandardRepresentation`] - no requested band count
///   can hold the value
pub fn encode(
    resistance_ohms: f64,
    tolerance_percent: Option<f64>,
    preferred: &[BandCount],
) -> Result<EncodedBands, ResistorError> {
    for &count in preferred {
        let digits = count.significant_digits();
        let Some(Decomposition {
            significand,
            multiplier,
            approximate,
        }) = decompose(resistance_ohms, digits)
        else {
            log::debug!("encode({resistance_ohms}): {count} cannot hold the value, skipped");
            continue;
        };

        let Some(digit_bands) = digit_colors(significand, digits) else {
            continue;
        };
        let multiplier_preference: &[BandColor] = if multiplier < 1.0 {
            &FRACTIONAL_MULTIPLIER_PREFERENCE
        } else {
            &MULTIPLIER_PREFERENCE
        };
        let Some(multiplier_color) =
            BandColor::reverse_lookup(BandAttribute::Multiplier, multiplier, multiplier_preference)
        else {
            continue;
        };

        let tolerance_color = match tolerance_percent {
            Some(tolerance) => {
                BandColor::reverse_lookup(BandAttribute::Tolerance, tolerance, &TOLERANCE_PREFERENCE)
                    .ok_or(ResistorError::UnsupportedTolerance(tolerance))?
            }
            None => count.default_tolerance(),
        };

        let mut bands = ResistorBandSet::default();
        let digit_roles = [BandRole::Digit1, BandRole::Digit2, BandRole::Digit3];
        for (role, color) in digit_roles.iter().zip(digit_bands) {
            bands.set_role(*role, count, color);
        }
        bands.set_role(BandRole::Multiplier, count, multiplier_color);
        bands.set_role(BandRole::Tolerance, count, tolerance_color);
        if count == BandCount::Six {
            bands.set_role(BandRole::TempCoefficient, count, BandColor::Brown);
        }

        log::debug!(
            "encode({resistance_ohms}) -> {count} {significand} x {multiplier}"
        );
        return Ok(EncodedBands {
            bands,
            band_count: count,
            approximate,
        });
    }

    Err(ResistorError::NoStandardRepresentation(resistance_ohms))
}

/// Split `value` into a `digits`-digit significand and a standard
/// multiplier.
///
/// The standard search wants a full-width significand that rebuilds the
/// value within 0.5 %. Failing that, the scientific decomposition is taken
/// as an approximation. When rounding carries that significand into one
/// digit too many (`99.5 x 10`), the next larger multiplier is used instead.
fn decompose(value: f64, digits: usize) -> Option<Decomposition> {
    if !value.is_finite() || value <= 0.0 {
        return None;
    }
    let lowest = 10f64.powi(digits as i32 - 1);
    let limit = 10f64.powi(digits as i32);

    for multiplier in STANDARD_MULTIPLIERS {
        let significand = (value / multiplier).round();
        if significand < lowest || significand >= limit {
            continue;
        }
        let error = (significand * multiplier - value).abs() / value;
        log::trace!("decompose({value}): {significand} x {multiplier} error={error:.5}");
        if error <= MAX_RELATIVE_ERROR {
            return Some(Decomposition {
                significand: significand as u32,
                multiplier,
                approximate: false,
            });
        }
    }

    let exponent = value.log10().floor() as i32;
    let target = (exponent - digits as i32 + 1) as f64;
    let (closest, _) = STANDARD_MULTIPLIERS.iter().enumerate().min_by(|(_, a), (_, b)| {
        let da = (a.log10() - target).abs();
        let db = (b.log10() - target).abs();
        da.total_cmp(&db)
    })?;

    // Largest first, so walking back from `closest` means larger multipliers.
    for &multiplier in STANDARD_MULTIPLIERS[..=closest].iter().rev() {
        let significand = (value / multiplier).round();
        if significand < 1.0 {
            return None;
        }
        if significand < limit {
            log::debug!("decompose({value}): approximated as {significand} x {multiplier}");
            return Some(Decomposition {
                significand: significand as u32,
                multiplier,
                approximate: true,
            });
        }
    }
    None
}

/// Digit colors of `significand`, zero padded to `digits` bands.
fn digit_colors(significand: u32, digits: usize) -> Option<Vec<BandColor>> {
    format!("{significand:0digits$}")
        .chars()
        .map(|c| {
            let digit = c.to_digit(10)?;
            BandColor::reverse_lookup(BandAttribute::Digit, f64::from(digit), &DIGIT_PREFERENCE)
        })
        .collect()
}
