//! Reading a resistance from its color bands.

use crate::models::{BandCount, BandRole, ResistorBandSet, ResistorValue, NOT_APPLICABLE};

/// Unit prefixes, largest first.
const UNITS: [(f64, &str); 3] = [(1e9, "GΩ"), (1e6, "MΩ"), (1e3, "kΩ")];

/// Decode `bands` read as a `count`-band resistor.
///
/// Missing digit or multiplier bands leave the resistance `None` and the
/// formatted string `"N/A"`. A missing tolerance band only leaves the
/// tolerance `None`; the temperature coefficient is optional and only read
/// for 6-band sets.
pub fn decode(bands: &ResistorBandSet, count: BandCount) -> ResistorValue {
    let resistance_ohms = resistance(bands, count);
    let tolerance_percent = bands
        .role(BandRole::Tolerance, count)
        .and_then(|color| color.tolerance_percent());
    let temp_coefficient_ppm = bands
        .role(BandRole::TempCoefficient, count)
        .and_then(|color| color.temp_coefficient_ppm());

    let formatted = match resistance_ohms {
        Some(ohms) => format_resistance(ohms),
        None => {
            log::debug!("decode({count}): incomplete band selection {bands:?}");
            NOT_APPLICABLE.to_string()
        }
    };

    ResistorValue {
        resistance_ohms,
        tolerance_percent,
        temp_coefficient_ppm,
        formatted,
    }
}

fn resistance(bands: &ResistorBandSet, count: BandCount) -> Option<f64> {
    let digit_roles = [BandRole::Digit1, BandRole::Digit2, BandRole::Digit3];
    let mut significand: u32 = 0;
    for role in digit_roles.iter().take(count.significant_digits()) {
        let digit = bands.role(*role, count)?.digit()?;
        significand = significand * 10 + u32::from(digit);
    }
    let multiplier = bands.role(BandRole::Multiplier, count)?.multiplier()?;
    Some(f64::from(significand) * multiplier)
}

/// Format ohms with the largest fitting unit prefix, e.g. `4700.0` ->
/// `"4.7 kΩ"`.
///
/// Two decimals below 100, one from 100 up, trailing zeros trimmed.
pub fn format_resistance(ohms: f64) -> String {
    let (scaled, unit) = UNITS
        .iter()
        .find(|(size, _)| ohms >= *size)
        .map_or((ohms, "Ω"), |(size, unit)| (ohms / size, *unit));

    let decimals = if scaled < 100.0 { 2 } else { 1 };
    let mut number = format!("{scaled:.decimals$}");
    if number.contains('.') {
        let trimmed_len = number.trim_end_matches('0').trim_end_matches('.').len();
        number.truncate(trimmed_len);
    }
    format!("{number} {unit}")
}
