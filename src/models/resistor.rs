//! Resistor color code data model.
//!
//! A [`ResistorBandSet`] stores up to six colors in named slots. The slot
//! names follow the 5/6-band layout, so which *role* a slot plays depends on
//! the band count: a 4-band set keeps its multiplier in `band3` and its
//! tolerance in the `multiplier` slot. [`BandRole::slot`] is the one place
//! that mapping lives.

use crate::error::ResistorError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Relative slack when matching float multipliers such as `0.1`.
const MULTIPLIER_EPSILON: f64 = 1e-9;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BandColor {
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    Gray,
    White,
    Gold,
    Silver,
    None,
}

/// Numeric attribute a color band can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandAttribute {
    Digit,
    Multiplier,
    Tolerance,
    TempCoefficient,
}

/// Digit colors, in digit order.
pub const DIGIT_PREFERENCE: [BandColor; 10] = [
    BandColor::Black,
    BandColor::Brown,
    BandColor::Red,
    BandColor::Orange,
    BandColor::Yellow,
    BandColor::Green,
    BandColor::Blue,
    BandColor::Violet,
    BandColor::Gray,
    BandColor::White,
];

/// Integer multipliers win over gold/silver.
pub const MULTIPLIER_PREFERENCE: [BandColor; 12] = [
    BandColor::Black,
    BandColor::Brown,
    BandColor::Red,
    BandColor::Orange,
    BandColor::Yellow,
    BandColor::Green,
    BandColor::Blue,
    BandColor::Violet,
    BandColor::Gray,
    BandColor::White,
    BandColor::Gold,
    BandColor::Silver,
];

/// Gray and orange both mark 0.05 %; gray is the common marking.
pub const TOLERANCE_PREFERENCE: [BandColor; 11] = [
    BandColor::Brown,
    BandColor::Red,
    BandColor::Green,
    BandColor::Blue,
    BandColor::Violet,
    BandColor::Gray,
    BandColor::Orange,
    BandColor::Yellow,
    BandColor::Gold,
    BandColor::Silver,
    BandColor::None,
];

impl BandColor {
    pub const ALL: [BandColor; 13] = [
        BandColor::Black,
        BandColor::Brown,
        BandColor::Red,
        BandColor::Orange,
        BandColor::Yellow,
        BandColor::Green,
        BandColor::Blue,
        BandColor::Violet,
        BandColor::Gray,
        BandColor::White,
        BandColor::Gold,
        BandColor::Silver,
        BandColor::None,
    ];

    pub fn digit(self) -> Option<u8> {
        match self {
            BandColor::Black => Some(0),
            BandColor::Brown => Some(1),
            BandColor::Red => Some(2),
            BandColor::Orange => Some(3),
            BandColor::Yellow => Some(4),
            BandColor::Green => Some(5),
            BandColor::Blue => Some(6),
            BandColor::Violet => Some(7),
            BandColor::Gray => Some(8),
            BandColor::White => Some(9),
            BandColor::Gold | BandColor::Silver | BandColor::None => None,
        }
    }

    pub fn multiplier(self) -> Option<f64> {
        match self {
            BandColor::Gold => Some(0.1),
            BandColor::Silver => Some(0.01),
            BandColor::None => None,
            _ => self.digit().map(|d| 10f64.powi(d as i32)),
        }
    }

    pub fn tolerance_percent(self) -> Option<f64> {
        match self {
            BandColor::Brown => Some(1.0),
            BandColor::Red => Some(2.0),
            BandColor::Orange => Some(0.05),
            BandColor::Yellow => Some(0.02),
            BandColor::Green => Some(0.5),
            BandColor::Blue => Some(0.25),
            BandColor::Violet => Some(0.1),
            BandColor::Gray => Some(0.05),
            BandColor::Gold => Some(5.0),
            BandColor::Silver => Some(10.0),
            BandColor::None => Some(20.0),
            BandColor::Black | BandColor::White => None,
        }
    }

    pub fn temp_coefficient_ppm(self) -> Option<u32> {
        match self {
            BandColor::Black => Some(250),
            BandColor::Brown => Some(100),
            BandColor::Red => Some(50),
            BandColor::Orange => Some(15),
            BandColor::Yellow => Some(25),
            BandColor::Green => Some(20),
            BandColor::Blue => Some(10),
            BandColor::Violet => Some(5),
            BandColor::Gray => Some(1),
            BandColor::White | BandColor::Gold | BandColor::Silver | BandColor::None => None,
        }
    }

    /// Attribute value as f64, for lookups that treat all attributes alike.
    pub fn attribute(self, attribute: BandAttribute) -> Option<f64> {
        match attribute {
            BandAttribute::Digit => self.digit().map(f64::from),
            BandAttribute::Multiplier => self.multiplier(),
            BandAttribute::Tolerance => self.tolerance_percent(),
            BandAttribute::TempCoefficient => self.temp_coefficient_ppm().map(f64::from),
        }
    }

    /// Find the first color in `preference` whose `attribute` equals `value`.
    ///
    /// Multipliers compare with a tiny relative slack so `0.1` computed by
    /// division still finds gold; every other attribute must match exactly.
    ///
    /// # Examples
    /// ```
    /// use techcalc::models::{BandAttribute, BandColor, MULTIPLIER_PREFERENCE};
    /// let color = BandColor::reverse_lookup(BandAttribute::Multiplier, 100.0, &MULTIPLIER_PREFERENCE);
    /// assert_eq!(color, Some(BandColor::Red));
    /// ```
    pub fn reverse_lookup(
        attribute: BandAttribute,
        value: f64,
        preference: &[BandColor],
    ) -> Option<BandColor> {
        preference.iter().copied().find(|color| match color.attribute(attribute) {
            Some(v) if attribute == BandAttribute::Multiplier => {
                (v - value).abs() <= v.abs() * MULTIPLIER_EPSILON
            }
            Some(v) => v == value,
            None => false,
        })
    }
}

impl std::fmt::Display for BandColor {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            BandColor::Black => "black",
            BandColor::Brown => "brown",
            BandColor::Red => "red",
            BandColor::Orange => "orange",
            BandColor::Yellow => "yellow",
            BandColor::Green => "green",
            BandColor::Blue => "blue",
            BandColor::Violet => "violet",
            BandColor::Gray => "gray",
            BandColor::White => "white",
            BandColor::Gold => "gold",
            BandColor::Silver => "silver",
            BandColor::None => "none",
        };
        write!(f, "{name}")
    }
}

impl FromStr for BandColor {
    type Err = ResistorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let color = match lower.as_str() {
            "grey" => BandColor::Gray,
            "purple" => BandColor::Violet,
            name => BandColor::ALL
                .iter()
                .copied()
                .find(|c| c.to_string() == name)
                .ok_or_else(|| ResistorError::UnknownColor(s.to_string()))?,
        };
        Ok(color)
    }
}

/// Number of physical bands on the component.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub enum BandCount {
    Four,
    Five,
    Six,
}

impl BandCount {
    pub const ALL: [BandCount; 3] = [BandCount::Four, BandCount::Five, BandCount::Six];

    /// Significant digit bands: 2 for 4-band, 3 otherwise.
    pub fn significant_digits(self) -> usize {
        match self {
            BandCount::Four => 2,
            BandCount::Five | BandCount::Six => 3,
        }
    }

    /// Tolerance band used when the caller does not ask for one.
    pub fn default_tolerance(self) -> BandColor {
        match self {
            BandCount::Four | BandCount::Five => BandColor::Gold,
            BandCount::Six => BandColor::Brown,
        }
    }

    /// Roles in physical band order.
    pub fn roles(self) -> &'static [BandRole] {
        const FOUR: [BandRole; 4] = [
            BandRole::Digit1,
            BandRole::Digit2,
            BandRole::Multiplier,
            BandRole::Tolerance,
        ];
        const FIVE: [BandRole; 5] = [
            BandRole::Digit1,
            BandRole::Digit2,
            BandRole::Digit3,
            BandRole::Multiplier,
            BandRole::Tolerance,
        ];
        const SIX: [BandRole; 6] = [
            BandRole::Digit1,
            BandRole::Digit2,
            BandRole::Digit3,
            BandRole::Multiplier,
            BandRole::Tolerance,
            BandRole::TempCoefficient,
        ];
        match self {
            BandCount::Four => &FOUR,
            BandCount::Five => &FIVE,
            BandCount::Six => &SIX,
        }
    }
}

impl TryFrom<u8> for BandCount {
    type Error = ResistorError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            4 => Ok(BandCount::Four),
            5 => Ok(BandCount::Five),
            6 => Ok(BandCount::Six),
            _ => Err(ResistorError::InvalidBandCount(n)),
        }
    }
}

impl From<BandCount> for u8 {
    fn from(count: BandCount) -> u8 {
        match count {
            BandCount::Four => 4,
            BandCount::Five => 5,
            BandCount::Six => 6,
        }
    }
}

impl std::fmt::Display for BandCount {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}-band", u8::from(*self))
    }
}

/// Storage slot of a [`ResistorBandSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandSlot {
    Band1,
    Band2,
    Band3,
    Multiplier,
    Tolerance,
    TempCoefficient,
}

/// Meaning of a band, independent of where it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandRole {
    Digit1,
    Digit2,
    Digit3,
    Multiplier,
    Tolerance,
    TempCoefficient,
}

impl BandRole {
    /// Storage slot holding this role for `count` bands, if the role exists.
    pub fn slot(self, count: BandCount) -> Option<BandSlot> {
        match (count, self) {
            (_, BandRole::Digit1) => Some(BandSlot::Band1),
            (_, BandRole::Digit2) => Some(BandSlot::Band2),
            (BandCount::Four, BandRole::Digit3) => None,
            (_, BandRole::Digit3) => Some(BandSlot::Band3),
            (BandCount::Four, BandRole::Multiplier) => Some(BandSlot::Band3),
            (_, BandRole::Multiplier) => Some(BandSlot::Multiplier),
            (BandCount::Four, BandRole::Tolerance) => Some(BandSlot::Multiplier),
            (_, BandRole::Tolerance) => Some(BandSlot::Tolerance),
            (BandCount::Six, BandRole::TempCoefficient) => Some(BandSlot::TempCoefficient),
            (_, BandRole::TempCoefficient) => None,
        }
    }
}

/// Colors selected for each storage slot.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResistorBandSet {
    pub band1: Option<BandColor>,
    pub band2: Option<BandColor>,
    pub band3: Option<BandColor>,
    pub multiplier: Option<BandColor>,
    pub tolerance: Option<BandColor>,
    pub temp_coefficient: Option<BandColor>,
}

impl ResistorBandSet {
    /// Build a set from colors in physical order, 4 to 6 of them.
    pub fn from_colors(colors: &[BandColor]) -> Result<(ResistorBandSet, BandCount), ResistorError> {
        let len = u8::try_from(colors.len()).unwrap_or(u8::MAX);
        let count = BandCount::try_from(len)?;
        let mut set = ResistorBandSet::default();
        for (role, color) in count.roles().iter().zip(colors) {
            set.set_role(*role, count, *color);
        }
        Ok((set, count))
    }

    pub fn get(&self, slot: BandSlot) -> Option<BandColor> {
        match slot {
            BandSlot::Band1 => self.band1,
            BandSlot::Band2 => self.band2,
            BandSlot::Band3 => self.band3,
            BandSlot::Multiplier => self.multiplier,
            BandSlot::Tolerance => self.tolerance,
            BandSlot::TempCoefficient => self.temp_coefficient,
        }
    }

    pub fn set(&mut self, slot: BandSlot, color: Option<BandColor>) {
        let target = match slot {
            BandSlot::Band1 => &mut self.band1,
            BandSlot::Band2 => &mut self.band2,
            BandSlot::Band3 => &mut self.band3,
            BandSlot::Multiplier => &mut self.multiplier,
            BandSlot::Tolerance => &mut self.tolerance,
            BandSlot::TempCoefficient => &mut self.temp_coefficient,
        };
        *target = color;
    }

    /// Color playing `role` when read as a `count`-band component.
    pub fn role(&self, role: BandRole, count: BandCount) -> Option<BandColor> {
        role.slot(count).and_then(|slot| self.get(slot))
    }

    /// Store `color` in whichever slot plays `role`. Roles that do not exist
    /// for `count` are ignored.
    pub fn set_role(&mut self, role: BandRole, count: BandCount, color: BandColor) {
        if let Some(slot) = role.slot(count) {
            self.set(slot, Some(color));
        }
    }

    /// Colors in physical band order for `count` bands.
    pub fn physical(&self, count: BandCount) -> Vec<Option<BandColor>> {
        count
            .roles()
            .iter()
            .map(|role| self.role(*role, count))
            .collect()
    }
}

/// Result of reading a band set. Fields are `None` when the selection is
/// incomplete.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ResistorValue {
    pub resistance_ohms: Option<f64>,
    pub tolerance_percent: Option<f64>,
    pub temp_coefficient_ppm: Option<u32>,
    /// Resistance with unit prefix, e.g. `"4.7 kΩ"`, or `"N/A"`.
    pub formatted: String,
}

impl ResistorValue {
    pub fn is_complete(&self) -> bool {
        self.resistance_ohms.is_some() && self.tolerance_percent.is_some()
    }
}

impl std::fmt::Display for ResistorValue {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.formatted)?;
        if let Some(tolerance) = self.tolerance_percent {
            write!(f, " ±{tolerance}%")?;
        }
        if let Some(ppm) = self.temp_coefficient_ppm {
            write!(f, " {ppm} ppm/K")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BandColor::{Black, Brown, Gold, Gray, Orange, Red, Silver, White};

    #[test]
    fn test_color_attributes() {
        assert_eq!(Black.digit(), Some(0));
        assert_eq!(White.digit(), Some(9));
        assert_eq!(Gold.digit(), None);
        assert_eq!(Orange.multiplier(), Some(1000.0));
        assert_eq!(Silver.multiplier(), Some(0.01));
        assert_eq!(BandColor::None.multiplier(), None);
        assert_eq!(BandColor::None.tolerance_percent(), Some(20.0));
        assert_eq!(Black.tolerance_percent(), None);
        assert_eq!(Brown.temp_coefficient_ppm(), Some(100));
        assert_eq!(Gold.temp_coefficient_ppm(), None);
    }

    #[test]
    fn test_reverse_lookup_tie_break() {
        assert_eq!(
            BandColor::reverse_lookup(BandAttribute::Tolerance, 0.05, &TOLERANCE_PREFERENCE),
            Some(Gray)
        );
        let orange_first = [Orange, Gray];
        assert_eq!(
            BandColor::reverse_lookup(BandAttribute::Tolerance, 0.05, &orange_first),
            Some(Orange)
        );
    }

    #[test]
    fn test_reverse_lookup_multiplier() {
        assert_eq!(
            BandColor::reverse_lookup(BandAttribute::Multiplier, 1.0, &MULTIPLIER_PREFERENCE),
            Some(Black)
        );
        assert_eq!(
            BandColor::reverse_lookup(BandAttribute::Multiplier, 1.0 / 10.0, &MULTIPLIER_PREFERENCE),
            Some(Gold)
        );
        assert_eq!(
            BandColor::reverse_lookup(BandAttribute::Multiplier, 0.01, &MULTIPLIER_PREFERENCE),
            Some(Silver)
        );
        assert_eq!(
            BandColor::reverse_lookup(BandAttribute::Multiplier, 1e10, &MULTIPLIER_PREFERENCE),
            None
        );
    }

    #[test]
    fn test_reverse_lookup_exact_tolerance() {
        assert_eq!(
            BandColor::reverse_lookup(BandAttribute::Tolerance, 7.0, &TOLERANCE_PREFERENCE),
            None
        );
        assert_eq!(
            BandColor::reverse_lookup(BandAttribute::Tolerance, 5.0000001, &TOLERANCE_PREFERENCE),
            None
        );
    }

    #[test]
    fn test_color_from_str() {
        assert_eq!("Brown".parse::<BandColor>().unwrap(), Brown);
        assert_eq!("grey".parse::<BandColor>().unwrap(), Gray);
        assert_eq!("none".parse::<BandColor>().unwrap(), BandColor::None);
        assert!("pink".parse::<BandColor>().is_err());
    }

    #[test]
    fn test_role_slots() {
        use crate::models::BandCount::{Five, Four, Six};
        assert_eq!(BandRole::Multiplier.slot(Four), Some(BandSlot::Band3));
        assert_eq!(BandRole::Tolerance.slot(Four), Some(BandSlot::Multiplier));
        assert_eq!(BandRole::Digit3.slot(Four), None);
        assert_eq!(BandRole::Digit3.slot(Five), Some(BandSlot::Band3));
        assert_eq!(BandRole::Multiplier.slot(Five), Some(BandSlot::Multiplier));
        assert_eq!(BandRole::TempCoefficient.slot(Five), None);
        assert_eq!(
            BandRole::TempCoefficient.slot(Six),
            Some(BandSlot::TempCoefficient)
        );
    }

    #[test]
    fn test_from_colors() {
        let (set, count) = ResistorBandSet::from_colors(&[Brown, Black, Red, Gold]).unwrap();
        assert_eq!(count, BandCount::Four);
        assert_eq!(set.band3, Some(Red));
        assert_eq!(set.multiplier, Some(Gold));
        assert_eq!(set.tolerance, None);
        assert_eq!(set.physical(count), vec![Some(Brown), Some(Black), Some(Red), Some(Gold)]);

        assert_eq!(
            ResistorBandSet::from_colors(&[Brown, Black, Red]).unwrap_err(),
            ResistorError::InvalidBandCount(3)
        );
    }

    #[test]
    fn test_band_count_serde() {
        assert_eq!(serde_json::to_string(&BandCount::Five).unwrap(), "5");
        assert_eq!(serde_json::from_str::<BandCount>("6").unwrap(), BandCount::Six);
        assert!(serde_json::from_str::<BandCount>("3").is_err());
    }
}
