//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A whole-number value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// Rounds a fraction (0.0 to 1.0) to the nearest whole percent.
    ///
    /// Values outside the range, and NaN, are clamped.
    pub fn from_fraction(fraction: f64) -> Self {
        if fraction.is_nan() {
            return Self::ZERO;
        }
        let rounded = (fraction.clamp(0.0, 1.0) * 100.0).round();
        Self(rounded as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fraction_rounds_to_nearest() {
        assert_eq!(Percentage::from_fraction(2.0 / 3.0).value(), 67);
        assert_eq!(Percentage::from_fraction(0.5).value(), 50);
        assert_eq!(Percentage::from_fraction(1.0 / 3.0).value(), 33);
    }

    #[test]
    fn from_fraction_clamps_out_of_range() {
        assert_eq!(Percentage::from_fraction(-0.2), Percentage::ZERO);
        assert_eq!(Percentage::from_fraction(1.7).value(), 100);
        assert_eq!(Percentage::from_fraction(f64::NAN), Percentage::ZERO);
    }

    #[test]
    fn displays_with_percent_sign() {
        assert_eq!(Percentage::from_fraction(0.75).to_string(), "75%");
        assert_eq!(Percentage::ZERO.to_string(), "0%");
    }
}
