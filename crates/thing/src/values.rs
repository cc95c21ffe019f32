//! Validated scalar newtypes.
//!
//! Scalar constraints live in constructors returning `Result<_, ValueError>`
//! rather than in setter checks scattered across the thing types: once a
//! value exists, it is known to be in range.

use std::fmt;

use rust_decimal::Decimal;

use crate::error::ValueError;

/// A birth year in the platform's permitted range, 1000–3000 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BirthYear(u16);

impl BirthYear {
    pub const MIN: u16 = 1000;
    pub const MAX: u16 = 3000;

    /// Fails with [`ValueError::OutOfRange`] outside 1000–3000.
    pub fn new(year: u16) -> Result<Self, ValueError> {
        if !(Self::MIN..=Self::MAX).contains(&year) {
            return Err(ValueError::OutOfRange {
                field: "birth year",
                min: Self::MIN.to_string(),
                max: Self::MAX.to_string(),
                value: year.to_string(),
            });
        }
        Ok(Self(year))
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for BirthYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A dimensionless fraction in 0–1 inclusive, e.g. an HbA1C value of `0.065`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction(Decimal);

impl Fraction {
    pub fn new(value: Decimal) -> Result<Self, ValueError> {
        if value < Decimal::ZERO || value > Decimal::ONE {
            return Err(ValueError::OutOfRange {
                field: "fraction",
                min: "0".to_string(),
                max: "1".to_string(),
                value: value.to_string(),
            });
        }
        Ok(Self(value))
    }

    pub fn get(self) -> Decimal {
        self.0
    }

    /// The fraction scaled to a percentage, for display.
    pub fn as_percent(self) -> Decimal {
        self.0 * Decimal::ONE_HUNDRED
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A decimal strictly greater than zero (durations, distances).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositiveDecimal(Decimal);

impl PositiveDecimal {
    pub fn new(value: Decimal) -> Result<Self, ValueError> {
        if value <= Decimal::ZERO {
            return Err(ValueError::NotPositive {
                field: "value",
                value: value.to_string(),
            });
        }
        Ok(Self(value))
    }

    pub fn get(self) -> Decimal {
        self.0
    }
}

impl fmt::Display for PositiveDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A heart rate in beats per minute, strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BeatsPerMinute(u32);

impl BeatsPerMinute {
    pub fn new(bpm: u32) -> Result<Self, ValueError> {
        if bpm == 0 {
            return Err(ValueError::NotPositive {
                field: "heart rate",
                value: bpm.to_string(),
            });
        }
        Ok(Self(bpm))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for BeatsPerMinute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn birth_year_range_is_inclusive() {
        assert_eq!(BirthYear::new(1000).unwrap().get(), 1000);
        assert_eq!(BirthYear::new(3000).unwrap().get(), 3000);
        assert_eq!(BirthYear::new(1400).unwrap().get(), 1400);
        assert!(matches!(
            BirthYear::new(999),
            Err(ValueError::OutOfRange { field: "birth year", .. })
        ));
        assert!(matches!(BirthYear::new(3001), Err(ValueError::OutOfRange { .. })));
    }

    #[test]
    fn fraction_rejects_values_outside_unit_interval() {
        assert_eq!(Fraction::new(dec!(0.065)).unwrap().get(), dec!(0.065));
        assert_eq!(Fraction::new(dec!(0.065)).unwrap().as_percent(), dec!(6.500));
        assert!(Fraction::new(dec!(-0.01)).is_err());
        assert!(Fraction::new(dec!(1.01)).is_err());
    }

    #[test]
    fn positive_decimal_rejects_zero_and_negative() {
        assert!(PositiveDecimal::new(dec!(0.5)).is_ok());
        assert!(matches!(
            PositiveDecimal::new(Decimal::ZERO),
            Err(ValueError::NotPositive { .. })
        ));
        assert!(PositiveDecimal::new(dec!(-3)).is_err());
    }

    #[test]
    fn beats_per_minute_must_be_positive() {
        assert_eq!(BeatsPerMinute::new(60).unwrap().get(), 60);
        assert!(BeatsPerMinute::new(0).is_err());
    }

}
