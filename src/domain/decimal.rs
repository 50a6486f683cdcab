//! Lossless decimal type for marks, grade points and CGPA values.
//!
//! SQLite hands these back as REAL; converting once at the repository edge
//! keeps float noise (`8.5700000000000003`) out of everything printed.

use rust_decimal::{Decimal as RustDecimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

/// Decimal value read from a grade or computed average.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimal(RustDecimal);

impl Decimal {
    /// Convert a database REAL into the shortest decimal that round-trips it.
    ///
    /// # Errors
    /// Returns an error for NaN, infinities and values outside the decimal range.
    pub fn from_f64(value: f64) -> Result<Self, rust_decimal::Error> {
        RustDecimal::try_from(value).map(Decimal)
    }

    /// Format without trailing zeros or exponent notation.
    pub fn to_canonical_string(&self) -> String {
        format!("{}", self.0.normalize())
    }

    /// Format rounded half-away-from-zero to exactly `dp` decimal places.
    pub fn to_fixed(&self, dp: u32) -> String {
        let mut rounded = self.0.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(dp);
        rounded.to_string()
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.to_canonical_string())
    }
}

impl FromStr for Decimal {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RustDecimal::from_str(s).map(Decimal)
    }
}

impl From<RustDecimal> for Decimal {
    fn from(value: RustDecimal) -> Self {
        Decimal(value)
    }
}
