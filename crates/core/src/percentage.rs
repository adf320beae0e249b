//! Fixed-point percentages.
//!
//! A [`Percentage`] counts hundredths of a percent in an integer, so sums of
//! progressions compare against 100 exactly.

use std::fmt;
use std::iter::Sum;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TodoError};

const SCALE: u32 = 100;

/// A non-negative percentage with two fractional digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Percentage(u32);

impl Percentage {
    /// 0%
    pub const ZERO: Self = Self(0);

    /// 100%
    pub const HUNDRED: Self = Self(100 * SCALE);

    /// Whole percent.
    pub const fn whole(percent: u32) -> Self {
        Self(percent * SCALE)
    }

    /// From hundredths of a percent (`1250` is 12.5%).
    pub const fn from_hundredths(hundredths: u32) -> Self {
        Self(hundredths)
    }

    /// Hundredths of a percent.
    pub const fn hundredths(&self) -> u32 {
        self.0
    }

    /// Sum, or `None` if the integer overflows.
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Lossy view for display or JSON.
    pub fn as_f64(&self) -> f64 {
        f64::from(self.0) / f64::from(SCALE)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / SCALE;
        let frac = self.0 % SCALE;
        match frac {
            0 => write!(f, "{whole}"),
            _ if frac % 10 == 0 => write!(f, "{whole}.{}", frac / 10),
            _ => write!(f, "{whole}.{frac:02}"),
        }
    }
}

impl FromStr for Percentage {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || TodoError::validation(format!("Invalid percentage: {s:?}"));
        let s = s.trim();
        let (whole, frac) = match s.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (s, ""),
        };
        let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || !digits(whole) || !digits(frac) {
            return Err(invalid());
        }
        if frac.len() > 2 {
            return Err(TodoError::validation(
                "Percentage supports at most two decimal places",
            ));
        }

        let whole: u32 = whole.parse().map_err(|_| invalid())?;
        let frac: u32 = match frac.len() {
            0 => 0,
            1 => frac.parse::<u32>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };
        whole
            .checked_mul(SCALE)
            .and_then(|w| w.checked_add(frac))
            .map(Self)
            .ok_or_else(invalid)
    }
}

impl TryFrom<f64> for Percentage {
    type Error = TodoError;

    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(TodoError::validation(format!("Invalid percentage: {value}")));
        }
        let scaled = value * f64::from(SCALE);
        let rounded = scaled.round();
        if (scaled - rounded).abs() > 1e-6 {
            return Err(TodoError::validation(
                "Percentage supports at most two decimal places",
            ));
        }
        if rounded > f64::from(u32::MAX) {
            return Err(TodoError::validation(format!("Invalid percentage: {value}")));
        }
        Ok(Self(rounded as u32))
    }
}

impl From<Percentage> for f64 {
    fn from(p: Percentage) -> Self {
        p.as_f64()
    }
}

impl Sum for Percentage {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, p| Self(acc.0.saturating_add(p.0)))
    }
}

impl<'a> Sum<&'a Percentage> for Percentage {
    fn sum<I: Iterator<Item = &'a Percentage>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
