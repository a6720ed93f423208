pub mod payments;
pub mod providers;

use crate::ModelError;
use crate::macros::record_id;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

record_id!(PaymentId);
record_id!(ProviderId);

/// Currency amount in hundredths of the currency unit (1 = 0.01).
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cents(i64);

impl Cents {
    pub const ZERO: Cents = Cents(0);

    /// Largest magnitude accepted from user input: 1,000,000,000.00.
    pub const MAX: Cents = Cents(100_000_000_000);

    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Whole currency units plus hundredths, e.g. `Cents::from_parts(12, 50)` is 12.50.
    pub fn from_parts(units: i64, hundredths: i64) -> Self {
        Self(units * 100 + hundredths)
    }

    pub fn inner(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Parse a user-entered decimal such as `"200"`, `"150.5"`, `".75"` or `" -96.00 "`.
    ///
    /// Digits beyond the hundredths are rounded half away from zero
    /// (`"1.005"` is 1.01). Exponents, `NaN`/`inf`, grouping separators and
    /// magnitudes above [`Cents::MAX`] are rejected.
    pub fn parse(input: &str) -> Result<Self, ModelError> {
        let invalid = || ModelError::InvalidAmount(input.to_string());

        let trimmed = input.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let (units, fraction) = digits.split_once('.').unwrap_or((digits, ""));
        if units.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !units.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let units = units.trim_start_matches('0');
        let max_units = Self::MAX.0 / 100;
        let units: i64 = if units.is_empty() {
            0
        } else if units.len() > max_units.to_string().len() {
            return Err(ModelError::AmountTooLarge(input.to_string()));
        } else {
            units.parse().map_err(|_| invalid())?
        };

        let mut fraction_digits = fraction.bytes().map(|b| i64::from(b - b'0'));
        let tenths = fraction_digits.next().unwrap_or(0);
        let hundredths = fraction_digits.next().unwrap_or(0);
        let round_up = fraction_digits.next().is_some_and(|d| d >= 5);

        let magnitude = units * 100 + tenths * 10 + hundredths + i64::from(round_up);
        if magnitude > Self::MAX.0 {
            return Err(ModelError::AmountTooLarge(input.to_string()));
        }

        Ok(Self(if negative { -magnitude } else { magnitude }))
    }

    /// Like [`Cents::parse`] but also rejects negative amounts.
    pub fn parse_non_negative(input: &str) -> Result<Self, ModelError> {
        let amount = Self::parse(input)?;
        if amount.is_negative() {
            return Err(ModelError::NegativeAmount(input.to_string()));
        }
        Ok(amount)
    }

    /// Shortest plain-number rendering: `350`, `96.5`, `12.25`, `-4.1`.
    pub fn to_plain_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let (units, hundredths) = (abs / 100, abs % 100);

        if hundredths == 0 {
            format!("{sign}{units}")
        } else if hundredths % 10 == 0 {
            format!("{sign}{units}.{}", hundredths / 10)
        } else {
            format!("{sign}{units}.{hundredths:02}")
        }
    }
}

// Arithmetic saturates at the i64 bounds.
impl std::ops::Add for Cents {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl std::ops::Sub for Cents {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl std::ops::Neg for Cents {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Cents {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<'a> std::iter::Sum<&'a Cents> for Cents {
    fn sum<I: Iterator<Item = &'a Cents>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + *x)
    }
}

/// Always two decimals, no currency symbol: `70.00`, `-5.50`.
impl Display for Cents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}
