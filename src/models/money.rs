//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point
//! precision issues. All arithmetic is exact and overflow-checked; an
//! operation that would leave the representable range fails instead of
//! wrapping.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CashbookError, CashbookResult};

/// A monetary amount stored as cents (hundredths of the currency unit)
///
/// Values are never mutated in place; arithmetic produces new values.
/// Negative amounts are permitted everywhere (net-flow results and
/// deposit corrections rely on them).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Maximum length in bytes of a rendered amount: sign, 17 whole-unit
    /// digits for the full i64 range, decimal point, two fraction digits,
    /// with room to spare.
    pub const MAX_DISPLAY_LEN: usize = 24;

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use cashbook::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole-unit portion (truncated toward zero)
    pub const fn whole_units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the fractional portion in cents (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Add two amounts, failing on overflow with prior values untouched
    pub fn checked_add(self, other: Self) -> CashbookResult<Self> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or_else(|| CashbookError::Overflow(format!("{} + {}", self, other)))
    }

    /// Subtract an amount, failing on overflow with prior values untouched
    pub fn checked_sub(self, other: Self) -> CashbookResult<Self> {
        self.0
            .checked_sub(other.0)
            .map(Self)
            .ok_or_else(|| CashbookError::Overflow(format!("{} - {}", self, other)))
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        // Remove currency symbol if present
        let s = s.strip_prefix('$').unwrap_or(s);

        let (units_str, cents_str) = match s.split_once('.') {
            Some((units, cents)) => (units, cents),
            None => (s, ""),
        };

        if units_str.is_empty() || units_str.chars().any(|c| !c.is_ascii_digit()) {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }
        let units: i128 = units_str
            .parse()
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

        // Pad or truncate the fraction to 2 digits
        let cents: i128 = match cents_str.len() {
            0 => 0,
            1 => {
                cents_str
                    .parse::<i128>()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                    * 10
            }
            _ => cents_str[..2]
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?,
        };

        let magnitude = units * 100 + cents;
        let signed = if negative { -magnitude } else { magnitude };

        i64::try_from(signed)
            .map(Self)
            .map_err(|_| MoneyParseError::OutOfRange(s.to_string()))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    /// Renders `[-]D.DD` by integer division and modulo on the unsigned
    /// magnitude, so `i64::MIN` formats without overflow.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.0.unsigned_abs();
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, magnitude / 100, magnitude % 100)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.whole_units(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "0.05");
        assert_eq!(format!("{}", Money::from_cents(-1)), "-0.01");
        assert_eq!(format!("{}", Money::from_cents(19000)), "190.00");
    }

    #[test]
    fn test_display_boundaries() {
        assert_eq!(
            format!("{}", Money::from_cents(i64::MAX)),
            "92233720368547758.07"
        );
        assert_eq!(
            format!("{}", Money::from_cents(i64::MIN)),
            "-92233720368547758.08"
        );
    }

    #[test]
    fn test_display_length_contract() {
        for cents in [0, 5, -5, i64::MAX, i64::MIN] {
            let rendered = Money::from_cents(cents).to_string();
            assert!(rendered.len() <= Money::MAX_DISPLAY_LEN, "{}", rendered);
        }
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a.checked_add(b).unwrap().cents(), 1500);
        assert_eq!(a.checked_sub(b).unwrap().cents(), 500);
    }

    #[test]
    fn test_checked_add_overflow() {
        let max = Money::from_cents(i64::MAX);
        let err = max.checked_add(Money::from_cents(1)).unwrap_err();
        assert!(err.is_overflow());
    }

    #[test]
    fn test_checked_sub_overflow() {
        let min = Money::from_cents(i64::MIN);
        let err = min.checked_sub(Money::from_cents(1)).unwrap_err();
        assert!(err.is_overflow());
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert!(Money::parse("ten").is_err());
        assert!(Money::parse("").is_err());
    }

    #[test]
    fn test_render_parse_round_trip() {
        for cents in [0, 5, 100, -100, 19000, -1, i64::MAX] {
            let rendered = Money::from_cents(cents).to_string();
            assert_eq!(Money::parse(&rendered).unwrap().cents(), cents, "{}", rendered);
        }
    }

    #[test]
    fn test_parse_out_of_range() {
        assert!(matches!(
            Money::parse("92233720368547758.08"),
            Err(MoneyParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_comparison() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert!(a > b);
        assert!(b < a);
        assert_eq!(a, Money::from_cents(1000));
    }

    #[test]
    fn test_is_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::from_cents(100).is_positive());
        assert!(Money::from_cents(-100).is_negative());
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
