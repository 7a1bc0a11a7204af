//! Currency amount model.
//!
//! Receipt totals and item prices arrive as text with exactly two fractional
//! digits. [`Amount`] holds them as a whole number of cents so that every
//! comparison the scoring rules make is exact.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons a currency string can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// The text was empty.
    #[error("amount is empty")]
    Empty,
    /// The text did not match `<digits>.<two digits>`.
    #[error("'{0}' is not a two-decimal amount")]
    Malformed(String),
    /// The amount does not fit in the supported range.
    #[error("'{0}' is too large")]
    Overflow(String),
}

/// A non-negative currency amount stored as whole cents.
///
/// # Example
///
/// ```
/// use receipt_processor::models::Amount;
/// use rust_decimal::Decimal;
///
/// let amount: Amount = "12.25".parse().unwrap();
/// assert_eq!(amount.cents(), 1225);
/// assert_eq!(amount.to_decimal(), Decimal::new(1225, 2));
/// assert!("12.5".parse::<Amount>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount {
    cents: u64,
}

impl Amount {
    /// Creates an amount from a whole number of cents.
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    /// Returns the amount in cents.
    pub const fn cents(self) -> u64 {
        self.cents
    }

    /// Returns the cents part (0..=99).
    pub const fn fractional_cents(self) -> u64 {
        self.cents % 100
    }

    /// Returns the amount as an exact decimal with scale 2.
    pub fn to_decimal(self) -> Decimal {
        // cents fits in i64 because parsing caps it at i64::MAX
        Decimal::new(self.cents as i64, 2)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(AmountError::Empty);
        }

        let malformed = || AmountError::Malformed(s.to_string());
        let (whole, fraction) = s.split_once('.').ok_or_else(malformed)?;

        let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(fraction) || fraction.len() != 2 {
            return Err(malformed());
        }

        let overflow = || AmountError::Overflow(s.to_string());
        let whole: u64 = whole.parse().map_err(|_| overflow())?;
        let fraction: u64 = fraction.parse().map_err(|_| malformed())?;
        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction))
            .filter(|c| i64::try_from(*c).is_ok())
            .ok_or_else(overflow)?;

        Ok(Self { cents })
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}
