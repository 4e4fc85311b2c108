use crate::types::errors::AmountError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;
use tracing::error;

const CENTS_PER_DOLLAR: i64 = 100;
const DECIMAL_PLACES: u32 = 2;

/// A monetary value held as a whole number of cents.
///
/// Every operation except the two divisions and [`Amount::from_float`] is exact.
/// Those three go through `rust_decimal` and are rounded half-up (away from zero)
/// back to the cent immediately.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize)]
#[serde(try_from = "AmountRecord")]
pub struct Amount(i64);

/// The `{ "dollars": .., "cents": .. }` shape amounts arrive in.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
pub struct AmountRecord {
    pub dollars: i64,
    pub cents: i64,
}

impl Amount {
    pub const ZERO: Amount = Amount(0);

    /// Stores `dollars * 100 + cents`. Neither part is range checked, so
    /// `Amount::new(1, 150)` is `$2.50` and `Amount::new(-5, 0)` is a deficit.
    pub const fn new(dollars: i64, cents: i64) -> Self {
        Amount(dollars * CENTS_PER_DOLLAR + cents)
    }

    /// Like [`Amount::new`], but fails with `AmountError::Overflow` instead of
    /// wrapping when the cent count does not fit.
    pub fn checked_new(dollars: i64, cents: i64) -> Result<Self, AmountError> {
        dollars
            .checked_mul(CENTS_PER_DOLLAR)
            .and_then(|value| value.checked_add(cents))
            .map(Amount)
            .ok_or(AmountError::Overflow)
    }

    pub const fn from_dollars(dollars: i64) -> Self {
        Amount::new(dollars, 0)
    }

    pub const fn from_cents(cents: i64) -> Self {
        Amount(cents)
    }

    pub const fn to_cents(self) -> i64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Floor-divides the cent count, so `-150` cents is `-2 + 0.50 = -1.5`.
    pub fn to_float(self) -> f64 {
        self.0.div_euclid(CENTS_PER_DOLLAR) as f64
            + self.0.rem_euclid(CENTS_PER_DOLLAR) as f64 / CENTS_PER_DOLLAR as f64
    }

    /// Quantizes a dollar value to the nearest cent, ties away from zero
    /// (`0.005` becomes `$0.01`).
    ///
    /// The float is taken at its exact binary value, so `2.675` (stored as
    /// `2.67499999...`) rounds down to `$2.67`.
    pub fn from_float(value: f64) -> Result<Self, AmountError> {
        if !value.is_finite() {
            return Err(AmountError::NonFinite(value));
        }

        let dollars = Decimal::from_f64_retain(value).ok_or(AmountError::Overflow)?;

        Self::from_decimal_dollars(dollars)
    }

    pub fn add(self, other: Amount) -> Amount {
        if other.is_zero() {
            return self;
        }

        Amount(self.0 + other.0)
    }

    pub fn subtract(self, other: Amount) -> Amount {
        Amount(self.0 - other.0)
    }

    pub fn multiply(self, scalar: i64) -> Amount {
        Amount(self.0 * scalar)
    }

    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Amount)
    }

    pub fn checked_sub(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_sub(rhs.0).map(Amount)
    }

    /// Splits the amount into `scalar` parts, rounding the share to the nearest cent.
    pub fn divide(self, scalar: i64) -> Result<Amount, AmountError> {
        if scalar == 0 {
            return Err(AmountError::DivisionByZero);
        }

        let cents = Decimal::from(self.0)
            .checked_div(Decimal::from(scalar))
            .ok_or(AmountError::Overflow)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

        cents.to_i64().map(Amount).ok_or(AmountError::Overflow)
    }

    /// The ratio `self / other`, expressed as a dollar figure rounded to the cent.
    /// `$10.00 / $4.00` is `$2.50`.
    pub fn divide_amount(self, other: Amount) -> Result<Amount, AmountError> {
        if other.is_zero() {
            return Err(AmountError::DivisionByZero);
        }

        let ratio = Decimal::from(self.0)
            .checked_div(Decimal::from(other.0))
            .ok_or(AmountError::Overflow)?;

        Self::from_decimal_dollars(ratio)
    }

    fn from_decimal_dollars(dollars: Decimal) -> Result<Amount, AmountError> {
        let cents = dollars
            .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
            .checked_mul(Decimal::from(CENTS_PER_DOLLAR))
            .ok_or(AmountError::Overflow)?;

        cents.to_i64().map(Amount).ok_or(AmountError::Overflow)
    }
}

impl TryFrom<AmountRecord> for Amount {
    type Error = AmountError;

    fn try_from(record: AmountRecord) -> Result<Self, Self::Error> {
        Amount::checked_new(record.dollars, record.cents)
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount::add(self, rhs)
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Amount) -> Amount {
        self.subtract(rhs)
    }
}

impl Mul<i64> for Amount {
    type Output = Amount;

    fn mul(self, rhs: i64) -> Amount {
        self.multiply(rhs)
    }
}

impl Neg for Amount {
    type Output = Amount;

    fn neg(self) -> Amount {
        Amount(-self.0)
    }
}

impl AddAssign<Amount> for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        if let Some(new_val) = self.checked_add(rhs) {
            self.0 = new_val.0;
        } else {
            error!("Amount AddAssign error: Overflow")
        }
    }
}

impl SubAssign<Amount> for Amount {
    fn sub_assign(&mut self, rhs: Amount) {
        if let Some(new_val) = self.checked_sub(rhs) {
            self.0 = new_val.0;
        } else {
            error!("Amount SubAssign error: Overflow")
        }
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, Amount::add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Amount {
        iter.copied().sum()
    }
}

impl Display for Amount {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let dollars = abs / CENTS_PER_DOLLAR as u64;
        let cents = abs % CENTS_PER_DOLLAR as u64;
        write!(formatter, "{sign}${dollars}.{cents:02}")
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(AmountError::InvalidFormat("Value is an empty string".to_string()));
        }

        let (is_negative, unsigned) = match value.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, value),
        };

        //NOTE: Statements print thousands separators ("$2,000.00"), they carry no meaning here
        let digits: String = unsigned
            .strip_prefix('$')
            .unwrap_or(unsigned)
            .chars()
            .filter(|character| *character != ',')
            .collect();

        let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

        if fraction.contains('.') {
            return Err(AmountError::InvalidFormat("Value has more than one decimal point".to_string()));
        }

        if whole.is_empty() {
            return Err(AmountError::InvalidFormat("Value has no dollar part".to_string()));
        }

        if !whole.chars().chain(fraction.chars()).all(|character| character.is_ascii_digit()) {
            return Err(AmountError::InvalidFormat(format!("Value '{value}' contains invalid characters")));
        }

        if fraction.len() > DECIMAL_PLACES as usize {
            return Err(AmountError::InvalidFormat("Value has too many decimal places".to_string()));
        }

        let dollars: i64 = whole.parse()?;
        let cents: i64 = if fraction.is_empty() {
            0
        } else {
            format!("{:0<width$}", fraction, width = DECIMAL_PLACES as usize).parse()?
        };

        let total = dollars
            .checked_mul(CENTS_PER_DOLLAR)
            .and_then(|value| value.checked_add(cents))
            .ok_or(AmountError::Overflow)?;

        Ok(Amount(if is_negative { -total } else { total }))
    }
}
