use crate::error::AmortizationError;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Serialize, Serializer};
use std::fmt;

/// A monetary value rounded to whole cents.
///
/// The engine computes in `f64`; `Money` only exists at the presentation edge,
/// where figures are shown to a user or exported. Rounding is half away from zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Self(value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Axis label in thousands, e.g. `$250K`.
    pub fn compact(&self) -> String {
        let thousands =
            (self.0 / dec!(1000)).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        if thousands.is_sign_negative() && !thousands.is_zero() {
            format!("-${}K", thousands.abs())
        } else {
            format!("${}K", thousands.abs())
        }
    }
}

impl TryFrom<f64> for Money {
    type Error = AmortizationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Decimal::from_f64(value).map(Self::new).ok_or_else(|| {
            AmortizationError::InvalidInput(format!("{value} is not a representable amount"))
        })
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = format!("{:.2}", self.0.abs());
        let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
        let sign = if self.0.is_sign_negative() && !self.0.is_zero() {
            "-"
        } else {
            ""
        };
        write!(f, "{sign}${}.{cents}", group_thousands(whole))
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{:.2}", self.0))
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
