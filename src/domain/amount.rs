use crate::error::ReceiptError;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::fmt;
use std::str::FromStr;

/// Number of minor units in one major currency unit.
const MINOR_PER_MAJOR: u64 = 100;

/// Represents a non-negative monetary amount in minor currency units (cents).
///
/// Amounts arrive as decimal strings in major units ("6.49") and are converted
/// exactly through `rust_decimal::Decimal`, so scoring never touches floating
/// point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Self = Self(0);

    pub fn from_minor_units(minor_units: u64) -> Self {
        Self(minor_units)
    }

    pub fn minor_units(&self) -> u64 {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = ReceiptError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value < Decimal::ZERO {
            return Err(ReceiptError::ValidationError(format!(
                "Amount must not be negative: {value}"
            )));
        }
        let value = value.normalize();
        if value.scale() > 2 {
            return Err(ReceiptError::ValidationError(format!(
                "Amount has more than two decimal places: {value}"
            )));
        }
        value
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|minor| minor.to_u64())
            .map(Self)
            .ok_or_else(|| ReceiptError::ValidationError(format!("Amount out of range: {value}")))
    }
}

impl FromStr for Amount {
    type Err = ReceiptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str_exact(s.trim()).map_err(|e| {
            ReceiptError::ValidationError(format!("Invalid amount {s:?}: {e}"))
        })?;
        Self::try_from(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "${}.{:02}",
            self.0 / MINOR_PER_MAJOR,
            self.0 % MINOR_PER_MAJOR
        )
    }
}
