// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Smallest-unit quantity type

use alloy_primitives::U256;
use bigdecimal::num_bigint::{BigInt, Sign};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::scale::DisplayScale;

/// Non-negative count of a token's smallest display unit
///
/// A quantity carries no scale of its own. Paired with a [`DisplayScale`] it
/// represents the decimal value `quantity / 10^scale` (e.g. 150 pence at
/// scale 2 is 1.50).
///
/// # Examples
///
/// ```
/// use tokenkit::{DisplayScale, Quantity};
///
/// let pence = Quantity::from(150u64);
/// assert_eq!(pence.format_scaled(DisplayScale::FIAT), "1.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(U256);

impl Quantity {
    /// Zero quantity
    pub const ZERO: Self = Self(U256::ZERO);

    /// Create a new quantity from U256
    pub const fn new(quantity: U256) -> Self {
        Self(quantity)
    }

    /// Get the inner U256 value
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    /// Convert a non-negative integer into a quantity
    ///
    /// Returns `None` for negative values or values wider than 256 bits.
    pub(crate) fn from_bigint(value: &BigInt) -> Option<Self> {
        let (sign, bytes) = value.to_bytes_be();
        if sign == Sign::Minus {
            return None;
        }
        U256::try_from_be_slice(&bytes).map(Self)
    }

    /// Exact decimal value of this quantity at the given scale
    pub fn to_decimal(&self, scale: DisplayScale) -> BigDecimal {
        let digits = BigInt::from_bytes_be(Sign::Plus, &self.0.to_be_bytes_vec());
        BigDecimal::new(digits, scale.as_i64())
    }

    /// Render with exactly `scale` fractional digits, never in exponent form
    ///
    /// ```
    /// use tokenkit::{DisplayScale, Quantity};
    ///
    /// assert_eq!(Quantity::from(1u64).format_scaled(DisplayScale::SATOSHI), "0.00000001");
    /// assert_eq!(Quantity::from(1000u64).format_scaled(DisplayScale::ZERO), "1000");
    /// ```
    pub fn format_scaled(&self, scale: DisplayScale) -> String {
        self.to_decimal(scale).to_plain_string()
    }
}

impl From<u64> for Quantity {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for Quantity {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
