// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Display scale type

use serde::{Deserialize, Serialize};

/// Number of fractional decimal digits a token is rendered and parsed with
///
/// A quantity of `n` smallest units at display scale `d` represents the
/// decimal value `n / 10^d`. Common values:
/// - Most fiat currencies: 2 (pence, cents)
/// - Japanese yen: 0
/// - Bitcoin: 8 (satoshis)
/// - Ether: 18 (wei)
///
/// # Examples
///
/// ```
/// use tokenkit::DisplayScale;
///
/// let cents = DisplayScale::FIAT;
/// assert_eq!(cents.as_u8(), 2);
///
/// let satoshis = DisplayScale::SATOSHI;
/// assert_eq!(satoshis.as_u8(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayScale(u8);

impl DisplayScale {
    /// Whole units only (0)
    pub const ZERO: Self = Self(0);

    /// Conventional fiat scale (2)
    pub const FIAT: Self = Self(2);

    /// Bitcoin-style scale (8)
    pub const SATOSHI: Self = Self(8);

    /// Ether-style scale (18)
    pub const WEI: Self = Self(18);

    /// Create a new display scale
    pub const fn new(digits: u8) -> Self {
        Self(digits)
    }

    /// Get the inner u8 value
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// Scale as the exponent type used by `BigDecimal`
    pub const fn as_i64(&self) -> i64 {
        self.0 as i64
    }
}

impl From<u8> for DisplayScale {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for DisplayScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} decimals", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_scale_constants() {
        assert_eq!(DisplayScale::ZERO.as_u8(), 0);
        assert_eq!(DisplayScale::FIAT.as_u8(), 2);
        assert_eq!(DisplayScale::SATOSHI.as_u8(), 8);
        assert_eq!(DisplayScale::WEI.as_u8(), 18);
    }

    #[test]
    fn test_display_formatting() {
        assert_eq!(format!("{}", DisplayScale::FIAT), "2 decimals");
    }

    #[test]
    fn test_ordering() {
        assert!(DisplayScale::FIAT < DisplayScale::SATOSHI);
        assert!(DisplayScale::WEI > DisplayScale::SATOSHI);
    }

    #[test]
    fn test_serialization() {
        let scale = DisplayScale::SATOSHI;
        let json = serde_json::to_string(&scale).unwrap();
        assert_eq!(json, "8");
        let deserialized: DisplayScale = serde_json::from_str(&json).unwrap();
        assert_eq!(scale, deserialized);
    }
}
