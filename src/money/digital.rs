// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Digital currency definitions

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::errors::RegistryError;
use crate::registry::CurrencyRegistry;
use crate::token::{FixedToken, Token};
use crate::types::DisplayScale;

/// A cryptocurrency identified by its ticker
///
/// `std` has no notion of currencies that are not ISO 4217, so digital
/// assets get their own definition with an explicit display scale.
///
/// # Examples
///
/// ```
/// use tokenkit::{DigitalCurrency, DisplayScale, Token};
///
/// let bitcoin = DigitalCurrency::get_instance("BTC").unwrap();
/// assert_eq!(bitcoin.description(), "Bitcoin");
/// assert_eq!(bitcoin.display_scale(), DisplayScale::SATOSHI);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DigitalCurrency {
    symbol: Cow<'static, str>,
    description: Cow<'static, str>,
    display_scale: DisplayScale,
}

impl DigitalCurrency {
    /// Define a currency from static strings, usable in constants
    pub const fn from_static(
        symbol: &'static str,
        description: &'static str,
        display_scale: DisplayScale,
    ) -> Self {
        Self {
            symbol: Cow::Borrowed(symbol),
            description: Cow::Borrowed(description),
            display_scale,
        }
    }

    /// Define a currency at runtime, e.g. for a custom registry
    pub fn new(
        symbol: impl Into<String>,
        description: impl Into<String>,
        display_scale: DisplayScale,
    ) -> Self {
        Self {
            symbol: Cow::Owned(symbol.into()),
            description: Cow::Owned(description.into()),
            display_scale,
        }
    }

    /// Look up a ticker in the process-wide registry
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownCurrencyCode`] if the ticker is not a
    /// known digital currency.
    pub fn get_instance(code: &str) -> Result<Self, RegistryError> {
        CurrencyRegistry::global().digital(code).cloned()
    }

    /// Ticker symbol
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl Token for DigitalCurrency {
    fn display_scale(&self) -> DisplayScale {
        self.display_scale
    }
}

impl FixedToken for DigitalCurrency {}

impl std::fmt::Display for DigitalCurrency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Bitcoin, in satoshis
pub const BTC: DigitalCurrency =
    DigitalCurrency::from_static("BTC", "Bitcoin", DisplayScale::SATOSHI);
/// Ether, in wei
pub const ETH: DigitalCurrency = DigitalCurrency::from_static("ETH", "Ethereum", DisplayScale::WEI);
/// XRP, in drops
pub const XRP: DigitalCurrency =
    DigitalCurrency::from_static("XRP", "Ripple", DisplayScale::new(6));
/// Dogecoin
pub const DOGE: DigitalCurrency =
    DigitalCurrency::from_static("DOGE", "Dogecoin", DisplayScale::SATOSHI);

/// Digital currencies known to the default registry
pub(crate) static BUILTIN_DIGITAL: [DigitalCurrency; 4] = [BTC, ETH, XRP, DOGE];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_scales() {
        assert_eq!(BTC.display_scale(), DisplayScale::SATOSHI);
        assert_eq!(ETH.display_scale(), DisplayScale::WEI);
        assert_eq!(XRP.display_scale(), DisplayScale::new(6));
        assert_eq!(DOGE.display_scale(), DisplayScale::SATOSHI);
    }

    #[test]
    fn test_get_instance_is_idempotent() {
        let first = DigitalCurrency::get_instance("ETH").unwrap();
        let second = DigitalCurrency::get_instance("ETH").unwrap();
        assert_eq!(first, second);
        assert_eq!(first, ETH);
    }

    #[test]
    fn test_get_instance_unknown() {
        assert_eq!(
            DigitalCurrency::get_instance("GBP").unwrap_err(),
            RegistryError::unknown_code("GBP")
        );
    }

    #[test]
    fn test_display_formatting() {
        assert_eq!(BTC.to_string(), "BTC");
    }
}
