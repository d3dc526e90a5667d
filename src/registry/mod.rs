// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Currency code lookup
//!
//! A [`CurrencyRegistry`] is an immutable map from code to definition for
//! each currency family. The process-wide registry returned by
//! [`CurrencyRegistry::global`] holds the built-in currencies and is
//! initialized once on first use. Callers needing extra codes build their own
//! registry with [`CurrencyRegistryBuilder`].
//!
//! # Example: Process-wide lookup
//!
//! ```rust
//! use tokenkit::{CurrencyRegistry, Money, BTC};
//!
//! let registry = CurrencyRegistry::global();
//! assert_eq!(registry.lookup("BTC").unwrap(), Money::from(BTC));
//! assert!(registry.lookup("XYZ").is_err());
//! ```
//!
//! # Example: Custom registry
//!
//! ```rust
//! use tokenkit::{CurrencyRegistryBuilder, DigitalCurrency, DisplayScale};
//!
//! let registry = CurrencyRegistryBuilder::with_defaults()
//!     .digital(DigitalCurrency::new("SOL", "Solana", DisplayScale::new(9)))
//!     .build()
//!     .unwrap();
//!
//! assert!(registry.contains("SOL"));
//! assert!(registry.contains("GBP"));
//! ```

mod builder;

pub use builder::CurrencyRegistryBuilder;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::errors::RegistryError;
use crate::money::{DigitalCurrency, FiatCurrency, Money, BUILTIN_DIGITAL, BUILTIN_FIAT};
use crate::spans;

static GLOBAL_REGISTRY: LazyLock<CurrencyRegistry> = LazyLock::new(|| {
    let registry = CurrencyRegistry::builtin();
    tracing::debug!(
        fiat = registry.fiat.len(),
        digital = registry.digital.len(),
        "Initialized process-wide currency registry"
    );
    registry
});

/// Immutable code → currency tables for the fiat and digital families
///
/// Uses `BTreeMap` so code iteration order is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyRegistry {
    fiat: BTreeMap<String, FiatCurrency>,
    digital: BTreeMap<String, DigitalCurrency>,
}

impl Default for CurrencyRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CurrencyRegistry {
    /// The process-wide registry of built-in currencies
    ///
    /// Initialized on first access and never modified afterwards, so it can
    /// be read from any thread without synchronization.
    pub fn global() -> &'static Self {
        &GLOBAL_REGISTRY
    }

    /// Start building a custom registry
    pub fn builder() -> CurrencyRegistryBuilder {
        CurrencyRegistryBuilder::new()
    }

    /// Built-in tables; codes within each family are unique by construction
    pub(crate) fn builtin() -> Self {
        Self::from_parts(BUILTIN_FIAT.iter().cloned(), BUILTIN_DIGITAL.iter().cloned())
    }

    pub(crate) fn from_parts(
        fiat: impl IntoIterator<Item = FiatCurrency>,
        digital: impl IntoIterator<Item = DigitalCurrency>,
    ) -> Self {
        Self {
            fiat: fiat
                .into_iter()
                .map(|c| (c.symbol().to_owned(), c))
                .collect(),
            digital: digital
                .into_iter()
                .map(|c| (c.symbol().to_owned(), c))
                .collect(),
        }
    }

    /// Look up a fiat currency by ISO code
    pub fn fiat(&self, code: &str) -> Result<&FiatCurrency, RegistryError> {
        let span = spans::registry_lookup(code);
        let _guard = span.enter();
        self.fiat
            .get(code)
            .ok_or_else(|| RegistryError::unknown_code(code))
    }

    /// Look up a digital currency by ticker
    pub fn digital(&self, code: &str) -> Result<&DigitalCurrency, RegistryError> {
        let span = spans::registry_lookup(code);
        let _guard = span.enter();
        self.digital
            .get(code)
            .ok_or_else(|| RegistryError::unknown_code(code))
    }

    /// Look up a code in either family
    ///
    /// Fiat codes take precedence when a custom registry defines the same
    /// code in both families.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownCurrencyCode`] if neither family knows
    /// the code. Codes are case-sensitive.
    pub fn lookup(&self, code: &str) -> Result<Money, RegistryError> {
        let span = spans::registry_lookup(code);
        let _guard = span.enter();

        if let Some(currency) = self.fiat.get(code) {
            return Ok(Money::Fiat(currency.clone()));
        }
        if let Some(currency) = self.digital.get(code) {
            return Ok(Money::Digital(currency.clone()));
        }

        tracing::debug!(code, "Unknown currency code");
        Err(RegistryError::unknown_code(code))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.fiat.contains_key(code) || self.digital.contains_key(code)
    }

    /// Fiat codes in ascending order
    pub fn fiat_codes(&self) -> impl Iterator<Item = &str> {
        self.fiat.keys().map(String::as_str)
    }

    /// Digital tickers in ascending order
    pub fn digital_codes(&self) -> impl Iterator<Item = &str> {
        self.digital.keys().map(String::as_str)
    }

    /// Total number of definitions across both families
    pub fn len(&self) -> usize {
        self.fiat.len() + self.digital.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fiat.is_empty() && self.digital.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{BTC, DOGE, ETH, GBP, JPY, USD, XRP};

    #[test]
    fn test_global_is_shared() {
        let a = CurrencyRegistry::global() as *const CurrencyRegistry;
        let b = CurrencyRegistry::global() as *const CurrencyRegistry;
        assert_eq!(a, b);
    }

    #[test]
    fn test_global_matches_default() {
        assert_eq!(CurrencyRegistry::global(), &CurrencyRegistry::default());
    }

    #[test]
    fn test_lookup_idempotent() {
        let registry = CurrencyRegistry::global();
        assert_eq!(registry.lookup("USD").unwrap(), registry.lookup("USD").unwrap());
        assert_eq!(registry.lookup("USD").unwrap(), Money::from(USD));
    }

    #[test]
    fn test_builtin_contents() {
        let registry = CurrencyRegistry::default();
        assert_eq!(registry.fiat("GBP").unwrap(), &GBP);
        assert_eq!(registry.fiat("JPY").unwrap(), &JPY);
        assert_eq!(registry.digital("BTC").unwrap(), &BTC);
        assert_eq!(registry.digital("ETH").unwrap(), &ETH);
        assert_eq!(registry.digital("XRP").unwrap(), &XRP);
        assert_eq!(registry.digital("DOGE").unwrap(), &DOGE);
        assert_eq!(registry.len(), 16);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_unknown_code() {
        let registry = CurrencyRegistry::global();
        for code in ["ZZZ", "XYZ", "", "usd"] {
            assert_eq!(
                registry.lookup(code).unwrap_err(),
                RegistryError::unknown_code(code)
            );
            assert!(!registry.contains(code));
        }
    }

    #[test]
    fn test_family_specific_lookup() {
        let registry = CurrencyRegistry::global();
        assert!(registry.fiat("BTC").is_err());
        assert!(registry.digital("GBP").is_err());
    }

    #[test]
    fn test_codes_are_sorted() {
        let registry = CurrencyRegistry::global();
        let codes: Vec<_> = registry.digital_codes().collect();
        assert_eq!(codes, vec!["BTC", "DOGE", "ETH", "XRP"]);
        let fiat: Vec<_> = registry.fiat_codes().collect();
        let mut sorted = fiat.clone();
        sorted.sort();
        assert_eq!(fiat, sorted);
    }

    #[test]
    fn test_concurrent_lookups() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| CurrencyRegistry::global().lookup("GBP").unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Money::from(GBP));
        }
    }
}
