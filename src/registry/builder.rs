// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Builder for custom currency registries

use std::collections::BTreeSet;

use super::CurrencyRegistry;
use crate::errors::RegistryError;
use crate::money::{DigitalCurrency, FiatCurrency, BUILTIN_DIGITAL, BUILTIN_FIAT};
use crate::spans;

/// Builder for [`CurrencyRegistry`]
///
/// Provides a fluent API for assembling a registry. The process-wide
/// registry cannot be extended; build a separate value instead.
///
/// # Example
///
/// ```rust
/// use tokenkit::{CurrencyRegistryBuilder, DisplayScale, FiatCurrency};
///
/// let registry = CurrencyRegistryBuilder::new()
///     .fiat(FiatCurrency::new("GBP", "British Pound Sterling", DisplayScale::FIAT))
///     .fiat(FiatCurrency::new("KWD", "Kuwaiti Dinar", DisplayScale::new(3)))
///     .build()
///     .unwrap();
///
/// assert_eq!(registry.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CurrencyRegistryBuilder {
    fiat: Vec<FiatCurrency>,
    digital: Vec<DigitalCurrency>,
}

impl CurrencyRegistryBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the built-in fiat and digital currencies
    ///
    /// ```rust
    /// use tokenkit::CurrencyRegistryBuilder;
    ///
    /// let registry = CurrencyRegistryBuilder::with_defaults().build().unwrap();
    /// assert!(registry.contains("USD"));
    /// assert!(registry.contains("BTC"));
    /// ```
    pub fn with_defaults() -> Self {
        Self {
            fiat: BUILTIN_FIAT.to_vec(),
            digital: BUILTIN_DIGITAL.to_vec(),
        }
    }

    /// Add a fiat currency
    pub fn fiat(mut self, currency: FiatCurrency) -> Self {
        self.fiat.push(currency);
        self
    }

    /// Add a digital currency
    pub fn digital(mut self, currency: DigitalCurrency) -> Self {
        self.digital.push(currency);
        self
    }

    /// Build the registry
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidFiatCode`] if a fiat code is not three
    ///   uppercase ASCII letters. Digital tickers are not constrained.
    /// - [`RegistryError::DuplicateCurrencyCode`] if a code appears twice
    ///   within the same family. The same code may appear once in each
    ///   family; fiat wins on [`CurrencyRegistry::lookup`].
    pub fn build(self) -> Result<CurrencyRegistry, RegistryError> {
        let span = spans::registry_build(self.fiat.len(), self.digital.len());
        let _guard = span.enter();

        for currency in &self.fiat {
            ensure_iso_code(currency.symbol())?;
        }
        ensure_unique(self.fiat.iter().map(FiatCurrency::symbol))?;
        ensure_unique(self.digital.iter().map(DigitalCurrency::symbol))?;

        Ok(CurrencyRegistry::from_parts(self.fiat, self.digital))
    }
}

fn ensure_iso_code(code: &str) -> Result<(), RegistryError> {
    if code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase()) {
        return Ok(());
    }
    tracing::debug!(code, "Fiat code is not an ISO 4217 style code");
    Err(RegistryError::invalid_fiat_code(code))
}

fn ensure_unique<'a>(codes: impl Iterator<Item = &'a str>) -> Result<(), RegistryError> {
    let mut seen = BTreeSet::new();
    for code in codes {
        if !seen.insert(code) {
            tracing::debug!(code, "Duplicate currency code in registry builder");
            return Err(RegistryError::duplicate_code(code));
        }
    }
    Ok(())
}
