// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for currency registry lookups and construction.

/// Errors that can occur when building or querying a currency registry.
///
/// # Examples
///
/// ```rust
/// use tokenkit::{Money, RegistryError};
///
/// match Money::lookup("XYZ") {
///     Ok(currency) => println!("Found {}", currency),
///     Err(RegistryError::UnknownCurrencyCode { code }) => {
///         eprintln!("No currency registered for {}", code);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// No currency with this code exists in the registry.
    #[error("Unknown currency code: {code}")]
    UnknownCurrencyCode {
        /// The code that was looked up
        code: String,
    },

    /// The same code was registered twice within one currency family.
    #[error("Duplicate currency code: {code}")]
    DuplicateCurrencyCode {
        /// The duplicated code
        code: String,
    },

    /// A fiat code is not three uppercase ASCII letters.
    #[error("Invalid fiat currency code '{code}': expected three uppercase ASCII letters")]
    InvalidFiatCode {
        /// The rejected code
        code: String,
    },
}

impl RegistryError {
    /// Create an `UnknownCurrencyCode` error.
    pub fn unknown_code(code: impl Into<String>) -> Self {
        RegistryError::UnknownCurrencyCode { code: code.into() }
    }

    /// Create a `DuplicateCurrencyCode` error.
    pub fn duplicate_code(code: impl Into<String>) -> Self {
        RegistryError::DuplicateCurrencyCode { code: code.into() }
    }

    /// Create an `InvalidFiatCode` error.
    pub fn invalid_fiat_code(code: impl Into<String>) -> Self {
        RegistryError::InvalidFiatCode { code: code.into() }
    }
}
