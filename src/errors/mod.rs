// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the tokenkit library.
//!
//! This module follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained handling
//!   ([`AmountError`], [`RegistryError`])
//! - **Unified error type** ([`TokenError`]) for convenience when you don't
//!   need to distinguish between error sources
//!
//! All errors are raised synchronously at construction time. There is no
//! partial success: an operation either produces a complete value or fails.
//!
//! # Examples
//!
//! ## Fine-grained error handling
//!
//! ```rust
//! use tokenkit::{amount, AmountError, GBP};
//!
//! match amount(-10, GBP) {
//!     Ok(value) => println!("Built {}", value),
//!     Err(AmountError::InvalidAmount { literal, reason }) => {
//!         eprintln!("Rejected {}: {}", literal, reason);
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```
//!
//! ## Using the unified error type
//!
//! ```rust
//! use tokenkit::{amount, Money, TokenError};
//!
//! fn hundred_of(code: &str) -> Result<String, TokenError> {
//!     let currency = Money::lookup(code)?;
//!     let value = amount(100, currency)?;
//!     Ok(value.to_string())
//! }
//!
//! assert_eq!(hundred_of("USD").unwrap(), "100.00 USD");
//! assert!(hundred_of("XYZ").is_err());
//! ```

mod amount;
mod registry;

pub use amount::AmountError;
pub use registry::RegistryError;

/// Unified error type for all tokenkit operations.
///
/// Module-specific error types convert into `TokenError` via `From`, so `?`
/// propagates them naturally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// Error from amount construction, issuance or arithmetic.
    #[error("Amount error: {0}")]
    Amount(#[from] AmountError),

    /// Error from the currency registry.
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}
