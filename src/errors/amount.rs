// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for amount construction, issuance and arithmetic.
//!
//! Every variant carries the offending input as text so callers can report
//! exactly which literal, token or variant was rejected.

use std::fmt::Display;

use crate::types::DisplayScale;

/// Errors that can occur when building or combining typed amounts.
///
/// # Examples
///
/// ```rust
/// use tokenkit::{gbp, AmountError};
///
/// match gbp(1.234) {
///     Ok(amount) => println!("Amount: {}", amount),
///     Err(AmountError::PrecisionLoss { literal, display_scale }) => {
///         eprintln!("{} needs more than {}", literal, display_scale);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    /// The literal is negative, non-finite or not a number.
    #[error("Invalid amount {literal}: {reason}")]
    InvalidAmount {
        /// The rejected literal as written
        literal: String,
        /// Why the literal was rejected
        reason: String,
    },

    /// The literal has more fractional digits than the token's display scale.
    ///
    /// Construction never truncates or rounds implicitly; use
    /// [`Amount::from_decimal_rounded`](crate::Amount::from_decimal_rounded)
    /// to opt into a rounding mode.
    #[error("Amount {literal} cannot be represented at {display_scale} without precision loss")]
    PrecisionLoss {
        /// The rejected literal
        literal: String,
        /// Display scale of the target token
        display_scale: DisplayScale,
    },

    /// An operation limited to fixed tokens was invoked on a token pointer.
    #[error("Unsupported token variant '{variant}' for {operation}")]
    UnsupportedTokenVariant {
        /// Name of the variant that was supplied (e.g. "pointer")
        variant: String,
        /// The operation that was attempted
        operation: String,
    },

    /// The scaled quantity does not fit in 256 bits.
    #[error("Amount {literal} overflows the maximum representable quantity")]
    QuantityOverflow {
        /// The literal or operation that overflowed
        literal: String,
    },

    /// Two amounts denominated in different tokens were combined.
    #[error("Token mismatch: expected {expected}, found {found}")]
    TokenMismatch {
        /// Token of the left-hand amount
        expected: String,
        /// Token of the right-hand amount
        found: String,
    },

    /// Subtraction would produce a negative quantity.
    #[error("Insufficient quantity: {available} available, {requested} requested")]
    InsufficientQuantity {
        /// Quantity on the left-hand side
        available: String,
        /// Quantity being subtracted
        requested: String,
    },

    /// A stored amount's display scale disagrees with its token's.
    #[error("Amount display scale {found} does not match token display scale {expected}")]
    DisplayScaleMismatch {
        /// Display scale of the token
        expected: DisplayScale,
        /// Display scale recorded on the amount
        found: DisplayScale,
    },
}

impl AmountError {
    /// Create an `InvalidAmount` error for a literal.
    pub fn invalid_amount(literal: impl Display, reason: impl Into<String>) -> Self {
        AmountError::InvalidAmount {
            literal: literal.to_string(),
            reason: reason.into(),
        }
    }

    /// Helper to create an `InvalidAmount` error for a negative literal.
    pub fn negative(literal: impl Display) -> Self {
        Self::invalid_amount(literal, "amounts cannot be negative")
    }

    /// Create a `PrecisionLoss` error for a literal and target scale.
    pub fn precision_loss(literal: impl Display, display_scale: DisplayScale) -> Self {
        AmountError::PrecisionLoss {
            literal: literal.to_string(),
            display_scale,
        }
    }

    /// Create an `UnsupportedTokenVariant` error.
    pub fn unsupported_variant(variant: impl Into<String>, operation: impl Into<String>) -> Self {
        AmountError::UnsupportedTokenVariant {
            variant: variant.into(),
            operation: operation.into(),
        }
    }

    /// Create a `QuantityOverflow` error.
    pub fn overflow(literal: impl Display) -> Self {
        AmountError::QuantityOverflow {
            literal: literal.to_string(),
        }
    }

    /// Create a `TokenMismatch` error from two token descriptions.
    pub fn token_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        AmountError::TokenMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create an `InsufficientQuantity` error.
    pub fn insufficient(available: impl Display, requested: impl Display) -> Self {
        AmountError::InsufficientQuantity {
            available: available.to_string(),
            requested: requested.to_string(),
        }
    }

    /// Create a `DisplayScaleMismatch` error.
    pub fn scale_mismatch(expected: DisplayScale, found: DisplayScale) -> Self {
        AmountError::DisplayScaleMismatch { expected, found }
    }
}
