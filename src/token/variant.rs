// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Runtime sum of the two embeddable token variants

use serde::{Deserialize, Serialize};

use super::{FixedToken, Token, TokenPointer};
use crate::amount::Amount;
use crate::errors::AmountError;
use crate::money::Money;
use crate::types::{DecimalLiteral, DisplayScale};

/// Either a fixed definition or a pointer to an evolvable one
///
/// Use this when the kind of token is only known at runtime, for example
/// when records holding both kinds are stored side by side. Operations
/// restricted to fixed tokens are available through runtime-checked
/// methods that fail with [`AmountError::UnsupportedTokenVariant`].
///
/// # Examples
///
/// ```
/// use tokenkit::{TokenVariant, GBP};
///
/// let fixed: TokenVariant = GBP.into();
/// assert_eq!(fixed.variant_name(), "fixed");
/// assert!(fixed.amount_of(10).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenVariant<F = Money> {
    /// Definition embedded by value
    Fixed(F),
    /// Reference to an externally stored definition
    Pointer(TokenPointer),
}

impl<F: FixedToken> TokenVariant<F> {
    /// Name of the active variant, used in error reports
    pub fn variant_name(&self) -> &'static str {
        match self {
            TokenVariant::Fixed(_) => "fixed",
            TokenVariant::Pointer(_) => "pointer",
        }
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, TokenVariant::Fixed(_))
    }

    pub fn as_fixed(&self) -> Option<&F> {
        match self {
            TokenVariant::Fixed(token) => Some(token),
            TokenVariant::Pointer(_) => None,
        }
    }

    pub fn as_pointer(&self) -> Option<&TokenPointer> {
        match self {
            TokenVariant::Fixed(_) => None,
            TokenVariant::Pointer(pointer) => Some(pointer),
        }
    }

    /// Runtime-checked `of` shorthand
    ///
    /// # Errors
    ///
    /// Fails with [`AmountError::UnsupportedTokenVariant`] for pointers, and
    /// otherwise with the same errors as [`Amount::from_decimal`].
    pub fn amount_of<L: DecimalLiteral>(self, literal: L) -> Result<Amount<Self>, AmountError> {
        self.require_fixed("of")?;
        Amount::from_decimal(literal, self)
    }

    pub(crate) fn require_fixed(&self, operation: &str) -> Result<(), AmountError> {
        match self {
            TokenVariant::Fixed(_) => Ok(()),
            TokenVariant::Pointer(pointer) => {
                tracing::debug!(
                    pointer = %pointer,
                    operation,
                    "Rejected fixed-only operation on token pointer"
                );
                Err(AmountError::unsupported_variant(self.variant_name(), operation))
            }
        }
    }
}

impl<F: FixedToken> Token for TokenVariant<F> {
    fn display_scale(&self) -> DisplayScale {
        match self {
            TokenVariant::Fixed(token) => token.display_scale(),
            TokenVariant::Pointer(pointer) => pointer.display_scale(),
        }
    }
}

impl<F: FixedToken> From<F> for TokenVariant<F> {
    fn from(token: F) -> Self {
        TokenVariant::Fixed(token)
    }
}

impl<F: FixedToken> From<TokenPointer> for TokenVariant<F> {
    fn from(pointer: TokenPointer) -> Self {
        TokenVariant::Pointer(pointer)
    }
}

impl<F: std::fmt::Display> std::fmt::Display for TokenVariant<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenVariant::Fixed(token) => write!(f, "{}", token),
            TokenVariant::Pointer(pointer) => write!(f, "{}", pointer),
        }
    }
}
