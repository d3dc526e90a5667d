// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Typed token amounts
//!
//! # Type Relationships
//!
//! ```text
//! literal (u64, f64, &str, BigDecimal, ...)
//!     |
//!     | Amount::from_decimal(literal, token)
//!     ↓
//! Amount<T>                       T: Token
//!     |
//!     | issued_by(issuer)         T: FixedToken only
//!     ↓
//! Amount<Issued<T, I>>
//!     |
//!     | owned_by(owner)
//!     ↓
//! OwnedTokenAmount<T, I, O>
//! ```

use std::fmt::Debug;

use bigdecimal::num_bigint::Sign;
use bigdecimal::{BigDecimal, RoundingMode};
use serde::{Deserialize, Serialize};

use crate::errors::AmountError;
use crate::identity::Identity;
use crate::issued::Issued;
use crate::owned::OwnedTokenAmount;
use crate::spans;
use crate::token::{EmbeddableToken, FixedToken, Token, TokenVariant};
use crate::types::{DecimalLiteral, DisplayScale, Quantity};

/// A non-negative quantity denominated in a token
///
/// The quantity counts the token's smallest display unit; the decimal value
/// is `quantity / 10^display_scale`. The display scale always equals the
/// token's display scale at construction time.
///
/// # Examples
///
/// ```
/// use tokenkit::{Amount, Quantity, BTC, GBP};
///
/// let pounds = Amount::from_decimal(1000, GBP).unwrap();
/// assert_eq!(pounds.quantity(), Quantity::from(100_000u64));
/// assert_eq!(pounds.to_string(), "1000.00 GBP");
///
/// let bitcoin = Amount::from_decimal(1.5, BTC).unwrap();
/// assert_eq!(bitcoin.quantity(), Quantity::from(150_000_000u64));
/// assert_eq!(bitcoin.to_string(), "1.50000000 BTC");
///
/// assert!(Amount::from_decimal(1.234, GBP).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "AmountFields<T>",
    bound(deserialize = "T: Token + Deserialize<'de>")
)]
pub struct Amount<T> {
    quantity: Quantity,
    display_scale: DisplayScale,
    token: T,
}

/// Serialized layout of [`Amount`], checked against the token on the way in
#[derive(Deserialize)]
struct AmountFields<T> {
    quantity: Quantity,
    display_scale: DisplayScale,
    token: T,
}

impl<T: Token> TryFrom<AmountFields<T>> for Amount<T> {
    type Error = AmountError;

    fn try_from(fields: AmountFields<T>) -> Result<Self, Self::Error> {
        let expected = fields.token.display_scale();
        if fields.display_scale != expected {
            return Err(AmountError::scale_mismatch(expected, fields.display_scale));
        }
        Ok(Self::new(fields.quantity, fields.token))
    }
}

impl<T: Token> Amount<T> {
    /// Create an amount from a raw smallest-unit quantity
    pub fn new(quantity: Quantity, token: T) -> Self {
        Self {
            quantity,
            display_scale: token.display_scale(),
            token,
        }
    }

    pub fn zero(token: T) -> Self {
        Self::new(Quantity::ZERO, token)
    }

    /// Create an amount from a decimal literal
    ///
    /// The literal is converted to an exact decimal and must be representable
    /// at the token's display scale without dropping digits. Trailing zeros
    /// beyond the scale are fine (`"1.500"` of a 2-decimal token is 1.50).
    ///
    /// # Errors
    ///
    /// - [`AmountError::InvalidAmount`] for negative, non-finite or
    ///   unparsable literals
    /// - [`AmountError::PrecisionLoss`] if the literal needs more fractional
    ///   digits than the token's display scale
    /// - [`AmountError::QuantityOverflow`] if the scaled quantity exceeds
    ///   256 bits
    pub fn from_decimal<L: DecimalLiteral>(literal: L, token: T) -> Result<Self, AmountError> {
        let display_scale = token.display_scale();
        let span = spans::amount_from_decimal(display_scale, false);
        let _guard = span.enter();

        let value = literal.into_decimal().inspect_err(|e| {
            tracing::debug!(error = %e, "Rejected amount literal");
        })?;

        if value.sign() == Sign::NoSign {
            return Ok(Self::zero(token));
        }
        ensure_integer_fits(&value)?;

        let normalized = value.normalized();
        if normalized.fractional_digit_count() > display_scale.as_i64() {
            tracing::debug!(
                literal = %value,
                display_scale = display_scale.as_u8(),
                "Literal exceeds token display scale"
            );
            return Err(AmountError::precision_loss(&value, display_scale));
        }

        let scaled = normalized.with_scale(display_scale.as_i64());
        Self::from_scaled(&value, &scaled, token)
    }

    /// Create an amount from a decimal literal, rounding to the display scale
    ///
    /// Opt-in alternative to [`from_decimal`](Self::from_decimal) for callers
    /// that accept a rounding step. Negative and non-finite literals are
    /// still rejected.
    ///
    /// ```
    /// use tokenkit::{Amount, RoundingMode, GBP};
    ///
    /// let up = Amount::from_decimal_rounded(1.235, GBP, RoundingMode::HalfUp).unwrap();
    /// assert_eq!(up.to_string(), "1.24 GBP");
    ///
    /// let even = Amount::from_decimal_rounded(1.235, GBP, RoundingMode::HalfEven).unwrap();
    /// assert_eq!(even.to_string(), "1.24 GBP");
    ///
    /// let down = Amount::from_decimal_rounded(1.239, GBP, RoundingMode::Floor).unwrap();
    /// assert_eq!(down.to_string(), "1.23 GBP");
    /// ```
    pub fn from_decimal_rounded<L: DecimalLiteral>(
        literal: L,
        token: T,
        mode: RoundingMode,
    ) -> Result<Self, AmountError> {
        let display_scale = token.display_scale();
        let span = spans::amount_from_decimal(display_scale, true);
        let _guard = span.enter();

        let value = literal.into_decimal().inspect_err(|e| {
            tracing::debug!(error = %e, "Rejected amount literal");
        })?;

        if value.sign() == Sign::NoSign {
            return Ok(Self::zero(token));
        }
        ensure_integer_fits(&value)?;

        let scaled = value.with_scale_round(display_scale.as_i64(), mode);
        Self::from_scaled(&value, &scaled, token)
    }

    /// `scaled` must already carry exactly the token's display scale
    fn from_scaled(literal: &BigDecimal, scaled: &BigDecimal, token: T) -> Result<Self, AmountError> {
        let (digits, _) = scaled.as_bigint_and_exponent();
        let quantity = Quantity::from_bigint(&digits).ok_or_else(|| {
            tracing::debug!(literal = %literal, "Scaled quantity does not fit in 256 bits");
            AmountError::overflow(literal)
        })?;
        Ok(Self::new(quantity, token))
    }

    /// Count of smallest display units
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn display_scale(&self) -> DisplayScale {
        self.display_scale
    }

    pub fn token(&self) -> &T {
        &self.token
    }

    pub fn into_token(self) -> T {
        self.token
    }

    pub fn is_zero(&self) -> bool {
        self.quantity.is_zero()
    }

    /// Exact decimal value
    ///
    /// ```
    /// use bigdecimal::BigDecimal;
    /// use tokenkit::{Amount, GBP};
    ///
    /// let amount = Amount::from_decimal(1000, GBP).unwrap();
    /// assert_eq!(amount.to_decimal(), BigDecimal::from(1000));
    /// ```
    pub fn to_decimal(&self) -> BigDecimal {
        self.quantity.to_decimal(self.display_scale)
    }
}

impl<T: Token + PartialEq + Debug> Amount<T> {
    /// Add two amounts of the same token
    ///
    /// # Errors
    ///
    /// - [`AmountError::TokenMismatch`] if the tokens or scales differ
    /// - [`AmountError::QuantityOverflow`] if the sum exceeds 256 bits
    pub fn checked_add(self, rhs: Self) -> Result<Self, AmountError> {
        self.ensure_same_token(&rhs)?;
        let quantity = self
            .quantity
            .checked_add(rhs.quantity)
            .ok_or_else(|| AmountError::overflow(format!("{} + {}", self.quantity, rhs.quantity)))?;
        Ok(Self { quantity, ..self })
    }

    /// Subtract an amount of the same token
    ///
    /// # Errors
    ///
    /// - [`AmountError::TokenMismatch`] if the tokens or scales differ
    /// - [`AmountError::InsufficientQuantity`] if the result would be negative
    pub fn checked_sub(self, rhs: Self) -> Result<Self, AmountError> {
        self.ensure_same_token(&rhs)?;
        let quantity = self
            .quantity
            .checked_sub(rhs.quantity)
            .ok_or_else(|| AmountError::insufficient(self.quantity, rhs.quantity))?;
        Ok(Self { quantity, ..self })
    }

    fn ensure_same_token(&self, rhs: &Self) -> Result<(), AmountError> {
        if self.token != rhs.token || self.display_scale != rhs.display_scale {
            return Err(AmountError::token_mismatch(
                format!("{:?}", self.token),
                format!("{:?}", rhs.token),
            ));
        }
        Ok(())
    }
}

impl<T: FixedToken> Amount<T> {
    /// Re-denominate in the issued form of the token
    ///
    /// Quantity and display scale are preserved exactly. Only amounts of
    /// fixed tokens can be issued this way; amounts of evolvable tokens go
    /// through the host ledger, which understands pointer semantics.
    ///
    /// ```
    /// use alloy_primitives::B256;
    /// use tokenkit::{gbp, Party};
    ///
    /// let bank = Party::new("Bank", B256::repeat_byte(1));
    /// let pounds = gbp(500).unwrap();
    /// let issued = pounds.clone().issued_by(bank.clone());
    ///
    /// assert_eq!(issued.quantity(), pounds.quantity());
    /// assert_eq!(issued.token().issuer(), &bank);
    /// ```
    pub fn issued_by<I: Identity>(self, issuer: I) -> Amount<Issued<T, I>> {
        Amount {
            quantity: self.quantity,
            display_scale: self.display_scale,
            token: self.token.issued_by(issuer),
        }
    }
}

impl<F: FixedToken> Amount<TokenVariant<F>> {
    /// Runtime-checked form of [`issued_by`](Amount::issued_by)
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::UnsupportedTokenVariant`] if the token is a
    /// pointer.
    pub fn try_issued_by<I: Identity>(
        self,
        issuer: I,
    ) -> Result<Amount<Issued<TokenVariant<F>, I>>, AmountError> {
        self.token.require_fixed("issued_by")?;
        Ok(Amount {
            quantity: self.quantity,
            display_scale: self.display_scale,
            token: self.token.issued_by(issuer),
        })
    }
}

impl<T: EmbeddableToken, I: Identity> Amount<Issued<T, I>> {
    pub fn issuer(&self) -> &I {
        self.token.issuer()
    }

    /// Record `owner` as the holder of this amount
    pub fn owned_by<O: Identity>(self, owner: O) -> OwnedTokenAmount<T, I, O> {
        OwnedTokenAmount::new(self, owner)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Amount<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}",
            self.quantity.format_scaled(self.display_scale),
            self.token
        )
    }
}

/// Digits in the largest 256-bit quantity
const MAX_INTEGER_DIGITS: i64 = 78;

/// Rejects literals whose integer part alone is wider than any quantity,
/// before rescaling materializes their full digit string
fn ensure_integer_fits(value: &BigDecimal) -> Result<(), AmountError> {
    let integer_digits = value.digits() as i64 - value.fractional_digit_count();
    if integer_digits > MAX_INTEGER_DIGITS {
        tracing::debug!(literal = %value, integer_digits, "Literal is wider than 256 bits");
        return Err(AmountError::overflow(value));
    }
    Ok(())
}
