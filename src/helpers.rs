// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Shorthands for building amounts
//!
//! ```
//! use tokenkit::{amount, btc, gbp, QuantityOf, GBP};
//!
//! assert_eq!(gbp(1_000).unwrap(), amount(1_000, GBP).unwrap());
//! assert_eq!(1_000u32.of(GBP).unwrap(), amount(1_000, GBP).unwrap());
//! assert_eq!(btc(1.5).unwrap().to_string(), "1.50000000 BTC");
//! ```

use crate::amount::Amount;
use crate::errors::AmountError;
use crate::money::{DigitalCurrency, FiatCurrency, BTC, ETH, EUR, GBP, USD};
use crate::token::{FixedToken, Token};
use crate::types::DecimalLiteral;

/// Build an amount of any token from a literal
///
/// Same as [`Amount::from_decimal`].
pub fn amount<T: Token, L: DecimalLiteral>(literal: L, token: T) -> Result<Amount<T>, AmountError> {
    Amount::from_decimal(literal, token)
}

/// Build an amount of a fixed token from a literal
///
/// Pointers are rejected at compile time: an amount of an evolvable token
/// needs issuer context that a bare literal cannot supply.
pub fn of<T: FixedToken, L: DecimalLiteral>(literal: L, token: T) -> Result<Amount<T>, AmountError> {
    Amount::from_decimal(literal, token)
}

/// `literal.of(token)` method syntax for [`of`]
pub trait QuantityOf: DecimalLiteral + Sized {
    fn of<T: FixedToken>(self, token: T) -> Result<Amount<T>, AmountError> {
        of(self, token)
    }
}

impl<L: DecimalLiteral> QuantityOf for L {}

/// Pounds sterling
pub fn gbp<L: DecimalLiteral>(literal: L) -> Result<Amount<FiatCurrency>, AmountError> {
    amount(literal, GBP)
}

/// US dollars
pub fn usd<L: DecimalLiteral>(literal: L) -> Result<Amount<FiatCurrency>, AmountError> {
    amount(literal, USD)
}

/// Euros
pub fn eur<L: DecimalLiteral>(literal: L) -> Result<Amount<FiatCurrency>, AmountError> {
    amount(literal, EUR)
}

/// Bitcoin
pub fn btc<L: DecimalLiteral>(literal: L) -> Result<Amount<DigitalCurrency>, AmountError> {
    amount(literal, BTC)
}

/// Ether
pub fn eth<L: DecimalLiteral>(literal: L) -> Result<Amount<DigitalCurrency>, AmountError> {
    amount(literal, ETH)
}
