// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Typed token amounts with issuer and owner metadata.
//!
//! tokenkit models how a token definition, an issuer, an owner and a numeric
//! quantity compose into well-typed values for a host ledger:
//!
//! ```text
//! literal → Amount<Token> → Amount<Issued<Token>> → OwnedTokenAmount
//!                 Token   →        Issued<Token>  → OwnedToken
//! ```
//!
//! Tokens come in two kinds. Fixed tokens ([`FiatCurrency`],
//! [`DigitalCurrency`], [`Money`] or your own [`FixedToken`]) embed their
//! definition by value. Evolvable tokens live in the host ledger and are
//! referenced through a [`TokenPointer`] that caches their display scale.
//!
//! Every value is immutable once built and every constructor is a pure
//! function, so all of it can be shared freely across threads.
//!
//! # Example
//!
//! ```rust
//! use alloy_primitives::B256;
//! use tokenkit::{gbp, Party, TokenError};
//!
//! fn main() -> Result<(), TokenError> {
//!     let bank = Party::new("Bank of England", B256::repeat_byte(1));
//!     let alice = Party::new("Alice", B256::repeat_byte(2));
//!
//!     let owned = gbp(500)?.issued_by(bank).owned_by(alice);
//!     assert_eq!(owned.to_string(), "500.00 GBP issued by Bank of England owned by Alice");
//!     Ok(())
//! }
//! ```

mod amount;
mod errors;
mod helpers;
mod identity;
mod issued;
mod money;
mod owned;
mod registry;
mod spans;
mod token;
mod types;

pub use amount::Amount;
pub use errors::{AmountError, RegistryError, TokenError};
pub use helpers::{amount, btc, eth, eur, gbp, of, usd, QuantityOf};
pub use identity::{AbstractParty, AnonymousParty, Identity, Party};
pub use issued::Issued;
pub use money::{
    DigitalCurrency, FiatCurrency, Money, AUD, BTC, CAD, CHF, DOGE, ETH, EUR, GBP, HKD, JPY, NOK,
    NZD, SEK, SGD, USD, XRP,
};
pub use owned::{OwnedToken, OwnedTokenAmount};
pub use registry::{CurrencyRegistry, CurrencyRegistryBuilder};
pub use token::{EmbeddableToken, EvolvableToken, FixedToken, Token, TokenPointer, TokenResolver, TokenVariant};
pub use types::{DecimalLiteral, DisplayScale, Quantity};

pub use bigdecimal::{BigDecimal, RoundingMode};
