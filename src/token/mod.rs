// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token capabilities and the two token variants
//!
//! # Type Relationships
//!
//! ```text
//! Token (has a display scale)
//!   ├── FixedToken         definition embedded by value (FiatCurrency, DigitalCurrency, Money)
//!   ├── EvolvableToken     definition stored externally, lives outside this crate
//!   │
//!   └── EmbeddableToken    may be issued and owned (sealed)
//!         ├── every FixedToken
//!         ├── TokenPointer      stable id + cached display scale of an EvolvableToken
//!         └── TokenVariant<F>   runtime sum of the two
//! ```
//!
//! Operations that only make sense for fixed definitions (issuing an amount,
//! the `of` shorthand) take a `T: FixedToken` bound, so passing a pointer is
//! a compile error rather than a runtime failure.

mod pointer;
mod variant;

pub use pointer::{EvolvableToken, TokenPointer, TokenResolver};
pub use variant::TokenVariant;

use crate::identity::Identity;
use crate::issued::Issued;
use crate::types::DisplayScale;

/// Something that can denominate a quantity
pub trait Token {
    /// Number of fractional digits used to render and parse quantities
    ///
    /// Must not change for the lifetime of the value.
    fn display_scale(&self) -> DisplayScale;
}

/// A token whose definition is inlined wherever it is used
///
/// Implement this for your own fixed definitions. They then gain
/// [`EmbeddableToken`] automatically.
pub trait FixedToken: Token {}

mod sealed {
    pub trait Sealed {}
}

/// A token that can be bound to an issuer and embedded in owned records
///
/// Sealed: the only embeddable tokens are fixed tokens, [`TokenPointer`] and
/// [`TokenVariant`].
pub trait EmbeddableToken: Token + sealed::Sealed {
    /// Bind this token to an issuer
    ///
    /// ```
    /// use tokenkit::{EmbeddableToken, Party, GBP};
    ///
    /// let bank = Party::new("Bank of England", [1u8; 32].into());
    /// let issued = GBP.issued_by(bank.clone());
    /// assert_eq!(issued.issuer(), &bank);
    /// assert_eq!(issued.token(), &GBP);
    /// ```
    fn issued_by<I: Identity>(self, issuer: I) -> Issued<Self, I>
    where
        Self: Sized,
    {
        Issued::new(issuer, self)
    }
}

impl<T: FixedToken> sealed::Sealed for T {}
impl<T: FixedToken> EmbeddableToken for T {}

impl sealed::Sealed for TokenPointer {}
impl EmbeddableToken for TokenPointer {}

impl<F: FixedToken> sealed::Sealed for TokenVariant<F> {}
impl<F: FixedToken> EmbeddableToken for TokenVariant<F> {}
