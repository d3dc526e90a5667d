// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Tokens bound to an issuer

use serde::{Deserialize, Serialize};

use crate::identity::{Identity, Party};
use crate::owned::OwnedToken;
use crate::token::{EmbeddableToken, Token};
use crate::types::DisplayScale;

/// A token together with the party that issued it
///
/// Equality is structural: the same token issued by two different parties
/// gives two different issued tokens. An issued token is its own
/// denomination and is not interchangeable with the bare token.
///
/// Created through [`EmbeddableToken::issued_by`].
///
/// # Examples
///
/// ```
/// use alloy_primitives::B256;
/// use tokenkit::{EmbeddableToken, Party, GBP};
///
/// let barclays = Party::new("Barclays", B256::repeat_byte(1));
/// let hsbc = Party::new("HSBC", B256::repeat_byte(2));
///
/// assert_eq!(GBP.issued_by(barclays.clone()), GBP.issued_by(barclays.clone()));
/// assert_ne!(GBP.issued_by(barclays), GBP.issued_by(hsbc));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Issued<T, I = Party> {
    issuer: I,
    token: T,
}

impl<T, I> Issued<T, I> {
    pub(crate) fn new(issuer: I, token: T) -> Self {
        Self { issuer, token }
    }

    pub fn issuer(&self) -> &I {
        &self.issuer
    }

    pub fn token(&self) -> &T {
        &self.token
    }
}

impl<T: EmbeddableToken, I: Identity> Issued<T, I> {
    /// Record `owner` as the holder of this issued token
    pub fn owned_by<O: Identity>(self, owner: O) -> OwnedToken<T, I, O> {
        OwnedToken::new(self, owner)
    }
}

impl<T: Token, I> Token for Issued<T, I> {
    fn display_scale(&self) -> DisplayScale {
        self.token.display_scale()
    }
}

impl<T: std::fmt::Display, I: std::fmt::Display> std::fmt::Display for Issued<T, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} issued by {}", self.token, self.issuer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{BTC, GBP};
    use crate::token::TokenPointer;
    use alloy_primitives::B256;

    fn party(name: &str, byte: u8) -> Party {
        Party::new(name, B256::repeat_byte(byte))
    }

    #[test]
    fn test_issued_keeps_parts() {
        let issuer = party("Bank", 1);
        let issued = GBP.issued_by(issuer.clone());
        assert_eq!(issued.issuer(), &issuer);
        assert_eq!(issued.token(), &GBP);
    }

    #[test]
    fn test_issued_display_scale_delegates() {
        let issued = BTC.issued_by(party("Exchange", 2));
        assert_eq!(issued.display_scale(), DisplayScale::SATOSHI);
    }

    #[test]
    fn test_pointer_can_be_issued() {
        let pointer = TokenPointer::new(B256::repeat_byte(3), "House", DisplayScale::ZERO);
        let issued = pointer.clone().issued_by(party("Developer", 3));
        assert_eq!(issued.token(), &pointer);
        assert_eq!(issued.display_scale(), DisplayScale::ZERO);
    }

    #[test]
    fn test_equality_is_structural() {
        let a = party("A", 1);
        let b = party("B", 2);
        assert_eq!(GBP.issued_by(a.clone()), GBP.issued_by(a.clone()));
        assert_ne!(GBP.issued_by(a.clone()), GBP.issued_by(b));
        assert_ne!(
            crate::Money::from(GBP).issued_by(a.clone()),
            crate::Money::from(BTC).issued_by(a)
        );
    }

    #[test]
    fn test_display_formatting() {
        let issued = GBP.issued_by(party("Bank of England", 1));
        assert_eq!(issued.to_string(), "GBP issued by Bank of England");
    }
}
