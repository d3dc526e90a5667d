// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Ownership records handed to the host ledger
//!
//! These are the terminal values of the composition chain. This crate builds
//! them but neither persists nor transmits them.

use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::identity::{AbstractParty, Identity, Party};
use crate::issued::Issued;
use crate::token::{EmbeddableToken, Token};

/// A single, non-fungible issued token held by an owner
///
/// ```
/// use alloy_primitives::B256;
/// use tokenkit::{EmbeddableToken, Party, GBP};
///
/// let issuer = Party::new("Issuer", B256::repeat_byte(1));
/// let owner = Party::new("Owner", B256::repeat_byte(2));
///
/// let issued = GBP.issued_by(issuer);
/// let owned = issued.clone().owned_by(owner.clone());
/// assert_eq!(owned.token(), &issued);
/// assert_eq!(owned.owner(), &owner);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnedToken<T, I = Party, O = AbstractParty> {
    token: Issued<T, I>,
    owner: O,
}

impl<T: EmbeddableToken, I: Identity, O: Identity> OwnedToken<T, I, O> {
    pub(crate) fn new(token: Issued<T, I>, owner: O) -> Self {
        Self { token, owner }
    }

    pub fn token(&self) -> &Issued<T, I> {
        &self.token
    }

    pub fn owner(&self) -> &O {
        &self.owner
    }

    pub fn issuer(&self) -> &I {
        self.token.issuer()
    }
}

impl<T, I, O> std::fmt::Display for OwnedToken<T, I, O>
where
    T: std::fmt::Display,
    I: std::fmt::Display,
    O: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} owned by {}", self.token, self.owner)
    }
}

/// A fungible amount of an issued token held by an owner
///
/// ```
/// use alloy_primitives::B256;
/// use tokenkit::{gbp, DisplayScale, Party, Quantity};
///
/// let party_a = Party::new("PartyA", B256::repeat_byte(1));
/// let party_b = Party::new("PartyB", B256::repeat_byte(2));
///
/// let owned = gbp(500).unwrap().issued_by(party_a.clone()).owned_by(party_b.clone());
/// assert_eq!(owned.amount().quantity(), Quantity::from(50_000u64));
/// assert_eq!(owned.amount().display_scale(), DisplayScale::FIAT);
/// assert_eq!(owned.issuer(), &party_a);
/// assert_eq!(owned.owner(), &party_b);
/// assert_eq!(owned.to_string(), "500.00 GBP issued by PartyA owned by PartyB");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Token + Deserialize<'de>, I: Deserialize<'de>, O: Deserialize<'de>"))]
pub struct OwnedTokenAmount<T, I = Party, O = AbstractParty> {
    amount: Amount<Issued<T, I>>,
    owner: O,
}

impl<T: EmbeddableToken, I: Identity, O: Identity> OwnedTokenAmount<T, I, O> {
    pub(crate) fn new(amount: Amount<Issued<T, I>>, owner: O) -> Self {
        Self { amount, owner }
    }

    pub fn amount(&self) -> &Amount<Issued<T, I>> {
        &self.amount
    }

    pub fn owner(&self) -> &O {
        &self.owner
    }

    pub fn issuer(&self) -> &I {
        self.amount.issuer()
    }

    /// The issued token the amount is denominated in
    pub fn token(&self) -> &Issued<T, I> {
        self.amount.token()
    }
}

impl<T, I, O> std::fmt::Display for OwnedTokenAmount<T, I, O>
where
    T: std::fmt::Display,
    I: std::fmt::Display,
    O: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} owned by {}", self.amount, self.owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::AnonymousParty;
    use crate::money::{BTC, GBP};
    use crate::token::TokenPointer;
    use crate::types::DisplayScale;
    use alloy_primitives::B256;

    fn party(name: &str, byte: u8) -> Party {
        Party::new(name, B256::repeat_byte(byte))
    }

    #[test]
    fn test_owned_token_is_pure_pairing() {
        let issued = BTC.issued_by(party("Exchange", 1));
        let owner = AbstractParty::from(AnonymousParty::new(B256::repeat_byte(9)));
        let owned = issued.clone().owned_by(owner.clone());
        assert_eq!(owned.token(), &issued);
        assert_eq!(owned.owner(), &owner);
        assert_eq!(owned.issuer(), &party("Exchange", 1));
    }

    #[test]
    fn test_owned_amount_is_pure_pairing() {
        let amount = Amount::from_decimal(0.25, BTC)
            .unwrap()
            .issued_by(party("Exchange", 1));
        let owned = amount.clone().owned_by(party("Alice", 2));
        assert_eq!(owned.amount(), &amount);
        assert_eq!(owned.owner(), &party("Alice", 2));
        assert_eq!(owned.token(), amount.token());
    }

    #[test]
    fn test_owned_pointer_amount() {
        let pointer = TokenPointer::new(B256::repeat_byte(7), "House", DisplayScale::ZERO);
        let issued = pointer.issued_by(party("Developer", 3));
        let amount = Amount::from_decimal(1, issued).unwrap();
        let owned = amount.owned_by(party("Buyer", 4));
        assert_eq!(owned.amount().quantity(), crate::Quantity::from(1u64));
        assert_eq!(owned.issuer(), &party("Developer", 3));
    }

    #[test]
    fn test_owners_distinguish_records() {
        let issued = GBP.issued_by(party("Bank", 1));
        assert_ne!(
            issued.clone().owned_by(party("A", 2)),
            issued.owned_by(party("B", 3))
        );
    }

    #[test]
    fn test_display_formatting() {
        let owned = GBP
            .issued_by(party("Bank", 1))
            .owned_by(party("Alice", 2));
        assert_eq!(owned.to_string(), "GBP issued by Bank owned by Alice");
    }

    #[test]
    fn test_serialization() {
        let owned = Amount::from_decimal(10, GBP)
            .unwrap()
            .issued_by(party("Bank", 1))
            .owned_by(party("Alice", 2));
        let json = serde_json::to_string(&owned).unwrap();
        let deserialized: OwnedTokenAmount<crate::FiatCurrency, Party, Party> =
            serde_json::from_str(&json).unwrap();
        assert_eq!(owned, deserialized);
    }

    #[test]
    fn test_deserialize_checks_nested_amount_scale() {
        let owned = Amount::from_decimal(10, GBP)
            .unwrap()
            .issued_by(party("Bank", 1))
            .owned_by(party("Alice", 2));
        let mut json = serde_json::to_value(&owned).unwrap();
        json["amount"]["display_scale"] = serde_json::json!(0);

        let result: Result<OwnedTokenAmount<crate::FiatCurrency, Party, Party>, _> =
            serde_json::from_value(json);
        assert!(result.is_err());
    }
}
