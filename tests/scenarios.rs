// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end composition scenarios through the public API
//!
//! literal → amount → issued amount → owned record, plus registry lookups and
//! evolvable tokens resolved through a host-ledger resolver.

use std::collections::HashMap;
use std::str::FromStr;

use alloy_primitives::B256;
use anyhow::Result;
use tokenkit::{
    amount, gbp, AbstractParty, Amount, AmountError, AnonymousParty, BigDecimal, DigitalCurrency,
    DisplayScale, EmbeddableToken, EvolvableToken, Money, Party, Quantity, RegistryError, Token,
    TokenError, TokenPointer, TokenResolver, TokenVariant, BTC, GBP,
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("tokenkit=trace"))
        .with_test_writer()
        .try_init();
}

fn party(name: &str, byte: u8) -> Party {
    Party::new(name, B256::repeat_byte(byte))
}

#[test]
fn whole_pounds() -> Result<()> {
    init_tracing();

    let value = amount(1000, GBP)?;
    assert_eq!(value.quantity(), Quantity::from(100_000u64));
    assert_eq!(value.display_scale(), DisplayScale::FIAT);
    assert_eq!(value.to_decimal(), BigDecimal::from_str("1000.00")?);
    assert_eq!(value.to_string(), "1000.00 GBP");
    Ok(())
}

#[test]
fn fractional_bitcoin() -> Result<()> {
    init_tracing();

    let value = amount(1.5, BTC)?;
    assert_eq!(value.quantity(), Quantity::from(150_000_000u64));
    assert_eq!(value.to_decimal(), BigDecimal::from_str("1.50000000")?);
    assert_eq!(value.to_string(), "1.50000000 BTC");
    Ok(())
}

#[test]
fn too_precise_for_pounds() {
    init_tracing();

    let err = amount(1.234, GBP).unwrap_err();
    assert_eq!(
        err,
        AmountError::PrecisionLoss {
            literal: "1.234".to_string(),
            display_scale: DisplayScale::FIAT,
        }
    );
}

#[test]
fn issue_then_own() -> Result<()> {
    init_tracing();
    let party_a = party("PartyA", 1);
    let party_b = party("PartyB", 2);

    let owned = gbp(500)?.issued_by(party_a.clone()).owned_by(party_b.clone());

    assert_eq!(owned.amount().quantity(), Quantity::from(50_000u64));
    assert_eq!(owned.amount().display_scale(), DisplayScale::FIAT);
    assert_eq!(owned.amount().to_decimal(), BigDecimal::from(500));
    assert_eq!(owned.issuer(), &party_a);
    assert_eq!(owned.owner(), &party_b);
    assert_eq!(owned.token(), &GBP.issued_by(party_a));
    Ok(())
}

#[test]
fn issued_token_owned_by_anonymous_party() {
    let issued = GBP.issued_by(party("PartyA", 1));
    let owner = AbstractParty::from(AnonymousParty::new(B256::repeat_byte(3)));
    let owned = issued.clone().owned_by(owner.clone());
    assert_eq!(owned.token(), &issued);
    assert_eq!(owned.owner(), &owner);
}

#[test]
fn registry_lookups() {
    init_tracing();

    let bitcoin = Money::lookup("BTC").unwrap();
    assert_eq!(bitcoin, Money::Digital(DigitalCurrency::get_instance("BTC").unwrap()));
    assert_eq!(bitcoin.symbol(), "BTC");
    assert_eq!(bitcoin.display_scale(), DisplayScale::SATOSHI);

    assert_eq!(
        Money::lookup("XYZ").unwrap_err(),
        RegistryError::UnknownCurrencyCode {
            code: "XYZ".to_string()
        }
    );
}

#[test]
fn unified_error_propagation() {
    fn build(code: &str, literal: &str) -> Result<Amount<Money>, TokenError> {
        let currency = Money::lookup(code)?;
        Ok(amount(literal, currency)?)
    }

    assert!(build("USD", "12.34").is_ok());
    assert!(matches!(build("QQQ", "1"), Err(TokenError::Registry(_))));
    assert!(matches!(
        build("USD", "1.001"),
        Err(TokenError::Amount(AmountError::PrecisionLoss { .. }))
    ));
}

/// A share class whose definition the host ledger may update
#[derive(Debug, Clone, PartialEq)]
struct ShareClass {
    id: B256,
    name: String,
    fractional_digits: u8,
}

impl Token for ShareClass {
    fn display_scale(&self) -> DisplayScale {
        DisplayScale::new(self.fractional_digits)
    }
}

impl EvolvableToken for ShareClass {
    const TOKEN_TYPE: &'static str = "ShareClass";

    fn linear_id(&self) -> B256 {
        self.id
    }
}

struct Ledger {
    definitions: HashMap<B256, ShareClass>,
}

impl TokenResolver for Ledger {
    type Definition = ShareClass;

    fn resolve(&self, pointer: &TokenPointer) -> Option<ShareClass> {
        self.definitions.get(&pointer.id()).cloned()
    }
}

#[test]
fn evolvable_token_lifecycle() -> Result<()> {
    init_tracing();

    let definition = ShareClass {
        id: B256::repeat_byte(0x42),
        name: "ACME Class A".to_string(),
        fractional_digits: 0,
    };
    let pointer = TokenPointer::to(&definition);
    let issuer = party("ACME", 5);
    let holder = party("Fund", 6);

    // Amounts of evolvable tokens are denominated in the issued pointer
    let shares = amount(250, pointer.clone().issued_by(issuer.clone()))?;
    let owned = shares.owned_by(holder.clone());
    assert_eq!(owned.amount().quantity(), Quantity::from(250u64));
    assert_eq!(owned.token().token(), &pointer);

    // The definition evolves; the pointer keeps resolving to the latest
    let evolved = ShareClass {
        name: "ACME Class A (renamed)".to_string(),
        fractional_digits: 2,
        ..definition
    };
    let ledger = Ledger {
        definitions: HashMap::from([(evolved.id, evolved.clone())]),
    };
    let resolved = pointer.resolve(&ledger).expect("definition is known");
    assert_eq!(resolved.name, "ACME Class A (renamed)");

    // The cached scale keeps the value captured when the pointer was built
    assert_eq!(pointer.display_scale(), DisplayScale::ZERO);
    assert_ne!(pointer.display_scale(), resolved.display_scale());
    Ok(())
}

#[test]
fn fixed_only_operations_on_runtime_variants() {
    let pointer: TokenVariant =
        TokenPointer::new(B256::repeat_byte(1), "ShareClass", DisplayScale::ZERO).into();

    let err = pointer.clone().amount_of(1).unwrap_err();
    assert!(matches!(err, AmountError::UnsupportedTokenVariant { ref variant, .. } if variant == "pointer"));

    let amount = Amount::from_decimal(1, pointer).unwrap();
    let err = amount.try_issued_by(party("Issuer", 1)).unwrap_err();
    assert!(matches!(err, AmountError::UnsupportedTokenVariant { ref operation, .. } if operation == "issued_by"));

    let fixed: TokenVariant = BTC.into();
    let issued = fixed
        .amount_of(0.001)
        .unwrap()
        .try_issued_by(party("Issuer", 1))
        .unwrap();
    assert_eq!(issued.quantity(), Quantity::from(100_000u64));
}
