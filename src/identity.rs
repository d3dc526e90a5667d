// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Issuer and owner identities
//!
//! Identities belong to the host ledger. Issued and owned records are generic
//! over any [`Identity`]; the concrete party types here cover the common
//! case of a well-known party with a name and an anonymous key-only party.

use std::fmt::Debug;
use std::hash::Hash;

use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

/// Anything that can act as an issuer or owner
///
/// Only equality is required; validation of identities is the host
/// ledger's responsibility.
pub trait Identity: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Identity for T {}

/// A well-known party with a legal name and an owning key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Party {
    name: String,
    owning_key: B256,
}

impl Party {
    pub fn new(name: impl Into<String>, owning_key: B256) -> Self {
        Self {
            name: name.into(),
            owning_key,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owning_key(&self) -> B256 {
        self.owning_key
    }

    /// Same key, without the name
    pub fn anonymise(&self) -> AnonymousParty {
        AnonymousParty::new(self.owning_key)
    }
}

impl std::fmt::Display for Party {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A party known only by its key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnonymousParty {
    owning_key: B256,
}

impl AnonymousParty {
    pub const fn new(owning_key: B256) -> Self {
        Self { owning_key }
    }

    pub fn owning_key(&self) -> B256 {
        self.owning_key
    }
}

impl std::fmt::Display for AnonymousParty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Anonymous({})", self.owning_key)
    }
}

/// Either kind of party, for owners that may or may not be well known
///
/// Two parties are equal only if they are the same kind; a named party and
/// its anonymised form are distinct identities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbstractParty {
    Named(Party),
    Anonymous(AnonymousParty),
}

impl AbstractParty {
    pub fn owning_key(&self) -> B256 {
        match self {
            AbstractParty::Named(party) => party.owning_key(),
            AbstractParty::Anonymous(party) => party.owning_key(),
        }
    }

    /// Legal name, if the party is well known
    pub fn name(&self) -> Option<&str> {
        match self {
            AbstractParty::Named(party) => Some(party.name()),
            AbstractParty::Anonymous(_) => None,
        }
    }
}

impl From<Party> for AbstractParty {
    fn from(party: Party) -> Self {
        AbstractParty::Named(party)
    }
}

impl From<AnonymousParty> for AbstractParty {
    fn from(party: AnonymousParty) -> Self {
        AbstractParty::Anonymous(party)
    }
}

impl std::fmt::Display for AbstractParty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AbstractParty::Named(party) => write!(f, "{}", party),
            AbstractParty::Anonymous(party) => write!(f, "{}", party),
        }
    }
}
