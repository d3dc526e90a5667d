// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Pointers to externally stored, evolvable token definitions

use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

use super::Token;
use crate::types::DisplayScale;

/// A token definition that lives outside the records that reference it
///
/// Evolvable definitions can change independently of who holds them, so
/// they are never embedded directly. Records embed a [`TokenPointer`]
/// instead.
pub trait EvolvableToken: Token {
    /// Stable type name recorded in pointers to this kind of definition
    const TOKEN_TYPE: &'static str;

    /// Globally unique, stable identifier of this definition
    fn linear_id(&self) -> B256;
}

/// Resolves pointers back to the definitions they reference
///
/// Supplied by the host ledger. Nothing in this crate calls it on its own.
pub trait TokenResolver {
    /// The definition type this resolver produces
    type Definition: EvolvableToken;

    /// Look up the current definition, if the ledger knows it
    fn resolve(&self, pointer: &TokenPointer) -> Option<Self::Definition>;
}

/// Reference to an evolvable token definition
///
/// The display scale is copied from the definition when the pointer is
/// created so amounts can be built without resolving. If the external
/// definition later changes its scale, the cached value goes stale; the
/// ledger that owns the definition is responsible for re-validating.
///
/// # Examples
///
/// ```
/// use alloy_primitives::B256;
/// use tokenkit::{DisplayScale, EvolvableToken, Token, TokenPointer};
///
/// struct HouseToken {
///     id: B256,
/// }
///
/// impl Token for HouseToken {
///     fn display_scale(&self) -> DisplayScale {
///         DisplayScale::ZERO
///     }
/// }
///
/// impl EvolvableToken for HouseToken {
///     const TOKEN_TYPE: &'static str = "HouseToken";
///
///     fn linear_id(&self) -> B256 {
///         self.id
///     }
/// }
///
/// let house = HouseToken { id: B256::repeat_byte(7) };
/// let pointer = TokenPointer::to(&house);
/// assert_eq!(pointer.id(), house.linear_id());
/// assert_eq!(pointer.display_scale(), DisplayScale::ZERO);
/// assert!(pointer.points_to::<HouseToken>());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenPointer {
    id: B256,
    token_type: String,
    display_scale: DisplayScale,
}

impl TokenPointer {
    /// Create a pointer from its raw parts
    pub fn new(id: B256, token_type: impl Into<String>, display_scale: DisplayScale) -> Self {
        Self {
            id,
            token_type: token_type.into(),
            display_scale,
        }
    }

    /// Create a pointer to a definition, caching its current display scale
    pub fn to<T: EvolvableToken>(definition: &T) -> Self {
        Self::new(
            definition.linear_id(),
            T::TOKEN_TYPE,
            definition.display_scale(),
        )
    }

    /// Stable identifier of the referenced definition
    pub fn id(&self) -> B256 {
        self.id
    }

    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    /// Whether this pointer was created for definitions of type `T`
    pub fn points_to<T: EvolvableToken>(&self) -> bool {
        self.token_type == T::TOKEN_TYPE
    }

    /// Resolve through the host ledger's resolver
    ///
    /// Returns `None` when the resolver produces a different definition type
    /// than the pointer was created for, or when it has no definition for the
    /// id.
    pub fn resolve<R: TokenResolver>(&self, resolver: &R) -> Option<R::Definition> {
        if !self.points_to::<R::Definition>() {
            tracing::debug!(
                pointer = %self,
                resolver_type = <R::Definition as EvolvableToken>::TOKEN_TYPE,
                "Token pointer type does not match resolver"
            );
            return None;
        }

        let definition = resolver.resolve(self)?;
        if definition.display_scale() != self.display_scale {
            tracing::debug!(
                pointer = %self,
                cached_scale = self.display_scale.as_u8(),
                current_scale = definition.display_scale().as_u8(),
                "Cached display scale is stale"
            );
        }
        Some(definition)
    }
}

impl Token for TokenPointer {
    fn display_scale(&self) -> DisplayScale {
        self.display_scale
    }
}

impl std::fmt::Display for TokenPointer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pointer({}, {})", self.id, self.token_type)
    }
}
