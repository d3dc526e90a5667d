// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for tokenkit operations.
//!
//! Telemetry is kept out of business logic: instead of `#[instrument]`
//! attributes, each instrumented operation has a helper here.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub fn my_operation(&self, param: Type) -> Result<T> {
//!     let span = spans::my_operation(param_value);
//!     let _guard = span.enter();
//!     // Business logic here
//! }
//! ```

use tracing::Span;

use crate::types::DisplayScale;

/// Create span for converting a literal into a typed amount.
///
/// Parent: caller's span
/// Children: None
#[inline]
pub(crate) fn amount_from_decimal(display_scale: DisplayScale, rounded: bool) -> Span {
    tracing::trace_span!(
        "tokenkit.amount_from_decimal",
        display_scale = display_scale.as_u8(),
        rounded = rounded,
    )
}

/// Create span for a currency code lookup.
///
/// Parent: caller's span
/// Children: None
#[inline]
pub(crate) fn registry_lookup(code: &str) -> Span {
    tracing::trace_span!("tokenkit.registry_lookup", code = %code)
}

/// Create span for building a currency registry.
///
/// Parent: None for the process-wide registry, otherwise the caller's span
/// Children: None
#[inline]
pub(crate) fn registry_build(fiat: usize, digital: usize) -> Span {
    tracing::debug_span!("tokenkit.registry_build", fiat = fiat, digital = digital)
}
