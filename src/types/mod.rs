// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for amount construction.
//!
//! # Type Relationships
//!
//! ```text
//! DecimalLiteral (u64, f64, &str, BigDecimal, ...)
//!     |
//!     | into_decimal()        exact, rejects negatives
//!     ↓
//! BigDecimal
//!     |
//!     | scale by DisplayScale  rejects precision loss
//!     ↓
//! Quantity (U256, smallest display unit)
//! ```

mod literal;
mod quantity;
mod scale;

pub use literal::DecimalLiteral;
pub use quantity::Quantity;
pub use scale::DisplayScale;
