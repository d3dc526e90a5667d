// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Numeric literals accepted by amount construction
//!
//! Every literal is turned into an exact [`BigDecimal`] before any scaling
//! happens. Floating point values go through their shortest round-trip
//! decimal form, so `0.1f64` becomes exactly `0.1` rather than the binary
//! approximation `0.1000000000000000055511151231257827...`.

use std::str::FromStr;

use bigdecimal::num_bigint::{BigInt, Sign};
use bigdecimal::BigDecimal;

use crate::errors::AmountError;

/// A value that can be converted exactly into a non-negative decimal
///
/// # Examples
///
/// ```
/// use tokenkit::DecimalLiteral;
///
/// assert_eq!(1_000u32.into_decimal().unwrap().to_string(), "1000");
/// assert_eq!(1.5f64.into_decimal().unwrap().to_string(), "1.5");
/// assert!((-3i64).into_decimal().is_err());
/// assert!(f64::NAN.into_decimal().is_err());
/// ```
pub trait DecimalLiteral {
    /// Convert into an exact decimal
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::InvalidAmount`] when the literal is negative,
    /// non-finite or not a number.
    fn into_decimal(self) -> Result<BigDecimal, AmountError>;
}

macro_rules! impl_unsigned_literal {
    ($($t:ty),*) => {
        $(
            impl DecimalLiteral for $t {
                fn into_decimal(self) -> Result<BigDecimal, AmountError> {
                    Ok(BigDecimal::from(BigInt::from(self)))
                }
            }
        )*
    };
}

macro_rules! impl_signed_literal {
    ($($t:ty),*) => {
        $(
            impl DecimalLiteral for $t {
                fn into_decimal(self) -> Result<BigDecimal, AmountError> {
                    if self < 0 {
                        return Err(AmountError::negative(self));
                    }
                    Ok(BigDecimal::from(BigInt::from(self)))
                }
            }
        )*
    };
}

macro_rules! impl_float_literal {
    ($($t:ty),*) => {
        $(
            impl DecimalLiteral for $t {
                fn into_decimal(self) -> Result<BigDecimal, AmountError> {
                    if !self.is_finite() {
                        return Err(AmountError::invalid_amount(self, "value is not finite"));
                    }
                    if self < 0.0 {
                        return Err(AmountError::negative(self));
                    }
                    // Display for floats is the shortest round-trip form and never uses an exponent
                    BigDecimal::from_str(&self.to_string())
                        .map_err(|e| AmountError::invalid_amount(self, e.to_string()))
                }
            }
        )*
    };
}

impl_unsigned_literal!(u8, u16, u32, u64, u128, usize);
impl_signed_literal!(i8, i16, i32, i64, i128, isize);
impl_float_literal!(f32, f64);

impl DecimalLiteral for BigDecimal {
    fn into_decimal(self) -> Result<BigDecimal, AmountError> {
        if self.sign() == Sign::Minus {
            return Err(AmountError::negative(&self));
        }
        Ok(self)
    }
}

impl DecimalLiteral for &BigDecimal {
    fn into_decimal(self) -> Result<BigDecimal, AmountError> {
        self.clone().into_decimal()
    }
}

impl DecimalLiteral for &str {
    fn into_decimal(self) -> Result<BigDecimal, AmountError> {
        BigDecimal::from_str(self)
            .map_err(|_| AmountError::invalid_amount(self, "not a decimal number"))?
            .into_decimal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decimal(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_integer_literals() {
        assert_eq!(0u8.into_decimal().unwrap(), decimal("0"));
        assert_eq!(1_000i32.into_decimal().unwrap(), decimal("1000"));
        assert_eq!(u128::MAX.into_decimal().unwrap(), decimal(&u128::MAX.to_string()));
        assert_eq!(7usize.into_decimal().unwrap(), decimal("7"));
    }

    #[test]
    fn test_negative_integers_rejected() {
        let err = (-1i32).into_decimal().unwrap_err();
        assert!(matches!(err, AmountError::InvalidAmount { ref literal, .. } if literal == "-1"));
        assert!(i64::MIN.into_decimal().is_err());
    }

    #[test]
    fn test_float_literals_are_exact() {
        assert_eq!(1.5f64.into_decimal().unwrap(), decimal("1.5"));
        assert_eq!(0.1f64.into_decimal().unwrap(), decimal("0.1"));
        assert_eq!(1.234f64.into_decimal().unwrap(), decimal("1.234"));
        assert_eq!(2.25f32.into_decimal().unwrap(), decimal("2.25"));
        assert_eq!(1e21f64.into_decimal().unwrap(), decimal("1000000000000000000000"));
    }

    #[test]
    fn test_negative_zero_is_zero() {
        assert_eq!((-0.0f64).into_decimal().unwrap(), decimal("0"));
    }

    #[test]
    fn test_non_finite_floats_rejected() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = value.into_decimal().unwrap_err();
            assert!(matches!(err, AmountError::InvalidAmount { .. }));
        }
    }

    #[test]
    fn test_negative_floats_rejected() {
        let err = (-2.5f64).into_decimal().unwrap_err();
        assert!(matches!(err, AmountError::InvalidAmount { ref literal, .. } if literal == "-2.5"));
    }

    #[test]
    fn test_string_literals() {
        assert_eq!("12.340".into_decimal().unwrap(), decimal("12.34"));
        assert!("-0.01".into_decimal().is_err());
        assert!("twelve".into_decimal().is_err());
    }

    #[test]
    fn test_bigdecimal_literals() {
        let value = decimal("99.99");
        assert_eq!((&value).into_decimal().unwrap(), value);
        assert!(decimal("-99.99").into_decimal().is_err());
    }
}
