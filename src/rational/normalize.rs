/* Copyright © 2024-2025 Adam Train <adam@trainrelay.net>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */
use crate::error::RationalError;
use crate::rational::value::{Fraction, Rational, Sign};

/// The input representations a [`Rational`] can be built from. None of
/// these survive construction; the result is always the canonical form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
	Unsigned(u64),
	Signed(i64),
	Float(f32),
	Double(f64),

	/// A fraction whose denominator may be neither zero nor one.
	Fraction { numerator: i64, denominator: u64 },

	/// `integer + fraction_numerator / fraction_denominator`, where the
	/// fraction is strictly between zero and one.
	Mixed {
		integer: i64,
		fraction_numerator: u64,
		fraction_denominator: u64,
	},
}

impl Rational {
	/// Single entry point for every input shape.
	pub fn normalize(shape: Shape) -> Result<Self, RationalError> {
		match shape {
			Shape::Unsigned(n) => Self::from_unsigned(n),
			Shape::Signed(n) => Self::from_signed(n),
			Shape::Float(x) => Self::from_f32(x),
			Shape::Double(x) => Self::from_f64(x),
			Shape::Fraction {
				numerator,
				denominator,
			} => Self::from_fraction(numerator, denominator),
			Shape::Mixed {
				integer,
				fraction_numerator,
				fraction_denominator,
			} => Self::from_mixed(
				integer,
				fraction_numerator,
				fraction_denominator,
			),
		}
	}

	/// Builds `numerator/denominator` in lowest terms. Only a zero
	/// denominator is rejected; `n/1` and fractions reducing to integers
	/// are fine.
	pub fn new(numerator: i64, denominator: u64) -> Result<Self, RationalError> {
		if denominator == 0 {
			return Err(RationalError::InvalidDenominator(denominator));
		}
		Self::from_wide(numerator.into(), denominator.into())
	}

	pub fn from_unsigned(n: u64) -> Result<Self, RationalError> {
		Self::from_wide(n.into(), 1)
	}

	/// Fails only for `i64::MIN`, whose negation would not be representable.
	pub fn from_signed(n: i64) -> Result<Self, RationalError> {
		Self::from_wide(n.into(), 1)
	}

	/// Strict fraction constructor: the denominator must be neither zero
	/// nor one.
	pub fn from_fraction(
		numerator: i64,
		denominator: u64,
	) -> Result<Self, RationalError> {
		if denominator <= 1 {
			return Err(RationalError::InvalidDenominator(denominator));
		}
		Self::new(numerator, denominator)
	}

	/// Sum of an integer and a fraction strictly between zero and one. The
	/// fraction is always added, so `(-2, 1, 2)` is `-3/2`.
	pub fn from_mixed(
		integer: i64,
		fraction_numerator: u64,
		fraction_denominator: u64,
	) -> Result<Self, RationalError> {
		if fraction_numerator == 0 || fraction_numerator >= fraction_denominator
		{
			return Err(RationalError::InvalidFraction {
				numerator: fraction_numerator,
				denominator: fraction_denominator,
			});
		}

		let numerator = i128::from(integer)
			.checked_mul(fraction_denominator.into())
			.and_then(|n| n.checked_add(fraction_numerator.into()))
			.ok_or(RationalError::ArithmeticOverflow)?;

		Self::from_wide(numerator, fraction_denominator.into())
	}

	/// Exact value of a single-precision float.
	pub fn from_f32(x: f32) -> Result<Self, RationalError> {
		if x.is_nan() {
			return Err(RationalError::InvalidValue("NaN".to_string()));
		}
		if x.is_infinite() {
			return Ok(Rational::Infinite(float_sign(x.is_sign_negative())));
		}

		let bits = x.to_bits();
		let biased = ((bits >> 23) & 0xff) as i32;
		let fraction = u64::from(bits & 0x7f_ffff);

		// subnormals have no implicit leading bit and a fixed exponent
		let (mantissa, exponent) = if biased == 0 {
			(fraction, -149)
		} else {
			(fraction | (1 << 23), biased - 150)
		};

		Self::from_binary(x.is_sign_negative(), mantissa, exponent)
	}

	/// Exact value of a double-precision float.
	pub fn from_f64(x: f64) -> Result<Self, RationalError> {
		if x.is_nan() {
			return Err(RationalError::InvalidValue("NaN".to_string()));
		}
		if x.is_infinite() {
			return Ok(Rational::Infinite(float_sign(x.is_sign_negative())));
		}

		let bits = x.to_bits();
		let biased = ((bits >> 52) & 0x7ff) as i32;
		let fraction = bits & 0xf_ffff_ffff_ffff;

		let (mantissa, exponent) = if biased == 0 {
			(fraction, -1074)
		} else {
			(fraction | (1 << 52), biased - 1075)
		};

		Self::from_binary(x.is_sign_negative(), mantissa, exponent)
	}

	/// Builds `±mantissa * 2^exponent`. Trailing zero bits are folded into
	/// the exponent first, so a negative exponent leaves the fraction
	/// already in lowest terms (odd numerator over a power of two).
	fn from_binary(
		negative: bool,
		mantissa: u64,
		exponent: i32,
	) -> Result<Self, RationalError> {
		if mantissa == 0 {
			return Ok(Rational::ZERO);
		}

		let shift = mantissa.trailing_zeros();
		let mantissa = mantissa >> shift;
		let exponent = exponent + shift as i32;

		let (magnitude, denominator) = if exponent >= 0 {
			if exponent >= 64 {
				return Err(RationalError::ArithmeticOverflow);
			}
			(u128::from(mantissa) << exponent, 1u128)
		} else {
			let places = exponent.unsigned_abs();
			if places >= 64 {
				return Err(RationalError::ArithmeticOverflow);
			}
			(u128::from(mantissa), 1u128 << places)
		};

		// magnitude < 2^117 here, so it fits an i128
		let numerator = magnitude as i128;
		Self::from_wide(
			if negative { -numerator } else { numerator },
			denominator,
		)
	}
}

fn float_sign(negative: bool) -> Sign {
	if negative {
		Sign::Negative
	} else {
		Sign::Positive
	}
}

impl From<i32> for Rational {
	fn from(n: i32) -> Self {
		Rational::Finite(Fraction {
			numerator: n.into(),
			denominator: 1,
		})
	}
}

impl From<u32> for Rational {
	fn from(n: u32) -> Self {
		Rational::Finite(Fraction {
			numerator: n.into(),
			denominator: 1,
		})
	}
}

impl TryFrom<Shape> for Rational {
	type Error = RationalError;

	fn try_from(shape: Shape) -> Result<Self, Self::Error> {
		Self::normalize(shape)
	}
}
