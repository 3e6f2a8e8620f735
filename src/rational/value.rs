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
use crate::interchange::Interchange;
use serde::{Deserialize, Serialize};
use std::ops::{Mul, Neg};

/// Direction of an infinity, or of a nonzero finite value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
	Negative,
	Positive,
}

impl Neg for Sign {
	type Output = Sign;

	fn neg(self) -> Self::Output {
		match self {
			Sign::Negative => Sign::Positive,
			Sign::Positive => Sign::Negative,
		}
	}
}

impl Mul for Sign {
	type Output = Sign;

	fn mul(self, rhs: Self) -> Self::Output {
		if self == rhs {
			Sign::Positive
		} else {
			Sign::Negative
		}
	}
}

/// A finite rational number in lowest terms.
///
/// The sign lives on the numerator, the denominator is at least one, and
/// the two share no common factor. Zero is always `0/1`. The numerator never
/// takes the value `i64::MIN`, so negation cannot overflow.
///
/// Fields are private: the only way to get one is through the constructors
/// on [`Rational`], which all funnel through the same reduction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fraction {
	pub(crate) numerator: i64,
	pub(crate) denominator: u64,
}

impl Fraction {
	pub fn numerator(&self) -> i64 {
		self.numerator
	}

	pub fn denominator(&self) -> u64 {
		self.denominator
	}

	pub fn is_zero(&self) -> bool {
		self.numerator == 0
	}

	pub fn is_integer(&self) -> bool {
		self.denominator == 1
	}

	/// Sign of a nonzero fraction; zero counts as positive.
	pub fn sign(&self) -> Sign {
		if self.numerator < 0 {
			Sign::Negative
		} else {
			Sign::Positive
		}
	}
}

/// An exact rational number or a signed infinity.
///
/// Values are immutable and `Copy`; every operation returns a new value.
/// Because each finite value is kept in lowest terms, derived structural
/// equality coincides with numeric equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Interchange", try_from = "Interchange")]
pub enum Rational {
	Finite(Fraction),
	Infinite(Sign),
}

impl Rational {
	pub const ZERO: Rational = Rational::Finite(Fraction {
		numerator: 0,
		denominator: 1,
	});

	pub const ONE: Rational = Rational::Finite(Fraction {
		numerator: 1,
		denominator: 1,
	});

	pub const POSITIVE_INFINITY: Rational = Rational::Infinite(Sign::Positive);

	pub const NEGATIVE_INFINITY: Rational = Rational::Infinite(Sign::Negative);

	pub fn is_finite(&self) -> bool {
		matches!(self, Rational::Finite(_))
	}

	pub fn is_infinite(&self) -> bool {
		matches!(self, Rational::Infinite(_))
	}

	pub fn is_zero(&self) -> bool {
		matches!(self, Rational::Finite(f) if f.is_zero())
	}

	pub fn is_integer(&self) -> bool {
		matches!(self, Rational::Finite(f) if f.is_integer())
	}

	/// Numerator of a finite value, `None` for the infinities.
	pub fn numerator(&self) -> Option<i64> {
		match self {
			Rational::Finite(f) => Some(f.numerator),
			Rational::Infinite(_) => None,
		}
	}

	/// Denominator of a finite value, `None` for the infinities.
	pub fn denominator(&self) -> Option<u64> {
		match self {
			Rational::Finite(f) => Some(f.denominator),
			Rational::Infinite(_) => None,
		}
	}

	/// -1, 0 or 1.
	pub fn signum(&self) -> i32 {
		match self {
			Rational::Finite(f) => f.numerator.signum() as i32,
			Rational::Infinite(Sign::Positive) => 1,
			Rational::Infinite(Sign::Negative) => -1,
		}
	}

	/// Reduces a wide intermediate fraction and narrows it back into the
	/// canonical widths. Every constructor and arithmetic result ends here.
	pub(crate) fn from_wide(
		numerator: i128,
		denominator: u128,
	) -> Result<Self, RationalError> {
		if denominator == 0 {
			return Err(RationalError::DivisionByZero);
		}

		let divisor = gcd(numerator.unsigned_abs(), denominator);
		let magnitude = numerator.unsigned_abs() / divisor;
		let denominator = denominator / divisor;

		let (magnitude, denominator) =
			match (i64::try_from(magnitude), u64::try_from(denominator)) {
				(Ok(m), Ok(d)) => (m, d),
				_ => {
					tracing::debug!(
						%numerator,
						%denominator,
						"reduced fraction does not fit 64-bit storage"
					);
					return Err(RationalError::ArithmeticOverflow);
				},
			};

		Ok(Rational::Finite(Fraction {
			numerator: if numerator < 0 { -magnitude } else { magnitude },
			denominator,
		}))
	}
}

impl Default for Rational {
	fn default() -> Self {
		Rational::ZERO
	}
}

/// Implementation of Euclid's algorithm for greatest common divisor.
/// `gcd(0, b)` is `b`, which is what reduces `0/b` to `0/1`.
pub(crate) fn gcd(mut a: u128, mut b: u128) -> u128 {
	while b != 0 {
		let temp = b;
		b = a % b;
		a = temp;
	}
	a
}

#[cfg(test)]
mod tests {
	use super::*;

	mod from_wide {
		use super::*;

		#[test]
		fn test_reduces_to_lowest_terms() {
			let value = Rational::from_wide(6, 8).unwrap();
			assert_eq!(value.numerator(), Some(3));
			assert_eq!(value.denominator(), Some(4));
		}

		#[test]
		fn test_negative_numerator_keeps_sign() {
			let value = Rational::from_wide(-10, 4).unwrap();
			assert_eq!(value.numerator(), Some(-5));
			assert_eq!(value.denominator(), Some(2));
		}

		#[test]
		fn test_zero_collapses_to_zero_over_one() {
			assert_eq!(Rational::from_wide(0, 12345).unwrap(), Rational::ZERO);
		}

		#[test]
		fn test_denominator_reducing_to_one_is_integer() {
			let value = Rational::from_wide(12, 4).unwrap();
			assert!(value.is_integer());
			assert_eq!(value.numerator(), Some(3));
		}

		#[test]
		fn test_reduction_rescues_wide_values() {
			let wide = i128::from(i64::MAX) * 4;
			let value = Rational::from_wide(wide, 8).unwrap();
			assert_eq!(value.numerator(), Some(i64::MAX));
			assert_eq!(value.denominator(), Some(2));
		}

		#[test]
		fn test_numerator_overflow() {
			let too_big = i128::from(i64::MAX) + 1;
			assert_eq!(
				Rational::from_wide(too_big, 1),
				Err(RationalError::ArithmeticOverflow)
			);
		}

		#[test]
		fn test_i64_min_is_not_representable() {
			assert_eq!(
				Rational::from_wide(i128::from(i64::MIN), 1),
				Err(RationalError::ArithmeticOverflow)
			);
		}

		#[test]
		fn test_denominator_overflow() {
			let too_big = u128::from(u64::MAX) + 2;
			assert_eq!(
				Rational::from_wide(1, too_big),
				Err(RationalError::ArithmeticOverflow)
			);
		}

		#[test]
		fn test_zero_denominator() {
			assert_eq!(
				Rational::from_wide(1, 0),
				Err(RationalError::DivisionByZero)
			);
		}
	}

	mod accessors {
		use super::*;

		#[test]
		fn test_constants() {
			assert!(Rational::ZERO.is_zero());
			assert!(Rational::ONE.is_integer());
			assert!(Rational::POSITIVE_INFINITY.is_infinite());
			assert_eq!(Rational::NEGATIVE_INFINITY.signum(), -1);
			assert_eq!(Rational::default(), Rational::ZERO);
		}

		#[test]
		fn test_infinities_have_no_parts() {
			assert_eq!(Rational::POSITIVE_INFINITY.numerator(), None);
			assert_eq!(Rational::NEGATIVE_INFINITY.denominator(), None);
			assert!(!Rational::POSITIVE_INFINITY.is_integer());
			assert!(!Rational::POSITIVE_INFINITY.is_zero());
		}

		#[test]
		fn test_signum() {
			assert_eq!(Rational::from_wide(-3, 7).unwrap().signum(), -1);
			assert_eq!(Rational::ZERO.signum(), 0);
			assert_eq!(Rational::from_wide(3, 7).unwrap().signum(), 1);
		}

		#[test]
		fn test_sign_algebra() {
			assert_eq!(-Sign::Positive, Sign::Negative);
			assert_eq!(Sign::Negative * Sign::Negative, Sign::Positive);
			assert_eq!(Sign::Negative * Sign::Positive, Sign::Negative);
		}
	}

	#[test]
	fn test_gcd() {
		assert_eq!(gcd(0, 5), 5);
		assert_eq!(gcd(12, 18), 6);
		assert_eq!(gcd(17, 5), 1);
	}
}
