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
use crate::rational::value::{gcd, Fraction, Rational};
use std::iter::{Product, Sum};
use std::ops::Neg;

impl Rational {
	/// Additive inverse. Never fails: the numerator range is symmetric.
	pub fn negate(self) -> Self {
		match self {
			Rational::Finite(f) => Rational::Finite(Fraction {
				numerator: -f.numerator,
				..f
			}),
			Rational::Infinite(sign) => Rational::Infinite(-sign),
		}
	}

	/// Multiplicative inverse. Either infinity reciprocates to zero.
	pub fn reciprocal(self) -> Result<Self, RationalError> {
		match self {
			Rational::Infinite(_) => Ok(Rational::ZERO),
			Rational::Finite(f) if f.is_zero() => {
				Err(RationalError::DivisionByZero)
			},
			Rational::Finite(f) => {
				let numerator = i128::from(f.denominator);
				Rational::from_wide(
					if f.numerator < 0 { -numerator } else { numerator },
					f.numerator.unsigned_abs().into(),
				)
			},
		}
	}

	pub fn sum(self, rhs: Self) -> Result<Self, RationalError> {
		match (self, rhs) {
			(Rational::Finite(a), Rational::Finite(b)) => sum_finite(a, b),
			(Rational::Infinite(a), Rational::Infinite(b)) if a != b => {
				tracing::debug!("rejecting sum of opposite infinities");
				Err(RationalError::IndeterminateForm(
					"sum of opposite infinities",
				))
			},
			(Rational::Infinite(sign), _) | (_, Rational::Infinite(sign)) => {
				Ok(Rational::Infinite(sign))
			},
		}
	}

	pub fn difference(self, rhs: Self) -> Result<Self, RationalError> {
		self.sum(-rhs)
	}

	pub fn product(self, rhs: Self) -> Result<Self, RationalError> {
		match (self, rhs) {
			(Rational::Finite(a), Rational::Finite(b)) => product_finite(a, b),
			(Rational::Finite(f), Rational::Infinite(sign))
			| (Rational::Infinite(sign), Rational::Finite(f)) => {
				if f.is_zero() {
					tracing::debug!("rejecting product of zero and infinity");
					return Err(RationalError::IndeterminateForm(
						"zero times infinity",
					));
				}
				Ok(Rational::Infinite(sign * f.sign()))
			},
			(Rational::Infinite(a), Rational::Infinite(b)) => {
				Ok(Rational::Infinite(a * b))
			},
		}
	}

	/// `self * (1 / rhs)`, so a finite value over an infinity is zero and
	/// an infinity over an infinity is indeterminate.
	pub fn quotient(self, rhs: Self) -> Result<Self, RationalError> {
		self.product(rhs.reciprocal()?)
	}
}

/// Adds over the least common denominator in the wide domain. The scaled
/// terms are each below 2^127, only their sum can overflow.
fn sum_finite(a: Fraction, b: Fraction) -> Result<Rational, RationalError> {
	// Special cases for zero
	if a.is_zero() {
		return Ok(Rational::Finite(b));
	}
	if b.is_zero() {
		return Ok(Rational::Finite(a));
	}

	let divisor = gcd(a.denominator.into(), b.denominator.into());
	let scale_a = u128::from(b.denominator) / divisor;
	let scale_b = u128::from(a.denominator) / divisor;
	let lcm = scale_b * u128::from(b.denominator);

	let term_a = i128::from(a.numerator).checked_mul(scale_a as i128);
	let term_b = i128::from(b.numerator).checked_mul(scale_b as i128);

	let numerator = match (term_a, term_b) {
		(Some(x), Some(y)) => x.checked_add(y),
		_ => None,
	}
	.ok_or(RationalError::ArithmeticOverflow)?;

	Rational::from_wide(numerator, lcm)
}

/// Cross-reduces before multiplying, so the wide products are already in
/// lowest terms and overflow only when the true result cannot be stored.
fn product_finite(a: Fraction, b: Fraction) -> Result<Rational, RationalError> {
	let gcd_a = gcd(a.numerator.unsigned_abs().into(), b.denominator.into());
	let gcd_b = gcd(b.numerator.unsigned_abs().into(), a.denominator.into());

	let numerator_a = i128::from(a.numerator) / gcd_a as i128;
	let numerator_b = i128::from(b.numerator) / gcd_b as i128;
	let denominator_a = u128::from(a.denominator) / gcd_b;
	let denominator_b = u128::from(b.denominator) / gcd_a;

	Rational::from_wide(
		numerator_a * numerator_b,
		denominator_a * denominator_b,
	)
}

impl Neg for Rational {
	type Output = Self;

	fn neg(self) -> Self::Output {
		self.negate()
	}
}

impl Sum<Rational> for Result<Rational, RationalError> {
	fn sum<I: Iterator<Item = Rational>>(mut iter: I) -> Self {
		iter.try_fold(Rational::ZERO, Rational::sum)
	}
}

impl Product<Rational> for Result<Rational, RationalError> {
	fn product<I: Iterator<Item = Rational>>(mut iter: I) -> Self {
		iter.try_fold(Rational::ONE, Rational::product)
	}
}

/// Left fold of [`Rational::sum`]; zero for an empty sequence.
pub fn sum_all<I>(values: I) -> Result<Rational, RationalError>
where
	I: IntoIterator<Item = Rational>,
{
	values.into_iter().sum()
}

/// Left fold of [`Rational::product`]; one for an empty sequence.
pub fn product_all<I>(values: I) -> Result<Rational, RationalError>
where
	I: IntoIterator<Item = Rational>,
{
	values.into_iter().product()
}

/// Greatest value, or negative infinity for an empty sequence.
pub fn maximum<I>(values: I) -> Rational
where
	I: IntoIterator<Item = Rational>,
{
	values
		.into_iter()
		.fold(Rational::NEGATIVE_INFINITY, |best, value| best.max(value))
}

/// Least value, or positive infinity for an empty sequence.
pub fn minimum<I>(values: I) -> Rational
where
	I: IntoIterator<Item = Rational>,
{
	values
		.into_iter()
		.fold(Rational::POSITIVE_INFINITY, |best, value| best.min(value))
}
