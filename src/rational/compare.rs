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
use crate::rational::value::{Rational, Sign};
use std::cmp::Ordering;

/// Reverses a three-way comparison result, as when the operands are swapped.
pub fn negate_comparison_result(result: Ordering) -> Ordering {
	result.reverse()
}

impl Rational {
	pub fn is_less_than(&self, other: &Self) -> bool {
		self < other
	}

	pub fn is_equal_to(&self, other: &Self) -> bool {
		self == other
	}
}

impl PartialOrd for Rational {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Rational {
	fn cmp(&self, other: &Self) -> Ordering {
		match (self, other) {
			(Rational::Infinite(a), Rational::Infinite(b)) => a.cmp(b),
			(Rational::Infinite(Sign::Positive), Rational::Finite(_))
			| (Rational::Finite(_), Rational::Infinite(Sign::Negative)) => {
				Ordering::Greater
			},
			(Rational::Infinite(Sign::Negative), Rational::Finite(_))
			| (Rational::Finite(_), Rational::Infinite(Sign::Positive)) => {
				Ordering::Less
			},
			(Rational::Finite(a), Rational::Finite(b)) => {
				// lowest terms make structural equality exact
				if a == b {
					return Ordering::Equal;
				}

				// |n| < 2^63 and d < 2^64, so both products fit an i128
				let left = i128::from(a.numerator) * i128::from(b.denominator);
				let right = i128::from(b.numerator) * i128::from(a.denominator);
				left.cmp(&right)
			},
		}
	}
}
