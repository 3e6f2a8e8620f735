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
use crate::rational::value::{Rational, Sign};

/// Raw finite-or-infinite record as exchanged with code that does not know
/// about the canonical invariants. Nothing stops a `Repr` from holding a
/// zero denominator or an unreduced fraction; boxing checks and reduces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repr {
	Finite { numerator: i64, denominator: u64 },
	Infinite(Sign),
}

impl From<Rational> for Repr {
	fn from(value: Rational) -> Self {
		match value {
			Rational::Finite(f) => Repr::Finite {
				numerator: f.numerator(),
				denominator: f.denominator(),
			},
			Rational::Infinite(sign) => Repr::Infinite(sign),
		}
	}
}

impl TryFrom<Repr> for Rational {
	type Error = RationalError;

	fn try_from(raw: Repr) -> Result<Self, Self::Error> {
		match raw {
			Repr::Finite {
				numerator,
				denominator,
			} => Rational::new(numerator, denominator),
			Repr::Infinite(sign) => Ok(Rational::Infinite(sign)),
		}
	}
}

/// Canonicalizes each raw record in order. The first bad record aborts the
/// whole batch.
pub fn box_all(raw: &[Repr]) -> Result<Vec<Rational>, RationalError> {
	raw.iter().map(|r| Rational::try_from(*r)).collect()
}

pub fn unbox_all(values: &[Rational]) -> Vec<Repr> {
	values.iter().map(|v| Repr::from(*v)).collect()
}
