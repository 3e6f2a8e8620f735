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
use crate::rational::normalize::Shape;
use crate::rational::value::Rational;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Every payload shape the interchange encoding accepts. Export only ever
/// produces `Fraction` (finite values) or `Text` (the infinity sentinels);
/// the rest exist so import is at least as permissive as any producer.
///
/// Variants are tried in order, so an integer literal is claimed by
/// `Integer`/`Unsigned` before `Float` sees it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Interchange {
	Integer(i64),
	Unsigned(u64),
	Fraction {
		numerator: i64,
		denominator: u64,
	},
	Mixed {
		integer: i64,
		fraction_numerator: u64,
		fraction_denominator: u64,
	},
	Float(f64),
	Text(String),
}

impl From<Rational> for Interchange {
	fn from(value: Rational) -> Self {
		match value {
			Rational::Finite(f) => Interchange::Fraction {
				numerator: f.numerator(),
				denominator: f.denominator(),
			},
			Rational::Infinite(_) => Interchange::Text(value.to_string()),
		}
	}
}

impl TryFrom<Interchange> for Rational {
	type Error = RationalError;

	fn try_from(payload: Interchange) -> Result<Self, Self::Error> {
		match payload {
			Interchange::Integer(n) => Rational::normalize(Shape::Signed(n)),
			Interchange::Unsigned(n) => Rational::normalize(Shape::Unsigned(n)),
			// exported integers carry denominator 1, which the strict
			// fraction shape rejects
			Interchange::Fraction {
				numerator,
				denominator,
			} => Rational::new(numerator, denominator),
			Interchange::Mixed {
				integer,
				fraction_numerator,
				fraction_denominator,
			} => Rational::normalize(Shape::Mixed {
				integer,
				fraction_numerator,
				fraction_denominator,
			}),
			Interchange::Float(x) => Rational::normalize(Shape::Double(x)),
			Interchange::Text(text) => text.parse(),
		}
	}
}

/// Encodes a value in the interchange form. The output shape does not
/// depend on how the value was constructed.
pub fn export(value: &Rational) -> Value {
	match value {
		Rational::Finite(f) => serde_json::json!({
			"numerator": f.numerator(),
			"denominator": f.denominator(),
		}),
		Rational::Infinite(_) => Value::String(value.to_string()),
	}
}

/// Decodes any accepted interchange payload. Payloads that match no shape
/// are `InvalidValue`; payloads that match a shape but break its rules
/// report that rule's error.
pub fn import(payload: &Value) -> Result<Rational, RationalError> {
	let shape = Interchange::deserialize(payload)
		.map_err(|_| RationalError::InvalidValue(payload.to_string()))?;
	Rational::try_from(shape)
}
