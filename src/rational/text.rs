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
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

const POSITIVE_INFINITY_TOKEN: &str = "+inf";
const NEGATIVE_INFINITY_TOKEN: &str = "-inf";

/// Textual forms accepted by the parser. Every form the formatter emits is
/// one of these.
struct Grammar {
	integer: Regex,
	fraction: Regex,
	mixed: Regex,
}

fn grammar() -> &'static Grammar {
	static GRAMMAR: OnceLock<Grammar> = OnceLock::new();
	GRAMMAR.get_or_init(|| Grammar {
		integer: Regex::new(r"^[+-]?[0-9]+$").expect("invalid regex"),
		fraction: Regex::new(r"^([+-]?[0-9]+)/([0-9]+)$")
			.expect("invalid regex"),
		mixed: Regex::new(r"^([+-]?[0-9]+) ([0-9]+)/([0-9]+)$")
			.expect("invalid regex"),
	})
}

impl Rational {
	/// Nearest double. Infinities map to the float infinities.
	pub fn to_f64(&self) -> f64 {
		match self {
			Rational::Finite(f) => f.numerator as f64 / f.denominator as f64,
			Rational::Infinite(Sign::Positive) => f64::INFINITY,
			Rational::Infinite(Sign::Negative) => f64::NEG_INFINITY,
		}
	}

	pub fn to_f32(&self) -> f32 {
		self.to_f64() as f32
	}

	/// Renders the value as a decimal with exactly `places` digits after the
	/// point, rounding the rest off with banker's rounding (ties to even).
	/// The digits are produced by long division, so there is no limit on
	/// `places` and no float is involved.
	pub fn to_decimal(&self, places: u32) -> String {
		let fraction = match self {
			Rational::Finite(f) => f,
			Rational::Infinite(_) => return self.to_string(),
		};

		let denominator = u128::from(fraction.denominator);
		let magnitude = u128::from(fraction.numerator.unsigned_abs());

		let mut digits: Vec<u8> = (magnitude / denominator)
			.to_string()
			.bytes()
			.map(|b| b - b'0')
			.collect();
		let mut integer_len = digits.len();

		let mut remainder = magnitude % denominator;
		for _ in 0..places {
			remainder *= 10;
			digits.push((remainder / denominator) as u8);
			remainder %= denominator;
		}

		let twice = remainder * 2;
		let last_is_odd = digits.last().is_some_and(|d| d % 2 == 1);
		if twice > denominator || (twice == denominator && last_is_odd) {
			let mut i = digits.len();
			loop {
				if i == 0 {
					digits.insert(0, 1);
					integer_len += 1;
					break;
				}
				i -= 1;
				if digits[i] == 9 {
					digits[i] = 0;
				} else {
					digits[i] += 1;
					break;
				}
			}
		}

		let mut out = String::new();
		if fraction.numerator < 0 && digits.iter().any(|d| *d != 0) {
			out.push('-');
		}
		for (i, digit) in digits.iter().enumerate() {
			if i == integer_len {
				out.push('.');
			}
			out.push(char::from(b'0' + digit));
		}
		out
	}
}

/// Integers print bare, proper fractions as `n/d`, everything else as a
/// mixed number `i n/d` whose integer part is the floor of the value, so
/// the fraction part is always added (`-3/2` prints as `-2 1/2`).
impl fmt::Display for Rational {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let fraction = match self {
			Rational::Finite(fraction) => fraction,
			Rational::Infinite(Sign::Positive) => {
				return f.write_str(POSITIVE_INFINITY_TOKEN)
			},
			Rational::Infinite(Sign::Negative) => {
				return f.write_str(NEGATIVE_INFINITY_TOKEN)
			},
		};

		if fraction.is_integer() {
			return write!(f, "{}", fraction.numerator);
		}

		if fraction.numerator.unsigned_abs() < fraction.denominator {
			return write!(f, "{}/{}", fraction.numerator, fraction.denominator);
		}

		let numerator = i128::from(fraction.numerator);
		let denominator = i128::from(fraction.denominator);
		write!(
			f,
			"{} {}/{}",
			numerator.div_euclid(denominator),
			numerator.rem_euclid(denominator),
			denominator
		)
	}
}

impl FromStr for Rational {
	type Err = RationalError;

	fn from_str(input: &str) -> Result<Self, Self::Err> {
		let text = input.trim();

		match text {
			POSITIVE_INFINITY_TOKEN | "inf" => {
				return Ok(Rational::POSITIVE_INFINITY)
			},
			NEGATIVE_INFINITY_TOKEN => return Ok(Rational::NEGATIVE_INFINITY),
			_ => {},
		}

		let grammar = grammar();

		if grammar.integer.is_match(text) {
			let value = text
				.parse::<i128>()
				.map_err(|_| RationalError::ParseError(input.to_string()))?;
			return Rational::from_wide(value, 1);
		}

		if let Some(caps) = grammar.fraction.captures(text) {
			return Rational::new(
				parse_signed(&caps[1], input)?,
				parse_unsigned(&caps[2], input)?,
			);
		}

		if let Some(caps) = grammar.mixed.captures(text) {
			return Rational::from_mixed(
				parse_signed(&caps[1], input)?,
				parse_unsigned(&caps[2], input)?,
				parse_unsigned(&caps[3], input)?,
			);
		}

		Err(RationalError::ParseError(input.to_string()))
	}
}

/// Digit runs that are well-formed but too long for the target width are
/// overflow, not parse errors.
fn parse_signed(digits: &str, input: &str) -> Result<i64, RationalError> {
	let wide = digits
		.parse::<i128>()
		.map_err(|_| RationalError::ParseError(input.to_string()))?;
	i64::try_from(wide).map_err(|_| RationalError::ArithmeticOverflow)
}

fn parse_unsigned(digits: &str, input: &str) -> Result<u64, RationalError> {
	let wide = digits
		.parse::<u128>()
		.map_err(|_| RationalError::ParseError(input.to_string()))?;
	u64::try_from(wide).map_err(|_| RationalError::ArithmeticOverflow)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn frac(numerator: i64, denominator: u64) -> Rational {
		Rational::new(numerator, denominator).unwrap()
	}

	mod format {
		use super::*;

		#[test]
		fn test_integers() {
			assert_eq!(frac(7, 1).to_string(), "7");
			assert_eq!(frac(-7, 1).to_string(), "-7");
			assert_eq!(Rational::ZERO.to_string(), "0");
		}

		#[test]
		fn test_proper_fractions() {
			assert_eq!(frac(3, 4).to_string(), "3/4");
			assert_eq!(frac(-1, 2).to_string(), "-1/2");
		}

		#[test]
		fn test_mixed_numbers() {
			assert_eq!(Rational::from_mixed(2, 1, 2).unwrap().to_string(), "2 1/2");
			assert_eq!(frac(22, 7).to_string(), "3 1/7");
		}

		#[test]
		fn test_negative_mixed_uses_floor() {
			assert_eq!(frac(-3, 2).to_string(), "-2 1/2");
			assert_eq!(frac(-5, 3).to_string(), "-2 1/3");
		}

		#[test]
		fn test_infinities() {
			assert_eq!(Rational::POSITIVE_INFINITY.to_string(), "+inf");
			assert_eq!(Rational::NEGATIVE_INFINITY.to_string(), "-inf");
		}

		#[test]
		fn test_extremes() {
			assert_eq!(frac(-i64::MAX, 1).to_string(), "-9223372036854775807");
			assert_eq!(
				frac(-i64::MAX, 2).to_string(),
				"-4611686018427387904 1/2"
			);
		}
	}

	mod parse {
		use super::*;

		#[test]
		fn test_integers() {
			assert_eq!("42".parse::<Rational>().unwrap(), frac(42, 1));
			assert_eq!("-42".parse::<Rational>().unwrap(), frac(-42, 1));
			assert_eq!("+42".parse::<Rational>().unwrap(), frac(42, 1));
			assert_eq!(" 0 ".parse::<Rational>().unwrap(), Rational::ZERO);
		}

		#[test]
		fn test_fractions_are_reduced() {
			assert_eq!("6/8".parse::<Rational>().unwrap(), frac(3, 4));
			assert_eq!("-4/2".parse::<Rational>().unwrap(), frac(-2, 1));
		}

		#[test]
		fn test_mixed() {
			assert_eq!("2 1/2".parse::<Rational>().unwrap(), frac(5, 2));
			assert_eq!("-2 1/2".parse::<Rational>().unwrap(), frac(-3, 2));
		}

		#[test]
		fn test_infinities() {
			assert_eq!(
				"+inf".parse::<Rational>().unwrap(),
				Rational::POSITIVE_INFINITY
			);
			assert_eq!(
				"inf".parse::<Rational>().unwrap(),
				Rational::POSITIVE_INFINITY
			);
			assert_eq!(
				"-inf".parse::<Rational>().unwrap(),
				Rational::NEGATIVE_INFINITY
			);
		}

		#[test]
		fn test_malformed_input() {
			for input in
				["", "abc", "1.5", "1/", "/2", "1/-2", "1 2", "1  1/2", "--1", "1e5"]
			{
				assert_eq!(
					input.parse::<Rational>(),
					Err(RationalError::ParseError(input.to_string())),
					"{} should not parse",
					input
				);
			}
		}

		#[test]
		fn test_semantic_errors() {
			assert_eq!(
				"1/0".parse::<Rational>(),
				Err(RationalError::InvalidDenominator(0))
			);
			assert!(matches!(
				"1 3/2".parse::<Rational>(),
				Err(RationalError::InvalidFraction { .. })
			));
			assert_eq!(
				"9223372036854775808".parse::<Rational>(),
				Err(RationalError::ArithmeticOverflow)
			);
			assert_eq!(
				"1/18446744073709551616".parse::<Rational>(),
				Err(RationalError::ArithmeticOverflow)
			);
		}

		#[test]
		fn test_round_trip() {
			use rand::Rng;

			let mut rng = rand::rng();
			for _ in 0..5000 {
				let value = frac(
					rng.random_range(-i64::MAX..=i64::MAX),
					rng.random_range(1..=u64::MAX),
				);
				let text = value.to_string();
				assert_eq!(text.parse::<Rational>().unwrap(), value, "{}", text);
			}

			for value in [Rational::POSITIVE_INFINITY, Rational::NEGATIVE_INFINITY] {
				assert_eq!(value.to_string().parse::<Rational>().unwrap(), value);
			}
		}
	}

	mod decimal {
		use super::*;

		#[test]
		fn test_repeating() {
			assert_eq!(frac(1, 3).to_decimal(4), "0.3333");
			assert_eq!(frac(2, 3).to_decimal(4), "0.6667");
		}

		#[test]
		fn test_bankers_rounding() {
			assert_eq!(frac(5, 2).to_decimal(0), "2");
			assert_eq!(frac(7, 2).to_decimal(0), "4");
			assert_eq!(frac(1, 8).to_decimal(2), "0.12");
			assert_eq!(frac(3, 8).to_decimal(2), "0.38");
			assert_eq!(frac(-1, 8).to_decimal(2), "-0.12");
		}

		#[test]
		fn test_carry_into_integer_part() {
			assert_eq!(frac(999, 1000).to_decimal(2), "1.00");
			assert_eq!(frac(-1999, 200).to_decimal(1), "-10.0");
		}

		#[test]
		fn test_negative_rounding_to_zero_drops_sign() {
			assert_eq!(frac(-1, 1000).to_decimal(2), "0.00");
		}

		#[test]
		fn test_exact_and_padded() {
			assert_eq!(frac(5, 4).to_decimal(4), "1.2500");
			assert_eq!(frac(-12, 1).to_decimal(0), "-12");
		}

		#[test]
		fn test_many_places() {
			let text = frac(1, 7).to_decimal(30);
			assert_eq!(text, "0.142857142857142857142857142857");
		}

		#[test]
		fn test_infinities() {
			assert_eq!(Rational::NEGATIVE_INFINITY.to_decimal(3), "-inf");
		}
	}

	#[test]
	fn test_float_accessors() {
		assert_eq!(frac(1, 4).to_f64(), 0.25);
		assert_eq!(frac(-3, 2).to_f32(), -1.5);
		assert_eq!(Rational::POSITIVE_INFINITY.to_f64(), f64::INFINITY);
		assert_eq!(Rational::NEGATIVE_INFINITY.to_f32(), f32::NEG_INFINITY);
	}
}
