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
use crate::parsing::filesystem::Filesystem;
use anyhow::{anyhow, bail, Error};
use rationals::{import, Rational, RationalError};
use serde_json::Value;
use std::fs::File;
use std::io;
use std::io::BufRead;

pub struct Parser {
	fs: Filesystem,
}

impl Parser {
	pub fn new() -> Self {
		Self {
			fs: Filesystem::new(),
		}
	}

	/// Reads every value in the file at file_path, in order. Include
	/// statements splice the named file in at that point; a file may only
	/// be read once per parse, which also rules out circular includes.
	pub fn parse(&mut self, file_path: &str) -> Result<Vec<Rational>, Error> {
		let mut values = Vec::new();
		let file = self.fs.open(file_path)?;
		self.read(file_path, &file, &mut values)?;

		tracing::debug!("read {} values from {}", values.len(), file_path);
		Ok(values)
	}

	fn read(
		&mut self,
		path: &str,
		file: &File,
		values: &mut Vec<Rational>,
	) -> Result<(), Error> {
		self.fs.declare_file(path)?;

		let reader = io::BufReader::new(file);

		for (i, line) in reader.lines().enumerate() {
			// Chop comments out
			let l = line?
				.split('#')
				.next()
				.unwrap_or_default()
				.trim()
				.to_string();

			// Skip blank lines
			if l.is_empty() {
				continue;
			}

			if l.starts_with("include") {
				let include: Vec<&str> = l.split_whitespace().collect();
				if include.len() != 2 {
					bail!("Invalid include ({}:{})", path, i + 1)
				}

				let file = self.fs.open(include[1])?;
				self.read(include[1], &file, values)?;
				continue;
			}

			let value = parse_value(&l)
				.map_err(|e| anyhow!("{}:{}: {}", path, i + 1, e))?;
			values.push(value);
		}

		Ok(())
	}
}

/// Reads one value from the command line or an input file. Anything that is
/// valid JSON goes through the interchange decoder, so `0.25` and
/// `{"numerator": 1, "denominator": 4}` both work; everything else must be
/// in the textual grammar (`1/4`, `2 1/2`, `-inf`).
pub fn parse_value(text: &str) -> Result<Rational, RationalError> {
	let payload = match serde_json::from_str::<Value>(text) {
		Ok(payload) => payload,
		Err(_) => return text.parse(),
	};

	let value = import(&payload)?;
	if matches!(&payload, Value::Number(n) if n.is_f64()) {
		tracing::warn!(
			"{} was read as a binary float; its exact value is {}",
			text,
			value
		);
	}
	Ok(value)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_text_values() {
		assert_eq!(parse_value("3/4").unwrap(), Rational::new(3, 4).unwrap());
		assert_eq!(
			parse_value("-2 1/2").unwrap(),
			Rational::new(-3, 2).unwrap()
		);
		assert_eq!(parse_value("-inf").unwrap(), Rational::NEGATIVE_INFINITY);
	}

	#[test]
	fn test_json_values() {
		assert_eq!(parse_value("5").unwrap(), Rational::new(5, 1).unwrap());
		assert_eq!(parse_value("0.25").unwrap(), Rational::new(1, 4).unwrap());
		assert_eq!(
			parse_value(r#"{"numerator": 2, "denominator": 4}"#).unwrap(),
			Rational::new(1, 2).unwrap()
		);
		assert_eq!(
			parse_value(r#""1 1/3""#).unwrap(),
			Rational::new(4, 3).unwrap()
		);
	}

	#[test]
	fn test_bad_values() {
		assert!(matches!(
			parse_value("three"),
			Err(RationalError::ParseError(_))
		));
		assert!(matches!(
			parse_value("[1]"),
			Err(RationalError::InvalidValue(_))
		));
	}

	#[test]
	fn test_include_splices_values() {
		let mut parser = Parser::new();
		let values = parser.parse("tests/test_data/sum/05_in.txt").unwrap();
		assert_eq!(
			values,
			vec![
				Rational::new(1, 4).unwrap(),
				Rational::new(1, 4).unwrap(),
				Rational::ONE,
			]
		);
	}

	#[test]
	fn test_errors_name_the_line() {
		let mut parser = Parser::new();
		let path = "tests/test_data/failures/03_in.txt";
		let err = parser.parse(path).unwrap_err();
		assert!(err.to_string().starts_with(&format!("{}:1:", path)));
	}

	#[test]
	fn test_missing_file() {
		let mut parser = Parser::new();
		assert!(parser.parse("does/not/exist.txt").is_err());
	}
}
