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
use crate::reports::table::Table;
use rationals::{sum_all, Rational};

/// Lists values alongside their decimal approximation and raw parts, with
/// the running total as the last row.
pub struct ValueReporter {
	values: Vec<Rational>,
	precision: u32,
}

impl ValueReporter {
	pub fn new(values: Vec<Rational>, precision: u32) -> Self {
		Self { values, precision }
	}

	pub fn render(&self) -> String {
		let mut table = Table::new(5);

		table.add_header(vec![
			"#",
			"Value",
			"Decimal",
			"Numerator",
			"Denominator",
		]);
		table.add_separator();

		for (i, value) in self.values.iter().enumerate() {
			table.add_row(self.row(&(i + 1).to_string(), value));
		}

		table.add_separator();
		match sum_all(self.values.iter().copied()) {
			Ok(total) => table.add_row(self.row("sum", &total)),
			Err(e) => {
				tracing::warn!("total is undefined: {}", e);
				table.add_row(vec!["sum".to_string(), "undefined".to_string()])
			},
		}

		table.right_align(vec![0, 2, 3, 4]);
		table.render()
	}

	pub fn print(&self) {
		print!("{}", self.render());
	}

	fn row(&self, label: &str, value: &Rational) -> Vec<String> {
		let part = |p: Option<String>| p.unwrap_or_else(|| "-".to_string());
		vec![
			label.to_string(),
			value.to_string(),
			value.to_decimal(self.precision),
			part(value.numerator().map(|n| n.to_string())),
			part(value.denominator().map(|d| d.to_string())),
		]
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn cells(line: &str) -> Vec<&str> {
		line.split("   ").map(str::trim).filter(|c| !c.is_empty()).collect()
	}

	#[test]
	fn test_render_lists_values_and_total() {
		let values = vec![
			Rational::new(1, 2).unwrap(),
			Rational::new(-4, 3).unwrap(),
		];
		let rendered = ValueReporter::new(values, 3).render();
		let lines: Vec<&str> = rendered.lines().collect();

		assert_eq!(lines.len(), 6);
		assert!(lines[0].contains("Numerator"));
		assert_eq!(cells(lines[2]), vec!["1", "1/2", "0.500", "1", "2"]);
		assert_eq!(cells(lines[3]), vec!["2", "-2 2/3", "-1.333", "-4", "3"]);
		assert_eq!(cells(lines[5]), vec!["sum", "-5/6", "-0.833", "-5", "6"]);
	}

	#[test]
	fn test_render_infinity() {
		let values = vec![Rational::POSITIVE_INFINITY];
		let rendered = ValueReporter::new(values, 2).render();
		let lines: Vec<&str> = rendered.lines().collect();

		assert_eq!(cells(lines[2]), vec!["1", "+inf", "+inf", "-", "-"]);
	}

	#[test]
	fn test_undefined_total() {
		let values =
			vec![Rational::POSITIVE_INFINITY, Rational::NEGATIVE_INFINITY];
		let rendered = ValueReporter::new(values, 2).render();
		let last = rendered.lines().last().unwrap();

		assert_eq!(cells(last), vec!["sum", "undefined"]);
	}
}
