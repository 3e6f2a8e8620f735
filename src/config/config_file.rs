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
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
	pub output: Option<Output>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Output {
	pub format: Option<Format>,

	/// Decimal places used by the `dec` and `table` commands when the
	/// command line does not say otherwise.
	pub precision: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
	Text,
	Json,
}

impl Config {
	pub fn format(&self) -> Option<Format> {
		self.output.as_ref().and_then(|o| o.format)
	}

	pub fn precision(&self) -> Option<u32> {
		self.output.as_ref().and_then(|o| o.precision)
	}
}
