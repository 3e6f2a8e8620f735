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
use thiserror::Error;

/// Every way an operation on a rational number can fail. Nothing here is
/// fatal; the caller decides whether to retry or give up.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RationalError {
	/// NaN input, or an interchange payload of no recognized shape.
	#[error("invalid value: {0}")]
	InvalidValue(String),

	/// Zero (or, for the proper-fraction constructor, one) given as a
	/// denominator.
	#[error("invalid denominator: {0}")]
	InvalidDenominator(u64),

	/// Fraction part of a mixed number is not strictly between zero and one.
	#[error("{numerator}/{denominator} is not strictly between zero and one")]
	InvalidFraction { numerator: u64, denominator: u64 },

	#[error("division by zero")]
	DivisionByZero,

	/// The exact result does not fit the numerator/denominator widths.
	#[error("arithmetic overflow")]
	ArithmeticOverflow,

	#[error("indeterminate form: {0}")]
	IndeterminateForm(&'static str),

	#[error("cannot parse '{0}' as a rational number")]
	ParseError(String),
}
