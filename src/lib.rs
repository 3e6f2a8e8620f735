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

//! Exact rational numbers with signed infinities.
//!
//! Values come from one of six input shapes (see [`Shape`]), are normalized
//! into lowest terms on construction, and are combined with exact
//! arithmetic that reports overflow instead of wrapping. Numerators are
//! 64-bit signed and denominators 64-bit unsigned; intermediate results are
//! computed at 128 bits.
//!
//! ```
//! use rationals::Rational;
//!
//! let half = Rational::from_fraction(1, 2).unwrap();
//! let third = Rational::from_fraction(1, 3).unwrap();
//! assert_eq!(half.sum(third).unwrap().to_string(), "5/6");
//! ```

pub mod batch;
pub mod error;
pub mod interchange;
pub mod rational;

pub use batch::{box_all, unbox_all, Repr};
pub use error::RationalError;
pub use interchange::{export, import, Interchange};
pub use rational::arithmetic::{maximum, minimum, product_all, sum_all};
pub use rational::compare::negate_comparison_result;
pub use rational::normalize::Shape;
pub use rational::value::{Fraction, Rational, Sign};
