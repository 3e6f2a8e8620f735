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
use crate::config::config_file::{Config, Format};
use crate::parsing::filesystem::Filesystem;
use crate::parsing::parser::{parse_value, Parser as InputParser};
use crate::reports::value_reporter::ValueReporter;
use anyhow::{bail, Error};
use clap::{Parser, ValueEnum};
use rationals::{
	maximum, minimum, product_all, sum_all, Rational, RationalError,
};
use std::cmp::Ordering;
use tracing::Level;

mod config;
mod parsing;
mod reports;

#[derive(Parser)]
#[command(
	name = "rationals",
	version = "0.1",
	about = "Exact rational number calculator"
)]
struct Cli {
	// ----------------
	// -- POSITIONAL --
	// ----------------
	/// The command to execute
	command: Directive,

	/// Values to operate on: `3/4`, `2 1/2`, `-inf`, or interchange JSON
	#[arg(required = false, allow_hyphen_values = true)]
	values: Vec<String>,

	// -----------
	// -- FLAGS --
	// -----------
	/// Reads values from this file, one per line, ahead of inline values
	#[arg(short)]
	file: Option<String>,

	/// Custom config file location (default: ~/.config/rationals/config.toml)
	#[arg(long)]
	config: Option<String>,

	/// Prints results in the interchange encoding
	#[arg(short, long)]
	json: bool,

	/// Decimal places for the dec and table commands
	#[arg(short, long)]
	precision: Option<u32>,

	/// Logs engine diagnostics to stderr
	#[arg(short, long)]
	verbose: bool,
}

impl Cli {
	/// Stops the program from printing e.g. millions of digits by accident
	const MAX_PRECISION: u32 = 50;

	const DEFAULT_PRECISION: u32 = 6;

	/// Extra validations on top of what clap does
	fn validate(&self) -> Result<(), Error> {
		if let Some(prec) = self.precision {
			if prec > Cli::MAX_PRECISION {
				bail!("Maximum precision is {}", Cli::MAX_PRECISION);
			}
		}

		Ok(())
	}
}

#[derive(ValueEnum, Clone, Copy, PartialEq)]
enum Directive {
	Sum,     // sum of all values
	Product, // product of all values
	Diff,    // first value minus the rest
	Quot,    // first value divided by the rest

	Max, // greatest value, -inf when empty
	Min, // least value, +inf when empty
	Cmp, // three-way comparison of exactly two values

	Recip, // reciprocal of each value
	Neg,   // negation of each value

	Fmt,   // canonical form of each value
	Dec,   // decimal rendering of each value
	Table, // values, decimals and total as a table
}

/// How results are written, after merging flags over the config file.
struct Output {
	json: bool,
	precision: u32,
}

impl Output {
	fn resolve(args: &Cli, config: &Config) -> Result<Self, Error> {
		let precision = args
			.precision
			.or(config.precision())
			.unwrap_or(Cli::DEFAULT_PRECISION);
		if precision > Cli::MAX_PRECISION {
			bail!("Maximum precision is {}", Cli::MAX_PRECISION);
		}

		Ok(Self {
			json: args.json || config.format() == Some(Format::Json),
			precision,
		})
	}

	fn emit(&self, value: &Rational) -> Result<(), Error> {
		if self.json {
			println!("{}", serde_json::to_string(value)?);
		} else {
			println!("{}", value);
		}
		Ok(())
	}
}

fn main() -> Result<(), Error> {
	let args = Cli::parse();
	args.validate()?;
	init_logging(args.verbose);

	let fs = Filesystem::new();
	let config = fs.get_config(args.config.as_ref())?;
	let output = Output::resolve(&args, &config)?;

	let values = collect_values(&args)?;

	match args.command {
		Directive::Sum => output.emit(&sum_all(values)?)?,
		Directive::Product => output.emit(&product_all(values)?)?,
		Directive::Diff => {
			output.emit(&fold_left(values, Rational::difference)?)?
		},
		Directive::Quot => output.emit(&fold_left(values, Rational::quotient)?)?,
		Directive::Max => output.emit(&maximum(values))?,
		Directive::Min => output.emit(&minimum(values))?,
		Directive::Cmp => {
			if values.len() != 2 {
				bail!("cmp takes exactly two values, got {}", values.len());
			}
			let symbol = match values[0].cmp(&values[1]) {
				Ordering::Less => "<",
				Ordering::Equal => "=",
				Ordering::Greater => ">",
			};
			println!("{} {} {}", values[0], symbol, values[1]);
		},
		Directive::Recip => {
			for value in values {
				output.emit(&value.reciprocal()?)?;
			}
		},
		Directive::Neg => {
			for value in values {
				output.emit(&-value)?;
			}
		},
		Directive::Fmt => {
			for value in values {
				output.emit(&value)?;
			}
		},
		Directive::Dec => {
			for value in values {
				println!("{}", value.to_decimal(output.precision));
			}
		},
		Directive::Table => {
			ValueReporter::new(values, output.precision).print();
		},
	}

	Ok(())
}

fn init_logging(verbose: bool) {
	let level = if verbose { Level::DEBUG } else { Level::WARN };
	tracing_subscriber::fmt()
		.with_max_level(level)
		.with_target(false)
		.with_writer(std::io::stderr)
		.init();
}

/// File values come first, in file order, then inline values in the order
/// given.
fn collect_values(args: &Cli) -> Result<Vec<Rational>, Error> {
	let mut values = match &args.file {
		Some(path) => InputParser::new().parse(path)?,
		None => Vec::new(),
	};

	for text in &args.values {
		values.push(parse_value(text)?);
	}

	Ok(values)
}

/// Folds the tail of the list into its head; the empty list has no
/// sensible identity for these operators.
fn fold_left(
	values: Vec<Rational>,
	op: fn(Rational, Rational) -> Result<Rational, RationalError>,
) -> Result<Rational, Error> {
	let mut iter = values.into_iter();
	let Some(first) = iter.next() else {
		bail!("At least one value is required");
	};
	Ok(iter.try_fold(first, op)?)
}
