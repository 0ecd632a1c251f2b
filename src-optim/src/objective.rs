//! The objective-function contract consumed by the optimizers.

use ndarray::Array1;
use stochbench_testfunctions::Problem;

/// A scalar function to minimize over a box `[lower, upper]^n`.
///
/// Evaluations must be free of side effects: optimizers call `evaluate` any
/// number of times and in any order.
pub trait Objective {
	/// Fitness of `x`; lower is better
	fn evaluate(&self, x: &Array1<f64>) -> f64;
	/// Lower bound applied to every coordinate
	fn lower_bound(&self) -> f64;
	/// Upper bound applied to every coordinate
	fn upper_bound(&self) -> f64;
	/// Human readable name
	fn name(&self) -> &str;
}

impl Objective for Problem {
	fn evaluate(&self, x: &Array1<f64>) -> f64 {
		Problem::evaluate(self, x)
	}

	fn lower_bound(&self) -> f64 {
		self.lower
	}

	fn upper_bound(&self) -> f64 {
		self.upper
	}

	fn name(&self) -> &str {
		self.name
	}
}

/// Wraps a closure into an [`Objective`].
pub struct FnObjective<F>
where
	F: Fn(&Array1<f64>) -> f64,
{
	name: String,
	lower: f64,
	upper: f64,
	func: F,
}

impl<F> FnObjective<F>
where
	F: Fn(&Array1<f64>) -> f64,
{
	pub fn new(name: impl Into<String>, lower: f64, upper: f64, func: F) -> Self {
		Self { name: name.into(), lower, upper, func }
	}
}

impl<F> Objective for FnObjective<F>
where
	F: Fn(&Array1<f64>) -> f64,
{
	fn evaluate(&self, x: &Array1<f64>) -> f64 {
		(self.func)(x)
	}

	fn lower_bound(&self) -> f64 {
		self.lower
	}

	fn upper_bound(&self) -> f64 {
		self.upper
	}

	fn name(&self) -> &str {
		&self.name
	}
}
