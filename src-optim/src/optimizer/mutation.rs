//! Mutation strategies for Differential Evolution.

use ndarray::{Array1, Array2};
use std::fmt;
use std::str::FromStr;

use crate::error::{OptimError, Result};
use crate::solution_builder::SolutionBuilder;

/// Rule building a mutant vector from members of the current population
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MutationStrategy {
	/// `x_a + F (x_b - x_c)`
	#[default]
	Rand1,
	/// `best + F (x_b - x_c)`
	Best1,
	/// `best + F (x_a + x_b - x_c - x_d)`
	Best2,
	/// `x_a + F (best - x_a) + F (x_b - x_c)`
	RandToBest1,
}

impl MutationStrategy {
	/// Number of distinct members (besides the target) the strategy draws
	pub fn required_indices(self) -> usize {
		match self {
			MutationStrategy::Best2 => 4,
			_ => 3,
		}
	}

	/// Smallest population this strategy can run on
	pub fn min_population(self) -> usize {
		self.required_indices() + 1
	}

	/// Mutant for `target`, clamped into the builder's bounds.
	///
	/// `pop` is the generation snapshot; `best` is its best member.
	pub fn mutate(
		self,
		pop: &Array2<f64>,
		target: usize,
		best: &Array1<f64>,
		f: f64,
		builder: &mut SolutionBuilder,
	) -> Result<Array1<f64>> {
		let idxs = builder.distinct_subset(pop.nrows(), self.required_indices(), target)?;
		let mut mutant = match self {
			MutationStrategy::Rand1 => mutant_rand1(pop, &idxs, f),
			MutationStrategy::Best1 => mutant_best1(pop, best, &idxs, f),
			MutationStrategy::Best2 => mutant_best2(pop, best, &idxs, f),
			MutationStrategy::RandToBest1 => mutant_rand_to_best1(pop, best, &idxs, f),
		};
		builder.clamp_vector(&mut mutant);
		Ok(mutant)
	}
}

fn mutant_rand1(pop: &Array2<f64>, idxs: &[usize], f: f64) -> Array1<f64> {
	&pop.row(idxs[0]) + &((&pop.row(idxs[1]) - &pop.row(idxs[2])) * f)
}

fn mutant_best1(pop: &Array2<f64>, best: &Array1<f64>, idxs: &[usize], f: f64) -> Array1<f64> {
	best + &((&pop.row(idxs[1]) - &pop.row(idxs[2])) * f)
}

fn mutant_best2(pop: &Array2<f64>, best: &Array1<f64>, idxs: &[usize], f: f64) -> Array1<f64> {
	let diff = &(&(&pop.row(idxs[0]) + &pop.row(idxs[1])) - &pop.row(idxs[2])) - &pop.row(idxs[3]);
	best + &(diff * f)
}

fn mutant_rand_to_best1(
	pop: &Array2<f64>,
	best: &Array1<f64>,
	idxs: &[usize],
	f: f64,
) -> Array1<f64> {
	let base = pop.row(idxs[0]);
	let pull = (best - &base) * f;
	let diff = (&pop.row(idxs[1]) - &pop.row(idxs[2])) * f;
	&base + &(pull + diff)
}

impl FromStr for MutationStrategy {
	type Err = OptimError;
	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		let t = s.trim().to_lowercase();
		match t.as_str() {
			"rand1" | "rand/1" | "rand_1" => Ok(MutationStrategy::Rand1),
			"best1" | "best/1" | "best_1" => Ok(MutationStrategy::Best1),
			"best2" | "best/2" | "best_2" => Ok(MutationStrategy::Best2),
			"randtobest1" | "rand-to-best1" | "rand_to_best1" | "rand-to-best/1" | "randbest1" => {
				Ok(MutationStrategy::RandToBest1)
			}
			_ => Err(OptimError::UnknownStrategy { kind: "mutation", name: s.to_string() }),
		}
	}
}

impl fmt::Display for MutationStrategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			MutationStrategy::Rand1 => "rand/1",
			MutationStrategy::Best1 => "best/1",
			MutationStrategy::Best2 => "best/2",
			MutationStrategy::RandToBest1 => "rand-to-best/1",
		};
		f.write_str(name)
	}
}
