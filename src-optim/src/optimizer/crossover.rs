//! Crossover strategies for Differential Evolution.

use ndarray::Array1;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

use crate::error::OptimError;

/// Rule combining a target vector and a mutant into a trial vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossoverStrategy {
	/// Per-component coin flip with one guaranteed mutant component
	#[default]
	Binomial,
	/// Contiguous (wrapping) run of mutant components
	Exponential,
}

impl CrossoverStrategy {
	/// Trial vector for `target`; at least one component always comes from `mutant`
	pub fn apply<R: Rng + ?Sized>(
		self,
		target: &Array1<f64>,
		mutant: &Array1<f64>,
		cr: f64,
		rng: &mut R,
	) -> Array1<f64> {
		match self {
			CrossoverStrategy::Binomial => binomial_crossover(target, mutant, cr, rng),
			CrossoverStrategy::Exponential => exponential_crossover(target, mutant, cr, rng),
		}
	}
}

pub(crate) fn binomial_crossover<R: Rng + ?Sized>(
	target: &Array1<f64>,
	mutant: &Array1<f64>,
	cr: f64,
	rng: &mut R,
) -> Array1<f64> {
	let n = target.len();
	let jrand = rng.random_range(0..n);
	let mut trial = target.clone();
	for j in 0..n {
		if j == jrand || rng.random::<f64>() < cr {
			trial[j] = mutant[j];
		}
	}
	trial
}

pub(crate) fn exponential_crossover<R: Rng + ?Sized>(
	target: &Array1<f64>,
	mutant: &Array1<f64>,
	cr: f64,
	rng: &mut R,
) -> Array1<f64> {
	let n = target.len();
	let mut trial = target.clone();
	let mut j = rng.random_range(0..n);
	let mut copied = 0usize;
	loop {
		trial[j] = mutant[j];
		copied += 1;
		j = (j + 1) % n;
		if copied >= n || rng.random::<f64>() >= cr {
			break;
		}
	}
	trial
}

impl FromStr for CrossoverStrategy {
	type Err = OptimError;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"binomial" | "bin" => Ok(CrossoverStrategy::Binomial),
			"exponential" | "exp" => Ok(CrossoverStrategy::Exponential),
			_ => Err(OptimError::UnknownStrategy { kind: "crossover", name: s.to_string() }),
		}
	}
}

impl fmt::Display for CrossoverStrategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			CrossoverStrategy::Binomial => f.write_str("binomial"),
			CrossoverStrategy::Exponential => f.write_str("exponential"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rng::SeededRng;

	fn count_from_mutant(trial: &Array1<f64>) -> usize {
		trial.iter().filter(|&&v| v == 1.0).count()
	}

	#[test]
	fn test_parse() {
		assert_eq!("BIN".parse::<CrossoverStrategy>().unwrap(), CrossoverStrategy::Binomial);
		assert_eq!("exponential".parse::<CrossoverStrategy>().unwrap(), CrossoverStrategy::Exponential);
		assert!("uniform".parse::<CrossoverStrategy>().is_err());
	}

	#[test]
	fn test_zero_rate_copies_exactly_one() {
		let target = Array1::zeros(8);
		let mutant = Array1::ones(8);
		let mut rng = SeededRng::new(11);
		for strategy in [CrossoverStrategy::Binomial, CrossoverStrategy::Exponential] {
			for _ in 0..50 {
				let trial = strategy.apply(&target, &mutant, 0.0, &mut rng);
				assert_eq!(count_from_mutant(&trial), 1, "{strategy}");
			}
		}
	}

	#[test]
	fn test_full_rate_copies_everything() {
		let target = Array1::zeros(6);
		let mutant = Array1::ones(6);
		let mut rng = SeededRng::new(12);
		for strategy in [CrossoverStrategy::Binomial, CrossoverStrategy::Exponential] {
			let trial = strategy.apply(&target, &mutant, 1.0, &mut rng);
			assert_eq!(trial, mutant);
		}
	}

	#[test]
	fn test_exponential_run_is_contiguous() {
		let target = Array1::zeros(10);
		let mutant = Array1::ones(10);
		let mut rng = SeededRng::new(13);
		for _ in 0..100 {
			let trial = exponential_crossover(&target, &mutant, 0.6, &mut rng);
			// a wrapping run has at most one rising edge 0 -> 1
			let edges = (0..10).filter(|&i| trial[i] == 0.0 && trial[(i + 1) % 10] == 1.0).count();
			assert!(edges <= 1);
			assert!(count_from_mutant(&trial) >= 1);
		}
	}
}
