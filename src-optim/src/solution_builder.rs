//! Stochastic candidate generation within box bounds.

use ndarray::Array1;
use std::collections::HashMap;

use crate::error::{OptimError, Result};
use crate::rng::SeededRng;

/// Produces random vectors, bounded neighbors and index subsets for one run.
///
/// The builder owns its generator exclusively; all randomness of an
/// optimizer run flows through it.
#[derive(Debug, Clone)]
pub struct SolutionBuilder {
	dimension: usize,
	lower: f64,
	upper: f64,
	rng: SeededRng,
}

impl SolutionBuilder {
	/// Create a builder for vectors of `dimension` components in `[lower, upper]`
	pub fn new(dimension: usize, lower: f64, upper: f64, seed: u64) -> Result<Self> {
		if dimension == 0 {
			return Err(OptimError::InvalidDimension(dimension));
		}
		if !lower.is_finite() || !upper.is_finite() || lower > upper {
			return Err(OptimError::InvalidBounds { lower, upper });
		}
		Ok(Self { dimension, lower, upper, rng: SeededRng::new(seed) })
	}

	pub fn dimension(&self) -> usize {
		self.dimension
	}

	pub fn lower(&self) -> f64 {
		self.lower
	}

	pub fn upper(&self) -> f64 {
		self.upper
	}

	/// Mutable access to the underlying generator (crossover draws use it)
	pub fn rng_mut(&mut self) -> &mut SeededRng {
		&mut self.rng
	}

	/// Reset the generator to `seed`
	pub fn reseed(&mut self, seed: u64) {
		self.rng.seed(seed);
	}

	/// Vector with every component drawn independently from `[lower, upper]`
	pub fn random_vector(&mut self) -> Array1<f64> {
		let span = self.upper - self.lower;
		let rng = &mut self.rng;
		let lower = self.lower;
		Array1::from_shape_fn(self.dimension, |_| lower + span * rng.next_uniform_real())
	}

	/// `count` vectors around `center`, each component moved by `U(-max_step, max_step)`
	/// and clamped into the bounds. `center` is left untouched.
	pub fn neighbors(
		&mut self,
		center: &Array1<f64>,
		count: usize,
		max_step: f64,
	) -> Result<Vec<Array1<f64>>> {
		if center.len() != self.dimension {
			return Err(OptimError::DimensionMismatch { expected: self.dimension, got: center.len() });
		}
		let mut out = Vec::with_capacity(count);
		for _ in 0..count {
			let mut neighbor = center.clone();
			for v in neighbor.iter_mut() {
				let delta = (2.0 * self.rng.next_uniform_real() - 1.0) * max_step;
				*v = self.clamp(*v + delta);
			}
			out.push(neighbor);
		}
		Ok(out)
	}

	/// Saturate `value` into `[lower, upper]`
	pub fn clamp(&self, value: f64) -> f64 {
		if value > self.upper {
			self.upper
		} else if value < self.lower {
			self.lower
		} else {
			value
		}
	}

	/// Saturate every component of `x` in place
	pub fn clamp_vector(&self, x: &mut Array1<f64>) {
		x.mapv_inplace(|v| self.clamp(v));
	}

	/// `subset_size` distinct indices from `{0, .., pop_size - 1} \ {exclude}`.
	///
	/// Partial Fisher-Yates over the virtual list of eligible indices; only
	/// swapped positions are stored, so the cost is O(subset_size).
	pub fn distinct_subset(
		&mut self,
		pop_size: usize,
		subset_size: usize,
		exclude: usize,
	) -> Result<Vec<usize>> {
		if exclude >= pop_size || subset_size > pop_size - 1 {
			return Err(OptimError::SubsetTooLarge { requested: subset_size, pop_size, exclude });
		}
		let eligible = pop_size - 1;
		// position p of the virtual list holds index p, skipping `exclude`
		let value_at = |p: usize| if p >= exclude { p + 1 } else { p };

		let mut swapped: HashMap<usize, usize> = HashMap::with_capacity(2 * subset_size);
		let mut out = Vec::with_capacity(subset_size);
		for i in 0..subset_size {
			let j = i + self.rng.next_uniform_int(eligible - i);
			let at_i = swapped.get(&i).copied().unwrap_or(i);
			let at_j = swapped.get(&j).copied().unwrap_or(j);
			swapped.insert(j, at_i);
			out.push(value_at(at_j));
		}
		Ok(out)
	}
}
