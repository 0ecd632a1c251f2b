//! Fixed-size population of candidate vectors.

use ndarray::{Array1, Array2, ArrayView1};

use crate::error::{OptimError, Result};
use crate::objective::Objective;
use crate::rng::SeededRng;
use crate::solution_builder::SolutionBuilder;

/// `size` candidate vectors of `dimension` components, stored row-wise.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
	members: Array2<f64>,
}

impl Population {
	/// Zero-filled population; both `size` and `dimension` must be at least 1
	pub fn new(size: usize, dimension: usize) -> Result<Self> {
		if size == 0 || dimension == 0 {
			return Err(OptimError::InvalidPopulation { size, dimension });
		}
		Ok(Self { members: Array2::zeros((size, dimension)) })
	}

	/// Population whose members are successive `random_vector()` draws of `builder`
	pub fn from_builder(builder: &mut SolutionBuilder, size: usize) -> Result<Self> {
		let mut pop = Self::new(size, builder.dimension())?;
		for i in 0..size {
			let v = builder.random_vector();
			pop.members.row_mut(i).assign(&v);
		}
		Ok(pop)
	}

	/// Fill every component uniformly from `[lower, upper]` with a freshly
	/// seeded generator; the result depends only on the arguments.
	pub fn initialize(&mut self, lower: f64, upper: f64, seed: u64) -> Result<()> {
		if !lower.is_finite() || !upper.is_finite() || lower > upper {
			return Err(OptimError::InvalidBounds { lower, upper });
		}
		let mut rng = SeededRng::new(seed);
		self.members.mapv_inplace(|_| lower + (upper - lower) * rng.next_uniform_real());
		Ok(())
	}

	/// One fitness per member, in member order; members are not modified
	pub fn evaluate(&self, objective: &dyn Objective) -> Array1<f64> {
		self.members.rows().into_iter().map(|row| objective.evaluate(&row.to_owned())).collect()
	}

	pub fn size(&self) -> usize {
		self.members.nrows()
	}

	pub fn dimension(&self) -> usize {
		self.members.ncols()
	}

	pub fn member(&self, i: usize) -> ArrayView1<'_, f64> {
		self.members.row(i)
	}

	pub fn members(&self) -> &Array2<f64> {
		&self.members
	}

	/// Overwrite member `i` with a copy of `x`
	pub fn replace(&mut self, i: usize, x: &Array1<f64>) -> Result<()> {
		if x.len() != self.dimension() {
			return Err(OptimError::DimensionMismatch { expected: self.dimension(), got: x.len() });
		}
		self.members.row_mut(i).assign(x);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::objective::FnObjective;
	use ndarray::array;

	#[test]
	fn test_new_validates_shape() {
		assert_eq!(
			Population::new(0, 3).unwrap_err(),
			OptimError::InvalidPopulation { size: 0, dimension: 3 }
		);
		assert!(Population::new(3, 0).is_err());
		let p = Population::new(4, 2).unwrap();
		assert_eq!((p.size(), p.dimension()), (4, 2));
	}

	#[test]
	fn test_initialize_is_deterministic_and_bounded() {
		let mut a = Population::new(10, 3).unwrap();
		let mut b = Population::new(10, 3).unwrap();
		a.initialize(-2.0, 4.0, 99).unwrap();
		b.initialize(-2.0, 4.0, 99).unwrap();
		assert_eq!(a, b);
		assert!(a.members().iter().all(|&v| (-2.0..=4.0).contains(&v)));

		b.initialize(-2.0, 4.0, 100).unwrap();
		assert_ne!(a, b);
	}

	#[test]
	fn test_evaluate_is_pure() {
		let mut p = Population::new(3, 2).unwrap();
		p.replace(0, &array![1.0, 1.0]).unwrap();
		p.replace(1, &array![0.0, 2.0]).unwrap();
		p.replace(2, &array![-3.0, 0.0]).unwrap();
		let before = p.clone();
		let sphere = FnObjective::new("sphere", -5.0, 5.0, |x: &Array1<f64>| x.dot(x));
		let f = p.evaluate(&sphere);
		assert_eq!(f, array![2.0, 4.0, 9.0]);
		assert_eq!(p, before);
	}

	#[test]
	fn test_replace_checks_dimension() {
		let mut p = Population::new(2, 2).unwrap();
		assert!(matches!(p.replace(0, &array![1.0]), Err(OptimError::DimensionMismatch { .. })));
	}

	#[test]
	fn test_from_builder_matches_builder_stream() {
		let mut b1 = SolutionBuilder::new(3, -1.0, 1.0, 5).unwrap();
		let mut b2 = SolutionBuilder::new(3, -1.0, 1.0, 5).unwrap();
		let p = Population::from_builder(&mut b1, 4).unwrap();
		for i in 0..4 {
			assert_eq!(p.member(i).to_owned(), b2.random_vector());
		}
	}
}
