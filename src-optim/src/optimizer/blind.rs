//! Random search: independent uniform samples, keep the best.

use log::debug;
use std::time::Instant;

use super::{check_budget, Optimizer, OptimizerKind, RunResult, RunState};
use crate::error::Result;
use crate::objective::Objective;
use crate::solution_builder::SolutionBuilder;

#[derive(Debug, Clone)]
pub struct RandomSearch {
	max_iterations: usize,
	state: RunState,
}

impl RandomSearch {
	pub fn new(max_iterations: usize) -> Self {
		Self { max_iterations, state: RunState::Idle }
	}

	fn run(&self, objective: &dyn Objective, builder: &mut SolutionBuilder) -> RunResult {
		let start = Instant::now();
		let mut best_solution = builder.random_vector();
		let mut best_f = objective.evaluate(&best_solution);
		let mut best_fitnesses = Vec::with_capacity(self.max_iterations);
		let mut solutions = Vec::with_capacity(self.max_iterations);
		best_fitnesses.push(best_f);
		solutions.push(best_solution.clone());

		for _ in 1..self.max_iterations {
			let x = builder.random_vector();
			let f = objective.evaluate(&x);
			if f < best_f {
				best_f = f;
				best_solution = x.clone();
			}
			best_fitnesses.push(best_f);
			solutions.push(x);
		}

		RunResult { best_solution, best_fitnesses, solutions, duration: start.elapsed() }
	}
}

impl Optimizer for RandomSearch {
	fn kind(&self) -> OptimizerKind {
		OptimizerKind::Blind
	}

	fn state(&self) -> RunState {
		self.state
	}

	fn optimize(
		&mut self,
		objective: &dyn Objective,
		builder: &mut SolutionBuilder,
	) -> Result<RunResult> {
		if self.state == RunState::Idle {
			check_budget(self.max_iterations)?;
		}
		self.state.begin()?;
		debug!(
			"random search on {}: {} samples, dimension {}",
			objective.name(),
			self.max_iterations,
			builder.dimension()
		);
		let result = self.run(objective, builder);
		self.state = RunState::Completed;
		debug!("random search done: best {:?}", result.best_fitness());
		Ok(result)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::OptimError;
	use crate::objective::FnObjective;
	use ndarray::Array1;

	fn sphere() -> FnObjective<impl Fn(&Array1<f64>) -> f64> {
		FnObjective::new("sphere", -1.0, 1.0, |x: &Array1<f64>| x.dot(x))
	}

	#[test]
	fn test_trajectory_is_running_minimum() {
		let objective = sphere();
		let mut builder = SolutionBuilder::new(1, -1.0, 1.0, 42).unwrap();
		let mut opt = RandomSearch::new(100);
		let res = opt.optimize(&objective, &mut builder).unwrap();

		assert_eq!(res.best_fitnesses.len(), 100);
		assert_eq!(res.solutions.len(), 100);
		let mut running = f64::INFINITY;
		for (f, x) in res.best_fitnesses.iter().zip(&res.solutions) {
			running = running.min(objective.evaluate(x));
			assert_eq!(*f, running);
		}
		assert!(res.best_fitness().unwrap() >= 0.0);
		assert_eq!(objective.evaluate(&res.best_solution), res.best_fitness().unwrap());
	}

	#[test]
	fn test_single_use() {
		let objective = sphere();
		let mut builder = SolutionBuilder::new(2, -1.0, 1.0, 1).unwrap();
		let mut opt = RandomSearch::new(3);
		opt.optimize(&objective, &mut builder).unwrap();
		assert_eq!(opt.state(), RunState::Completed);
		assert_eq!(opt.optimize(&objective, &mut builder).unwrap_err(), OptimError::AlreadyCompleted);
	}

	#[test]
	fn test_zero_budget_is_rejected() {
		let objective = FnObjective::new("sphere", 1.0, 2.0, |x: &Array1<f64>| x.dot(x));
		let mut builder = SolutionBuilder::new(2, 1.0, 2.0, 1).unwrap();
		let mut opt = RandomSearch::new(0);
		let err = opt.optimize(&objective, &mut builder).unwrap_err();
		assert!(matches!(err, OptimError::InvalidParameter { name: "max_iterations", .. }));
		assert_eq!(opt.state(), RunState::Idle);
	}
}
