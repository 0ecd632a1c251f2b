//! Neighborhood descent with independent random restarts.

use log::debug;
use ndarray::Array1;
use std::time::Instant;

use super::{check_budget, check_neighborhood, Optimizer, OptimizerKind, RunResult, RunState};
use crate::error::Result;
use crate::objective::Objective;
use crate::solution_builder::SolutionBuilder;

/// Local search. Each episode starts from a fresh random vector and moves to
/// the best of `num_neighbors` neighbors while that strictly improves; it
/// ends at the first round without improvement.
#[derive(Debug, Clone)]
pub struct LocalSearch {
	kind: OptimizerKind,
	episodes: usize,
	num_neighbors: usize,
	delta: f64,
	state: RunState,
	final_neighbors: Vec<(Array1<f64>, f64)>,
}

impl LocalSearch {
	/// One episode
	pub fn single(num_neighbors: usize, delta: f64) -> Self {
		Self::with_kind(OptimizerKind::Local, 1, num_neighbors, delta)
	}

	/// `episodes` independent episodes, the best of all is reported
	pub fn repeated(episodes: usize, num_neighbors: usize, delta: f64) -> Self {
		Self::with_kind(OptimizerKind::RepeatedLocal, episodes, num_neighbors, delta)
	}

	fn with_kind(kind: OptimizerKind, episodes: usize, num_neighbors: usize, delta: f64) -> Self {
		Self { kind, episodes, num_neighbors, delta, state: RunState::Idle, final_neighbors: Vec::new() }
	}

	/// Neighbors and fitnesses of the last, non-improving round of the last episode
	pub fn final_neighbors(&self) -> &[(Array1<f64>, f64)] {
		&self.final_neighbors
	}

	fn run(&mut self, objective: &dyn Objective, builder: &mut SolutionBuilder) -> Result<RunResult> {
		let start = Instant::now();
		let mut best_solution = Array1::zeros(builder.dimension());
		let mut best_f = f64::INFINITY;
		let mut best_fitnesses = Vec::new();
		let mut solutions = Vec::new();

		for episode in 0..self.episodes {
			let mut current = builder.random_vector();
			let mut current_f = objective.evaluate(&current);
			if episode == 0 || current_f < best_f {
				best_f = current_f;
				best_solution = current.clone();
			}
			best_fitnesses.push(best_f);
			solutions.push(current.clone());

			let mut rounds = 0usize;
			loop {
				rounds += 1;
				let round: Vec<(Array1<f64>, f64)> = builder
					.neighbors(&current, self.num_neighbors, self.delta)?
					.into_iter()
					.map(|x| {
						let f = objective.evaluate(&x);
						(x, f)
					})
					.collect();

				let mut winner: Option<usize> = None;
				let mut winner_f = current_f;
				for (i, (_, f)) in round.iter().enumerate() {
					if *f < winner_f {
						winner_f = *f;
						winner = Some(i);
					}
				}

				match winner {
					Some(i) => {
						current = round[i].0.clone();
						current_f = winner_f;
						if current_f < best_f {
							best_f = current_f;
							best_solution = current.clone();
						}
						best_fitnesses.push(best_f);
						solutions.push(current.clone());
					}
					None => {
						best_fitnesses.push(best_f);
						self.final_neighbors = round;
						break;
					}
				}
			}
			debug!("local search episode {episode}: {rounds} rounds, local optimum {current_f}");
		}

		Ok(RunResult { best_solution, best_fitnesses, solutions, duration: start.elapsed() })
	}
}

impl Optimizer for LocalSearch {
	fn kind(&self) -> OptimizerKind {
		self.kind
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
			check_budget(self.episodes)?;
			check_neighborhood(self.num_neighbors, self.delta)?;
		}
		self.state.begin()?;
		debug!(
			"local search on {}: {} episode(s), {} neighbors, step {}",
			objective.name(),
			self.episodes,
			self.num_neighbors,
			self.delta
		);
		let result = self.run(objective, builder);
		self.state = RunState::Completed;
		result
	}
}
