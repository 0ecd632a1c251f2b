//! Differential Evolution with selectable mutation and crossover.
//!
//! Generations are synchronous: every trial of generation `g + 1` is built
//! from the generation-`g` snapshot, and the best-based strategies use the
//! best member of that snapshot. Fitness values are cached per member.

use log::debug;
use std::time::Instant;

use super::{
	check_budget, check_de, CrossoverStrategy, MutationStrategy, Optimizer, OptimizerKind, RunResult,
	RunState,
};
use crate::argmin;
use crate::error::Result;
use crate::objective::Objective;
use crate::population::Population;
use crate::solution_builder::SolutionBuilder;

#[derive(Debug, Clone)]
pub struct DifferentialEvolution {
	pop_size: usize,
	generations: usize,
	scale: f64,
	crossover_rate: f64,
	mutation: MutationStrategy,
	crossover: CrossoverStrategy,
	state: RunState,
}

impl DifferentialEvolution {
	/// rand/1/bin with F = 0.8 and CR = 0.7
	pub fn new(pop_size: usize, generations: usize) -> Self {
		Self {
			pop_size,
			generations,
			scale: 0.8,
			crossover_rate: 0.7,
			mutation: MutationStrategy::Rand1,
			crossover: CrossoverStrategy::Binomial,
			state: RunState::Idle,
		}
	}

	pub fn scale_factor(mut self, f: f64) -> Self {
		self.scale = f;
		self
	}

	pub fn crossover_rate(mut self, cr: f64) -> Self {
		self.crossover_rate = cr;
		self
	}

	pub fn mutation(mut self, mutation: MutationStrategy) -> Self {
		self.mutation = mutation;
		self
	}

	pub fn crossover(mut self, crossover: CrossoverStrategy) -> Self {
		self.crossover = crossover;
		self
	}

	fn run(&self, objective: &dyn Objective, builder: &mut SolutionBuilder) -> Result<RunResult> {
		let start = Instant::now();
		let mut pop = Population::from_builder(builder, self.pop_size)?;
		let mut fitness = pop.evaluate(objective);
		let mut best_fitnesses = Vec::with_capacity(self.generations);
		let mut solutions = Vec::with_capacity(self.generations);
		let mut prev_best = f64::INFINITY;

		for generation in 0..self.generations {
			let snapshot = pop.members().clone();
			let (best_idx, _) = argmin(&fitness);
			let best = snapshot.row(best_idx).to_owned();
			let mut gen_best = prev_best;

			for j in 0..self.pop_size {
				let mutant = self.mutation.mutate(&snapshot, j, &best, self.scale, builder)?;
				let target = snapshot.row(j).to_owned();
				let trial = self.crossover.apply(&target, &mutant, self.crossover_rate, builder.rng_mut());
				let trial_f = objective.evaluate(&trial);

				// ties keep the incumbent
				if fitness[j] > trial_f {
					pop.replace(j, &trial)?;
					fitness[j] = trial_f;
				}
				if fitness[j] < gen_best {
					gen_best = fitness[j];
				}
			}

			let (gen_best_idx, _) = argmin(&fitness);
			best_fitnesses.push(gen_best);
			solutions.push(pop.member(gen_best_idx).to_owned());
			prev_best = gen_best;
			debug!("DE generation {generation}: best {gen_best}");
		}

		let (best_idx, _) = argmin(&fitness);
		Ok(RunResult {
			best_solution: pop.member(best_idx).to_owned(),
			best_fitnesses,
			solutions,
			duration: start.elapsed(),
		})
	}
}

impl Optimizer for DifferentialEvolution {
	fn kind(&self) -> OptimizerKind {
		OptimizerKind::DifferentialEvolution
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
			check_budget(self.generations)?;
			check_de(self.scale, self.crossover_rate, self.pop_size, self.mutation)?;
		}
		self.state.begin()?;
		debug!(
			"DE {}/{} on {}: pop {}, {} generations, F {}, CR {}",
			self.mutation,
			self.crossover,
			objective.name(),
			self.pop_size,
			self.generations,
			self.scale,
			self.crossover_rate
		);
		let result = self.run(objective, builder);
		self.state = RunState::Completed;
		result
	}
}
