//! Optimizer family: one capability, three strategies.
//!
//! Every optimizer turns an [`Objective`] and a [`SolutionBuilder`] into a
//! [`RunResult`]. Instances are single-use: they move `Idle -> Running ->
//! Completed` and refuse a second run.

use ndarray::Array1;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{OptimError, Result};
use crate::objective::Objective;
use crate::solution_builder::SolutionBuilder;

pub mod blind;
pub mod crossover;
pub mod differential_evolution;
pub mod local_search;
pub mod mutation;

pub use blind::RandomSearch;
pub use crossover::CrossoverStrategy;
pub use differential_evolution::DifferentialEvolution;
pub use local_search::LocalSearch;
pub use mutation::MutationStrategy;

/// Lifecycle of an optimizer instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
	#[default]
	Idle,
	Running,
	Completed,
}

impl RunState {
	/// Move to `Running`; any state but `Idle` is rejected
	pub(crate) fn begin(&mut self) -> Result<()> {
		if *self != RunState::Idle {
			return Err(OptimError::AlreadyCompleted);
		}
		*self = RunState::Running;
		Ok(())
	}
}

/// Outcome of one completed optimizer run
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
	/// Best vector found
	pub best_solution: Array1<f64>,
	/// Best fitness seen up to and including each iteration; non-increasing
	pub best_fitnesses: Vec<f64>,
	/// Per-iteration solution history (sampled vectors, accepted moves, or per-generation best)
	pub solutions: Vec<Array1<f64>>,
	/// Wall-clock duration of the run, setup included
	pub duration: Duration,
}

impl RunResult {
	/// Last trajectory entry
	pub fn best_fitness(&self) -> Option<f64> {
		self.best_fitnesses.last().copied()
	}

	pub fn elapsed_secs(&self) -> f64 {
		self.duration.as_secs_f64()
	}
}

/// A single-use stochastic minimizer.
///
/// Parameters are checked when `optimize` is called, so optimizers built
/// directly (not through [`build_optimizer`]) reject a zero budget or
/// out-of-range settings the same way; a rejected call leaves the instance
/// `Idle`.
pub trait Optimizer {
	fn kind(&self) -> OptimizerKind;

	fn state(&self) -> RunState;

	/// Run to completion. Calling this on an instance that already ran
	/// returns [`OptimError::AlreadyCompleted`].
	fn optimize(
		&mut self,
		objective: &dyn Objective,
		builder: &mut SolutionBuilder,
	) -> Result<RunResult>;
}

/// Supported optimizer kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizerKind {
	/// Random search
	Blind,
	/// One local-search episode
	Local,
	/// `max_iterations` independent local-search episodes
	RepeatedLocal,
	DifferentialEvolution,
}

impl FromStr for OptimizerKind {
	type Err = OptimError;
	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		let t = s.trim().to_lowercase().replace(['_', '-'], " ");
		match t.as_str() {
			"blind" | "random" | "random search" => Ok(OptimizerKind::Blind),
			"local" | "local search" => Ok(OptimizerKind::Local),
			"repeated local" | "repeated local search" => Ok(OptimizerKind::RepeatedLocal),
			"differential evolution" | "de" => Ok(OptimizerKind::DifferentialEvolution),
			_ => Err(OptimError::UnknownOptimizer(s.to_string())),
		}
	}
}

impl fmt::Display for OptimizerKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			OptimizerKind::Blind => "blind",
			OptimizerKind::Local => "local",
			OptimizerKind::RepeatedLocal => "repeated local",
			OptimizerKind::DifferentialEvolution => "differential evolution",
		};
		f.write_str(name)
	}
}

/// Parameters shared by the optimizer constructors; each kind reads the
/// fields it needs.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizerParams {
	/// Samples (blind), episodes (repeated local) or generations (DE)
	pub max_iterations: usize,
	pub num_neighbors: usize,
	pub neighbor_delta: f64,
	pub population_size: usize,
	/// Mutation scale factor F
	pub scale_factor: f64,
	/// Crossover rate CR
	pub crossover_rate: f64,
	pub mutation: MutationStrategy,
	pub crossover: CrossoverStrategy,
}

impl Default for OptimizerParams {
	fn default() -> Self {
		Self {
			max_iterations: 1,
			num_neighbors: 0,
			neighbor_delta: 0.0,
			population_size: 30,
			scale_factor: 0.8,
			crossover_rate: 0.7,
			mutation: MutationStrategy::Rand1,
			crossover: CrossoverStrategy::Binomial,
		}
	}
}

fn invalid(name: &'static str, value: f64, reason: &'static str) -> OptimError {
	OptimError::InvalidParameter { name, value, reason }
}

/// Iteration budgets must be at least 1
pub(crate) fn check_budget(max_iterations: usize) -> Result<()> {
	if max_iterations == 0 {
		return Err(invalid("max_iterations", 0.0, "must be >= 1"));
	}
	Ok(())
}

pub(crate) fn check_neighborhood(num_neighbors: usize, delta: f64) -> Result<()> {
	if num_neighbors == 0 {
		return Err(invalid("num_neighbors", 0.0, "must be >= 1"));
	}
	if !delta.is_finite() || delta < 0.0 {
		return Err(invalid("neighbor_delta", delta, "must be finite and >= 0"));
	}
	Ok(())
}

pub(crate) fn check_de(
	scale: f64,
	crossover_rate: f64,
	pop_size: usize,
	mutation: MutationStrategy,
) -> Result<()> {
	if !(0.0..=2.0).contains(&scale) {
		return Err(invalid("scale_factor", scale, "must be in [0, 2]"));
	}
	if !(0.0..=1.0).contains(&crossover_rate) {
		return Err(invalid("crossover_rate", crossover_rate, "must be in [0, 1]"));
	}
	let required = mutation.min_population();
	if pop_size < required {
		return Err(OptimError::PopulationTooSmall { pop_size, required });
	}
	Ok(())
}

impl OptimizerParams {
	/// Check the fields `kind` relies on
	pub fn validate(&self, kind: OptimizerKind) -> Result<()> {
		check_budget(self.max_iterations)?;
		match kind {
			OptimizerKind::Blind => Ok(()),
			OptimizerKind::Local | OptimizerKind::RepeatedLocal => {
				check_neighborhood(self.num_neighbors, self.neighbor_delta)
			}
			OptimizerKind::DifferentialEvolution => check_de(
				self.scale_factor,
				self.crossover_rate,
				self.population_size,
				self.mutation,
			),
		}
	}
}

/// Construct an idle optimizer of `kind` after validating `params`
pub fn build_optimizer(kind: OptimizerKind, params: &OptimizerParams) -> Result<Box<dyn Optimizer>> {
	params.validate(kind)?;
	let optimizer: Box<dyn Optimizer> = match kind {
		OptimizerKind::Blind => Box::new(RandomSearch::new(params.max_iterations)),
		OptimizerKind::Local => {
			Box::new(LocalSearch::single(params.num_neighbors, params.neighbor_delta))
		}
		OptimizerKind::RepeatedLocal => Box::new(LocalSearch::repeated(
			params.max_iterations,
			params.num_neighbors,
			params.neighbor_delta,
		)),
		OptimizerKind::DifferentialEvolution => Box::new(
			DifferentialEvolution::new(params.population_size, params.max_iterations)
				.scale_factor(params.scale_factor)
				.crossover_rate(params.crossover_rate)
				.mutation(params.mutation)
				.crossover(params.crossover),
		),
	};
	Ok(optimizer)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_kind_parsing() {
		assert_eq!("blind".parse::<OptimizerKind>().unwrap(), OptimizerKind::Blind);
		assert_eq!("Random".parse::<OptimizerKind>().unwrap(), OptimizerKind::Blind);
		assert_eq!("local".parse::<OptimizerKind>().unwrap(), OptimizerKind::Local);
		assert_eq!("repeated local".parse::<OptimizerKind>().unwrap(), OptimizerKind::RepeatedLocal);
		assert_eq!("repeated_local".parse::<OptimizerKind>().unwrap(), OptimizerKind::RepeatedLocal);
		assert_eq!(
			"differential evolution".parse::<OptimizerKind>().unwrap(),
			OptimizerKind::DifferentialEvolution
		);
		assert_eq!("DE".parse::<OptimizerKind>().unwrap(), OptimizerKind::DifferentialEvolution);
		assert_eq!(
			"annealing".parse::<OptimizerKind>().unwrap_err(),
			OptimError::UnknownOptimizer("annealing".into())
		);
	}

	#[test]
	fn test_validate_rejects_bad_params() {
		let base = OptimizerParams::default();

		let p = OptimizerParams { max_iterations: 0, ..base.clone() };
		assert!(p.validate(OptimizerKind::Blind).is_err());

		assert!(base.validate(OptimizerKind::Local).is_err(), "zero neighbors");
		let p = OptimizerParams { num_neighbors: 5, neighbor_delta: -1.0, ..base.clone() };
		assert!(p.validate(OptimizerKind::Local).is_err());
		let p = OptimizerParams { num_neighbors: 5, neighbor_delta: 0.1, ..base.clone() };
		assert!(p.validate(OptimizerKind::RepeatedLocal).is_ok());

		let p = OptimizerParams { scale_factor: 2.5, ..base.clone() };
		assert!(p.validate(OptimizerKind::DifferentialEvolution).is_err());
		let p = OptimizerParams { crossover_rate: f64::NAN, ..base.clone() };
		assert!(p.validate(OptimizerKind::DifferentialEvolution).is_err());
		let p = OptimizerParams {
			population_size: 4,
			mutation: MutationStrategy::Best2,
			..base.clone()
		};
		assert_eq!(
			p.validate(OptimizerKind::DifferentialEvolution).unwrap_err(),
			OptimError::PopulationTooSmall { pop_size: 4, required: 5 }
		);
	}

	#[test]
	fn test_build_optimizer_is_idle() {
		let params = OptimizerParams { num_neighbors: 3, neighbor_delta: 0.5, ..Default::default() };
		for kind in [
			OptimizerKind::Blind,
			OptimizerKind::Local,
			OptimizerKind::RepeatedLocal,
			OptimizerKind::DifferentialEvolution,
		] {
			let opt = build_optimizer(kind, &params).unwrap();
			assert_eq!(opt.kind(), kind);
			assert_eq!(opt.state(), RunState::Idle);
		}
	}

	#[test]
	fn test_run_state_begin() {
		let mut state = RunState::Idle;
		state.begin().unwrap();
		assert_eq!(state, RunState::Running);
		assert_eq!(state.begin().unwrap_err(), OptimError::AlreadyCompleted);
	}
}
