//! Stochastic optimization engine for box-bounded continuous problems.
//!
//! The crate provides:
//! - a seedable generator ([`SeededRng`]) and a [`SolutionBuilder`] that is the
//!   only source of randomness in a run
//! - a fixed-size [`Population`]
//! - three single-use optimizers behind the [`Optimizer`] trait: random search,
//!   local search with restarts and Differential Evolution (rand/1, best/1,
//!   best/2, rand-to-best/1 mutation; binomial or exponential crossover)
//! - an [`Orchestrator`] running a list of [`ExperimentSpec`]s in order and
//!   reporting failures per experiment
//!
//! ```rust
//! use stochbench_optim::{ExperimentSpec, Orchestrator};
//!
//! let spec = ExperimentSpec {
//! 	name: "de_sphere".into(),
//! 	problem: 2,
//! 	dimension: 2,
//! 	population_size: 10,
//! 	optimizer: Some("differential evolution".into()),
//! 	max_iterations: 20,
//! 	..Default::default()
//! };
//! let report = Orchestrator::new().run(&[spec]);
//! let outcome = &report.outcomes()[0];
//! assert_eq!(outcome.result.as_ref().unwrap().best_fitnesses.len(), 20);
//! ```

use ndarray::Array1;

pub mod error;
pub mod experiment;
pub mod objective;
pub mod optimizer;
pub mod orchestrator;
pub mod population;
pub mod rng;
pub mod solution_builder;

pub use error::{OptimError, Result};
pub use experiment::ExperimentSpec;
pub use objective::{FnObjective, Objective};
pub use optimizer::{
	build_optimizer, CrossoverStrategy, DifferentialEvolution, LocalSearch, MutationStrategy,
	Optimizer, OptimizerKind, OptimizerParams, RandomSearch, RunResult, RunState,
};
pub use orchestrator::{BatchReport, ExperimentOutcome, Orchestrator};
pub use population::Population;
pub use rng::SeededRng;
pub use solution_builder::SolutionBuilder;

/// Index and value of the first minimum
pub(crate) fn argmin(v: &Array1<f64>) -> (usize, f64) {
	let mut best_i = 0usize;
	let mut best_v = v[0];
	for (i, &val) in v.iter().enumerate() {
		if val < best_v {
			best_v = val;
			best_i = i;
		}
	}
	(best_i, best_v)
}
