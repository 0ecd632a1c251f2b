//! Runs a batch of experiments in order, isolating failures.

use log::{info, warn};
use stochbench_testfunctions::{problem_by_id, Problem};

use crate::error::{OptimError, Result};
use crate::experiment::ExperimentSpec;
use crate::optimizer::{build_optimizer, RunResult};
use crate::solution_builder::SolutionBuilder;

/// Maps a problem identifier to an objective function
pub type ProblemRegistry = fn(u32) -> Option<Problem>;

/// Result of one experiment, keyed by its name
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentOutcome {
	pub name: String,
	pub result: std::result::Result<RunResult, OptimError>,
}

/// Outcomes in the order of the input specifications
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
	outcomes: Vec<ExperimentOutcome>,
}

impl BatchReport {
	pub fn outcomes(&self) -> &[ExperimentOutcome] {
		&self.outcomes
	}

	pub fn into_outcomes(self) -> Vec<ExperimentOutcome> {
		self.outcomes
	}

	/// Completed runs, in input order
	pub fn successes(&self) -> impl Iterator<Item = (&str, &RunResult)> {
		self.outcomes.iter().filter_map(|o| o.result.as_ref().ok().map(|r| (o.name.as_str(), r)))
	}

	/// Failed experiments with their reason, in input order
	pub fn failures(&self) -> impl Iterator<Item = (&str, &OptimError)> {
		self.outcomes.iter().filter_map(|o| o.result.as_ref().err().map(|e| (o.name.as_str(), e)))
	}

	pub fn len(&self) -> usize {
		self.outcomes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.outcomes.is_empty()
	}
}

/// Builds objective, solution builder and optimizer for each specification
/// and runs them one after the other.
#[derive(Debug, Clone, Copy)]
pub struct Orchestrator {
	registry: ProblemRegistry,
}

impl Default for Orchestrator {
	fn default() -> Self {
		Self::new()
	}
}

impl Orchestrator {
	/// Orchestrator over the standard test-function catalog
	pub fn new() -> Self {
		Self { registry: problem_by_id }
	}

	pub fn with_registry(registry: ProblemRegistry) -> Self {
		Self { registry }
	}

	/// Set up and run a single experiment
	pub fn run_one(&self, spec: &ExperimentSpec) -> Result<RunResult> {
		let problem = (self.registry)(spec.problem).ok_or(OptimError::UnknownProblem(spec.problem))?;
		let kind = spec.optimizer_kind()?;
		let params = spec.optimizer_params()?;
		let (lower, upper) = spec.resolve_bounds(&problem);
		let mut builder = SolutionBuilder::new(spec.dimension, lower, upper, spec.seed)?;
		let mut optimizer = build_optimizer(kind, &params)?;
		optimizer.optimize(&problem, &mut builder)
	}

	/// Run every specification; a failing experiment is recorded and the
	/// batch continues.
	pub fn run(&self, specs: &[ExperimentSpec]) -> BatchReport {
		let mut outcomes = Vec::with_capacity(specs.len());
		for (i, spec) in specs.iter().enumerate() {
			info!("[{}/{}] running {}", i + 1, specs.len(), spec.name);
			let result = self.run_one(spec);
			match &result {
				Ok(run) => info!(
					"{}: best {:.6e} in {:.3}s",
					spec.name,
					run.best_fitness().unwrap_or(f64::NAN),
					run.elapsed_secs()
				),
				Err(e) => warn!("{}: skipped ({e})", spec.name),
			}
			outcomes.push(ExperimentOutcome { name: spec.name.clone(), result });
		}
		BatchReport { outcomes }
	}
}
