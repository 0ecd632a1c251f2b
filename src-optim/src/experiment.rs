//! Experiment specification: everything needed to set up one run.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{OptimError, Result};
use crate::objective::Objective;
use crate::optimizer::{OptimizerKind, OptimizerParams};

pub const DEFAULT_SEED: u64 = 108_664;

/// One experiment. Missing fields take the defaults of [`Default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentSpec {
	pub name: String,
	/// Registry identifier of the objective function
	pub problem: u32,
	pub dimension: usize,
	/// Differential Evolution population size
	pub population_size: usize,
	/// `(lower, upper)`; absent or `upper <= lower` means the problem's own bounds
	pub bounds: Option<(f64, f64)>,
	pub seed: u64,
	/// Optimizer kind, e.g. "blind", "local", "repeated local", "differential evolution"
	pub optimizer: Option<String>,
	/// Samples, episodes or generations depending on the optimizer
	pub max_iterations: usize,
	pub num_neighbors: usize,
	pub neighbor_delta: f64,
	pub scale_factor: f64,
	pub crossover_rate: f64,
	pub mutation: String,
	pub crossover: String,
}

impl Default for ExperimentSpec {
	fn default() -> Self {
		Self {
			name: "Unnamed".to_string(),
			problem: 1,
			dimension: 30,
			population_size: 30,
			bounds: None,
			seed: DEFAULT_SEED,
			optimizer: None,
			max_iterations: 1,
			num_neighbors: 0,
			neighbor_delta: 0.0,
			scale_factor: 0.8,
			crossover_rate: 0.7,
			mutation: "rand1".to_string(),
			crossover: "binomial".to_string(),
		}
	}
}

impl ExperimentSpec {
	/// Bounds to search in: the explicit pair when it is consistent, the
	/// objective's otherwise
	pub fn resolve_bounds(&self, objective: &dyn Objective) -> (f64, f64) {
		match self.bounds {
			Some((lower, upper)) if lower < upper && lower.is_finite() && upper.is_finite() => {
				(lower, upper)
			}
			Some((lower, upper)) => {
				warn!(
					"{}: inconsistent bounds [{lower}, {upper}], using {} defaults",
					self.name,
					objective.name()
				);
				(objective.lower_bound(), objective.upper_bound())
			}
			None => (objective.lower_bound(), objective.upper_bound()),
		}
	}

	pub fn optimizer_kind(&self) -> Result<OptimizerKind> {
		self.optimizer.as_deref().ok_or(OptimError::MissingOptimizer)?.parse()
	}

	/// Optimizer parameters with the strategy selectors parsed
	pub fn optimizer_params(&self) -> Result<OptimizerParams> {
		Ok(OptimizerParams {
			max_iterations: self.max_iterations,
			num_neighbors: self.num_neighbors,
			neighbor_delta: self.neighbor_delta,
			population_size: self.population_size,
			scale_factor: self.scale_factor,
			crossover_rate: self.crossover_rate,
			mutation: self.mutation.parse()?,
			crossover: self.crossover.parse()?,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::optimizer::{CrossoverStrategy, MutationStrategy};
	use stochbench_testfunctions::problem_by_id;

	#[test]
	fn test_defaults_from_empty_json() {
		let spec: ExperimentSpec = serde_json::from_str("{}").unwrap();
		assert_eq!(spec, ExperimentSpec::default());
		assert_eq!(spec.name, "Unnamed");
		assert_eq!(spec.seed, 108_664);
		assert_eq!(spec.max_iterations, 1);
	}

	#[test]
	fn test_partial_json() {
		let spec: ExperimentSpec = serde_json::from_str(
			r#"{"name": "de", "problem": 4, "bounds": [-1.0, 2.0], "optimizer": "de", "mutation": "best/2"}"#,
		)
		.unwrap();
		assert_eq!(spec.bounds, Some((-1.0, 2.0)));
		assert_eq!(spec.optimizer_kind().unwrap(), OptimizerKind::DifferentialEvolution);
		let params = spec.optimizer_params().unwrap();
		assert_eq!(params.mutation, MutationStrategy::Best2);
		assert_eq!(params.crossover, CrossoverStrategy::Binomial);
	}

	#[test]
	fn test_resolve_bounds() {
		let rastrigin = problem_by_id(4).unwrap();
		let mut spec = ExperimentSpec { problem: 4, ..Default::default() };
		assert_eq!(spec.resolve_bounds(&rastrigin), (-30.0, 30.0));
		spec.bounds = Some((-1.0, 1.0));
		assert_eq!(spec.resolve_bounds(&rastrigin), (-1.0, 1.0));
		spec.bounds = Some((1.0, 1.0));
		assert_eq!(spec.resolve_bounds(&rastrigin), (-30.0, 30.0));
		spec.bounds = Some((2.0, -2.0));
		assert_eq!(spec.resolve_bounds(&rastrigin), (-30.0, 30.0));
	}

	#[test]
	fn test_missing_and_unknown_optimizer() {
		let spec = ExperimentSpec::default();
		assert_eq!(spec.optimizer_kind().unwrap_err(), OptimError::MissingOptimizer);
		let spec = ExperimentSpec { optimizer: Some("tabu".into()), ..Default::default() };
		assert_eq!(spec.optimizer_kind().unwrap_err(), OptimError::UnknownOptimizer("tabu".into()));
		let spec = ExperimentSpec { crossover: "uniform".into(), ..Default::default() };
		assert!(spec.optimizer_params().unwrap_err().is_config_error());
	}
}
