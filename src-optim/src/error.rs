//! Error types for the optimization engine.
//!
//! Errors fall into two families. Configuration errors are detected while an
//! experiment is being set up and only invalidate that experiment. Invariant
//! violations abort the single run in which they occur.

use thiserror::Error;

/// Errors raised while configuring or running an optimizer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimError {
	/// No objective function is registered under this identifier.
	#[error("unknown problem identifier: {0}")]
	UnknownProblem(u32),

	/// The optimizer kind string does not name a supported optimizer.
	#[error("unknown optimizer kind: {0:?}")]
	UnknownOptimizer(String),

	/// A mutation or crossover selector does not name a supported strategy.
	#[error("unknown {kind} strategy: {name:?}")]
	UnknownStrategy {
		/// "mutation" or "crossover"
		kind: &'static str,
		/// The selector as given
		name: String,
	},

	/// The experiment did not name an optimizer at all.
	#[error("no optimizer kind given")]
	MissingOptimizer,

	/// Population size and dimension must both be at least 1.
	#[error("invalid population: size {size}, dimension {dimension} (both must be >= 1)")]
	InvalidPopulation {
		/// Requested number of members
		size: usize,
		/// Requested vector dimension
		dimension: usize,
	},

	/// Candidate vectors need at least one component.
	#[error("invalid dimension: {0} (must be >= 1)")]
	InvalidDimension(usize),

	/// Lower bound exceeds upper bound or a bound is not finite.
	#[error("invalid bounds: lower ({lower}) must be <= upper ({upper}) and both finite")]
	InvalidBounds {
		/// The lower bound
		lower: f64,
		/// The upper bound
		upper: f64,
	},

	/// An optimizer parameter is outside its valid range.
	#[error("invalid parameter {name}: {value} ({reason})")]
	InvalidParameter {
		/// Parameter name
		name: &'static str,
		/// Offending value
		value: f64,
		/// Valid range description
		reason: &'static str,
	},

	/// The DE population cannot supply the distinct members a strategy needs.
	#[error("population size ({pop_size}) must be >= {required} for this mutation strategy")]
	PopulationTooSmall {
		/// The configured population size
		pop_size: usize,
		/// Minimum size for the strategy
		required: usize,
	},

	/// More distinct indices were requested than exist besides the excluded one.
	#[error(
		"cannot draw {requested} distinct indices from a population of {pop_size} excluding index {exclude}"
	)]
	SubsetTooLarge {
		/// Requested subset size
		requested: usize,
		/// Population size
		pop_size: usize,
		/// Excluded index
		exclude: usize,
	},

	/// A vector does not have the configured dimension.
	#[error("dimension mismatch: expected {expected}, got {got}")]
	DimensionMismatch {
		/// Configured dimension
		expected: usize,
		/// Actual vector length
		got: usize,
	},

	/// `optimize` was called on an optimizer that already ran.
	#[error("optimizer already completed its run; construct a new one per run")]
	AlreadyCompleted,
}

/// A specialized `Result` type for optimizer operations.
pub type Result<T> = std::result::Result<T, OptimError>;

impl OptimError {
	/// Returns `true` for errors detected while setting up an experiment.
	pub fn is_config_error(&self) -> bool {
		matches!(
			self,
			OptimError::UnknownProblem(_)
				| OptimError::UnknownOptimizer(_)
				| OptimError::UnknownStrategy { .. }
				| OptimError::MissingOptimizer
				| OptimError::InvalidPopulation { .. }
				| OptimError::InvalidDimension(_)
				| OptimError::InvalidBounds { .. }
				| OptimError::InvalidParameter { .. }
				| OptimError::PopulationTooSmall { .. }
		)
	}

	/// Returns `true` for invariant violations raised during a run.
	pub fn is_invariant_error(&self) -> bool {
		matches!(
			self,
			OptimError::SubsetTooLarge { .. }
				| OptimError::DimensionMismatch { .. }
				| OptimError::AlreadyCompleted
		)
	}
}
