//! Optimization test functions library
//!
//! This library provides the classic collection of continuous benchmark
//! functions used to compare stochastic optimizers. Every function is exposed
//! three ways:
//!
//! - as a plain function `fn(&Array1<f64>) -> f64` (see [`functions`])
//! - as a [`Problem`]: an immutable record of id, name, box bounds and the
//!   evaluation rule, looked up by integer id with [`problem_by_id`]
//! - through [`get_function_metadata`] for descriptions and known minima
//!
//! # Example
//!
//! ```rust
//! use ndarray::Array1;
//! use stochbench_testfunctions::*;
//!
//! let x = Array1::from_vec(vec![0.0, 0.0]);
//! assert_eq!(dejong_one(&x), 0.0);
//!
//! let problem = problem_by_id(2).unwrap();
//! assert_eq!(problem.name, "DeJong_1");
//! assert_eq!(problem.evaluate(&x), 0.0);
//! ```

use ndarray::Array1;
use std::collections::HashMap;
use std::fmt;

// Import all function modules
pub mod functions;
pub use functions::*;

/// Test function type definition
pub type TestFunction = fn(&Array1<f64>) -> f64;

/// A benchmark problem: box bounds applied uniformly to every dimension and
/// the function to minimize.
#[derive(Clone, Copy)]
pub struct Problem {
    /// Registry identifier
    pub id: u32,
    /// Function name
    pub name: &'static str,
    /// Lower bound of every coordinate
    pub lower: f64,
    /// Upper bound of every coordinate
    pub upper: f64,
    /// Evaluation rule
    pub func: TestFunction,
}

impl Problem {
    /// Evaluate a single candidate vector
    pub fn evaluate(&self, x: &Array1<f64>) -> f64 {
        (self.func)(x)
    }

    /// Bounds as a `(lower, upper)` pair
    pub fn bounds(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }
}

impl fmt::Debug for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Problem")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("lower", &self.lower)
            .field("upper", &self.upper)
            .finish()
    }
}

/// Problems in registry order; the id of the problem at index `i` is `i + 1`.
const PROBLEMS: [Problem; 10] = [
    Problem { id: 1, name: "Schwefel", lower: -512.0, upper: 512.0, func: schwefel },
    Problem { id: 2, name: "DeJong_1", lower: -100.0, upper: 100.0, func: dejong_one },
    Problem { id: 3, name: "Rosenbrock", lower: -100.0, upper: 100.0, func: rosenbrock },
    Problem { id: 4, name: "Rastrigin", lower: -30.0, upper: 30.0, func: rastrigin },
    Problem { id: 5, name: "Griewangk", lower: -500.0, upper: 500.0, func: griewangk },
    Problem {
        id: 6,
        name: "SineEnvelopeSineWave",
        lower: -30.0,
        upper: 30.0,
        func: sine_envelope_sine_wave,
    },
    Problem {
        id: 7,
        name: "StretchedVSineWave",
        lower: -30.0,
        upper: 30.0,
        func: stretched_v_sine_wave,
    },
    Problem { id: 8, name: "AckleyOne", lower: -32.0, upper: 32.0, func: ackley_one },
    Problem { id: 9, name: "AckleyTwo", lower: -32.0, upper: 32.0, func: ackley_two },
    Problem { id: 10, name: "EggHolder", lower: -500.0, upper: 500.0, func: egg_holder },
];

/// Look up a problem by its registry identifier.
/// Returns None for identifiers outside the registry; no default is substituted.
pub fn problem_by_id(id: u32) -> Option<Problem> {
    let index = (id as usize).checked_sub(1)?;
    PROBLEMS.get(index).copied()
}

/// All registered identifiers in ascending order
pub fn problem_ids() -> Vec<u32> {
    PROBLEMS.iter().map(|p| p.id).collect()
}

/// All registered problems in id order
pub fn all_problems() -> &'static [Problem] {
    &PROBLEMS
}

/// Metadata for a test function including bounds and known minima
#[derive(Debug, Clone)]
pub struct FunctionMetadata {
    /// Function name
    pub name: String,
    /// Bounds for each dimension (min, max)
    pub bounds: Vec<(f64, f64)>,
    /// Global minima locations and values (2D); empty when not known in closed form
    pub global_minima: Vec<(Vec<f64>, f64)>,
    /// Description of the function
    pub description: String,
    /// Whether the function is multimodal
    pub multimodal: bool,
}

/// Get metadata for all registered test functions, keyed by problem name
pub fn get_function_metadata() -> HashMap<String, FunctionMetadata> {
    let entries: [(u32, Vec<(Vec<f64>, f64)>, &str, bool); 10] = [
        (
            1,
            vec![(vec![420.9687, 420.9687], 0.0)],
            "N-dimensional deceptive function, optimum near the domain corner",
            true,
        ),
        (2, vec![(vec![0.0, 0.0], 0.0)], "N-dimensional sum of squares", false),
        (3, vec![(vec![1.0, 1.0], 0.0)], "N-dimensional banana valley", false),
        (4, vec![(vec![0.0, 0.0], 0.0)], "N-dimensional highly multimodal function", true),
        (5, vec![(vec![0.0, 0.0], 0.0)], "N-dimensional multimodal function", true),
        (6, vec![], "Pairwise concentric ridges", true),
        (7, vec![(vec![0.0, 0.0], 1.0)], "Pairwise stretched V shaped ripples", true),
        (8, vec![], "Pairwise Ackley variant with trigonometric drift", true),
        (9, vec![(vec![0.0, 0.0], 0.0)], "Pairwise Ackley variant", true),
        (10, vec![], "Pairwise rugged function with deep local minima", true),
    ];

    let mut metadata = HashMap::new();
    for (id, global_minima, description, multimodal) in entries {
        if let Some(problem) = problem_by_id(id) {
            metadata.insert(
                problem.name.to_string(),
                FunctionMetadata {
                    name: problem.name.to_string(),
                    bounds: vec![problem.bounds(); 2],
                    global_minima,
                    description: description.to_string(),
                    multimodal,
                },
            );
        }
    }
    metadata
}

/// Helper function to get bounds for a specific function from metadata
/// Returns None if function is not found in metadata
pub fn get_function_bounds(function_name: &str) -> Option<Vec<(f64, f64)>> {
    let metadata = get_function_metadata();
    metadata.get(function_name).map(|meta| meta.bounds.clone())
}
