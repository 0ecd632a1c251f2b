use ndarray::Array1;
use stochbench_optim::{
	DifferentialEvolution, ExperimentSpec, Optimizer, Orchestrator, Population, SolutionBuilder,
};
use stochbench_testfunctions::problem_by_id;

#[test]
fn builders_with_same_seed_agree() {
	for seed in [0u64, 1, 108_664, u64::MAX] {
		let mut a = SolutionBuilder::new(5, -3.0, 7.0, seed).unwrap();
		let mut b = SolutionBuilder::new(5, -3.0, 7.0, seed).unwrap();
		for _ in 0..20 {
			assert_eq!(a.random_vector(), b.random_vector(), "seed {seed}");
		}
	}
}

#[test]
fn reseeding_ignores_history() {
	let mut a = SolutionBuilder::new(3, 0.0, 1.0, 5).unwrap();
	for _ in 0..13 {
		a.random_vector();
	}
	a.reseed(77);
	let mut b = SolutionBuilder::new(3, 0.0, 1.0, 77).unwrap();
	assert_eq!(a.random_vector(), b.random_vector());
}

#[test]
fn de_single_generation_is_reproducible() {
	let sum_of_squares = problem_by_id(2).unwrap();
	let run = || {
		let mut builder = SolutionBuilder::new(2, -5.0, 5.0, 31_337).unwrap();
		let mut de = DifferentialEvolution::new(4, 1).scale_factor(0.5).crossover_rate(0.9);
		de.optimize(&sum_of_squares, &mut builder).unwrap()
	};
	let first = run();
	let second = run();
	assert_eq!(first.best_fitnesses.len(), 1);
	assert_eq!(first.best_solution, second.best_solution);
	assert_eq!(first.solutions, second.solutions);
	let bits = |v: &[f64]| v.iter().map(|f| f.to_bits()).collect::<Vec<_>>();
	assert_eq!(bits(&first.best_fitnesses), bits(&second.best_fitnesses));
	assert!(first.best_solution.iter().all(|v| (-5.0..=5.0).contains(v)));
}

#[test]
fn orchestrated_runs_are_reproducible() {
	let specs: Vec<ExperimentSpec> = ["blind", "local", "repeated local", "differential evolution"]
		.iter()
		.map(|kind| ExperimentSpec {
			name: kind.to_string(),
			problem: 5,
			dimension: 4,
			population_size: 10,
			optimizer: Some(kind.to_string()),
			max_iterations: 15,
			num_neighbors: 6,
			neighbor_delta: 5.0,
			seed: 9,
			..Default::default()
		})
		.collect();
	let orch = Orchestrator::new();
	let a = orch.run(&specs);
	let b = orch.run(&specs);
	assert_eq!(a.successes().count(), 4);
	for ((_, ra), (_, rb)) in a.successes().zip(b.successes()) {
		assert_eq!(ra.best_fitnesses, rb.best_fitnesses);
		assert_eq!(ra.best_solution, rb.best_solution);
	}
}

#[test]
fn population_initialize_depends_only_on_arguments() {
	let mut a = Population::new(6, 3).unwrap();
	let mut b = Population::new(6, 3).unwrap();
	b.replace(0, &Array1::from_vec(vec![9.0, 9.0, 9.0])).unwrap();
	a.initialize(-1.0, 1.0, 4).unwrap();
	b.initialize(-1.0, 1.0, 4).unwrap();
	assert_eq!(a, b);
}
