use std::collections::HashSet;

use ndarray::Array1;
use stochbench_optim::{
	ExperimentSpec, LocalSearch, OptimError, Optimizer, Orchestrator, RandomSearch, SolutionBuilder,
};
use stochbench_testfunctions::problem_by_id;

#[test]
fn random_search_sum_of_squares_1d() {
	let mut builder = SolutionBuilder::new(1, -1.0, 1.0, 2).unwrap();
	let problem = problem_by_id(2).unwrap();
	let res = RandomSearch::new(100).optimize(&problem, &mut builder).unwrap();
	assert_eq!(res.best_fitnesses.len(), 100);
	assert!(res.best_fitness().unwrap() >= 0.0);
	assert!(res.best_fitnesses.windows(2).all(|w| w[1] <= w[0]));
	assert_eq!(res.best_solution.len(), 1);
}

#[test]
fn neighbors_respect_bounds() {
	let mut builder = SolutionBuilder::new(4, -2.0, 2.0, 17).unwrap();
	let center = Array1::from_vec(vec![-2.0, 2.0, 0.0, 1.9]);
	for step in [0.0, 0.1, 1.0, 10.0, 1e6] {
		for n in builder.neighbors(&center, 25, step).unwrap() {
			assert!(n.iter().all(|v| (-2.0..=2.0).contains(v)), "step {step}: {n}");
		}
	}
	assert_eq!(center, Array1::from_vec(vec![-2.0, 2.0, 0.0, 1.9]));
}

#[test]
fn distinct_subset_excludes_target() {
	let mut builder = SolutionBuilder::new(1, 0.0, 1.0, 3).unwrap();
	for n in 4..12 {
		for exclude in 0..n {
			for _ in 0..20 {
				let s = builder.distinct_subset(n, 3, exclude).unwrap();
				let set: HashSet<usize> = s.iter().copied().collect();
				assert_eq!(set.len(), 3);
				assert!(!set.contains(&exclude));
				assert!(s.iter().all(|&i| i < n));
			}
		}
	}
	assert!(matches!(builder.distinct_subset(3, 3, 0), Err(OptimError::SubsetTooLarge { .. })));
}

#[test]
fn local_search_final_round_is_not_better() {
	let problem = problem_by_id(4).unwrap();
	let mut builder = SolutionBuilder::new(3, -30.0, 30.0, 123).unwrap();
	let mut ls = LocalSearch::repeated(3, 15, 0.3);
	let res = ls.optimize(&problem, &mut builder).unwrap();
	let best = res.best_fitness().unwrap();
	assert!(!ls.final_neighbors().is_empty());
	for (_, f) in ls.final_neighbors() {
		assert!(best <= *f);
	}
}

#[test]
fn unknown_problem_does_not_spoil_batch() {
	let ok = ExperimentSpec {
		name: "ok".into(),
		problem: 2,
		dimension: 2,
		population_size: 6,
		optimizer: Some("differential evolution".into()),
		max_iterations: 25,
		..Default::default()
	};
	let bad = ExperimentSpec { name: "bad".into(), problem: 9999, ..ok.clone() };
	let report = Orchestrator::new().run(&[ok.clone(), bad, ok]);

	assert_eq!(report.len(), 3);
	let err = report.outcomes()[1].result.as_ref().unwrap_err();
	assert_eq!(err, &OptimError::UnknownProblem(9999));
	assert!(err.is_config_error());
	let good: Vec<_> = report.successes().collect();
	assert_eq!(good.len(), 2);
	assert_eq!(good[0].1.best_fitnesses, good[1].1.best_fitnesses);
	assert!(good[0].1.best_fitnesses.windows(2).all(|w| w[1] <= w[0]));
}
