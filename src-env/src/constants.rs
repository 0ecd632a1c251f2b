//! Directory and file names shared by the stochbench binaries

/// Environment variable pointing at the project root
pub const STOCHBENCH_DIR_VAR: &str = "STOCHBENCH_DIR";

/// Name of the directory holding one subdirectory per benchmark
pub const RESULTS_DIR: &str = "results";

/// Name of the plots subdirectory inside a benchmark directory
pub const PLOTS_DIR: &str = "plots";
