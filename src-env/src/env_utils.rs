//! Environment variable utilities for stochbench
//!
//! This module resolves the project root (the `STOCHBENCH_DIR` variable, or
//! the current directory) and creates the results directory layout.

use crate::constants::{PLOTS_DIR, RESULTS_DIR, STOCHBENCH_DIR_VAR};
use std::env;
use std::path::{Path, PathBuf};

/// Error type for environment and directory issues
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error("STOCHBENCH_DIR points to a non-existent directory: {0}")]
    RootDirNotFound(PathBuf),

    #[error("cannot determine the current directory: {0}")]
    CurrentDirUnavailable(std::io::Error),

    #[error("invalid benchmark name {0:?}: must be non-empty and must not contain path separators")]
    InvalidBenchmarkName(String),

    #[error("failed to create directory {path}: {source}")]
    DirCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Get the project root directory
///
/// Uses `STOCHBENCH_DIR` when set (it must exist), otherwise the current
/// working directory.
///
/// # Example
///
/// ```no_run
/// use stochbench_env::env_utils::get_root_dir;
///
/// let root = get_root_dir()?;
/// println!("stochbench root: {}", root.display());
/// # Ok::<(), stochbench_env::env_utils::EnvError>(())
/// ```
pub fn get_root_dir() -> Result<PathBuf, EnvError> {
    match env::var(STOCHBENCH_DIR_VAR) {
        Ok(dir) if !dir.is_empty() => {
            let path = PathBuf::from(dir);
            if !path.is_dir() {
                return Err(EnvError::RootDirNotFound(path));
            }
            Ok(path)
        }
        _ => env::current_dir().map_err(EnvError::CurrentDirUnavailable),
    }
}

/// Create `path` and its parents if needed
pub fn ensure_dir(path: &Path) -> Result<(), EnvError> {
    if !path.exists() {
        log::debug!("creating directory {}", path.display());
        std::fs::create_dir_all(path).map_err(|source| EnvError::DirCreationFailed {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Get the path to the results directory under `root`, creating it if necessary
pub fn results_dir_in(root: &Path) -> Result<PathBuf, EnvError> {
    let results = root.join(RESULTS_DIR);
    ensure_dir(&results)?;
    Ok(results)
}

/// Get the directory of one benchmark under `root`, creating it if necessary
///
/// The name becomes a single path component, so separators and `..` are rejected.
pub fn benchmark_dir_in(root: &Path, benchmark_name: &str) -> Result<PathBuf, EnvError> {
    if benchmark_name.is_empty()
        || benchmark_name == "."
        || benchmark_name == ".."
        || benchmark_name.contains(['/', '\\'])
    {
        return Err(EnvError::InvalidBenchmarkName(benchmark_name.to_string()));
    }
    let dir = results_dir_in(root)?.join(benchmark_name);
    ensure_dir(&dir)?;
    Ok(dir)
}

/// Get the directory of one benchmark under the project root
///
/// # Example
///
/// ```no_run
/// use stochbench_env::env_utils::get_benchmark_dir;
///
/// let dir = get_benchmark_dir("Benchmark_20250101_120000")?;
/// println!("writing results to {}", dir.display());
/// # Ok::<(), stochbench_env::env_utils::EnvError>(())
/// ```
pub fn get_benchmark_dir(benchmark_name: &str) -> Result<PathBuf, EnvError> {
    benchmark_dir_in(&get_root_dir()?, benchmark_name)
}

/// Get the plots subdirectory of a benchmark directory, creating it if necessary
pub fn plots_dir_in(benchmark_dir: &Path) -> Result<PathBuf, EnvError> {
    let plots = benchmark_dir.join(PLOTS_DIR);
    ensure_dir(&plots)?;
    Ok(plots)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_benchmark_dir_is_created() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let dir = benchmark_dir_in(tmp.path(), "bench_a").expect("create benchmark dir");
        assert!(dir.is_dir());
        assert_eq!(dir, tmp.path().join(RESULTS_DIR).join("bench_a"));

        // a second call is a no-op
        let again = benchmark_dir_in(tmp.path(), "bench_a").expect("existing dir");
        assert_eq!(dir, again);
    }

    #[test]
    fn test_invalid_benchmark_names() {
        let tmp = tempfile::tempdir().expect("tempdir");
        for name in ["", ".", "..", "a/b", "a\\b"] {
            let result = benchmark_dir_in(tmp.path(), name);
            assert!(
                matches!(result, Err(EnvError::InvalidBenchmarkName(_))),
                "{:?} should be rejected",
                name
            );
        }
    }

    #[test]
    fn test_plots_dir() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let plots = plots_dir_in(tmp.path()).expect("plots dir");
        assert!(plots.ends_with(PLOTS_DIR));
        assert!(plots.is_dir());
    }
}
