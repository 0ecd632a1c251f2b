//! CSV and JSON result files of a benchmark run
//!
//! Only successful experiments appear in the result files; failures are
//! listed separately in `failures.csv`, even when nothing succeeded.

use csv::WriterBuilder;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use stochbench_optim::{BatchReport, RunResult};
use thiserror::Error;

use crate::config::BenchmarkConfig;

pub const BEST_FITNESSES_FILE: &str = "best_fitnesses.csv";
pub const TIMES_FILE: &str = "times.csv";
pub const SOLUTIONS_FILE: &str = "solutions.csv";
pub const FAILURES_FILE: &str = "failures.csv";
pub const BENCHMARK_FILE: &str = "benchmark.json";

/// Errors raised while writing result files
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn flexible_writer(path: &Path) -> Result<csv::Writer<fs::File>, ExportError> {
    Ok(WriterBuilder::new().flexible(true).has_headers(false).from_path(path)?)
}

/// One row per experiment: name followed by its best-fitness trajectory
pub fn write_best_fitnesses(path: &Path, runs: &[(&str, &RunResult)]) -> Result<(), ExportError> {
    let mut wtr = flexible_writer(path)?;
    for (name, run) in runs {
        let mut record = vec![name.to_string()];
        record.extend(run.best_fitnesses.iter().map(|f| f.to_string()));
        wtr.write_record(&record)?;
    }
    wtr.flush().map_err(|source| ExportError::Io { path: path.to_path_buf(), source })?;
    Ok(())
}

/// `experiment,execution_time` in seconds
pub fn write_times(path: &Path, runs: &[(&str, &RunResult)]) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["experiment", "execution_time"])?;
    for (name, run) in runs {
        wtr.write_record([name.to_string(), run.elapsed_secs().to_string()])?;
    }
    wtr.flush().map_err(|source| ExportError::Io { path: path.to_path_buf(), source })?;
    Ok(())
}

/// One row per experiment: name followed by the best solution vector
pub fn write_solutions(path: &Path, runs: &[(&str, &RunResult)]) -> Result<(), ExportError> {
    let mut wtr = flexible_writer(path)?;
    for (name, run) in runs {
        let mut record = vec![name.to_string()];
        record.extend(run.best_solution.iter().map(|v| v.to_string()));
        wtr.write_record(&record)?;
    }
    wtr.flush().map_err(|source| ExportError::Io { path: path.to_path_buf(), source })?;
    Ok(())
}

/// `experiment,reason` for every failed experiment
pub fn write_failures(path: &Path, report: &BatchReport) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["experiment", "reason"])?;
    for (name, err) in report.failures() {
        wtr.write_record([name.to_string(), err.to_string()])?;
    }
    wtr.flush().map_err(|source| ExportError::Io { path: path.to_path_buf(), source })?;
    Ok(())
}

/// The expanded configuration as pretty JSON
pub fn write_benchmark_json(path: &Path, config: &BenchmarkConfig) -> Result<(), ExportError> {
    let text = serde_json::to_string_pretty(config)?;
    fs::write(path, text).map_err(|source| ExportError::Io { path: path.to_path_buf(), source })
}

/// Write every result file of `report` into `dir`; returns the files written.
///
/// `failures.csv` is written whenever an experiment failed. A batch without
/// any successful run only produces that file.
pub fn write_results(dir: &Path, report: &BatchReport) -> Result<Vec<PathBuf>, ExportError> {
    let mut written = Vec::new();
    if report.failures().next().is_some() {
        let failures = dir.join(FAILURES_FILE);
        write_failures(&failures, report)?;
        written.push(failures);
    }

    let runs: Vec<(&str, &RunResult)> = report.successes().collect();
    if runs.is_empty() {
        warn!("no successful experiment, only failures are exported");
        return Ok(written);
    }

    let best = dir.join(BEST_FITNESSES_FILE);
    write_best_fitnesses(&best, &runs)?;
    written.push(best);

    let times = dir.join(TIMES_FILE);
    write_times(&times, &runs)?;
    written.push(times);

    let solutions = dir.join(SOLUTIONS_FILE);
    write_solutions(&solutions, &runs)?;
    written.push(solutions);

    info!("wrote {} result file(s) to {}", written.len(), dir.display());
    Ok(written)
}
