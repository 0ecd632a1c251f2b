//! stochbench - benchmark stochastic optimizers on classic test functions
//!
//! This crate drives the optimization engine of `stochbench-optim`:
//! - loading benchmark configurations from TOML or JSON
//! - running every experiment in order through the orchestrator
//! - exporting trajectories, timings, solutions and per-seed summaries as CSV
//! - optional convergence and timing plots
//!
//! Copyright (C) 2025 Pierre Aubert pierre(at)spinorama(dot)org
//!
//! This program is free software: you can redistribute it and/or modify
//! it under the terms of the GNU General Public License as published by
//! the Free Software Foundation, either version 3 of the License, or
//! (at your option) any later version.
//!
//! This program is distributed in the hope that it will be useful,
//! but WITHOUT ANY WARRANTY; without even the implied warranty of
//! MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//! GNU General Public License for more details.
//!
//! You should have received a copy of the GNU General Public License
//! along with this program.  If not, see <https://www.gnu.org/licenses/>.

use log::{info, warn};
use std::error::Error;
use std::path::{Path, PathBuf};
use stochbench_env::{ensure_dir, get_benchmark_dir, plots_dir_in};
use stochbench_optim::{BatchReport, Orchestrator, RunResult};

pub mod cli;
pub mod config;
pub mod export;
pub mod plot;
pub mod summary;

pub use cli::Args;
pub use config::{BenchmarkConfig, ConfigError, load_config};
pub use export::ExportError;

/// Everything a finished benchmark produced
#[derive(Debug)]
pub struct BenchmarkRun {
    pub name: String,
    pub output_dir: PathBuf,
    pub report: BatchReport,
    pub files: Vec<PathBuf>,
}

/// Registered test functions, one line each
pub fn problem_listing() -> Vec<String> {
    stochbench_testfunctions::all_problems()
        .iter()
        .map(|p| format!("{:>3}  {:<22} [{}, {}]", p.id, p.name, p.lower, p.upper))
        .collect()
}

/// Run `config` and write every result file into `output_dir`; plots go to
/// its `plots/` subdirectory. A batch in which every experiment failed still
/// completes, with `failures.csv` as its only result file.
pub fn run_benchmark(
    config: &BenchmarkConfig,
    name: &str,
    output_dir: &Path,
    with_plots: bool,
) -> Result<BenchmarkRun, Box<dyn Error>> {
    ensure_dir(output_dir)?;
    info!(
        "benchmark {name}: {} experiment(s) -> {}",
        config.experiments.len(),
        output_dir.display()
    );

    let report = Orchestrator::new().run(&config.experiments);
    for (experiment, err) in report.failures() {
        warn!("{experiment} failed: {err}");
    }

    let mut files = Vec::new();
    let json = output_dir.join(export::BENCHMARK_FILE);
    let named = BenchmarkConfig { benchmark_name: Some(name.to_string()), ..config.clone() };
    export::write_benchmark_json(&json, &named)?;
    files.push(json);

    files.extend(export::write_results(output_dir, &report)?);

    let runs: Vec<(&str, &RunResult)> = report.successes().collect();
    if runs.is_empty() {
        return Ok(BenchmarkRun {
            name: name.to_string(),
            output_dir: output_dir.to_path_buf(),
            report,
            files,
        });
    }

    let summary_path = output_dir.join(summary::SUMMARY_FILE);
    summary::write_summary(&summary_path, &summary::summarize(&runs))?;
    files.push(summary_path);

    if with_plots {
        files.extend(plot::write_plots(&plots_dir_in(output_dir)?, &runs, name));
    }

    Ok(BenchmarkRun { name: name.to_string(), output_dir: output_dir.to_path_buf(), report, files })
}

/// Entry point shared by the binary: load, run, export
pub fn run(args: &Args) -> Result<Option<BenchmarkRun>, Box<dyn Error>> {
    if args.list_problems {
        for line in problem_listing() {
            println!("{line}");
        }
        return Ok(None);
    }
    let Some(config_path) = &args.config else {
        return Err("a configuration file is required".into());
    };

    let config = load_config(config_path)?;
    let name = args.name.clone().unwrap_or_else(|| config.name_or_default());
    let output_dir = match &args.output {
        Some(dir) => dir.clone(),
        None => get_benchmark_dir(&name)?,
    };
    let run = run_benchmark(&config, &name, &output_dir, args.plot)?;
    println!(
        "{}: {} succeeded, {} failed, results in {}",
        run.name,
        run.report.successes().count(),
        run.report.failures().count(),
        run.output_dir.display()
    );
    Ok(Some(run))
}
