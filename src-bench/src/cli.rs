//! Command-line interface of the benchmark runner

use clap::Parser;
use std::path::PathBuf;

/// Run optimizer benchmarks described by a TOML or JSON file.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Benchmark configuration (.toml or .json)
    #[arg(required_unless_present = "list_problems")]
    pub config: Option<PathBuf>,

    /// Benchmark name, overrides the one in the configuration.
    /// Defaults to Benchmark_<timestamp>.
    #[arg(short, long)]
    pub name: Option<String>,

    /// Output directory. Defaults to results/<benchmark name> under
    /// STOCHBENCH_DIR (or the current directory).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write convergence and timing plots (HTML)
    #[arg(long, default_value_t = false)]
    pub plot: bool,

    /// Print the registered test functions and exit
    #[arg(long, default_value_t = false)]
    pub list_problems: bool,

    /// Debug-level logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults() {
        let args = Args::parse_from(["stochbench", "bench.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("bench.toml")));
        assert!(args.name.is_none());
        assert!(args.output.is_none());
        assert!(!args.plot && !args.list_problems && !args.verbose);
    }

    #[test]
    fn parse_flags() {
        let args = Args::parse_from([
            "stochbench",
            "bench.json",
            "--name",
            "run1",
            "-o",
            "/tmp/out",
            "--plot",
            "-v",
        ]);
        assert_eq!(args.name.as_deref(), Some("run1"));
        assert_eq!(args.output, Some(PathBuf::from("/tmp/out")));
        assert!(args.plot && args.verbose);
    }

    #[test]
    fn config_required_unless_listing() {
        assert!(Args::try_parse_from(["stochbench"]).is_err());
        let args = Args::try_parse_from(["stochbench", "--list-problems"]).unwrap();
        assert!(args.list_problems);
        assert!(args.config.is_none());
    }
}
