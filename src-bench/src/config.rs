//! Benchmark configuration files (TOML or JSON)
//!
//! Both formats carry the same keys. TOML files use a `[benchmark]` table and
//! `[[experiment]]` tables; JSON files put `benchmark_name`/`population_size`
//! at the top level next to an `experiments` array:
//!
//! ```toml
//! [benchmark]
//! benchmark_name = "demo"
//! population_size = 20
//!
//! [[experiment]]
//! experiment_name = "de_rastrigin"
//! problem_type = 4
//! dimensions = 10
//! seeds = [1, 2, 3]
//! optimizer = { type = "differential evolution", iterations = 200, mutation = "best1" }
//! ```

use chrono::Local;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use stochbench_optim::ExperimentSpec;
use stochbench_optim::experiment::DEFAULT_SEED;
use thiserror::Error;

/// Default population size when neither the benchmark nor the experiment sets one
pub const DEFAULT_POPULATION_SIZE: usize = 30;

/// Errors raised while loading a benchmark configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported configuration file {0} (expected .toml or .json)")]
    UnsupportedFormat(String),

    #[error("configuration contains no experiments")]
    NoExperiments,

    #[error("invalid value for {field}: {reason}")]
    InvalidField { field: String, reason: String },
}

/// A loaded benchmark: a name and the expanded experiment list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkConfig {
    pub benchmark_name: Option<String>,
    pub population_size: usize,
    pub experiments: Vec<ExperimentSpec>,
}

impl BenchmarkConfig {
    /// The configured name, or `Benchmark_<timestamp>` when absent
    pub fn name_or_default(&self) -> String {
        self.benchmark_name
            .clone()
            .unwrap_or_else(|| Local::now().format("Benchmark_%Y%m%d_%H%M%S").to_string())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct BenchmarkSection {
    benchmark_name: Option<String>,
    population_size: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    benchmark: BenchmarkSection,
    benchmark_name: Option<String>,
    population_size: Option<usize>,
    #[serde(alias = "experiment")]
    experiments: Vec<ExperimentEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct ExperimentEntry {
    #[serde(alias = "name")]
    experiment_name: String,
    #[serde(alias = "problem")]
    problem_type: u32,
    #[serde(alias = "dimension")]
    dimensions: usize,
    lower_bound: Option<f64>,
    upper_bound: Option<f64>,
    seed: u64,
    seeds: Vec<u64>,
    population_size: Option<usize>,
    optimizer: Option<OptimizerEntry>,
}

impl Default for ExperimentEntry {
    fn default() -> Self {
        Self {
            experiment_name: "Unnamed".to_string(),
            problem_type: 1,
            dimensions: 30,
            lower_bound: None,
            upper_bound: None,
            seed: DEFAULT_SEED,
            seeds: Vec::new(),
            population_size: None,
            optimizer: None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct OptimizerEntry {
    #[serde(rename = "type")]
    kind: Option<String>,
    iterations: usize,
    #[serde(alias = "neighbor_delta")]
    delta: f64,
    num_neighbors: usize,
    #[serde(alias = "scale_factor")]
    scale: Option<f64>,
    crossover_rate: Option<f64>,
    mutation: Option<String>,
    crossover: Option<String>,
}

impl Default for OptimizerEntry {
    fn default() -> Self {
        Self {
            kind: None,
            iterations: 1,
            delta: 0.0,
            num_neighbors: 0,
            scale: None,
            crossover_rate: None,
            mutation: None,
            crossover: None,
        }
    }
}

impl ExperimentEntry {
    fn bounds(&self) -> Option<(f64, f64)> {
        match (self.lower_bound, self.upper_bound) {
            (Some(lower), Some(upper)) if upper > lower => Some((lower, upper)),
            (Some(lower), Some(upper)) => {
                warn!(
                    "{}: upper bound {upper} <= lower bound {lower}, using problem defaults",
                    self.experiment_name
                );
                None
            }
            _ => None,
        }
    }

    /// One spec per seed; `seeds` wins over `seed` and suffixes the name
    fn expand(&self, population_size: usize) -> Vec<ExperimentSpec> {
        let mut base = ExperimentSpec {
            name: self.experiment_name.clone(),
            problem: self.problem_type,
            dimension: self.dimensions,
            population_size: self.population_size.unwrap_or(population_size),
            bounds: self.bounds(),
            seed: self.seed,
            ..Default::default()
        };
        if let Some(opt) = &self.optimizer {
            base.optimizer = opt.kind.clone();
            base.max_iterations = opt.iterations;
            base.num_neighbors = opt.num_neighbors;
            base.neighbor_delta = opt.delta;
            if let Some(f) = opt.scale {
                base.scale_factor = f;
            }
            if let Some(cr) = opt.crossover_rate {
                base.crossover_rate = cr;
            }
            if let Some(m) = &opt.mutation {
                base.mutation = m.clone();
            }
            if let Some(c) = &opt.crossover {
                base.crossover = c.clone();
            }
        }

        if self.seeds.is_empty() {
            return vec![base];
        }
        self.seeds
            .iter()
            .map(|&seed| ExperimentSpec {
                name: format!("{}_seed{}", self.experiment_name, seed),
                seed,
                ..base.clone()
            })
            .collect()
    }
}

fn into_config(raw: RawConfig) -> Result<BenchmarkConfig, ConfigError> {
    let population_size = raw
        .benchmark
        .population_size
        .or(raw.population_size)
        .unwrap_or(DEFAULT_POPULATION_SIZE);
    if population_size == 0 {
        return Err(ConfigError::InvalidField {
            field: "population_size".to_string(),
            reason: "must be > 0".to_string(),
        });
    }
    if raw.experiments.is_empty() {
        return Err(ConfigError::NoExperiments);
    }

    let mut experiments = Vec::new();
    for entry in &raw.experiments {
        for spec in entry.expand(population_size) {
            debug!(
                "experiment {}: problem {}, dimension {}, optimizer {:?}, seed {}",
                spec.name, spec.problem, spec.dimension, spec.optimizer, spec.seed
            );
            experiments.push(spec);
        }
    }

    Ok(BenchmarkConfig {
        benchmark_name: raw.benchmark.benchmark_name.or(raw.benchmark_name),
        population_size,
        experiments,
    })
}

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?;
        match ext.to_lowercase().as_str() {
            "json" => Some(ConfigFormat::Json),
            "toml" => Some(ConfigFormat::Toml),
            _ => None,
        }
    }
}

/// Parse a configuration from a string
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<BenchmarkConfig, ConfigError> {
    let raw: RawConfig = match format {
        ConfigFormat::Json => serde_json::from_str(content)?,
        ConfigFormat::Toml => toml::from_str(content)?,
    };
    into_config(raw)
}

pub fn parse_json(content: &str) -> Result<BenchmarkConfig, ConfigError> {
    parse_config(content, ConfigFormat::Json)
}

pub fn parse_toml(content: &str) -> Result<BenchmarkConfig, ConfigError> {
    parse_config(content, ConfigFormat::Toml)
}

/// Load a benchmark configuration
///
/// Format is auto-detected from file extension (.json or .toml)
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<BenchmarkConfig, ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)
        .ok_or_else(|| ConfigError::UnsupportedFormat(path.display().to_string()))?;
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&content, format)?;
    info!(
        "loaded {} experiment(s) from {}",
        config.experiments.len(),
        path.display()
    );
    Ok(config)
}
