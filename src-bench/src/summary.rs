//! Per-experiment statistics across seeds

use serde::Serialize;
use std::path::Path;
use stochbench_optim::RunResult;

use crate::export::ExportError;

pub const SUMMARY_FILE: &str = "summary.csv";

/// Aggregate over every seed of one experiment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    pub experiment: String,
    pub runs: usize,
    pub mean_best: f64,
    pub std_best: f64,
    pub mean_final: f64,
    pub std_final: f64,
    pub mean_time: f64,
}

/// Sample mean and standard deviation; `None` for empty input
pub fn mean_std(data: &[f64]) -> Option<(f64, f64)> {
    let n = data.len();
    if n == 0 {
        return None;
    }
    let mean = data.iter().sum::<f64>() / (n as f64);
    if n == 1 {
        return Some((mean, 0.0));
    }
    let var_num: f64 = data
        .iter()
        .map(|&x| {
            let dx = x - mean;
            dx * dx
        })
        .sum();
    let std = (var_num / ((n - 1) as f64)).sqrt();
    Some((mean, std))
}

/// Experiment name without a trailing `_seed<digits>`
pub fn base_name(name: &str) -> &str {
    match name.rfind("_seed") {
        Some(pos) => {
            let digits = &name[pos + "_seed".len()..];
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                &name[..pos]
            } else {
                name
            }
        }
        None => name,
    }
}

/// Group runs by base name, keeping first-appearance order
pub fn summarize(runs: &[(&str, &RunResult)]) -> Vec<GroupSummary> {
    let mut groups: Vec<(&str, Vec<&RunResult>)> = Vec::new();
    for &(name, run) in runs {
        let key = base_name(name);
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, members)) => members.push(run),
            None => groups.push((key, vec![run])),
        }
    }

    groups
        .into_iter()
        .filter_map(|(key, members)| {
            let best: Vec<f64> = members
                .iter()
                .filter_map(|r| r.best_fitnesses.iter().copied().reduce(f64::min))
                .collect();
            let last: Vec<f64> = members.iter().filter_map(|r| r.best_fitness()).collect();
            let times: Vec<f64> = members.iter().map(|r| r.elapsed_secs()).collect();
            let (mean_best, std_best) = mean_std(&best)?;
            let (mean_final, std_final) = mean_std(&last)?;
            let (mean_time, _) = mean_std(&times)?;
            Some(GroupSummary {
                experiment: key.to_string(),
                runs: members.len(),
                mean_best,
                std_best,
                mean_final,
                std_final,
                mean_time,
            })
        })
        .collect()
}

/// Write `summary` as CSV with a header row
pub fn write_summary(path: &Path, summary: &[GroupSummary]) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_path(path)?;
    for row in summary {
        wtr.serialize(row)?;
    }
    wtr.flush().map_err(|source| ExportError::Io { path: path.to_path_buf(), source })?;
    Ok(())
}
