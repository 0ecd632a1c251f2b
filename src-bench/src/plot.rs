//! HTML plots of a benchmark run

use plotly::{
    Bar, Layout, Plot, Scatter,
    common::{Mode, Title},
    layout::{Axis, AxisType},
};
use std::path::{Path, PathBuf};
use stochbench_optim::RunResult;

pub const CONVERGENCE_FILE: &str = "convergence.html";
pub const TIMES_PLOT_FILE: &str = "times.html";

/// One best-so-far line per experiment on a log y-axis
pub fn convergence_plot(runs: &[(&str, &RunResult)], title: &str) -> Plot {
    let mut plot = Plot::new();
    for &(name, run) in runs {
        let iterations: Vec<usize> = (0..run.best_fitnesses.len()).collect();
        let trace = Scatter::new(iterations, run.best_fitnesses.clone())
            .mode(Mode::Lines)
            .name(name);
        plot.add_trace(trace);
    }
    let layout = Layout::new()
        .title(Title::with_text(format!("Convergence: {title}")))
        .x_axis(Axis::new().title(Title::with_text("Iteration")).type_(AxisType::Linear))
        .y_axis(Axis::new().title(Title::with_text("Best fitness")).type_(AxisType::Log));
    plot.set_layout(layout);
    plot
}

/// Bar chart of execution time per experiment
pub fn times_plot(runs: &[(&str, &RunResult)], title: &str) -> Plot {
    let names: Vec<String> = runs.iter().map(|(name, _)| name.to_string()).collect();
    let secs: Vec<f64> = runs.iter().map(|(_, run)| run.elapsed_secs()).collect();
    let mut plot = Plot::new();
    plot.add_trace(Bar::new(names, secs).name("execution time"));
    let layout = Layout::new()
        .title(Title::with_text(format!("Execution time: {title}")))
        .y_axis(Axis::new().title(Title::with_text("Seconds")));
    plot.set_layout(layout);
    plot
}

/// Write both plots into `dir`; returns the files written
pub fn write_plots(dir: &Path, runs: &[(&str, &RunResult)], title: &str) -> Vec<PathBuf> {
    let convergence = dir.join(CONVERGENCE_FILE);
    convergence_plot(runs, title).write_html(&convergence);
    let times = dir.join(TIMES_PLOT_FILE);
    times_plot(runs, title).write_html(&times);
    log::info!("plots written to {}", dir.display());
    vec![convergence, times]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use std::time::Duration;

    #[test]
    fn test_write_plots() {
        let dir = tempfile::tempdir().unwrap();
        let run = RunResult {
            best_solution: array![0.0],
            best_fitnesses: vec![10.0, 1.0, 0.1],
            solutions: Vec::new(),
            duration: Duration::from_millis(20),
        };
        let files = write_plots(dir.path(), &[("de", &run)], "test");
        for f in files {
            let html = std::fs::read_to_string(&f).unwrap();
            assert!(html.contains("plotly"), "{}", f.display());
        }
    }
}
