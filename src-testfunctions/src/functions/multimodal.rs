//! Multimodal test functions
//!
//! These functions have multiple local minima and are used to test the global
//! search capabilities and exploration of optimization algorithms.

use ndarray::Array1;
use std::f64::consts::{E, PI};

/// Schwefel function - deceptive, global minimum far from the next best local minima
/// Global minimum: f(x) ~ 0 at x = (420.9687, ..., 420.9687)
/// Bounds: x_i in [-512, 512]
pub fn schwefel(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    418.9829 * n - x.iter().map(|&xi| xi * xi.abs().sqrt().sin()).sum::<f64>()
}

/// Rastrigin function - highly multimodal with a regular grid of local minima
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-30, 30]
pub fn rastrigin(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    10.0 * n
        + x.iter()
            .map(|&xi| xi * xi - 10.0 * (2.0 * PI * xi).cos())
            .sum::<f64>()
}

/// Griewangk function - many widespread, regularly distributed local minima
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-500, 500]
pub fn griewangk(x: &Array1<f64>) -> f64 {
    let sum_squares: f64 = x.iter().map(|&xi| xi * xi / 4000.0).sum();
    let product_cos: f64 = x
        .iter()
        .enumerate()
        .map(|(i, &xi)| (xi / ((i + 1) as f64).sqrt()).cos())
        .product();
    1.0 + sum_squares - product_cos
}

/// Sine envelope sine wave function - concentric ridges
/// Bounds: x_i in [-30, 30]
pub fn sine_envelope_sine_wave(x: &Array1<f64>) -> f64 {
    -x.windows(2)
        .into_iter()
        .map(|w| {
            let r = w[0] * w[0] + w[1] * w[1];
            0.5 + (r - 0.5).sin().powi(2) / (1.0 + 0.001 * r).powi(2)
        })
        .sum::<f64>()
}

/// Stretched V sine wave function
/// Global minimum: f(x) = 1 at x = (0, 0) for two dimensions
/// Bounds: x_i in [-30, 30]
pub fn stretched_v_sine_wave(x: &Array1<f64>) -> f64 {
    x.windows(2)
        .into_iter()
        .map(|w| {
            let r = w[0] * w[0] + w[1] * w[1];
            r.powf(0.25) * (50.0 * r.powf(0.1)).sin().powi(2) + 1.0
        })
        .sum()
}

/// Ackley's one function
/// Bounds: x_i in [-32, 32]
pub fn ackley_one(x: &Array1<f64>) -> f64 {
    let scale = (-0.2f64).exp();
    x.windows(2)
        .into_iter()
        .map(|w| {
            scale * (w[0] * w[0] + w[1] * w[1]).sqrt()
                + 3.0 * ((2.0 * w[0]).cos() + (2.0 * w[1]).sin())
        })
        .sum()
}

/// Ackley's two function
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-32, 32]
pub fn ackley_two(x: &Array1<f64>) -> f64 {
    x.windows(2)
        .into_iter()
        .map(|w| {
            let r = w[0] * w[0] + w[1] * w[1];
            20.0 + E
                - 20.0 / (0.2 * (r / 2.0).sqrt()).exp()
                - (0.5 * ((2.0 * PI * w[0]).cos() + (2.0 * PI * w[1]).cos())).exp()
        })
        .sum()
}

/// Egg holder function - rugged, many deep local minima
/// Bounds: x_i in [-500, 500]
pub fn egg_holder(x: &Array1<f64>) -> f64 {
    x.windows(2)
        .into_iter()
        .map(|w| {
            -w[0] * (w[0] - w[1] - 47.0).abs().sqrt().sin()
                - (w[1] + 47.0) * (w[1] + 47.0 + w[0] / 2.0).abs().sqrt().sin()
        })
        .sum()
}
