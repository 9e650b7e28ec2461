//! Trend model: deterministic split, least-squares fit, forecast
//!
//! One feature (seconds since epoch), one target (soil moisture). The
//! model is refit from scratch on the full accumulated data every cycle;
//! nothing is carried between cycles.

#[cfg(test)]
mod tests;

use crate::types::{Condition, Sample};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Ordinary least-squares line of soil moisture over time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRegression {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearRegression {
    /// Fit on the given samples. Returns `None` for an empty slice.
    ///
    /// The feature is centered on its mean before the sums are taken:
    /// epoch-second values squared overflow f64's 53-bit mantissa
    /// otherwise. A zero-variance feature yields a flat line at the
    /// mean target.
    pub fn fit(samples: &[Sample]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let n = samples.len() as f64;
        let mean_x = samples.iter().map(|s| s.time_numeric as f64).sum::<f64>() / n;
        let mean_y = samples.iter().map(|s| s.soil_moisture).sum::<f64>() / n;

        let mut sxx = 0.0;
        let mut sxy = 0.0;
        for s in samples {
            let dx = s.time_numeric as f64 - mean_x;
            let dy = s.soil_moisture - mean_y;
            sxx += dx * dx;
            sxy += dx * dy;
        }

        let slope = if sxx > 0.0 { sxy / sxx } else { 0.0 };
        let intercept = mean_y - slope * mean_x;

        Some(Self { slope, intercept })
    }

    pub fn predict(&self, time_numeric: i64) -> f64 {
        self.intercept + self.slope * time_numeric as f64
    }
}

/// Deterministic shuffled index split.
///
/// Indices `0..n` are shuffled with a seeded RNG; `ceil(n * test_fraction)`
/// go to the test half, the rest to train. Same `n` and seed, same split.
pub fn train_test_split(n: usize, test_fraction: f64, seed: u64) -> (Vec<usize>, Vec<usize>) {
    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let test_len = ((n as f64) * test_fraction).ceil() as usize;
    let train_len = n.saturating_sub(test_len);
    let test = indices.split_off(train_len);
    (indices, test)
}

/// Mean squared error of the model over the given samples.
pub fn mean_squared_error(model: &LinearRegression, samples: &[Sample]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f64 = samples
        .iter()
        .map(|s| {
            let err = model.predict(s.time_numeric) - s.soil_moisture;
            err * err
        })
        .sum();
    sum / samples.len() as f64
}

/// Result of one training cycle.
#[derive(Debug, Clone, Copy)]
pub struct TrainingReport {
    pub mse: f64,
    /// Forecast target: latest observation's time plus the horizon.
    pub target_time: i64,
    pub predicted: f64,
    pub condition: Condition,
    pub train_rows: usize,
    pub test_rows: usize,
}

/// Split, fit, evaluate and forecast one step ahead.
///
/// Returns `None` when the cleaned data is too small to split into two
/// non-empty halves (fewer than 2 samples, or a degenerate split). The
/// store-size gate upstream is checked before cleaning, so this guard
/// can still trigger after malformed rows are purged.
pub fn train_and_forecast(
    samples: &[Sample],
    test_fraction: f64,
    seed: u64,
    horizon_secs: i64,
) -> Option<TrainingReport> {
    if samples.len() < 2 {
        return None;
    }

    let (train_idx, test_idx) = train_test_split(samples.len(), test_fraction, seed);
    if train_idx.is_empty() || test_idx.is_empty() {
        return None;
    }

    let train: Vec<Sample> = train_idx.iter().map(|&i| samples[i]).collect();
    let test: Vec<Sample> = test_idx.iter().map(|&i| samples[i]).collect();

    let model = LinearRegression::fit(&train)?;
    let mse = mean_squared_error(&model, &test);

    // Horizon is anchored on the latest row in the store, not on "now".
    let latest = samples.last()?.time_numeric;
    let target_time = latest + horizon_secs;
    let predicted = model.predict(target_time);

    Some(TrainingReport {
        mse,
        target_time,
        predicted,
        condition: Condition::from_moisture(predicted),
        train_rows: train.len(),
        test_rows: test.len(),
    })
}
