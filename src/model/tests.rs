//! Tests for model module

#[cfg(test)]
mod tests {
    use crate::model::{
        mean_squared_error, train_and_forecast, train_test_split, LinearRegression,
    };
    use crate::types::{Condition, Sample};

    const BASE: i64 = 1_717_596_900; // 2024-06-05 14:15 UTC

    fn samples_on_line(n: usize, slope_per_step: f64, start: f64) -> Vec<Sample> {
        (0..n)
            .map(|i| Sample {
                time_numeric: BASE + (i as i64) * 600,
                soil_moisture: start + slope_per_step * i as f64,
            })
            .collect()
    }

    #[test]
    fn test_fit_recovers_exact_line() {
        // 0.01 units per second, known intercept at BASE
        let samples: Vec<Sample> = (0..10)
            .map(|i| Sample {
                time_numeric: BASE + i * 60,
                soil_moisture: 30.0 + 0.01 * (i * 60) as f64,
            })
            .collect();

        let model = LinearRegression::fit(&samples).unwrap();
        assert!((model.slope - 0.01).abs() < 1e-9);
        assert!((model.predict(BASE) - 30.0).abs() < 1e-6);
        assert!((model.predict(BASE + 600) - 36.0).abs() < 1e-6);
    }

    #[test]
    fn test_fit_empty_is_none() {
        assert!(LinearRegression::fit(&[]).is_none());
    }

    #[test]
    fn test_fit_zero_variance_feature() {
        let samples = vec![
            Sample { time_numeric: BASE, soil_moisture: 10.0 },
            Sample { time_numeric: BASE, soil_moisture: 20.0 },
            Sample { time_numeric: BASE, soil_moisture: 30.0 },
        ];
        let model = LinearRegression::fit(&samples).unwrap();
        assert_eq!(model.slope, 0.0);
        // Flat line at the mean target
        assert!((model.predict(BASE + 600) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_split_is_deterministic() {
        let (train_a, test_a) = train_test_split(25, 0.2, 42);
        let (train_b, test_b) = train_test_split(25, 0.2, 42);
        assert_eq!(train_a, train_b);
        assert_eq!(test_a, test_b);
    }

    #[test]
    fn test_split_sizes_and_coverage() {
        let (train, test) = train_test_split(10, 0.2, 42);
        assert_eq!(test.len(), 2);
        assert_eq!(train.len(), 8);

        // ceil: 7 rows -> 2 test, 5 train
        let (train, test) = train_test_split(7, 0.2, 42);
        assert_eq!(test.len(), 2);
        assert_eq!(train.len(), 5);

        // Every index appears exactly once across both halves
        let mut all: Vec<usize> = train.iter().chain(test.iter()).copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..7).collect::<Vec<_>>());
    }

    #[test]
    fn test_mse_zero_on_perfect_fit() {
        let samples = samples_on_line(8, 1.0, 30.0);
        let model = LinearRegression::fit(&samples).unwrap();
        assert!(mean_squared_error(&model, &samples) < 1e-9);
    }

    #[test]
    fn test_mse_known_residuals() {
        let model = LinearRegression { slope: 0.0, intercept: 10.0 };
        let samples = vec![
            Sample { time_numeric: BASE, soil_moisture: 12.0 },
            Sample { time_numeric: BASE + 600, soil_moisture: 8.0 },
        ];
        // Residuals +-2 -> MSE 4
        assert!((mean_squared_error(&model, &samples) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_train_and_forecast_too_few_samples() {
        assert!(train_and_forecast(&[], 0.2, 42, 600).is_none());
        let one = samples_on_line(1, 0.0, 30.0);
        assert!(train_and_forecast(&one, 0.2, 42, 600).is_none());
    }

    #[test]
    fn test_forecast_horizon_anchored_on_latest_row() {
        let samples = samples_on_line(10, 0.5, 30.0);
        let report = train_and_forecast(&samples, 0.2, 42, 600).unwrap();
        assert_eq!(report.target_time, samples.last().unwrap().time_numeric + 600);
    }

    #[test]
    fn test_train_and_forecast_deterministic() {
        let samples = samples_on_line(20, 0.3, 25.0);
        let a = train_and_forecast(&samples, 0.2, 42, 600).unwrap();
        let b = train_and_forecast(&samples, 0.2, 42, 600).unwrap();
        assert_eq!(a.mse, b.mse);
        assert_eq!(a.predicted, b.predicted);
        assert_eq!(a.target_time, b.target_time);
    }

    #[test]
    fn test_forecast_on_rising_trend() {
        // Perfectly linear rising series: the forecast extends the line
        // and MSE on the held-out rows is ~0.
        let samples = samples_on_line(20, 1.0, 20.0);
        let report = train_and_forecast(&samples, 0.2, 42, 600).unwrap();
        assert!(report.mse < 1e-6);
        // Last value is 39.0, one step of 600 s adds 1.0
        assert!((report.predicted - 40.0).abs() < 1e-6);
        assert_eq!(report.condition, Condition::SlightlyWet);
        assert_eq!(report.train_rows + report.test_rows, 20);
    }

    #[test]
    fn test_forecast_condition_buckets() {
        // Flat dry series
        let dry = samples_on_line(10, 0.0, 5.0);
        let report = train_and_forecast(&dry, 0.2, 42, 600).unwrap();
        assert_eq!(report.condition, Condition::Dry);

        // Flat wet series
        let wet = samples_on_line(10, 0.0, 80.0);
        let report = train_and_forecast(&wet, 0.2, 42, 600).unwrap();
        assert_eq!(report.condition, Condition::Wet);
    }
}
