use serde::{Deserialize, Serialize};

use crate::Forecast;

/// Mean absolute error of paired predictions; `0.0` for empty input.
pub fn mae(predicted: &[f64], actual: &[f64]) -> f64 {
    assert_eq!(predicted.len(), actual.len());
    let total: f64 = predicted.iter().zip(actual).map(|(p, a)| (p - a).abs()).sum();
    total / predicted.len().max(1) as f64
}

/// Compute Mean Absolute Scaled Error.
///
/// MASE < 1 means the forecast is better than the seasonal naive baseline.
///
/// * `train_values` – the observations the model was fitted on
/// * `season` – seasonal period (1 for non-seasonal)
pub fn mase(forecast: &[f64], actual: &[f64], train_values: &[f64], season: usize) -> f64 {
    assert_eq!(forecast.len(), actual.len());
    let season = season.max(1);

    if train_values.len() <= season {
        return f64::INFINITY;
    }

    let naive_mae = train_values
        .iter()
        .skip(season)
        .zip(train_values.iter())
        .map(|(curr, prev)| (curr - prev).abs())
        .sum::<f64>()
        / (train_values.len() - season) as f64;

    if naive_mae < 1e-15 {
        return f64::INFINITY;
    }

    mae(forecast, actual) / naive_mae
}

/// In-sample accuracy of a forecast against the observations it was fitted on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitSummary {
    /// Number of in-sample slots that carried a prediction.
    pub points: usize,
    pub mae: f64,
    pub mase: f64,
}

impl FitSummary {
    /// Scores the populated in-sample slots of `forecast` against `observations`.
    ///
    /// Returns `None` when no in-sample slot is populated.
    pub fn from_forecast(forecast: &Forecast, observations: &[f64], season: usize) -> Option<Self> {
        let (predicted, actual): (Vec<f64>, Vec<f64>) = forecast
            .in_sample()
            .iter()
            .zip(observations)
            .filter_map(|(&f, &a)| f.map(|f| (f, a)))
            .unzip();

        if predicted.is_empty() {
            return None;
        }

        Some(Self {
            points: predicted.len(),
            mae: mae(&predicted, &actual),
            mase: mase(&predicted, &actual, observations, season),
        })
    }
}
