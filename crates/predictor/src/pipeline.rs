use common::{to_f64s, FitSummary, Forecast, Result, SmoothingConfig};
use models::HoltWinters;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Input for the prediction pipeline.
#[derive(Debug, Clone)]
pub struct PredictionInput {
    /// Observations, one per time step, oldest first.
    pub series: Vec<f64>,

    /// Smoothing coefficients, period and horizon.
    pub config: SmoothingConfig,
}

impl PredictionInput {
    pub fn new(series: Vec<f64>, config: SmoothingConfig) -> Self {
        Self { series, config }
    }

    /// Builds an input from any numeric series, e.g. integer counts.
    ///
    /// Fails with `NonNumeric` if a value has no finite `f64` representation.
    pub fn from_numbers<T: ToPrimitive>(series: &[T], config: SmoothingConfig) -> Result<Self> {
        Ok(Self::new(to_f64s(series)?, config))
    }
}

/// Full result of a prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResult {
    /// One slot per observation plus one per horizon step.
    pub forecast: Forecast,
    /// In-sample accuracy, absent when no in-sample slot was predicted.
    pub fit: Option<FitSummary>,
    /// Total processing time in seconds.
    pub processing_time_secs: f64,
}

/// Main prediction entry point.
///
/// Pipeline: validate → initialize → smooth → score in-sample fit.
pub fn predict(input: &PredictionInput) -> Result<ForecastResult> {
    let start = std::time::Instant::now();
    let config = input.config;

    info!(
        data_points = input.series.len(),
        period = config.period,
        horizon = config.horizon,
        "Starting prediction pipeline"
    );

    let forecast = HoltWinters::new(config).fit_predict(&input.series)?;
    let fit = FitSummary::from_forecast(&forecast, &input.series, config.period);

    let processing_time = start.elapsed().as_secs_f64();

    info!(
        first_available = ?forecast.first_available(),
        mae = fit.map(|f| f.mae),
        time = format!("{:.6}s", processing_time),
        "Prediction pipeline complete"
    );

    Ok(ForecastResult {
        forecast,
        fit,
        processing_time_secs: processing_time,
    })
}

/// Forecasts `series` and returns `len + horizon` values.
///
/// Slots without a prediction hold `0.0`. Invalid input is reported as a
/// warning naming the violated constraint and yields `None`.
pub fn forecast<T: ToPrimitive>(
    series: &[T],
    alpha: f64,
    beta: f64,
    gamma: f64,
    period: usize,
    horizon: usize,
) -> Option<Vec<f64>> {
    let config = SmoothingConfig::new(alpha, beta, gamma, period, horizon);

    match forecast_dense(series, config) {
        Ok(values) => Some(values),
        Err(e) => {
            warn!(error = %e, "Forecast rejected");
            None
        }
    }
}

/// Values with no `f64` form become NaN, so the engine reports them after
/// its structural and coefficient checks.
fn forecast_dense<T: ToPrimitive>(series: &[T], config: SmoothingConfig) -> Result<Vec<f64>> {
    let values: Vec<f64> = series
        .iter()
        .map(|v| v.to_f64().unwrap_or(f64::NAN))
        .collect();
    let result = predict(&PredictionInput::new(values, config))?;
    Ok(result.forecast.to_dense())
}
