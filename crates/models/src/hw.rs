//! Holt-Winters triple exponential smoothing with multiplicative seasonality.
//!
//! Coefficients are supplied by the caller and never fitted. A run validates
//! the request, derives the seed level, trend and one seasonal index per
//! phase from the raw series, then makes a single pass over the series that
//! refines the state and emits predictions `horizon` steps ahead.

use common::{Coefficient, Forecast, Result, SmoothingConfig, WintersError};
use tracing::debug;

// ---------------------------------------------------------------------------
// Type definitions
// ---------------------------------------------------------------------------

/// Seed values derived from the raw series before smoothing starts.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct InitialState {
    pub level: f64,
    pub trend: f64,
    /// One multiplicative index per phase within the period.
    pub seasonal: Vec<f64>,
}

/// Level, trend and seasonal index for every step of the series.
///
/// All three share the time axis of the observations. Seasonal lookups are
/// always made a whole period behind the step being updated.
#[derive(Debug, Clone)]
struct SmoothingState {
    level: Vec<f64>,
    trend: Vec<f64>,
    seasonal: Vec<f64>,
    period: usize,
}

impl SmoothingState {
    /// Level and trend are seeded at step 1; step 0 stays unused.
    fn seed(n: usize, period: usize, init: &InitialState) -> Self {
        let mut level = vec![0.0; n];
        let mut trend = vec![0.0; n];
        let mut seasonal = vec![0.0; n];

        level[1] = init.level;
        trend[1] = init.trend;
        seasonal[..period].copy_from_slice(&init.seasonal);

        Self {
            level,
            trend,
            seasonal,
            period,
        }
    }

    fn phase(&self, t: usize) -> usize {
        t % self.period
    }

    /// Seasonal index of the same phase one season before `t`.
    fn season_back(&self, t: usize) -> Option<f64> {
        t.checked_sub(self.period).map(|j| self.seasonal[j])
    }

    fn update(&mut self, t: usize, observation: f64, config: &SmoothingConfig) {
        let SmoothingConfig {
            alpha, beta, gamma, ..
        } = *config;
        let projected = self.level[t - 1] + self.trend[t - 1];
        let back = self.season_back(t);

        // Until a full season has passed the observation enters undeseasonalized.
        let deseasonalized = match back {
            Some(s) => observation / s,
            None => observation,
        };
        self.level[t] = alpha * deseasonalized + (1.0 - alpha) * projected;
        self.trend[t] =
            beta * (self.level[t] - self.level[t - 1]) + (1.0 - beta) * self.trend[t - 1];

        if let Some(s) = back {
            self.seasonal[t] = gamma * observation / self.level[t] + (1.0 - gamma) * s;
        }
    }

    /// Prediction for step `t + horizon` made from the state at `t`.
    ///
    /// `None` while the seasonal index for the target phase is not yet known.
    fn project(&self, t: usize, horizon: usize) -> Option<f64> {
        let s = (t + horizon)
            .checked_sub(self.period)
            .map(|j| self.seasonal[j])?;
        Some((self.level[t] + horizon as f64 * self.trend[t]) * s)
    }

    /// Most recent seasonal index for each phase, ordered by phase.
    fn latest_seasonal(&self) -> Vec<f64> {
        let n = self.seasonal.len();
        let mut latest = vec![0.0; self.period];
        for t in n - self.period..n {
            latest[self.phase(t)] = self.seasonal[t];
        }
        latest
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Checks a request before any state is derived.
///
/// Checks run in a fixed order and the first violation is returned.
pub fn validate(values: &[f64], config: &SmoothingConfig) -> Result<()> {
    if values.is_empty() {
        return Err(WintersError::EmptySeries);
    }
    if config.horizon == 0 {
        return Err(WintersError::ZeroHorizon);
    }
    if config.horizon > config.period {
        return Err(WintersError::HorizonExceedsPeriod {
            horizon: config.horizon,
            period: config.period,
        });
    }

    for (coefficient, value) in [
        (Coefficient::Alpha, config.alpha),
        (Coefficient::Beta, config.beta),
        (Coefficient::Gamma, config.gamma),
    ] {
        // NaN fails `contains` as well
        if !(0.0..=1.0).contains(&value) {
            return Err(WintersError::CoefficientOutOfRange { coefficient, value });
        }
    }

    let needed = 2 * config.period;
    if values.len() < needed {
        return Err(WintersError::InsufficientHistory {
            needed,
            got: values.len(),
        });
    }

    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(WintersError::NonNumeric { index });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// State initialization
// ---------------------------------------------------------------------------

fn initial_level(values: &[f64]) -> f64 {
    values[0]
}

/// Mean per-step change between the first two seasons.
///
/// The summed differences span `period` steps each, hence the `period²`.
fn initial_trend(values: &[f64], period: usize) -> f64 {
    let sum: f64 = (0..period).map(|i| values[period + i] - values[i]).sum();
    sum / (period * period) as f64
}

/// Average ratio of each phase to its season's mean, over complete seasons.
fn seasonal_indices(values: &[f64], period: usize) -> Result<Vec<f64>> {
    let seasons = values.len() / period;
    let mut indices = vec![0.0; period];

    for (season, chunk) in values.chunks_exact(period).enumerate() {
        let average = chunk.iter().sum::<f64>() / period as f64;
        if average == 0.0 {
            return Err(WintersError::DegenerateSeason { season });
        }
        for (index, &v) in indices.iter_mut().zip(chunk) {
            *index += v / average;
        }
    }

    for index in indices.iter_mut() {
        *index /= seasons as f64;
    }
    Ok(indices)
}

pub(crate) fn initialize_state(values: &[f64], period: usize) -> Result<InitialState> {
    Ok(InitialState {
        level: initial_level(values),
        trend: initial_trend(values, period),
        seasonal: seasonal_indices(values, period)?,
    })
}

// ---------------------------------------------------------------------------
// Smoothing recurrence
// ---------------------------------------------------------------------------

fn smooth(values: &[f64], init: &InitialState, config: &SmoothingConfig) -> Result<Forecast> {
    let n = values.len();
    let horizon = config.horizon;

    let mut state = SmoothingState::seed(n, config.period, init);
    let mut predictions: Vec<Option<f64>> = vec![None; n + horizon];

    for t in 2..n {
        state.update(t, values[t], config);

        if let Some(value) = state.project(t, horizon) {
            let index = t + horizon;
            if !value.is_finite() {
                return Err(WintersError::NonFiniteForecast { index });
            }
            predictions[index] = Some(value);
        }
    }

    debug!(
        level = state.level[n - 1],
        trend = state.trend[n - 1],
        seasonal = ?state.latest_seasonal(),
        "Holt-Winters final state"
    );

    Forecast::new(predictions, n)
}

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Holt-Winters forecaster with fixed coefficients.
#[derive(Debug, Clone)]
pub struct HoltWinters {
    config: SmoothingConfig,
}

impl HoltWinters {
    pub fn new(config: SmoothingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SmoothingConfig {
        &self.config
    }

    /// Fits the series and returns `len + horizon` slots of predictions.
    ///
    /// Requires at least two full seasons of data.
    pub fn fit_predict(&self, values: &[f64]) -> Result<Forecast> {
        validate(values, &self.config)?;

        let period = self.config.period;
        let init = initialize_state(values, period)?;

        debug!(
            data_length = values.len(),
            period = period,
            horizon = self.config.horizon,
            level = init.level,
            trend = init.trend,
            seasonal = ?init.seasonal,
            "Holt-Winters initial state"
        );

        smooth(values, &init, &self.config)
    }
}
