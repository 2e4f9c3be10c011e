use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Result, WintersError};

/// One of the three smoothing coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coefficient {
    /// Level smoothing.
    Alpha,
    /// Trend smoothing.
    Beta,
    /// Seasonal smoothing.
    Gamma,
}

impl fmt::Display for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Coefficient::Alpha => "alpha",
            Coefficient::Beta => "beta",
            Coefficient::Gamma => "gamma",
        };
        f.write_str(name)
    }
}

/// Output of a Holt-Winters run, one slot per absolute time step.
///
/// Slots `0..observed` are in-sample (each one predicted `horizon` steps
/// earlier); slots `observed..` lie past the last observation. A slot is
/// `None` when the model had not yet accumulated enough history to predict it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawForecast")]
pub struct Forecast {
    values: Vec<Option<f64>>,
    observed: usize,
}

/// Unchecked wire shape of [`Forecast`].
#[derive(Deserialize)]
struct RawForecast {
    values: Vec<Option<f64>>,
    observed: usize,
}

impl TryFrom<RawForecast> for Forecast {
    type Error = WintersError;

    fn try_from(raw: RawForecast) -> Result<Self> {
        Forecast::new(raw.values, raw.observed)
    }
}

impl Forecast {
    /// Fails with `ForecastShape` when `observed` exceeds the slot count.
    pub fn new(values: Vec<Option<f64>>, observed: usize) -> Result<Self> {
        if observed > values.len() {
            return Err(WintersError::ForecastShape {
                observed,
                slots: values.len(),
            });
        }
        Ok(Self { values, observed })
    }

    /// Total slots: observations plus horizon.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of observations the model was fitted on.
    pub fn observed(&self) -> usize {
        self.observed
    }

    pub fn horizon(&self) -> usize {
        self.values.len() - self.observed
    }

    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().flatten()
    }

    /// Index of the first populated slot.
    pub fn first_available(&self) -> Option<usize> {
        self.values.iter().position(Option::is_some)
    }

    pub fn in_sample(&self) -> &[Option<f64>] {
        &self.values[..self.observed]
    }

    pub fn ahead(&self) -> &[Option<f64>] {
        &self.values[self.observed..]
    }

    /// Flattens to plain numbers, with unpopulated slots as `0.0`.
    pub fn to_dense(&self) -> Vec<f64> {
        self.values.iter().map(|v| v.unwrap_or(0.0)).collect()
    }
}
