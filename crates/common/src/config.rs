use serde::{Deserialize, Serialize};

use crate::Result;

/// Application-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub smoothing: SmoothingConfig,
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Parameters of a single Holt-Winters run.
///
/// Values are taken as given; range checks happen when the model runs so
/// that configuration files and direct callers go through the same rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmoothingConfig {
    /// Level smoothing coefficient.
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    /// Trend smoothing coefficient.
    #[serde(default = "default_beta")]
    pub beta: f64,
    /// Seasonal smoothing coefficient.
    #[serde(default = "default_gamma")]
    pub gamma: f64,
    /// Observations per season.
    #[serde(default = "default_period")]
    pub period: usize,
    /// Steps to forecast past the last observation.
    #[serde(default = "default_horizon")]
    pub horizon: usize,
}

impl SmoothingConfig {
    pub fn new(alpha: f64, beta: f64, gamma: f64, period: usize, horizon: usize) -> Self {
        Self {
            alpha,
            beta,
            gamma,
            period,
            horizon,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            alpha: default_alpha(),
            beta: default_beta(),
            gamma: default_gamma(),
            period: default_period(),
            horizon: default_horizon(),
        }
    }
}

fn default_alpha() -> f64 {
    0.5
}
fn default_beta() -> f64 {
    0.4
}
fn default_gamma() -> f64 {
    0.6
}
fn default_period() -> usize {
    6
}
fn default_horizon() -> usize {
    4
}
