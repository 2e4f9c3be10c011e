use thiserror::Error;

use crate::Coefficient;

#[derive(Error, Debug)]
pub enum WintersError {
    #[error("series must contain at least one observation")]
    EmptySeries,

    #[error("horizon must be > 0")]
    ZeroHorizon,

    #[error("horizon must be <= period (horizon {horizon}, period {period})")]
    HorizonExceedsPeriod { horizon: usize, period: usize },

    #[error("{coefficient} must satisfy 0.0 <= {coefficient} <= 1.0, got {value}")]
    CoefficientOutOfRange { coefficient: Coefficient, value: f64 },

    #[error("insufficient history: need at least {needed} observations (two full seasons), got {got}")]
    InsufficientHistory { needed: usize, got: usize },

    #[error("observation at index {index} is not a finite number")]
    NonNumeric { index: usize },

    #[error("season {season} averages to zero, seasonal ratios are undefined")]
    DegenerateSeason { season: usize },

    #[error("forecast at index {index} is not finite")]
    NonFiniteForecast { index: usize },

    #[error("forecast claims {observed} observed slots but holds only {slots}")]
    ForecastShape { observed: usize, slots: usize },

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WintersError>;
