mod pipeline;

pub use pipeline::{forecast, predict, ForecastResult, PredictionInput};
