pub mod config;
pub mod convert;
pub mod error;
pub mod metrics;
pub mod types;

pub use config::*;
pub use convert::*;
pub use error::*;
pub use metrics::FitSummary;
pub use types::*;
