//! # m5_forecast
//!
//! Configuration and forecasting model adapters for an M5 retail demand
//! forecasting exercise.
//!
//! ## Features
//!
//! - Immutable, environment-driven run configuration ([`Config`])
//! - Two model adapters behind a common fit/predict/forecast contract:
//!   - [`models::SeasonalNaiveWDrift`]: repeats the last seasonal window on
//!     the log1p scale, extrapolated by the mean log difference of the series
//!   - [`models::DlmAdapter`]: robust-scales a series, delegates fitting and
//!     prediction to a dynamic linear model engine behind the
//!     [`models::DlmEngine`] trait, and rescales the results
//! - M5 wide-format CSV loading, holdout and rolling-origin splits
//! - Forecast accuracy metrics (MAE, RMSE, SMAPE, seasonal MASE)
//!
//! ## Quick Start
//!
//! ```rust
//! use m5_forecast::config::Config;
//! use m5_forecast::data::simulate_demand;
//! use m5_forecast::models::{ForecastModel, SeasonalNaiveWDrift};
//!
//! # fn main() -> m5_forecast::error::Result<()> {
//! // Load configuration (all variables have defaults)
//! let config = Config::from_env()?;
//!
//! // Simulate a demand series and forecast the test horizon
//! let y = simulate_demand(112, config.season_length, config.random_seed)?;
//! let mut model = SeasonalNaiveWDrift::new(config.season_length)?;
//! let forecast = model.forecast(&y, config.test_horizon, None, None)?;
//!
//! assert_eq!(forecast.horizon(), config.test_horizon);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod metrics;
pub mod models;
pub mod scaling;

// Re-export commonly used types
pub use crate::config::Config;
pub use crate::error::ForecastError;
pub use crate::models::{Forecast, ForecastModel};
pub use crate::scaling::RobustScaler;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
