//! Forecasting model adapters for M5 demand series.
//!
//! Every model implements the same three-operation contract, so the calling
//! pipeline can treat them interchangeably: [`ForecastModel::fit`] estimates
//! state from a series, [`ForecastModel::predict`] extrapolates from that
//! state, and [`ForecastModel::forecast`] composes the two.

use crate::error::{ForecastError, Result};
use std::fmt::Debug;

/// Exogenous regressors aligned to the target series, one inner vector per
/// regressor. Both adapters accept them for interface compatibility and
/// ignore them.
pub type Exog = [Vec<f64>];

/// Point forecast over a fixed horizon, with per-step variances when the
/// model provides them.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    /// Forecasted mean values, one per future step
    mean: Vec<f64>,
    /// Forecast variances (models with uncertainty estimates only)
    variances: Option<Vec<f64>>,
}

impl Forecast {
    /// Create a forecast carrying mean values only.
    pub fn new(mean: Vec<f64>) -> Self {
        Self {
            mean,
            variances: None,
        }
    }

    /// Create a forecast carrying mean values and per-step variances.
    pub fn with_variances(mean: Vec<f64>, variances: Vec<f64>) -> Result<Self> {
        if mean.len() != variances.len() {
            return Err(ForecastError::InvalidParameter(format!(
                "Mean length ({}) doesn't match variances length ({})",
                mean.len(),
                variances.len()
            )));
        }

        Ok(Self {
            mean,
            variances: Some(variances),
        })
    }

    /// Get the forecasted mean values
    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    /// Get the forecast variances, if available
    pub fn variances(&self) -> Option<&[f64]> {
        self.variances.as_deref()
    }

    /// Number of steps forecasted
    pub fn horizon(&self) -> usize {
        self.mean.len()
    }
}

/// Common fit/predict/forecast contract for forecasting models.
pub trait ForecastModel: Debug {
    /// Display name of the model
    fn alias(&self) -> &str;

    /// Estimate model state from a series
    fn fit(&mut self, y: &[f64], x: Option<&Exog>) -> Result<()>;

    /// Forecast `h` steps ahead from the fitted state
    fn predict(&self, h: usize) -> Result<Forecast>;

    /// Fit on `y` and forecast `h` steps in one call
    fn forecast(
        &mut self,
        y: &[f64],
        h: usize,
        x: Option<&Exog>,
        _x_future: Option<&Exog>,
    ) -> Result<Forecast> {
        self.fit(y, x)?;
        self.predict(h)
    }
}

pub mod dlm;
pub mod drift;

pub use dlm::{DlmAdapter, DlmComponent, DlmEngine};
pub use drift::SeasonalNaiveWDrift;
