//! Seasonal naive forecaster with a log-scale drift adjustment.

use crate::error::{ForecastError, Result};
use crate::models::{Exog, Forecast, ForecastModel};
use tracing::debug;

/// Seasonal naive model with drift.
///
/// Fitting log1p-transforms the series, estimates a constant drift as the
/// mean of successive log differences, and stores the last `season_length`
/// log values as the seasonal window. Prediction tiles that window over the
/// horizon, shifts step `i` by `i * drift` on the log scale, and transforms
/// back with expm1.
#[derive(Debug, Clone)]
pub struct SeasonalNaiveWDrift {
    /// Display name of the model
    alias: String,
    /// Seasonal period in steps
    season_length: usize,
    /// State estimated by `fit`
    fitted: Option<DriftFit>,
}

#[derive(Debug, Clone)]
struct DriftFit {
    /// Mean first difference of the log1p-transformed series
    drift: f64,
    /// Last `season_length` log1p-transformed observations
    window: Vec<f64>,
}

impl SeasonalNaiveWDrift {
    /// Create a new seasonal naive with drift model
    pub fn new(season_length: usize) -> Result<Self> {
        if season_length == 0 {
            return Err(ForecastError::InvalidParameter(
                "Season length must be positive".to_string(),
            ));
        }

        Ok(Self {
            alias: "SeasonalNaiveWDrift".to_string(),
            season_length,
            fitted: None,
        })
    }

    /// Create a new model with a custom display name
    pub fn with_alias(season_length: usize, alias: &str) -> Result<Self> {
        let mut model = Self::new(season_length)?;
        model.alias = alias.to_string();
        Ok(model)
    }

    /// Seasonal period in steps
    pub fn season_length(&self) -> usize {
        self.season_length
    }

    /// Fitted drift, if the model has been fitted
    pub fn drift(&self) -> Option<f64> {
        self.fitted.as_ref().map(|fit| fit.drift)
    }
}

impl ForecastModel for SeasonalNaiveWDrift {
    fn alias(&self) -> &str {
        &self.alias
    }

    fn fit(&mut self, y: &[f64], _x: Option<&Exog>) -> Result<()> {
        if y.len() < 2 {
            return Err(ForecastError::DataError(format!(
                "Need at least 2 observations to estimate drift, got {}",
                y.len()
            )));
        }
        // A series shorter than the season would underfill the window;
        // fail instead of silently truncating.
        if y.len() < self.season_length {
            return Err(ForecastError::DataError(format!(
                "Series length ({}) is shorter than the season length ({})",
                y.len(),
                self.season_length
            )));
        }
        if y.iter().any(|&v| v <= -1.0) {
            return Err(ForecastError::DataError(
                "Series values must be greater than -1 for the log1p transform".to_string(),
            ));
        }

        let log_y: Vec<f64> = y.iter().map(|&v| v.ln_1p()).collect();
        let drift = log_y.windows(2).map(|w| w[1] - w[0]).sum::<f64>() / (log_y.len() - 1) as f64;
        let window = log_y[log_y.len() - self.season_length..].to_vec();

        debug!(
            drift,
            season_length = self.season_length,
            "fitted seasonal naive drift model"
        );

        self.fitted = Some(DriftFit { drift, window });
        Ok(())
    }

    fn predict(&self, h: usize) -> Result<Forecast> {
        let fit = self.fitted.as_ref().ok_or(ForecastError::NotFitted)?;
        if h == 0 {
            return Err(ForecastError::InvalidParameter(
                "Forecast horizon must be positive".to_string(),
            ));
        }

        // Step i repeats window[i mod season_length], shifted by i * drift
        // on the log scale (0-indexed convention).
        let mean: Vec<f64> = (0..h)
            .map(|i| (fit.window[i % fit.window.len()] + i as f64 * fit.drift).exp_m1())
            .collect();

        Ok(Forecast::new(mean))
    }
}
