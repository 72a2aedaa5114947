//! Robust scaling for demand series.
//!
//! Centers on the median and scales by the interquartile range, so the
//! occasional promotion spike in a retail series does not dominate the
//! transform the way it would with mean/standard-deviation scaling.

use crate::error::{ForecastError, Result};
use statrs::statistics::{Data, OrderStatistics};

/// Median/IQR scaler fitted on a single series.
#[derive(Debug, Clone, Default)]
pub struct RobustScaler {
    fitted: Option<ScalerFit>,
}

#[derive(Debug, Clone, Copy)]
struct ScalerFit {
    center: f64,
    scale: f64,
}

impl RobustScaler {
    pub fn new() -> Self {
        Self { fitted: None }
    }

    /// Fit the scaler on a series.
    ///
    /// A degenerate interquartile range is floored to 1.0, so constant
    /// series transform to zeros instead of dividing by zero.
    pub fn fit(&mut self, values: &[f64]) -> Result<()> {
        if values.is_empty() {
            return Err(ForecastError::DataError(
                "Cannot fit scaler on an empty series".to_string(),
            ));
        }

        let mut data = Data::new(values.to_vec());
        let center = data.median();
        let iqr = data.interquartile_range();
        let scale = if iqr.abs() <= f64::EPSILON { 1.0 } else { iqr };

        self.fitted = Some(ScalerFit { center, scale });
        Ok(())
    }

    /// Fit on `values` and return them transformed into scaled space.
    pub fn fit_transform(&mut self, values: &[f64]) -> Result<Vec<f64>> {
        self.fit(values)?;
        self.transform(values)
    }

    /// Map values from original units into scaled space.
    pub fn transform(&self, values: &[f64]) -> Result<Vec<f64>> {
        let fit = self.fitted.ok_or(ForecastError::NotFitted)?;
        Ok(values.iter().map(|v| (v - fit.center) / fit.scale).collect())
    }

    /// Map values from scaled space back to original units.
    pub fn inverse_transform(&self, values: &[f64]) -> Result<Vec<f64>> {
        let fit = self.fitted.ok_or(ForecastError::NotFitted)?;
        Ok(values.iter().map(|v| v * fit.scale + fit.center).collect())
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }
}
