//! Metrics for evaluating forecast accuracy.

use crate::error::{ForecastError, Result};

fn check_lengths(forecast: &[f64], actual: &[f64]) -> Result<()> {
    if forecast.len() != actual.len() || forecast.is_empty() {
        return Err(ForecastError::InvalidParameter(
            "Forecast and actual values must have the same non-zero length".to_string(),
        ));
    }
    Ok(())
}

/// Mean absolute error.
pub fn mae(forecast: &[f64], actual: &[f64]) -> Result<f64> {
    check_lengths(forecast, actual)?;

    let sum: f64 = forecast
        .iter()
        .zip(actual.iter())
        .map(|(f, a)| (f - a).abs())
        .sum();

    Ok(sum / forecast.len() as f64)
}

/// Root mean squared error.
pub fn rmse(forecast: &[f64], actual: &[f64]) -> Result<f64> {
    check_lengths(forecast, actual)?;

    let sum: f64 = forecast
        .iter()
        .zip(actual.iter())
        .map(|(f, a)| (f - a).powi(2))
        .sum();

    Ok((sum / forecast.len() as f64).sqrt())
}

/// Symmetric mean absolute percentage error, in percent.
///
/// Steps where both forecast and actual are zero contribute 0, which keeps
/// the metric defined for intermittent demand series.
pub fn smape(forecast: &[f64], actual: &[f64]) -> Result<f64> {
    check_lengths(forecast, actual)?;

    let sum: f64 = forecast
        .iter()
        .zip(actual.iter())
        .map(|(&f, &a)| {
            let denom = f.abs() + a.abs();
            if denom == 0.0 {
                0.0
            } else {
                200.0 * (a - f).abs() / denom
            }
        })
        .sum();

    Ok(sum / forecast.len() as f64)
}

/// Mean absolute scaled error with a seasonal scaling term.
///
/// Errors are scaled by the in-sample seasonal naive MAE on the training
/// series, the M5 convention.
pub fn mase(forecast: &[f64], actual: &[f64], train: &[f64], season_length: usize) -> Result<f64> {
    check_lengths(forecast, actual)?;
    if season_length == 0 || train.len() <= season_length {
        return Err(ForecastError::InvalidParameter(format!(
            "Training series of length {} cannot scale errors with season length {}",
            train.len(),
            season_length
        )));
    }

    let naive_errors: f64 = (season_length..train.len())
        .map(|t| (train[t] - train[t - season_length]).abs())
        .sum();
    let scale = naive_errors / (train.len() - season_length) as f64;
    if scale <= f64::EPSILON {
        return Err(ForecastError::DataError(
            "Seasonal naive scale is zero; MASE is undefined".to_string(),
        ));
    }

    Ok(mae(forecast, actual)? / scale)
}

/// Bundle of accuracy metrics for one forecast.
#[derive(Debug, Clone)]
pub struct ForecastMetrics {
    /// Mean Absolute Error
    pub mae: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Symmetric Mean Absolute Percentage Error
    pub smape: f64,
}

/// Evaluate a forecast against actual values.
pub fn evaluate_forecast(forecast: &[f64], actual: &[f64]) -> Result<ForecastMetrics> {
    Ok(ForecastMetrics {
        mae: mae(forecast, actual)?,
        rmse: rmse(forecast, actual)?,
        smape: smape(forecast, actual)?,
    })
}

impl std::fmt::Display for ForecastMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Forecast Accuracy Metrics:")?;
        writeln!(f, "  MAE:   {:.4}", self.mae)?;
        writeln!(f, "  RMSE:  {:.4}", self.rmse)?;
        writeln!(f, "  SMAPE: {:.4}%", self.smape)?;
        Ok(())
    }
}
