//! Environment-driven configuration for M5 forecasting runs.
//!
//! All settings are read once into an immutable [`Config`] value that callers
//! pass by reference; nothing here mutates process-wide state. Every variable
//! has a default, so `Config::from_env()` succeeds in a bare environment.

use crate::error::{ForecastError, Result};
use serde_json::{json, Value};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Immutable run configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the M5 training CSV (wide format), `M5_DATA_PATH`
    pub m5_data_path: PathBuf,
    /// Path to the M5 evaluation CSV, `M5_EVAL_PATH`
    pub m5_eval_path: PathBuf,
    /// Directory where results are written, `RESULTS_PATH`
    pub results_path: PathBuf,
    /// Parallel job count for the calling pipeline, `N_JOBS` (-1 = all cores)
    pub n_jobs: i64,
    /// Verbosity level for the calling pipeline, `VERBOSITY`
    pub verbosity: i64,
    /// Numerical solver name handed to the DLM engine, `DLM_SOLVER`
    pub dlm_solver: String,
    /// Training window length in days, `M5_TRAIN_DAYS`
    pub train_days: usize,
    /// Forecast horizon held out for testing, `M5_TEST_HORIZON`
    pub test_horizon: usize,
    /// Seasonal period in days, `M5_SEASON_LENGTH`
    pub season_length: usize,
    /// Seed for simulated data and any stochastic models, `RANDOM_SEED`
    pub random_seed: u64,
    /// Log filter directive, `LOG_LEVEL` (e.g. `INFO` or `m5_forecast=debug`)
    pub log_level: String,
    /// Whether intermediate artifacts are written, `SAVE_INTERMEDIATE`
    pub save_intermediate: bool,
    /// Whether result plots are produced, `PLOT_RESULTS`
    pub plot_results: bool,
    /// Whether the DLM model family participates in the run, `ENABLE_DLM`
    pub enable_dlm: bool,
    /// Polynomial trend degree for the DLM, `DLM_TREND_ORDER`
    pub dlm_trend_order: usize,
    /// Seasonal period for the DLM, `DLM_SEASONAL_ORDER`
    pub dlm_seasonal_order: usize,
    /// Statistical model names requested for the run, `STAT_MODELS`
    pub stat_models: Vec<String>,
    /// Number of cross-validation folds, `CV_FOLDS`
    pub cv_folds: usize,
    /// Fraction of the training window reserved for validation, `VAL_SIZE`
    pub val_size: f64,
}

impl Config {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the configuration from an arbitrary key lookup.
    ///
    /// Tests use this with a closure over a map so they never touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            m5_data_path: lookup("M5_DATA_PATH")
                .unwrap_or_else(|| "./data/sales_train_validation.csv".to_string())
                .into(),
            m5_eval_path: lookup("M5_EVAL_PATH")
                .unwrap_or_else(|| "./data/sales_train_evaluation.csv".to_string())
                .into(),
            results_path: lookup("RESULTS_PATH")
                .unwrap_or_else(|| "./results".to_string())
                .into(),
            n_jobs: parse_var(&lookup, "N_JOBS", -1)?,
            verbosity: parse_var(&lookup, "VERBOSITY", 1)?,
            dlm_solver: lookup("DLM_SOLVER").unwrap_or_else(|| "powell".to_string()),
            train_days: parse_var(&lookup, "M5_TRAIN_DAYS", 1941)?,
            test_horizon: parse_var(&lookup, "M5_TEST_HORIZON", 28)?,
            season_length: parse_var(&lookup, "M5_SEASON_LENGTH", 7)?,
            random_seed: parse_var(&lookup, "RANDOM_SEED", 42)?,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "INFO".to_string()),
            save_intermediate: parse_flag(&lookup, "SAVE_INTERMEDIATE", true),
            plot_results: parse_flag(&lookup, "PLOT_RESULTS", true),
            enable_dlm: parse_flag(&lookup, "ENABLE_DLM", true),
            dlm_trend_order: parse_var(&lookup, "DLM_TREND_ORDER", 1)?,
            dlm_seasonal_order: parse_var(&lookup, "DLM_SEASONAL_ORDER", 7)?,
            stat_models: parse_list(
                lookup("STAT_MODELS")
                    .unwrap_or_else(|| "AutoARIMA,AutoTheta,NaiveSeasonality".to_string()),
            ),
            cv_folds: parse_var(&lookup, "CV_FOLDS", 5)?,
            val_size: parse_var(&lookup, "VAL_SIZE", 0.1)?,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.season_length == 0 {
            return Err(ForecastError::ConfigError(
                "M5_SEASON_LENGTH must be at least 1".to_string(),
            ));
        }
        if self.test_horizon == 0 {
            return Err(ForecastError::ConfigError(
                "M5_TEST_HORIZON must be at least 1".to_string(),
            ));
        }
        if self.cv_folds == 0 {
            return Err(ForecastError::ConfigError(
                "CV_FOLDS must be at least 1".to_string(),
            ));
        }
        if !(self.val_size > 0.0 && self.val_size < 1.0) {
            return Err(ForecastError::ConfigError(
                "VAL_SIZE must be strictly between 0 and 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Create the results directory if it does not exist.
    pub fn ensure_results_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.results_path)?;
        Ok(())
    }

    /// Grouped summary of the configuration as a JSON value.
    pub fn summary(&self) -> Value {
        json!({
            "data": {
                "m5_data_path": self.m5_data_path,
                "m5_eval_path": self.m5_eval_path,
                "results_path": self.results_path,
            },
            "forecasting": {
                "train_days": self.train_days,
                "test_horizon": self.test_horizon,
                "season_length": self.season_length,
                "cv_folds": self.cv_folds,
                "val_size": self.val_size,
            },
            "models": {
                "stat_models": self.stat_models,
                "enable_dlm": self.enable_dlm,
                "dlm_solver": self.dlm_solver,
                "dlm_trend_order": self.dlm_trend_order,
                "dlm_seasonal_order": self.dlm_seasonal_order,
            },
            "computation": {
                "n_jobs": self.n_jobs,
                "verbosity": self.verbosity,
                "random_seed": self.random_seed,
            },
        })
    }

    /// Pretty-print the configuration summary to stdout.
    pub fn print_summary(&self) {
        let banner = "=".repeat(70);
        println!("\n{banner}");
        println!("CONFIGURATION SUMMARY");
        println!("{banner}");
        // summary() contains only plain JSON types, so this cannot fail
        println!(
            "{}",
            serde_json::to_string_pretty(&self.summary()).unwrap_or_default()
        );
        println!("{banner}\n");
    }
}

/// Parse a variable with `FromStr`, falling back to `default` when unset.
/// A present but unparseable value is an error, not a silent default.
fn parse_var<T, F>(lookup: &F, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| {
            ForecastError::ConfigError(format!("Invalid value for {}: {:?}", key, raw))
        }),
        None => Ok(default),
    }
}

/// Boolean flags: only the literal string "true" (case-insensitive) is true.
fn parse_flag<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().eq_ignore_ascii_case("true"),
        None => default,
    }
}

fn parse_list(raw: String) -> Vec<String> {
    raw.split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}
