//! M5 data access and series utilities.
//!
//! The M5 sales files are wide: one row per item/store series, an `id`
//! column, and one `d_<n>` column per day of history.

use crate::error::{ForecastError, Result};
use chrono::{Days, NaiveDate};
use num_traits::ToPrimitive;
use polars::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Poisson};
use std::fs::File;
use std::ops::Range;
use std::path::Path;
use tracing::debug;

/// One item/store demand series from the M5 wide format.
#[derive(Debug, Clone)]
pub struct SalesSeries {
    /// Series identifier, e.g. `FOODS_3_090_CA_3_validation`
    pub id: String,
    /// Daily unit sales, chronologically ordered
    pub values: Vec<f64>,
}

impl SalesSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Load an M5 wide-format sales CSV.
pub fn load_wide_csv<P: AsRef<Path>>(path: P) -> Result<Vec<SalesSeries>> {
    let file = File::open(path)?;
    let df = CsvReader::new(file)
        .infer_schema(None)
        .has_header(true)
        .finish()?;

    let ids: Vec<String> = df
        .column("id")?
        .utf8()
        .map_err(|_| ForecastError::DataError("Column 'id' must be a string column".to_string()))?
        .into_iter()
        .map(|v| v.unwrap_or_default().to_string())
        .collect();

    let day_columns: Vec<String> = df
        .get_column_names()
        .iter()
        .filter(|name| name.starts_with("d_"))
        .map(|name| name.to_string())
        .collect();
    if day_columns.is_empty() {
        return Err(ForecastError::DataError(
            "No day columns (d_1, d_2, ...) found".to_string(),
        ));
    }

    let mut columns = Vec::with_capacity(day_columns.len());
    for name in &day_columns {
        columns.push(column_as_f64(&df, name)?);
    }

    debug!(
        series = ids.len(),
        days = day_columns.len(),
        "loaded M5 sales data"
    );

    let mut result = Vec::with_capacity(ids.len());
    for (row, id) in ids.into_iter().enumerate() {
        let values = columns.iter().map(|col| col[row]).collect();
        result.push(SalesSeries { id, values });
    }

    Ok(result)
}

/// Read a column as f64 values, keeping row alignment (nulls become 0).
fn column_as_f64(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let col = df.column(name)?;
    match col.dtype() {
        DataType::Float64 => Ok(col.f64()?.into_iter().map(|v| v.unwrap_or(0.0)).collect()),
        DataType::Float32 => Ok(col
            .f32()?
            .into_iter()
            .map(|v| v.unwrap_or(0.0) as f64)
            .collect()),
        DataType::Int64 => ensure_float(
            &col.i64()?
                .into_iter()
                .map(|v| v.unwrap_or(0))
                .collect::<Vec<i64>>(),
        ),
        DataType::Int32 => ensure_float(
            &col.i32()?
                .into_iter()
                .map(|v| v.unwrap_or(0))
                .collect::<Vec<i32>>(),
        ),
        _ => Err(ForecastError::DataError(format!(
            "Column '{}' cannot be read as f64",
            name
        ))),
    }
}

/// Convert a numeric slice to f64, erroring on values that do not fit.
pub fn ensure_float<T: ToPrimitive>(values: &[T]) -> Result<Vec<f64>> {
    values
        .iter()
        .map(|v| {
            v.to_f64().ok_or_else(|| {
                ForecastError::DataError("Value cannot be represented as f64".to_string())
            })
        })
        .collect()
}

/// Calendar date of M5 day `d_1` (2011-01-29).
pub fn m5_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2011, 1, 29).unwrap()
}

/// Map a 1-based M5 day index to its calendar date.
pub fn day_to_date(day: usize) -> Result<NaiveDate> {
    if day == 0 {
        return Err(ForecastError::InvalidParameter(
            "M5 day indices start at 1".to_string(),
        ));
    }

    m5_start_date()
        .checked_add_days(Days::new((day - 1) as u64))
        .ok_or_else(|| {
            ForecastError::InvalidParameter(format!("Day index {} is out of range", day))
        })
}

/// Calendar dates for an `h`-step forecast following `last_day`.
pub fn forecast_dates(last_day: usize, h: usize) -> Result<Vec<NaiveDate>> {
    (1..=h).map(|i| day_to_date(last_day + i)).collect()
}

/// Split a series into a training slice and a trailing holdout of `horizon`
/// points.
pub fn train_holdout_split(values: &[f64], horizon: usize) -> Result<(&[f64], &[f64])> {
    if horizon == 0 || horizon >= values.len() {
        return Err(ForecastError::InvalidParameter(format!(
            "Holdout horizon ({}) must be positive and smaller than the series length ({})",
            horizon,
            values.len()
        )));
    }

    let split = values.len() - horizon;
    Ok((&values[..split], &values[split..]))
}

/// Split off a trailing validation fraction (`VAL_SIZE`), rounded to the
/// nearest whole number of points.
pub fn validation_split(values: &[f64], val_size: f64) -> Result<(&[f64], &[f64])> {
    if !(val_size > 0.0 && val_size < 1.0) {
        return Err(ForecastError::InvalidParameter(
            "Validation size must be strictly between 0 and 1".to_string(),
        ));
    }

    let holdout = (values.len() as f64 * val_size).round() as usize;
    if holdout == 0 || holdout >= values.len() {
        return Err(ForecastError::DataError(format!(
            "Series of length {} is too short for a validation fraction of {}",
            values.len(),
            val_size
        )));
    }

    let split = values.len() - holdout;
    Ok((&values[..split], &values[split..]))
}

/// Expanding-window cross-validation folds over a series of length `len`.
///
/// Each fold pairs a training range starting at 0 with the `horizon`-step
/// test range that follows it; the last fold's test range ends at `len`.
pub fn rolling_origin_folds(
    len: usize,
    folds: usize,
    horizon: usize,
) -> Result<Vec<(Range<usize>, Range<usize>)>> {
    if folds == 0 || horizon == 0 {
        return Err(ForecastError::InvalidParameter(
            "Fold count and horizon must be positive".to_string(),
        ));
    }
    if len <= folds * horizon {
        return Err(ForecastError::DataError(format!(
            "Series of length {} cannot hold {} folds of horizon {}",
            len, folds, horizon
        )));
    }

    let mut result = Vec::with_capacity(folds);
    for k in 0..folds {
        let test_end = len - (folds - 1 - k) * horizon;
        let test_start = test_end - horizon;
        result.push((0..test_start, test_start..test_end));
    }

    Ok(result)
}

/// Simulate a non-negative daily demand series with a seasonal profile and
/// Poisson noise. Deterministic for a given seed.
pub fn simulate_demand(n: usize, season_length: usize, seed: u64) -> Result<Vec<f64>> {
    if season_length == 0 {
        return Err(ForecastError::InvalidParameter(
            "Season length must be positive".to_string(),
        ));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut values = Vec::with_capacity(n);
    for i in 0..n {
        // Demand ramps up toward the end of each season, loosely mimicking
        // weekend shopping.
        let phase = (i % season_length) as f64 / season_length as f64;
        let rate = 4.0 + 3.0 * phase;
        let poisson = Poisson::new(rate)
            .map_err(|e| ForecastError::DataError(format!("Invalid Poisson rate: {}", e)))?;
        values.push(poisson.sample(&mut rng));
    }

    Ok(values)
}
