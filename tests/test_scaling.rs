use assert_approx_eq::assert_approx_eq;
use m5_forecast::error::ForecastError;
use m5_forecast::scaling::RobustScaler;

#[test]
fn test_round_trip_identity() {
    let values = vec![0.0, 3.0, 1.0, 12.0, 7.0, 2.0, 150.0, 4.0];

    let mut scaler = RobustScaler::new();
    let scaled = scaler.fit_transform(&values).unwrap();
    let restored = scaler.inverse_transform(&scaled).unwrap();

    assert_eq!(restored.len(), values.len());
    for (restored, original) in restored.iter().zip(values.iter()) {
        assert_approx_eq!(restored, original);
    }
}

#[test]
fn test_median_maps_to_zero() {
    // Odd length, so the median is an actual element.
    let values = vec![1.0, 2.0, 3.0, 4.0, 100.0];

    let mut scaler = RobustScaler::new();
    scaler.fit(&values).unwrap();

    let transformed = scaler.transform(&[3.0]).unwrap();
    assert_approx_eq!(transformed[0], 0.0);

    // The transform preserves ordering.
    let scaled = scaler.transform(&values).unwrap();
    for pair in scaled.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn test_constant_series_scale_floor() {
    let values = vec![9.0; 20];

    let mut scaler = RobustScaler::new();
    let scaled = scaler.fit_transform(&values).unwrap();

    // Zero IQR floors the scale, so a constant series maps to zeros
    // instead of dividing by zero.
    for &value in &scaled {
        assert_approx_eq!(value, 0.0);
    }

    let restored = scaler.inverse_transform(&scaled).unwrap();
    for &value in &restored {
        assert_approx_eq!(value, 9.0);
    }
}

#[test]
fn test_unfitted_scaler_errors() {
    let scaler = RobustScaler::new();
    assert!(!scaler.is_fitted());

    assert!(matches!(
        scaler.transform(&[1.0]),
        Err(ForecastError::NotFitted)
    ));
    assert!(matches!(
        scaler.inverse_transform(&[1.0]),
        Err(ForecastError::NotFitted)
    ));
}

#[test]
fn test_empty_series_rejected() {
    let mut scaler = RobustScaler::new();
    assert!(matches!(
        scaler.fit(&[]),
        Err(ForecastError::DataError(_))
    ));
}
