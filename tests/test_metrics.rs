use assert_approx_eq::assert_approx_eq;
use m5_forecast::error::ForecastError;
use m5_forecast::metrics::{evaluate_forecast, mae, mase, rmse, smape};

#[test]
fn test_mae() {
    let forecast = vec![105.0, 106.0, 107.0];
    let actual = vec![106.0, 107.0, 108.0];

    assert_approx_eq!(mae(&forecast, &actual).unwrap(), 1.0);
}

#[test]
fn test_rmse() {
    let forecast = vec![1.0, 2.0];
    let actual = vec![4.0, 6.0];

    // Squared errors 9 and 16, mean 12.5
    assert_approx_eq!(rmse(&forecast, &actual).unwrap(), 12.5_f64.sqrt());
}

#[test]
fn test_smape_handles_zero_demand() {
    let forecast = vec![0.0, 2.0];
    let actual = vec![0.0, 2.0];

    // Both-zero steps contribute 0 instead of dividing by zero.
    assert_approx_eq!(smape(&forecast, &actual).unwrap(), 0.0);

    let forecast = vec![0.0];
    let actual = vec![2.0];
    assert_approx_eq!(smape(&forecast, &actual).unwrap(), 200.0);
}

#[test]
fn test_mase_with_unit_seasonal_scale() {
    // Seasonal naive errors on this training series are all exactly 1,
    // so MASE reduces to the MAE.
    let train = vec![1.0, 2.0, 3.0, 2.0, 3.0, 4.0, 3.0, 4.0, 5.0];
    let forecast = vec![4.0, 5.0];
    let actual = vec![5.0, 5.0];

    assert_approx_eq!(mase(&forecast, &actual, &train, 3).unwrap(), 0.5);
}

#[test]
fn test_mase_undefined_for_flat_training_series() {
    let train = vec![2.0; 9];
    let result = mase(&[2.0], &[2.0], &train, 3);

    assert!(matches!(result, Err(ForecastError::DataError(_))));
}

#[test]
fn test_length_mismatch_is_rejected() {
    assert!(matches!(
        mae(&[1.0, 2.0], &[1.0]),
        Err(ForecastError::InvalidParameter(_))
    ));
    assert!(matches!(
        rmse(&[], &[]),
        Err(ForecastError::InvalidParameter(_))
    ));
}

#[test]
fn test_evaluate_forecast_bundle() {
    let forecast = vec![10.0, 12.0, 14.0];
    let actual = vec![11.0, 12.0, 15.0];

    let metrics = evaluate_forecast(&forecast, &actual).unwrap();
    assert_approx_eq!(metrics.mae, 2.0 / 3.0);
    assert!(metrics.rmse >= metrics.mae);
    assert!(metrics.smape > 0.0);

    let rendered = format!("{}", metrics);
    assert!(rendered.contains("MAE"));
    assert!(rendered.contains("SMAPE"));
}
