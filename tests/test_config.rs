use m5_forecast::config::Config;
use m5_forecast::error::ForecastError;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::collections::HashMap;
use std::path::PathBuf;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn test_defaults_in_bare_environment() {
    let config = Config::from_lookup(|_| None).unwrap();

    assert_eq!(
        config.m5_data_path,
        PathBuf::from("./data/sales_train_validation.csv")
    );
    assert_eq!(
        config.m5_eval_path,
        PathBuf::from("./data/sales_train_evaluation.csv")
    );
    assert_eq!(config.results_path, PathBuf::from("./results"));
    assert_eq!(config.n_jobs, -1);
    assert_eq!(config.verbosity, 1);
    assert_eq!(config.dlm_solver, "powell");
    assert_eq!(config.train_days, 1941);
    assert_eq!(config.test_horizon, 28);
    assert_eq!(config.season_length, 7);
    assert_eq!(config.random_seed, 42);
    assert_eq!(config.log_level, "INFO");
    assert!(config.save_intermediate);
    assert!(config.plot_results);
    assert!(config.enable_dlm);
    assert_eq!(config.dlm_trend_order, 1);
    assert_eq!(config.dlm_seasonal_order, 7);
    assert_eq!(
        config.stat_models,
        vec!["AutoARIMA", "AutoTheta", "NaiveSeasonality"]
    );
    assert_eq!(config.cv_folds, 5);
    assert_eq!(config.val_size, 0.1);
}

#[test]
fn test_overrides_are_parsed() {
    let lookup = lookup_from(&[
        ("M5_DATA_PATH", "/tmp/sales.csv"),
        ("N_JOBS", "4"),
        ("M5_SEASON_LENGTH", "14"),
        ("RANDOM_SEED", "7"),
        ("ENABLE_DLM", "false"),
        ("SAVE_INTERMEDIATE", "TRUE"),
        ("STAT_MODELS", " CrostonClassic , ADIDA ,"),
        ("VAL_SIZE", "0.25"),
    ]);

    let config = Config::from_lookup(lookup).unwrap();

    assert_eq!(config.m5_data_path, PathBuf::from("/tmp/sales.csv"));
    assert_eq!(config.n_jobs, 4);
    assert_eq!(config.season_length, 14);
    assert_eq!(config.random_seed, 7);
    assert!(!config.enable_dlm);
    assert!(config.save_intermediate);
    assert_eq!(config.stat_models, vec!["CrostonClassic", "ADIDA"]);
    assert_eq!(config.val_size, 0.25);
}

#[test]
fn test_flags_only_accept_true() {
    // Anything other than the literal "true" is false.
    let config = Config::from_lookup(lookup_from(&[("PLOT_RESULTS", "1")])).unwrap();
    assert!(!config.plot_results);

    let config = Config::from_lookup(lookup_from(&[("PLOT_RESULTS", "yes")])).unwrap();
    assert!(!config.plot_results);
}

#[test]
fn test_unparseable_value_is_an_error() {
    let result = Config::from_lookup(lookup_from(&[("CV_FOLDS", "five")]));
    assert!(matches!(result, Err(ForecastError::ConfigError(_))));

    let result = Config::from_lookup(lookup_from(&[("N_JOBS", "")]));
    assert!(matches!(result, Err(ForecastError::ConfigError(_))));
}

#[test]
fn test_validation_bounds() {
    assert!(Config::from_lookup(lookup_from(&[("M5_SEASON_LENGTH", "0")])).is_err());
    assert!(Config::from_lookup(lookup_from(&[("M5_TEST_HORIZON", "0")])).is_err());
    assert!(Config::from_lookup(lookup_from(&[("CV_FOLDS", "0")])).is_err());
    assert!(Config::from_lookup(lookup_from(&[("VAL_SIZE", "1.5")])).is_err());
    assert!(Config::from_lookup(lookup_from(&[("VAL_SIZE", "0.0")])).is_err());
}

#[test]
fn test_summary_structure() {
    let config = Config::from_lookup(|_| None).unwrap();
    let summary = config.summary();

    assert_eq!(summary["forecasting"]["season_length"], json!(7));
    assert_eq!(summary["forecasting"]["test_horizon"], json!(28));
    assert_eq!(summary["models"]["enable_dlm"], json!(true));
    assert_eq!(summary["computation"]["random_seed"], json!(42));
    assert_eq!(
        summary["data"]["results_path"],
        json!("./results")
    );
}

#[test]
fn test_ensure_results_dir() {
    let dir = tempfile::tempdir().unwrap();
    let results = dir.path().join("results");
    let lookup = lookup_from(&[("RESULTS_PATH", results.to_str().unwrap())]);

    let config = Config::from_lookup(lookup).unwrap();
    assert!(!results.exists());
    config.ensure_results_dir().unwrap();
    assert!(results.is_dir());
}
