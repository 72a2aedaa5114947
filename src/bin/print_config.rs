//! Print the resolved run configuration as pretty JSON.

use m5_forecast::config::Config;
use tracing_subscriber::EnvFilter;

fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = config.ensure_results_dir() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }

    config.print_summary();
}
