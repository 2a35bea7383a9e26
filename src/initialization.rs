use std::env;
use chrono::Utc;
use log::info;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use crate::config::{load_config, Config, General};
use crate::errors::{ConfigError, SpotPriceInitError};
use crate::state::AppState;

/// Environment variable holding the config path if none is given on the command line
pub const CONFIG_ENV: &str = "SPOTPRICE_CONFIG";

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l:<5} {m}{n}";

/// Loads configuration, sets up logging and returns the config together with an
/// application state for the configured region, without any prices loaded yet
///
/// # Arguments
///
/// * 'config_path' - path given on the command line, if any
pub fn init(config_path: Option<String>) -> Result<(Config, AppState), SpotPriceInitError> {
    let config_path = match config_path {
        Some(path) => path,
        None => env::var(CONFIG_ENV)
            .map_err(|e| SpotPriceInitError(format!("error getting {}: {}", CONFIG_ENV, e)))?,
    };

    let config = load_config(&config_path)?;
    setup_logger(&config.general)?;

    info!("spotprice version: {}", env!("CARGO_PKG_VERSION"));

    let state = AppState::new(
        Utc::now(),
        config.prices.region,
        config.prices.view_mode,
        config.prices.cheapest_hours,
        config.prices.limits,
    );

    Ok((config, state))
}

/// Sets up log4rs with a file appender and, if configured, a console appender
///
/// # Arguments
///
/// * 'general' - general configuration holding log path and level
pub fn setup_logger(general: &General) -> Result<(), ConfigError> {
    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(&general.log_path)?;

    let mut builder = log4rs::Config::builder()
        .appender(Appender::builder().build("file", Box::new(file)));
    let mut root = Root::builder().appender("file");

    if general.log_to_stdout {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();
        builder = builder.appender(Appender::builder().build("stdout", Box::new(stdout)));
        root = root.appender("stdout");
    }

    let log_config = builder
        .build(root.build(general.log_level))
        .map_err(|e| ConfigError(format!("log config: {}", e)))?;

    log4rs::init_config(log_config).map_err(|e| ConfigError(format!("log init: {}", e)))?;

    Ok(())
}
