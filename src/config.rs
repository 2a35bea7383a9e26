use std::fs;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;
use crate::models::price_limits::PriceLimits;
use crate::models::region::Region;
use crate::state::ViewMode;

#[derive(Deserialize)]
pub struct Prices {
    pub region: Region,
    pub view_mode: ViewMode,
    pub cheapest_hours: u32,
    pub limits: PriceLimits,
}

#[derive(Deserialize)]
pub struct Files {
    pub day_ahead_file: String,
    pub exchange_rate_dir: String,
    pub summary_file: Option<String>,
}

#[derive(Deserialize)]
pub struct General {
    pub log_path: String,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

#[derive(Deserialize)]
pub struct Config {
    pub general: General,
    pub prices: Prices,
    pub files: Files,
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {
    let toml = fs::read_to_string(config_path)?;
    parse_config(&toml)
}

/// Parses and validates configuration given as toml
///
/// # Arguments
///
/// * 'toml' - the configuration document
fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(toml)?;

    if config.prices.cheapest_hours == 0 {
        return Err(ConfigError::from("cheapest_hours must be at least 1"));
    }
    if config.prices.limits.low > config.prices.limits.high {
        return Err(ConfigError::from("low price limit is above high price limit"));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
        [general]
        log_path = "/tmp/spotprice.log"
        log_level = "debug"
        log_to_stdout = true

        [prices]
        region = "SE3"
        view_mode = "today_and_coming_night"
        cheapest_hours = 3

        [prices.limits]
        low = 0.5
        high = 1.5

        [files]
        day_ahead_file = "/var/lib/spotprice/day_ahead.json"
        exchange_rate_dir = "/var/lib/spotprice/rates/"
    "#;

    #[test]
    fn test_parse_config() {
        let config = parse_config(CONFIG).unwrap();
        assert_eq!(config.general.log_level, LevelFilter::Debug);
        assert_eq!(config.prices.region, Region::SE3);
        assert_eq!(config.prices.view_mode, ViewMode::TodayAndComingNight);
        assert_eq!(config.prices.cheapest_hours, 3);
        assert!(config.files.summary_file.is_none());
    }

    #[test]
    fn test_reject_zero_cheapest_hours() {
        let toml = CONFIG.replace("cheapest_hours = 3", "cheapest_hours = 0");
        assert!(parse_config(&toml).is_err());
    }

    #[test]
    fn test_reject_inverted_limits() {
        let toml = CONFIG.replace("low = 0.5", "low = 2.5");
        assert!(parse_config(&toml).is_err());
    }
}
