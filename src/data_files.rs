use std::fs;
use std::path::Path;
use glob::glob;
use log::{debug, info, warn};
use crate::config::Files;
use crate::errors::DataError;
use crate::models::currency::Currency;
use crate::models::day_ahead_prices::DayAheadPrices;
use crate::models::exchange_rate::{ExchangeRate, ExchangeRateRecord};
use crate::state::AppState;

/// Loads day ahead prices and the latest cached exchange rate into the state. Inputs that
/// can't be loaded are logged and left out, so the state reports what is missing rather
/// than failing here.
///
/// # Arguments
///
/// * 'files' - configured input locations
/// * 'state' - application state to load data into
pub fn load_into_state(files: &Files, state: &mut AppState) {
    match load_day_ahead_prices(&files.day_ahead_file) {
        Ok(day_ahead) => state.set_day_ahead_prices(day_ahead),
        Err(e) => warn!("no day ahead prices: {}", e),
    }

    let source = state.price_currency();
    match load_latest_exchange_rate(&files.exchange_rate_dir, source, state.currency()) {
        Ok(Some(rate)) => {
            info!("using exchange rate {}", rate);
            state.set_exchange_rate(rate);
        },
        Ok(None) => debug!("no cached exchange rate {}/{}", source, state.currency()),
        Err(e) => warn!("no exchange rate: {}", e),
    }
}

/// Loads a decoded day ahead document. Only hourly resolution is accepted.
///
/// # Arguments
///
/// * 'file_path' - path to the json document
pub fn load_day_ahead_prices(file_path: &str) -> Result<DayAheadPrices, DataError> {
    let json = fs::read_to_string(file_path)?;
    let day_ahead: DayAheadPrices = serde_json::from_str(&json)?;
    debug!("loaded {} day ahead series for {} from {}", day_ahead.series.len(), day_ahead.region, file_path);

    day_ahead.ensure_hourly()
}

/// Loads the exchange rate with the latest date for the given currencies from all
/// `*_exchange_rate.json` files in the rate directory. Files that can't be read or
/// hold an invalid record are skipped.
///
/// # Arguments
///
/// * 'rate_dir' - directory holding exchange rate records, including trailing separator
/// * 'source' - currency to convert from
/// * 'destination' - currency to convert to
pub fn load_latest_exchange_rate(rate_dir: &str, source: Currency, destination: Currency) -> Result<Option<ExchangeRate>, DataError> {
    if !Path::new(rate_dir).exists() {
        return Err(DataError::File(format!("exchange rate directory {} not found", rate_dir)));
    }

    let pattern = format!("{}*_exchange_rate.json", rate_dir);
    let mut latest: Option<ExchangeRate> = None;

    for entry in glob(&pattern)? {
        let Ok(path) = entry else { continue };
        match load_exchange_rate(&path) {
            Ok(rate) if rate.converts(source, destination) => {
                if latest.is_none_or(|l| rate.date > l.date) {
                    latest = Some(rate);
                }
            },
            Ok(_) => {},
            Err(e) => warn!("skipping {}: {}", path.display(), e),
        }
    }

    Ok(latest)
}

fn load_exchange_rate(path: &Path) -> Result<ExchangeRate, DataError> {
    let json = fs::read_to_string(path)?;
    let record: ExchangeRateRecord = serde_json::from_str(&json)?;

    ExchangeRate::try_from(record)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use tempfile::{tempdir, TempDir};
    use crate::models::day_ahead_prices::Resolution;
    use crate::models::price_limits::PriceLimits;
    use crate::models::region::Region;
    use crate::state::{PriceStatus, ViewMode};
    use super::*;

    /// Directory path with trailing separator, as the rate loader expects
    fn dir_path(dir: &TempDir) -> String {
        format!("{}/", dir.path().display())
    }

    fn write_rate(dir: &str, name: &str, date: &str, destination: &str, rate: f64) {
        write_rate_from(dir, name, date, "EUR", destination, rate);
    }

    fn write_rate_from(dir: &str, name: &str, date: &str, source: &str, destination: &str, rate: f64) {
        let json = format!(r#"{{"date":"{}","source":"{}","destination":"{}","rate":{}}}"#, date, source, destination, rate);
        fs::write(format!("{}{}_exchange_rate.json", dir, name), json).unwrap();
    }

    fn day_ahead_json(resolution: &str) -> String {
        day_ahead_json_in(resolution, "EUR")
    }

    fn day_ahead_json_in(resolution: &str, currency: &str) -> String {
        format!(r#"{{
            "region": "SE3",
            "currency": "{}",
            "interval": {{ "start": "2022-08-25T22:00:00Z", "end": "2022-08-25T23:00:00Z" }},
            "series": [{{
                "interval": {{ "start": "2022-08-25T22:00:00Z", "end": "2022-08-25T23:00:00Z" }},
                "resolution": "{}",
                "points": [{{ "position": 1, "amount": 88.1 }}]
            }}]
        }}"#, currency, resolution)
    }

    fn state(region: Region) -> AppState {
        let now = Utc.with_ymd_and_hms(2022, 8, 25, 22, 30, 0).unwrap();
        AppState::new(now, region, ViewMode::Today, 1, PriceLimits { low: 1.0, high: 5.0 })
    }

    fn files(dir: &str, rate_dir: &str) -> Files {
        Files {
            day_ahead_file: format!("{}day_ahead.json", dir),
            exchange_rate_dir: rate_dir.to_string(),
            summary_file: None,
        }
    }

    #[test]
    fn test_load_day_ahead_prices() {
        let dir = tempdir().unwrap();
        let path = format!("{}day_ahead.json", dir_path(&dir));
        fs::write(&path, day_ahead_json("PT60M")).unwrap();

        let day_ahead = load_day_ahead_prices(&path).unwrap();
        assert_eq!(day_ahead.series[0].resolution, Resolution::Hourly);
    }

    #[test]
    fn test_load_day_ahead_prices_rejects_quarterly() {
        let dir = tempdir().unwrap();
        let path = format!("{}day_ahead.json", dir_path(&dir));
        fs::write(&path, day_ahead_json("PT15M")).unwrap();

        assert!(matches!(load_day_ahead_prices(&path), Err(DataError::UnsupportedResolution(_))));
    }

    #[test]
    fn test_load_day_ahead_prices_missing_file() {
        assert!(matches!(load_day_ahead_prices("/nonexistent/day_ahead.json"), Err(DataError::File(_))));
    }

    #[test]
    fn test_load_latest_exchange_rate() {
        let tmp = tempdir().unwrap();
        let dir = dir_path(&tmp);
        write_rate(&dir, "20220825", "2022-08-25", "SEK", 10.40);
        write_rate(&dir, "20220826", "2022-08-26", "SEK", 10.44);
        write_rate(&dir, "20220829", "2022-08-29", "NOK", 9.90);
        write_rate(&dir, "broken", "not a date", "SEK", 10.0);

        let rate = load_latest_exchange_rate(&dir, Currency::Eur, Currency::Sek).unwrap().unwrap();
        assert_eq!(rate.date, NaiveDate::from_ymd_opt(2022, 8, 26).unwrap());
        assert_eq!(rate.rate, 10.44);

        assert!(load_latest_exchange_rate(&dir, Currency::Eur, Currency::Dkk).unwrap().is_none());
    }

    #[test]
    fn test_load_into_state_without_rate_dir() {
        let tmp = tempdir().unwrap();
        let dir = dir_path(&tmp);
        let files = files(&dir, &format!("{}missing/", dir));

        // Finnish prices are already in local currency and need no rate at all
        let mut state = state(Region::FI);
        fs::write(format!("{}day_ahead.json", dir), day_ahead_json("PT60M").replace("SE3", "FI")).unwrap();
        load_into_state(&files, &mut state);
        assert!(state.exchange_rate().is_none());
        assert_eq!(state.status(), PriceStatus::UpToDate);

        let mut state = self::state(Region::SE3);
        fs::write(format!("{}day_ahead.json", dir), day_ahead_json("PT60M")).unwrap();
        load_into_state(&files, &mut state);
        assert!(state.exchange_rate().is_none());
        assert_eq!(state.status(), PriceStatus::NoData);
    }

    #[test]
    fn test_load_into_state_uses_price_currency() {
        let tmp = tempdir().unwrap();
        let dir = dir_path(&tmp);
        fs::write(format!("{}day_ahead.json", dir), day_ahead_json_in("PT60M", "NOK")).unwrap();
        write_rate_from(&dir, "eur", "2022-08-25", "EUR", "SEK", 10.4);
        write_rate_from(&dir, "nok", "2022-08-25", "NOK", "SEK", 1.05);

        let mut state = state(Region::SE3);
        load_into_state(&files(&dir, &dir), &mut state);

        let rate = state.exchange_rate().unwrap();
        assert_eq!(rate.source, Currency::Nok);
        assert_eq!(rate.rate, 1.05);
        assert!(state.current_price().is_ok());
    }

    #[test]
    fn test_load_latest_exchange_rate_missing_dir() {
        assert!(load_latest_exchange_rate("/nonexistent/rates/", Currency::Eur, Currency::Sek).is_err());
    }
}
