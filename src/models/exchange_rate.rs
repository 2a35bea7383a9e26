use std::fmt;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::errors::DataError;
use crate::models::currency::Currency;

/// Exchange rate as published for one calendar day
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExchangeRate {
    pub date: NaiveDate,
    pub source: Currency,
    pub destination: Currency,
    pub rate: f64,
}

impl ExchangeRate {
    pub fn new(date: NaiveDate, source: Currency, destination: Currency, rate: f64) -> ExchangeRate {
        ExchangeRate { date, source, destination, rate }
    }

    /// Returns a rate of 1.0 for prices already in the wanted currency
    ///
    /// # Arguments
    ///
    /// * 'currency' - both source and destination currency
    /// * 'date' - the date the rate is valid for
    pub fn identity(currency: Currency, date: NaiveDate) -> ExchangeRate {
        ExchangeRate { date, source: currency, destination: currency, rate: 1.0 }
    }

    /// Returns true if the rate converts between the given currencies
    ///
    /// # Arguments
    ///
    /// * 'source' - currency to convert from
    /// * 'destination' - currency to convert to
    pub fn converts(&self, source: Currency, destination: Currency) -> bool {
        self.source == source && self.destination == destination
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}/{} {:.4}", self.date, self.source, self.destination, self.rate)
    }
}

/// Exchange rate record as delivered by the rate fetch, with the date kept as text
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExchangeRateRecord {
    pub date: String,
    pub source: Currency,
    pub destination: Currency,
    pub rate: f64,
}

impl TryFrom<ExchangeRateRecord> for ExchangeRate {
    type Error = DataError;

    fn try_from(record: ExchangeRateRecord) -> Result<Self, Self::Error> {
        let date = NaiveDate::parse_from_str(&record.date, "%Y-%m-%d")
            .map_err(|e| DataError::InvalidRecord(format!("date '{}': {}", record.date, e)))?;

        if !(record.rate.is_finite() && record.rate > 0.0) {
            return Err(DataError::InvalidRecord(format!("rate {} is not positive", record.rate)));
        }

        Ok(ExchangeRate::new(date, record.source, record.destination, record.rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, rate: f64) -> ExchangeRateRecord {
        ExchangeRateRecord { date: date.to_string(), source: Currency::Eur, destination: Currency::Sek, rate }
    }

    #[test]
    fn test_record_to_rate() {
        let rate = ExchangeRate::try_from(record("2022-08-26", 10.4433)).unwrap();
        assert_eq!(rate.date, NaiveDate::from_ymd_opt(2022, 8, 26).unwrap());
        assert!(rate.converts(Currency::Eur, Currency::Sek));
        assert!(!rate.converts(Currency::Sek, Currency::Eur));
    }

    #[test]
    fn test_record_rejects_bad_date_and_rate() {
        assert!(matches!(ExchangeRate::try_from(record("26/08/2022", 10.0)), Err(DataError::InvalidRecord(_))));
        assert!(matches!(ExchangeRate::try_from(record("2022-08-26", 0.0)), Err(DataError::InvalidRecord(_))));
        assert!(matches!(ExchangeRate::try_from(record("2022-08-26", -1.0)), Err(DataError::InvalidRecord(_))));
    }
}
