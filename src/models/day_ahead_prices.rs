use std::fmt;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::day_ahead::{convert, price_at, price_point_at};
use crate::errors::{DataError, PriceError};
use crate::models::currency::Currency;
use crate::models::exchange_rate::ExchangeRate;
use crate::models::price_point::PricePoint;
use crate::models::region::Region;
use crate::models::time_interval::TimeInterval;

/// Resolution of a time series as given by the market operator
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    #[serde(rename = "PT60M")]
    Hourly,
    #[serde(rename = "PT30M")]
    HalfHourly,
    #[serde(rename = "PT15M")]
    Quarterly,
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Resolution::Hourly     => write!(f, "PT60M"),
            Resolution::HalfHourly => write!(f, "PT30M"),
            Resolution::Quarterly  => write!(f, "PT15M"),
        }
    }
}

/// One price in a raw time series, in source currency per MWh
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SeriesPoint {
    pub position: u32,
    pub amount: f64,
}

/// A block of prices anchored to an interval, where each point's position is
/// the 1-based hour offset from the interval start
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RawTimeSeries {
    pub interval: TimeInterval,
    pub resolution: Resolution,
    pub points: Vec<SeriesPoint>,
}

/// One decoded day ahead response for a region
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DayAheadPrices {
    pub region: Region,
    pub currency: Currency,
    pub interval: TimeInterval,
    pub series: Vec<RawTimeSeries>,
}

impl DayAheadPrices {
    /// Returns self if every series has hourly resolution
    ///
    pub fn ensure_hourly(self) -> Result<Self, DataError> {
        if let Some(s) = self.series.iter().find(|s| s.resolution != Resolution::Hourly) {
            return Err(DataError::UnsupportedResolution(
                format!("series starting {} has resolution {}", s.interval.start, s.resolution)));
        }
        Ok(self)
    }

    /// Returns the raw amount, in source currency per MWh, valid at the given instant
    ///
    /// # Arguments
    ///
    /// * 'instant' - the instant to look up
    pub fn price_at(&self, instant: DateTime<Utc>) -> Result<f64, PriceError> {
        price_at(&self.series, &self.interval, instant)
    }

    /// Returns the converted price point valid at the given instant
    ///
    /// # Arguments
    ///
    /// * 'rate' - exchange rate from the price currency
    /// * 'instant' - the instant to look up
    pub fn price_point_at(&self, rate: &ExchangeRate, instant: DateTime<Utc>) -> Result<PricePoint, PriceError> {
        price_point_at(&self.series, &self.interval, rate, instant)
    }

    /// Returns all prices converted and sorted by instant
    ///
    /// # Arguments
    ///
    /// * 'rate' - exchange rate from the price currency
    pub fn convert(&self, rate: &ExchangeRate) -> Vec<PricePoint> {
        convert(&self.series, rate)
    }
}
