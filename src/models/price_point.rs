use std::fmt;
use chrono::{DateTime, TimeDelta, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use crate::models::currency::Currency;
use crate::models::price_limits::{PriceLevel, PriceLimits};
use crate::models::time_interval::TimeInterval;

/// An hourly price, in destination currency per kWh, valid from the given instant
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PricePoint {
    pub instant: DateTime<Utc>,
    pub price: f64,
}

impl PricePoint {
    pub fn new(instant: DateTime<Utc>, price: f64) -> PricePoint {
        PricePoint { instant, price }
    }

    /// The one hour slot the price is valid for
    pub fn slot(&self) -> TimeInterval {
        TimeInterval::new(self.instant, self.instant + TimeDelta::hours(1))
    }

    /// Price expressed in the currency subunit, i.e. öre or cent per kWh
    pub fn subunit_price(&self) -> f64 {
        self.price * 100.0
    }

    /// Returns the price as text in the currency subunit, e.g. "61.99 öre/kWh"
    ///
    /// # Arguments
    ///
    /// * 'currency' - the currency the price is in
    pub fn formatted_price(&self, currency: Currency) -> String {
        format!("{:.2} {}/kWh", self.subunit_price(), currency.subunit())
    }

    /// Returns the slot as local hours, e.g. "08-09"
    ///
    /// # Arguments
    ///
    /// * 'tz' - timezone to present the hours in
    pub fn hour_range(&self, tz: Tz) -> String {
        let slot = self.slot();
        format!("{}-{}",
                slot.start.with_timezone(&tz).format("%H"),
                slot.end.with_timezone(&tz).format("%H"))
    }

    /// Classifies the price against the given limits
    ///
    /// # Arguments
    ///
    /// * 'limits' - the low and high price limits
    pub fn level(&self, limits: &PriceLimits) -> PriceLevel {
        limits.level(self.price)
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for PricePoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} -> {:>8.5}", self.instant.format("%Y-%m-%d %H:%M"), self.price)
    }
}
