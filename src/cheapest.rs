use std::fmt;
use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use crate::errors::PriceError;
use crate::models::price_point::PricePoint;
use crate::models::time_interval::TimeInterval;

/// The cheapest contiguous run of hours within a price sequence
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct CheapestWindow {
    pub start: DateTime<Utc>,
    pub duration: u32,
    pub total_cost: f64,
}

impl CheapestWindow {
    pub fn end(&self) -> DateTime<Utc> {
        self.start + TimeDelta::hours(self.duration as i64)
    }

    pub fn interval(&self) -> TimeInterval {
        TimeInterval::new(self.start, self.end())
    }

    /// Mean hourly price over the window
    pub fn average_price(&self) -> f64 {
        self.total_cost / self.duration as f64
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for CheapestWindow {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} -> Length: {:>2}h, Cost {:>8.5}, Mean {:>8.5}",
               self.start.format("%Y-%m-%d %H:%M"), self.duration, self.total_cost, self.average_price())
    }
}

/// Returns the window of `duration` consecutive prices with the lowest sum.
///
/// Prices must be sorted by instant without duplicates. On equal sums the earliest window wins.
///
/// # Arguments
///
/// * 'prices' - hourly price points in chronological order
/// * 'duration' - number of hours in the window
pub fn cheapest_window(prices: &[PricePoint], duration: u32) -> Result<CheapestWindow, PriceError> {
    if duration == 0 {
        return Err(PriceError::InvalidDuration);
    }

    let block_len = duration as usize;
    if prices.len() < block_len {
        return Err(PriceError::InsufficientData { available: prices.len(), requested: block_len });
    }

    let mut best: Option<CheapestWindow> = None;
    for block in prices.windows(block_len) {
        let total_cost = block.iter().map(|p| p.price).sum::<f64>();
        if best.is_none_or(|b| total_cost < b.total_cost) {
            best = Some(CheapestWindow { start: block[0].instant, duration, total_cost });
        }
    }

    best.ok_or(PriceError::InsufficientData { available: prices.len(), requested: block_len })
}
