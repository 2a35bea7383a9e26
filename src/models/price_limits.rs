use std::fmt;
use serde::{Deserialize, Serialize};
use crate::models::price_point::PricePoint;

/// Thresholds, in local currency per kWh, for what counts as a low or high price
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PriceLimits {
    pub low: f64,
    pub high: f64,
}

impl PriceLimits {
    /// Classifies a price against the limits
    ///
    /// # Arguments
    ///
    /// * 'price' - price in local currency per kWh
    pub fn level(&self, price: f64) -> PriceLevel {
        if price < self.low {
            PriceLevel::Low
        } else if price > self.high {
            PriceLevel::High
        } else {
            PriceLevel::Normal
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PriceLevel {
    Low,
    Normal,
    High,
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PriceLevel::Low    => write!(f, "Low   "),
            PriceLevel::Normal => write!(f, "Normal"),
            PriceLevel::High   => write!(f, "High  "),
        }
    }
}

/// Lowest and highest price within a sequence of price points
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    /// Returns the range of the given prices, or None if there are none
    ///
    /// # Arguments
    ///
    /// * 'prices' - price points to find the range for
    pub fn from_prices(prices: &[PricePoint]) -> Option<PriceRange> {
        let first = prices.first()?.price;
        Some(prices.iter().fold(PriceRange { min: first, max: first }, |acc, p| PriceRange {
            min: acc.min.min(p.price),
            max: acc.max.max(p.price),
        }))
    }

    /// Relative position of a price within the range, 0.0 at min and 1.0 at max.
    /// A flat range puts every price in the middle.
    ///
    /// # Arguments
    ///
    /// * 'price' - price to place within the range
    pub fn position(&self, price: f64) -> f64 {
        let width = self.max - self.min;
        if width <= 0.0 {
            return 0.5;
        }
        ((price - self.min) / width).clamp(0.0, 1.0)
    }
}
