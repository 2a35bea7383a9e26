use chrono::{DateTime, Utc};
use log::debug;
use serde::Serialize;
use crate::cheapest::CheapestWindow;
use crate::models::currency::Currency;
use crate::models::exchange_rate::ExchangeRate;
use crate::models::price_limits::{PriceLevel, PriceRange};
use crate::models::price_point::PricePoint;
use crate::models::region::Region;
use crate::state::{AppState, PriceStatus};

/// One price ready for display
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SummaryPrice {
    pub instant: DateTime<Utc>,
    pub hours: String,
    pub price: f64,
    pub text: String,
    pub level: PriceLevel,
}

/// The cheapest window ready for display
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SummaryWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub hours: String,
    pub duration: u32,
    pub total_cost: f64,
    pub average_price: f64,
    pub text: String,
}

/// Everything a display, widget or companion device needs, derived from the state
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Summary {
    pub generated: DateTime<Utc>,
    pub region: Region,
    pub currency: Currency,
    pub status: PriceStatus,
    pub exchange_rate: Option<ExchangeRate>,
    pub current: Option<SummaryPrice>,
    pub cheapest: Option<SummaryWindow>,
    pub today: Option<PriceRange>,
    pub tomorrow: Option<PriceRange>,
    pub prices: Vec<SummaryPrice>,
}

impl Summary {
    /// Builds a summary from the current application state. Values that can't be derived
    /// are left out rather than failing the whole summary.
    ///
    /// # Arguments
    ///
    /// * 'state' - the application state to summarize
    pub fn from_state(state: &AppState) -> Summary {
        let current = state.current_price()
            .inspect_err(|e| debug!("summary without current price: {}", e))
            .ok()
            .map(|p| summary_price(state, &p));

        let cheapest = state.cheapest_window()
            .inspect_err(|e| debug!("summary without cheapest window: {}", e))
            .ok()
            .map(|w| summary_window(state, &w));

        let prices = state.view_prices()
            .unwrap_or_default()
            .iter()
            .map(|p| summary_price(state, p))
            .collect();

        Summary {
            generated: state.now(),
            region: state.region(),
            currency: state.currency(),
            status: state.status(),
            exchange_rate: state.exchange_rate().copied(),
            current,
            cheapest,
            today: state.todays_range(),
            tomorrow: state.tomorrows_range(),
            prices,
        }
    }
}

fn summary_price(state: &AppState, point: &PricePoint) -> SummaryPrice {
    SummaryPrice {
        instant: point.instant,
        hours: point.hour_range(state.region().timezone()),
        price: point.price,
        text: point.formatted_price(state.currency()),
        level: point.level(state.price_limits()),
    }
}

fn summary_window(state: &AppState, window: &CheapestWindow) -> SummaryWindow {
    let tz = state.region().timezone();
    let average = PricePoint::new(window.start, window.average_price());

    SummaryWindow {
        start: window.start,
        end: window.end(),
        hours: format!("{}-{}", window.start.with_timezone(&tz).format("%H"), window.end().with_timezone(&tz).format("%H")),
        duration: window.duration,
        total_cost: window.total_cost,
        average_price: window.average_price(),
        text: average.formatted_price(state.currency()),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeDelta, TimeZone};
    use chrono_tz::Europe::Stockholm;
    use crate::models::day_ahead_prices::{DayAheadPrices, RawTimeSeries, Resolution, SeriesPoint};
    use crate::models::price_limits::PriceLimits;
    use crate::models::time_interval::TimeInterval;
    use crate::state::ViewMode;
    use super::*;

    fn state() -> AppState {
        let start = Utc.with_ymd_and_hms(2022, 8, 25, 22, 0, 0).unwrap();
        let interval = TimeInterval::new(start, start + TimeDelta::hours(24));
        let now = Stockholm.with_ymd_and_hms(2022, 8, 26, 20, 15, 0).unwrap().with_timezone(&Utc);

        let mut state = AppState::new(now, Region::SE4, ViewMode::Today, 2, PriceLimits { low: 0.5, high: 1.5 });
        state.set_day_ahead_prices(DayAheadPrices {
            region: Region::SE4,
            currency: Currency::Eur,
            interval,
            series: vec![RawTimeSeries {
                interval,
                resolution: Resolution::Hourly,
                points: (1..=24).map(|position| SeriesPoint { position, amount: 200.0 - position as f64 }).collect(),
            }],
        });
        state.set_exchange_rate(ExchangeRate::new(NaiveDate::from_ymd_opt(2022, 8, 26).unwrap(), Currency::Eur, Currency::Sek, 10.0));
        state
    }

    #[test]
    fn test_summary() {
        let summary = Summary::from_state(&state());
        assert_eq!(summary.status, PriceStatus::UpToDate);
        assert_eq!(summary.prices.len(), 24);

        let current = summary.current.unwrap();
        assert_eq!(current.hours, "20-21");
        assert_eq!(current.text, "179.00 öre/kWh");
        assert_eq!(current.level, PriceLevel::High);

        let cheapest = summary.cheapest.unwrap();
        assert_eq!(cheapest.hours, "22-00");
        assert_eq!(cheapest.duration, 2);
        assert!(summary.tomorrow.is_none());
    }

    #[test]
    fn test_summary_serializes() {
        let json = serde_json::to_value(Summary::from_state(&state())).unwrap();
        assert_eq!(json["region"], "SE4");
        assert_eq!(json["currency"], "SEK");
        assert_eq!(json["status"], "up_to_date");
    }
}
