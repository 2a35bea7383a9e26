use std::fmt;
use chrono::{DateTime, DurationRound, NaiveDate, TimeDelta, TimeZone, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use crate::cheapest::{cheapest_window, CheapestWindow};
use crate::errors::StateError;
use crate::freshness::is_up_to_date;
use crate::models::currency::Currency;
use crate::models::day_ahead_prices::DayAheadPrices;
use crate::models::exchange_rate::ExchangeRate;
use crate::models::price_limits::{PriceLimits, PriceRange};
use crate::models::price_point::PricePoint;
use crate::models::region::Region;
use crate::models::time_interval::TimeInterval;

/// Currency day ahead prices are quoted in by the market operator
pub const MARKET_CURRENCY: Currency = Currency::Eur;

/// Local hour at which the coming night is considered over
const COMING_NIGHT_END_HOUR: u32 = 8;

/// Which part of the known prices to present
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Today,
    TodayAndComingNight,
    TodayAndTomorrow,
    Tomorrow,
}

/// What can be shown given the loaded data
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PriceStatus {
    NoData,
    StaleRate,
    UpToDate,
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for PriceStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PriceStatus::NoData    => write!(f, "No data"),
            PriceStatus::StaleRate => write!(f, "Stale rate"),
            PriceStatus::UpToDate  => write!(f, "Up to date"),
        }
    }
}

/// Holds loaded prices, exchange rate and selections. Every derived value is
/// recomputed from these on each call.
pub struct AppState {
    now: DateTime<Utc>,
    region: Region,
    view_mode: ViewMode,
    cheapest_hours: u32,
    price_limits: PriceLimits,
    day_ahead: Option<DayAheadPrices>,
    exchange_rate: Option<ExchangeRate>,
}

impl AppState {
    /// Returns a new AppState without any prices or exchange rate
    ///
    /// # Arguments
    ///
    /// * 'now' - the current instant
    /// * 'region' - bidding zone to present prices for
    /// * 'view_mode' - which part of the prices to present
    /// * 'cheapest_hours' - length in hours of the cheapest window to search for
    /// * 'price_limits' - limits for low and high prices
    pub fn new(now: DateTime<Utc>, region: Region, view_mode: ViewMode, cheapest_hours: u32, price_limits: PriceLimits) -> AppState {
        AppState {
            now,
            region,
            view_mode,
            cheapest_hours,
            price_limits,
            day_ahead: None,
            exchange_rate: None,
        }
    }

    pub fn set_now(&mut self, now: DateTime<Utc>) {
        self.now = now;
    }

    pub fn set_region(&mut self, region: Region) {
        self.region = region;
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
    }

    pub fn set_cheapest_hours(&mut self, cheapest_hours: u32) {
        self.cheapest_hours = cheapest_hours;
    }

    pub fn set_day_ahead_prices(&mut self, day_ahead: DayAheadPrices) {
        self.day_ahead = Some(day_ahead);
    }

    pub fn set_exchange_rate(&mut self, exchange_rate: ExchangeRate) {
        self.exchange_rate = Some(exchange_rate);
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn price_limits(&self) -> &PriceLimits {
        &self.price_limits
    }

    pub fn exchange_rate(&self) -> Option<&ExchangeRate> {
        self.exchange_rate.as_ref()
    }

    /// Currency prices are presented in
    pub fn currency(&self) -> Currency {
        self.region.currency()
    }

    /// Currency the loaded prices are quoted in, or the market currency if none are loaded
    pub fn price_currency(&self) -> Currency {
        self.day_ahead.as_ref().map_or(MARKET_CURRENCY, |d| d.currency)
    }

    /// Returns the rate to convert the loaded prices with. Prices already in the local
    /// currency get an identity rate, otherwise the cached rate is used as long as it
    /// converts between the right currencies, stale or not. Prices loaded for another
    /// region than the selected one are never used.
    ///
    pub fn exchange_rate_for_prices(&self) -> Result<ExchangeRate, StateError> {
        let day_ahead = self.day_ahead.as_ref().ok_or(StateError::NoPrices)?;
        if day_ahead.region != self.region {
            return Err(StateError::RegionMismatch { loaded: day_ahead.region, selected: self.region });
        }
        let local = self.currency();

        if day_ahead.currency == local {
            return Ok(ExchangeRate::identity(local, self.local_date()));
        }

        self.exchange_rate
            .filter(|r| r.converts(day_ahead.currency, local))
            .ok_or(StateError::NoExchangeRate { from: day_ahead.currency, to: local })
    }

    /// All loaded prices converted to local currency per kWh
    ///
    pub fn prices(&self) -> Result<Vec<PricePoint>, StateError> {
        let rate = self.exchange_rate_for_prices()?;
        let day_ahead = self.day_ahead.as_ref().ok_or(StateError::NoPrices)?;

        Ok(day_ahead.convert(&rate))
    }

    /// The interval selected by the view mode, in the region's local calendar
    ///
    pub fn view_interval(&self) -> Option<TimeInterval> {
        let (from, to) = match self.view_mode {
            ViewMode::Today               => ((0, 0), (1, 0)),
            ViewMode::TodayAndComingNight => ((0, 0), (1, COMING_NIGHT_END_HOUR)),
            ViewMode::TodayAndTomorrow    => ((0, 0), (2, 0)),
            ViewMode::Tomorrow            => ((1, 0), (2, 0)),
        };

        Some(TimeInterval::new(self.local_instant(from.0, from.1)?, self.local_instant(to.0, to.1)?))
    }

    /// Converted prices within the view mode interval
    ///
    pub fn view_prices(&self) -> Result<Vec<PricePoint>, StateError> {
        let prices = self.prices()?;
        let Some(interval) = self.view_interval() else {
            return Ok(Vec::new());
        };

        Ok(prices.into_iter().filter(|p| interval.contains(p.instant)).collect())
    }

    /// Price point valid right now
    ///
    pub fn current_price(&self) -> Result<PricePoint, StateError> {
        let rate = self.exchange_rate_for_prices()?;
        let day_ahead = self.day_ahead.as_ref().ok_or(StateError::NoPrices)?;

        Ok(day_ahead.price_point_at(&rate, self.now)?)
    }

    /// Cheapest window among the viewed prices from the current hour and forward
    ///
    pub fn cheapest_window(&self) -> Result<CheapestWindow, StateError> {
        let hour_start = self.now.duration_trunc(TimeDelta::hours(1))?;
        let upcoming = self.view_prices()?
            .into_iter()
            .filter(|p| p.instant >= hour_start)
            .collect::<Vec<PricePoint>>();

        debug!("searching {} hour window among {} upcoming prices", self.cheapest_hours, upcoming.len());
        Ok(cheapest_window(&upcoming, self.cheapest_hours)?)
    }

    /// Price range for the local calendar day of now
    pub fn todays_range(&self) -> Option<PriceRange> {
        self.day_range(0)
    }

    /// Price range for the local calendar day after now
    pub fn tomorrows_range(&self) -> Option<PriceRange> {
        self.day_range(1)
    }

    /// Returns true if a new exchange rate should be fetched, i.e. a conversion is needed
    /// and there is no cached rate for it or the cached one is not up to date
    ///
    pub fn needs_exchange_rate_refresh(&self) -> bool {
        let source = self.price_currency();
        let local = self.currency();
        if source == local {
            return false;
        }

        match &self.exchange_rate {
            Some(rate) if rate.converts(source, local) => !is_up_to_date(rate, self.now),
            _ => true,
        }
    }

    /// Returns whether there is anything to show and if so whether the rate can be trusted.
    /// A stale rate still gives prices.
    ///
    pub fn status(&self) -> PriceStatus {
        if let Err(e) = self.current_price() {
            debug!("no current price: {}", e);
            PriceStatus::NoData
        } else if self.needs_exchange_rate_refresh() {
            PriceStatus::StaleRate
        } else {
            PriceStatus::UpToDate
        }
    }

    fn day_range(&self, offset_days: i64) -> Option<PriceRange> {
        let day = TimeInterval::new(self.local_instant(offset_days, 0)?, self.local_instant(offset_days + 1, 0)?);
        let prices = self.prices().ok()?
            .into_iter()
            .filter(|p| day.contains(p.instant))
            .collect::<Vec<PricePoint>>();

        PriceRange::from_prices(&prices)
    }

    fn local_date(&self) -> NaiveDate {
        self.now.with_timezone(&self.region.timezone()).date_naive()
    }

    /// Instant of the given local hour, a number of days from the local date of now
    fn local_instant(&self, offset_days: i64, hour: u32) -> Option<DateTime<Utc>> {
        let tz = self.region.timezone();
        let date = self.local_date().checked_add_signed(TimeDelta::days(offset_days))?;

        tz.from_local_datetime(&date.and_hms_opt(hour, 0, 0)?)
            .earliest()
            .map(|t| t.with_timezone(&Utc))
    }
}
