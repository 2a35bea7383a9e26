use chrono::{DateTime, Utc};
use crate::errors::PriceError;
use crate::models::day_ahead_prices::RawTimeSeries;
use crate::models::exchange_rate::ExchangeRate;
use crate::models::price_point::PricePoint;
use crate::models::time_interval::TimeInterval;

/// Factor converting a price per MWh to a price per kWh
const MWH_TO_KWH: f64 = 0.001;

/// Returns the raw amount, in source currency per MWh, for the point whose hourly slot
/// contains the given instant.
///
/// Slots are half-open, so an instant exactly on a slot boundary belongs to the later slot.
/// Should more than one point match, which valid input never gives, the first one is used.
///
/// # Arguments
///
/// * 'series' - the time series of a day ahead response
/// * 'interval' - the overall interval covered by the response
/// * 'instant' - the instant to look up
pub fn price_at(series: &[RawTimeSeries], interval: &TimeInterval, instant: DateTime<Utc>) -> Result<f64, PriceError> {
    find_slot(series, interval, instant).map(|(_, amount)| amount)
}

/// Returns the converted price point valid at the given instant, stamped with its slot start
///
/// # Arguments
///
/// * 'series' - the time series of a day ahead response
/// * 'interval' - the overall interval covered by the response
/// * 'rate' - exchange rate from the source currency
/// * 'instant' - the instant to look up
pub fn price_point_at(series: &[RawTimeSeries], interval: &TimeInterval, rate: &ExchangeRate, instant: DateTime<Utc>)
    -> Result<PricePoint, PriceError> {

    let (slot, amount) = find_slot(series, interval, instant)?;
    Ok(PricePoint::new(slot.start, to_kwh_price(amount, rate)))
}

/// Converts every point of all series to a price per kWh in the rate's destination currency.
/// The series may come in any order, the result is always sorted by instant. Points whose
/// position lies outside the representable time range are left out.
///
/// # Arguments
///
/// * 'series' - the time series of a day ahead response
/// * 'rate' - exchange rate from the source currency
pub fn convert(series: &[RawTimeSeries], rate: &ExchangeRate) -> Vec<PricePoint> {
    let mut points = series
        .iter()
        .flat_map(|s| s.points.iter().filter_map(move |p| {
            s.interval.hour_slot(p.position).map(|slot| PricePoint::new(slot.start, to_kwh_price(p.amount, rate)))
        }))
        .collect::<Vec<PricePoint>>();

    points.sort_by_key(|p| p.instant);
    points
}

fn find_slot(series: &[RawTimeSeries], interval: &TimeInterval, instant: DateTime<Utc>)
    -> Result<(TimeInterval, f64), PriceError> {

    if !interval.contains(instant) {
        return Err(PriceError::OutOfRange(instant));
    }

    let matching = series
        .iter()
        .find(|s| s.interval.contains(instant))
        .ok_or(PriceError::NoMatchingSeries(instant))?;

    matching.points
        .iter()
        .filter_map(|p| matching.interval.hour_slot(p.position).map(|slot| (slot, p.amount)))
        .find(|(slot, _)| slot.contains(instant))
        .ok_or(PriceError::NoMatchingPoint(instant))
}

fn to_kwh_price(amount: f64, rate: &ExchangeRate) -> f64 {
    amount * rate.rate * MWH_TO_KWH
}
