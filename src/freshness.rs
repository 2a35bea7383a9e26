use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc, Weekday};
use chrono_tz::CET;
use crate::models::exchange_rate::ExchangeRate;

/// Local time in CET after which the rate for the current day is published
const PUBLICATION_HOUR: u32 = 16;

/// Returns true if the exchange rate is still the most recent one that could have been
/// published at the given instant.
///
/// Rates are published once per business day at 16:00 CET, so yesterday's rate is the latest
/// until then, and Friday's rate stays the latest over the weekend and until Monday 16:00.
/// Public holidays are not taken into account.
///
/// # Arguments
///
/// * 'rate' - the cached exchange rate
/// * 'now' - the current instant
pub fn is_up_to_date(rate: &ExchangeRate, now: DateTime<Utc>) -> bool {
    is_date_up_to_date(rate.date, now)
}

/// Same as `is_up_to_date` but for a publication date given as YYYY-MM-DD text.
/// A date that can't be parsed is treated as stale.
///
/// # Arguments
///
/// * 'date' - the publication date of the cached rate
/// * 'now' - the current instant
pub fn is_published_up_to_date(date: &str, now: DateTime<Utc>) -> bool {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .is_ok_and(|date| is_date_up_to_date(date, now))
}

fn is_date_up_to_date(date: NaiveDate, now: DateTime<Utc>) -> bool {
    let cet_now = now.with_timezone(&CET);
    let days_ago = (cet_now.date_naive() - date).num_days();
    let published_on_friday = date.weekday() == Weekday::Fri;
    let before_cutoff = cet_now.hour() < PUBLICATION_HOUR;

    if days_ago <= 0 {
        true
    } else if before_cutoff && days_ago <= 1 {
        true
    } else if published_on_friday && days_ago <= 2 {
        true
    } else {
        published_on_friday && days_ago <= 3 && before_cutoff
    }
}
