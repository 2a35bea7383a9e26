pub mod currency;
pub mod region;
pub mod time_interval;
pub mod price_point;
pub mod day_ahead_prices;
pub mod exchange_rate;
pub mod price_limits;
