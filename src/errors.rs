use chrono::{DateTime, RoundingError, Utc};
use thiserror::Error;
use crate::models::currency::Currency;
use crate::models::region::Region;

/// Errors from the price resolver and the cheapest window search
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PriceError {
    #[error("PriceError::OutOfRange: {0} is outside the covered range")]
    OutOfRange(DateTime<Utc>),
    #[error("PriceError::NoMatchingSeries: no series covers {0}")]
    NoMatchingSeries(DateTime<Utc>),
    #[error("PriceError::NoMatchingPoint: no point covers {0}")]
    NoMatchingPoint(DateTime<Utc>),
    #[error("PriceError::InsufficientData: {available} prices available, {requested} hours requested")]
    InsufficientData { available: usize, requested: usize },
    #[error("PriceError::InvalidDuration: duration must be at least one hour")]
    InvalidDuration,
}

/// Errors from deriving values out of the application state
#[derive(Error, Debug, PartialEq)]
pub enum StateError {
    #[error("StateError::NoPrices: no day ahead prices loaded")]
    NoPrices,
    #[error("StateError::NoExchangeRate: no exchange rate from {from} to {to}")]
    NoExchangeRate { from: Currency, to: Currency },
    #[error("StateError::RegionMismatch: loaded prices are for {loaded}, selected region is {selected}")]
    RegionMismatch { loaded: Region, selected: Region },
    #[error("StateError::Price: {0}")]
    Price(#[from] PriceError),
    #[error("StateError::Rounding: {0}")]
    Rounding(#[from] RoundingError),
}

/// Errors from loading price and exchange rate documents
#[derive(Error, Debug)]
pub enum DataError {
    #[error("DataError::File: {0}")]
    File(String),
    #[error("DataError::Document: {0}")]
    Document(String),
    #[error("DataError::UnsupportedResolution: {0}")]
    UnsupportedResolution(String),
    #[error("DataError::InvalidRecord: {0}")]
    InvalidRecord(String),
}
impl From<std::io::Error> for DataError {
    fn from(e: std::io::Error) -> Self { DataError::File(e.to_string()) }
}
impl From<serde_json::Error> for DataError {
    fn from(e: serde_json::Error) -> Self { DataError::Document(e.to_string()) }
}
impl From<glob::PatternError> for DataError {
    fn from(e: glob::PatternError) -> Self { DataError::File(e.to_string()) }
}

#[derive(Error, Debug)]
#[error("ConfigError: {0}")]
pub struct ConfigError(pub String);
impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self { ConfigError(e.to_string()) }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self { ConfigError(e.to_string()) }
}
impl From<&str> for ConfigError {
    fn from(e: &str) -> Self { ConfigError(e.to_string()) }
}

#[derive(Error, Debug)]
#[error("SpotPriceInitError: {0}")]
pub struct SpotPriceInitError(pub String);
impl From<ConfigError> for SpotPriceInitError {
    fn from(e: ConfigError) -> Self { SpotPriceInitError(e.to_string()) }
}
impl From<DataError> for SpotPriceInitError {
    fn from(e: DataError) -> Self { SpotPriceInitError(e.to_string()) }
}
