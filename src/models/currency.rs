use std::fmt;
use serde::{Deserialize, Serialize};

/// Currencies that day ahead prices are quoted or presented in
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Eur,
    Sek,
    Nok,
    Dkk,
}

impl Currency {
    /// ISO 4217 code of the currency
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Sek => "SEK",
            Currency::Nok => "NOK",
            Currency::Dkk => "DKK",
        }
    }

    /// Name of the hundredth part, which is what prices per kWh are usually shown in
    pub fn subunit(&self) -> &'static str {
        match self {
            Currency::Eur => "cent",
            Currency::Sek | Currency::Nok | Currency::Dkk => "öre",
        }
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
