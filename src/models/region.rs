use std::fmt;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use crate::models::currency::Currency;

/// Day ahead bidding zones prices can be shown for
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Region {
    SE1,
    SE2,
    SE3,
    SE4,
    FI,
    DK1,
    DK2,
    NO1,
}

impl Region {
    /// ENTSO-E area code (EIC) for the bidding zone
    pub fn area_code(&self) -> &'static str {
        match self {
            Region::SE1 => "10Y1001A1001A44P",
            Region::SE2 => "10Y1001A1001A45N",
            Region::SE3 => "10Y1001A1001A46L",
            Region::SE4 => "10Y1001A1001A47J",
            Region::FI  => "10YFI-1--------U",
            Region::DK1 => "10YDK-1--------W",
            Region::DK2 => "10YDK-2--------M",
            Region::NO1 => "10YNO-1--------2",
        }
    }

    /// Timezone in which calendar days and hours are presented for the region
    pub fn timezone(&self) -> Tz {
        match self {
            Region::SE1 | Region::SE2 | Region::SE3 | Region::SE4 => chrono_tz::Europe::Stockholm,
            Region::FI => chrono_tz::Europe::Helsinki,
            Region::DK1 | Region::DK2 => chrono_tz::Europe::Copenhagen,
            Region::NO1 => chrono_tz::Europe::Oslo,
        }
    }

    /// Currency prices are presented in for the region
    pub fn currency(&self) -> Currency {
        match self {
            Region::SE1 | Region::SE2 | Region::SE3 | Region::SE4 => Currency::Sek,
            Region::FI => Currency::Eur,
            Region::DK1 | Region::DK2 => Currency::Dkk,
            Region::NO1 => Currency::Nok,
        }
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
