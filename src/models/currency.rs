//! Display currency shared by every quote on a page.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Currencies the board can request prices in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    #[default]
    Usd,
    Inr,
}

impl Currency {
    /// Returns the `vs_currency` value expected by the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Usd => "usd",
            Currency::Inr => "inr",
        }
    }

    /// Returns the symbol prefixed to prices and market caps.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Inr => "₹",
            _ => "$",
        }
    }

    /// Returns the other supported currency.
    pub fn toggled(&self) -> Self {
        match self {
            Currency::Usd => Currency::Inr,
            Currency::Inr => Currency::Usd,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "usd" => Ok(Currency::Usd),
            "inr" => Ok(Currency::Inr),
            other => Err(format!("unsupported currency {other:?} (expected usd or inr)")),
        }
    }
}
