//! # Money Types
//!
//! Currency and price types for feegate.
//! Amounts are always held in the smallest currency unit (paise for INR).

use serde::{Deserialize, Serialize};

/// Supported currencies (ISO 4217)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Indian rupee
    #[default]
    INR,
}

impl Currency {
    /// Returns the ISO 4217 currency code, as the gateway expects it
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
        }
    }

    /// Number of minor units in one major unit
    pub fn minor_units_per_major(&self) -> i64 {
        match self {
            Currency::INR => 100,
        }
    }

    fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "₹",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Price with amount in smallest currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in smallest currency unit
    pub amount: i64,
    /// Currency
    pub currency: Currency,
}

impl Price {
    /// Create a price from whole major units (rupees)
    pub const fn from_major(amount: i64, currency: Currency) -> Self {
        let per_major = match currency {
            Currency::INR => 100,
        };
        Self {
            amount: amount * per_major,
            currency,
        }
    }

    /// Create a price from minor units (paise)
    pub const fn from_minor(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Format for display (e.g., "₹173400.00")
    pub fn display(&self) -> String {
        let per_major = self.currency.minor_units_per_major();
        format!(
            "{}{}.{:02}",
            self.currency.symbol(),
            self.amount / per_major,
            (self.amount % per_major).abs()
        )
    }
}
