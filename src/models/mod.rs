//! Market data models.
//!
//! Contains the coin quote returned by the `/coins/markets` endpoint and
//! the display currency that keys every page of quotes.

pub mod coin;
pub mod currency;

pub use coin::CoinQuote;
pub use currency::Currency;

/// Identifies one page of quotes in the query cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct QueryKey {
    /// 1-indexed page number.
    pub page: u32,
    pub currency: Currency,
}

impl QueryKey {
    pub fn new(page: u32, currency: Currency) -> Self {
        Self { page, currency }
    }
}

impl std::fmt::Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "coins/{}/{}", self.page, self.currency)
    }
}
