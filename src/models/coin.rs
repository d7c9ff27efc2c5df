use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// One row of the `/coins/markets` response.
///
/// Only the fields the board displays are kept; the rest of the payload
/// is ignored.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CoinQuote {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub current_price: Decimal,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub price_change_24h: Decimal,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub market_cap: Decimal,
}

/// Newly listed coins report `null` for numeric fields.
fn null_as_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Decimal>::deserialize(deserializer).map(Option::unwrap_or_default)
}
