//! Deserialization tests for the markets payload.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use coinboard::models::{CoinQuote, Currency, QueryKey};

const MARKETS_JSON: &str = include_str!("fixtures/markets.json");

#[test]
fn test_markets_page_deserializes_in_order() {
    let coins: Vec<CoinQuote> =
        serde_json::from_str(MARKETS_JSON).expect("Failed to deserialize markets page");

    let ids: Vec<&str> = coins.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["bitcoin", "ethereum", "fresh-listing"]);

    let btc = &coins[0];
    assert_eq!(btc.name, "Bitcoin");
    assert_eq!(btc.symbol, "btc");
    assert_eq!(
        btc.image,
        "https://coin-images.coingecko.com/coins/images/1/large/bitcoin.png"
    );
    assert_eq!(btc.current_price, dec!(67187.33));
    assert_eq!(btc.price_change_24h, dec!(1023.45));
    assert_eq!(btc.market_cap, dec!(1325138560233));

    assert_eq!(coins[1].price_change_24h, dec!(-42.118));
}

#[test]
fn test_null_numbers_become_zero() {
    let coins: Vec<CoinQuote> = serde_json::from_str(MARKETS_JSON).unwrap();
    let fresh = &coins[2];

    assert_eq!(fresh.current_price, dec!(0.0421));
    assert_eq!(fresh.market_cap, Decimal::ZERO);
    assert_eq!(fresh.price_change_24h, Decimal::ZERO);
}

#[test]
fn test_missing_optional_fields_default() {
    let json = r#"{"id": "dogecoin", "symbol": "doge", "name": "Dogecoin"}"#;
    let coin: CoinQuote = serde_json::from_str(json).unwrap();

    assert_eq!(coin.image, "");
    assert_eq!(coin.current_price, Decimal::ZERO);
}

#[test]
fn test_missing_id_is_rejected() {
    let json = r#"{"symbol": "doge", "name": "Dogecoin", "current_price": 0.12}"#;
    assert!(serde_json::from_str::<CoinQuote>(json).is_err());
}

#[test]
fn test_currency_wire_names() {
    assert_eq!(serde_json::to_string(&Currency::Inr).unwrap(), r#""inr""#);
    let currency: Currency = serde_json::from_str(r#""usd""#).unwrap();
    assert_eq!(currency, Currency::Usd);
}

#[test]
fn test_query_key_display() {
    assert_eq!(QueryKey::new(3, Currency::Inr).to_string(), "coins/3/inr");
}
