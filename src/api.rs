//! HTTP client for the CoinGecko `/coins/markets` endpoint.

use tracing::{debug, info};

use crate::Result;
use crate::config::ApiConfig;
use crate::models::{CoinQuote, Currency};
use crate::query::CoinFetcher;

/// Header carrying a CoinGecko demo API key.
const API_KEY_HEADER: &str = "x-cg-demo-api-key";

/// Fetches pages of coin quotes ordered by market cap.
#[derive(Clone, Debug)]
pub struct CoinGeckoClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    per_page: u32,
}

impl CoinGeckoClient {
    /// Builds a client from the API configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CoinboardError::Http`](crate::CoinboardError::Http) if the
    /// underlying HTTP client cannot be constructed.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("coinboard/", env!("CARGO_PKG_VERSION")))
            .build()?;

        info!(base_url = %config.base_url, per_page = config.per_page, "Market data client ready");

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            per_page: config.per_page,
        })
    }

    /// Returns the markets URL for a page, without the API key.
    pub fn markets_url(&self, page: u32, currency: Currency) -> String {
        format!(
            "{}/coins/markets?vs_currency={}&order=market_cap_desc&per_page={}&page={}&sparkline=false",
            self.base_url,
            currency.as_str(),
            self.per_page,
            page
        )
    }

    /// Fetches one page of quotes.
    ///
    /// # Errors
    ///
    /// Returns [`CoinboardError::Http`](crate::CoinboardError::Http) on
    /// transport failures or an undecodable body, and
    /// [`CoinboardError::Api`](crate::CoinboardError::Api) when the API
    /// answers with a non-success status.
    pub async fn fetch_markets(&self, page: u32, currency: Currency) -> Result<Vec<CoinQuote>> {
        let url = self.markets_url(page, currency);
        debug!(%url, "GET coins/markets");

        let mut request = self.http.get(&url);
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(crate::CoinboardError::Api {
                status: status.as_u16(),
                message: api_error_message(&body)
                    .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string()),
            });
        }

        let coins: Vec<CoinQuote> = response.json().await?;
        Ok(coins)
    }
}

impl CoinFetcher for CoinGeckoClient {
    async fn fetch_coins(&self, page: u32, currency: Currency) -> Result<Vec<CoinQuote>> {
        self.fetch_markets(page, currency).await
    }
}

/// Extracts the message from an API error body.
///
/// CoinGecko reports errors either as `{"error": "..."}` or as
/// `{"status": {"error_message": "..."}}`.
fn api_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value["error"]
        .as_str()
        .or_else(|| value["status"]["error_message"].as_str())
        .map(String::from)
}
