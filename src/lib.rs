//! Paginated cryptocurrency price board for the terminal.
//!
//! Fetches pages of coin quotes from the CoinGecko markets API, caches
//! them per `(page, currency)` key and renders them as a table or as
//! cards depending on terminal width.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod pagination;
pub mod query;
pub mod router;
pub mod store;
pub mod tui;

pub use error::{CoinboardError, Result};
