//! Application configuration loaded from environment variables.
//!
//! Every setting has a default, so the board runs with no environment at
//! all against the public CoinGecko endpoint:
//! - `COINBOARD_API_URL` — market data API base URL
//! - `COINGECKO_API_KEY` — optional demo API key
//! - `COINBOARD_PER_PAGE` — coins per page (1..=250)
//! - `COINBOARD_HTTP_TIMEOUT_SECS` — request timeout in seconds (at least 1)
//! - `COINBOARD_STALE_SECS` / `COINBOARD_CACHE_SECS` — query cache windows
//! - `COINBOARD_CURRENCY` — initial display currency (`usd` or `inr`)
//! - `COINBOARD_WIDE_BREAKPOINT` — terminal width for the table layout
//! - `COINBOARD_LOG_FILE` / `COINBOARD_LOG_LEVEL` — log destination and level

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use tracing::Level;

use crate::models::currency::Currency;

/// Default public REST endpoint.
const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3";

const DEFAULT_PER_PAGE: u32 = 10;

/// Upper bound accepted by `/coins/markets`.
const MAX_PER_PAGE: u32 = 250;

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Both cache windows default to two minutes.
const DEFAULT_STALE_SECS: u64 = 120;
const DEFAULT_CACHE_SECS: u64 = 120;

/// Terminal width at which the four-column table replaces the cards.
pub const DEFAULT_WIDE_BREAKPOINT: u16 = 80;

const DEFAULT_LOG_FILE: &str = "coinboard.log";

/// Top-level application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub cache: CacheConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
}

/// Market data API settings.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub per_page: u32,
    pub timeout: Duration,
}

/// Query cache windows.
#[derive(Debug, Clone, Copy)]
pub struct CacheConfig {
    /// How long a fetched page is served without refetching.
    pub stale_time: Duration,
    /// How long an inactive page is retained before eviction.
    pub cache_time: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            stale_time: Duration::from_secs(DEFAULT_STALE_SECS),
            cache_time: Duration::from_secs(DEFAULT_CACHE_SECS),
        }
    }
}

/// Terminal UI settings.
#[derive(Debug, Clone, Copy)]
pub struct UiConfig {
    pub currency: Currency,
    pub wide_breakpoint: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            wide_breakpoint: DEFAULT_WIDE_BREAKPOINT,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub file: PathBuf,
    pub level: Level,
}

/// Loads the application configuration from environment variables.
///
/// # Errors
///
/// Returns [`CoinboardError::Config`](crate::CoinboardError::Config) if a
/// variable is set to a value that cannot be parsed or is out of range.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let base_url = non_empty_var("COINBOARD_API_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let api_key = non_empty_var("COINGECKO_API_KEY");

    let per_page = parsed_var("COINBOARD_PER_PAGE", DEFAULT_PER_PAGE)?;
    if per_page == 0 || per_page > MAX_PER_PAGE {
        return Err(crate::CoinboardError::Config(format!(
            "COINBOARD_PER_PAGE must be between 1 and {MAX_PER_PAGE}, got {per_page}"
        )));
    }

    let timeout_secs: u64 = parsed_var("COINBOARD_HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)?;
    if timeout_secs == 0 {
        return Err(crate::CoinboardError::Config(
            "COINBOARD_HTTP_TIMEOUT_SECS must be at least 1".to_string(),
        ));
    }
    let timeout = Duration::from_secs(timeout_secs);

    let cache = CacheConfig {
        stale_time: Duration::from_secs(parsed_var("COINBOARD_STALE_SECS", DEFAULT_STALE_SECS)?),
        cache_time: Duration::from_secs(parsed_var("COINBOARD_CACHE_SECS", DEFAULT_CACHE_SECS)?),
    };

    let ui = UiConfig {
        currency: parsed_var("COINBOARD_CURRENCY", Currency::default())?,
        wide_breakpoint: parsed_var("COINBOARD_WIDE_BREAKPOINT", DEFAULT_WIDE_BREAKPOINT)?,
    };

    let log = LogConfig {
        file: non_empty_var("COINBOARD_LOG_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
        level: parsed_var("COINBOARD_LOG_LEVEL", Level::INFO)?,
    };

    Ok(AppConfig {
        api: ApiConfig {
            base_url,
            api_key,
            per_page,
            timeout,
        },
        cache,
        ui,
        log,
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

/// Parses an environment variable, falling back to `default` when unset.
fn parsed_var<T>(name: &str, default: T) -> crate::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match non_empty_var(name) {
        Some(raw) => raw.trim().parse().map_err(|e| {
            crate::CoinboardError::Config(format!("invalid {name} value {raw:?}: {e}"))
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_VARS: [&str; 10] = [
        "COINBOARD_API_URL",
        "COINGECKO_API_KEY",
        "COINBOARD_PER_PAGE",
        "COINBOARD_HTTP_TIMEOUT_SECS",
        "COINBOARD_STALE_SECS",
        "COINBOARD_CACHE_SECS",
        "COINBOARD_CURRENCY",
        "COINBOARD_WIDE_BREAKPOINT",
        "COINBOARD_LOG_FILE",
        "COINBOARD_LOG_LEVEL",
    ];

    /// Serializes the tests in this module; they share process env.
    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    /// Temporarily sets env vars (clearing every other config var), runs
    /// `f`, then restores the originals.
    ///
    /// # Safety
    ///
    /// Only this module touches these variables, and [`ENV_LOCK`] keeps
    /// its tests from overlapping.
    fn with_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let originals: Vec<(&str, Option<String>)> = ALL_VARS
            .iter()
            .map(|k| (*k, std::env::var(k).ok()))
            .collect();

        for k in ALL_VARS {
            // SAFETY: ENV_LOCK is held; no other test reads these vars.
            unsafe {
                match vars.iter().find(|(name, _)| *name == k) {
                    Some((_, val)) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }

        f();

        for (k, original) in originals {
            // SAFETY: restoring original values, same single-threaded context.
            unsafe {
                match original {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    #[test]
    fn defaults_without_env_vars() {
        with_env(&[], || {
            let config = fetch_config().unwrap();
            assert_eq!(config.api.base_url, DEFAULT_API_URL);
            assert!(config.api.api_key.is_none());
            assert_eq!(config.api.per_page, 10);
            assert_eq!(config.api.timeout, Duration::from_secs(10));
            assert_eq!(config.cache.stale_time, Duration::from_secs(120));
            assert_eq!(config.cache.cache_time, Duration::from_secs(120));
            assert_eq!(config.ui.currency, Currency::Usd);
            assert_eq!(config.ui.wide_breakpoint, DEFAULT_WIDE_BREAKPOINT);
            assert_eq!(config.log.file, PathBuf::from("coinboard.log"));
            assert_eq!(config.log.level, Level::INFO);
        });
    }

    #[test]
    fn overrides_from_env() {
        with_env(
            &[
                ("COINBOARD_API_URL", "http://localhost:8080/api/"),
                ("COINGECKO_API_KEY", "demo-key"),
                ("COINBOARD_PER_PAGE", "25"),
                ("COINBOARD_STALE_SECS", "30"),
                ("COINBOARD_CACHE_SECS", "300"),
                ("COINBOARD_CURRENCY", "INR"),
                ("COINBOARD_LOG_LEVEL", "debug"),
            ],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.api.base_url, "http://localhost:8080/api");
                assert_eq!(config.api.api_key.as_deref(), Some("demo-key"));
                assert_eq!(config.api.per_page, 25);
                assert_eq!(config.cache.stale_time, Duration::from_secs(30));
                assert_eq!(config.cache.cache_time, Duration::from_secs(300));
                assert_eq!(config.ui.currency, Currency::Inr);
                assert_eq!(config.log.level, Level::DEBUG);
            },
        );
    }

    #[test]
    fn rejects_out_of_range_page_size() {
        with_env(&[("COINBOARD_PER_PAGE", "0")], || {
            let err = fetch_config().unwrap_err();
            assert!(err.to_string().contains("between 1 and 250"));
        });
        with_env(&[("COINBOARD_PER_PAGE", "251")], || {
            assert!(fetch_config().is_err());
        });
    }

    #[test]
    fn rejects_zero_timeout() {
        with_env(&[("COINBOARD_HTTP_TIMEOUT_SECS", "0")], || {
            let err = fetch_config().unwrap_err();
            assert!(err.to_string().contains("COINBOARD_HTTP_TIMEOUT_SECS"));
        });
        with_env(&[("COINBOARD_HTTP_TIMEOUT_SECS", "1")], || {
            let config = fetch_config().unwrap();
            assert_eq!(config.api.timeout, Duration::from_secs(1));
        });
    }

    #[test]
    fn rejects_unparseable_values() {
        with_env(&[("COINBOARD_STALE_SECS", "soon")], || {
            let err = fetch_config().unwrap_err();
            assert!(err.to_string().contains("COINBOARD_STALE_SECS"));
        });
        with_env(&[("COINBOARD_CURRENCY", "eur")], || {
            let err = fetch_config().unwrap_err();
            assert!(err.to_string().contains("COINBOARD_CURRENCY"));
        });
    }

    #[test]
    fn empty_values_treated_as_absent() {
        with_env(
            &[
                ("COINBOARD_API_URL", ""),
                ("COINGECKO_API_KEY", ""),
                ("COINBOARD_PER_PAGE", ""),
            ],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.api.base_url, DEFAULT_API_URL);
                assert!(config.api.api_key.is_none());
                assert_eq!(config.api.per_page, DEFAULT_PER_PAGE);
            },
        );
    }
}
