use std::sync::Arc;

use coinboard::CoinboardError;
use coinboard::api::CoinGeckoClient;
use coinboard::config::fetch_config;
use coinboard::logging::init_logging;
use coinboard::tui::{self, App};

#[tokio::main]
async fn main() -> Result<(), CoinboardError> {
    let app_config = fetch_config()?;
    init_logging(&app_config.log)?;

    let client = Arc::new(CoinGeckoClient::new(&app_config.api)?);
    let app = App::new(app_config.ui, app_config.cache);

    tui::install_panic_hook();
    let mut terminal = tui::setup_terminal()?;
    let result = tui::run(&mut terminal, app, client).await;
    tui::restore_terminal(&mut terminal)?;

    result
}
