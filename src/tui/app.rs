//! Application state for the TUI.

use std::time::Instant;

use ratatui::layout::Rect;

use crate::config::{CacheConfig, UiConfig};
use crate::models::{CoinQuote, Currency, QueryKey};
use crate::pagination::Pagination;
use crate::query::{CoinPage, QueryController, QueryState};
use crate::router::{Router, details_path};
use crate::store::{CurrencyHandle, CurrencyStore};

/// Central application state container.
pub struct App {
    /// Current screen and navigation history.
    pub router: Router,
    /// Writable side of the currency preference.
    pub currency_store: CurrencyStore,
    /// The paginated coin table.
    pub table: CoinTable,
    /// Terminal width at which the table layout is used.
    pub wide_breakpoint: u16,
    /// Last known terminal size, used to map mouse clicks to rows.
    pub viewport: Rect,
    /// Frame counter for the loading spinner.
    pub spinner_frame: usize,
    /// Flag to signal application should quit.
    pub should_quit: bool,
}

impl App {
    /// Creates the application with an empty cache.
    pub fn new(ui: UiConfig, cache: CacheConfig) -> Self {
        let currency_store = CurrencyStore::new(ui.currency);
        let table = CoinTable::new(QueryController::new(cache), currency_store.subscribe());
        Self {
            router: Router::new(),
            currency_store,
            table,
            wide_breakpoint: ui.wide_breakpoint,
            viewport: Rect::default(),
            spinner_frame: 0,
            should_quit: false,
        }
    }

    /// Issues the first query. Returns the key to fetch, if any.
    pub fn start(&mut self, now: Instant) -> Option<QueryKey> {
        self.table.load(now)
    }

    /// Switches the shared currency preference to the other currency.
    pub fn toggle_currency(&mut self) {
        let next = self.currency_store.current().toggled();
        self.currency_store.set(next);
    }

    /// Selects row `index` and navigates to its detail screen.
    ///
    /// Returns `false` if no loaded row has that index.
    pub fn activate_row(&mut self, index: usize) -> bool {
        let Some(id) = self
            .table
            .coins()
            .and_then(|coins| coins.get(index))
            .map(|coin| coin.id.clone())
        else {
            return false;
        };
        self.table.selected = index;
        self.router.navigate(&details_path(&id));
        true
    }

    /// Navigates to the detail screen of the selected row.
    pub fn open_selected(&mut self) -> bool {
        self.activate_row(self.table.selected)
    }

    /// Records the terminal size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Rect::new(0, 0, width, height);
    }

    /// Advances the loading spinner.
    pub fn tick_spinner(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }
}

/// State of the paginated coin table: query, page and row selection.
pub struct CoinTable {
    pub query: QueryController,
    pub pagination: Pagination,
    /// Read-only view of the currency preference.
    pub currency: CurrencyHandle,
    /// Index of the highlighted row on the current page.
    pub selected: usize,
}

impl CoinTable {
    pub fn new(query: QueryController, currency: CurrencyHandle) -> Self {
        Self {
            query,
            pagination: Pagination::new(),
            currency,
            selected: 0,
        }
    }

    /// Requests the page for the current `(page, currency)` key.
    pub fn load(&mut self, now: Instant) -> Option<QueryKey> {
        let key = QueryKey::new(self.pagination.page(), self.currency.mark_seen());
        self.query.request(key, now)
    }

    /// Reloads if the currency preference changed since the last load.
    pub fn sync_currency(&mut self, now: Instant) -> Option<QueryKey> {
        if self.currency.has_changed() {
            self.selected = 0;
            self.load(now)
        } else {
            None
        }
    }

    /// Moves to the next page and requests it.
    pub fn next_page(&mut self, now: Instant) -> Option<QueryKey> {
        self.pagination.next();
        self.selected = 0;
        self.load(now)
    }

    /// Moves to the previous page and requests it; no-op on page 1.
    pub fn previous_page(&mut self, now: Instant) -> Option<QueryKey> {
        if !self.pagination.previous() {
            return None;
        }
        self.selected = 0;
        self.load(now)
    }

    /// Currency the displayed page is denominated in.
    pub fn display_currency(&self) -> Currency {
        self.query
            .current_key()
            .map(|key| key.currency)
            .unwrap_or_else(|| self.currency.current())
    }

    /// Loaded quotes for the current key, if the query succeeded.
    pub fn coins(&self) -> Option<&CoinPage> {
        match self.query.state() {
            QueryState::Success(coins) => Some(coins),
            _ => None,
        }
    }

    /// Finds a loaded quote by id.
    pub fn coin(&self, id: &str) -> Option<&CoinQuote> {
        self.coins()?.iter().find(|coin| coin.id == id)
    }

    pub fn selected_coin(&self) -> Option<&CoinQuote> {
        self.coins()?.get(self.selected)
    }

    pub fn select_next(&mut self) {
        let len = self.coins().map_or(0, |coins| coins.len());
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keeps the selection inside the loaded page.
    pub fn clamp_selection(&mut self) {
        let len = self.coins().map_or(0, |coins| coins.len());
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}
