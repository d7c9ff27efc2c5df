//! Terminal user interface for the coin board.
//!
//! Provides the Ratatui screens, the application state they render and
//! the message loop that ties terminal input and fetch results together.

pub mod app;
pub mod components;
pub mod event;
pub mod format;
pub mod runner;
pub mod screens;
pub mod terminal;
pub mod ui;

pub use app::{App, CoinTable};
pub use event::{Action, Event, Message, update};
pub use runner::run;
pub use terminal::{Tui, install_panic_hook, restore_terminal, setup_terminal};
pub use ui::render;
