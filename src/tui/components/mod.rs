//! Reusable widgets shared by the screens.

pub mod page_loader;
pub mod pagination_bar;
pub mod status_bar;
