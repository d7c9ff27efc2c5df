//! Full-screen views, one per route.

pub mod coin_details;
pub mod coin_table;
