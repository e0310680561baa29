//! Terminal UI screens.
//!
//! The UI owns all terminal and input state; the simulation core behind
//! it is a pure function and exposes nothing mutable back.

mod results_table;
mod seed_entry;

pub use results_table::{draw_results, rarity_color};
pub use seed_entry::SeedEntryScreen;
