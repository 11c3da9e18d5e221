//! Terminal UI for the parklot binary.
//!
//! Layers, from smallest to largest: `theme` tokens, `primitives`,
//! `widgets`, `blocks`, then whole-screen `views`.

pub mod blocks;
pub mod console;
pub mod context;
pub mod error;
pub mod json;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;

/// Render a monetary amount the way every screen shows it
pub fn money(amount: f64) -> String {
    format!("${:.2}", amount)
}
