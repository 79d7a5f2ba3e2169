//! HUD Components
//!
//! Stateless rendering components for in-game readouts. They are created
//! once per session and drawn every frame from the session's stats.
//!
//! # Available Components
//!
//! - [`Bar`] - gauge bar (fuel, black hole life)
//! - [`Scoreboard`] - corner text block, plus ship pips for the duel

pub mod bar;
pub mod scoreboard;

pub use bar::{Bar, BarStyle};
pub use scoreboard::{draw_pips, Corner, Scoreboard};
