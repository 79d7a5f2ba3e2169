//! Screen-Space GUI
//!
//! Overlays drawn at fixed screen positions on top of the play field. Both
//! components are stateful and keyboard-driven, and draw with SDL2
//! primitives plus the bitmap font.
//!
//! # Available Components
//!
//! - [`Menu`] - wrap-around list menu (main menu, lobby, pause, ship pickers)
//! - [`EndScreen`] - timed GAME OVER / victory overlay

pub mod end_screen;
pub mod menu;

pub use end_screen::EndScreen;
pub use menu::Menu;
