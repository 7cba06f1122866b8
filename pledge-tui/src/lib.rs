//! PLEDGE TUI library exports.

pub mod config;
pub mod error;
pub mod events;
pub mod keys;
pub mod loader;
pub mod logging;
pub mod notifications;
pub mod state;
pub mod theme;
pub mod traits;
pub mod views;
pub mod widgets;
