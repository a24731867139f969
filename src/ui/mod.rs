//! UI module - HUD readouts and the game-over screen.

mod hud;
mod plugin;

pub use plugin::UiPlugin;
