//! Player module - player entity, state machine, and movement.

mod components;
mod plugin;
mod systems;

pub use components::*;
pub use plugin::PlayerPlugin;
