//! Waves module - enemy population escalation and wave-clear detection.

mod components;
mod plugin;
mod systems;

pub use components::WaveState;
pub use plugin::WavesPlugin;
