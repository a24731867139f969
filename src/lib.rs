//! Wave Brawler - a 2D sprite-sheet arena brawler in Bevy.
//!
//! One player character holds an arena against escalating waves of
//! hostiles. Everything gameplay-visible hangs off each entity's activity
//! state: the state picks the sprite row and frame rate, gates movement
//! speed, and decides when a swing's single damage attempt fires.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, simulation clock, tuning data
//! - **Input**: Keyboard adapter producing the per-tick action intent
//! - **Player**: Activity state machine, movement, timeline
//! - **Enemies**: Hostile behavior, swing scheduling, spawning
//! - **Combat**: Strike resolution, damage, stagger, death routing
//! - **Waves**: Population escalation and wave-clear detection
//! - **Rendering**: Sprite sheets and simulation-to-sprite sync
//! - **UI**: HUD readouts, game-over screen

pub mod animation;
pub mod combat;
pub mod core;
pub mod enemies;
pub mod input;
pub mod player;
pub mod rendering;
pub mod ui;
pub mod waves;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct WaveBrawlerPlugin;

impl Plugin for WaveBrawlerPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Input adapter
            .add_plugins(input::InputPlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // Enemy systems
            .add_plugins(enemies::EnemyPlugin)

            // Combat systems
            .add_plugins(combat::CombatPlugin)

            // Wave progression
            .add_plugins(waves::WavesPlugin)

            // Rendering systems
            .add_plugins(rendering::RenderingPlugin)

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}
