//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. All simulation
//! systems are gated on `InGame`, so entering `GameOver` freezes the world
//! in place while rendering and the HUD keep running.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// The game moves through these states linearly:
/// - Start in `Loading` to read tuning data and request sprite sheets
/// - Enter `InGame` once setup is done; wave 1 starts on entry
/// - `GameOver` when the player's health reaches zero; the arena stays
///   visible but nothing in it moves anymore
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - loading tuning data and sprite sheet handles
    #[default]
    Loading,
    /// Active gameplay
    InGame,
    /// Player has died; simulation is frozen, restart available
    GameOver,
}
