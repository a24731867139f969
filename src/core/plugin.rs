//! Core plugin that sets up game states, events, and the simulation clock.

use bevy::prelude::*;

use super::clock::{tick_sim_clock, SimClock};
use super::events::*;
use super::states::*;
use super::tuning::GameTuning;

/// Ordering of one simulation tick.
///
/// The sets run chained, so each tick is total-ordered: clock sample,
/// input intent, player update, enemy updates, combat resolution, wave
/// bookkeeping. All of them are gated on `InGame`; render/HUD systems run
/// outside these sets and keep running after game over.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimSet {
    Clock,
    Input,
    Player,
    Enemies,
    Combat,
    Waves,
}

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, InGame, GameOver)
/// - Global events (DamageEvent, DeathEvent)
/// - The capped simulation clock and tick ordering
/// - Tuning data loaded from RON
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()

            // Tuning is loaded once, before anything reads it
            .insert_resource(GameTuning::load())
            .init_resource::<SimClock>()

            // Register global events
            .add_event::<DamageEvent>()
            .add_event::<DeathEvent>()

            // One total order for the whole tick
            .configure_sets(
                Update,
                (
                    SimSet::Clock,
                    SimSet::Input,
                    SimSet::Player,
                    SimSet::Enemies,
                    SimSet::Combat,
                    SimSet::Waves,
                )
                    .chain()
                    .run_if(in_state(GameState::InGame)),
            )
            .add_systems(Update, tick_sim_clock.in_set(SimSet::Clock))

            // Loading state - sheets load asynchronously, so gameplay can
            // start immediately
            .add_systems(OnEnter(GameState::Loading), finish_loading);
    }
}

/// Immediately transition from Loading to InGame.
fn finish_loading(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::InGame);
}
