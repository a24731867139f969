//! Player plugin - state machine, movement, and timeline systems.

use bevy::prelude::*;

use super::systems;
use crate::core::{GameState, SimSet};

/// Player plugin - handles player spawning and per-tick updates.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::InGame), systems::spawn_player)
            .add_systems(
                Update,
                (
                    systems::apply_player_intent,
                    systems::move_player,
                    systems::advance_player_timeline,
                )
                    .chain()
                    .in_set(SimSet::Player),
            );
    }
}
