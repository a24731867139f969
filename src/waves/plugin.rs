//! Waves plugin - population bookkeeping.

use bevy::prelude::*;

use super::components::WaveState;
use super::systems;
use crate::core::{GameState, SimSet};

/// Waves plugin - starts wave 1 on entry and escalates on clear.
pub struct WavesPlugin;

impl Plugin for WavesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WaveState>()
            .add_systems(OnEnter(GameState::InGame), systems::begin_first_wave)
            .add_systems(Update, systems::check_wave_clear.in_set(SimSet::Waves));
    }
}
