//! Enemy plugin - registers enemy behavior systems.

use bevy::prelude::*;

use super::ai;
use crate::core::SimSet;

/// Enemy plugin - seek movement, swing scheduling, and timelines.
///
/// Spawning is driven by the waves plugin; hit reactions by the combat
/// plugin.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                ai::seek_player,
                ai::schedule_attacks,
                ai::advance_enemy_timelines,
            )
                .chain()
                .in_set(SimSet::Enemies),
        );
    }
}
