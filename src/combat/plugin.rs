//! Combat plugin - strike resolution, damage, and death routing.

use bevy::prelude::*;

use super::components::Score;
use super::systems;
use crate::core::SimSet;

/// Combat plugin - handles all combat systems.
///
/// The chain matters: strikes produce damage events, damage produces death
/// events, stagger reacts only to survivable hits, and routing consumes the
/// deaths - all within one tick.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Score>().add_systems(
            Update,
            (
                systems::tick_invulnerability,
                systems::player_strike,
                systems::enemy_strikes,
                systems::apply_damage,
                systems::stagger_on_hit,
                systems::route_deaths,
            )
                .chain()
                .in_set(SimSet::Combat),
        );
    }
}
