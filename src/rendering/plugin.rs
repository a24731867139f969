//! Rendering plugin - camera, sheets, and sprite synchronization.

use bevy::prelude::*;

use super::sheet::{load_sprite_sheets, SpriteSheets};
use super::systems;
use crate::core::SimSet;

/// Rendering plugin - the adapter between simulation state and sprites.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (systems::setup_scene, load_sprite_sheets))
            .add_systems(
                Update,
                (
                    systems::attach_sprites,
                    systems::sync_player_sprite,
                    systems::sync_enemy_sprites,
                )
                    .chain()
                    .after(SimSet::Waves)
                    .run_if(resource_exists::<SpriteSheets>),
            );
    }
}
