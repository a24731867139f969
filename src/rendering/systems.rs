//! Sprite synchronization - mapping simulation state onto renderables.
//!
//! The simulation never touches `Sprite` fields itself; these systems read
//! the renderable state (activity state, frame index, facing, grace window)
//! and mirror it into atlas indices, flips, and tints each frame. They run
//! after the simulation sets and keep running during game over, so the
//! frozen world stays visible.

use bevy::prelude::*;

use super::sheet::SpriteSheets;
use crate::animation::{AnimationSet, Facing, SpriteTimeline};
use crate::combat::Invulnerability;
use crate::core::GameTuning;
use crate::enemies::{Enemy, EnemyState};
use crate::player::{Player, PlayerState};

/// Marker for the backdrop quad.
#[derive(Component)]
pub struct Backdrop;

/// Spawn the 2D camera and the arena backdrop.
pub fn setup_scene(mut commands: Commands, tuning: Res<GameTuning>) {
    commands.spawn(Camera2d);

    commands.spawn((
        Backdrop,
        Sprite {
            color: Color::srgb(0.043, 0.059, 0.078),
            custom_size: Some(Vec2::new(tuning.arena.width, tuning.arena.height)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));
}

/// Give freshly spawned entities their sheet sprite.
pub fn attach_sprites(
    mut commands: Commands,
    sheets: Res<SpriteSheets>,
    new_players: Query<Entity, (With<Player>, Without<Sprite>)>,
    new_enemies: Query<Entity, (With<Enemy>, Without<Sprite>)>,
) {
    for entity in new_players.iter() {
        commands.entity(entity).insert(Sprite::from_atlas_image(
            sheets.player.image.clone(),
            TextureAtlas {
                layout: sheets.player.layout.clone(),
                index: 0,
            },
        ));
    }

    for entity in new_enemies.iter() {
        commands.entity(entity).insert(Sprite::from_atlas_image(
            sheets.enemy.image.clone(),
            TextureAtlas {
                layout: sheets.enemy.layout.clone(),
                index: 0,
            },
        ));
    }
}

/// Mirror the player's renderable state into its sprite.
pub fn sync_player_sprite(
    sheets: Res<SpriteSheets>,
    mut query: Query<
        (
            &mut Sprite,
            &PlayerState,
            &SpriteTimeline,
            &Facing,
            &Invulnerability,
        ),
        With<Player>,
    >,
) {
    let Ok((mut sprite, state, timeline, facing, invulnerability)) = query.get_single_mut() else {
        return;
    };

    if let Some(atlas) = sprite.texture_atlas.as_mut() {
        atlas.index = sheets.player.cell(state.sheet_row(), timeline.frame);
    }
    sprite.flip_x = facing.sign < 0.0;

    // Blink while the post-hit grace window is live.
    let alpha = if invulnerability.is_active() && blink_hidden(invulnerability.remaining) {
        0.35
    } else {
        1.0
    };
    let mut color = sprite.color.to_srgba();
    color.alpha = alpha;
    sprite.color = color.into();
}

/// Mirror each enemy's renderable state into its sprite.
pub fn sync_enemy_sprites(
    sheets: Res<SpriteSheets>,
    mut query: Query<(&mut Sprite, &EnemyState, &SpriteTimeline, &Facing), With<Enemy>>,
) {
    for (mut sprite, state, timeline, facing) in query.iter_mut() {
        if let Some(atlas) = sprite.texture_atlas.as_mut() {
            atlas.index = sheets.enemy.cell(state.sheet_row(), timeline.frame);
        }
        sprite.flip_x = facing.sign < 0.0;
    }
}

/// Blink phase of the grace window, toggling every tenth of a second.
fn blink_hidden(remaining: f32) -> bool {
    (remaining * 10.0) as i32 % 2 == 0
}
