//! In-game HUD - health, score, and wave readouts.

use bevy::prelude::*;

use crate::combat::{Health, Score};
use crate::core::GameState;
use crate::player::Player;
use crate::waves::WaveState;

/// Marker for HUD root entity.
#[derive(Component)]
pub struct HudRoot;

/// Marker for the health readout.
#[derive(Component)]
pub struct HealthText;

/// Marker for the score readout.
#[derive(Component)]
pub struct ScoreText;

/// Marker for the wave readout.
#[derive(Component)]
pub struct WaveText;

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_hud)
        .add_systems(OnExit(GameState::InGame), cleanup_hud)
        .add_systems(
            Update,
            (update_health_text, update_score_text, update_wave_text)
                .run_if(in_state(GameState::InGame)),
        );
}

/// Spawn the HUD UI (top-left corner).
fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            Node {
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Start,
                padding: UiRect::all(Val::Px(14.0)),
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            spawn_readout(parent, "Health 100", HealthText);
            spawn_readout(parent, "Score 0", ScoreText);
            spawn_readout(parent, "Wave 1", WaveText);
        });
}

/// Helper to spawn one text readout line.
fn spawn_readout<M: Component>(parent: &mut ChildBuilder, initial: &str, marker: M) {
    parent.spawn((
        Text::new(initial),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgb(0.85, 0.85, 0.85)),
        Node {
            margin: UiRect::bottom(Val::Px(4.0)),
            ..default()
        },
        marker,
    ));
}

/// Remove the HUD when leaving gameplay.
fn cleanup_hud(mut commands: Commands, query: Query<Entity, With<HudRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

/// Refresh the health readout when the player's health changes.
fn update_health_text(
    player_query: Query<&Health, (With<Player>, Changed<Health>)>,
    mut text_query: Query<&mut Text, With<HealthText>>,
) {
    let Ok(health) = player_query.get_single() else {
        return;
    };
    for mut text in text_query.iter_mut() {
        text.0 = format!("Health {}", health.current);
    }
}

/// Refresh the score readout when the score changes.
fn update_score_text(score: Res<Score>, mut text_query: Query<&mut Text, With<ScoreText>>) {
    if !score.is_changed() {
        return;
    }
    for mut text in text_query.iter_mut() {
        text.0 = format!("Score {}", score.0);
    }
}

/// Refresh the wave readout when a new wave starts.
fn update_wave_text(
    wave_state: Res<WaveState>,
    mut text_query: Query<&mut Text, With<WaveText>>,
) {
    if !wave_state.is_changed() {
        return;
    }
    for mut text in text_query.iter_mut() {
        text.0 = format!("Wave {}", wave_state.wave_number);
    }
}
