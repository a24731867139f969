//! Wave spawning and clear detection.

use bevy::prelude::*;

use super::components::WaveState;
use crate::combat::Health;
use crate::core::{GameTuning, WaveTuning};
use crate::enemies::{spawn_enemy, Enemy, EnemyState};
use crate::player::Player;

/// Kick off wave 1 when gameplay starts.
pub fn begin_first_wave(
    mut commands: Commands,
    tuning: Res<GameTuning>,
    mut wave_state: ResMut<WaveState>,
) {
    wave_state.wave_number = 1;
    spawn_wave(&mut commands, &tuning, 1);
}

/// Start the next wave once the current one is spent.
///
/// Runs after combat resolution each tick. The condition is
/// level-triggered - "no enemy is in a non-dying state" - but cannot
/// re-fire, because the wave it starts immediately populates the arena
/// with approaching enemies. Corpses mid-death-animation count as cleared;
/// purged ones are simply gone.
pub fn check_wave_clear(
    mut commands: Commands,
    tuning: Res<GameTuning>,
    mut wave_state: ResMut<WaveState>,
    enemy_query: Query<&EnemyState, With<Enemy>>,
    player_query: Query<&Health, With<Player>>,
) {
    let Ok(player_health) = player_query.get_single() else {
        return;
    };
    if player_health.is_dead() {
        return;
    }

    if !wave_cleared(enemy_query.iter()) {
        return;
    }

    let next = wave_state.wave_number + 1;
    wave_state.wave_number = next;
    spawn_wave(&mut commands, &tuning, next);
}

/// Spawn the full enemy complement for a wave.
fn spawn_wave(commands: &mut Commands, tuning: &GameTuning, wave_number: u32) {
    let count = wave_count(wave_number, &tuning.waves);
    for _ in 0..count {
        spawn_enemy(commands, tuning, wave_number);
    }
    info!("Wave {} started with {} enemies", wave_number, count);
}

/// Enemies in a wave: base count plus a linear per-wave increment.
fn wave_count(wave_number: u32, waves: &WaveTuning) -> u32 {
    waves.base_count + wave_number * waves.per_wave_increment
}

/// A wave is cleared when no enemy remains in a non-terminal state.
fn wave_cleared<'a>(states: impl IntoIterator<Item = &'a EnemyState>) -> bool {
    states.into_iter().all(|state| state.terminal())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wave_counts_scale_linearly() {
        let waves = WaveTuning::default();
        assert_eq!(wave_count(1, &waves), 6);
        assert_eq!(wave_count(2, &waves), 8);
        assert_eq!(wave_count(5, &waves), 14);
    }

    #[test]
    fn clear_requires_every_enemy_terminal() {
        let all_dying = [EnemyState::Dying, EnemyState::Dying];
        assert!(wave_cleared(all_dying.iter()));

        let one_alive = [EnemyState::Dying, EnemyState::Approach];
        assert!(!wave_cleared(one_alive.iter()));

        // A fresh wave's enemies keep the check from re-firing.
        let fresh = [EnemyState::Approach; 8];
        assert!(!wave_cleared(fresh.iter()));

        // Fully purged corpses leave an empty set, which counts as clear.
        let none: [EnemyState; 0] = [];
        assert!(wave_cleared(none.iter()));
    }
}
