//! Enemy spawning at arena edges with wave-scaled stats.

use bevy::prelude::*;
use rand::Rng;

use super::components::{
    AttackCooldown, AttackWindup, Enemy, EnemyState, EnemyStats, StaggerTimer,
};
use crate::animation::{Facing, SpriteTimeline};
use crate::combat::{Health, SwingLatch};
use crate::core::{ArenaTuning, GameTuning};

/// Spawn one enemy for the given wave at a random off-screen edge point.
pub fn spawn_enemy(commands: &mut Commands, tuning: &GameTuning, wave_number: u32) {
    let mut rng = rand::thread_rng();

    let edge = rng.gen_range(0..4);
    let along = rng.gen_range(0.0..1.0);
    let position = edge_spawn_point(edge, along, &tuning.arena, tuning.enemy.spawn_margin);

    let speed = rng.gen_range(tuning.enemy.base_speed_min..=tuning.enemy.base_speed_max)
        + wave_number as f32 * tuning.enemy.speed_per_wave;
    let health = spawn_health(wave_number, tuning.enemy.health_wave_divisor);

    commands.spawn((
        Enemy,
        EnemyState::default(),
        EnemyStats { speed },
        SpriteTimeline::default(),
        Facing::default(),
        Health::new(health),
        AttackCooldown::default(),
        AttackWindup::default(),
        StaggerTimer::default(),
        SwingLatch::default(),
        Transform::from_xyz(position.x, position.y, 0.9),
        Visibility::default(),
    ));
}

/// Point on one of the four arena edges (0 top, 1 bottom, 2 left, 3 right),
/// `along` in `[0, 1)` along that edge, pushed outward by `margin` so the
/// spawn is off-screen.
fn edge_spawn_point(edge: u32, along: f32, arena: &ArenaTuning, margin: f32) -> Vec2 {
    let half_w = arena.width / 2.0;
    let half_h = arena.height / 2.0;
    match edge {
        0 => Vec2::new((along - 0.5) * arena.width, half_h + margin),
        1 => Vec2::new((along - 0.5) * arena.width, -half_h - margin),
        2 => Vec2::new(-half_w - margin, (along - 0.5) * arena.height),
        _ => Vec2::new(half_w + margin, (along - 0.5) * arena.height),
    }
}

/// Spawn health for a wave: one point, plus one per `divisor` waves.
fn spawn_health(wave_number: u32, divisor: u32) -> i32 {
    (1 + wave_number / divisor.max(1)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_spawns_land_outside_the_arena() {
        let arena = ArenaTuning {
            width: 1280.0,
            height: 720.0,
        };
        let margin = 48.0;

        for edge in 0..4 {
            for along in [0.0, 0.25, 0.99] {
                let p = edge_spawn_point(edge, along, &arena, margin);
                let outside = p.x.abs() > arena.width / 2.0 || p.y.abs() > arena.height / 2.0;
                assert!(outside, "edge {edge} at {along} spawned inside: {p:?}");
            }
        }
    }

    #[test]
    fn spawn_health_scales_with_wave() {
        assert_eq!(spawn_health(1, 3), 1);
        assert_eq!(spawn_health(2, 3), 1);
        assert_eq!(spawn_health(3, 3), 2);
        assert_eq!(spawn_health(6, 3), 3);

        // A zero divisor is treated as one rather than dividing by zero.
        assert_eq!(spawn_health(4, 0), 5);
    }
}
