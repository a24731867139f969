//! Enemy behavior systems: seek movement, swing scheduling, timelines.
//!
//! Hit reactions (stagger and death transitions) live in the combat module,
//! which runs after these systems each tick.

use bevy::prelude::*;
use rand::Rng;

use super::components::{AttackCooldown, AttackWindup, Enemy, EnemyState, EnemyStats, StaggerTimer};
use crate::animation::{CycleEvent, Facing, SpriteTimeline};
use crate::combat::SwingLatch;
use crate::core::{GameTuning, SimClock};
use crate::player::Player;

/// Move approaching enemies toward the player.
///
/// Attacking, staggered, and dying enemies hold their position. Two
/// entities on the exact same point produce a zero seek vector and simply
/// stand still for the tick.
pub fn seek_player(
    clock: Res<SimClock>,
    tuning: Res<GameTuning>,
    player_query: Query<&Transform, (With<Player>, Without<Enemy>)>,
    mut enemy_query: Query<
        (&mut Transform, &mut Facing, &EnemyStats, &EnemyState),
        (With<Enemy>, Without<Player>),
    >,
) {
    let Ok(player_transform) = player_query.get_single() else {
        return;
    };
    let target = player_transform.translation.truncate();

    for (mut transform, mut facing, stats, state) in enemy_query.iter_mut() {
        if *state != EnemyState::Approach {
            continue;
        }

        let position = transform.translation.truncate();
        let direction = (target - position).normalize_or_zero();
        facing.turn_toward(direction.x);

        let moved = position + direction * stats.speed * clock.dt();
        let clamped = tuning.arena.clamp(moved, tuning.enemy.sheet.half_extent());
        transform.translation.x = clamped.x;
        transform.translation.y = clamped.y;
    }
}

/// Tick swing timers and start attacks when the player is in reach.
///
/// An approach enemy with an elapsed cooldown starts a swing the moment the
/// player enters its trigger radius: the swing rewinds the timeline, re-arms
/// the one-damage latch, and arms the wind-up. Staggered enemies count down
/// and resume approaching.
pub fn schedule_attacks(
    clock: Res<SimClock>,
    tuning: Res<GameTuning>,
    player_query: Query<&Transform, (With<Player>, Without<Enemy>)>,
    mut enemy_query: Query<
        (
            &Transform,
            &mut EnemyState,
            &mut SpriteTimeline,
            &mut AttackCooldown,
            &mut AttackWindup,
            &mut StaggerTimer,
            &mut SwingLatch,
        ),
        With<Enemy>,
    >,
) {
    let Ok(player_transform) = player_query.get_single() else {
        return;
    };
    let target = player_transform.translation.truncate();
    let dt = clock.dt();

    for (transform, mut state, mut timeline, mut cooldown, mut windup, mut stagger, mut latch) in
        enemy_query.iter_mut()
    {
        match *state {
            EnemyState::Approach => {
                cooldown.remaining = (cooldown.remaining - dt).max(0.0);

                let distance = transform.translation.truncate().distance(target);
                if distance <= tuning.enemy.trigger_radius && cooldown.remaining <= 0.0 {
                    *state = EnemyState::Attack;
                    timeline.restart();
                    latch.arm();
                    windup.remaining = tuning.enemy.windup;
                }
            }
            EnemyState::Attack => {
                windup.remaining = (windup.remaining - dt).max(0.0);
            }
            EnemyState::Staggered => {
                stagger.remaining -= dt;
                if stagger.remaining <= 0.0 {
                    *state = EnemyState::Approach;
                    timeline.restart();
                }
            }
            EnemyState::Dying => {}
        }
    }
}

/// Advance enemy sprite timelines and resolve their completions.
///
/// A completed attack cycle returns the enemy to approach and draws a fresh
/// randomized cooldown; a completed death cycle purges the entity - the
/// corpse has nothing left to show once its one-shot clamps.
pub fn advance_enemy_timelines(
    mut commands: Commands,
    clock: Res<SimClock>,
    tuning: Res<GameTuning>,
    mut enemy_query: Query<
        (
            Entity,
            &mut EnemyState,
            &mut SpriteTimeline,
            &mut AttackCooldown,
        ),
        With<Enemy>,
    >,
) {
    let columns = tuning.enemy.sheet.columns as usize;

    for (entity, mut state, mut timeline, mut cooldown) in enemy_query.iter_mut() {
        let event = timeline.advance(clock.dt(), *state, columns);
        if event != CycleEvent::Completed {
            continue;
        }

        match *state {
            EnemyState::Attack => {
                *state = EnemyState::Approach;
                timeline.restart();
                cooldown.remaining = rand::thread_rng()
                    .gen_range(tuning.enemy.cooldown_min..=tuning.enemy.cooldown_max);
            }
            EnemyState::Dying => {
                commands.entity(entity).despawn();
            }
            // Looping rows just wrapped; nothing to resolve.
            EnemyState::Approach | EnemyState::Staggered => {}
        }
    }
}
