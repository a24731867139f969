//! Combat systems - strike resolution, damage application, death routing.

use bevy::prelude::*;

use super::components::*;
use crate::animation::{Facing, SpriteTimeline};
use crate::core::{GameState, GameTuning, SimClock};
use crate::enemies::{AttackWindup, Enemy, EnemyState, StaggerTimer};
use crate::player::{Player, PlayerState};

/// Outcome of one damage attempt against a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HitOutcome {
    /// Target was invulnerable or already dead; nothing changed.
    Suppressed,
    /// Health was reduced; target survives.
    Applied,
    /// Health reached zero.
    Lethal,
}

/// Decay the player's post-hit grace period.
pub fn tick_invulnerability(
    clock: Res<SimClock>,
    mut query: Query<&mut Invulnerability, With<Player>>,
) {
    for mut invulnerability in query.iter_mut() {
        invulnerability.tick(clock.dt());
    }
}

/// Resolve the player's punch against every enemy in reach.
///
/// The hit-test fires on the first tick the punch timeline reaches its
/// damage frame, and the swing latch guarantees it fires once per swing no
/// matter how many ticks the active frames span. Dying enemies are not
/// valid targets.
pub fn player_strike(
    tuning: Res<GameTuning>,
    mut player_query: Query<
        (
            Entity,
            &Transform,
            &PlayerState,
            &SpriteTimeline,
            &Facing,
            &mut SwingLatch,
        ),
        With<Player>,
    >,
    enemy_query: Query<(Entity, &Transform, &EnemyState), With<Enemy>>,
    mut damage_events: EventWriter<DamageEvent>,
) {
    let Ok((player_entity, transform, state, timeline, facing, mut latch)) =
        player_query.get_single_mut()
    else {
        return;
    };

    if *state != PlayerState::Punch || timeline.frame < tuning.player.damage_frame {
        return;
    }
    if !latch.trip() {
        return;
    }

    let center = strike_center(
        transform.translation.truncate(),
        facing.sign,
        tuning.player.reach_offset,
    );

    for (enemy_entity, enemy_transform, enemy_state) in enemy_query.iter() {
        if enemy_state.terminal() {
            continue;
        }
        let enemy_pos = enemy_transform.translation.truncate();
        if center.distance(enemy_pos) <= tuning.player.strike_radius {
            damage_events.send(DamageEvent {
                target: enemy_entity,
                source: player_entity,
                amount: 1,
            });
        }
    }
}

/// Resolve enemy swings against the player.
///
/// A swing gets exactly one damage attempt, after its wind-up elapses; the
/// latch trips whether or not the player is actually in range, so whiffed
/// swings stay spent.
pub fn enemy_strikes(
    tuning: Res<GameTuning>,
    player_query: Query<(Entity, &Transform), (With<Player>, Without<Enemy>)>,
    mut enemy_query: Query<
        (Entity, &Transform, &EnemyState, &AttackWindup, &mut SwingLatch),
        With<Enemy>,
    >,
    mut damage_events: EventWriter<DamageEvent>,
) {
    let Ok((player_entity, player_transform)) = player_query.get_single() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    for (enemy_entity, transform, state, windup, mut latch) in enemy_query.iter_mut() {
        if *state != EnemyState::Attack || windup.remaining > 0.0 {
            continue;
        }
        if !latch.trip() {
            continue;
        }

        let distance = transform.translation.truncate().distance(player_pos);
        if distance <= tuning.enemy.damage_radius {
            damage_events.send(DamageEvent {
                target: player_entity,
                source: enemy_entity,
                amount: tuning.enemy.contact_damage,
            });
        }
    }
}

/// Apply queued damage, honoring the target's invulnerability window.
///
/// A target that takes damage and owns an [`Invulnerability`] component is
/// granted the tuned grace period; targets without one (enemies) can be hit
/// every swing.
pub fn apply_damage(
    tuning: Res<GameTuning>,
    mut damage_events: EventReader<DamageEvent>,
    mut target_query: Query<(&mut Health, Option<&mut Invulnerability>)>,
    mut death_events: EventWriter<DeathEvent>,
) {
    for event in damage_events.read() {
        let Ok((mut health, mut invulnerability)) = target_query.get_mut(event.target) else {
            continue;
        };

        let outcome = resolve_hit(
            &mut health,
            invulnerability.as_deref_mut(),
            event.amount,
            tuning.player.hit_invulnerability,
        );

        if outcome == HitOutcome::Lethal {
            death_events.send(DeathEvent {
                entity: event.target,
                killed_by: Some(event.source),
            });
        }
    }
}

/// Stagger enemies that survived a hit this tick.
///
/// Runs after `apply_damage`, so lethal hits are already reflected in
/// health and routed to the death path instead.
pub fn stagger_on_hit(
    tuning: Res<GameTuning>,
    mut damage_events: EventReader<DamageEvent>,
    mut enemy_query: Query<
        (
            &Health,
            &mut EnemyState,
            &mut SpriteTimeline,
            &mut StaggerTimer,
        ),
        With<Enemy>,
    >,
) {
    for event in damage_events.read() {
        let Ok((health, mut state, mut timeline, mut stagger)) = enemy_query.get_mut(event.target)
        else {
            continue;
        };

        if state.terminal() || health.is_dead() {
            continue;
        }

        if *state != EnemyState::Staggered {
            *state = EnemyState::Staggered;
            timeline.restart();
        }
        stagger.remaining = tuning.enemy.stagger_duration;
    }
}

/// Route deaths: enemies enter their dying animation and award score, the
/// player's death freezes the simulation via the game-over state.
pub fn route_deaths(
    mut death_events: EventReader<DeathEvent>,
    mut score: ResMut<Score>,
    mut next_state: ResMut<NextState<GameState>>,
    player_query: Query<Entity, With<Player>>,
    mut enemy_query: Query<(&mut EnemyState, &mut SpriteTimeline), With<Enemy>>,
) {
    for event in death_events.read() {
        if player_query.get(event.entity).is_ok() {
            info!("Player died; final score {}", score.0);
            next_state.set(GameState::GameOver);
        } else if let Ok((mut state, mut timeline)) = enemy_query.get_mut(event.entity) {
            if !state.terminal() {
                *state = EnemyState::Dying;
                timeline.restart();
                score.0 += 10;
            }
        }
    }
}

/// Center of the punch's hit circle: offset from the attacker along facing.
fn strike_center(position: Vec2, facing_sign: f32, reach_offset: f32) -> Vec2 {
    position + Vec2::new(facing_sign * reach_offset, 0.0)
}

/// Apply one damage attempt to a health pool.
fn resolve_hit(
    health: &mut Health,
    invulnerability: Option<&mut Invulnerability>,
    amount: i32,
    grace: f32,
) -> HitOutcome {
    if health.is_dead() {
        return HitOutcome::Suppressed;
    }
    if let Some(inv) = &invulnerability {
        if inv.is_active() {
            return HitOutcome::Suppressed;
        }
    }

    health.take_damage(amount);
    if let Some(inv) = invulnerability {
        inv.grant(grace);
    }

    if health.is_dead() {
        HitOutcome::Lethal
    } else {
        HitOutcome::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strike_center_follows_facing() {
        let center = strike_center(Vec2::new(100.0, 20.0), 1.0, 40.0);
        assert_eq!(center, Vec2::new(140.0, 20.0));

        let center = strike_center(Vec2::new(100.0, 20.0), -1.0, 40.0);
        assert_eq!(center, Vec2::new(60.0, 20.0));
    }

    #[test]
    fn hits_suppress_during_grace_and_land_after() {
        let mut health = Health::new(100);
        let mut inv = Invulnerability::default();

        // First hit lands and grants the grace window.
        let outcome = resolve_hit(&mut health, Some(&mut inv), 10, 0.6);
        assert_eq!(outcome, HitOutcome::Applied);
        assert_eq!(health.current, 90);

        // Attempts inside the 0.6 s window do nothing.
        let outcome = resolve_hit(&mut health, Some(&mut inv), 10, 0.6);
        assert_eq!(outcome, HitOutcome::Suppressed);

        inv.tick(0.59);
        let outcome = resolve_hit(&mut health, Some(&mut inv), 10, 0.6);
        assert_eq!(outcome, HitOutcome::Suppressed);
        assert_eq!(health.current, 90);

        // 0.61 s after the hit the grace has lapsed.
        inv.tick(0.02);
        let outcome = resolve_hit(&mut health, Some(&mut inv), 10, 0.6);
        assert_eq!(outcome, HitOutcome::Applied);
        assert_eq!(health.current, 80);
    }

    #[test]
    fn lethal_hit_is_reported_once() {
        let mut health = Health::new(1);
        assert_eq!(resolve_hit(&mut health, None, 1, 0.0), HitOutcome::Lethal);

        // Further attempts on a dead target are suppressed, not re-lethal.
        assert_eq!(resolve_hit(&mut health, None, 1, 0.0), HitOutcome::Suppressed);
        assert_eq!(health.current, 0);
    }

    #[test]
    fn damage_never_goes_negative() {
        let mut health = Health::new(5);
        resolve_hit(&mut health, None, 100, 0.0);
        assert_eq!(health.current, 0);
    }

    #[test]
    fn enemies_without_invulnerability_take_every_hit() {
        let mut health = Health::new(3);
        assert_eq!(resolve_hit(&mut health, None, 1, 0.6), HitOutcome::Applied);
        assert_eq!(resolve_hit(&mut health, None, 1, 0.6), HitOutcome::Applied);
        assert_eq!(resolve_hit(&mut health, None, 1, 0.6), HitOutcome::Lethal);
    }
}
