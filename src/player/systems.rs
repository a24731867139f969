//! Player state machine, movement, and timeline systems.

use bevy::prelude::*;

use super::components::{Player, PlayerState};
use crate::animation::{CycleEvent, Facing, SpriteTimeline};
use crate::combat::{Health, Invulnerability, SwingLatch};
use crate::core::{GameTuning, SimClock};
use crate::input::ActionIntent;

/// Spawn the player at the arena center.
pub fn spawn_player(mut commands: Commands, tuning: Res<GameTuning>) {
    commands.spawn((
        Player,
        PlayerState::default(),
        SpriteTimeline::default(),
        Facing::default(),
        Health::new(tuning.player.max_health),
        SwingLatch::default(),
        Invulnerability::default(),
        Transform::from_xyz(0.0, 0.0, 1.0),
        Visibility::default(),
    ));
}

/// Drive the player state machine from the tick's intent.
///
/// Runs before movement integration each tick. Locked states refuse every
/// transition request; unlock happens only in `advance_player_timeline`
/// when the one-shot cycle completes.
pub fn apply_player_intent(
    intent: Res<ActionIntent>,
    mut query: Query<
        (
            &mut PlayerState,
            &mut SpriteTimeline,
            &mut Facing,
            &mut SwingLatch,
        ),
        With<Player>,
    >,
) {
    let Ok((mut state, mut timeline, mut facing, mut latch)) = query.get_single_mut() else {
        return;
    };

    facing.turn_toward(intent.move_dir.x);

    let requested = requested_state(&intent);
    if let Some(next) = transition(*state, requested) {
        enter_state(next, &mut state, &mut timeline, &mut latch);
    }
}

/// Integrate player movement with the state's speed multiplier, then clamp
/// to the arena.
pub fn move_player(
    clock: Res<SimClock>,
    tuning: Res<GameTuning>,
    intent: Res<ActionIntent>,
    mut query: Query<(&mut Transform, &PlayerState), With<Player>>,
) {
    let Ok((mut transform, state)) = query.get_single_mut() else {
        return;
    };

    let speed = tuning.player.move_speed * speed_scale(*state, &tuning);
    let moved = transform.translation.truncate() + intent.move_dir * speed * clock.dt();
    let clamped = tuning.arena.clamp(moved, tuning.player.sheet.half_extent());

    transform.translation.x = clamped.x;
    transform.translation.y = clamped.y;
}

/// Advance the player's sprite timeline; a completed locked state unlocks
/// back to run or idle depending on current intent.
pub fn advance_player_timeline(
    clock: Res<SimClock>,
    tuning: Res<GameTuning>,
    intent: Res<ActionIntent>,
    mut query: Query<(&mut PlayerState, &mut SpriteTimeline), With<Player>>,
) {
    let Ok((mut state, mut timeline)) = query.get_single_mut() else {
        return;
    };

    let columns = tuning.player.sheet.columns as usize;
    let event = timeline.advance(clock.dt(), *state, columns);

    if event == CycleEvent::Completed && state.locked() {
        *state = unlocked_state(intent.moving());
        timeline.restart();
    }
}

/// What the tick's intent is asking for, in priority order: punch over
/// slide over plain locomotion.
fn requested_state(intent: &ActionIntent) -> PlayerState {
    if intent.punch {
        PlayerState::Punch
    } else if intent.slide {
        PlayerState::Slide
    } else {
        unlocked_state(intent.moving())
    }
}

/// Transition decision: `None` means the request is refused or a no-op.
fn transition(current: PlayerState, requested: PlayerState) -> Option<PlayerState> {
    if requested == current {
        return None;
    }
    if current.locked() {
        return None;
    }
    Some(requested)
}

/// Apply a state entry: rewind the timeline, and re-arm the swing latch
/// when the new state is a punch.
fn enter_state(
    next: PlayerState,
    state: &mut PlayerState,
    timeline: &mut SpriteTimeline,
    latch: &mut SwingLatch,
) {
    *state = next;
    timeline.restart();
    if next == PlayerState::Punch {
        latch.arm();
    }
}

/// State a lock releases into.
fn unlocked_state(moving: bool) -> PlayerState {
    if moving {
        PlayerState::Run
    } else {
        PlayerState::Idle
    }
}

/// Movement speed multiplier for a state.
fn speed_scale(state: PlayerState, tuning: &GameTuning) -> f32 {
    match state {
        PlayerState::Punch => tuning.player.punch_speed_scale,
        PlayerState::Slide => tuning.player.slide_speed_scale,
        PlayerState::Idle | PlayerState::Run => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent(move_dir: Vec2, punch: bool, slide: bool) -> ActionIntent {
        ActionIntent {
            move_dir,
            punch,
            slide,
        }
    }

    #[test]
    fn punch_beats_slide_beats_locomotion() {
        let both = intent(Vec2::X, true, true);
        assert_eq!(requested_state(&both), PlayerState::Punch);

        let slide = intent(Vec2::X, false, true);
        assert_eq!(requested_state(&slide), PlayerState::Slide);

        let run = intent(Vec2::X, false, false);
        assert_eq!(requested_state(&run), PlayerState::Run);

        let idle = intent(Vec2::ZERO, false, false);
        assert_eq!(requested_state(&idle), PlayerState::Idle);
    }

    #[test]
    fn locked_states_refuse_transitions() {
        assert_eq!(transition(PlayerState::Punch, PlayerState::Slide), None);
        assert_eq!(transition(PlayerState::Punch, PlayerState::Idle), None);
        assert_eq!(transition(PlayerState::Slide, PlayerState::Punch), None);

        // Unlocked states accept anything different.
        assert_eq!(
            transition(PlayerState::Idle, PlayerState::Punch),
            Some(PlayerState::Punch)
        );
        assert_eq!(transition(PlayerState::Run, PlayerState::Run), None);
    }

    #[test]
    fn entering_punch_rewinds_timeline_and_arms_latch() {
        let mut state = PlayerState::Run;
        let mut timeline = SpriteTimeline::default();
        timeline.advance(0.3, state, 7);
        let mut latch = SwingLatch {
            damage_applied: true,
        };

        enter_state(PlayerState::Punch, &mut state, &mut timeline, &mut latch);

        assert_eq!(state, PlayerState::Punch);
        assert_eq!(timeline.frame, 0);
        assert!(!latch.damage_applied);
    }

    #[test]
    fn lock_releases_only_on_cycle_completion() {
        let mut state = PlayerState::Idle;
        let mut timeline = SpriteTimeline::default();
        let mut latch = SwingLatch::default();

        // Start a punch, then hammer slide requests mid-swing.
        let next = transition(state, PlayerState::Punch).unwrap();
        enter_state(next, &mut state, &mut timeline, &mut latch);

        let mut completed = false;
        for _ in 0..40 {
            assert_eq!(transition(state, PlayerState::Slide), None);

            // 16 fps punch over 7 columns: completes within 7/16 s.
            if timeline.advance(0.02, state, 7) == CycleEvent::Completed {
                state = unlocked_state(false);
                timeline.restart();
                completed = true;
                break;
            }
            assert_eq!(state, PlayerState::Punch);
        }

        assert!(completed);
        assert_eq!(state, PlayerState::Idle);
        assert_eq!(timeline.frame, 0);
    }

    #[test]
    fn speed_scale_follows_state() {
        let tuning = GameTuning::default();
        assert_eq!(speed_scale(PlayerState::Idle, &tuning), 1.0);
        assert_eq!(speed_scale(PlayerState::Run, &tuning), 1.0);
        assert_eq!(speed_scale(PlayerState::Punch, &tuning), 0.55);
        assert_eq!(speed_scale(PlayerState::Slide, &tuning), 1.35);
    }
}
