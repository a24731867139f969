//! Enemy-related components.

use bevy::prelude::*;

use crate::animation::{AnimationSet, CyclePolicy};

/// Marker component for all enemies.
#[derive(Component)]
pub struct Enemy;

/// Enemy activity state machine.
///
/// `Dying` is terminal and exclusive: nothing can leave it, so no lock
/// flag is needed. The rows match the hostile sheet layout.
#[derive(Component, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyState {
    /// Moving toward the player.
    #[default]
    Approach,
    /// Swing in progress; one damage attempt after the wind-up.
    Attack,
    /// Interrupted by a non-lethal hit.
    Staggered,
    /// Playing the death row, then purged.
    Dying,
}

impl EnemyState {
    /// Terminal state check; a dying enemy ignores every further input.
    pub fn terminal(self) -> bool {
        matches!(self, EnemyState::Dying)
    }
}

impl AnimationSet for EnemyState {
    fn frame_rate(self) -> f32 {
        match self {
            EnemyState::Approach => 10.0,
            EnemyState::Attack => 12.0,
            EnemyState::Staggered => 8.0,
            EnemyState::Dying => 10.0,
        }
    }

    fn sheet_row(self) -> usize {
        match self {
            EnemyState::Approach => 0,
            EnemyState::Attack => 1,
            EnemyState::Staggered => 2,
            EnemyState::Dying => 3,
        }
    }

    fn cycle_policy(self) -> CyclePolicy {
        match self {
            EnemyState::Approach | EnemyState::Staggered => CyclePolicy::Loop,
            EnemyState::Attack => CyclePolicy::OneShot,
            EnemyState::Dying => CyclePolicy::OneShotClamp,
        }
    }
}

/// Per-spawn enemy stats.
///
/// Speed is randomized at spawn time and scaled by wave number; everything
/// else an enemy needs comes from the shared tuning resource.
#[derive(Component, Debug, Clone)]
pub struct EnemyStats {
    /// Movement speed in pixels per second.
    pub speed: f32,
}

/// Seconds until this enemy may start another swing.
#[derive(Component, Default, Debug, Clone, Copy)]
pub struct AttackCooldown {
    pub remaining: f32,
}

/// Seconds until the current swing's damage attempt fires.
#[derive(Component, Default, Debug, Clone, Copy)]
pub struct AttackWindup {
    pub remaining: f32,
}

/// Seconds left in a stagger interruption.
#[derive(Component, Default, Debug, Clone, Copy)]
pub struct StaggerTimer {
    pub remaining: f32,
}
