//! Player-related components.

use bevy::prelude::*;

use crate::animation::{AnimationSet, CyclePolicy};

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Player activity state machine.
///
/// `Punch` and `Slide` are locked: once entered they run until their
/// timeline completes, and transition requests in the meantime are
/// refused. The rows match the character sheet layout.
#[derive(Component, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    /// Standing still.
    #[default]
    Idle,
    /// Moving under player intent.
    Run,
    /// Attack swing; locked, one damage attempt per activation.
    Punch,
    /// Dash; locked, faster movement while it lasts.
    Slide,
}

impl PlayerState {
    /// Whether this state must run to completion before another transition
    /// is accepted.
    pub fn locked(self) -> bool {
        matches!(self, PlayerState::Punch | PlayerState::Slide)
    }
}

impl AnimationSet for PlayerState {
    fn frame_rate(self) -> f32 {
        match self {
            PlayerState::Idle => 6.0,
            PlayerState::Run => 12.0,
            PlayerState::Punch => 16.0,
            PlayerState::Slide => 14.0,
        }
    }

    fn sheet_row(self) -> usize {
        match self {
            PlayerState::Idle => 0,
            PlayerState::Run => 1,
            PlayerState::Punch => 6,
            PlayerState::Slide => 9,
        }
    }

    fn cycle_policy(self) -> CyclePolicy {
        match self {
            PlayerState::Idle | PlayerState::Run => CyclePolicy::Loop,
            PlayerState::Punch | PlayerState::Slide => CyclePolicy::OneShot,
        }
    }
}
