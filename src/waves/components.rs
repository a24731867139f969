//! Wave progression state.

use bevy::prelude::*;

/// Current wave number, starting at 1 once gameplay begins.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct WaveState {
    pub wave_number: u32,
}
