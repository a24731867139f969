//! Input plugin - publishes the per-tick action intent.

use bevy::prelude::*;

use super::intent::{read_keyboard_intent, ActionIntent};
use crate::core::SimSet;

/// Input plugin - translates raw key state into [`ActionIntent`].
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActionIntent>()
            .add_systems(Update, read_keyboard_intent.in_set(SimSet::Input));
    }
}
