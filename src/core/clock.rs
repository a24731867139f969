//! Simulation clock with a capped per-tick delta.

use bevy::prelude::*;

/// Per-tick simulation delta, in seconds, capped at [`SimClock::MAX_STEP`].
///
/// Every gameplay system reads its delta from here instead of [`Time`], so
/// the cap is applied in exactly one place. Without the cap, a tab-suspend
/// or a single slow frame would hand the simulation a huge delta and let
/// entities tunnel through attack windows and arena bounds in one step.
#[derive(Resource, Default)]
pub struct SimClock {
    dt: f32,
}

impl SimClock {
    /// Largest delta a single tick is allowed to observe, in seconds.
    pub const MAX_STEP: f32 = 0.05;

    /// The capped delta for the current tick.
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Feed one wall-clock sample into the clock.
    pub fn advance(&mut self, raw_delta: f32) {
        self.dt = raw_delta.min(Self::MAX_STEP);
    }
}

/// Update the simulation clock from Bevy's frame time.
///
/// Runs before every other gameplay system (see `CorePlugin`).
pub fn tick_sim_clock(time: Res<Time>, mut clock: ResMut<SimClock>) {
    clock.advance(time.delta_secs());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_frames_pass_through() {
        let mut clock = SimClock::default();
        clock.advance(1.0 / 120.0);
        assert!((clock.dt() - 1.0 / 120.0).abs() < f32::EPSILON);
    }

    #[test]
    fn long_frames_are_capped() {
        let mut clock = SimClock::default();
        clock.advance(0.75);
        assert!((clock.dt() - SimClock::MAX_STEP).abs() < f32::EPSILON);
    }
}
