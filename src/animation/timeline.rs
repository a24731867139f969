//! Sprite timeline stepping driven by accumulated time.
//!
//! Every animated entity owns a [`SpriteTimeline`]; its activity state
//! decides the frame rate, sheet row, and end-of-cycle policy through the
//! [`AnimationSet`] trait. Because stepping drains an accumulator in a
//! while-loop, animation speed is governed by elapsed simulation time, not
//! by how often the host loop runs - a large delta advances several frames
//! in one tick and lands on the same frame a run of small deltas would.

use bevy::prelude::*;

/// What happens when a timeline's frame index runs off the end of its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePolicy {
    /// Wrap back to frame 0 and keep going (idle, run, approach).
    Loop,
    /// Report completion and rewind; the owner decides the next state
    /// (player punch/slide, enemy attack).
    OneShot,
    /// Report completion but hold the last valid frame forever (death).
    OneShotClamp,
}

/// Timeline verdict for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleEvent {
    /// Still inside the cycle.
    Running,
    /// The cycle wrapped (looping) or reached its terminal frame (one-shot)
    /// during this tick.
    Completed,
}

/// Total mapping from an activity state to its animation metadata.
///
/// Implementations are exhaustive matches, so adding a state without
/// animation data is a compile error rather than a runtime fallback.
pub trait AnimationSet: Copy {
    /// Frames per second while in this state.
    fn frame_rate(self) -> f32;
    /// Sheet row the state's frames live in.
    fn sheet_row(self) -> usize;
    /// End-of-cycle behavior for this state.
    fn cycle_policy(self) -> CyclePolicy;
}

/// Per-entity frame-stepping state.
#[derive(Component, Default, Debug, Clone)]
pub struct SpriteTimeline {
    /// Current frame index, always in `[0, columns)`.
    pub frame: usize,
    /// Elapsed time inside the current frame, seconds.
    accumulator: f32,
}

impl SpriteTimeline {
    /// Rewind to the first frame. Called on every state entry.
    pub fn restart(&mut self) {
        self.frame = 0;
        self.accumulator = 0.0;
    }

    /// Advance the timeline by `dt` seconds under `state`'s frame rate and
    /// cycle policy, for a row of `columns` frames.
    ///
    /// Drains whole frame intervals from the accumulator, so a delta many
    /// times the frame interval advances many frames. A one-shot completion
    /// stops the drain and discards the remainder; the owning state machine
    /// restarts the timeline when it picks the next state.
    pub fn advance<A: AnimationSet>(&mut self, dt: f32, state: A, columns: usize) -> CycleEvent {
        debug_assert!(columns > 0);
        let policy = state.cycle_policy();
        let last = columns.saturating_sub(1);

        // A finished death timeline stays pinned to its terminal frame.
        if policy == CyclePolicy::OneShotClamp && self.frame >= last {
            self.frame = last;
            return CycleEvent::Completed;
        }

        let interval = 1.0 / state.frame_rate();
        let mut event = CycleEvent::Running;

        self.accumulator += dt;
        while self.accumulator >= interval {
            self.accumulator -= interval;
            self.frame += 1;

            match policy {
                CyclePolicy::Loop => {
                    if self.frame >= columns {
                        self.frame = 0;
                        event = CycleEvent::Completed;
                    }
                }
                CyclePolicy::OneShot => {
                    if self.frame >= columns {
                        self.restart();
                        return CycleEvent::Completed;
                    }
                }
                CyclePolicy::OneShotClamp => {
                    if self.frame >= last {
                        self.frame = last;
                        return CycleEvent::Completed;
                    }
                }
            }
        }

        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal state set for exercising the stepper.
    #[derive(Clone, Copy)]
    enum TestState {
        Looping,
        Swing,
        Death,
    }

    impl AnimationSet for TestState {
        fn frame_rate(self) -> f32 {
            16.0
        }

        fn sheet_row(self) -> usize {
            0
        }

        fn cycle_policy(self) -> CyclePolicy {
            match self {
                TestState::Looping => CyclePolicy::Loop,
                TestState::Swing => CyclePolicy::OneShot,
                TestState::Death => CyclePolicy::OneShotClamp,
            }
        }
    }

    const COLS: usize = 7;

    #[test]
    fn frame_index_stays_in_bounds() {
        let mut timeline = SpriteTimeline::default();
        for step in 0..200 {
            // Uneven deltas, including several frames' worth at once.
            let dt = 0.001 * (step % 40) as f32;
            timeline.advance(dt, TestState::Looping, COLS);
            assert!(timeline.frame < COLS);
        }
    }

    #[test]
    fn accumulation_is_deterministic_under_tick_rate() {
        let mut fine = SpriteTimeline::default();
        for _ in 0..20 {
            fine.advance(1.0 / 120.0, TestState::Looping, COLS);
        }

        let mut coarse = SpriteTimeline::default();
        coarse.advance(1.0 / 6.0, TestState::Looping, COLS);

        assert_eq!(fine.frame, coarse.frame);
    }

    #[test]
    fn large_delta_advances_multiple_frames() {
        let mut timeline = SpriteTimeline::default();
        // 16 fps, 0.25 s => exactly 4 frames.
        timeline.advance(0.25, TestState::Looping, COLS);
        assert_eq!(timeline.frame, 4);
    }

    #[test]
    fn looping_wraps_to_zero() {
        let mut timeline = SpriteTimeline::default();
        let event = timeline.advance(7.0 / 16.0, TestState::Looping, COLS);
        assert_eq!(event, CycleEvent::Completed);
        assert_eq!(timeline.frame, 0);
    }

    #[test]
    fn one_shot_reports_completion_and_rewinds() {
        let mut timeline = SpriteTimeline::default();
        let mut completed = 0;
        for _ in 0..12 {
            if timeline.advance(1.0 / 16.0, TestState::Swing, COLS) == CycleEvent::Completed {
                completed += 1;
                break;
            }
        }
        assert_eq!(completed, 1);
        assert_eq!(timeline.frame, 0);
    }

    #[test]
    fn death_clamps_at_terminal_frame() {
        let mut timeline = SpriteTimeline::default();
        // Far more time than the row needs.
        let event = timeline.advance(3.0, TestState::Death, COLS);
        assert_eq!(event, CycleEvent::Completed);
        assert_eq!(timeline.frame, COLS - 1);

        // Stays pinned on later ticks.
        let event = timeline.advance(0.5, TestState::Death, COLS);
        assert_eq!(event, CycleEvent::Completed);
        assert_eq!(timeline.frame, COLS - 1);
    }

    #[test]
    fn restart_rewinds_frame_and_accumulator() {
        let mut timeline = SpriteTimeline::default();
        timeline.advance(0.2, TestState::Looping, COLS);
        timeline.restart();
        assert_eq!(timeline.frame, 0);

        // A restarted timeline needs a full interval before frame 1.
        timeline.advance(1.0 / 32.0, TestState::Looping, COLS);
        assert_eq!(timeline.frame, 0);
    }
}
