//! Animation module - time-accumulating sprite timeline stepping and facing.

mod facing;
mod timeline;

pub use facing::Facing;
pub use timeline::{AnimationSet, CycleEvent, CyclePolicy, SpriteTimeline};
