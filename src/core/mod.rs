//! Core game module - states, events, clock, and tuning data.
//!
//! This module provides the foundation that all other game systems build upon.

mod clock;
mod events;
mod plugin;
mod states;
mod tuning;

pub use clock::SimClock;
pub use events::*;
pub use plugin::{CorePlugin, SimSet};
pub use states::*;
pub use tuning::{ArenaTuning, GameTuning, SheetLayout, TuningError, WaveTuning};
