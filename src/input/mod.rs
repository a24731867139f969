//! Input module - keyboard adapter feeding the simulation's intent snapshot.

mod intent;
mod plugin;

pub use intent::ActionIntent;
pub use plugin::InputPlugin;
