//! Rendering module - sprite sheets and simulation-to-sprite sync.

mod plugin;
mod sheet;
mod systems;

pub use plugin::RenderingPlugin;
pub use sheet::{SheetHandles, SpriteSheets};
