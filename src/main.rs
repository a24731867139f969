//! Wave Brawler - Entry Point
//!
//! Controls:
//! - WASD / Arrows: Move
//! - J: Punch
//! - Shift: Slide
//! - R: Retry after game over

use bevy::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins, tuned for pixel art
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Wave Brawler".to_string(),
                        resolution: (1280.0, 720.0).into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(ImagePlugin::default_nearest()),
        )
        // Our game plugin
        .add_plugins(wave_brawler::WaveBrawlerPlugin)
        .run();
}
