//! Balance and layout tuning loaded from an external RON file.
//!
//! Allows tweaking all gameplay numbers without recompilation. Missing or
//! malformed files fall back to the built-in defaults so the game always
//! boots.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use thiserror::Error;

/// Path the tuning file is loaded from, relative to the working directory.
const TUNING_PATH: &str = "assets/data/tuning.ron";

/// Errors that can occur when loading the tuning file.
#[derive(Debug, Error)]
pub enum TuningError {
    /// File could not be read.
    #[error("Failed to read tuning file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },
}

/// Sprite sheet grid layout for one entity kind.
#[derive(Deserialize, Clone, Debug)]
pub struct SheetLayout {
    /// Asset path of the sheet image.
    pub image: String,
    /// Frames per animation row.
    pub columns: u32,
    /// Animation rows in the sheet.
    pub rows: u32,
    /// Source frame size in pixels.
    pub frame_width: f32,
    pub frame_height: f32,
}

impl SheetLayout {
    /// Half of one frame's extent, used for bounds clamping.
    pub fn half_extent(&self) -> Vec2 {
        Vec2::new(self.frame_width, self.frame_height) / 2.0
    }
}

/// Player movement, combat, and sheet tuning.
#[derive(Deserialize, Clone, Debug)]
pub struct PlayerTuning {
    pub max_health: i32,
    /// Base movement speed in pixels per second.
    pub move_speed: f32,
    /// Speed multiplier while punching.
    pub punch_speed_scale: f32,
    /// Speed multiplier while sliding.
    pub slide_speed_scale: f32,
    /// Frame index at which a punch's hit-test fires.
    pub damage_frame: usize,
    /// Distance from the player's center to the strike circle's center,
    /// along the facing direction.
    pub reach_offset: f32,
    /// Radius of the strike circle.
    pub strike_radius: f32,
    /// Invulnerability window granted after taking a hit, in seconds.
    pub hit_invulnerability: f32,
    pub sheet: SheetLayout,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            max_health: 100,
            move_speed: 240.0,
            punch_speed_scale: 0.55,
            slide_speed_scale: 1.35,
            damage_frame: 3,
            reach_offset: 40.0,
            strike_radius: 42.0,
            hit_invulnerability: 0.6,
            sheet: SheetLayout {
                image: "sprites/character.png".to_string(),
                columns: 7,
                rows: 11,
                frame_width: 50.0,
                frame_height: 37.0,
            },
        }
    }
}

/// Enemy behavior and sheet tuning.
#[derive(Deserialize, Clone, Debug)]
pub struct EnemyTuning {
    /// Health points dealt to the player per landed swing.
    pub contact_damage: i32,
    /// Player distance inside which a landed enemy swing connects.
    pub damage_radius: f32,
    /// Player distance inside which an enemy starts a swing.
    pub trigger_radius: f32,
    /// Delay between entering the attack state and the damage attempt.
    pub windup: f32,
    /// Cooldown between swings, drawn uniformly from this range.
    pub cooldown_min: f32,
    pub cooldown_max: f32,
    /// How long a non-lethal hit interrupts an enemy, in seconds.
    pub stagger_duration: f32,
    /// Per-spawn speed range in pixels per second, before the wave bonus.
    pub base_speed_min: f32,
    pub base_speed_max: f32,
    /// Flat speed added per wave number.
    pub speed_per_wave: f32,
    /// Waves needed per extra point of spawn health.
    pub health_wave_divisor: u32,
    /// How far outside the arena edge enemies materialize.
    pub spawn_margin: f32,
    pub sheet: SheetLayout,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            contact_damage: 10,
            damage_radius: 52.0,
            trigger_radius: 46.0,
            windup: 0.25,
            cooldown_min: 0.8,
            cooldown_max: 1.6,
            stagger_duration: 0.35,
            base_speed_min: 60.0,
            base_speed_max: 100.0,
            speed_per_wave: 6.0,
            health_wave_divisor: 3,
            spawn_margin: 48.0,
            sheet: SheetLayout {
                image: "sprites/hostile.png".to_string(),
                columns: 6,
                rows: 4,
                frame_width: 50.0,
                frame_height: 37.0,
            },
        }
    }
}

/// Wave escalation tuning.
#[derive(Deserialize, Clone, Debug)]
pub struct WaveTuning {
    /// Enemies in a hypothetical wave zero.
    pub base_count: u32,
    /// Extra enemies per wave number.
    pub per_wave_increment: u32,
}

impl Default for WaveTuning {
    fn default() -> Self {
        Self {
            base_count: 4,
            per_wave_increment: 2,
        }
    }
}

/// Logical arena size; entity positions are clamped inside it.
#[derive(Deserialize, Clone, Debug)]
pub struct ArenaTuning {
    pub width: f32,
    pub height: f32,
}

impl Default for ArenaTuning {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl ArenaTuning {
    /// Clamp a center position so a sprite of the given half extent stays
    /// fully inside the arena. The arena is centered on the origin.
    pub fn clamp(&self, position: Vec2, half_extent: Vec2) -> Vec2 {
        let limit = Vec2::new(self.width, self.height) / 2.0 - half_extent;
        Vec2::new(
            position.x.clamp(-limit.x, limit.x),
            position.y.clamp(-limit.y, limit.y),
        )
    }
}

/// All gameplay tuning, loaded once at startup.
#[derive(Resource, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct GameTuning {
    pub arena: ArenaTuning,
    pub player: PlayerTuning,
    pub enemy: EnemyTuning,
    pub waves: WaveTuning,
}

impl GameTuning {
    /// Load tuning from [`TUNING_PATH`], falling back to defaults.
    pub fn load() -> Self {
        match Self::read(TUNING_PATH) {
            Ok(tuning) => {
                info!("Loaded tuning from {}", TUNING_PATH);
                tuning
            }
            Err(e) => {
                warn!("{}. Using default tuning.", e);
                Self::default()
            }
        }
    }

    fn read(path: &str) -> Result<Self, TuningError> {
        let contents = fs::read_to_string(path).map_err(|e| TuningError::ReadError {
            path: path.to_string(),
            details: e.to_string(),
        })?;
        ron::from_str(&contents).map_err(|e| TuningError::ParseError {
            path: path.to_string(),
            details: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_sprite_inside_arena() {
        let arena = ArenaTuning {
            width: 200.0,
            height: 100.0,
        };
        let half = Vec2::new(10.0, 5.0);

        let clamped = arena.clamp(Vec2::new(500.0, -500.0), half);
        assert_eq!(clamped, Vec2::new(90.0, -45.0));

        // Interior positions pass through untouched.
        let inside = Vec2::new(12.0, -7.0);
        assert_eq!(arena.clamp(inside, half), inside);
    }
}
