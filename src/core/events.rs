//! Global events used for cross-system communication.
//!
//! Events allow decoupled systems to communicate. The combat system sends
//! DamageEvents, and the damage system receives them to apply the actual
//! health reduction. This keeps systems independent and testable.

use bevy::prelude::*;

/// Sent when an entity takes a hit that should cost health.
///
/// The damage system listens for these events and applies the actual
/// health reduction, honoring the target's invulnerability window.
#[derive(Event)]
pub struct DamageEvent {
    /// Entity receiving damage
    pub target: Entity,
    /// Entity that caused the damage
    pub source: Entity,
    /// Damage amount in whole health points
    pub amount: i32,
}

/// Sent when an entity's health reaches 0.
///
/// Systems listen for this to route deaths: enemies enter their dying
/// animation and award score, the player triggers game over.
#[derive(Event)]
pub struct DeathEvent {
    /// Entity that died
    pub entity: Entity,
    /// Entity that killed them (if any)
    pub killed_by: Option<Entity>,
}
