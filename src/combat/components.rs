//! Combat-related components.

use bevy::prelude::*;

// Re-export from core to avoid duplication
pub use crate::core::{DamageEvent, DeathEvent};

/// Component for entities that can take damage.
///
/// Health is whole points and never goes negative.
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: i32,
    pub maximum: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self {
            current: max,
            maximum: max,
        }
    }

    /// Remove up to `amount` points, clamping at zero.
    pub fn take_damage(&mut self, amount: i32) {
        self.current = (self.current - amount).max(0);
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }
}

/// One-damage-per-swing latch.
///
/// Armed when an attack state is entered; the strike system trips it on
/// the swing's single damage attempt. However many ticks the active frame
/// spans, a tripped latch blocks any further application until the next
/// swing re-arms it.
#[derive(Component, Default, Debug, Clone, Copy)]
pub struct SwingLatch {
    pub damage_applied: bool,
}

impl SwingLatch {
    /// Re-arm for a fresh swing.
    pub fn arm(&mut self) {
        self.damage_applied = false;
    }

    /// Consume the swing's one damage attempt. Returns false if it was
    /// already spent.
    pub fn trip(&mut self) -> bool {
        if self.damage_applied {
            return false;
        }
        self.damage_applied = true;
        true
    }
}

/// Post-hit grace period; incoming damage is suppressed while positive.
#[derive(Component, Default, Debug, Clone, Copy)]
pub struct Invulnerability {
    /// Seconds of grace remaining.
    pub remaining: f32,
}

impl Invulnerability {
    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    pub fn grant(&mut self, seconds: f32) {
        self.remaining = seconds;
    }

    /// Linear decay, clamped at zero.
    pub fn tick(&mut self, dt: f32) {
        self.remaining = (self.remaining - dt).max(0.0);
    }
}

/// Running score, 10 points per kill.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct Score(pub u32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_clamps_at_zero() {
        let mut health = Health::new(3);
        health.take_damage(5);
        assert_eq!(health.current, 0);
        assert!(health.is_dead());
    }

    #[test]
    fn latch_allows_exactly_one_trip_per_arm() {
        let mut latch = SwingLatch::default();
        latch.arm();
        assert!(latch.trip());
        assert!(!latch.trip());
        assert!(!latch.trip());

        latch.arm();
        assert!(latch.trip());
    }

    #[test]
    fn invulnerability_decays_linearly() {
        let mut inv = Invulnerability::default();
        inv.grant(0.6);
        for _ in 0..59 {
            inv.tick(0.01);
        }
        assert!(inv.is_active());
        inv.tick(0.02);
        assert!(!inv.is_active());
    }
}
