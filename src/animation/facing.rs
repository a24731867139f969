//! Horizontal facing with a flip dead-zone.

use bevy::prelude::*;

/// Which way an entity's sprite points along the x axis.
///
/// The sign only flips when horizontal intent exceeds a small dead-zone,
/// so jitter around zero never causes flicker.
#[derive(Component, Debug, Clone, Copy)]
pub struct Facing {
    /// -1.0 or +1.0.
    pub sign: f32,
}

impl Default for Facing {
    fn default() -> Self {
        Self { sign: 1.0 }
    }
}

impl Facing {
    /// Intent magnitude below which the facing holds its current sign.
    pub const DEAD_ZONE: f32 = 0.01;

    /// Flip toward `horizontal` if it clears the dead-zone.
    pub fn turn_toward(&mut self, horizontal: f32) {
        if horizontal > Self::DEAD_ZONE {
            self.sign = 1.0;
        } else if horizontal < -Self::DEAD_ZONE {
            self.sign = -1.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flips_only_past_dead_zone() {
        let mut facing = Facing::default();
        facing.turn_toward(-0.005);
        assert_eq!(facing.sign, 1.0);

        facing.turn_toward(-0.5);
        assert_eq!(facing.sign, -1.0);

        facing.turn_toward(0.009);
        assert_eq!(facing.sign, -1.0);

        facing.turn_toward(1.0);
        assert_eq!(facing.sign, 1.0);
    }
}
