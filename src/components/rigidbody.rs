//! Simple kinematic body for characters.
//!
//! Holds a velocity in screen pixels per second. Integrated into
//! [`ScreenPosition`](super::screenposition::ScreenPosition) by the
//! [`movement`](crate::systems::movement::movement) system, which is the
//! character's own per-tick update and always runs before tremble effects.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct RigidBody {
    pub vx: f32,
    pub vy: f32,
    /// Frozen bodies keep their velocity but do not move.
    pub frozen: bool,
}

impl RigidBody {
    pub fn new(vx: f32, vy: f32) -> Self {
        RigidBody {
            vx,
            vy,
            frozen: false,
        }
    }

    pub fn freeze(&mut self) {
        self.frozen = true;
    }
}
