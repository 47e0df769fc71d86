//! Character movement.
//!
//! This is the characters' own per-tick update. It belongs to
//! [`CharacterUpdateSet`](crate::game::CharacterUpdateSet), which always runs
//! before tremble effects are advanced.

use bevy_ecs::prelude::*;

use crate::components::rigidbody::RigidBody;
use crate::components::screenposition::ScreenPosition;
use crate::resources::worldtime::WorldTime;

/// Integrate velocities into base screen positions.
pub fn movement(mut query: Query<(&mut ScreenPosition, &RigidBody)>, time: Res<WorldTime>) {
    for (mut position, rigidbody) in query.iter_mut() {
        if rigidbody.frozen {
            continue;
        }
        position.translate(rigidbody.vx * time.delta, rigidbody.vy * time.delta);
    }
}
