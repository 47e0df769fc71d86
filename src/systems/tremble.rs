//! Tremble advancement system.
//!
//! Each tick, for every character with a
//! [`Tremble`](crate::components::tremble::Tremble):
//!
//! 1. Inactive trembles (zero amplitude) are skipped
//! 2. `phase += speed` and the pixel offset is recomputed
//! 3. If the phase passed `stop_phase`, the component is removed and a
//!    [`TrembleFinishedEvent`] is triggered
//!
//! Runs after the characters' own update systems so their regular
//! behavior is applied first.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::tremble::Tremble;
use crate::events::tremble::TrembleFinishedEvent;

/// Advances every [`Tremble`] by one tick and detaches the finished ones.
///
/// Removal goes through `commands`, so the render pass of the same tick
/// already sees the character without its offset.
pub fn tremble_system(mut query: Query<(Entity, &mut Tremble)>, mut commands: Commands) {
    for (entity, mut tremble) in query.iter_mut() {
        if !tremble.advance() {
            continue;
        }
        debug!(
            "Tremble on {:?} reached stop phase {:?} at phase {}",
            entity, tremble.stop_phase, tremble.phase
        );
        commands.entity(entity).remove::<Tremble>();
        commands.trigger(TrembleFinishedEvent { entity });
    }
}
