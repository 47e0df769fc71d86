//! Headless render pass.
//!
//! Collects where every character would be drawn this tick into the
//! [`FrameSnapshot`] resource. The horizontal coordinate goes through
//! [`ScreenPosition::rendered_x`], so tremble offsets are applied on the fly.

use bevy_ecs::prelude::*;

use crate::components::screenposition::ScreenPosition;
use crate::components::tremble::Tremble;
use crate::resources::framesnapshot::{DrawCmd, FrameSnapshot};
use crate::resources::worldtime::WorldTime;

/// Rebuilds the [`FrameSnapshot`] with the rendered position of every
/// character and stamps it with the current tick.
pub fn render_system(
    query: Query<(Entity, &ScreenPosition, Option<&Tremble>)>,
    time: Res<WorldTime>,
    mut snapshot: ResMut<FrameSnapshot>,
) {
    snapshot.frame = time.frame_count;
    snapshot.draws.clear();
    for (entity, pos, tremble) in query.iter() {
        snapshot.draws.push(DrawCmd {
            entity,
            x: pos.rendered_x(tremble),
            y: pos.y,
        });
    }
}
