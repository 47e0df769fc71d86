//! Rendered character positions for the current tick.
//!
//! Rebuilt from scratch by [`render_system`](crate::systems::render::render_system)
//! every tick, so it never holds a tremble offset older than one tick.

use bevy_ecs::prelude::{Entity, Resource};

/// One drawn character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCmd {
    pub entity: Entity,
    pub x: f32,
    pub y: f32,
}

#[derive(Resource, Debug, Default)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub draws: Vec<DrawCmd>,
}

impl FrameSnapshot {
    pub fn get(&self, entity: Entity) -> Option<&DrawCmd> {
        self.draws.iter().find(|d| d.entity == entity)
    }
}
