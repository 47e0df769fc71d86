//! World setup, map transitions and the per-tick schedule.
//!
//! Characters are spawned through [`spawn_player`] and [`spawn_map_event`] so
//! the [`CharacterRegistry`] always mirrors what lives in the world. Changing
//! maps with [`switch_map`] despawns every non-[`Persistent`] character, which
//! also drops any tremble attached to them.

use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::components::character::{MapEvent, Player};
use crate::components::persistent::Persistent;
use crate::components::rigidbody::RigidBody;
use crate::components::screenposition::ScreenPosition;
use crate::events::tremble::tremble_finished_observer;
use crate::resources::characterregistry::CharacterRegistry;
use crate::resources::framesnapshot::FrameSnapshot;
use crate::resources::worldtime::WorldTime;
use crate::systems::movement::movement;
use crate::systems::render::render_system;
use crate::systems::time::update_world_time;
use crate::systems::tremble::tremble_system;

/// Systems that implement the characters' own per-tick behavior.
///
/// Tremble advancement is ordered after this set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CharacterUpdateSet;

/// Create a world with every resource the update schedule needs.
pub fn init_world(map_id: u32) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(CharacterRegistry::new(map_id));
    world.insert_resource(FrameSnapshot::default());
    world.add_observer(tremble_finished_observer);
    world.flush();
    world
}

/// Build the per-tick schedule: character update, tremble, render.
pub fn build_update_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(movement.in_set(CharacterUpdateSet));
    update.add_systems(tremble_system.after(CharacterUpdateSet));
    update.add_systems(render_system.after(tremble_system));
    update
}

/// Run one simulation tick.
pub fn tick(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    schedule.run(world);
    world.clear_trackers();
}

/// Spawn the player, or move the existing one.
pub fn spawn_player(world: &mut World, x: f32, y: f32) -> Entity {
    let registered = world.get_resource_or_init::<CharacterRegistry>().player;
    let existing = registered.filter(|&e| world.get_entity(e).is_ok());
    if let Some(player) = existing {
        debug!("Player already spawned, moving it to ({}, {})", x, y);
        world.entity_mut(player).insert(ScreenPosition::new(x, y));
        return player;
    }

    let player = world
        .spawn((Player, Persistent, ScreenPosition::new(x, y)))
        .id();
    world.resource_mut::<CharacterRegistry>().player = Some(player);
    player
}

/// Spawn a map event with the given id on the current map.
///
/// An event already registered under the same id is despawned first.
pub fn spawn_map_event(world: &mut World, id: u32, x: f32, y: f32) -> Entity {
    let entity = world
        .spawn((MapEvent { id }, ScreenPosition::new(x, y)))
        .id();
    let replaced = world
        .get_resource_or_init::<CharacterRegistry>()
        .insert_event(id, entity);
    if let Some(old) = replaced {
        warn!("Map event {} spawned twice, despawning {:?}", id, old);
        world.despawn(old);
    }
    entity
}

/// Leave the current map and enter `map_id`.
///
/// Non-persistent characters are despawned together with their tremble
/// state. The player is carried over unchanged, including a running tremble.
pub fn switch_map(world: &mut World, map_id: u32) {
    let leaving: Vec<Entity> = world
        .query_filtered::<Entity, (With<MapEvent>, Without<Persistent>)>()
        .iter(world)
        .collect();
    for entity in &leaving {
        world.despawn(*entity);
    }

    let mut registry = world.get_resource_or_init::<CharacterRegistry>();
    let old_map = registry.map_id;
    registry.map_id = map_id;
    registry.events.clear();
    info!(
        "Switched map {} -> {} ({} events despawned)",
        old_map,
        map_id,
        leaving.len()
    );
}

/// Populate the current map with a player and a few events.
pub fn setup_demo_map(world: &mut World) {
    spawn_player(world, 160.0, 120.0);
    spawn_map_event(world, 1, 64.0, 48.0);
    let walker = spawn_map_event(world, 2, 96.0, 48.0);
    world.entity_mut(walker).insert(RigidBody::new(16.0, 0.0));
    spawn_map_event(world, 3, 128.0, 48.0);
}
