//! Script-facing tremble controller.
//!
//! Four operations make up the public call contract:
//!
//! | call | target |
//! |------|--------|
//! | [`start`] / [`stop`] | character id (`id < 0` is the player, otherwise a map event id) |
//! | [`start_by_reference`] / [`stop_by_reference`] | entity handle |
//!
//! All of them report failure through their `bool` return only. Numeric
//! arguments are taken as given: a zero amplitude attaches an inert tremble,
//! a zero speed freezes the phase, and negative values simply flow through
//! the sine formula.
//!
//! The controller keeps no state of its own. Everything lives in the
//! [`Tremble`] component on the character, and id resolution goes through the
//! [`CharacterRegistry`] resource of the world passed in.

use std::f64::consts::TAU;

use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::components::tremble::Tremble;
use crate::resources::characterregistry::CharacterRegistry;

/// Start (or re-arm) a tremble on the character with the given id.
///
/// Returns `false` if no character resolves from `id`.
pub fn start(
    world: &mut World,
    id: i32,
    amplitude: f64,
    speed: f64,
    cycle_limit: Option<f64>,
) -> bool {
    let Some(entity) = resolve(world, id) else {
        warn!("tremble start: no character with id {}", id);
        return false;
    };
    start_by_reference(world, entity, amplitude, speed, cycle_limit)
}

/// Stop the tremble on the character with the given id.
///
/// Returns `false` if no character resolves from `id` or it is not trembling.
pub fn stop(world: &mut World, id: i32) -> bool {
    let Some(entity) = resolve(world, id) else {
        warn!("tremble stop: no character with id {}", id);
        return false;
    };
    stop_by_reference(world, entity)
}

/// Start (or re-arm) a tremble on `entity`.
///
/// A character never carries more than one tremble. Calling this again on a
/// trembling character only replaces amplitude, speed and cycle limit; the
/// phase keeps running and a new stop phase is measured from it.
///
/// Returns `false` only when `entity` does not exist.
pub fn start_by_reference(
    world: &mut World,
    entity: Entity,
    amplitude: f64,
    speed: f64,
    cycle_limit: Option<f64>,
) -> bool {
    let Ok(mut entity_mut) = world.get_entity_mut(entity) else {
        warn!("tremble start: entity {:?} does not exist", entity);
        return false;
    };
    if let Some(mut tremble) = entity_mut.get_mut::<Tremble>() {
        debug!(
            "Re-arming tremble on {:?}: amplitude={}, speed={}, cycles={:?}",
            entity, amplitude, speed, cycle_limit
        );
        tremble.arm(amplitude, speed, cycle_limit);
    } else {
        debug!(
            "Attaching tremble to {:?}: amplitude={}, speed={}, cycles={:?}",
            entity, amplitude, speed, cycle_limit
        );
        entity_mut.insert(Tremble::new(amplitude, speed, cycle_limit));
    }
    true
}

/// Detach the tremble from `entity`, restoring its plain rendered position.
///
/// Returns `false` if the entity does not exist or is not trembling.
pub fn stop_by_reference(world: &mut World, entity: Entity) -> bool {
    let Ok(mut entity_mut) = world.get_entity_mut(entity) else {
        return false;
    };
    match entity_mut.take::<Tremble>() {
        Some(_) => {
            debug!("Detached tremble from {:?}", entity);
            true
        }
        None => false,
    }
}

/// Number of ticks one full cycle takes at the given phase speed.
pub fn cycles_to_frames(speed: f64) -> f64 {
    TAU / speed
}

fn resolve(world: &World, id: i32) -> Option<Entity> {
    world
        .get_resource::<CharacterRegistry>()?
        .resolve(id)
        .filter(|&e| world.get_entity(e).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{init_world, spawn_map_event, spawn_player};

    #[test]
    fn test_cycles_to_frames() {
        assert!((cycles_to_frames(0.8) - 7.853981633974483).abs() < 1e-12);
        assert!((cycles_to_frames(TAU) - 1.0).abs() < 1e-12);
        assert!(cycles_to_frames(0.0).is_infinite());
    }

    #[test]
    fn test_start_unknown_id_fails() {
        let mut world = init_world(1);
        assert!(!start(&mut world, -1, 8.0, 0.8, None));
        assert!(!start(&mut world, 5, 8.0, 0.8, None));
    }

    #[test]
    fn test_start_and_stop_by_id() {
        let mut world = init_world(1);
        let player = spawn_player(&mut world, 0.0, 0.0);
        let ev = spawn_map_event(&mut world, 5, 0.0, 0.0);

        assert!(start(&mut world, -1, 8.0, 0.8, None));
        assert!(start(&mut world, 5, 2.0, 0.1, Some(1.0)));
        assert!(world.get::<Tremble>(player).is_some());
        assert!(world.get::<Tremble>(ev).is_some());

        assert!(stop(&mut world, 5));
        assert!(world.get::<Tremble>(ev).is_none());
        assert!(!stop(&mut world, 5));
        assert!(stop(&mut world, -1));
    }

    #[test]
    fn test_stop_unattached_player_returns_false() {
        let mut world = init_world(1);
        let player = spawn_player(&mut world, 0.0, 0.0);
        assert!(!stop(&mut world, -1));
        assert!(world.get::<Tremble>(player).is_none());
    }

    #[test]
    fn test_start_by_reference_on_despawned_entity_fails() {
        let mut world = init_world(1);
        let e = world.spawn_empty().id();
        world.despawn(e);
        assert!(!start_by_reference(&mut world, e, 1.0, 1.0, None));
        assert!(!stop_by_reference(&mut world, e));
    }

    #[test]
    fn test_zero_amplitude_still_attaches() {
        let mut world = init_world(1);
        let e = world.spawn_empty().id();
        assert!(start_by_reference(&mut world, e, 0.0, 0.8, None));
        assert!(!world.get::<Tremble>(e).unwrap().is_active());
    }

    #[test]
    fn test_restart_rearms_without_second_layer() {
        let mut world = init_world(1);
        let e = world.spawn_empty().id();
        assert!(start_by_reference(&mut world, e, 8.0, 0.8, None));
        world.get_mut::<Tremble>(e).unwrap().advance();
        assert!(start_by_reference(&mut world, e, 3.0, 0.2, Some(1.0)));

        let t = world.get::<Tremble>(e).unwrap();
        assert_eq!(t.amplitude, 3.0);
        assert_eq!(t.speed, 0.2);
        assert!((t.phase - 0.8).abs() < 1e-12);
        assert!((t.stop_phase.unwrap() - (0.8 + TAU)).abs() < 1e-12);
    }
}
