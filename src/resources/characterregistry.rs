//! Lookup table from script ids to character entities.
//!
//! The registry only knows about the current map: [`crate::game::switch_map`]
//! clears the event table, while the player entry is kept.

use bevy_ecs::prelude::{Entity, Resource};
use rustc_hash::FxHashMap;

use crate::components::character::CharacterKey;

/// Current map id, the player entity and the map events by id.
#[derive(Resource, Debug, Default)]
pub struct CharacterRegistry {
    pub map_id: u32,
    pub player: Option<Entity>,
    pub events: FxHashMap<u32, Entity>,
}

impl CharacterRegistry {
    pub fn new(map_id: u32) -> Self {
        CharacterRegistry {
            map_id,
            ..Default::default()
        }
    }

    /// Resolve a script id. Negative ids mean the player.
    pub fn resolve(&self, id: i32) -> Option<Entity> {
        self.get(CharacterKey::from_id(id))
    }

    pub fn get(&self, key: CharacterKey) -> Option<Entity> {
        match key {
            CharacterKey::Player => self.player,
            CharacterKey::Event(id) => self.events.get(&id).copied(),
        }
    }

    pub fn insert_event(&mut self, id: u32, entity: Entity) -> Option<Entity> {
        self.events.insert(id, entity)
    }

    /// Map events of the current map, ordered by id.
    pub fn map_events(&self) -> Vec<(u32, Entity)> {
        let mut events: Vec<(u32, Entity)> =
            self.events.iter().map(|(id, e)| (*id, *e)).collect();
        events.sort_by_key(|(id, _)| *id);
        events
    }

    /// Player first, then map events by id.
    pub fn characters(&self) -> Vec<(CharacterKey, Entity)> {
        let mut out = Vec::with_capacity(self.events.len() + 1);
        if let Some(player) = self.player {
            out.push((CharacterKey::Player, player));
        }
        out.extend(
            self.map_events()
                .into_iter()
                .map(|(id, e)| (CharacterKey::Event(id), e)),
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::world::World;

    #[test]
    fn test_resolve_player_and_events() {
        let mut world = World::new();
        let player = world.spawn_empty().id();
        let ev = world.spawn_empty().id();

        let mut reg = CharacterRegistry::new(1);
        assert!(reg.resolve(-1).is_none());
        reg.player = Some(player);
        reg.insert_event(3, ev);

        assert_eq!(reg.resolve(-1), Some(player));
        assert_eq!(reg.resolve(-42), Some(player));
        assert_eq!(reg.resolve(3), Some(ev));
        assert!(reg.resolve(4).is_none());
    }

    #[test]
    fn test_characters_lists_player_first() {
        let mut world = World::new();
        let player = world.spawn_empty().id();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();

        let mut reg = CharacterRegistry::new(1);
        reg.player = Some(player);
        reg.insert_event(7, a);
        reg.insert_event(2, b);

        let chars = reg.characters();
        assert_eq!(
            chars,
            vec![
                (CharacterKey::Player, player),
                (CharacterKey::Event(2), b),
                (CharacterKey::Event(7), a),
            ]
        );
    }
}
