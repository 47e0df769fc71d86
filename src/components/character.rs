//! Character identity components.
//!
//! A character is either the single [`Player`] or one of the [`MapEvent`]s of
//! the current map. Script-facing calls address characters by an integer id:
//! negative ids mean the player, non-negative ids are map event ids. See
//! [`CharacterRegistry`](crate::resources::characterregistry::CharacterRegistry).

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Marker for the player character.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Player;

/// An event placed on the current map.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MapEvent {
    pub id: u32,
}

/// Stable, serializable reference to a character.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CharacterKey {
    Player,
    Event(u32),
}

impl CharacterKey {
    /// Map a script id to a key. Negative ids address the player.
    pub fn from_id(id: i32) -> Self {
        if id < 0 {
            CharacterKey::Player
        } else {
            CharacterKey::Event(id as u32)
        }
    }
}
