//! Save file capture and restoration.
//!
//! A save file holds the current map id and, per character, its base screen
//! position plus an optional [`TrembleRecord`]. Live tremble state (phase,
//! offset, stop phase) is never written.
//!
//! Loading happens in two steps:
//!
//! 1. Base restoration: switch to the saved map, respawn its events and move
//!    the player. Any tremble still running in the world is dropped.
//! 2. Re-arm: every restored character whose record has a non-zero amplitude
//!    gets a fresh tremble through [`start_by_reference`], starting again from
//!    phase zero.

use std::fs;
use std::path::Path;

use bevy_ecs::prelude::*;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::character::CharacterKey;
use crate::components::screenposition::ScreenPosition;
use crate::components::tremble::{Tremble, TrembleRecord};
use crate::game::{spawn_map_event, spawn_player, switch_map};
use crate::resources::characterregistry::CharacterRegistry;
use crate::tremble::start_by_reference;

/// Errors that can occur when reading or writing save files.
#[derive(Debug, Error)]
pub enum SaveError {
    /// File could not be read or written.
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON (de)serialization failed.
    #[error("Invalid save data in '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// One persisted character.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SavedCharacter {
    pub key: CharacterKey,
    pub x: f32,
    pub y: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tremble: Option<TrembleRecord>,
}

/// Whole save file contents.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct SaveFile {
    pub map_id: u32,
    pub characters: Vec<SavedCharacter>,
}

impl SaveFile {
    pub fn character(&self, key: CharacterKey) -> Option<&SavedCharacter> {
        self.characters.iter().find(|c| c.key == key)
    }
}

/// Capture the player and the current map's events as plain data.
pub fn extract_save_contents(world: &World) -> SaveFile {
    let Some(registry) = world.get_resource::<CharacterRegistry>() else {
        warn!("No CharacterRegistry in world, saving an empty file");
        return SaveFile::default();
    };

    let mut characters = Vec::new();
    for (key, entity) in registry.characters() {
        let Some(pos) = world.get::<ScreenPosition>(entity) else {
            warn!("{:?} ({:?}) has no ScreenPosition, not saved", key, entity);
            continue;
        };
        characters.push(SavedCharacter {
            key,
            x: pos.x,
            y: pos.y,
            tremble: world.get::<Tremble>(entity).map(Tremble::record),
        });
    }

    SaveFile {
        map_id: registry.map_id,
        characters,
    }
}

/// Restore a save into `world`, then re-arm persisted trembles.
///
/// Returns the number of trembles re-armed.
pub fn restore_save_contents(world: &mut World, save: &SaveFile) -> usize {
    switch_map(world, save.map_id);
    let player = world.get_resource_or_init::<CharacterRegistry>().player;
    if let Some(mut player) = player.and_then(|e| world.get_entity_mut(e).ok()) {
        player.remove::<Tremble>();
    }

    let mut rearm = Vec::new();
    for saved in &save.characters {
        let entity = match saved.key {
            CharacterKey::Player => spawn_player(world, saved.x, saved.y),
            CharacterKey::Event(id) => spawn_map_event(world, id, saved.x, saved.y),
        };
        if let Some(record) = saved.tremble.filter(TrembleRecord::should_rearm) {
            rearm.push((entity, record));
        }
    }

    let mut rearmed = 0;
    for (entity, record) in rearm {
        if start_by_reference(world, entity, record.amplitude, record.speed, record.cycle_limit) {
            rearmed += 1;
        }
    }
    info!(
        "Restored map {} with {} characters, {} trembles re-armed",
        save.map_id,
        save.characters.len(),
        rearmed
    );
    rearmed
}

/// Write a save file as pretty JSON.
pub fn write_save(path: impl AsRef<Path>, save: &SaveFile) -> Result<(), SaveError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(save).map_err(|source| SaveError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    fs::write(path, json).map_err(|source| SaveError::Io {
        path: path.display().to_string(),
        source,
    })?;
    info!("Saved game to {:?}", path);
    Ok(())
}

/// Read a save file written by [`write_save`].
pub fn read_save(path: impl AsRef<Path>) -> Result<SaveFile, SaveError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| SaveError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| SaveError::Parse {
        path: path.display().to_string(),
        source,
    })
}
