//! Persistent character marker component.
//!
//! Characters with the [`Persistent`] component survive map switches. The
//! player carries it; map events never do, so any tremble attached to an
//! event is dropped together with the event when the map changes.

use bevy_ecs::prelude::Component;

/// Tag component used to mark characters that are carried into the next map.
#[derive(Component, Clone, Debug)]
pub struct Persistent;
