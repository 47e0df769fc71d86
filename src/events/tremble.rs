//! Tremble completion event.
//!
//! When a [`Tremble`](crate::components::tremble::Tremble) with a cycle limit
//! passes its stop phase, the tremble system removes the component and
//! triggers a [`TrembleFinishedEvent`]. Explicit stops do not trigger it.
//!
//! # Example
//!
//! ```ignore
//! world.add_observer(|trigger: On<TrembleFinishedEvent>| {
//!     println!("{:?} stopped trembling", trigger.event().entity);
//! });
//! ```

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

/// Event emitted when a tremble detaches itself after its last cycle.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrembleFinishedEvent {
    /// The character that stopped trembling.
    pub entity: Entity,
}

/// Observer that logs finished trembles.
pub fn tremble_finished_observer(trigger: On<TrembleFinishedEvent>) {
    debug!("Tremble finished on {:?}", trigger.event().entity);
}
