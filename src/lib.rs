//! Event tremble library.
//!
//! A horizontal shake effect for 2D characters built on `bevy_ecs`. This
//! module exposes the components, resources, systems, events, the
//! script-facing [`tremble`] controller and save file handling for use by
//! the runner binary and integration tests.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod save;
pub mod systems;
pub mod tremble;
