//! Engine systems.
//!
//! Submodules overview
//! - [`movement`] – integrate character velocities into screen positions
//! - [`render`] – collect rendered positions into the frame snapshot
//! - [`time`] – update simulation time, delta and tick count
//! - [`tremble`] – advance tremble phases and auto-detach finished ones

pub mod movement;
pub mod render;
pub mod time;
pub mod tremble;
