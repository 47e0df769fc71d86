//! Event types and observers used by the engine.
//!
//! Submodules:
//! - [`tremble`] – notification fired when a tremble runs out of cycles
pub mod tremble;
