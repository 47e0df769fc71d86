//! ECS components for characters.
//!
//! Submodules overview:
//! - [`character`] – player/map event identity and script id mapping
//! - [`persistent`] – marker for characters that persist across map switches
//! - [`rigidbody`] – simple kinematic body storing velocity
//! - [`screenposition`] – base screen-space position
//! - [`tremble`] – horizontal sinusoidal shake and its persisted record

pub mod character;
pub mod persistent;
pub mod rigidbody;
pub mod screenposition;
pub mod tremble;
