//! ECS resources made available to systems.
//!
//! Overview
//! - `characterregistry` – script id to entity lookup for the current map
//! - `framesnapshot` – rendered positions produced by the last tick
//! - `gameconfig` – INI-backed runtime settings
//! - `worldtime` – simulation time, delta and tick counter
pub mod characterregistry;
pub mod framesnapshot;
pub mod gameconfig;
pub mod worldtime;
