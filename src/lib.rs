//! This is a plugin for Bevy game engine to generate sparse fields of walkable waypoints over bounded areas and find routes across them with A-star search
//!

pub mod waypoints;
pub mod bundle;
pub mod plugin;

pub mod prelude;
