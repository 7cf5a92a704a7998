//! `use bevy_waypoint_field_plugin::prelude::*;` to import common structures and methods
//!

#[doc(hidden)]
pub use crate::waypoints::{node_field::*, path_cache::*, sampling::*, search::*, *};

#[doc(hidden)]
pub use crate::{
	bundle::*,
	plugin::{field_layer::*, path_layer::*, *},
};
