//!
//!

use crate::prelude::*;
use bevy::prelude::*;

/// All the components needed to generate a waypoint field and serve route
/// requests across it
#[derive(Bundle)]
pub struct WaypointFieldBundle {
	/// Area, orientation and lattice spacing of the field
	dimensions: FieldDimensions,
	/// Collaborators that place and validate sampled positions
	samplers: FieldSamplers,
	/// The generated waypoints
	node_field: NodeField,
	/// Computed routes served to callers
	path_cache: PathCache,
	/// Route point logging toggle
	debug: FieldDebug,
}

impl WaypointFieldBundle {
	/// Create a new instance of [WaypointFieldBundle] with its [NodeField]
	/// generated up front from the supplied dimensions and collaborators
	pub fn new(dimensions: FieldDimensions, samplers: FieldSamplers) -> Self {
		let node_field = NodeField::generate(&dimensions, &samplers);
		WaypointFieldBundle {
			dimensions,
			samplers,
			node_field,
			path_cache: PathCache::default(),
			debug: FieldDebug::default(),
		}
	}
	/// Enable logging of resolved route points
	pub fn with_debug(mut self) -> Self {
		self.debug = FieldDebug::new(true);
		self
	}
}
