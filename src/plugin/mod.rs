//! Defines the Bevy [Plugin] for waypoint fields
//!

use crate::prelude::*;
use bevy::prelude::*;

pub mod field_layer;
pub mod path_layer;

/// Groups the systems so that purging stale cache entries always runs ahead
/// of fresh generation and route work in a tick
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum OrderingSet {
	/// Cache tidying
	Tidy,
	/// Field rebuilding and route calculation
	Calculate,
}

/// Registers the types, events and systems for generating waypoint fields
/// and serving route requests across them
pub struct WaypointFieldPlugin;

impl Plugin for WaypointFieldPlugin {
	#[cfg(not(tarpaulin_include))]
	fn build(&self, app: &mut App) {
		app.register_type::<FieldDimensions>()
			.register_type::<FieldDebug>()
			.register_type::<PathNode>()
			.register_type::<NodeField>()
			.register_type::<PathMetadata>()
			.add_event::<field_layer::EventRebuildNodeField>()
			.add_event::<path_layer::EventPathRequest>()
			.configure_sets(Update, (OrderingSet::Tidy, OrderingSet::Calculate).chain())
			.add_systems(
				Update,
				(
					path_layer::cleanup_old_paths.in_set(OrderingSet::Tidy),
					(
						field_layer::process_field_rebuilds,
						path_layer::process_path_requests,
					)
						.chain()
						.in_set(OrderingSet::Calculate),
				),
			);
	}
}
