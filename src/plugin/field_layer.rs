//! Logic relating to [NodeField] generation
//!

use crate::prelude::*;
use bevy::prelude::*;

/// A request to rebuild the [NodeField] of every waypoint field from its
/// current [FieldDimensions] and [FieldSamplers], discarding the previous
/// nodes wholesale
#[derive(Event, Default)]
pub struct EventRebuildNodeField;

/// Read [EventRebuildNodeField] and regenerate each [NodeField]. Any number
/// of queued events are coalesced into a single rebuild per field as
/// regeneration is idempotent within a tick
#[cfg(not(tarpaulin_include))]
pub fn process_field_rebuilds(
	mut events: EventReader<EventRebuildNodeField>,
	mut query: Query<(
		&FieldDimensions,
		&FieldSamplers,
		&mut NodeField,
		&mut PathCache,
	)>,
) {
	if events.read().next().is_some() {
		events.clear();
		for (dimensions, samplers, mut field, mut cache) in query.iter_mut() {
			*field = NodeField::generate(dimensions, samplers);
			// cached routes may reference nodes that no longer exist
			cache.get_mut().clear();
			debug!("Rebuilt node field with {} nodes", field.get().len());
		}
	}
}
