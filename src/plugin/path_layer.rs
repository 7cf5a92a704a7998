//! Logic relating to serving route requests
//!

use crate::prelude::*;
use bevy::prelude::*;

/// A request to compute a route between two world points across any
/// generated waypoint field
#[derive(Event)]
pub struct EventPathRequest {
	/// World position the route should start from
	source: Vec3,
	/// World position the route should lead to
	target: Vec3,
}

impl EventPathRequest {
	/// Create a new instance of [EventPathRequest]
	pub fn new(source: Vec3, target: Vec3) -> Self {
		EventPathRequest { source, target }
	}
	/// Get the requested start position
	pub fn get_source(&self) -> Vec3 {
		self.source
	}
	/// Get the requested end position
	pub fn get_target(&self) -> Vec3 {
		self.target
	}
}

/// Process [EventPathRequest] and store computed routes in the [PathCache].
/// Requests already served by a cached route are skipped, a request no field
/// can serve leaves the cache untouched
#[cfg(not(tarpaulin_include))]
pub fn process_path_requests(
	mut events: EventReader<EventPathRequest>,
	mut cache_q: Query<(&NodeField, &FieldDebug, &mut PathCache)>,
	time: Res<Time>,
) {
	for event in events.read() {
		for (field, debug, mut cache) in cache_q.iter_mut() {
			// only run the search if the cache doesn't contain the route already
			if cache
				.get_route(event.get_source(), event.get_target())
				.is_some()
			{
				continue;
			}
			let route = field.find_path(event.get_source(), event.get_target());
			if route.is_empty() {
				// either endpoint failed to resolve to a waypoint or no
				// route exists between them
				debug!(
					"No route from {:?} to {:?}",
					event.get_source(),
					event.get_target()
				);
				continue;
			}
			if debug.is_enabled() {
				for node in route.iter() {
					info!("Route point resolved at {:?}", node.get_position());
				}
			}
			cache.insert_route(
				event.get_source(),
				event.get_target(),
				time.elapsed(),
				route,
			);
		}
	}
}

/// Purge any routes older than 15 minutes
#[cfg(not(tarpaulin_include))]
pub fn cleanup_old_paths(mut q_path_cache: Query<&mut PathCache>, time: Res<Time>) {
	for mut cache in q_path_cache.iter_mut() {
		let mut routes_to_purge = Vec::new();
		for data in cache.get_mut().keys() {
			let elapsed = time.elapsed();
			let diff = elapsed.saturating_sub(data.get_time_generated());
			if diff.as_secs() > 900 {
				routes_to_purge.push(*data);
			}
		}
		for purge in routes_to_purge.iter() {
			cache.remove_route(*purge);
		}
	}
}
