//! Computed routes are cached so that repeat requests between the same
//! endpoints are served without re-running the search
//!

use crate::prelude::*;
use bevy::prelude::*;
use std::collections::BTreeMap;
use std::time::Duration;

/// Identifies a cached route by the endpoints it was requested with.
/// Endpoint coordinates are quantised to whole units so that keys can be
/// ordered and compared
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Reflect)]
pub struct PathMetadata {
	/// Quantised world position the route was requested from
	source: (i32, i32, i32),
	/// Quantised world position the route was requested to
	target: (i32, i32, i32),
	//? If a game is running for 136 years bad things will start happening here
	/// Marks the route based on time elapsed since app start, used to enable
	/// automatic cleardown of long lived routes that are probably not needed
	/// anymore
	time_generated: Duration,
}

// we don't want to compare `time_generated` so manually impl PartialEq
impl PartialEq for PathMetadata {
	fn eq(&self, other: &Self) -> bool {
		self.source == other.source && self.target == other.target
	}
}
impl Eq for PathMetadata {}

impl Ord for PathMetadata {
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		(self.source, self.target).cmp(&(other.source, other.target))
	}
}

impl PartialOrd for PathMetadata {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		Some(self.cmp(other))
	}
}

impl PathMetadata {
	/// Create a new instance of [PathMetadata] from the requested endpoints
	pub fn new(source: Vec3, target: Vec3, time_generated: Duration) -> Self {
		PathMetadata {
			source: quantise(source),
			target: quantise(target),
			time_generated,
		}
	}
	/// Get the quantised source position
	pub fn get_source(&self) -> (i32, i32, i32) {
		self.source
	}
	/// Get the quantised target position
	pub fn get_target(&self) -> (i32, i32, i32) {
		self.target
	}
	/// Get when the route was generated
	pub fn get_time_generated(&self) -> Duration {
		self.time_generated
	}
}

/// Round a world position to whole units for use as a cache key
fn quantise(point: Vec3) -> (i32, i32, i32) {
	(
		point.x.round() as i32,
		point.y.round() as i32,
		point.z.round() as i32,
	)
}

/// Routes computed from path requests are placed into this cache so that
/// multiple actors interested in the same journey can read from the same
/// dataset
#[derive(Component, Default, Clone)]
pub struct PathCache {
	/// Computed routes keyed by their requested endpoints
	routes: BTreeMap<PathMetadata, Vec<PathNode>>,
}

impl PathCache {
	/// Get the map of routes
	pub fn get(&self) -> &BTreeMap<PathMetadata, Vec<PathNode>> {
		&self.routes
	}
	/// Get a mutable reference to the map of routes
	pub fn get_mut(&mut self) -> &mut BTreeMap<PathMetadata, Vec<PathNode>> {
		&mut self.routes
	}
	/// Get a route between two endpoints. Returns [None] if it doesn't exist
	pub fn get_route(&self, source: Vec3, target: Vec3) -> Option<&Vec<PathNode>> {
		let metadata = PathMetadata::new(source, target, Duration::default());
		let route = self.routes.get(&metadata);
		trace!("Route: {:?}", route);
		route
	}
	/// Insert a computed route into the cache
	pub fn insert_route(
		&mut self,
		source: Vec3,
		target: Vec3,
		elapsed_duration: Duration,
		route: Vec<PathNode>,
	) {
		let metadata = PathMetadata::new(source, target, elapsed_duration);
		self.routes.insert(metadata, route);
	}
	/// Remove a route from the cache
	pub fn remove_route(&mut self, metadata: PathMetadata) {
		self.routes.remove(&metadata);
	}
}
