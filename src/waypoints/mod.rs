//! A waypoint field is a means of handling pathfinding for agents confined
//! to a bounded area, supplementary to a general purpose navigation mesh.
//!
//! A rectangular area is sampled on a regular lattice. Each sample is placed
//! on the ground beneath it and kept as a waypoint when it sits on navigable
//! ground outside of any obstructing structure. Routes between two arbitrary
//! world points are then found with A-star search across the surviving
//! waypoints, where neighbours are decided by proximity rather than a fixed
//! grid topology because some sampled cells are discarded.
//!
//! ```text
//!  x---x---x---x
//!  |   |   |   |
//!  x---x   #   x     x - retained waypoint
//!  |   |       |     # - sample rejected by a structure or missing navmesh
//!  x---x   #   x
//!  |   |   |   |
//!  x---x---x---x
//! ```
//!
//! Definitions:
//!
//! * Node field - the generated collection of walkable waypoints covering a bounded area
//! * g-cost - accumulated route cost from the start node along the best known route
//! * h-cost - heuristic estimate of remaining cost from a node to the goal
//! * f-cost - `g-cost + h-cost`, the a-star priority key
//! * Open set - frontier of discovered but not yet finalised nodes awaiting expansion
//! * Closed set - finalised nodes which are never re-examined
//! * Retrace - reconstruction of the final route by following parent links from the goal back to the start, then reversing
//!

pub mod node_field;
pub mod path_cache;
pub mod sampling;
pub mod search;

use bevy::prelude::*;

/// Vertical clearance added to a waypoint once its sample has been snapped
/// to the ground, lifting it out of the surface geometry
pub const NODE_CLEARANCE: f32 = 50.0;
/// Scale factor applied to the field spacing to produce the radius within
/// which another waypoint counts as a neighbour. Sized so that diagonal
/// lattice neighbours fall inside it while two-step orthogonal ones do not
pub const NEIGHBOUR_RADIUS_FACTOR: f32 = 1.65;
/// Scale factor applied to the field spacing to produce the radius within
/// which an arbitrary world point can resolve to a waypoint
pub const NODE_RESOLVE_RADIUS_FACTOR: f32 = 1.75;
/// Upper bound on the number of neighbours any waypoint exposes to the
/// search, the nearest ones win when more sit within the neighbour radius
pub const MAX_NEIGHBOURS: usize = 8;
/// Lateral nudge applied to samples sitting exactly on the `z` origin plane
/// where the underlying terrain query degenerates
pub const DEGENERATE_AXIS_NUDGE: f32 = 1.0;
/// Default tolerance extent for navigation mesh projection. Deliberately
/// tall on `y` so that samples floating above uneven terrain still resolve,
/// and laterally tight on `x`/`z` to stay precise on the horizontal plane.
/// Unusual errors occur when the vertical tolerance is reduced
pub const DEFAULT_NAV_QUERY_EXTENT: Vec3 = Vec3::new(50.0, 5000.0, 50.0);

/// Describes the oriented rectangular area a node field covers and the
/// lattice spacing used to sample it
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Component, Clone, Copy, Debug, Reflect)]
pub struct FieldDimensions {
	/// Centre of the area in world space
	centre: Vec3,
	/// Orientation of the area, a rotation about the vertical axis
	rotation: Quat,
	/// Half the width (local `x`) and half the length (local `z`) of the area
	half_extents: Vec2,
	/// Distance between sampled lattice points.
	///
	/// Ideally this is as high as possible to keep the field small, however
	/// on maps where narrow tracks exist a lower setting ensures a route can
	/// be found through them
	spacing: f32,
	/// Tolerance extent used when projecting a sample onto the navigation
	/// mesh, see [DEFAULT_NAV_QUERY_EXTENT]
	nav_query_extent: Vec3,
}

impl FieldDimensions {
	/// Create a new instance of [FieldDimensions]. The `half_extents` are
	/// half the width and half the length of the area, so an area of
	/// `800x800` units is expressed as `Vec2::new(400.0, 400.0)`
	pub fn new(centre: Vec3, rotation: Quat, half_extents: Vec2, spacing: f32) -> Self {
		if spacing <= 0.0 {
			panic!("Field spacing must be positive, got {}", spacing);
		}
		if half_extents.x <= 0.0 || half_extents.y <= 0.0 {
			panic!(
				"Field half extents must be positive, got ({}, {})",
				half_extents.x, half_extents.y
			);
		}
		FieldDimensions {
			centre,
			rotation,
			half_extents,
			spacing,
			nav_query_extent: DEFAULT_NAV_QUERY_EXTENT,
		}
	}
	/// Replace the navigation mesh projection tolerance
	pub fn set_nav_query_extent(&mut self, extent: Vec3) {
		self.nav_query_extent = extent;
	}
	/// Get the centre of the area
	pub fn get_centre(&self) -> Vec3 {
		self.centre
	}
	/// Get the distance between sampled lattice points
	pub fn get_spacing(&self) -> f32 {
		self.spacing
	}
	/// Get the navigation mesh projection tolerance
	pub fn get_nav_query_extent(&self) -> Vec3 {
		self.nav_query_extent
	}
	/// Get the full width of the area along its local `x` axis
	pub fn get_width(&self) -> f32 {
		self.half_extents.x * 2.0
	}
	/// Get the full length of the area along its local `z` axis
	pub fn get_length(&self) -> f32 {
		self.half_extents.y * 2.0
	}
	/// Unit vector along the width of the area
	pub fn get_right_axis(&self) -> Vec3 {
		self.rotation * Vec3::X
	}
	/// Unit vector along the length of the area
	pub fn get_forward_axis(&self) -> Vec3 {
		self.rotation * Vec3::Z
	}
	/// The corner of the area that lattice sampling walks away from
	pub fn get_back_left_corner(&self) -> Vec3 {
		self.centre
			- self.get_right_axis() * self.half_extents.x
			- self.get_forward_axis() * self.half_extents.y
	}
	/// Number of lattice samples along the width of the area
	pub fn get_width_node_count(&self) -> usize {
		(self.get_width() / self.spacing) as usize
	}
	/// Number of lattice samples along the length of the area
	pub fn get_length_node_count(&self) -> usize {
		(self.get_length() / self.spacing) as usize
	}
}

/// Toggles logging of resolved route points
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Component, Default, Clone, Copy, Debug, Reflect)]
pub struct FieldDebug(bool);

impl FieldDebug {
	/// Create a new instance of [FieldDebug]
	pub fn new(enabled: bool) -> Self {
		FieldDebug(enabled)
	}
	/// Whether route points should be logged as they are resolved
	pub fn is_enabled(&self) -> bool {
		self.0
	}
}
