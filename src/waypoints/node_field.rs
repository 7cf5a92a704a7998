//! The field of walkable waypoints sampled over a bounded area
//!
//! Generation runs a lattice scan of the area, places each sample on the
//! ground and keeps the samples that pass obstruction and navigability
//! validation. The surviving nodes carry no adjacency, neighbours are
//! derived from proximity at search time

use crate::prelude::*;
use bevy::prelude::*;

/// A walkable waypoint within a [NodeField]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Reflect)]
pub struct PathNode {
	/// Ground adjusted position, raised by [NODE_CLEARANCE]
	position: Vec3,
	/// True once the node has been validated against the navigation mesh.
	/// Always true for nodes that survive generation, retained so that
	/// partially valid nodes can be represented in the future
	has_nav_data: bool,
}

impl PathNode {
	/// Create a new instance of [PathNode] at a validated position
	pub fn new(position: Vec3) -> Self {
		PathNode {
			position,
			has_nav_data: true,
		}
	}
	/// Get the world position of the waypoint
	pub fn get_position(&self) -> Vec3 {
		self.position
	}
	/// Whether the node was validated against the navigation mesh
	pub fn has_nav_data(&self) -> bool {
		self.has_nav_data
	}
}

/// The generated collection of walkable waypoints covering a bounded area.
///
/// Nodes sit in generation scan order, outer loop along the length axis and
/// inner loop along the width axis, though no search behaviour depends on
/// the ordering
#[derive(Component, Default, Clone, Debug, Reflect)]
pub struct NodeField {
	/// Waypoints that survived validation, deduplicated
	nodes: Vec<PathNode>,
	/// The lattice spacing the field was generated with, the neighbour and
	/// lookup radii derive from it
	spacing: f32,
}

impl NodeField {
	/// Sample the area described by `dimensions` on a regular lattice and
	/// retain every sample that lands on navigable ground as a [PathNode].
	/// Each call builds a complete field from scratch, a previous field is
	/// discarded wholesale rather than edited
	pub fn generate(dimensions: &FieldDimensions, samplers: &FieldSamplers) -> NodeField {
		let mut field = NodeField {
			nodes: Vec::new(),
			spacing: dimensions.get_spacing(),
		};
		if !samplers.has_nav_mesh() {
			warn!("No navigation mesh reference available, node field will be empty");
			return field;
		}
		let spacing = dimensions.get_spacing();
		let right = dimensions.get_right_axis();
		let forward = dimensions.get_forward_axis();
		let back_left = dimensions.get_back_left_corner();
		let width_count = dimensions.get_width_node_count();
		let length_count = dimensions.get_length_node_count();
		for length_index in 0..length_count {
			let row_origin = back_left + forward * (length_index as f32 * spacing);
			for width_index in 0..width_count {
				let candidate = row_origin + right * (width_index as f32 * spacing);
				let grounded = place_on_ground(candidate, samplers);
				if samplers.is_navigable(grounded, dimensions.get_nav_query_extent()) {
					field.insert_node(PathNode::new(grounded + Vec3::Y * NODE_CLEARANCE));
				}
			}
		}
		debug!(
			"Generated node field of {} nodes from {} samples",
			field.nodes.len(),
			width_count * length_count
		);
		field
	}
	/// Append a node unless an equal one is already present
	fn insert_node(&mut self, node: PathNode) {
		if !self.nodes.contains(&node) {
			self.nodes.push(node);
		}
	}
	/// Get the waypoints of the field
	pub fn get(&self) -> &Vec<PathNode> {
		&self.nodes
	}
	/// Get the lattice spacing the field was generated with
	pub fn get_spacing(&self) -> f32 {
		self.spacing
	}
}

/// Place a candidate sample on the ground beneath it, falling back to the
/// unprojected candidate when no ground is found. Samples sitting exactly on
/// the `z` origin plane are nudged by [DEGENERATE_AXIS_NUDGE] first, the
/// underlying terrain query degenerates at exactly zero
fn place_on_ground(candidate: Vec3, samplers: &FieldSamplers) -> Vec3 {
	let probe = if candidate.z == 0.0 {
		Vec3::new(candidate.x, candidate.y, DEGENERATE_AXIS_NUDGE)
	} else {
		candidate
	};
	match samplers.project_to_ground(probe) {
		Some(grounded) => grounded,
		None => candidate,
	}
}
