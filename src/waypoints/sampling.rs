//! Collaborator seams used to place samples on walkable ground and decide
//! whether a sample is navigable
//!
//! The terrain, obstruction and navigation mesh queries are external systems
//! as far as the field is concerned, so each is expressed as a trait and
//! injected through [FieldSamplers]. In particular the navigation mesh is a
//! handed-in reference rather than something discovered from scene state

use bevy::prelude::*;
use std::sync::Arc;

/// Projects a point onto the ground surface beneath it, typically backed by
/// a downward ray or collision test against terrain geometry
pub trait TerrainSampler: Send + Sync {
	/// Returns the point snapped onto the ground, or [None] when no ground
	/// was found beneath it
	fn project_to_ground(&self, point: Vec3) -> Option<Vec3>;
}

/// Reports whether a point sits inside a registered solid structure
pub trait ObstructionSampler: Send + Sync {
	/// True when the point lies within an obstructing structure
	fn is_inside_structure(&self, point: Vec3) -> bool;
}

/// Queries a navigation mesh for whether a point can be projected onto a
/// navigable surface
pub trait NavMeshSampler: Send + Sync {
	/// True when the point resolves onto the mesh within the tolerance
	/// `extent` around it
	fn project_to_navigable_surface(&self, point: Vec3, extent: Vec3) -> bool;
}

/// The set of injected collaborators that samples are validated against
/// during field generation. Without a navigation mesh reference every sample
/// is treated as non-navigable and generation produces an empty field
#[derive(Component, Clone)]
pub struct FieldSamplers {
	/// Ground placement collaborator
	terrain: Arc<dyn TerrainSampler>,
	/// Solid structure lookup collaborator
	obstructions: Arc<dyn ObstructionSampler>,
	/// The navigation mesh reference, if one exists
	nav_mesh: Option<Arc<dyn NavMeshSampler>>,
}

impl FieldSamplers {
	/// Create a new instance of [FieldSamplers]
	pub fn new(
		terrain: Arc<dyn TerrainSampler>,
		obstructions: Arc<dyn ObstructionSampler>,
		nav_mesh: Option<Arc<dyn NavMeshSampler>>,
	) -> Self {
		FieldSamplers {
			terrain,
			obstructions,
			nav_mesh,
		}
	}
	/// Whether a navigation mesh reference has been supplied
	pub fn has_nav_mesh(&self) -> bool {
		self.nav_mesh.is_some()
	}
	/// Place a point on the ground surface beneath it, [None] when no ground
	/// was found
	pub fn project_to_ground(&self, point: Vec3) -> Option<Vec3> {
		self.terrain.project_to_ground(point)
	}
	/// Whether an agent could stand at `point`. A point inside an
	/// obstructing structure is never navigable and short-circuits the
	/// navigation mesh query entirely, otherwise the mesh decides by
	/// projecting the point within `extent`
	pub fn is_navigable(&self, point: Vec3, extent: Vec3) -> bool {
		if self.obstructions.is_inside_structure(point) {
			return false;
		}
		if let Some(mesh) = &self.nav_mesh {
			mesh.project_to_navigable_surface(point, extent)
		} else {
			false
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::waypoints::DEFAULT_NAV_QUERY_EXTENT;
	use std::sync::atomic::{AtomicBool, Ordering};

	/// Snaps everything to the `y = 0` plane
	struct FlatTerrain;
	impl TerrainSampler for FlatTerrain {
		fn project_to_ground(&self, point: Vec3) -> Option<Vec3> {
			Some(Vec3::new(point.x, 0.0, point.z))
		}
	}
	/// A world without any structures
	struct OpenGround;
	impl ObstructionSampler for OpenGround {
		fn is_inside_structure(&self, _point: Vec3) -> bool {
			false
		}
	}
	/// A world that is one big structure
	struct SolidGround;
	impl ObstructionSampler for SolidGround {
		fn is_inside_structure(&self, _point: Vec3) -> bool {
			true
		}
	}
	/// A mesh covering the whole world which records whether it was queried
	struct RecordingMesh(AtomicBool);
	impl NavMeshSampler for RecordingMesh {
		fn project_to_navigable_surface(&self, _point: Vec3, _extent: Vec3) -> bool {
			self.0.store(true, Ordering::SeqCst);
			true
		}
	}

	#[test]
	fn navigable_on_open_ground() {
		let samplers = FieldSamplers::new(
			Arc::new(FlatTerrain),
			Arc::new(OpenGround),
			Some(Arc::new(RecordingMesh(AtomicBool::new(false)))),
		);
		let result = samplers.is_navigable(Vec3::ZERO, DEFAULT_NAV_QUERY_EXTENT);
		assert!(result);
	}
	#[test]
	fn structure_short_circuits_mesh_query() {
		let mesh = Arc::new(RecordingMesh(AtomicBool::new(false)));
		let samplers = FieldSamplers::new(
			Arc::new(FlatTerrain),
			Arc::new(SolidGround),
			Some(mesh.clone()),
		);
		let result = samplers.is_navigable(Vec3::ZERO, DEFAULT_NAV_QUERY_EXTENT);
		assert!(!result);
		// the mesh must never have been consulted
		assert!(!mesh.0.load(Ordering::SeqCst));
	}
	#[test]
	fn missing_mesh_is_never_navigable() {
		let samplers = FieldSamplers::new(Arc::new(FlatTerrain), Arc::new(OpenGround), None);
		let result = samplers.is_navigable(Vec3::ZERO, DEFAULT_NAV_QUERY_EXTENT);
		assert!(!result);
	}
}
