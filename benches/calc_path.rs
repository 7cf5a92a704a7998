//! Measure calculating routes across a generated node field
//!
//! Routes run between randomised points inside a 2000x2000 unit area
//!

use std::sync::Arc;

use bevy::prelude::*;
use bevy_waypoint_field_plugin::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

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
/// A mesh covering the whole world
struct EverywhereMesh;
impl NavMeshSampler for EverywhereMesh {
	fn project_to_navigable_surface(&self, _point: Vec3, _extent: Vec3) -> bool {
		true
	}
}

/// Generate the field to be searched before benchmarking
fn prepare_field(half_extent: f32, spacing: f32) -> NodeField {
	let dimensions = FieldDimensions::new(
		Vec3::ZERO,
		Quat::IDENTITY,
		Vec2::new(half_extent, half_extent),
		spacing,
	);
	let samplers = FieldSamplers::new(
		Arc::new(FlatTerrain),
		Arc::new(OpenGround),
		Some(Arc::new(EverywhereMesh)),
	);
	NodeField::generate(&dimensions, &samplers)
}

/// Pre-roll endpoint pairs inside the area so query generation stays out of
/// the measurement
fn prepare_queries(half_extent: f32, count: usize) -> Vec<(Vec3, Vec3)> {
	let mut rng = rand::rng();
	let mut queries = Vec::with_capacity(count);
	for _ in 0..count {
		let source = Vec3::new(
			rng.random_range(-half_extent..half_extent),
			0.0,
			rng.random_range(-half_extent..half_extent),
		);
		let target = Vec3::new(
			rng.random_range(-half_extent..half_extent),
			0.0,
			rng.random_range(-half_extent..half_extent),
		);
		queries.push((source, target));
	}
	queries
}

pub fn criterion_benchmark(c: &mut Criterion) {
	let mut group = c.benchmark_group("algorithm_use");
	group.significance_level(0.05).sample_size(100);
	let field = prepare_field(1000.0, 250.0);
	let queries = prepare_queries(1000.0, 64);
	let mut cursor = 0;
	group.bench_function("calc_path", |b| {
		b.iter(|| {
			let (source, target) = queries[cursor % queries.len()];
			cursor += 1;
			field.find_path(black_box(source), black_box(target))
		})
	});
	group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
