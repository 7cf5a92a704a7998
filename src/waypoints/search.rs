//! A-star route finding across a [NodeField]
//!
//! The field stores no adjacency so neighbours are computed per expansion
//! from spatial proximity. All per-run bookkeeping lives in a side table
//! indexed by node position within the field, built fresh for every search,
//! so searching borrows the field immutably and stale costs from a previous
//! run can never leak into a new one

use crate::prelude::*;
use bevy::prelude::*;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Per-run search bookkeeping for a single node
#[derive(Clone, Copy, Debug)]
struct SearchCell {
	/// Accumulated route cost from the start node along the best known route
	g_cost: f32,
	/// Heuristic estimate of the remaining cost to the goal node
	h_cost: f32,
	/// Best known predecessor on the route from the start
	parent: Option<usize>,
	/// True once the node has been finalised, it is never re-examined
	closed: bool,
}

impl Default for SearchCell {
	fn default() -> Self {
		SearchCell {
			g_cost: f32::INFINITY,
			h_cost: 0.0,
			parent: None,
			closed: false,
		}
	}
}

/// An entry of the open frontier. Entries are ordered ascending on
/// `(f_cost, h_cost)` so the cheapest estimated route is expanded first and
/// ties prefer the node closest to the goal
#[derive(Clone, Copy, Debug)]
struct OpenEntry {
	/// The a-star priority, `g_cost + h_cost`, of the node when it was pushed
	f_cost: f32,
	/// Tie break, heuristic cost of the node when it was pushed
	h_cost: f32,
	/// Position of the node within the field
	index: usize,
}

impl Ord for OpenEntry {
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		self.f_cost
			.total_cmp(&other.f_cost)
			.then(self.h_cost.total_cmp(&other.h_cost))
	}
}

impl PartialOrd for OpenEntry {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		Some(self.cmp(other))
	}
}

impl PartialEq for OpenEntry {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == std::cmp::Ordering::Equal
	}
}
impl Eq for OpenEntry {}

/// Cost of travelling directly between two positions. The same metric
/// serves as the edge weight between adjacent nodes and as the heuristic to
/// the goal, which keeps the heuristic admissible and consistent. It is a
/// magnitude, so non-negative by construction
fn travel_cost(from: Vec3, to: Vec3) -> f32 {
	(to - from).length()
}

impl NodeField {
	/// Find the waypoints surrounding `index` by proximity. A node is a
	/// neighbour when its position differs and sits within
	/// [NEIGHBOUR_RADIUS_FACTOR] spacings, ranked by distance with only the
	/// nearest [MAX_NEIGHBOURS] kept so node degree stays bounded on dense
	/// fields. Linear over the field, acceptable for the small fields a
	/// bounded area produces
	pub fn node_neighbours(&self, index: usize) -> Vec<usize> {
		let origin = self.get()[index].get_position();
		let radius = self.get_spacing() * NEIGHBOUR_RADIUS_FACTOR;
		let mut candidates = Vec::new();
		for (i, node) in self.get().iter().enumerate() {
			if node.get_position() == origin {
				continue;
			}
			let distance = travel_cost(origin, node.get_position());
			if distance < radius {
				candidates.push((i, distance));
			}
		}
		candidates.sort_by(|a, b| a.1.total_cmp(&b.1));
		candidates.truncate(MAX_NEIGHBOURS);
		candidates.into_iter().map(|(i, _)| i).collect()
	}
	/// Resolve an arbitrary world point to the closest waypoint within
	/// [NODE_RESOLVE_RADIUS_FACTOR] spacings of it, [None] when no waypoint
	/// is in tolerance
	pub fn nearest_node(&self, point: Vec3) -> Option<usize> {
		let tolerance = self.get_spacing() * NODE_RESOLVE_RADIUS_FACTOR;
		let mut best: Option<(usize, f32)> = None;
		for (i, node) in self.get().iter().enumerate() {
			let distance = travel_cost(point, node.get_position());
			if distance < tolerance {
				match best {
					Some((_, best_distance)) if best_distance <= distance => {}
					_ => best = Some((i, distance)),
				}
			}
		}
		best.map(|(i, _)| i)
	}
	/// Find the shortest route between two world points using a-star across
	/// the field. The returned route runs start-adjacent-first to goal-last
	/// and excludes the node the start resolved to. An empty route means
	/// either endpoint failed to resolve to a waypoint, or no route exists
	/// between them, neither is an error
	pub fn find_path(&self, start: Vec3, goal: Vec3) -> Vec<PathNode> {
		let (start_index, goal_index) = match (self.nearest_node(start), self.nearest_node(goal))
		{
			(Some(s), Some(g)) => (s, g),
			_ => return Vec::new(),
		};
		let goal_position = self.get()[goal_index].get_position();
		// fresh side table for this run
		let mut cells = vec![SearchCell::default(); self.get().len()];
		let mut open: BinaryHeap<Reverse<OpenEntry>> = BinaryHeap::new();
		let start_h = travel_cost(self.get()[start_index].get_position(), goal_position);
		cells[start_index] = SearchCell {
			g_cost: 0.0,
			h_cost: start_h,
			parent: None,
			closed: false,
		};
		open.push(Reverse(OpenEntry {
			f_cost: start_h,
			h_cost: start_h,
			index: start_index,
		}));
		while let Some(Reverse(entry)) = open.pop() {
			let current = entry.index;
			// a node may sit in the frontier multiple times from successive
			// improvements, the cheapest copy pops first and later copies
			// are discarded here
			if cells[current].closed {
				continue;
			}
			cells[current].closed = true;
			if current == goal_index {
				trace!("Goal node {} finalised, retracing route", goal_index);
				return self.retrace(&cells, start_index, goal_index);
			}
			let current_position = self.get()[current].get_position();
			for neighbour in self.node_neighbours(current) {
				if cells[neighbour].closed {
					continue;
				}
				let neighbour_position = self.get()[neighbour].get_position();
				let tentative =
					cells[current].g_cost + travel_cost(current_position, neighbour_position);
				if tentative < cells[neighbour].g_cost {
					let h_cost = travel_cost(neighbour_position, goal_position);
					cells[neighbour] = SearchCell {
						g_cost: tentative,
						h_cost,
						parent: Some(current),
						closed: false,
					};
					open.push(Reverse(OpenEntry {
						f_cost: tentative + h_cost,
						h_cost,
						index: neighbour,
					}));
				}
			}
		}
		// frontier exhausted without reaching the goal
		Vec::new()
	}
	/// Reconstruct the route by walking parent links from the goal back to
	/// the start, then reversing so the result is ordered from the start
	/// outwards. The start node itself is excluded and the goal included,
	/// which makes a start equal to its own goal an empty route
	fn retrace(&self, cells: &[SearchCell], start_index: usize, goal_index: usize) -> Vec<PathNode> {
		let mut trail = Vec::new();
		let mut current = goal_index;
		while current != start_index {
			trail.push(self.get()[current]);
			match cells[current].parent {
				Some(parent) => current = parent,
				None => return Vec::new(),
			}
		}
		trail.reverse();
		trail
	}
}
