//! Randomized placement of skill nodes inside a padded viewport.
//!
//! Nodes are placed one at a time in shuffled order. Each placement samples
//! candidates on an annulus around the viewport center and keeps the first
//! one that clears every already placed node by `min_separation`. When the
//! search runs dry it settles for progressively weaker candidates, so every
//! node always receives a position.

use std::collections::HashMap;
use std::f64::consts::TAU;

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use super::types::{Point, SkillNode};

/// Node id to center position, in logical viewport pixels.
pub type Layout = HashMap<String, Point>;

#[derive(Clone, Debug, PartialEq)]
pub struct LayoutParams {
	pub padding: f64,
	pub min_separation: f64,
	/// Candidates tried per node before lowering the bar.
	pub attempts: usize,
	pub relaxed_attempts: usize,
	/// Fraction of `min_separation` the best primary candidate must beat.
	pub near_miss_ratio: f64,
	/// Fraction of `min_separation` accepted by the relaxed pass.
	pub relaxed_ratio: f64,
	/// Per-axis jitter added to each polar sample, in pixels.
	pub jitter: f64,
	pub min_radius_ratio: f64,
	pub max_radius_ratio: f64,
}

impl Default for LayoutParams {
	fn default() -> Self {
		Self {
			padding: 40.0,
			min_separation: 200.0,
			attempts: 500,
			relaxed_attempts: 100,
			near_miss_ratio: 0.9,
			relaxed_ratio: 0.85,
			jitter: 15.0,
			min_radius_ratio: 0.15,
			max_radius_ratio: 0.95,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Bounds {
	min_x: f64,
	max_x: f64,
	min_y: f64,
	max_y: f64,
}

impl Bounds {
	fn padded(width: f64, height: f64, padding: f64) -> Self {
		Self {
			min_x: padding,
			max_x: width - padding,
			min_y: padding,
			max_y: height - padding,
		}
	}

	fn is_empty(&self) -> bool {
		!(self.max_x > self.min_x && self.max_y > self.min_y)
	}

	fn contains(&self, p: &Point) -> bool {
		p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
	}

	fn clamp(&self, p: Point) -> Point {
		Point::new(
			p.x.clamp(self.min_x, self.max_x),
			p.y.clamp(self.min_y, self.max_y),
		)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Placement {
	Separated,
	NearMiss,
	Relaxed,
	BestEffort,
	Fallback,
}

struct Solver<'a, R: Rng> {
	params: &'a LayoutParams,
	bounds: Bounds,
	center: Point,
	max_radius: f64,
	placed: Vec<Point>,
	rng: &'a mut R,
}

impl<R: Rng> Solver<'_, R> {
	fn sample(&mut self) -> Point {
		let angle = self.rng.gen_range(0.0..TAU);
		let ratio = self
			.rng
			.gen_range(self.params.min_radius_ratio..=self.params.max_radius_ratio);
		let radius = self.max_radius * ratio;
		let j = self.params.jitter.abs();
		Point::new(
			self.center.x + angle.cos() * radius + self.rng.gen_range(-j..=j),
			self.center.y + angle.sin() * radius + self.rng.gen_range(-j..=j),
		)
	}

	/// Distance to the nearest placed node, infinite when nothing is placed yet.
	fn clearance(&self, p: &Point) -> f64 {
		self.placed
			.iter()
			.map(|q| q.distance(p))
			.fold(f64::INFINITY, f64::min)
	}

	fn place(&mut self) -> (Point, Placement) {
		let min_sep = self.params.min_separation;
		let mut best: Option<(Point, f64)> = None;

		for _ in 0..self.params.attempts {
			let candidate = self.sample();
			if !self.bounds.contains(&candidate) {
				continue;
			}
			let clearance = self.clearance(&candidate);
			if best.is_none_or(|(_, d)| clearance > d) {
				best = Some((candidate, clearance));
			}
			if clearance >= min_sep {
				return (candidate, Placement::Separated);
			}
		}

		if let Some((p, d)) = best {
			if d > min_sep * self.params.near_miss_ratio {
				return (p, Placement::NearMiss);
			}
		}

		let relaxed = min_sep * self.params.relaxed_ratio;
		for _ in 0..self.params.relaxed_attempts {
			let candidate = self.sample();
			if self.bounds.contains(&candidate) && self.clearance(&candidate) >= relaxed {
				return (candidate, Placement::Relaxed);
			}
		}

		if let Some((p, _)) = best {
			return (p, Placement::BestEffort);
		}

		let p = Point::new(
			self.center.x + self.rng.gen_range(-0.5..=0.5) * self.max_radius,
			self.center.y + self.rng.gen_range(-0.5..=0.5) * self.max_radius,
		);
		(self.bounds.clamp(p), Placement::Fallback)
	}
}

/// Assigns every node a position inside `[padding, size - padding]` on both
/// axes. Viewports with no room inside the padding put every node at the
/// center.
pub fn compute_layout<R: Rng>(
	nodes: &[SkillNode],
	width: f64,
	height: f64,
	params: &LayoutParams,
	rng: &mut R,
) -> Layout {
	let center = Point::new(width / 2.0, height / 2.0);
	let bounds = Bounds::padded(width, height, params.padding);

	if bounds.is_empty() {
		debug!(
			"viewport {}x{} has no room inside padding {}, collapsing {} nodes to center",
			width,
			height,
			params.padding,
			nodes.len()
		);
		return nodes.iter().map(|n| (n.id.clone(), center)).collect();
	}

	let mut order: Vec<&SkillNode> = nodes.iter().collect();
	order.shuffle(rng);

	let mut solver = Solver {
		params,
		bounds,
		center,
		max_radius: (center.x - params.padding).min(center.y - params.padding),
		placed: Vec::with_capacity(nodes.len()),
		rng,
	};

	let mut layout = Layout::with_capacity(nodes.len());
	let mut degraded = 0usize;
	for node in order {
		let (p, how) = solver.place();
		if how != Placement::Separated {
			degraded += 1;
			debug!("placed {} via {:?} at ({:.1}, {:.1})", node.id, how, p.x, p.y);
		}
		solver.placed.push(p);
		layout.insert(node.id.clone(), p);
	}

	debug!(
		"layout of {} nodes in {}x{} ({} below target separation)",
		layout.len(),
		width,
		height,
		degraded
	);
	layout
}
