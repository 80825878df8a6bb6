use std::cell::RefCell;
use std::collections::HashSet;

use log::{debug, info};
use rand::Rng;

use super::edges::{Edge, EdgeSet};
use super::layout::{Layout, LayoutParams, compute_layout};
use super::types::{Point, SkillNode};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HoverState {
	pub node: Option<String>,
	/// Neighbors of `node` in either declaration direction.
	pub connections: HashSet<String>,
}

/// One-shot notification taken out of the graph on its first hover. Run it
/// with [`FirstInteraction::notify`] once the graph is no longer borrowed.
pub struct FirstInteraction(Box<dyn FnOnce()>);

impl FirstInteraction {
	pub fn notify(self) {
		(self.0)()
	}
}

pub struct SkillGraphState {
	pub nodes: Vec<SkillNode>,
	pub edges: EdgeSet,
	pub positions: Layout,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub params: LayoutParams,
	on_first_interaction: Option<Box<dyn FnOnce()>>,
}

impl SkillGraphState {
	pub fn new(nodes: Vec<SkillNode>, params: LayoutParams) -> Self {
		let edges = EdgeSet::from_nodes(&nodes);
		debug!("skill graph with {} nodes and {} edges", nodes.len(), edges.len());
		Self {
			nodes,
			edges,
			positions: Layout::new(),
			hover: HoverState::default(),
			width: 0.0,
			height: 0.0,
			params,
			on_first_interaction: None,
		}
	}

	/// Registers the callback fired by the first hover of this graph's lifetime.
	pub fn set_first_interaction(&mut self, f: impl FnOnce() + 'static) {
		self.on_first_interaction = Some(Box::new(f));
	}

	pub fn is_laid_out(&self) -> bool {
		!self.positions.is_empty()
	}

	pub fn position(&self, id: &str) -> Option<Point> {
		self.positions.get(id).copied()
	}

	/// Recomputes every position for a new container size. Returns `false`
	/// when nothing was done: the size is not measurable yet, or it matches
	/// the current layout.
	pub fn resize<R: Rng>(&mut self, width: f64, height: f64, rng: &mut R) -> bool {
		if !(width > 0.0 && height > 0.0) {
			return false;
		}
		if self.is_laid_out() && width == self.width && height == self.height {
			return false;
		}
		self.relayout(width, height, rng);
		true
	}

	/// Discards all positions and places every node again from scratch.
	pub fn relayout<R: Rng>(&mut self, width: f64, height: f64, rng: &mut R) {
		self.width = width;
		self.height = height;
		self.positions = compute_layout(&self.nodes, width, height, &self.params, rng);
	}

	/// Pointer entered the glyph of `id`. Unknown ids leave the state idle.
	/// The first hover hands back the one-shot notification for the caller
	/// to run.
	pub fn pointer_enter(&mut self, id: &str) -> Option<FirstInteraction> {
		if !self.nodes.iter().any(|n| n.id == id) {
			return None;
		}
		self.hover.node = Some(id.into());
		self.hover.connections = self.edges.neighbors(id);

		let notify = self.on_first_interaction.take()?;
		info!("first skill interaction on {}", id);
		Some(FirstInteraction(notify))
	}

	/// Pointer left the glyph of `id`. A stale leave for a node that is no
	/// longer hovered is ignored.
	pub fn pointer_leave(&mut self, id: &str) {
		if self.hover.node.as_deref() == Some(id) {
			self.hover = HoverState::default();
		}
	}

	pub fn is_hovered(&self, id: &str) -> bool {
		self.hover.node.as_deref() == Some(id)
	}

	/// Hovered node or one of its connections.
	pub fn is_highlighted(&self, id: &str) -> bool {
		self.is_hovered(id) || self.hover.connections.contains(id)
	}

	pub fn is_edge_highlighted(&self, edge: &Edge) -> bool {
		self.hover.node.as_deref().is_some_and(|h| edge.touches(h))
	}
}

/// Hover entry for a graph shared with its callbacks. The borrow is released
/// before the first-interaction notification runs, so the callback may read
/// the graph. Returns the new hover state.
pub fn enter_shared(state: &RefCell<SkillGraphState>, id: &str) -> HoverState {
	let (first, hover) = {
		let mut graph = state.borrow_mut();
		let first = graph.pointer_enter(id);
		(first, graph.hover.clone())
	};
	if let Some(first) = first {
		first.notify();
	}
	hover
}

#[cfg(test)]
mod tests {
	use std::cell::{Cell, RefCell};
	use std::rc::{Rc, Weak};

	use proptest::prelude::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;
	use crate::components::skill_graph::types::SkillCategory;

	fn sample_nodes() -> Vec<SkillNode> {
		vec![
			SkillNode::new("a", "Alpha", 5, SkillCategory::Languages, &["b"]),
			SkillNode::new("b", "Beta", 4, SkillCategory::Backend, &[]),
			SkillNode::new("c", "Gamma", 3, SkillCategory::Cloud, &["b", "missing"]),
			SkillNode::new("d", "Delta", 2, SkillCategory::Mlops, &[]),
		]
	}

	#[test]
	fn hovering_target_of_one_way_edge_highlights_source() {
		let mut state = SkillGraphState::new(sample_nodes(), LayoutParams::default());
		state.pointer_enter("b");

		assert!(state.is_hovered("b"));
		assert!(state.is_highlighted("a"));
		assert!(state.is_highlighted("c"));
		assert!(!state.is_highlighted("d"));
	}

	#[test]
	fn edge_is_highlighted_from_either_endpoint() {
		let mut state = SkillGraphState::new(sample_nodes(), LayoutParams::default());
		let ab = Edge::new("a", "b");
		assert!(!state.is_edge_highlighted(&ab));

		state.pointer_enter("a");
		assert!(state.is_edge_highlighted(&ab));
		assert!(!state.is_edge_highlighted(&Edge::new("b", "c")));

		state.pointer_leave("a");
		state.pointer_enter("b");
		assert!(state.is_edge_highlighted(&ab));
		assert!(state.is_edge_highlighted(&Edge::new("b", "c")));
	}

	#[test]
	fn leave_returns_to_idle() {
		let mut state = SkillGraphState::new(sample_nodes(), LayoutParams::default());
		state.pointer_enter("a");
		state.pointer_leave("a");
		assert_eq!(state.hover, HoverState::default());
		assert!(!state.is_highlighted("b"));
	}

	#[test]
	fn stale_leave_keeps_current_hover() {
		let mut state = SkillGraphState::new(sample_nodes(), LayoutParams::default());
		state.pointer_enter("a");
		state.pointer_enter("c");
		state.pointer_leave("a");
		assert!(state.is_hovered("c"));
	}

	fn shared_with_callback(
		f: impl FnOnce(&Weak<RefCell<SkillGraphState>>) -> Box<dyn FnOnce()>,
	) -> Rc<RefCell<SkillGraphState>> {
		let state = Rc::new(RefCell::new(SkillGraphState::new(
			sample_nodes(),
			LayoutParams::default(),
		)));
		let callback = f(&Rc::downgrade(&state));
		state.borrow_mut().set_first_interaction(callback);
		state
	}

	#[test]
	fn first_interaction_fires_once() {
		let fired = Rc::new(Cell::new(0u32));
		let counter = fired.clone();
		let state = shared_with_callback(|_| Box::new(move || counter.set(counter.get() + 1)));

		enter_shared(&state, "a");
		assert_eq!(fired.get(), 1);
		state.borrow_mut().pointer_leave("a");
		enter_shared(&state, "b");
		state.borrow_mut().pointer_leave("b");
		enter_shared(&state, "a");
		state.borrow_mut().pointer_leave("a");
		assert_eq!(fired.get(), 1);
	}

	#[test]
	fn callback_can_read_the_graph() {
		let seen = Rc::new(RefCell::new(None));
		let sink = seen.clone();
		let state = shared_with_callback(|graph| {
			let graph = graph.clone();
			Box::new(move || {
				if let Some(graph) = graph.upgrade() {
					*sink.borrow_mut() = graph.borrow().hover.node.clone();
				}
			})
		});

		let hover = enter_shared(&state, "b");
		assert_eq!(seen.borrow().as_deref(), Some("b"));
		assert_eq!(hover, state.borrow().hover);
	}

	#[test]
	fn unknown_id_is_not_an_interaction() {
		let fired = Rc::new(Cell::new(false));
		let flag = fired.clone();
		let state = shared_with_callback(|_| Box::new(move || flag.set(true)));

		let hover = enter_shared(&state, "missing");
		assert!(!fired.get());
		assert!(hover.node.is_none());
	}

	#[test]
	fn unmeasured_container_is_not_laid_out() {
		let mut state = SkillGraphState::new(sample_nodes(), LayoutParams::default());
		let mut rng = StdRng::seed_from_u64(0);
		assert!(!state.resize(0.0, 450.0, &mut rng));
		assert!(!state.is_laid_out());
		assert!(state.position("a").is_none());
	}

	#[test]
	fn same_size_does_not_recompute() {
		let mut state = SkillGraphState::new(sample_nodes(), LayoutParams::default());
		let mut rng = StdRng::seed_from_u64(0);
		assert!(state.resize(800.0, 450.0, &mut rng));
		let before = state.positions.clone();
		assert!(!state.resize(800.0, 450.0, &mut rng));
		assert_eq!(state.positions, before);
	}

	proptest! {
		#[test]
		fn resize_recomputes_full_layout(
			w1 in 300.0f64..1400.0,
			h1 in 300.0f64..900.0,
			w2 in 300.0f64..1400.0,
			h2 in 300.0f64..900.0,
			seed in any::<u64>(),
		) {
			prop_assume!(w1 != w2 || h1 != h2);
			let mut state = SkillGraphState::new(sample_nodes(), LayoutParams::default());
			let mut rng = StdRng::seed_from_u64(seed);

			prop_assert!(state.resize(w1, h1, &mut rng));
			prop_assert!(state.resize(w2, h2, &mut rng));
			prop_assert_eq!(state.positions.len(), state.nodes.len());
			prop_assert_eq!((state.width, state.height), (w2, h2));
			for p in state.positions.values() {
				prop_assert!(p.x >= 40.0 && p.x <= w2 - 40.0);
				prop_assert!(p.y >= 40.0 && p.y <= h2 - 40.0);
			}
		}
	}
}
