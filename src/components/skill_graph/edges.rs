use std::collections::{BTreeSet, HashMap, HashSet};

use log::debug;

use super::types::SkillNode;

/// Undirected edge keyed by its endpoint ids in sorted order.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
	pub a: String,
	pub b: String,
}

impl Edge {
	pub fn new(x: &str, y: &str) -> Self {
		let (a, b) = if x <= y { (x, y) } else { (y, x) };
		Self {
			a: a.into(),
			b: b.into(),
		}
	}

	pub fn touches(&self, id: &str) -> bool {
		self.a == id || self.b == id
	}
}

/// Symmetric relation built once from the one-way `connections` lists.
#[derive(Clone, Debug, Default)]
pub struct EdgeSet {
	edges: BTreeSet<Edge>,
	adjacency: HashMap<String, HashSet<String>>,
}

impl EdgeSet {
	/// References to ids not present in `nodes`, and self loops, are dropped.
	pub fn from_nodes(nodes: &[SkillNode]) -> Self {
		let known: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
		let mut set = Self::default();
		let mut dangling = 0usize;

		for node in nodes {
			for target in &node.connections {
				if target == &node.id {
					continue;
				}
				if !known.contains(target.as_str()) {
					dangling += 1;
					continue;
				}
				set.insert(&node.id, target);
			}
		}

		if dangling > 0 {
			debug!("ignored {} connections to unknown skills", dangling);
		}
		set
	}

	fn insert(&mut self, x: &str, y: &str) {
		if self.edges.insert(Edge::new(x, y)) {
			self.adjacency.entry(x.into()).or_default().insert(y.into());
			self.adjacency.entry(y.into()).or_default().insert(x.into());
		}
	}

	pub fn len(&self) -> usize {
		self.edges.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Edge> {
		self.edges.iter()
	}

	pub fn contains(&self, x: &str, y: &str) -> bool {
		self.edges.contains(&Edge::new(x, y))
	}

	/// Declared and reverse-declared neighbors of `id`.
	pub fn neighbors(&self, id: &str) -> HashSet<String> {
		self.adjacency.get(id).cloned().unwrap_or_default()
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;
	use crate::components::skill_graph::types::SkillCategory;

	fn node(id: &str, connections: &[&str]) -> SkillNode {
		SkillNode::new(id, id, 4, SkillCategory::Backend, connections)
	}

	#[test]
	fn one_way_declaration_yields_one_edge() {
		let edges = EdgeSet::from_nodes(&[node("a", &["b"]), node("b", &[])]);
		assert_eq!(edges.len(), 1);
		assert!(edges.contains("a", "b"));
		assert!(edges.contains("b", "a"));
	}

	#[test]
	fn mutual_declaration_is_not_duplicated() {
		let edges = EdgeSet::from_nodes(&[node("nodejs", &["express"]), node("express", &["nodejs"])]);
		assert_eq!(edges.len(), 1);
		let only = edges.iter().next().unwrap();
		assert_eq!((only.a.as_str(), only.b.as_str()), ("express", "nodejs"));
	}

	#[test]
	fn dangling_and_self_references_are_ignored() {
		let edges = EdgeSet::from_nodes(&[node("a", &["ghost", "a"]), node("b", &["a"])]);
		assert_eq!(edges.len(), 1);
		assert!(edges.neighbors("ghost").is_empty());
		assert_eq!(edges.neighbors("a"), HashSet::from(["b".to_string()]));
	}

	#[test]
	fn neighbors_include_incoming_declarations() {
		let edges = EdgeSet::from_nodes(&[
			node("docker", &["kubernetes"]),
			node("helm", &["kubernetes"]),
			node("kubernetes", &["argo"]),
			node("argo", &[]),
		]);
		let hub = edges.neighbors("kubernetes");
		assert_eq!(hub.len(), 3);
		assert!(hub.contains("docker") && hub.contains("helm") && hub.contains("argo"));
	}

	proptest! {
		#[test]
		fn edge_count_is_bounded_and_symmetric(
			links in proptest::collection::vec((0usize..8, 0usize..10), 0..40),
		) {
			// Ids 8 and 9 are never declared as nodes.
			let mut nodes: Vec<SkillNode> = (0..8).map(|i| node(&format!("s{i}"), &[])).collect();
			for (from, to) in &links {
				nodes[*from].connections.push(format!("s{to}"));
			}
			let edges = EdgeSet::from_nodes(&nodes);

			prop_assert!(edges.len() <= 8 * 7 / 2);
			for e in edges.iter() {
				prop_assert!(e.a < e.b);
				prop_assert!(edges.neighbors(&e.a).contains(&e.b));
				prop_assert!(edges.neighbors(&e.b).contains(&e.a));
			}
			for (from, to) in &links {
				if *to < 8 && from != to {
					let (a, b) = (format!("s{from}"), format!("s{to}"));
					prop_assert!(edges.contains(&a, &b), "missing edge {} {}", a, b);
				}
			}
		}
	}
}
