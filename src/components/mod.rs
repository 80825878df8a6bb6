pub mod achievements;
pub mod skill_graph;
pub mod theme_toggle;
