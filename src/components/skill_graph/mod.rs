mod component;
mod edges;
mod layout;
mod legend;
mod render;
mod schedule;
mod state;
mod types;

pub use component::SkillGraph;
pub use legend::SkillLegend;
pub use types::{SkillCategory, SkillNode, Theme};
