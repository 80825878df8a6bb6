#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkillCategory {
	Languages,
	Frontend,
	Backend,
	Devops,
	Cloud,
	Security,
	Monitoring,
	Mlops,
}

impl SkillCategory {
	/// Categories in the order the legend lists them.
	pub const LEGEND: [SkillCategory; 6] = [
		SkillCategory::Devops,
		SkillCategory::Backend,
		SkillCategory::Security,
		SkillCategory::Cloud,
		SkillCategory::Monitoring,
		SkillCategory::Mlops,
	];

	pub fn label(self) -> &'static str {
		match self {
			SkillCategory::Languages => "Languages",
			SkillCategory::Frontend => "Frontend",
			SkillCategory::Backend => "Backend",
			SkillCategory::Devops => "DevOps",
			SkillCategory::Cloud => "Cloud",
			SkillCategory::Security => "Security",
			SkillCategory::Monitoring => "Monitoring",
			SkillCategory::Mlops => "MLOps",
		}
	}

	pub fn color(self, theme: Theme) -> &'static str {
		match (self, theme) {
			(SkillCategory::Languages, Theme::Light) => "#6366f1",
			(SkillCategory::Languages, Theme::Dark) => "#818cf8",
			(SkillCategory::Frontend, Theme::Light) => "#0ea5e9",
			(SkillCategory::Frontend, Theme::Dark) => "#38bdf8",
			(SkillCategory::Backend, Theme::Light) => "#10b981",
			(SkillCategory::Backend, Theme::Dark) => "#34d399",
			(SkillCategory::Devops, Theme::Light) => "#f59e0b",
			(SkillCategory::Devops, Theme::Dark) => "#fbbf24",
			(SkillCategory::Cloud, Theme::Light) => "#f97316",
			(SkillCategory::Cloud, Theme::Dark) => "#fb923c",
			(SkillCategory::Security, Theme::Light) => "#ef4444",
			(SkillCategory::Security, Theme::Dark) => "#f87171",
			(SkillCategory::Monitoring, Theme::Light) => "#a855f7",
			(SkillCategory::Monitoring, Theme::Dark) => "#c084fc",
			(SkillCategory::Mlops, Theme::Light) => "#ec4899",
			(SkillCategory::Mlops, Theme::Dark) => "#f472b6",
		}
	}
}

#[derive(Clone, Debug)]
pub struct SkillNode {
	pub id: String,
	pub display_name: String,
	/// Proficiency from 1 to 5.
	pub level: u8,
	pub category: SkillCategory,
	/// Declared one way; treated as symmetric.
	pub connections: Vec<String>,
}

impl SkillNode {
	pub fn new(
		id: &str,
		display_name: &str,
		level: u8,
		category: SkillCategory,
		connections: &[&str],
	) -> Self {
		Self {
			id: id.into(),
			display_name: display_name.into(),
			level: level.clamp(1, 5),
			category,
			connections: connections.iter().map(|&c| c.into()).collect(),
		}
	}

	/// Short badge text drawn inside the glyph.
	pub fn badge(&self) -> String {
		self.display_name
			.chars()
			.filter(|c| c.is_alphanumeric())
			.take(2)
			.collect()
	}

	/// Fraction of the underline filled by the proficiency bar.
	pub fn level_fraction(&self) -> f64 {
		self.level as f64 / 5.0
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn distance(&self, other: &Point) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
	#[default]
	Light,
	Dark,
}

impl Theme {
	pub fn is_dark(self) -> bool {
		self == Theme::Dark
	}

	pub fn toggled(self) -> Self {
		match self {
			Theme::Light => Theme::Dark,
			Theme::Dark => Theme::Light,
		}
	}

	/// Value for the document's `data-theme` attribute.
	pub fn as_str(self) -> &'static str {
		match self {
			Theme::Light => "light",
			Theme::Dark => "dark",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn level_is_clamped_and_scaled() {
		let node = SkillNode::new("go", "Go", 9, SkillCategory::Languages, &[]);
		assert_eq!(node.level, 5);
		assert_eq!(node.level_fraction(), 1.0);

		let node = SkillNode::new("sql", "SQL", 0, SkillCategory::Languages, &[]);
		assert_eq!(node.level, 1);
		assert!((node.level_fraction() - 0.2).abs() < 1e-12);
	}

	#[test]
	fn badge_skips_punctuation() {
		let node = SkillNode::new("nextjs", "Next.js", 5, SkillCategory::Frontend, &[]);
		assert_eq!(node.badge(), "Ne");
		let node = SkillNode::new("dotnet", ".NET", 3, SkillCategory::Backend, &[]);
		assert_eq!(node.badge(), "NE");
	}

	#[test]
	fn theme_toggles_back_and_forth() {
		assert_eq!(Theme::Light.toggled(), Theme::Dark);
		assert_eq!(Theme::Dark.toggled().as_str(), "light");
		assert!(Theme::Dark.is_dark());
	}
}
