//! Unlock-once achievements and the toast announcing them.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Achievement {
	pub id: &'static str,
	pub title: &'static str,
	pub description: &'static str,
}

pub const SKILL_EXPLORER: Achievement = Achievement {
	id: "skill_explorer",
	title: "Tech Curious",
	description: "Explored the skill tree",
};

pub const THEME_TOGGLE: Achievement = Achievement {
	id: "theme_toggle",
	title: "Light & Dark",
	description: "Explored both sides of the force",
};

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u64 = 3000;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AchievementLog {
	unlocked: Vec<&'static str>,
}

impl AchievementLog {
	/// Returns `true` only the first time `achievement` is unlocked.
	pub fn unlock(&mut self, achievement: &Achievement) -> bool {
		if self.is_unlocked(achievement) {
			return false;
		}
		self.unlocked.push(achievement.id);
		true
	}

	pub fn is_unlocked(&self, achievement: &Achievement) -> bool {
		self.unlocked.contains(&achievement.id)
	}

	pub fn len(&self) -> usize {
		self.unlocked.len()
	}
}

#[component]
pub fn AchievementToast(#[prop(into)] current: Signal<Option<Achievement>>) -> impl IntoView {
	move || {
		current.get().map(|a| {
			view! {
				<div class="achievement-toast" role="status">
					<strong>"Achievement unlocked: " {a.title}</strong>
					<p>{a.description}</p>
				</div>
			}
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unlock_reports_only_the_first_time() {
		let mut log = AchievementLog::default();
		assert!(log.unlock(&SKILL_EXPLORER));
		assert!(!log.unlock(&SKILL_EXPLORER));
		assert!(log.unlock(&THEME_TOGGLE));
		assert_eq!(log.len(), 2);
		assert!(log.is_unlocked(&SKILL_EXPLORER));
	}
}
