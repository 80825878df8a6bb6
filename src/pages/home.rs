use std::time::Duration;

use leptos::prelude::*;
use log::info;

use crate::components::achievements::{
	Achievement, AchievementLog, AchievementToast, SKILL_EXPLORER, THEME_TOGGLE, TOAST_DURATION_MS,
};
use crate::components::skill_graph::{SkillGraph, SkillLegend, Theme};
use crate::components::theme_toggle::ThemeToggle;
use crate::data;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let theme = use_context::<RwSignal<Theme>>().unwrap_or_else(|| RwSignal::new(Theme::Light));
	let achievements = RwSignal::new(AchievementLog::default());
	let toast = RwSignal::new(None::<Achievement>);

	let unlock = move |achievement: Achievement| {
		let fresh = achievements
			.try_update(|log| log.unlock(&achievement))
			.unwrap_or(false);
		if fresh {
			info!("achievement unlocked: {}", achievement.id);
			toast.set(Some(achievement));
			set_timeout(
				move || {
					if toast.get_untracked() == Some(achievement) {
						toast.set(None);
					}
				},
				Duration::from_millis(TOAST_DURATION_MS),
			);
		}
	};

	let on_skill_interaction = Callback::new(move |_: ()| unlock(SKILL_EXPLORER));
	let on_theme_toggle = Callback::new(move |_: Theme| unlock(THEME_TOGGLE));

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<main class="portfolio">
				<header class="portfolio-header">
					<h1>"Skills"</h1>
					<span class="achievement-count">
						{move || achievements.with(|log| log.len())} " achievements"
					</span>
					<ThemeToggle theme=theme on_toggle=on_theme_toggle />
				</header>
				<section class="skill-tree">
					<SkillLegend theme=theme />
					<SkillGraph
						skills=data::skills()
						theme=theme
						on_first_interaction=on_skill_interaction
					/>
				</section>
				<AchievementToast current=toast />
			</main>
		</ErrorBoundary>
	}
}
