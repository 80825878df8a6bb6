use leptos::prelude::*;
use web_sys::MouseEvent;

use super::skill_graph::Theme;

#[component]
pub fn ThemeToggle(
	theme: RwSignal<Theme>,
	#[prop(optional, into)] on_toggle: Option<Callback<Theme>>,
) -> impl IntoView {
	let on_click = move |_: MouseEvent| {
		let next = theme.get_untracked().toggled();
		theme.set(next);
		if let Some(cb) = on_toggle {
			cb.run(next);
		}
	};

	view! {
		<button class="theme-toggle" aria-label="Toggle theme" on:click=on_click>
			{move || if theme.get().is_dark() { "Light" } else { "Dark" }}
		</button>
	}
}
