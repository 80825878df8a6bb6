use leptos::prelude::*;

use super::types::{SkillCategory, Theme};

/// Color key for the skill categories. Categories only affect glyph color.
#[component]
pub fn SkillLegend(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
	let entries = SkillCategory::LEGEND
		.into_iter()
		.map(|category| {
			let swatch = move || format!("background-color: {};", category.color(theme.get()));
			view! {
				<div class="skill-legend-entry">
					<span class="skill-legend-swatch" style=swatch />
					{category.label()}
				</div>
			}
		})
		.collect_view();

	view! { <div class="skill-legend">{entries}</div> }
}
