use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, ResizeObserver};

use super::layout::{Layout, LayoutParams};
use super::render;
use super::schedule::Generation;
use super::state::{HoverState, SkillGraphState, enter_shared};
use super::types::{SkillNode, Theme};

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	match canvas.get_context("2d") {
		Ok(Some(ctx)) => ctx.dyn_into().ok(),
		Ok(None) => None,
		Err(e) => {
			warn!("no 2d context for skill graph canvas: {:?}", e);
			None
		}
	}
}

fn seeded_rng() -> StdRng {
	StdRng::seed_from_u64((js_sys::Math::random() * u64::MAX as f64) as u64)
}

/// Debounced relayout. Each resize cancels the previous pending pass, and a
/// pass whose animation frame fires after a newer resize does nothing.
#[derive(Clone)]
struct Relayout {
	state: Rc<RefCell<SkillGraphState>>,
	rng: Rc<RefCell<StdRng>>,
	pending: Rc<Cell<Option<TimeoutHandle>>>,
	generation: Generation,
	positions: RwSignal<Layout>,
	delay: Duration,
}

impl Relayout {
	fn schedule(&self, width: f64, height: f64) {
		self.cancel();
		let ticket = self.generation.issue();

		let this = self.clone();
		let scheduled = set_timeout_with_handle(
			move || {
				request_animation_frame(move || {
					if !this.generation.is_current(ticket) {
						return;
					}
					this.pending.set(None);
					let changed = this
						.state
						.borrow_mut()
						.resize(width, height, &mut *this.rng.borrow_mut());
					if changed {
						debug!("skill graph relaid out at {}x{}", width, height);
						this.positions.set(this.state.borrow().positions.clone());
					}
				});
			},
			self.delay,
		);
		match scheduled {
			Ok(handle) => self.pending.set(Some(handle)),
			Err(e) => warn!("could not schedule skill graph layout: {:?}", e),
		}
	}

	/// Drops the pending timeout and turns any queued frame into a no-op.
	fn cancel(&self) {
		if let Some(handle) = self.pending.take() {
			handle.clear();
		}
		self.generation.cancel();
	}
}

/// Browser-side resources owned by one mounted graph.
#[derive(Default)]
struct Observation {
	observer: Option<ResizeObserver>,
	callback: Option<Closure<dyn FnMut()>>,
}

impl Observation {
	/// Disconnects before the callback is dropped so the observer never calls
	/// into a freed closure.
	fn teardown(&mut self) {
		if let Some(observer) = self.observer.take() {
			observer.disconnect();
		}
		self.callback = None;
	}
}

#[component]
pub fn SkillGraph(
	skills: Vec<SkillNode>,
	#[prop(into)] theme: Signal<Theme>,
	/// Fired on the first hover over any skill, once per component.
	#[prop(optional, into)]
	on_first_interaction: Option<Callback<()>>,
	#[prop(default = 450.0)] height: f64,
	#[prop(default = LayoutParams::default())] params: LayoutParams,
	#[prop(default = Duration::from_millis(10))] debounce: Duration,
) -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

	let mut graph = SkillGraphState::new(skills.clone(), params);
	if let Some(cb) = on_first_interaction {
		graph.set_first_interaction(move || cb.run(()));
	}
	let state = Rc::new(RefCell::new(graph));

	let positions = RwSignal::new(Layout::new());
	let hover = RwSignal::new(HoverState::default());

	let relayout = Relayout {
		state: state.clone(),
		rng: Rc::new(RefCell::new(seeded_rng())),
		pending: Rc::new(Cell::new(None)),
		generation: Generation::default(),
		positions,
		delay: debounce,
	};

	let observation: Rc<RefCell<Observation>> = Rc::new(RefCell::new(Observation::default()));

	let teardown = SendWrapper::new((observation.clone(), relayout.clone()));
	on_cleanup(move || {
		let (observation, relayout) = teardown.take();
		observation.borrow_mut().teardown();
		relayout.cancel();
		debug!("skill graph unmounted");
	});

	Effect::new(move |_| {
		let Some(container) = container_ref.get() else {
			return;
		};
		let mut observation = observation.borrow_mut();
		if observation.callback.is_some() {
			return;
		}

		let (relayout_cb, measured) = (relayout.clone(), container.clone());
		let callback: Closure<dyn FnMut()> = Closure::new(move || {
			let rect = measured.get_bounding_client_rect();
			relayout_cb.schedule(rect.width(), rect.height());
		});
		match ResizeObserver::new(callback.as_ref().unchecked_ref()) {
			Ok(obs) => {
				obs.observe(&container);
				observation.observer = Some(obs);
			}
			Err(e) => warn!("ResizeObserver unavailable, laying out once: {:?}", e),
		}
		observation.callback = Some(callback);

		let rect = container.get_bounding_client_rect();
		relayout.schedule(rect.width(), rect.height());
	});

	let state_draw = state.clone();
	Effect::new(move |_| {
		let theme = theme.get();
		positions.track();
		hover.track();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let state = state_draw.clone();
		request_animation_frame(move || {
			let Some(ctx) = context_2d(&canvas) else {
				return;
			};
			let dpr = web_sys::window()
				.map(|w| w.device_pixel_ratio())
				.unwrap_or(1.0);
			let s = state.borrow();
			render::fit_surface(&canvas, &ctx, s.width, s.height, dpr);
			render::render(&s, &ctx, theme);
		});
	});

	let glyphs = skills
		.iter()
		.map(|skill| {
			let id = skill.id.clone();
			let category = skill.category;
			let is_active = {
				let id = id.clone();
				move || {
					hover.with(|h| h.node.as_deref() == Some(id.as_str()) || h.connections.contains(&id))
				}
			};

			let style = {
				let (id, is_active) = (id.clone(), is_active.clone());
				move || {
					positions.with(|p| match p.get(&id) {
						Some(pt) => format!(
							"position: absolute; left: {}px; top: {}px; transform: translate(-50%, -50%); z-index: {};",
							pt.x,
							pt.y,
							if is_active() { 50 } else { 10 }
						),
						None => "display: none;".to_string(),
					})
				}
			};
			let class = {
				let is_active = is_active.clone();
				move || {
					if is_active() {
						"skill-glyph active"
					} else {
						"skill-glyph"
					}
				}
			};
			let badge_style = move || format!("border-color: {};", category.color(theme.get()));

			let on_enter = {
				let (state, id) = (state.clone(), id.clone());
				move |_: MouseEvent| hover.set(enter_shared(&state, &id))
			};
			let on_leave = {
				let (state, id) = (state.clone(), id.clone());
				move |_: MouseEvent| {
					state.borrow_mut().pointer_leave(&id);
					hover.set(state.borrow().hover.clone());
				}
			};

			view! {
				<div class=class style=style>
					<div
						class="skill-badge"
						style=badge_style
						on:mouseenter=on_enter
						on:mouseleave=on_leave
					>
						<span class="skill-badge-label">{skill.badge()}</span>
						<div
							class="skill-level"
							style=format!("width: {}%;", skill.level_fraction() * 100.0)
						/>
					</div>
					<div class="skill-tooltip">{skill.display_name.clone()}</div>
				</div>
			}
		})
		.collect_view();

	view! {
		<div
			node_ref=container_ref
			class="skill-graph"
			style=format!("position: relative; width: 100%; height: {}px; overflow: hidden;", height)
		>
			<canvas
				node_ref=canvas_ref
				class="skill-graph-canvas"
				style="position: absolute; inset: 0; width: 100%; height: 100%; pointer-events: none;"
			/>
			<div class="skill-graph-nodes" style="position: absolute; inset: 0;">
				{glyphs}
			</div>
		</div>
	}
}
