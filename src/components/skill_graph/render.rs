use log::warn;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::state::SkillGraphState;
use super::types::{Point, Theme};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeStyle {
	pub stroke: &'static str,
	pub width: f64,
	pub shadow: &'static str,
	pub blur: f64,
}

impl EdgeStyle {
	pub fn for_edge(highlighted: bool, theme: Theme) -> Self {
		match (highlighted, theme) {
			(true, Theme::Light) => Self {
				stroke: "rgba(75, 75, 75, 0.4)",
				width: 2.0,
				shadow: "rgba(99, 102, 241, 0.2)",
				blur: 8.0,
			},
			(true, Theme::Dark) => Self {
				stroke: "rgba(200, 200, 200, 0.4)",
				width: 2.0,
				shadow: "rgba(255, 255, 255, 0.2)",
				blur: 8.0,
			},
			(false, Theme::Light) => Self {
				stroke: "rgba(100, 100, 100, 0.15)",
				width: 1.0,
				shadow: "transparent",
				blur: 0.0,
			},
			(false, Theme::Dark) => Self {
				stroke: "rgba(150, 150, 150, 0.15)",
				width: 1.0,
				shadow: "transparent",
				blur: 0.0,
			},
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
	pub from: Point,
	pub to: Point,
	pub highlighted: bool,
}

/// One segment per placed edge. Edges with an unplaced endpoint are skipped.
pub fn edge_segments(state: &SkillGraphState) -> Vec<Segment> {
	state
		.edges
		.iter()
		.filter_map(|edge| {
			let (from, to) = (state.position(&edge.a)?, state.position(&edge.b)?);
			Some(Segment {
				from,
				to,
				highlighted: state.is_edge_highlighted(edge),
			})
		})
		.collect()
}

/// Sizes the backing store to `dpr` times the logical size and scales the
/// context so drawing stays in logical pixels.
pub fn fit_surface(
	canvas: &HtmlCanvasElement,
	ctx: &CanvasRenderingContext2d,
	width: f64,
	height: f64,
	dpr: f64,
) {
	let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
	let (bw, bh) = ((width * dpr).round() as u32, (height * dpr).round() as u32);
	if canvas.width() != bw || canvas.height() != bh {
		canvas.set_width(bw);
		canvas.set_height(bh);
	}
	if let Err(e) = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0) {
		warn!("failed to scale skill graph canvas: {:?}", e);
	}
}

pub fn render(state: &SkillGraphState, ctx: &CanvasRenderingContext2d, theme: Theme) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	if !state.is_laid_out() {
		return;
	}

	// Dim edges first so highlighted ones and their glow sit on top.
	let segments = edge_segments(state);
	for highlighted in [false, true] {
		let style = EdgeStyle::for_edge(highlighted, theme);
		ctx.set_stroke_style_str(style.stroke);
		ctx.set_line_width(style.width);
		ctx.set_shadow_color(style.shadow);
		ctx.set_shadow_blur(style.blur);
		for seg in segments.iter().filter(|s| s.highlighted == highlighted) {
			ctx.begin_path();
			ctx.move_to(seg.from.x, seg.from.y);
			ctx.line_to(seg.to.x, seg.to.y);
			ctx.stroke();
		}
	}
	ctx.set_shadow_color("transparent");
	ctx.set_shadow_blur(0.0);
}
