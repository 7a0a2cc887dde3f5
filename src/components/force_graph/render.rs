use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{ForceGraphState, NodeInfo};
use crate::network::Shape;

const BACKGROUND: &str = "#0e1117";
const TOOLTIP_BG: &str = "rgba(33, 38, 45, 0.92)";

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
	draw_tooltip(state, ctx);
}

fn draw_edges(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let t = ease_out_cubic(state.hover.highlight_t);
	let mut positions = std::collections::HashMap::new();
	state.graph.visit_nodes(|node| {
		positions.insert(node.index(), (node.x() as f64, node.y() as f64));
	});

	for (src, tgt, style) in &state.edges {
		let (Some(&(x1, y1)), Some(&(x2, y2))) = (positions.get(src), positions.get(tgt)) else {
			continue;
		};

		// t=0: all edges at base (0.8), t=1: highlighted at 1.0, others at 0.2
		let (alpha, width) = if state.is_highlighted(*src) && state.is_highlighted(*tgt) {
			(0.8 + 0.2 * t, style.width * (1.0 + 0.8 * t))
		} else {
			(0.8 - 0.6 * t, style.width)
		};

		ctx.set_global_alpha(alpha);
		ctx.set_stroke_style_str(&style.color);
		ctx.set_line_width(width / k.max(0.5));
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();
	}
	ctx.set_global_alpha(1.0);
}

fn trace_shape(ctx: &CanvasRenderingContext2d, info: &NodeInfo, x: f64, y: f64, radius: f64) {
	ctx.begin_path();
	match info.shape {
		Shape::Dot => {
			let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		}
		Shape::Diamond => {
			ctx.move_to(x, y - radius);
			ctx.line_to(x + radius, y);
			ctx.line_to(x, y + radius);
			ctx.line_to(x - radius, y);
			ctx.close_path();
		}
	}
}

fn draw_label(ctx: &CanvasRenderingContext2d, info: &NodeInfo, x: f64, y: f64, radius: f64, k: f64) {
	if info.label.is_empty() {
		return;
	}
	ctx.set_fill_style_str(&info.font_color);
	ctx.set_font(&format!("{}px sans-serif", info.font_size * 0.7 / k.max(0.5)));
	let _ = ctx.fill_text(&info.label, x + radius + 3.0, y + 3.0);
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let (has_highlight, t, k) = (
		state.has_active_highlight(),
		ease_out_cubic(state.hover.highlight_t),
		state.transform.k,
	);

	state.graph.visit_nodes(|node| {
		let idx = node.index();
		if has_highlight && state.is_highlighted(idx) {
			return;
		}
		let info = &node.data.user_data;
		let (x, y) = (node.x() as f64, node.y() as f64);
		let (alpha, radius) = (1.0 - 0.7 * t, info.radius * (1.0 - 0.15 * t));

		ctx.set_global_alpha(alpha);
		trace_shape(ctx, info, x, y, radius);
		ctx.set_fill_style_str(&info.color);
		ctx.fill();
		draw_label(ctx, info, x, y, radius, k);
		ctx.set_global_alpha(1.0);
	});

	if !has_highlight {
		return;
	}

	state.graph.visit_nodes(|node| {
		let idx = node.index();
		if !state.is_highlighted(idx) {
			return;
		}
		let info = &node.data.user_data;
		let (x, y) = (node.x() as f64, node.y() as f64);
		let is_hovered = state.is_hovered(idx);

		let radius = if is_hovered {
			info.radius * (1.0 + 0.25 * t)
		} else {
			info.radius * (1.0 + 0.1 * t)
		};

		if is_hovered && t > 0.01 {
			let glow_radius = radius * (1.4 + 0.6 * t);
			if let Ok(gradient) = ctx.create_radial_gradient(x, y, radius * 0.3, x, y, glow_radius) {
				let alpha = 0.3 * t;
				let _ = gradient.add_color_stop(0.0, &format!("rgba(255, 255, 255, {})", alpha));
				let _ = gradient.add_color_stop(1.0, "rgba(255, 255, 255, 0)");
				ctx.begin_path();
				let _ = ctx.arc(x, y, glow_radius, 0.0, 2.0 * PI);
				#[allow(deprecated)]
				ctx.set_fill_style(&gradient);
				ctx.fill();
			}
		}

		trace_shape(ctx, info, x, y, radius);
		ctx.set_fill_style_str(&info.color);
		ctx.fill();

		if is_hovered && t > 0.01 {
			trace_shape(ctx, info, x, y, radius + 2.0 / k);
			ctx.set_stroke_style_str(&format!("rgba(247, 160, 114, {})", 0.9 * t));
			ctx.set_line_width(1.5 / k);
			ctx.stroke();
		}

		draw_label(ctx, info, x, y, radius, k);
	});
}

/// Full label of the hovered node, drawn in screen space.
fn draw_tooltip(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let Some(hovered) = state.hover.node else {
		return;
	};
	state.graph.visit_nodes(|node| {
		if node.index() != hovered {
			return;
		}
		let info = &node.data.user_data;
		let sx = node.x() as f64 * state.transform.k + state.transform.x;
		let sy = node.y() as f64 * state.transform.k + state.transform.y;
		let offset = info.radius * state.transform.k + 8.0;

		ctx.set_font("13px sans-serif");
		let width = ctx
			.measure_text(&info.title)
			.map(|m| m.width())
			.unwrap_or(info.title.chars().count() as f64 * 7.0);
		ctx.set_fill_style_str(TOOLTIP_BG);
		ctx.fill_rect(sx + offset, sy - offset - 18.0, width + 12.0, 22.0);
		ctx.set_fill_style_str("#c9d1d9");
		let _ = ctx.fill_text(&info.title, sx + offset + 6.0, sy - offset - 3.0);
	});
}
