//! Display attributes for visible nodes and edges.

use super::config::StyleConfig;
use super::graph::{Degrees, Edge, NetworkGraph, Node, NodeId};
use super::visibility::VisibleSubgraph;

/// Node glyph drawn by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
	/// Circle, used for partners.
	Dot,
	/// Rhombus, used for domains.
	Diamond,
}

/// Label font of a node.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
	/// CSS colour.
	pub color: String,
	/// Size in pixels.
	pub size: f64,
}

/// A visible node with everything the renderer needs.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualNode {
	/// Renderer id, see [`NodeId`]'s `Display`.
	pub id: String,
	/// Possibly truncated label drawn next to the node.
	pub label: String,
	/// Full label, shown on hover.
	pub title: String,
	/// Size before layout scaling.
	pub size: f64,
	/// Glyph.
	pub shape: Shape,
	/// Fill colour.
	pub color: String,
	/// Label font.
	pub font: Font,
}

/// A visible edge.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualEdge {
	/// Renderer id of the partner end.
	pub source: String,
	/// Renderer id of the domain end.
	pub target: String,
	/// Stroke colour.
	pub color: String,
	/// Stroke width.
	pub width: f64,
}

/// Cuts `label` to `budget` characters plus `ellipsis` when it is longer.
pub fn truncate_label(label: &str, budget: usize, ellipsis: &str) -> String {
	match label.char_indices().nth(budget) {
		Some((cut, _)) => format!("{}{ellipsis}", &label[..cut]),
		None => label.to_owned(),
	}
}

/// Maps one node to its display attributes.
pub fn style_node(
	id: &NodeId,
	node: &Node,
	degree: usize,
	is_focus: bool,
	style: &StyleConfig,
) -> VisualNode {
	let degree = degree as f64;
	match node {
		Node::Partner(partner) => {
			let (label, size, font_size) = if is_focus {
				(partner.label.clone(), style.focus_size, style.focus_font_size)
			} else {
				(
					truncate_label(&partner.label, style.label_budget, &style.ellipsis),
					style.partner_base_size + degree * style.partner_degree_factor,
					style.font_size,
				)
			};
			let color = if partner.strategic {
				&style.strategic_color
			} else {
				&style.partner_color
			};
			VisualNode {
				id: id.to_string(),
				label,
				title: partner.label.clone(),
				size,
				shape: Shape::Dot,
				color: color.clone(),
				font: Font {
					color: style.partner_font_color.clone(),
					size: font_size,
				},
			}
		}
		Node::Domain { label } => VisualNode {
			id: id.to_string(),
			label: label.clone(),
			title: label.clone(),
			size: style.domain_base_size + degree * style.domain_degree_factor,
			shape: Shape::Diamond,
			color: style.domain_color.clone(),
			font: Font {
				color: style.domain_font_color.clone(),
				size: style.font_size,
			},
		},
	}
}

/// Maps one edge to its display attributes.
pub fn style_edge(edge: &Edge, style: &StyleConfig) -> VisualEdge {
	VisualEdge {
		source: edge.source().to_string(),
		target: edge.target().to_string(),
		color: style.edge_color.clone(),
		width: style.edge_width,
	}
}

/// Styles every visible node and edge.
pub fn style_subgraph(
	graph: &NetworkGraph,
	degrees: &Degrees,
	visible: &VisibleSubgraph,
	style: &StyleConfig,
) -> (Vec<VisualNode>, Vec<VisualEdge>) {
	let focus = visible.focus.map(NodeId::Partner);
	let nodes = visible
		.nodes
		.iter()
		.filter_map(|id| {
			let node = graph.node(id)?;
			Some(style_node(id, node, degrees.get(id), focus.as_ref() == Some(id), style))
		})
		.collect();
	let edges = visible.edges.iter().map(|edge| style_edge(edge, style)).collect();
	(nodes, edges)
}
