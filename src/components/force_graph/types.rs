use crate::network::{VisualEdge, VisualNode};

/// Styled nodes and edges handed to the canvas.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	pub nodes: Vec<VisualNode>,
	pub links: Vec<VisualEdge>,
}
