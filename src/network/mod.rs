//! Partner network core.
//!
//! Turns a snapshot of the entity table and the current [`ViewState`] into the
//! graph, its visible part and the display attributes of every visible node.
//! Nothing here keeps state between calls: every edit, filter change, search
//! or click runs [`evaluate`] again on the latest table.
//!
//! ```
//! use partner_network::network::{evaluate, EntityRow, EntityTable, StyleConfig, ViewState};
//!
//! let table = EntityTable::from_rows([
//! 	EntityRow::new("ARC", "Prevenire/Cercetare").with_strategic(true),
//! ]);
//! let mut view = ViewState::default();
//! view.focus_partner("ARC");
//!
//! let eval = evaluate(&table, &view, &StyleConfig::default());
//! assert_eq!(eval.nodes.len(), 3);
//! assert_eq!(eval.edges.len(), 2);
//! ```

pub mod classify;
pub mod config;
pub mod detail;
pub mod error;
pub mod graph;
pub mod split;
pub mod style;
pub mod table;
pub mod visibility;

use log::debug;

pub use classify::classify;
pub use config::{DashboardConfig, LayoutConfig, StyleConfig};
pub use detail::{NetworkStats, NodeDetail, describe};
pub use error::{ConfigError, NodeIdError, TableError};
pub use graph::{Degrees, Edge, NetworkGraph, Node, NodeId, PartnerNode};
pub use split::split_domains;
pub use style::{Font, Shape, VisualEdge, VisualNode};
pub use table::{EntityRow, EntityTable, LoadNotice, Loaded, RowId, parse_flag};
pub use visibility::{ClickOutcome, DomainFilter, Mode, ViewState, VisibleSubgraph};

/// Result of one evaluation pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluation {
	/// The full graph.
	pub graph: NetworkGraph,
	/// Visible node ids and edges.
	pub visible: VisibleSubgraph,
	/// Styled visible nodes.
	pub nodes: Vec<VisualNode>,
	/// Styled visible edges.
	pub edges: Vec<VisualEdge>,
	/// Network-wide counts.
	pub stats: NetworkStats,
}

impl Evaluation {
	/// Id of the resolved focus target, in focus mode.
	pub fn focus_id(&self) -> Option<NodeId> {
		self.visible.focus.map(NodeId::Partner)
	}
}

/// Runs the full pipeline on a table snapshot.
pub fn evaluate(table: &EntityTable, view: &ViewState, style: &StyleConfig) -> Evaluation {
	let graph = NetworkGraph::build(table);
	let degrees = Degrees::compute(graph.edges());
	let visible = visibility::visible_subgraph(&graph, view);
	let (nodes, edges) = style::style_subgraph(&graph, &degrees, &visible, style);
	let stats = NetworkStats::of(&graph);

	debug!(
		"Evaluated {:?}: {} of {} nodes visible",
		view.mode(),
		nodes.len(),
		graph.node_count()
	);

	Evaluation {
		graph,
		visible,
		nodes,
		edges,
		stats,
	}
}
