//! Focus and filter state, and the visible subgraph it selects.
//!
//! The dashboard is in one of two modes. In overview mode the domain filter
//! picks the visible domains, and every partner linked to one of them comes
//! along. In focus mode a single partner and its direct domains are shown and
//! the domain filter is ignored. Search and canvas clicks both write the same
//! focus slot. Only [`ViewState::reset`] leaves focus mode.

use std::collections::{BTreeSet, HashSet};

use log::{debug, warn};

use super::graph::{Edge, NetworkGraph, Node, NodeId};
use super::table::RowId;

/// Which domains are shown in overview mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DomainFilter {
	/// Every domain, including ones created by later edits.
	#[default]
	All,
	/// Only the listed domain labels.
	Only(BTreeSet<String>),
}

impl DomainFilter {
	/// Whether a domain label passes the filter.
	pub fn allows(&self, label: &str) -> bool {
		match self {
			Self::All => true,
			Self::Only(labels) => labels.contains(label),
		}
	}
}

/// The active visibility mode, borrowed from a [`ViewState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode<'a> {
	/// Filtered overview of the whole network.
	Overview(&'a DomainFilter),
	/// A single partner, by name.
	Focus(&'a str),
}

/// What a canvas click did to the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
	/// A partner was clicked and is now the focus target.
	Focused(String),
	/// The clicked partner was already the focus target.
	Unchanged,
	/// Domain clicks and unknown ids never change the state.
	Ignored,
}

/// Filter and focus selection owned by the dashboard session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
	/// Domain filter, kept while focus mode is active.
	pub domains: DomainFilter,
	/// Focused partner name, if any.
	pub focus: Option<String>,
}

impl ViewState {
	/// Current mode. A focus selection overrides the domain filter.
	pub fn mode(&self) -> Mode<'_> {
		match &self.focus {
			Some(partner) => Mode::Focus(partner),
			None => Mode::Overview(&self.domains),
		}
	}

	/// Focuses a partner by name, as chosen from the search box.
	pub fn focus_partner(&mut self, label: impl Into<String>) {
		self.focus = Some(label.into());
	}

	/// Applies a click on a rendered node.
	///
	/// Partner clicks write the same focus slot as search. Domain clicks are
	/// no-ops here; the dashboard shows their details without changing mode.
	pub fn click(&mut self, graph: &NetworkGraph, id: &NodeId) -> ClickOutcome {
		let Some(Node::Partner(partner)) = graph.node(id) else {
			return ClickOutcome::Ignored;
		};
		if self.focus.as_deref() == Some(partner.label.as_str()) {
			return ClickOutcome::Unchanged;
		}
		self.focus = Some(partner.label.clone());
		ClickOutcome::Focused(partner.label.clone())
	}

	/// Leaves focus mode. The domain filter is left as it was.
	pub fn reset(&mut self) {
		self.focus = None;
	}

	/// Shows every domain.
	pub fn select_all_domains(&mut self) {
		self.domains = DomainFilter::All;
	}

	/// Hides every domain.
	pub fn clear_domains(&mut self) {
		self.domains = DomainFilter::Only(BTreeSet::new());
	}

	/// Replaces the selected domain labels.
	pub fn set_domains(&mut self, labels: impl IntoIterator<Item = String>) {
		self.domains = DomainFilter::Only(labels.into_iter().collect());
	}

	/// Flips one domain in or out of the filter.
	///
	/// `all_labels` materialises the implicit "all" selection first.
	pub fn toggle_domain(&mut self, label: &str, all_labels: &[String]) {
		let mut selected = match std::mem::take(&mut self.domains) {
			DomainFilter::All => all_labels.iter().cloned().collect(),
			DomainFilter::Only(labels) => labels,
		};
		if !selected.remove(label) {
			selected.insert(label.to_owned());
		}
		self.domains = DomainFilter::Only(selected);
	}
}

/// The visible part of a graph under some [`ViewState`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleSubgraph {
	/// Visible node ids, in graph order.
	pub nodes: Vec<NodeId>,
	/// Visible edges, in graph order.
	pub edges: Vec<Edge>,
	/// The resolved focus target, in focus mode.
	pub focus: Option<RowId>,
}

impl VisibleSubgraph {
	/// Whether a node is visible.
	pub fn contains(&self, id: &NodeId) -> bool {
		self.nodes.contains(id)
	}
}

/// Computes the visible subgraph for the current mode.
pub fn visible_subgraph(graph: &NetworkGraph, view: &ViewState) -> VisibleSubgraph {
	let visible = match view.mode() {
		Mode::Overview(filter) => overview(graph, filter),
		Mode::Focus(label) => focus(graph, label),
	};
	debug!(
		"Visible subgraph: {} nodes, {} edges",
		visible.nodes.len(),
		visible.edges.len()
	);
	visible
}

fn overview(graph: &NetworkGraph, filter: &DomainFilter) -> VisibleSubgraph {
	let edges: Vec<Edge> = graph
		.edges()
		.iter()
		.filter(|edge| filter.allows(&edge.domain))
		.cloned()
		.collect();
	let partners: HashSet<RowId> = edges.iter().map(|edge| edge.partner).collect();

	let nodes = graph
		.nodes()
		.filter(|(id, node)| match (id, node) {
			(NodeId::Partner(row), _) => partners.contains(row),
			(_, Node::Domain { label }) => filter.allows(label),
			_ => false,
		})
		.map(|(id, _)| id.clone())
		.collect();

	VisibleSubgraph {
		nodes,
		edges,
		focus: None,
	}
}

fn focus(graph: &NetworkGraph, label: &str) -> VisibleSubgraph {
	let Some(row) = graph.find_partner(label) else {
		warn!("Focus target {label:?} is not in the current table");
		return VisibleSubgraph::default();
	};
	let target = NodeId::Partner(row);

	let edges: Vec<Edge> = graph.incident(&target).cloned().collect();
	let domains: HashSet<&str> = edges.iter().map(|edge| edge.domain.as_str()).collect();

	let nodes = graph
		.nodes()
		.filter(|(id, _)| match id {
			NodeId::Partner(r) => *r == row,
			NodeId::Domain(d) => domains.contains(d.as_str()),
		})
		.map(|(id, _)| id.clone())
		.collect();

	VisibleSubgraph {
		nodes,
		edges,
		focus: Some(row),
	}
}
