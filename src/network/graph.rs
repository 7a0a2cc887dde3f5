//! Bipartite partner/domain graph derived from the entity table.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use super::classify::classify;
use super::error::NodeIdError;
use super::split::split_domains;
use super::table::{EntityTable, RowId};

const PARTNER_PREFIX: &str = "p_";
const DOMAIN_PREFIX: &str = "d_";

/// Identifier of a graph node.
///
/// Renders as `p_<row>` for partners and `d_<label>` for domains, which is the
/// form exchanged with the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeId {
	/// A partner, keyed by its table row.
	Partner(RowId),
	/// A domain, keyed by its canonical label.
	Domain(String),
}

impl NodeId {
	/// Whether this id names a partner.
	pub fn is_partner(&self) -> bool {
		matches!(self, Self::Partner(_))
	}
}

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Partner(row) => write!(f, "{PARTNER_PREFIX}{row}"),
			Self::Domain(label) => write!(f, "{DOMAIN_PREFIX}{label}"),
		}
	}
}

impl FromStr for NodeId {
	type Err = NodeIdError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if let Some(row) = s.strip_prefix(PARTNER_PREFIX) {
			let row = row
				.parse::<u64>()
				.map_err(|_| NodeIdError::InvalidRow(row.to_owned()))?;
			return Ok(Self::Partner(RowId::new(row)));
		}
		if let Some(label) = s.strip_prefix(DOMAIN_PREFIX) {
			if label.is_empty() {
				return Err(NodeIdError::EmptyDomain);
			}
			return Ok(Self::Domain(label.to_owned()));
		}
		Err(NodeIdError::UnknownPrefix(s.to_owned()))
	}
}

/// Partner attributes carried by a partner node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartnerNode {
	/// Partner name.
	pub label: String,
	/// Ukraine-relation flag.
	pub ukraine: bool,
	/// Strategic flag.
	pub strategic: bool,
	/// Free-text description.
	pub description: String,
}

/// A node of the partner network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	/// An organisation.
	Partner(PartnerNode),
	/// A canonical activity domain.
	Domain {
		/// Canonical category label.
		label: String,
	},
}

impl Node {
	/// Display label of the node.
	pub fn label(&self) -> &str {
		match self {
			Self::Partner(partner) => &partner.label,
			Self::Domain { label } => label,
		}
	}

	/// Whether this is a partner node.
	pub fn is_partner(&self) -> bool {
		matches!(self, Self::Partner(_))
	}
}

/// An edge from a partner to a domain it operates in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
	/// Partner endpoint.
	pub partner: RowId,
	/// Domain endpoint, by canonical label.
	pub domain: String,
}

impl Edge {
	/// Partner endpoint as a node id.
	pub fn source(&self) -> NodeId {
		NodeId::Partner(self.partner)
	}

	/// Domain endpoint as a node id.
	pub fn target(&self) -> NodeId {
		NodeId::Domain(self.domain.clone())
	}
}

/// Immutable snapshot of the partner network.
///
/// Nodes keep insertion order: each partner is followed by any domains it
/// introduced first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkGraph {
	nodes: IndexMap<NodeId, Node>,
	edges: Vec<Edge>,
}

impl NetworkGraph {
	/// Builds the graph from every row of the table.
	///
	/// Each row becomes a partner node. Each domain fragment is classified,
	/// its domain node is created on first sight and reused afterwards, and
	/// one edge is appended per fragment.
	pub fn build(table: &EntityTable) -> Self {
		let mut graph = Self::default();

		for (row_id, row) in table.rows() {
			graph.nodes.insert(
				NodeId::Partner(row_id),
				Node::Partner(PartnerNode {
					label: row.partner.clone(),
					ukraine: row.ukraine,
					strategic: row.strategic,
					description: row.description.clone(),
				}),
			);

			for fragment in split_domains(Some(row.domain_raw.as_str())) {
				let label = classify(fragment);
				if label.is_empty() {
					continue;
				}
				graph
					.nodes
					.entry(NodeId::Domain(label.clone()))
					.or_insert_with(|| Node::Domain {
						label: label.clone(),
					});
				graph.edges.push(Edge {
					partner: row_id,
					domain: label,
				});
			}
		}

		graph
	}

	/// All nodes in insertion order.
	pub fn nodes(&self) -> impl Iterator<Item = (&NodeId, &Node)> {
		self.nodes.iter()
	}

	/// All edges in construction order.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// Looks up a node.
	pub fn node(&self, id: &NodeId) -> Option<&Node> {
		self.nodes.get(id)
	}

	/// Number of nodes.
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	/// Iterates partner nodes in table order.
	pub fn partners(&self) -> impl Iterator<Item = (RowId, &PartnerNode)> {
		self.nodes.iter().filter_map(|(id, node)| match (id, node) {
			(NodeId::Partner(row), Node::Partner(partner)) => Some((*row, partner)),
			_ => None,
		})
	}

	/// Iterates domain labels in first-seen order.
	pub fn domains(&self) -> impl Iterator<Item = &str> {
		self.nodes.values().filter_map(|node| match node {
			Node::Domain { label } => Some(label.as_str()),
			Node::Partner(_) => None,
		})
	}

	/// Sorted, distinct domain labels, used as filter options.
	pub fn domain_labels(&self) -> Vec<String> {
		self.domains().map(str::to_owned).collect::<BTreeSet<_>>().into_iter().collect()
	}

	/// Sorted, distinct partner names, used as search options.
	pub fn partner_labels(&self) -> Vec<String> {
		self.partners()
			.map(|(_, p)| p.label.clone())
			.collect::<BTreeSet<_>>()
			.into_iter()
			.collect()
	}

	/// First partner, in table order, whose name equals `label`.
	pub fn find_partner(&self, label: &str) -> Option<RowId> {
		self.partners().find(|(_, p)| p.label == label).map(|(row, _)| row)
	}

	/// Edges incident to a node.
	pub fn incident<'a>(&'a self, id: &'a NodeId) -> impl Iterator<Item = &'a Edge> + 'a {
		self.edges.iter().filter(move |edge| match id {
			NodeId::Partner(row) => edge.partner == *row,
			NodeId::Domain(label) => edge.domain == *label,
		})
	}
}

/// Per-node edge counts.
///
/// Nodes without edges are absent and report zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Degrees(HashMap<NodeId, usize>);

impl Degrees {
	/// Counts both endpoints of every edge.
	pub fn compute(edges: &[Edge]) -> Self {
		let mut counts = HashMap::new();
		for edge in edges {
			*counts.entry(edge.source()).or_insert(0) += 1;
			*counts.entry(edge.target()).or_insert(0) += 1;
		}
		Self(counts)
	}

	/// Degree of a node, zero when it has no edges.
	pub fn get(&self, id: &NodeId) -> usize {
		self.0.get(id).copied().unwrap_or(0)
	}
}
