//! Detail cards for an inspected node, and network-wide counts.

use std::collections::BTreeSet;

use super::graph::{NetworkGraph, Node, NodeId};

/// Details shown for the inspected node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeDetail {
	/// A partner and the domains it operates in.
	Partner {
		/// Partner name.
		label: String,
		/// Free-text description.
		description: String,
		/// Ukraine-relation flag.
		ukraine: bool,
		/// Strategic flag.
		strategic: bool,
		/// Sorted, distinct connected domain labels.
		domains: Vec<String>,
	},
	/// A domain and the partners active in it.
	Domain {
		/// Domain label.
		label: String,
		/// Sorted, distinct connected partner names.
		partners: Vec<String>,
		/// Number of partner edges into this domain.
		count: usize,
	},
}

/// Builds the detail card for a node, if it exists in the graph.
pub fn describe(graph: &NetworkGraph, id: &NodeId) -> Option<NodeDetail> {
	match graph.node(id)? {
		Node::Partner(partner) => Some(NodeDetail::Partner {
			label: partner.label.clone(),
			description: partner.description.clone(),
			ukraine: partner.ukraine,
			strategic: partner.strategic,
			domains: sorted_distinct(graph.incident(id).map(|edge| edge.domain.clone())),
		}),
		Node::Domain { label } => {
			let partners: Vec<String> = graph
				.incident(id)
				.filter_map(|edge| graph.node(&edge.source()))
				.map(|node| node.label().to_owned())
				.collect();
			Some(NodeDetail::Domain {
				label: label.clone(),
				count: partners.len(),
				partners: sorted_distinct(partners),
			})
		}
	}
}

fn sorted_distinct(labels: impl IntoIterator<Item = String>) -> Vec<String> {
	labels.into_iter().collect::<BTreeSet<_>>().into_iter().collect()
}

/// Counts shown in the control panel header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetworkStats {
	/// Partner nodes.
	pub partners: usize,
	/// Domain nodes.
	pub domains: usize,
	/// Partners flagged as Ukraine-related.
	pub ukraine: usize,
	/// Partners flagged as strategic.
	pub strategic: usize,
}

impl NetworkStats {
	/// Counts nodes and flags across the whole graph.
	pub fn of(graph: &NetworkGraph) -> Self {
		graph.partners().fold(
			Self {
				domains: graph.domains().count(),
				..Self::default()
			},
			|mut stats, (_, partner)| {
				stats.partners += 1;
				stats.ukraine += usize::from(partner.ukraine);
				stats.strategic += usize::from(partner.strategic);
				stats
			},
		)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::network::table::{EntityRow, EntityTable, RowId};

	fn graph() -> NetworkGraph {
		NetworkGraph::build(&EntityTable::from_rows([
			EntityRow::new("ISU", "Prevenire/Intervenție/prevenire incendii")
				.with_ukraine(true)
				.with_description("Inspectorat"),
			EntityRow::new("ARC", "Prevenire").with_strategic(true),
			EntityRow::new("ARC", "Cercetare/Prevenire"),
		]))
	}

	#[test]
	fn test_partner_detail() {
		let detail = describe(&graph(), &NodeId::Partner(RowId::new(0))).unwrap();
		assert_eq!(
			detail,
			NodeDetail::Partner {
				label: "ISU".into(),
				description: "Inspectorat".into(),
				ukraine: true,
				strategic: false,
				domains: vec!["Intervenție".into(), "Prevenire".into()],
			}
		);
	}

	#[test]
	fn test_domain_detail_counts_edges() {
		let detail = describe(&graph(), &NodeId::Domain("Prevenire".into())).unwrap();
		assert_eq!(
			detail,
			NodeDetail::Domain {
				label: "Prevenire".into(),
				partners: vec!["ARC".into(), "ISU".into()],
				count: 4,
			}
		);
	}

	#[test]
	fn test_missing_node() {
		assert_eq!(describe(&graph(), &NodeId::Domain("Nope".into())), None);
	}

	#[test]
	fn test_stats() {
		assert_eq!(
			NetworkStats::of(&graph()),
			NetworkStats {
				partners: 3,
				domains: 3,
				ukraine: 1,
				strategic: 1,
			}
		);
		assert_eq!(NetworkStats::of(&NetworkGraph::default()), NetworkStats::default());
	}
}
