use std::collections::{BTreeSet, HashSet};

use partner_network::network::graph::NetworkGraph;
use partner_network::network::table::flag_token;
use partner_network::network::visibility::visible_subgraph;
use partner_network::network::{
	EntityRow, EntityTable, Node, NodeId, ViewState, parse_flag, split_domains,
};
use proptest::prelude::*;

const FRAGMENTS: &[&str] = &[
	"Prevenire",
	"Cercetare aplicată",
	"Intervenție rapidă",
	"Smart City",
	"Suport psihologic",
	"Pregătire voluntari",
	"Logistică generală",
	"Comunicații radio",
	"-",
	"   ",
];

const SEPARATORS: &[&str] = &["/", "\n", "|", "\\"];

fn arb_domain_raw() -> impl Strategy<Value = String> {
	prop::collection::vec(
		(prop::sample::select(FRAGMENTS), prop::sample::select(SEPARATORS)),
		0..6,
	)
	.prop_map(|parts| {
		parts
			.into_iter()
			.map(|(fragment, sep)| format!("{fragment}{sep}"))
			.collect()
	})
}

fn arb_row() -> impl Strategy<Value = EntityRow> {
	("[A-Z][a-z]{1,6}", arb_domain_raw(), any::<bool>(), any::<bool>()).prop_map(
		|(name, domains, ukraine, strategic)| {
			EntityRow::new(name, domains)
				.with_ukraine(ukraine)
				.with_strategic(strategic)
		},
	)
}

fn arb_table() -> impl Strategy<Value = EntityTable> {
	prop::collection::vec(arb_row(), 0..12).prop_map(EntityTable::from_rows)
}

fn arb_selection() -> impl Strategy<Value = BTreeSet<String>> {
	prop::collection::btree_set(
		prop::sample::select(vec![
			"Prevenire",
			"Cercetare",
			"Intervenție",
			"IT & C",
			"Răspuns",
			"Pregătire",
			"Logistică generală",
			"Comunicații radio",
		])
		.prop_map(str::to_owned),
		0..5,
	)
}

proptest! {
	/// Any mix of separators splits like `/` alone.
	#[test]
	fn prop_separator_equivalence(
		parts in prop::collection::vec(
			(prop::sample::select(FRAGMENTS), prop::sample::select(SEPARATORS)),
			0..8,
		)
	) {
		let mixed: String = parts.iter().map(|(f, s)| format!("{f}{s}")).collect();
		let slashed: String = parts.iter().map(|(f, _)| format!("{f}/")).collect();
		prop_assert_eq!(split_domains(Some(mixed.as_str())), split_domains(Some(slashed.as_str())));
	}

	/// One partner per row, one edge per fragment, always partner to domain.
	#[test]
	fn prop_graph_shape(table in arb_table()) {
		let graph = NetworkGraph::build(&table);
		let fragments: usize = table
			.rows()
			.map(|(_, row)| split_domains(Some(row.domain_raw.as_str())).len())
			.sum();

		prop_assert_eq!(graph.partners().count(), table.len());
		prop_assert_eq!(graph.edges().len(), fragments);
		for edge in graph.edges() {
			let source_is_partner = matches!(graph.node(&edge.source()), Some(Node::Partner(_)));
			let target_is_domain = matches!(graph.node(&edge.target()), Some(Node::Domain { .. }));
			prop_assert!(source_is_partner, "edge source {} is not a partner", edge.source());
			prop_assert!(target_is_domain, "edge target {} is not a domain", edge.target());
		}
	}

	/// Overview never shows orphan partners or unselected domains.
	#[test]
	fn prop_overview_visibility(table in arb_table(), selected in arb_selection()) {
		let graph = NetworkGraph::build(&table);
		let mut view = ViewState::default();
		view.set_domains(selected.iter().cloned());
		let visible = visible_subgraph(&graph, &view);

		for id in &visible.nodes {
			match id {
				NodeId::Domain(label) => {
					prop_assert!(selected.contains(label));
				}
				NodeId::Partner(row) => {
					let linked = visible
						.edges
						.iter()
						.any(|e| e.partner == *row && visible.contains(&e.target()));
					prop_assert!(linked);
				}
			}
		}
		for edge in &visible.edges {
			prop_assert!(visible.contains(&edge.source()));
			prop_assert!(visible.contains(&edge.target()));
		}
	}

	/// Focus shows the partner, its distinct domains and only its edges.
	#[test]
	fn prop_focus_visibility(table in arb_table(), pick in any::<prop::sample::Index>()) {
		prop_assume!(!table.is_empty());
		let graph = NetworkGraph::build(&table);
		let (_, row) = table.rows().nth(pick.index(table.len())).unwrap();
		let target = NodeId::Partner(graph.find_partner(&row.partner).unwrap());

		let mut view = ViewState::default();
		view.clear_domains();
		view.focus_partner(row.partner.clone());
		let visible = visible_subgraph(&graph, &view);

		let domains: HashSet<&str> = graph.incident(&target).map(|e| e.domain.as_str()).collect();
		prop_assert_eq!(visible.nodes.len(), 1 + domains.len());
		prop_assert!(visible.contains(&target));
		for edge in &visible.edges {
			prop_assert_eq!(edge.source(), target.clone());
		}
	}

	/// Exported flags read back to the same booleans.
	#[test]
	fn prop_flag_roundtrip(flags in prop::collection::vec((any::<bool>(), any::<bool>()), 0..10)) {
		let table = EntityTable::from_rows(flags.iter().enumerate().map(|(i, (u, s))| {
			EntityRow::new(format!("P{i}"), "Prevenire").with_ukraine(*u).with_strategic(*s)
		}));
		let reloaded = EntityTable::from_csv(table.to_csv().unwrap().as_bytes()).unwrap().table;
		let read: Vec<(bool, bool)> = reloaded.rows().map(|(_, r)| (r.ukraine, r.strategic)).collect();
		prop_assert_eq!(read, flags);
	}
}

#[test]
fn flag_tokens_parse_back() {
	assert!(parse_flag(flag_token(true)));
	assert!(!parse_flag(flag_token(false)));
	for truthy in ["da", "true", "x", "1", "yes"] {
		assert!(parse_flag(truthy));
	}
	for falsy in ["", "no", "0", "arbitrary text"] {
		assert!(!parse_flag(falsy));
	}
}
