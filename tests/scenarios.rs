use partner_network::network::{
	ClickOutcome, DomainFilter, EntityRow, EntityTable, Mode, NodeDetail, NodeId, StyleConfig,
	ViewState, classify, describe, evaluate,
};
use pretty_assertions::assert_eq;

fn arc_table() -> EntityTable {
	EntityTable::load_or_empty(Some(
		"Partner,Domain_Raw,Ukraine,Strategic\nARC,Prevenire/Cercetare,,da\n",
	))
	.table
}

fn visible_labels(table: &EntityTable, view: &ViewState) -> Vec<String> {
	let mut labels: Vec<String> = evaluate(table, view, &StyleConfig::default())
		.nodes
		.into_iter()
		.map(|n| n.title)
		.collect();
	labels.sort();
	labels
}

#[test]
fn arc_row_builds_one_partner_two_domains() {
	let eval = evaluate(&arc_table(), &ViewState::default(), &StyleConfig::default());

	let partners: Vec<_> = eval.graph.partners().collect();
	assert_eq!(partners.len(), 1);
	let (_, arc) = partners[0];
	assert_eq!(arc.label, "ARC");
	assert!(arc.strategic);
	assert!(!arc.ukraine);

	assert_eq!(eval.graph.domain_labels(), vec!["Cercetare", "Prevenire"]);
	assert_eq!(eval.graph.edges().len(), 2);
}

#[test]
fn arc_overview_filtered_to_cercetare() {
	let mut view = ViewState::default();
	view.set_domains(["Cercetare".to_owned()]);
	let eval = evaluate(&arc_table(), &view, &StyleConfig::default());
	assert_eq!(visible_labels(&arc_table(), &view), vec!["ARC", "Cercetare"]);
	assert_eq!(eval.edges.len(), 1);
	assert_eq!(eval.edges[0].target, "d_Cercetare");
}

#[test]
fn arc_focus_shows_all_its_domains() {
	let mut view = ViewState::default();
	view.clear_domains();
	view.focus_partner("ARC");
	let eval = evaluate(&arc_table(), &view, &StyleConfig::default());
	assert_eq!(visible_labels(&arc_table(), &view), vec!["ARC", "Cercetare", "Prevenire"]);
	assert_eq!(eval.edges.len(), 2);

	let focus = eval.nodes.iter().find(|n| n.title == "ARC").unwrap();
	assert_eq!(focus.size, StyleConfig::default().focus_size);
	assert_eq!(focus.color, StyleConfig::default().strategic_color);
}

#[test]
fn classifier_scenarios() {
	assert_eq!(classify("IT & C Smart City Solutions"), "IT & C");
	assert_eq!(classify("Logistică generală"), "Logistică generală");
}

#[test]
fn empty_table_evaluates_to_empty_graph() {
	let eval = evaluate(&EntityTable::new(), &ViewState::default(), &StyleConfig::default());
	assert_eq!(eval.graph.node_count(), 0);
	assert!(eval.nodes.is_empty());
	assert!(eval.edges.is_empty());

	let mut view = ViewState::default();
	view.focus_partner("ARC");
	let eval = evaluate(&EntityTable::new(), &view, &StyleConfig::default());
	assert!(eval.nodes.is_empty());
}

#[test]
fn deleting_focused_partner_empties_view() {
	let mut table = EntityTable::from_rows([
		EntityRow::new("ARC", "Prevenire"),
		EntityRow::new("ISU", "Intervenție"),
	]);
	let mut view = ViewState::default();
	let eval = evaluate(&table, &view, &StyleConfig::default());
	let arc = NodeId::Partner(eval.graph.find_partner("ARC").unwrap());
	assert_eq!(view.click(&eval.graph, &arc), ClickOutcome::Focused("ARC".into()));

	let NodeId::Partner(row) = arc else {
		unreachable!()
	};
	table.remove(row).unwrap();

	let eval = evaluate(&table, &view, &StyleConfig::default());
	assert!(eval.nodes.is_empty());
	assert!(eval.edges.is_empty());
	assert_eq!(eval.focus_id(), None);
	assert_eq!(view.mode(), Mode::Focus("ARC"));

	view.reset();
	assert_eq!(view.mode(), Mode::Overview(&DomainFilter::All));
	assert_eq!(evaluate(&table, &view, &StyleConfig::default()).nodes.len(), 2);
}

#[test]
fn partner_ids_survive_edits_of_other_rows() {
	let mut table = EntityTable::from_rows([
		EntityRow::new("A", "Prevenire"),
		EntityRow::new("B", "Cercetare"),
	]);
	let before = evaluate(&table, &ViewState::default(), &StyleConfig::default());
	let b_id = before.nodes.iter().find(|n| n.title == "B").unwrap().id.clone();

	let a = before.graph.find_partner("A").unwrap();
	table.remove(a).unwrap();
	table.push(EntityRow::new("C", "Prevenire")).unwrap();

	let after = evaluate(&table, &ViewState::default(), &StyleConfig::default());
	assert_eq!(after.nodes.iter().find(|n| n.title == "B").unwrap().id, b_id);
}

#[test]
fn domain_click_keeps_mode_and_describes_domain() {
	let table = EntityTable::from_rows([
		EntityRow::new("ARC", "Prevenire/Cercetare"),
		EntityRow::new("ISU", "Prevenire"),
	]);
	let mut view = ViewState::default();
	view.set_domains(["Cercetare".to_owned()]);
	let eval = evaluate(&table, &view, &StyleConfig::default());

	let clicked: NodeId = "d_Cercetare".parse().unwrap();
	assert_eq!(view.click(&eval.graph, &clicked), ClickOutcome::Ignored);
	assert_eq!(evaluate(&table, &view, &StyleConfig::default()), eval);

	assert_eq!(
		describe(&eval.graph, &"d_Prevenire".parse().unwrap()),
		Some(NodeDetail::Domain {
			label: "Prevenire".into(),
			partners: vec!["ARC".into(), "ISU".into()],
			count: 2,
		})
	);
}

#[test]
fn export_then_import_keeps_graph() {
	let table = EntityTable::from_rows([
		EntityRow::new("Crucea Roșie", "Răspuns\nServicii sociale")
			.with_ukraine(true)
			.with_strategic(true)
			.with_description("Prim ajutor, logistică"),
		EntityRow::new("ARC", "Prevenire/Cercetare"),
	]);
	let reloaded = EntityTable::from_csv(table.to_csv().unwrap().as_bytes()).unwrap();
	assert!(reloaded.notices.is_empty());

	let view = ViewState::default();
	let style = StyleConfig::default();
	assert_eq!(
		evaluate(&reloaded.table, &view, &style).graph,
		evaluate(&table, &view, &style).graph
	);
}
