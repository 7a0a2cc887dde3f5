use leptos::prelude::*;
use log::{debug, warn};

use crate::components::control_panel::ControlPanel;
use crate::components::data_editor::DataEditor;
use crate::components::force_graph::{ForceGraphCanvas, GraphData};
use crate::network::{
	ClickOutcome, DashboardConfig, EntityTable, Loaded, NodeId, ViewState, evaluate,
};

const DATA_CSV: &str = include_str!("../../data/data.csv");
const CONFIG_JSON: &str = include_str!("../../config/dashboard.json");

/// Partner network dashboard: controls, graph and data editor.
#[component]
pub fn Dashboard() -> impl IntoView {
	let config = DashboardConfig::from_json_or_default(CONFIG_JSON);
	let Loaded { table, notices } = EntityTable::load_or_empty(Some(DATA_CSV));

	let table = RwSignal::new(table);
	let view_state = RwSignal::new(ViewState::default());
	let inspected = RwSignal::new(None::<NodeId>);

	let style = config.style;
	let evaluation =
		Memo::new(move |_| table.with(|t| view_state.with(|v| evaluate(t, v, &style))));

	let graph_data = Signal::derive(move || {
		evaluation.with(|e| GraphData {
			nodes: e.nodes.clone(),
			links: e.edges.clone(),
		})
	});

	let on_node_click = Callback::new(move |raw: String| {
		let id = match raw.parse::<NodeId>() {
			Ok(id) => id,
			Err(err) => {
				warn!("Ignoring click: {err}");
				return;
			}
		};
		let graph = evaluation.with_untracked(|e| e.graph.clone());
		let mut outcome = ClickOutcome::Ignored;
		view_state.update(|v| outcome = v.click(&graph, &id));
		debug!("Click on {id}: {outcome:?}");
		// Partners show up through the focus; domains are only inspected.
		inspected.set(if id.is_partner() { None } else { Some(id) });
	});

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<div class="dashboard">
				<ControlPanel
					evaluation=evaluation
					view_state=view_state
					inspected=inspected
					notices=notices
				/>
				<section class="graph-column">
					<h3>"Ecosistem DSU"</h3>
					<p class="subtitle">
						"Cercurile (cyan/galben) = parteneri. Romburile (roz) = domenii. Trage de noduri pentru a rearanja."
					</p>
					<div class="graph-frame">
						<ForceGraphCanvas
							data=graph_data
							layout=config.layout
							on_node_click=on_node_click
						/>
					</div>
				</section>
			</div>
			<DataEditor table=table />
		</ErrorBoundary>
	}
}
