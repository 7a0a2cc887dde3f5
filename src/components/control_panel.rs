use leptos::prelude::*;

use crate::network::{Evaluation, LoadNotice, NodeDetail, NodeId, ViewState, describe};

/// Search entry that leaves focus mode.
pub const ALL_PARTNERS: &str = "- Toate -";

fn yes_no(value: bool) -> &'static str {
	if value { "DA" } else { "Nu" }
}

/// Left-hand controls: search, statistics, domain filter and node details.
#[component]
pub fn ControlPanel(
	evaluation: Memo<Evaluation>,
	view_state: RwSignal<ViewState>,
	inspected: RwSignal<Option<NodeId>>,
	#[prop(default = Vec::new())] notices: Vec<LoadNotice>,
) -> impl IntoView {
	let focus = Memo::new(move |_| view_state.with(|v| v.focus.clone()));
	let partner_labels = Memo::new(move |_| evaluation.with(|e| e.graph.partner_labels()));
	let domain_labels = Memo::new(move |_| evaluation.with(|e| e.graph.domain_labels()));
	let focus_resolved = Memo::new(move |_| evaluation.with(|e| e.visible.focus.is_some()));
	let detail = Memo::new(move |_| {
		let target = inspected.get().or_else(|| evaluation.with(|e| e.focus_id()));
		target.and_then(|id| evaluation.with(|e| describe(&e.graph, &id)))
	});

	let reset = move || {
		view_state.update(ViewState::reset);
		inspected.set(None);
	};

	let on_search = move |ev: leptos::ev::Event| {
		let value = event_target_value(&ev);
		if value == ALL_PARTNERS {
			reset();
		} else {
			inspected.set(None);
			view_state.update(|v| v.focus_partner(value));
		}
	};

	let search = move || {
		let current = focus.get();
		let all_selected = current.is_none();
		let options = partner_labels
			.get()
			.into_iter()
			.map(|label| {
				let selected = current.as_deref() == Some(label.as_str());
				view! { <option value=label.clone() prop:selected=selected>{label.clone()}</option> }
			})
			.collect_view();
		view! {
			<select class="search" on:change=on_search>
				<option value=ALL_PARTNERS prop:selected=all_selected>{ALL_PARTNERS}</option>
				{options}
			</select>
		}
	};

	let stats = move || {
		let stats = evaluation.with(|e| e.stats);
		view! {
			<div class="stats">
				"Parteneri: " <b>{stats.partners}</b> " | Domenii: " <b>{stats.domains}</b> <br />
				"Ucraina: " <b>{stats.ukraine}</b> " | Strategici: " <b>{stats.strategic}</b>
			</div>
		}
	};

	let filter = move || match focus.get() {
		Some(label) => view! {
			<div class="focus-info">"Mod Focus: " <b>{label}</b></div>
			<button on:click=move |_| reset()>"Vezi toate organizațiile"</button>
		}
		.into_any(),
		None => {
			let checkboxes = domain_labels
				.get()
				.into_iter()
				.map(|label| {
					let (checked_label, toggle_label) = (label.clone(), label.clone());
					view! {
						<li>
							<label>
								<input
									type="checkbox"
									prop:checked=move || {
										view_state.with(|v| v.domains.allows(&checked_label))
									}
									on:change=move |_| {
										let all = domain_labels.get_untracked();
										view_state.update(|v| v.toggle_domain(&toggle_label, &all));
									}
								/>
								{label}
							</label>
						</li>
					}
				})
				.collect_view();
			view! {
				<h4>"Filtrare domenii"</h4>
				<div class="button-row">
					<button on:click=move |_| view_state.update(ViewState::select_all_domains)>
						"Selectează tot"
					</button>
					<button on:click=move |_| view_state.update(ViewState::clear_domains)>
						"Deselectează tot"
					</button>
				</div>
				<ul class="domain-filter">{checkboxes}</ul>
			}
			.into_any()
		}
	};

	let details = move || match detail.get() {
		Some(NodeDetail::Partner {
			label,
			description,
			ukraine,
			strategic,
			domains,
		}) => view! {
			<div class="info-card"><b>"Partener DSU"</b><br />{label}</div>
			<div class="description-box">{description}</div>
			<div class="metric-row">
				<div class="metric-box">"Ucraina"<br /><b>{yes_no(ukraine)}</b></div>
				<div class="metric-box">"Strategic"<br /><b>{yes_no(strategic)}</b></div>
			</div>
			<b>"Domenii asociate:"</b>
			<ul>{domains.into_iter().map(|d| view! { <li>{d}</li> }).collect_view()}</ul>
		}
		.into_any(),
		Some(NodeDetail::Domain {
			label,
			partners,
			count,
		}) => view! {
			<div class="info-card"><b>"Domeniu"</b><br />{label}</div>
			<p>"Parteneri în domeniu: " <b>{count}</b></p>
			<details>
				<summary>"Vezi lista"</summary>
				<ul>{partners.into_iter().map(|p| view! { <li>{p}</li> }).collect_view()}</ul>
			</details>
		}
		.into_any(),
		None if focus.get().is_some() && !focus_resolved.get() => view! {
			<div class="hint">"Partenerul selectat nu mai există în tabel."</div>
		}
		.into_any(),
		None => view! {
			<div class="hint">"Selectează un partener din grafic sau din meniu."</div>
		}
		.into_any(),
	};

	let notices = notices
		.into_iter()
		.map(|notice| view! { <div class="notice">{notice.to_string()}</div> })
		.collect_view();

	view! {
		<aside class="control-panel">
			<h3>"Panou de control"</h3>
			<h4>"Caută organizație"</h4>
			{search}
			<hr />
			{stats}
			{filter}
			<hr />
			{details}
			{notices}
		</aside>
	}
}
