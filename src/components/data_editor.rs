use leptos::prelude::*;
use log::{info, warn};
use web_sys::HtmlInputElement;

use crate::network::{EntityRow, EntityTable, RowId};

const NEW_PARTNER: &str = "Partener nou";
const EXPORT_FILE: &str = "data_updated.csv";

/// Applies `edit` to a copy of one row and stores it back.
///
/// Edits that would leave the partner name blank are rejected; the stored row
/// is then returned unchanged so the editor can restore its inputs.
fn apply_edit(
	table: &mut EntityTable,
	id: RowId,
	edit: impl FnOnce(&mut EntityRow),
) -> Result<(), EntityRow> {
	let Some(stored) = table.get(id).cloned() else {
		return Ok(());
	};
	let mut row = stored.clone();
	edit(&mut row);
	table.update(id, row).map_err(|err| {
		warn!("Edit of row {id} rejected: {err}");
		stored
	})
}

fn edit_row(
	table: RwSignal<EntityTable>,
	id: RowId,
	edit: impl FnOnce(&mut EntityRow),
) -> Result<(), EntityRow> {
	table.try_update(|t| apply_edit(t, id, edit)).unwrap_or(Ok(()))
}

fn export_href(table: &EntityTable) -> String {
	match table.to_csv() {
		Ok(csv) => format!(
			"data:text/csv;charset=utf-8,{}",
			String::from(js_sys::encode_uri_component(&csv))
		),
		Err(err) => {
			warn!("CSV export failed: {err}");
			String::new()
		}
	}
}

/// Editable view of the entity table with CSV download.
#[component]
pub fn DataEditor(table: RwSignal<EntityTable>) -> impl IntoView {
	let rows = move || {
		table.with(|t| {
			t.rows()
				.map(|(id, row)| (id, row.clone()))
				.collect::<Vec<_>>()
		})
	};

	let add_row = move |_: leptos::ev::MouseEvent| {
		table.update(|t| match t.push(EntityRow::new(NEW_PARTNER, "")) {
			Ok(id) => info!("Added row {id}"),
			Err(err) => warn!("Could not add row: {err}"),
		});
	};

	view! {
		<details class="data-editor">
			<summary>"Editor date (actualizare live)"</summary>
			<p>"Modifică datele și descrierile."</p>
			<table>
				<thead>
					<tr>
						<th>"Partener"</th>
						<th>"Domenii"</th>
						<th>"Ucraina?"</th>
						<th>"Strategic?"</th>
						<th>"Descriere"</th>
						<th></th>
					</tr>
				</thead>
				<tbody>
					<For
						each=rows
						key=|(id, _)| *id
						children=move |(id, row)| {
							view! {
								<tr>
									<td>
										<input
											type="text"
											prop:value=row.partner
											on:change=move |ev| {
												let value = event_target_value(&ev);
												if let Err(stored) = edit_row(table, id, |r| r.partner = value) {
													event_target::<HtmlInputElement>(&ev).set_value(&stored.partner);
												}
											}
										/>
									</td>
									<td>
										<textarea
											prop:value=row.domain_raw
											on:change=move |ev| {
												let value = event_target_value(&ev);
												let _ = edit_row(table, id, |r| r.domain_raw = value);
											}
										></textarea>
									</td>
									<td>
										<input
											type="checkbox"
											prop:checked=row.ukraine
											on:change=move |ev| {
												let value = event_target_checked(&ev);
												let _ = edit_row(table, id, |r| r.ukraine = value);
											}
										/>
									</td>
									<td>
										<input
											type="checkbox"
											prop:checked=row.strategic
											on:change=move |ev| {
												let value = event_target_checked(&ev);
												let _ = edit_row(table, id, |r| r.strategic = value);
											}
										/>
									</td>
									<td>
										<textarea
											prop:value=row.description
											on:change=move |ev| {
												let value = event_target_value(&ev);
												let _ = edit_row(table, id, |r| r.description = value);
											}
										></textarea>
									</td>
									<td>
										<button on:click=move |_| {
											table.update(|t| {
												if let Err(err) = t.remove(id) {
													warn!("Could not remove row {id}: {err}");
												}
											});
										}>"Șterge"</button>
									</td>
								</tr>
							}
						}
					/>
				</tbody>
			</table>
			<div class="button-row">
				<button on:click=add_row>"Adaugă rând"</button>
				<a
					class="button"
					download=EXPORT_FILE
					href=move || table.with(export_href)
				>
					"Descarcă CSV actualizat"
				</a>
			</div>
		</details>
	}
}
