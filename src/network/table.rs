//! The entity table: one row per partner, with CSV import and export.

use std::fmt;
use std::io;

use log::{info, warn};

use super::error::{Result, TableError};

/// Column holding the partner name.
pub const COL_PARTNER: &str = "Partner";
/// Column holding the raw, multi-valued domain text.
pub const COL_DOMAIN_RAW: &str = "Domain_Raw";
/// Column holding the Ukraine-relation flag.
pub const COL_UKRAINE: &str = "Ukraine";
/// Column holding the strategic flag.
pub const COL_STRATEGIC: &str = "Strategic";
/// Column holding the free-text description.
pub const COL_DESCRIPTION: &str = "Description";

/// Description used when the source has no description column.
pub const DESCRIPTION_MISSING: &str = "Fără descriere.";
/// Description used when a row leaves its description cell blank.
pub const DESCRIPTION_UNAVAILABLE: &str = "Descriere indisponibilă.";

/// Token written for a true flag on export.
pub const FLAG_TRUE: &str = "da";

const TRUTHY: [&str; 5] = ["da", "true", "x", "1", "yes"];

/// Normalises a textual flag. Only the truthy spellings count as true.
pub fn parse_flag(raw: &str) -> bool {
	let lowered = raw.trim().to_lowercase();
	TRUTHY.contains(&lowered.as_str())
}

/// Serialises a flag the way [`parse_flag`] reads it back.
pub fn flag_token(value: bool) -> &'static str {
	if value { FLAG_TRUE } else { "" }
}

/// Durable row identifier, assigned when the row enters the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u64);

impl RowId {
	/// Wraps a raw identifier.
	pub fn new(id: u64) -> Self {
		RowId(id)
	}

}

impl fmt::Display for RowId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// One partner organisation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRow {
	/// Organisation name, never blank.
	pub partner: String,
	/// Raw domain cell, split and classified during graph building.
	pub domain_raw: String,
	/// Works on Ukraine-related activities.
	pub ukraine: bool,
	/// Strategic partner.
	pub strategic: bool,
	/// Free-text description.
	pub description: String,
}

impl EntityRow {
	/// Creates a row with both flags unset and the placeholder description.
	pub fn new(partner: impl Into<String>, domain_raw: impl Into<String>) -> Self {
		Self {
			partner: partner.into(),
			domain_raw: domain_raw.into(),
			ukraine: false,
			strategic: false,
			description: DESCRIPTION_MISSING.to_owned(),
		}
	}

	/// Sets the Ukraine flag.
	pub fn with_ukraine(mut self, ukraine: bool) -> Self {
		self.ukraine = ukraine;
		self
	}

	/// Sets the strategic flag.
	pub fn with_strategic(mut self, strategic: bool) -> Self {
		self.strategic = strategic;
		self
	}

	/// Sets the description.
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}
}

/// Informational notices produced while loading a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadNotice {
	/// No source was available; the table starts empty.
	MissingSource,
	/// The source could not be read; the table starts empty.
	Unreadable(String),
	/// An optional column was absent and defaulted.
	MissingColumn(&'static str),
	/// A row without a partner name was dropped.
	SkippedBlankPartner {
		/// 1-based data line number in the source.
		line: usize,
	},
}

impl fmt::Display for LoadNotice {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::MissingSource => write!(f, "no data source found, starting with an empty table"),
			Self::Unreadable(reason) => write!(f, "data source unreadable ({reason}), starting empty"),
			Self::MissingColumn(col) => write!(f, "column '{col}' is missing, using defaults"),
			Self::SkippedBlankPartner { line } => {
				write!(f, "row {line} has no partner name and was skipped")
			}
		}
	}
}

/// A table together with the notices raised while loading it.
#[derive(Debug, Clone, Default)]
pub struct Loaded {
	/// The loaded (possibly empty) table.
	pub table: EntityTable,
	/// Informational notices for the presentation layer.
	pub notices: Vec<LoadNotice>,
}

/// Ordered partner rows with durable identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityTable {
	rows: Vec<(RowId, EntityRow)>,
	next_id: u64,
}

impl EntityTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a table from rows, assigning identifiers in order.
	pub fn from_rows(rows: impl IntoIterator<Item = EntityRow>) -> Self {
		let mut table = Self::new();
		for row in rows {
			table.insert_unchecked(row);
		}
		table
	}

	/// Number of rows.
	pub fn len(&self) -> usize {
		self.rows.len()
	}

	/// Whether the table has no rows.
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	/// Iterates rows in table order.
	pub fn rows(&self) -> impl Iterator<Item = (RowId, &EntityRow)> {
		self.rows.iter().map(|(id, row)| (*id, row))
	}

	/// Looks up a row by identifier.
	pub fn get(&self, id: RowId) -> Option<&EntityRow> {
		self.position(id).map(|idx| &self.rows[idx].1)
	}

	/// Appends a row and returns its new identifier.
	pub fn push(&mut self, row: EntityRow) -> Result<RowId> {
		ensure_named(&row)?;
		Ok(self.insert_unchecked(row))
	}

	/// Replaces the contents of an existing row, keeping its identifier.
	pub fn update(&mut self, id: RowId, row: EntityRow) -> Result<()> {
		ensure_named(&row)?;
		let idx = self.position(id).ok_or(TableError::UnknownRow(id))?;
		self.rows[idx].1 = row;
		Ok(())
	}

	/// Removes a row. Identifiers of the remaining rows are unaffected.
	pub fn remove(&mut self, id: RowId) -> Result<EntityRow> {
		let idx = self.position(id).ok_or(TableError::UnknownRow(id))?;
		Ok(self.rows.remove(idx).1)
	}

	fn position(&self, id: RowId) -> Option<usize> {
		self.rows.iter().position(|(row_id, _)| *row_id == id)
	}

	fn insert_unchecked(&mut self, row: EntityRow) -> RowId {
		let id = RowId(self.next_id);
		self.next_id += 1;
		self.rows.push((id, row));
		id
	}

	/// Reads a table from CSV.
	///
	/// Only `Partner` is required. A missing `Domain_Raw` column leaves every
	/// partner without domains, missing flag columns read as false and a
	/// missing description column uses [`DESCRIPTION_MISSING`].
	/// Rows with a blank partner name are skipped and reported.
	pub fn from_csv<R: io::Read>(reader: R) -> Result<Loaded> {
		let mut reader = csv::ReaderBuilder::new()
			.trim(csv::Trim::All)
			.flexible(true)
			.from_reader(reader);

		let headers = reader.headers()?.clone();
		let column = |name: &str| headers.iter().position(|h| h == name);

		let partner_col = column(COL_PARTNER).ok_or(TableError::MissingColumn(COL_PARTNER))?;
		let domain_col = column(COL_DOMAIN_RAW);
		let ukraine_col = column(COL_UKRAINE);
		let strategic_col = column(COL_STRATEGIC);
		let description_col = column(COL_DESCRIPTION);

		let mut notices: Vec<LoadNotice> = [
			(domain_col, COL_DOMAIN_RAW),
			(ukraine_col, COL_UKRAINE),
			(strategic_col, COL_STRATEGIC),
			(description_col, COL_DESCRIPTION),
		]
		.into_iter()
		.filter(|(col, _)| col.is_none())
		.map(|(_, name)| LoadNotice::MissingColumn(name))
		.collect();

		let mut table = Self::new();
		for (idx, record) in reader.records().enumerate() {
			let record = record?;
			let cell = |col: Option<usize>| col.and_then(|c| record.get(c)).unwrap_or("");

			let partner = cell(Some(partner_col));
			if partner.is_empty() {
				warn!("Skipping row {}: blank partner name", idx + 1);
				notices.push(LoadNotice::SkippedBlankPartner { line: idx + 1 });
				continue;
			}

			let description = match description_col {
				None => DESCRIPTION_MISSING,
				Some(_) if cell(description_col).is_empty() => DESCRIPTION_UNAVAILABLE,
				Some(_) => cell(description_col),
			};

			table.insert_unchecked(EntityRow {
				partner: partner.to_owned(),
				domain_raw: cell(domain_col).to_owned(),
				ukraine: parse_flag(cell(ukraine_col)),
				strategic: parse_flag(cell(strategic_col)),
				description: description.to_owned(),
			});
		}

		for notice in &notices {
			if let LoadNotice::MissingColumn(_) = notice {
				warn!("{notice}");
			}
		}
		info!("Loaded {} partner rows", table.len());
		Ok(Loaded { table, notices })
	}

	/// Reads a table from an optional CSV source, never failing.
	///
	/// A missing or unreadable source yields an empty table and a notice.
	pub fn load_or_empty(source: Option<&str>) -> Loaded {
		let Some(source) = source else {
			warn!("No data source, starting with an empty table");
			return Loaded {
				table: Self::new(),
				notices: vec![LoadNotice::MissingSource],
			};
		};
		Self::from_csv(source.as_bytes()).unwrap_or_else(|err| {
			warn!("Failed to load data source: {err}");
			Loaded {
				table: Self::new(),
				notices: vec![LoadNotice::Unreadable(err.to_string())],
			}
		})
	}

	/// Writes the table as CSV with flags serialised as `da` or empty.
	pub fn to_csv(&self) -> Result<String> {
		let mut writer = csv::Writer::from_writer(Vec::new());
		writer.write_record([
			COL_PARTNER,
			COL_DOMAIN_RAW,
			COL_UKRAINE,
			COL_STRATEGIC,
			COL_DESCRIPTION,
		])?;
		for (_, row) in self.rows() {
			writer.write_record([
				row.partner.as_str(),
				row.domain_raw.as_str(),
				flag_token(row.ukraine),
				flag_token(row.strategic),
				row.description.as_str(),
			])?;
		}
		let bytes = writer.into_inner().map_err(|err| TableError::Csv(err.into_error().into()))?;
		info!("Exported {} partner rows", self.len());
		Ok(String::from_utf8(bytes)?)
	}
}

fn ensure_named(row: &EntityRow) -> Result<()> {
	if row.partner.trim().is_empty() {
		return Err(TableError::BlankPartner);
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn test_parse_flag_spellings() {
		for truthy in ["da", "DA", " Da ", "true", "True", "x", "X", "1", "yes", "YES"] {
			assert!(parse_flag(truthy), "{truthy:?}");
		}
		for falsy in ["", "no", "nu", "0", "false", "maybe", "-", "da da"] {
			assert!(!parse_flag(falsy), "{falsy:?}");
		}
	}

	#[test]
	fn test_from_csv_full() {
		let src = "Partner , Domain_Raw,Ukraine,Strategic,Description\n\
			ARC,Prevenire/Cercetare,,da,Asociație\n\
			Salvamont,\"Căutare\nIntervenție\",x,,\n";
		let loaded = EntityTable::from_csv(src.as_bytes()).unwrap();
		assert!(loaded.notices.is_empty());

		let rows: Vec<_> = loaded.table.rows().map(|(_, r)| r.clone()).collect();
		assert_eq!(
			rows,
			vec![
				EntityRow::new("ARC", "Prevenire/Cercetare")
					.with_strategic(true)
					.with_description("Asociație"),
				EntityRow::new("Salvamont", "Căutare\nIntervenție")
					.with_ukraine(true)
					.with_description(DESCRIPTION_UNAVAILABLE),
			]
		);
	}

	#[test]
	fn test_from_csv_defaults_missing_columns() {
		let src = "Partner,Domain_Raw\nARC,Prevenire\n";
		let loaded = EntityTable::from_csv(src.as_bytes()).unwrap();
		assert_eq!(
			loaded.notices,
			vec![
				LoadNotice::MissingColumn(COL_UKRAINE),
				LoadNotice::MissingColumn(COL_STRATEGIC),
				LoadNotice::MissingColumn(COL_DESCRIPTION),
			]
		);
		let (_, row) = loaded.table.rows().next().unwrap();
		assert!(!row.ukraine && !row.strategic);
		assert_eq!(row.description, DESCRIPTION_MISSING);
	}

	#[test]
	fn test_from_csv_requires_partner() {
		let err = EntityTable::from_csv("Name,Domain_Raw\nA,B\n".as_bytes()).unwrap_err();
		assert!(matches!(err, TableError::MissingColumn(COL_PARTNER)));
	}

	#[test]
	fn test_missing_domain_column_keeps_partners() {
		let loaded = EntityTable::load_or_empty(Some("Partner,Ukraine\nARC,da\nISU,\n"));
		assert_eq!(
			loaded.notices,
			vec![
				LoadNotice::MissingColumn(COL_DOMAIN_RAW),
				LoadNotice::MissingColumn(COL_STRATEGIC),
				LoadNotice::MissingColumn(COL_DESCRIPTION),
			]
		);
		let rows: Vec<_> = loaded.table.rows().map(|(_, r)| r.clone()).collect();
		assert_eq!(
			rows,
			vec![
				EntityRow::new("ARC", "")
					.with_ukraine(true)
					.with_description(DESCRIPTION_MISSING),
				EntityRow::new("ISU", "").with_description(DESCRIPTION_MISSING),
			]
		);
	}

	#[test]
	fn test_from_csv_skips_blank_partner() {
		let src = "Partner,Domain_Raw\n,Prevenire\nARC,Cercetare\n";
		let loaded = EntityTable::from_csv(src.as_bytes()).unwrap();
		assert_eq!(loaded.table.len(), 1);
		assert!(loaded.notices.contains(&LoadNotice::SkippedBlankPartner { line: 1 }));
	}

	#[test]
	fn test_load_or_empty() {
		let loaded = EntityTable::load_or_empty(None);
		assert!(loaded.table.is_empty());
		assert_eq!(loaded.notices, vec![LoadNotice::MissingSource]);

		let loaded = EntityTable::load_or_empty(Some("Nothing,Useful\n1,2\n"));
		assert!(loaded.table.is_empty());
		assert!(matches!(loaded.notices[..], [LoadNotice::Unreadable(_)]));
	}

	#[test]
	fn test_to_csv_flags() {
		let table = EntityTable::from_rows([
			EntityRow::new("ARC", "Prevenire/Cercetare").with_strategic(true),
			EntityRow::new("B, C", "IT & C").with_ukraine(true).with_description("x"),
		]);
		let out = table.to_csv().unwrap();
		assert_eq!(
			out,
			"Partner,Domain_Raw,Ukraine,Strategic,Description\n\
			ARC,Prevenire/Cercetare,,da,Fără descriere.\n\
			\"B, C\",IT & C,da,,x\n"
		);
	}

	#[test]
	fn test_edits_keep_ids_stable() {
		let mut table = EntityTable::new();
		let a = table.push(EntityRow::new("A", "x")).unwrap();
		let b = table.push(EntityRow::new("B", "y")).unwrap();
		let c = table.push(EntityRow::new("C", "z")).unwrap();

		table.remove(a).unwrap();
		assert_eq!(table.get(b).unwrap().partner, "B");
		assert_eq!(table.get(c).unwrap().partner, "C");

		let d = table.push(EntityRow::new("D", "w")).unwrap();
		assert!(d > c);

		table.update(b, EntityRow::new("B2", "y")).unwrap();
		assert_eq!(table.get(b).unwrap().partner, "B2");
		assert!(matches!(table.update(a, EntityRow::new("A", "x")), Err(TableError::UnknownRow(_))));
		assert!(matches!(table.push(EntityRow::new("  ", "x")), Err(TableError::BlankPartner)));
	}
}
