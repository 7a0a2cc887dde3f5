//! Error types for the partner network core.

use thiserror::Error;

use super::table::RowId;

/// Errors raised while reading, writing or editing the entity table.
#[derive(Debug, Error)]
pub enum TableError {
	/// The CSV source could not be decoded or encoded.
	#[error("CSV error: {0}")]
	Csv(#[from] csv::Error),

	/// A column the graph cannot be built without is absent.
	#[error("missing required column: {0}")]
	MissingColumn(&'static str),

	/// An edit tried to store a row whose partner name is blank.
	#[error("partner name must not be blank")]
	BlankPartner,

	/// An edit referenced a row that is no longer in the table.
	#[error("unknown row: {0}")]
	UnknownRow(RowId),

	/// The exported bytes were not valid UTF-8.
	#[error("export produced invalid UTF-8")]
	Encoding(#[from] std::string::FromUtf8Error),
}

/// Errors raised while loading the dashboard configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The configuration document is not valid JSON for the schema.
	#[error("invalid dashboard config: {0}")]
	Json(#[from] serde_json::Error),
}

/// Errors raised while parsing a node identifier reported by the renderer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NodeIdError {
	/// The identifier carries neither the partner nor the domain prefix.
	#[error("unrecognised node id prefix: {0:?}")]
	UnknownPrefix(String),

	/// A partner identifier whose row number is not an integer.
	#[error("invalid partner row in node id: {0:?}")]
	InvalidRow(String),

	/// A domain identifier with an empty label.
	#[error("empty domain label in node id")]
	EmptyDomain,
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
