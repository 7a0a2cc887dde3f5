//! Dashboard configuration: visual constants and layout physics.

use log::warn;
use serde::Deserialize;

use super::error::ConfigError;

/// Visual constants used when mapping nodes and edges to display attributes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
	/// Base size of a partner node.
	pub partner_base_size: f64,
	/// Size added per incident edge of a partner node.
	pub partner_degree_factor: f64,
	/// Base size of a domain node.
	pub domain_base_size: f64,
	/// Size added per incident edge of a domain node.
	pub domain_degree_factor: f64,
	/// Fixed size of the focused partner.
	pub focus_size: f64,
	/// Label font size of the focused partner.
	pub focus_font_size: f64,
	/// Label font size of every other node.
	pub font_size: f64,
	/// Characters kept before a partner label is truncated.
	pub label_budget: usize,
	/// Suffix appended to truncated labels.
	pub ellipsis: String,
	/// Fill of a plain partner.
	pub partner_color: String,
	/// Fill of a strategic partner.
	pub strategic_color: String,
	/// Fill of a domain.
	pub domain_color: String,
	/// Label colour of partners.
	pub partner_font_color: String,
	/// Label colour of domains.
	pub domain_font_color: String,
	/// Stroke of an edge.
	pub edge_color: String,
	/// Stroke width of an edge.
	pub edge_width: f64,
}

impl Default for StyleConfig {
	fn default() -> Self {
		Self {
			partner_base_size: 14.0,
			partner_degree_factor: 0.4,
			domain_base_size: 20.0,
			domain_degree_factor: 0.5,
			focus_size: 40.0,
			focus_font_size: 18.0,
			font_size: 14.0,
			label_budget: 20,
			ellipsis: "...".into(),
			partner_color: "#00f2c3".into(),
			strategic_color: "#ffd700".into(),
			domain_color: "#fd79a8".into(),
			partner_font_color: "white".into(),
			domain_font_color: "#ffeef6".into(),
			edge_color: "#2d3436".into(),
			edge_width: 1.0,
		}
	}
}

/// Force simulation parameters for the canvas layout.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
	/// Repulsion between nodes.
	pub force_charge: f32,
	/// Attraction along edges.
	pub force_spring: f32,
	/// Upper bound on any single force.
	pub force_max: f32,
	/// Velocity scale.
	pub node_speed: f32,
	/// Velocity damping per step.
	pub damping_factor: f32,
	/// World units per unit of node size.
	pub size_scale: f64,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
			size_scale: 0.5,
		}
	}
}

/// Top-level dashboard configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
	/// Node and edge appearance.
	pub style: StyleConfig,
	/// Canvas physics.
	pub layout: LayoutConfig,
}

impl DashboardConfig {
	/// Parses a JSON document. Absent fields take their defaults.
	pub fn from_json(src: &str) -> Result<Self, ConfigError> {
		Ok(serde_json::from_str(src)?)
	}

	/// Parses a JSON document, falling back to defaults when it is invalid.
	pub fn from_json_or_default(src: &str) -> Self {
		Self::from_json(src).unwrap_or_else(|err| {
			warn!("{err}; using default dashboard config");
			Self::default()
		})
	}
}
