//! Keyword classification of domain fragments into canonical categories.
//!
//! Rules are checked in order against the lowercased fragment and the first
//! rule with a matching keyword wins. Fragments that match nothing keep their
//! trimmed text as the category, which produces long-tail domains next to the
//! curated ones.
//!
//! Every curated label classifies to itself. `Sprijin logistic` gets there
//! through the fallback, since its own keyword is the longer
//! `sprijin tehnic logistic`.

/// One classification rule: any keyword hit maps to `label`.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
	/// Lowercase substrings, any of which selects this rule.
	pub keywords: &'static [&'static str],
	/// Canonical category label.
	pub label: &'static str,
}

/// Curated rules in priority order.
pub const RULES: &[Rule] = &[
	Rule {
		keywords: &["dezastre chimice"],
		label: "Dezastre chimice",
	},
	Rule {
		keywords: &["smart city", "it & c", "it "],
		label: "IT & C",
	},
	Rule {
		keywords: &["căutare", "caini de salvare", "câini de salvare"],
		label: "Căutare-salvare",
	},
	Rule {
		keywords: &["restabilirea stării de normalitate"],
		label: "Restabilirea stării de normalitate",
	},
	Rule {
		keywords: &["servicii sociale"],
		label: "Servicii sociale",
	},
	Rule {
		keywords: &["sprijin tehnic logistic"],
		label: "Sprijin logistic",
	},
	Rule {
		keywords: &["răspuns", "traum", "psiholog"],
		label: "Răspuns",
	},
	Rule {
		keywords: &["prevenire"],
		label: "Prevenire",
	},
	Rule {
		keywords: &["pregătire", "practică studenți", "training"],
		label: "Pregătire",
	},
	Rule {
		keywords: &["cercetare"],
		label: "Cercetare",
	},
	Rule {
		keywords: &["intervenție"],
		label: "Intervenție",
	},
];

/// Returns the canonical category for a domain fragment.
pub fn classify(fragment: &str) -> String {
	curated_label(fragment)
		.map(str::to_owned)
		.unwrap_or_else(|| fragment.trim().to_owned())
}

/// Returns the curated label matching `fragment`, if any rule fires.
pub fn curated_label(fragment: &str) -> Option<&'static str> {
	let lowered = fragment.to_lowercase();
	RULES
		.iter()
		.find(|rule| rule.keywords.iter().any(|kw| lowered.contains(kw)))
		.map(|rule| rule.label)
}
