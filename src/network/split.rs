//! Splitting of free-text domain cells into fragments.

/// Characters treated as equivalent to the `/` separator.
const ALT_SEPARATORS: [char; 3] = ['\n', '|', '\\'];

/// Placeholder used in the source sheet for "no domain".
const EMPTY_PLACEHOLDER: &str = "-";

/// Splits a raw domain cell into trimmed, non-empty fragments.
///
/// Newlines, pipes and backslashes act like `/`. Empty and whitespace-only
/// pieces and the `-` placeholder are dropped. `None` yields nothing.
pub fn split_domains(raw: Option<&str>) -> Vec<&str> {
	let Some(raw) = raw else {
		return Vec::new();
	};
	raw.split(|c: char| c == '/' || ALT_SEPARATORS.contains(&c))
		.map(str::trim)
		.filter(|piece| !piece.is_empty() && *piece != EMPTY_PLACEHOLDER)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_split_mixed_separators() {
		assert_eq!(
			split_domains(Some("Prevenire / Cercetare|Training\nIT & C\\Răspuns")),
			vec!["Prevenire", "Cercetare", "Training", "IT & C", "Răspuns"]
		);
	}

	#[test]
	fn test_split_empty_inputs() {
		assert!(split_domains(None).is_empty());
		assert!(split_domains(Some("")).is_empty());
		assert!(split_domains(Some("-")).is_empty());
		assert!(split_domains(Some("  -  ")).is_empty());
		assert!(split_domains(Some(" / \n / | ")).is_empty());
	}

	#[test]
	fn test_split_keeps_inner_dash() {
		assert_eq!(
			split_domains(Some("Căutare-salvare/-/x")),
			vec!["Căutare-salvare", "x"]
		);
	}

	#[test]
	fn test_split_crlf() {
		assert_eq!(split_domains(Some("a\r\nb")), vec!["a", "b"]);
	}
}
