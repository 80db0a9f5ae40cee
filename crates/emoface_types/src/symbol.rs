//! Firmware symbol naming rules.

use std::sync::LazyLock;

use regex::Regex;

static C_IDENTIFIER: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern is valid"));

/// Checks whether `name` can be used verbatim as a C identifier
///
/// Asset names become array and struct names in generated firmware headers.
pub fn is_c_identifier(name: &str) -> bool {
	C_IDENTIFIER.is_match(name)
}
