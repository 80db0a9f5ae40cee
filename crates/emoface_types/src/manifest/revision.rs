//! Catalog manifest revisions and build-time selection.

use std::fmt::Formatter;

use serde::Serialize;

use crate::error::ManifestError;

/// Historical layouts of the face catalog.
///
/// Exactly one revision is active in a build, chosen by the `rev1`, `rev2` and
/// `rev3` cargo features. When several are enabled the oldest one wins, so an
/// explicit `--features rev1` overrides the default `rev3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u32)]
pub enum ManifestRevision {
	/// Neutral, happy and sad faces only
	Initial = 1,
	/// Stunned face appended to the emotion list
	Stunned = 2,
	/// Idle animations, logo, and stunned/thinking singletons
	Full = 3,
}

impl ManifestRevision {
	/// All revisions, oldest first
	pub const ALL: [ManifestRevision; 3] = [Self::Initial, Self::Stunned, Self::Full];

	/// The revision compiled into this build
	pub const fn active() -> Self {
		if cfg!(feature = "rev1") {
			Self::Initial
		} else if cfg!(feature = "rev2") {
			Self::Stunned
		} else {
			Self::Full
		}
	}

	/// Whether this is the revision compiled into this build
	pub fn is_active(self) -> bool {
		self == Self::active()
	}

	/// Converts a revision number to `ManifestRevision`
	pub fn from_u32(value: u32) -> Result<Self, ManifestError> {
		match value {
			1 => Ok(Self::Initial),
			2 => Ok(Self::Stunned),
			3 => Ok(Self::Full),
			_ => Err(ManifestError::UnknownRevision(value)),
		}
	}

	/// Revision number
	pub const fn to_u32(self) -> u32 {
		self as u32
	}

	/// Embedded TOML source of this revision
	pub const fn source(self) -> &'static str {
		match self {
			Self::Initial => include_str!("../../manifests/r1.toml"),
			Self::Stunned => include_str!("../../manifests/r2.toml"),
			Self::Full => include_str!("../../manifests/r3.toml"),
		}
	}
}

impl Default for ManifestRevision {
	fn default() -> Self {
		Self::active()
	}
}

impl std::fmt::Display for ManifestRevision {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Initial => write!(f, "r1 (initial)"),
			Self::Stunned => write!(f, "r2 (stunned)"),
			Self::Full => write!(f, "r3 (full)"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_exactly_one_revision_active() {
		let active: Vec<_> = ManifestRevision::ALL.iter().filter(|rev| rev.is_active()).collect();
		assert_eq!(active.len(), 1);
		assert_eq!(*active[0], ManifestRevision::active());
	}

	#[test]
	#[cfg(all(feature = "rev1", feature = "rev3"))]
	fn test_oldest_enabled_revision_wins() {
		assert_eq!(ManifestRevision::active(), ManifestRevision::Initial);
		assert!(!ManifestRevision::Full.is_active());
	}

	#[test]
	#[cfg(all(feature = "rev2", feature = "rev3", not(feature = "rev1")))]
	fn test_stunned_revision_beats_default() {
		assert_eq!(ManifestRevision::active(), ManifestRevision::Stunned);
	}

	#[test]
	#[cfg(not(any(feature = "rev1", feature = "rev2")))]
	fn test_default_revision_is_full() {
		assert_eq!(ManifestRevision::active(), ManifestRevision::Full);
	}

	#[test]
	fn test_revision_numbers() {
		for rev in ManifestRevision::ALL {
			assert_eq!(ManifestRevision::from_u32(rev.to_u32()).unwrap(), rev);
		}
		assert!(matches!(ManifestRevision::from_u32(0), Err(ManifestError::UnknownRevision(0))));
		assert!(matches!(ManifestRevision::from_u32(4), Err(ManifestError::UnknownRevision(4))));
	}
}
