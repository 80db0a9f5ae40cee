//! This module is separated into its own crate so the `emoface` facade stays thin, and should not be used directly.

/// `use emoface::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export emoface_types for convenience
pub use emoface_types;

// Re-export commonly used types at crate root
pub use emoface_types::{
	catalog::Catalog,
	clip::Clip,
	emotion::Emotion,
	manifest::{Manifest, ManifestRevision},
};
