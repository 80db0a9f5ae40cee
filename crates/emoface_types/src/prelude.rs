//! Prelude module for `emoface_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```no_run
//! use emoface_types::prelude::*;
//!
//! let manifest = Manifest::active().unwrap();
//! assert!(manifest.emotion_asset(Emotion::Neutral).is_some());
//! ```

// Emotions
#[doc(inline)]
pub use crate::emotion::{
	EMOTION_COUNT, EMOTION_HAPPY, EMOTION_NEUTRAL, EMOTION_SAD, EMOTION_STUNNED, Emotion,
};

// Clips
#[doc(inline)]
pub use crate::clip::{Clip, FrameIter};

// Manifests and catalog
#[doc(inline)]
pub use crate::{
	catalog::{Alias, AssetSource, Catalog, DirectorySource, MemorySource},
	manifest::{EmotionEntry, Manifest, ManifestRevision},
};

// Runtime behavior
#[doc(inline)]
pub use crate::{
	cue::{CueClassifier, CueKeywords},
	face::{FaceMode, FaceSelector},
	signal::{ControlMessage, DeviceState, FaceState},
};

// Tooling
#[doc(inline)]
pub use crate::{
	bake::{BakeOptions, BakeOutcome, BakedClip, bake_dir, bake_gif, bake_gif_file, blank_frame},
	header::{HeaderOptions, write_catalog_header, write_clip_header},
	settings::FaceConfig,
};

// Errors
#[doc(inline)]
pub use crate::error::{BakeError, CatalogError, ClipError, ConfigError, EmotionError, ManifestError};
