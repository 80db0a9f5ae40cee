//! Versioned asset manifests for the face catalog.
//!
//! The firmware header that wires emotions to clips went through three revisions.
//! Each one is kept as an embedded TOML manifest; the build picks one of them as
//! the active manifest (see [`ManifestRevision::active`]).
//!
//! # Manifest Format
//!
//! ```toml
//! revision = 3
//! label = "full"
//! list_symbol = "emotionList"   # firmware name of the emotion list
//! logo = "ptit"                 # optional singletons
//! stunned = "hoamat"
//! thinking = "suynghi2"
//! animations = ["buonngu", "nhaymat"]
//!
//! [[emotions]]                  # ordered by emotion constant, starting at 0
//! emotion = "neutral"
//! asset = "binhthuong"
//! ```
//!
//! # Rules
//!
//! - Emotion entry `i` must carry the emotion whose constant is `i`, so the
//!   `EMOTION_*` constants stay valid indices into the list.
//! - An asset appears at most once inside one list. Reusing an asset across roles
//!   (the stunned face in the list in r2, as a singleton in r3) is allowed.
//! - Asset names are C identifiers.

mod revision;

use std::path::Path;

use config::{Config, File, FileFormat};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{emotion::Emotion, error::ManifestError, symbol::is_c_identifier};

pub use self::revision::ManifestRevision;

/// Name of the animation list in firmware headers
pub const ANIMATION_LIST_SYMBOL: &str = "animationList";

/// Name of the logo singleton in firmware headers
pub const LOGO_SYMBOL: &str = "logoPTIT";

/// Name of the stunned singleton in firmware headers
pub const STUNNED_SYMBOL: &str = "stunnedEmotion";

/// Name of the thinking singleton in firmware headers
pub const THINKING_SYMBOL: &str = "thinkingEmotion";

#[derive(Debug, Deserialize)]
struct ManifestDoc {
	revision: u32,
	label: String,
	list_symbol: String,
	#[serde(default)]
	emotions: Vec<EmotionEntryDoc>,
	#[serde(default)]
	animations: Vec<String>,
	#[serde(default)]
	logo: Option<String>,
	#[serde(default)]
	stunned: Option<String>,
	#[serde(default)]
	thinking: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EmotionEntryDoc {
	emotion: String,
	asset: String,
}

/// One entry of the emotion list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EmotionEntry {
	/// Emotion whose constant indexes this entry
	pub emotion: Emotion,
	/// Asset shown for the emotion
	pub asset: String,
}

/// A validated catalog manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
	revision: ManifestRevision,
	label: String,
	list_symbol: String,
	emotions: Vec<EmotionEntry>,
	animations: Vec<String>,
	logo: Option<String>,
	stunned: Option<String>,
	thinking: Option<String>,
}

impl Manifest {
	/// Loads the manifest of the revision compiled into this build
	pub fn active() -> Result<Self, ManifestError> {
		Self::embedded(ManifestRevision::active())
	}

	/// Loads the embedded manifest of a revision
	pub fn embedded(revision: ManifestRevision) -> Result<Self, ManifestError> {
		Self::from_toml_str(revision.source())
	}

	/// Parses a manifest from TOML text
	pub fn from_toml_str(text: &str) -> Result<Self, ManifestError> {
		Self::from_config(Config::builder().add_source(File::from_str(text, FileFormat::Toml)))
	}

	/// Loads a manifest file; the format follows the extension (toml, json, yaml)
	pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
		let path = path.as_ref();
		debug!("Loading manifest from {}", path.display());
		Self::from_config(Config::builder().add_source(File::from(path)))
	}

	fn from_config(
		builder: config::ConfigBuilder<config::builder::DefaultState>,
	) -> Result<Self, ManifestError> {
		let doc: ManifestDoc = builder.build()?.try_deserialize()?;
		Self::try_from(doc)
	}

	/// Revision this manifest describes
	pub fn revision(&self) -> ManifestRevision {
		self.revision
	}

	/// Short human-readable label
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Firmware symbol of the emotion list (`videoList` or `emotionList`)
	pub fn list_symbol(&self) -> &str {
		&self.list_symbol
	}

	/// Emotion list entries, indexed by emotion constant
	pub fn emotions(&self) -> &[EmotionEntry] {
		&self.emotions
	}

	/// Idle animation asset names
	pub fn animations(&self) -> &[String] {
		&self.animations
	}

	/// Logo asset name
	pub fn logo(&self) -> Option<&str> {
		self.logo.as_deref()
	}

	/// Stunned singleton asset name
	pub fn stunned(&self) -> Option<&str> {
		self.stunned.as_deref()
	}

	/// Thinking singleton asset name
	pub fn thinking(&self) -> Option<&str> {
		self.thinking.as_deref()
	}

	/// Asset stored in the emotion list for an emotion
	pub fn emotion_asset(&self, emotion: Emotion) -> Option<&str> {
		self.emotions.get(emotion.index()).map(|entry| entry.asset.as_str())
	}

	/// Emotions that get an `EMOTION_*` constant in this revision
	///
	/// These are the emotions of the list plus `Stunned` when a stunned singleton
	/// exists, in constant order.
	pub fn defined_emotions(&self) -> Vec<Emotion> {
		let mut defined: Vec<Emotion> = self.emotions.iter().map(|entry| entry.emotion).collect();
		if self.stunned.is_some() && !defined.contains(&Emotion::Stunned) {
			defined.push(Emotion::Stunned);
		}
		defined.sort();
		defined
	}

	/// Every referenced asset name, deduplicated, in first-use order
	///
	/// Order: emotion list, animations, logo, stunned, thinking.
	pub fn asset_names(&self) -> Vec<&str> {
		let mut names: Vec<&str> = Vec::new();
		let all = self
			.emotions
			.iter()
			.map(|entry| entry.asset.as_str())
			.chain(self.animations.iter().map(String::as_str))
			.chain(self.logo.as_deref())
			.chain(self.stunned.as_deref())
			.chain(self.thinking.as_deref());
		for name in all {
			if !names.contains(&name) {
				names.push(name);
			}
		}
		names
	}
}

impl TryFrom<ManifestDoc> for Manifest {
	type Error = ManifestError;

	fn try_from(doc: ManifestDoc) -> Result<Self, Self::Error> {
		let revision = ManifestRevision::from_u32(doc.revision)?;

		if doc.emotions.is_empty() {
			return Err(ManifestError::EmptyEmotionList);
		}

		let mut emotions = Vec::with_capacity(doc.emotions.len());
		for (position, entry) in doc.emotions.into_iter().enumerate() {
			let emotion: Emotion = entry.emotion.parse()?;
			if emotion.index() != position {
				return Err(ManifestError::MisplacedEmotion {
					emotion,
					expected: emotion.index(),
					actual: position,
				});
			}
			emotions.push(EmotionEntry {
				emotion,
				asset: entry.asset,
			});
		}

		let manifest = Self {
			revision,
			label: doc.label,
			list_symbol: doc.list_symbol,
			emotions,
			animations: doc.animations,
			logo: doc.logo,
			stunned: doc.stunned,
			thinking: doc.thinking,
		};

		if !is_c_identifier(&manifest.list_symbol) {
			return Err(ManifestError::InvalidAssetName(manifest.list_symbol));
		}
		for name in manifest.asset_names() {
			if !is_c_identifier(name) {
				return Err(ManifestError::InvalidAssetName(name.to_string()));
			}
		}

		check_unique(manifest.emotions.iter().map(|entry| entry.asset.as_str()), "the emotion list")?;
		check_unique(manifest.animations.iter().map(String::as_str), ANIMATION_LIST_SYMBOL)?;

		Ok(manifest)
	}
}

fn check_unique<'a>(
	names: impl Iterator<Item = &'a str>,
	list: &'static str,
) -> Result<(), ManifestError> {
	let mut seen: Vec<&str> = Vec::new();
	for name in names {
		if seen.contains(&name) {
			return Err(ManifestError::DuplicateAsset {
				asset: name.to_string(),
				list,
			});
		}
		seen.push(name);
	}
	Ok(())
}
