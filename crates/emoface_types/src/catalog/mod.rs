//! The face resource catalog.
//!
//! A [`Catalog`] maps emotion and animation identifiers to clips. It is built once
//! from a [`Manifest`] and an [`AssetSource`], resolving every referenced asset up
//! front, and is read-only afterwards. Each distinct asset is loaded once and
//! shared, so an asset used in two roles is the same object.
//!
//! # Examples
//!
//! ```no_run
//! use emoface_types::catalog::{Catalog, DirectorySource};
//! use emoface_types::emotion::Emotion;
//! use emoface_types::manifest::Manifest;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::build(Manifest::active()?, &DirectorySource::new("assets"))?;
//! let catalog = catalog.install()?;
//!
//! if let Some(clip) = catalog.emotion(Emotion::Happy) {
//!     println!("happy face: {} frames", clip.num_frames());
//! }
//! # Ok(())
//! # }
//! ```

mod source;

use std::{
	collections::{BTreeMap, HashMap},
	sync::{Arc, OnceLock},
};

use log::{debug, info, warn};

use crate::{
	clip::Clip,
	emotion::{EMOTION_NEUTRAL, Emotion},
	error::CatalogError,
	manifest::Manifest,
};

pub use self::source::{AssetSource, DirectorySource, MemorySource};

static INSTALLED: OnceLock<Catalog> = OnceLock::new();

/// Immutable registry of face clips
#[derive(Debug, Clone)]
pub struct Catalog {
	manifest: Manifest,
	emotions: Vec<Arc<Clip>>,
	animations: Vec<Arc<Clip>>,
	logo: Option<Arc<Clip>>,
	stunned: Option<Arc<Clip>>,
	thinking: Option<Arc<Clip>>,
}

/// Group of differently named assets with identical frame data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
	/// Content fingerprint shared by the assets
	pub fingerprint: String,
	/// Asset names, sorted
	pub assets: Vec<String>,
}

impl Catalog {
	/// Builds a catalog, resolving every asset the manifest references
	///
	/// # Errors
	/// Fails on the first asset the source cannot provide.
	pub fn build(manifest: Manifest, source: &impl AssetSource) -> Result<Self, CatalogError> {
		let mut resolved: HashMap<String, Arc<Clip>> = HashMap::new();
		for name in manifest.asset_names() {
			let clip = source.load(name)?;
			debug!("Resolved asset '{}': {}", name, clip);
			resolved.insert(name.to_string(), Arc::new(clip));
		}

		let lookup = |name: &str| -> Result<Arc<Clip>, CatalogError> {
			resolved.get(name).cloned().ok_or_else(|| CatalogError::MissingAsset(name.to_string()))
		};

		let emotions = manifest
			.emotions()
			.iter()
			.map(|entry| lookup(&entry.asset))
			.collect::<Result<Vec<_>, _>>()?;
		let animations = manifest
			.animations()
			.iter()
			.map(|name| lookup(name))
			.collect::<Result<Vec<_>, _>>()?;
		let logo = manifest.logo().map(lookup).transpose()?;
		let stunned = manifest.stunned().map(lookup).transpose()?;
		let thinking = manifest.thinking().map(lookup).transpose()?;

		info!(
			"Built catalog {} with {} emotions, {} animations, {} distinct assets",
			manifest.revision(),
			emotions.len(),
			animations.len(),
			resolved.len()
		);

		Ok(Self {
			manifest,
			emotions,
			animations,
			logo,
			stunned,
			thinking,
		})
	}

	/// Makes this the process-wide catalog
	///
	/// # Errors
	/// [`CatalogError::AlreadyInstalled`] if a catalog was installed before; the
	/// existing one is kept.
	pub fn install(self) -> Result<&'static Catalog, CatalogError> {
		let mut fresh = false;
		let catalog = INSTALLED.get_or_init(|| {
			fresh = true;
			self
		});

		if !fresh {
			return Err(CatalogError::AlreadyInstalled);
		}
		info!("Installed catalog {}", catalog.manifest.revision());
		Ok(catalog)
	}

	/// The process-wide catalog, if one was installed
	pub fn global() -> Option<&'static Catalog> {
		INSTALLED.get()
	}

	/// Manifest the catalog was built from
	pub fn manifest(&self) -> &Manifest {
		&self.manifest
	}

	/// Clip for an emotion
	///
	/// Emotions inside the emotion list resolve by index. `Stunned` falls back to
	/// the stunned singleton when the list does not hold it.
	pub fn emotion(&self, emotion: Emotion) -> Option<&Arc<Clip>> {
		match self.emotions.get(emotion.index()) {
			Some(clip) => Some(clip),
			None if emotion == Emotion::Stunned => self.stunned.as_ref(),
			None => None,
		}
	}

	/// Clip for a raw `EMOTION_*` constant
	pub fn emotion_at(&self, constant: u8) -> Option<&Arc<Clip>> {
		Emotion::from_u8(constant).ok().and_then(|emotion| self.emotion(emotion))
	}

	/// Clip for an emotion, or the neutral clip when the emotion has none
	pub fn emotion_or_neutral(&self, emotion: Emotion) -> &Arc<Clip> {
		match self.emotion(emotion) {
			Some(clip) => clip,
			None => {
				debug!("No clip for {}, showing neutral", emotion);
				self.neutral()
			}
		}
	}

	/// The neutral clip, always present
	pub fn neutral(&self) -> &Arc<Clip> {
		// Manifest validation guarantees a non-empty list starting with neutral
		&self.emotions[EMOTION_NEUTRAL as usize]
	}

	/// Whether `emotion` resolves to a clip in this catalog
	pub fn defines(&self, emotion: Emotion) -> bool {
		self.emotion(emotion).is_some()
	}

	/// The emotion list, indexed by emotion constant
	pub fn emotion_list(&self) -> &[Arc<Clip>] {
		&self.emotions
	}

	/// Idle animation by position
	pub fn animation(&self, index: usize) -> Option<&Arc<Clip>> {
		self.animations.get(index)
	}

	/// All idle animations
	pub fn animations(&self) -> &[Arc<Clip>] {
		&self.animations
	}

	/// Number of idle animations
	pub fn animation_count(&self) -> usize {
		self.animations.len()
	}

	/// Logo clip
	pub fn logo(&self) -> Option<&Arc<Clip>> {
		self.logo.as_ref()
	}

	/// Stunned singleton
	pub fn stunned(&self) -> Option<&Arc<Clip>> {
		self.stunned.as_ref()
	}

	/// Thinking singleton
	pub fn thinking(&self) -> Option<&Arc<Clip>> {
		self.thinking.as_ref()
	}

	/// Every distinct clip in the catalog, in manifest first-use order
	pub fn clips(&self) -> Vec<&Arc<Clip>> {
		let mut clips: Vec<&Arc<Clip>> = Vec::new();
		let all = self
			.emotions
			.iter()
			.chain(self.animations.iter())
			.chain(self.logo.iter())
			.chain(self.stunned.iter())
			.chain(self.thinking.iter());
		for clip in all {
			if !clips.iter().any(|seen| Arc::ptr_eq(seen, clip)) {
				clips.push(clip);
			}
		}
		clips
	}

	/// Finds differently named assets whose frame data is identical
	///
	/// Reusing one asset in several roles is fine; two names carrying the same
	/// data usually means a copy-paste slip in the asset directory.
	pub fn audit(&self) -> Vec<Alias> {
		let mut by_fingerprint: BTreeMap<String, Vec<String>> = BTreeMap::new();
		for clip in self.clips() {
			by_fingerprint.entry(clip.fingerprint()).or_default().push(clip.name().to_string());
		}

		by_fingerprint
			.into_iter()
			.filter(|(_, assets)| assets.len() > 1)
			.map(|(fingerprint, mut assets)| {
				assets.sort();
				warn!("Assets {:?} share identical frame data ({})", assets, fingerprint);
				Alias {
					fingerprint,
					assets,
				}
			})
			.collect()
	}
}
