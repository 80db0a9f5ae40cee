//! Asset sources the catalog resolves clip names against.

use std::{
	collections::HashMap,
	path::{Path, PathBuf},
};

use log::debug;

use crate::{
	bake::{self, BakeOptions},
	clip::{Clip, constants::EXTENSION},
	error::CatalogError,
};

/// Something that can produce a clip for an asset name
pub trait AssetSource {
	/// Loads the clip named `name`
	///
	/// # Errors
	/// [`CatalogError::MissingAsset`] when the source has no such asset, or
	/// [`CatalogError::AssetLoad`] when it exists but cannot be loaded.
	fn load(&self, name: &str) -> Result<Clip, CatalogError>;
}

/// In-memory asset source keyed by clip name
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
	clips: HashMap<String, Clip>,
}

impl MemorySource {
	/// Creates an empty source
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a clip under its own name, replacing any previous one
	pub fn insert(&mut self, clip: Clip) {
		self.clips.insert(clip.name().to_string(), clip);
	}

	/// Number of clips held
	pub fn len(&self) -> usize {
		self.clips.len()
	}

	/// Whether the source holds no clips
	pub fn is_empty(&self) -> bool {
		self.clips.is_empty()
	}
}

impl FromIterator<Clip> for MemorySource {
	fn from_iter<T: IntoIterator<Item = Clip>>(iter: T) -> Self {
		let mut source = Self::new();
		for clip in iter {
			source.insert(clip);
		}
		source
	}
}

impl AssetSource for MemorySource {
	fn load(&self, name: &str) -> Result<Clip, CatalogError> {
		self.clips.get(name).cloned().ok_or_else(|| CatalogError::MissingAsset(name.to_string()))
	}
}

/// Directory of assets on disk.
///
/// For an asset `name` the source loads `<root>/<name>.fclp`; when no packed clip
/// exists it falls back to baking `<root>/<name>.gif`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
	root: PathBuf,
	bake: BakeOptions,
}

impl DirectorySource {
	/// Creates a source rooted at `root` with default bake options
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self {
			root: root.into(),
			bake: BakeOptions::default(),
		}
	}

	/// Sets the options used when baking GIF fallbacks
	pub fn with_bake_options(mut self, options: BakeOptions) -> Self {
		self.bake = options;
		self
	}

	/// Root directory
	pub fn root(&self) -> &Path {
		&self.root
	}

	fn load_error(name: &str, source: impl std::error::Error + Send + Sync + 'static) -> CatalogError {
		CatalogError::AssetLoad {
			name: name.to_string(),
			source: Box::new(source),
		}
	}
}

impl AssetSource for DirectorySource {
	fn load(&self, name: &str) -> Result<Clip, CatalogError> {
		let packed = self.root.join(format!("{}.{}", name, EXTENSION));
		if packed.is_file() {
			debug!("Loading packed clip {}", packed.display());
			return Clip::open(&packed).map_err(|e| Self::load_error(name, e));
		}

		let gif = self.root.join(format!("{}.gif", name));
		if gif.is_file() {
			debug!("Baking {} on load", gif.display());
			return bake::bake_gif_file(&gif, &self.bake).map_err(|e| Self::load_error(name, e));
		}

		Err(CatalogError::MissingAsset(name.to_string()))
	}
}
