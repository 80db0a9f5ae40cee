//! Error types for face assets, manifests and the catalog.

use thiserror::Error;

use crate::emotion::Emotion;

/// Errors that can occur when converting raw values into emotions
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmotionError {
	/// Integer constant outside the known emotion range
	#[error("Invalid emotion constant: {0}")]
	InvalidConstant(u8),

	/// Unknown emotion name
	#[error("Unknown emotion name: '{0}'")]
	UnknownName(String),
}

/// Errors that can occur when parsing, building or writing clips
#[derive(Debug, Error)]
pub enum ClipError {
	/// Not enough data to parse
	#[error("Insufficient data: expected {expected} bytes, got {actual} bytes")]
	InsufficientData {
		/// Expected number of bytes
		expected: usize,
		/// Actual number of bytes
		actual: usize,
	},

	/// Invalid magic number
	#[error("Invalid magic number: {0:02X?}")]
	InvalidMagic([u8; 4]),

	/// Container version this crate does not understand
	#[error("Unsupported clip version {0}")]
	UnsupportedVersion(u16),

	/// A clip must hold at least one frame
	#[error("Clip '{0}' has no frames")]
	Empty(String),

	/// Frame larger than a `uint16_t` size entry can describe
	#[error("Frame {index} is {size} bytes, maximum is {max}")]
	FrameTooLarge {
		/// Frame index
		index: usize,
		/// Frame size in bytes
		size: usize,
		/// Largest representable size
		max: usize,
	},

	/// More frames than the frame counter can describe
	#[error("Clip has {count} frames, maximum is {max}")]
	TooManyFrames {
		/// Number of frames
		count: usize,
		/// Largest representable frame count
		max: usize,
	},

	/// Frame data does not start with a JPEG SOI marker
	#[error("Frame {index} is not a JPEG image")]
	NotJpeg {
		/// Frame index
		index: usize,
	},

	/// Asset name cannot be used as a firmware symbol
	#[error("Invalid asset name '{0}': must be a C identifier")]
	InvalidName(String),

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

/// Errors that can occur when loading or validating a manifest
#[derive(Debug, Error)]
pub enum ManifestError {
	/// Revision number outside the known range
	#[error("Unknown manifest revision {0}")]
	UnknownRevision(u32),

	/// Emotion list entry stored at the wrong index
	#[error("Emotion {emotion} must be at index {expected}, found at {actual}")]
	MisplacedEmotion {
		/// Emotion of the entry
		emotion: Emotion,
		/// Index the emotion constant requires
		expected: usize,
		/// Position of the entry in the list
		actual: usize,
	},

	/// Asset referenced twice within one list
	#[error("Asset '{asset}' appears more than once in {list}")]
	DuplicateAsset {
		/// Asset name
		asset: String,
		/// List name
		list: &'static str,
	},

	/// Manifest defines no emotion entries
	#[error("Manifest has an empty emotion list")]
	EmptyEmotionList,

	/// Asset name cannot be used as a firmware symbol
	#[error("Invalid asset name '{0}': must be a C identifier")]
	InvalidAssetName(String),

	/// Invalid emotion name in an entry
	#[error(transparent)]
	Emotion(#[from] EmotionError),

	/// Underlying configuration parser error
	#[error(transparent)]
	Config(#[from] config::ConfigError),
}

/// Errors that can occur when building or installing a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
	/// Referenced asset not provided by the asset source
	#[error("Asset '{0}' not found")]
	MissingAsset(String),

	/// Asset exists but failed to load
	#[error("Asset '{name}' failed to load: {source}")]
	AssetLoad {
		/// Asset name
		name: String,
		/// Underlying error
		#[source]
		source: Box<dyn std::error::Error + Send + Sync>,
	},

	/// The process-wide catalog was already installed
	#[error("A catalog is already installed")]
	AlreadyInstalled,

	/// Invalid manifest
	#[error(transparent)]
	Manifest(#[from] ManifestError),
}

/// Errors that can occur when baking GIF animations into clips
#[derive(Debug, Error)]
pub enum BakeError {
	/// GIF decoding or JPEG encoding failed
	#[error(transparent)]
	Image(#[from] image::ImageError),

	/// Resulting clip is invalid
	#[error(transparent)]
	Clip(#[from] ClipError),

	/// GIF contained no frames
	#[error("Animation '{0}' contains no frames")]
	NoFrames(String),

	/// Invalid bake options
	#[error("Invalid bake options: {0}")]
	InvalidOptions(String),

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

/// Errors that can occur when loading the runtime configuration
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Underlying configuration source error
	#[error(transparent)]
	Source(#[from] config::ConfigError),

	/// A value is outside its accepted range
	#[error("Invalid value for '{key}': {message}")]
	InvalidValue {
		/// Configuration key
		key: &'static str,
		/// Description of the problem
		message: String,
	},
}
