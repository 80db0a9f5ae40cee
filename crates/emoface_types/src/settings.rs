//! Runtime configuration.
//!
//! [`FaceConfig`] is layered with the `config` crate: built-in defaults, then an
//! optional file (`toml`, `json` or `yaml` by extension), then environment
//! variables prefixed with `EMOFACE_`. Nested keys use `__` in variable names,
//! e.g. `EMOFACE_BAKE__JPEG_QUALITY=90`. Cue keyword lists read from the
//! environment are comma separated.

use std::{
	path::{Path, PathBuf},
	time::Duration,
};

use config::{Config, Environment, File, FileFormat};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
	bake::{self, BakeOptions},
	catalog::DirectorySource,
	cue::{CueClassifier, CueKeywords},
	error::{BakeError, ConfigError, ManifestError},
	header::HeaderOptions,
	manifest::Manifest,
};

/// Prefix of environment overrides
pub const ENV_PREFIX: &str = "EMOFACE";

/// Separator of nested keys in environment variable names
pub const ENV_SEPARATOR: &str = "__";

/// Default frame delay in milliseconds
pub const DEFAULT_FRAME_DELAY_MS: u32 = 50;

/// Default display size
pub const DEFAULT_BLANK_SIZE: (u16, u16) = (240, 240);

/// Face configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceConfig {
	/// Directory holding packed clips or GIF sources
	pub asset_dir: PathBuf,
	/// External manifest replacing the embedded one
	pub manifest_path: Option<PathBuf>,
	/// Delay between frames
	pub frame_delay_ms: u32,
	/// Size of the blank screen `(width, height)`
	pub blank_size: (u16, u16),
	/// GIF baking
	pub bake: BakeOptions,
	/// Catalog header output
	pub header: HeaderOptions,
	/// Keyword cues
	pub cues: CueKeywords,
}

impl Default for FaceConfig {
	fn default() -> Self {
		Self {
			asset_dir: PathBuf::from("resource/emoji"),
			manifest_path: None,
			frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
			blank_size: DEFAULT_BLANK_SIZE,
			bake: BakeOptions::default(),
			header: HeaderOptions::default(),
			cues: CueKeywords::default(),
		}
	}
}

impl FaceConfig {
	/// Loads defaults, then `path` when given, then `EMOFACE_*` variables
	pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
		Self::load_with(path, environment())
	}

	/// Loads defaults overridden by TOML text, ignoring the environment
	pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
		let builder = Config::builder()
			.add_source(Config::try_from(&Self::default())?)
			.add_source(File::from_str(text, FileFormat::Toml));
		Self::finish(builder.build()?)
	}

	fn load_with(path: Option<&Path>, env: Environment) -> Result<Self, ConfigError> {
		let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);
		if let Some(path) = path {
			debug!("Reading configuration from {}", path.display());
			builder = builder.add_source(File::from(path));
		}
		Self::finish(builder.add_source(env).build()?)
	}

	fn finish(config: Config) -> Result<Self, ConfigError> {
		let config: Self = config.try_deserialize()?;
		config.validate()?;
		Ok(config)
	}

	/// Checks value ranges
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.frame_delay_ms == 0 {
			return Err(ConfigError::InvalidValue {
				key: "frame_delay_ms",
				message: "must be at least 1".to_string(),
			});
		}
		if self.blank_size.0 == 0 || self.blank_size.1 == 0 {
			return Err(ConfigError::InvalidValue {
				key: "blank_size",
				message: format!("{}x{} has a zero side", self.blank_size.0, self.blank_size.1),
			});
		}
		self.bake.validate().map_err(|e| ConfigError::InvalidValue {
			key: "bake",
			message: e.to_string(),
		})
	}

	/// Delay between frames
	pub fn frame_delay(&self) -> Duration {
		Duration::from_millis(u64::from(self.frame_delay_ms))
	}

	/// The external manifest when configured, otherwise the active embedded one
	pub fn manifest(&self) -> Result<Manifest, ManifestError> {
		match &self.manifest_path {
			Some(path) => Manifest::load(path),
			None => Manifest::active(),
		}
	}

	/// Asset source over `asset_dir` using the configured bake options
	pub fn asset_source(&self) -> DirectorySource {
		DirectorySource::new(&self.asset_dir).with_bake_options(self.bake)
	}

	/// Black frame of `blank_size` at the configured JPEG quality
	pub fn blank_frame(&self) -> Result<Vec<u8>, BakeError> {
		let (width, height) = self.blank_size;
		bake::blank_frame(u32::from(width), u32::from(height), self.bake.jpeg_quality)
	}

	/// Classifier over the configured keyword sets
	pub fn cue_classifier(&self) -> CueClassifier {
		CueClassifier::new(self.cues.clone())
	}
}

fn environment() -> Environment {
	Environment::with_prefix(ENV_PREFIX)
		.prefix_separator("_")
		.separator(ENV_SEPARATOR)
		.try_parsing(true)
		.list_separator(",")
		.with_list_parse_key("cues.happy")
		.with_list_parse_key("cues.sad")
		.with_list_parse_key("cues.neutral")
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::manifest::ManifestRevision;

	fn env_from(vars: &[(&str, &str)]) -> Environment {
		let map: config::Map<String, String> =
			vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
		environment().source(Some(map))
	}

	#[test]
	fn test_defaults() {
		let config = FaceConfig::load_with(None, env_from(&[])).unwrap();

		assert_eq!(config, FaceConfig::default());
		assert_eq!(config.frame_delay(), Duration::from_millis(50));
		assert_eq!(config.blank_size, (240, 240));
		assert_eq!(config.bake.jpeg_quality, 80);
		assert_eq!(config.header.decoder_include, "TJpg_Decoder.h");
	}

	#[test]
	fn test_toml_overrides() {
		let config = FaceConfig::from_toml_str(
			r#"
asset_dir = "clips"
frame_delay_ms = 40

[bake]
max_frames = 20
resize = [120, 120]

[cues]
happy = ["yay"]
"#,
		)
		.unwrap();

		assert_eq!(config.asset_dir, PathBuf::from("clips"));
		assert_eq!(config.frame_delay_ms, 40);
		assert_eq!(config.bake.max_frames, 20);
		assert_eq!(config.bake.resize, Some((120, 120)));
		assert_eq!(config.bake.jpeg_quality, 80);
		assert_eq!(config.cues.happy, vec!["yay".to_string()]);
		assert_eq!(config.cues.sad, CueKeywords::default().sad);
	}

	#[test]
	fn test_environment_overrides() {
		let env = env_from(&[
			("EMOFACE_FRAME_DELAY_MS", "33"),
			("EMOFACE_BAKE__JPEG_QUALITY", "95"),
			("EMOFACE_CUES__SAD", "meh,ugh"),
		]);
		let config = FaceConfig::load_with(None, env).unwrap();

		assert_eq!(config.frame_delay_ms, 33);
		assert_eq!(config.bake.jpeg_quality, 95);
		assert_eq!(config.cues.sad, vec!["meh".to_string(), "ugh".to_string()]);
	}

	#[test]
	fn test_file_then_environment() {
		let path = std::env::temp_dir().join(format!("emoface_config_{}.toml", std::process::id()));
		std::fs::write(&path, "frame_delay_ms = 70\nasset_dir = \"from_file\"\n").unwrap();

		let result = FaceConfig::load_with(Some(&path), env_from(&[("EMOFACE_FRAME_DELAY_MS", "20")]));
		std::fs::remove_file(&path).unwrap();

		let config = result.unwrap();
		assert_eq!(config.asset_dir, PathBuf::from("from_file"));
		assert_eq!(config.frame_delay_ms, 20);
	}

	#[test]
	fn test_invalid_values() {
		let zero_delay = FaceConfig::from_toml_str("frame_delay_ms = 0");
		assert!(matches!(zero_delay, Err(ConfigError::InvalidValue { key: "frame_delay_ms", .. })));

		let bad_quality = FaceConfig::from_toml_str("[bake]\njpeg_quality = 0");
		assert!(matches!(bad_quality, Err(ConfigError::InvalidValue { key: "bake", .. })));

		let zero_frames = FaceConfig::from_toml_str("[bake]\nmax_frames = 0");
		assert!(matches!(zero_frames, Err(ConfigError::InvalidValue { key: "bake", .. })));
	}

	#[test]
	fn test_missing_file() {
		let result = FaceConfig::load_with(Some(Path::new("/nonexistent/emoface.toml")), env_from(&[]));
		assert!(matches!(result, Err(ConfigError::Source(_))));
	}

	#[test]
	fn test_manifest_selection() {
		let config = FaceConfig::default();
		assert_eq!(config.manifest().unwrap().revision(), ManifestRevision::active());

		let external = FaceConfig {
			manifest_path: Some(PathBuf::from("/nonexistent/manifest.toml")),
			..FaceConfig::default()
		};
		assert!(external.manifest().is_err());
	}

	#[test]
	fn test_blank_frame_uses_blank_size() {
		let config = FaceConfig::from_toml_str("blank_size = [32, 24]").unwrap();
		let frame = config.blank_frame().unwrap();

		assert!(frame.starts_with(&[0xFF, 0xD8]));
		let decoded = image::load_from_memory(&frame).unwrap().to_rgb8();
		assert_eq!(decoded.dimensions(), (32, 24));
		assert!(decoded.pixels().all(|pixel| pixel.0.iter().all(|&c| c < 8)));
	}

	#[test]
	fn test_helpers() {
		let config = FaceConfig::default();
		assert_eq!(config.asset_source().root(), Path::new("resource/emoji"));
		assert_eq!(config.cue_classifier().classify("vui"), Some(crate::emotion::Emotion::Happy));
	}
}
