//! Baking animated GIFs into face clips.
//!
//! Each GIF frame is composited, flattened to RGB, optionally resized and encoded
//! as a standalone JPEG, which is what the device's JPEG decoder consumes. The
//! number of frames is capped so a clip does not fill the device flash.

use std::{
	fs::{self, File as FsFile},
	io::{BufRead, BufReader, Seek},
	path::{Path, PathBuf},
};

use image::{
	AnimationDecoder, RgbImage,
	codecs::{gif::GifDecoder, jpeg::JpegEncoder},
	imageops::{self, FilterType},
};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::{
	clip::{Clip, constants::EXTENSION},
	error::{BakeError, ClipError},
};

/// Default frame cap per clip
pub const DEFAULT_MAX_FRAMES: usize = 80;

/// Default JPEG quality (0-100)
pub const DEFAULT_JPEG_QUALITY: u8 = 80;

/// Largest frame side a clip can record
pub const MAX_SIDE: u32 = u16::MAX as u32;

/// Options controlling GIF baking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BakeOptions {
	/// Frames past this count are dropped
	pub max_frames: usize,
	/// JPEG quality, 1-100
	pub jpeg_quality: u8,
	/// Target size `(width, height)`, or `None` to keep the GIF size
	pub resize: Option<(u32, u32)>,
}

impl Default for BakeOptions {
	fn default() -> Self {
		Self {
			max_frames: DEFAULT_MAX_FRAMES,
			jpeg_quality: DEFAULT_JPEG_QUALITY,
			resize: None,
		}
	}
}

impl BakeOptions {
	/// Checks that the options can produce a clip
	pub fn validate(&self) -> Result<(), BakeError> {
		if self.max_frames == 0 {
			return Err(BakeError::InvalidOptions("max_frames must be at least 1".to_string()));
		}
		if !(1..=100).contains(&self.jpeg_quality) {
			return Err(BakeError::InvalidOptions(format!(
				"jpeg_quality must be within 1..=100, got {}",
				self.jpeg_quality
			)));
		}
		if let Some((width, height)) = self.resize {
			if width == 0 || height == 0 {
				return Err(BakeError::InvalidOptions(format!("resize {}x{} has a zero side", width, height)));
			}
			if width > MAX_SIDE || height > MAX_SIDE {
				return Err(BakeError::InvalidOptions(format!(
					"resize {}x{} exceeds {} pixels per side",
					width, height, MAX_SIDE
				)));
			}
		}
		Ok(())
	}
}

/// Result of baking one file of a directory
#[derive(Debug)]
pub struct BakeOutcome {
	/// GIF that was read
	pub source: PathBuf,
	/// Packed clip written, or the failure
	pub result: Result<BakedClip, BakeError>,
}

/// Summary of a clip written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BakedClip {
	/// Asset name
	pub name: String,
	/// Path of the packed clip
	pub output: PathBuf,
	/// Number of frames kept
	pub frames: u16,
	/// Total JPEG bytes
	pub bytes: usize,
}

/// Encodes a black JPEG frame of the given size, shown while the device is offline
pub fn blank_frame(width: u32, height: u32, jpeg_quality: u8) -> Result<Vec<u8>, BakeError> {
	let image = RgbImage::new(width, height);
	let mut jpeg = Vec::new();
	JpegEncoder::new_with_quality(&mut jpeg, jpeg_quality).encode_image(&image)?;
	Ok(jpeg)
}

/// Bakes a GIF stream into a clip
///
/// # Arguments
/// * `name` - Asset name of the resulting clip
/// * `reader` - GIF data
/// * `options` - Frame cap, JPEG quality and resize target
pub fn bake_gif<R: BufRead + Seek>(
	name: &str,
	reader: R,
	options: &BakeOptions,
) -> Result<Clip, BakeError> {
	options.validate()?;

	let decoder = GifDecoder::new(reader)?;
	let mut frames = Vec::new();
	let mut dimensions = (0u32, 0u32);

	for (i, frame) in decoder.into_frames().enumerate() {
		if i >= options.max_frames {
			warn!("'{}': stopping at {} frames to save flash", name, options.max_frames);
			break;
		}

		let rgba = frame?.into_buffer();
		let mut rgb: RgbImage = image::DynamicImage::ImageRgba8(rgba).to_rgb8();
		if let Some((width, height)) = options.resize {
			rgb = imageops::resize(&rgb, width, height, FilterType::Triangle);
		}
		dimensions = rgb.dimensions();

		let mut jpeg = Vec::new();
		JpegEncoder::new_with_quality(&mut jpeg, options.jpeg_quality).encode_image(&rgb)?;
		debug!("'{}': frame {:03} - {} bytes", name, i, jpeg.len());
		frames.push(jpeg);
	}

	if frames.is_empty() {
		return Err(BakeError::NoFrames(name.to_string()));
	}

	let (width, height) = dimensions;
	let side = |value: u32| {
		u16::try_from(value)
			.map_err(|_| BakeError::InvalidOptions(format!("frame side {} exceeds {} pixels", value, MAX_SIDE)))
	};
	let clip = Clip::new(name, frames)?.with_dimensions(side(width)?, side(height)?);
	Ok(clip)
}

/// Bakes a GIF file, naming the clip after the file stem
pub fn bake_gif_file(path: impl AsRef<Path>, options: &BakeOptions) -> Result<Clip, BakeError> {
	let path = path.as_ref();
	let name = path
		.file_stem()
		.and_then(|s| s.to_str())
		.ok_or_else(|| ClipError::InvalidName(path.display().to_string()))?;

	let reader = BufReader::new(FsFile::open(path)?);
	bake_gif(name, reader, options)
}

/// Bakes every `.gif` in `input` into a packed clip in `output`
///
/// Files are processed in name order. A failing file does not stop the others;
/// its error is reported in its [`BakeOutcome`].
pub fn bake_dir(
	input: impl AsRef<Path>,
	output: impl AsRef<Path>,
	options: &BakeOptions,
) -> Result<Vec<BakeOutcome>, BakeError> {
	options.validate()?;
	let input = input.as_ref();
	let output = output.as_ref();
	fs::create_dir_all(output)?;

	let mut sources: Vec<PathBuf> = fs::read_dir(input)?
		.filter_map(Result::ok)
		.map(|entry| entry.path())
		.filter(|path| {
			path.is_file()
				&& path
					.extension()
					.and_then(|ext| ext.to_str())
					.is_some_and(|ext| ext.eq_ignore_ascii_case("gif"))
		})
		.collect();
	sources.sort();

	let outcomes: Vec<BakeOutcome> = sources
		.into_iter()
		.map(|source| {
			let result = bake_gif_file(&source, options).and_then(|clip| {
				let output = output.join(format!("{}.{}", clip.name(), EXTENSION));
				clip.save(&output)?;
				Ok(BakedClip {
					name: clip.name().to_string(),
					output,
					frames: clip.num_frames(),
					bytes: clip.data_len(),
				})
			});
			BakeOutcome {
				source,
				result,
			}
		})
		.collect();

	let failed = outcomes.iter().filter(|outcome| outcome.result.is_err()).count();
	info!("Baked {} GIF files from {} ({} failed)", outcomes.len(), input.display(), failed);
	Ok(outcomes)
}
