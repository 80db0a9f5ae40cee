//! Core clip structure and container parsing.

use std::{
	fmt::Formatter,
	fs::File as FsFile,
	io::{Read, Write},
	path::Path,
};

use log::debug;
use md5::{Digest, Md5};

use crate::{error::ClipError, symbol::is_c_identifier};

use super::constants::{
	FRAME_SIZE_ENTRY, HEADER_SIZE, JPEG_SOI, MAGIC, MAX_FRAME_BYTES, MAX_FRAMES, VERSION,
};
use super::iterator::FrameIter;

/// A playable face animation: ordered JPEG frames plus their sizes and count.
///
/// This is the `VideoInfo` of the firmware. Frame sizes and the frame count are
/// derived from the frames, so they can never disagree with the data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clip {
	/// Asset name, also the firmware symbol
	name: String,

	/// Frame width in pixels, 0 when unknown
	width: u16,

	/// Frame height in pixels, 0 when unknown
	height: u16,

	/// JPEG encoded frames
	frames: Vec<Vec<u8>>,
}

impl Clip {
	/// Creates a clip from JPEG frames
	///
	/// # Errors
	/// Fails when the name is not a C identifier, there are no frames, a frame is
	/// not JPEG data, or a size does not fit the firmware's 16-bit tables.
	pub fn new(name: impl Into<String>, frames: Vec<Vec<u8>>) -> Result<Self, ClipError> {
		let name = name.into();
		if !is_c_identifier(&name) {
			return Err(ClipError::InvalidName(name));
		}
		if frames.is_empty() {
			return Err(ClipError::Empty(name));
		}
		if frames.len() > MAX_FRAMES {
			return Err(ClipError::TooManyFrames {
				count: frames.len(),
				max: MAX_FRAMES,
			});
		}

		for (index, frame) in frames.iter().enumerate() {
			if frame.len() > MAX_FRAME_BYTES {
				return Err(ClipError::FrameTooLarge {
					index,
					size: frame.len(),
					max: MAX_FRAME_BYTES,
				});
			}
			if !frame.starts_with(&JPEG_SOI) {
				return Err(ClipError::NotJpeg {
					index,
				});
			}
		}

		Ok(Self {
			name,
			width: 0,
			height: 0,
			frames,
		})
	}

	/// Sets the frame dimensions
	pub fn with_dimensions(mut self, width: u16, height: u16) -> Self {
		self.width = width;
		self.height = height;
		self
	}

	/// Opens a packed clip, naming it after the file stem
	pub fn open(path: impl AsRef<Path>) -> Result<Self, ClipError> {
		let path = path.as_ref();
		let name = path
			.file_stem()
			.and_then(|s| s.to_str())
			.ok_or_else(|| ClipError::InvalidName(path.display().to_string()))?
			.to_string();

		let mut file = FsFile::open(path)?;
		Self::from_reader(name, &mut file)
	}

	/// Loads a packed clip from any reader
	pub fn from_reader<R: Read>(name: impl Into<String>, reader: &mut R) -> Result<Self, ClipError> {
		let mut data = Vec::new();
		reader.read_to_end(&mut data)?;
		Self::from_bytes(name, &data)
	}

	/// Parses a packed clip from raw bytes
	///
	/// # Arguments
	/// * `name` - Asset name for the clip
	/// * `data` - Container bytes, header first
	pub fn from_bytes(name: impl Into<String>, data: &[u8]) -> Result<Self, ClipError> {
		if data.len() < HEADER_SIZE {
			return Err(ClipError::InsufficientData {
				expected: HEADER_SIZE,
				actual: data.len(),
			});
		}

		let magic = [data[0], data[1], data[2], data[3]];
		if magic != MAGIC {
			return Err(ClipError::InvalidMagic(magic));
		}

		let version = u16::from_le_bytes([data[4], data[5]]);
		if version != VERSION {
			return Err(ClipError::UnsupportedVersion(version));
		}

		let frame_count = u16::from_le_bytes([data[6], data[7]]) as usize;
		let width = u16::from_le_bytes([data[8], data[9]]);
		let height = u16::from_le_bytes([data[10], data[11]]);

		let table_end = HEADER_SIZE + frame_count * FRAME_SIZE_ENTRY;
		if data.len() < table_end {
			return Err(ClipError::InsufficientData {
				expected: table_end,
				actual: data.len(),
			});
		}

		let sizes: Vec<usize> = data[HEADER_SIZE..table_end]
			.chunks_exact(FRAME_SIZE_ENTRY)
			.map(|entry| u16::from_le_bytes([entry[0], entry[1]]) as usize)
			.collect();

		let expected = table_end + sizes.iter().sum::<usize>();
		if data.len() < expected {
			return Err(ClipError::InsufficientData {
				expected,
				actual: data.len(),
			});
		}
		if data.len() > expected {
			debug!("Ignoring {} trailing bytes after clip data", data.len() - expected);
		}

		let mut frames = Vec::with_capacity(frame_count);
		let mut offset = table_end;
		for size in sizes {
			frames.push(data[offset..offset + size].to_vec());
			offset += size;
		}

		Ok(Self::new(name, frames)?.with_dimensions(width, height))
	}

	/// Serializes the clip into the packed container format
	pub fn to_bytes(&self) -> Vec<u8> {
		let data_len: usize = self.frames.iter().map(Vec::len).sum();
		let mut buffer =
			Vec::with_capacity(HEADER_SIZE + self.frames.len() * FRAME_SIZE_ENTRY + data_len);

		buffer.extend_from_slice(&MAGIC);
		buffer.extend_from_slice(&VERSION.to_le_bytes());
		buffer.extend_from_slice(&self.num_frames().to_le_bytes());
		buffer.extend_from_slice(&self.width.to_le_bytes());
		buffer.extend_from_slice(&self.height.to_le_bytes());
		buffer.extend_from_slice(&[0u8; 4]);

		for size in self.frame_sizes() {
			buffer.extend_from_slice(&size.to_le_bytes());
		}
		for frame in &self.frames {
			buffer.extend_from_slice(frame);
		}

		buffer
	}

	/// Writes the packed clip to the given writer
	pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), ClipError> {
		writer.write_all(&self.to_bytes())?;
		Ok(())
	}

	/// Saves the packed clip to the given path
	pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ClipError> {
		let mut file = FsFile::create(path)?;
		self.write_to(&mut file)
	}

	/// Asset name
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Frame dimensions, if known
	pub fn dimensions(&self) -> Option<(u16, u16)> {
		(self.width != 0 && self.height != 0).then_some((self.width, self.height))
	}

	/// Number of frames
	pub fn num_frames(&self) -> u16 {
		// Bounded by MAX_FRAMES in `new`
		self.frames.len() as u16
	}

	/// Size of each frame in bytes
	pub fn frame_sizes(&self) -> impl Iterator<Item = u16> + '_ {
		self.frames.iter().map(|frame| frame.len() as u16)
	}

	/// Total size of all frame data in bytes
	pub fn data_len(&self) -> usize {
		self.frames.iter().map(Vec::len).sum()
	}

	/// Gets a frame by index
	pub fn frame(&self, index: usize) -> Option<&[u8]> {
		self.frames.get(index).map(Vec::as_slice)
	}

	/// Iterates over all frames in playback order
	pub fn frames(&self) -> FrameIter<'_> {
		FrameIter {
			frames: &self.frames,
			current: 0,
		}
	}

	/// Length of one pass at the given per-frame delay
	pub fn duration_ms(&self, frame_delay_ms: u32) -> u64 {
		u64::from(self.num_frames()) * u64::from(frame_delay_ms)
	}

	/// Hex MD5 digest over the frame data, used to spot identical assets
	pub fn fingerprint(&self) -> String {
		let mut hasher = Md5::new();
		for frame in &self.frames {
			hasher.update((frame.len() as u32).to_le_bytes());
			hasher.update(frame);
		}
		hex::encode(hasher.finalize())
	}
}

impl std::fmt::Display for Clip {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "Clip {{ name: '{}', frames: {}, bytes: {}", self.name, self.num_frames(), self.data_len())?;
		if let Some((width, height)) = self.dimensions() {
			write!(f, ", size: {}x{}", width, height)?;
		}
		write!(f, " }}")
	}
}

impl From<&Clip> for Vec<u8> {
	fn from(clip: &Clip) -> Self {
		clip.to_bytes()
	}
}
