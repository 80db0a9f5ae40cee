//! Firmware C header generation.
//!
//! The device firmware links clips in as `PROGMEM` arrays. [`write_clip_header`]
//! emits one header per clip and [`write_catalog_header`] emits `emotion.h`, which
//! wires the clips of a manifest revision into the emotion list, the animation
//! list and the singletons.
//!
//! # Clip Header Layout
//!
//! ```text
//! const uint8_t vuive_jpg_frame_0[] PROGMEM = { 0xFF,0xD8,... };   one per frame
//! const uint8_t* const vuive_frames[] PROGMEM = { ... };           frame pointers
//! const uint16_t vuive_frame_sizes[] PROGMEM = { ... };            byte sizes
//! const uint16_t vuive_NUM_FRAMES = N;
//! VideoInfo vuive = { vuive_frames, vuive_frame_sizes, vuive_NUM_FRAMES };
//! ```

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::{
	clip::Clip,
	manifest::{ANIMATION_LIST_SYMBOL, LOGO_SYMBOL, Manifest, STUNNED_SYMBOL, THINKING_SYMBOL},
};

/// Include guard of the catalog header
pub const CATALOG_GUARD: &str = "EMOTION_H";

/// Bytes per line in frame arrays
const BYTES_PER_LINE: usize = 16;

/// Options for the catalog header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderOptions {
	/// Path prefix of per-clip headers in `#include` lines
	pub include_prefix: String,
	/// JPEG decoder header included first
	pub decoder_include: String,
}

impl Default for HeaderOptions {
	fn default() -> Self {
		Self {
			include_prefix: "..\\resource\\emoji_h\\".to_string(),
			decoder_include: "TJpg_Decoder.h".to_string(),
		}
	}
}

/// Writes the C header defining one clip's frame tables and `VideoInfo`
pub fn write_clip_header<W: Write>(clip: &Clip, writer: &mut W) -> io::Result<()> {
	let name = clip.name();
	let guard = name.to_uppercase();

	write!(writer, "#ifndef {guard}_H\n#define {guard}_H\n\n\n\n")?;

	for (i, frame) in clip.frames().enumerate() {
		writeln!(writer, "const uint8_t {name}_jpg_frame_{i}[] PROGMEM = {{")?;
		for (j, byte) in frame.iter().enumerate() {
			if j % BYTES_PER_LINE == 0 {
				write!(writer, "  ")?;
			}
			write!(writer, "0x{byte:02X},")?;
			if j % BYTES_PER_LINE == BYTES_PER_LINE - 1 {
				writeln!(writer)?;
			}
		}
		write!(writer, "\n}};\n\n")?;
	}

	writeln!(writer, "const uint8_t* const {name}_frames[] PROGMEM = {{")?;
	for i in 0..clip.num_frames() {
		writeln!(writer, "  {name}_jpg_frame_{i},")?;
	}
	write!(writer, "}};\n\n")?;

	writeln!(writer, "const uint16_t {name}_frame_sizes[] PROGMEM = {{")?;
	for size in clip.frame_sizes() {
		writeln!(writer, "  {size},")?;
	}
	write!(writer, "}};\n\n")?;

	write!(writer, "const uint16_t {name}_NUM_FRAMES = {};\n\n", clip.num_frames())?;

	writeln!(writer, "VideoInfo {name} = {{")?;
	writeln!(writer, "    {name}_frames,")?;
	writeln!(writer, "    {name}_frame_sizes,")?;
	writeln!(writer, "    {name}_NUM_FRAMES")?;
	write!(writer, "}};\n\n#endif\n")?;

	Ok(())
}

/// Writes `emotion.h` for a manifest
///
/// Includes one header per referenced asset, defines the revision's `EMOTION_*`
/// constants, and declares the emotion list under the revision's symbol, the
/// animation list when non-empty, and each present singleton.
pub fn write_catalog_header<W: Write>(
	manifest: &Manifest,
	options: &HeaderOptions,
	writer: &mut W,
) -> io::Result<()> {
	writeln!(writer, "#ifndef {CATALOG_GUARD}")?;
	writeln!(writer, "#define {CATALOG_GUARD}")?;
	writeln!(writer)?;
	writeln!(writer, "#include <{}>", options.decoder_include)?;
	writeln!(writer)?;

	for name in manifest.asset_names() {
		writeln!(writer, "#include \"{}{}.h\"", options.include_prefix, name)?;
	}
	writeln!(writer)?;

	for emotion in manifest.defined_emotions() {
		writeln!(writer, "#define {:<21}{:<8}// {}", emotion.c_constant(), emotion.to_u8(), emotion.label())?;
	}
	writeln!(writer)?;

	let emotions: Vec<&str> = manifest.emotions().iter().map(|entry| entry.asset.as_str()).collect();
	write_pointer_list(writer, manifest.list_symbol(), &emotions)?;

	if !manifest.animations().is_empty() {
		let animations: Vec<&str> = manifest.animations().iter().map(String::as_str).collect();
		write_pointer_list(writer, ANIMATION_LIST_SYMBOL, &animations)?;
	}

	let singletons = [
		(LOGO_SYMBOL, manifest.logo()),
		(STUNNED_SYMBOL, manifest.stunned()),
		(THINKING_SYMBOL, manifest.thinking()),
	];
	for (symbol, asset) in singletons {
		if let Some(asset) = asset {
			writeln!(writer, "VideoInfo* {symbol} = &{asset};")?;
		}
	}

	writeln!(writer)?;
	writeln!(writer, "#endif // {CATALOG_GUARD}")?;
	Ok(())
}

fn write_pointer_list<W: Write>(writer: &mut W, symbol: &str, assets: &[&str]) -> io::Result<()> {
	let entries: Vec<String> = assets.iter().map(|asset| format!("&{asset}")).collect();
	writeln!(writer, "VideoInfo* {symbol}[] = {{ {} }};", entries.join(", "))
}
