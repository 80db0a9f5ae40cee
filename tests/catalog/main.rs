//! End-to-end tests for `emoface`: baking GIFs, building the catalog from disk,
//! exporting firmware headers and driving the face from server messages.

use std::{
	fs,
	path::{Path, PathBuf},
};

use emoface::prelude::*;
use image::{Frame, Rgba, RgbaImage, codecs::gif::GifEncoder};

mod bake_pipeline;
mod face_session;
mod header_export;

/// Scratch directory removed on drop
pub struct ScratchDir(PathBuf);

impl ScratchDir {
	pub fn new(label: &str) -> Self {
		let path = std::env::temp_dir().join(format!("emoface_it_{}_{}", label, std::process::id()));
		if path.exists() {
			fs::remove_dir_all(&path).unwrap();
		}
		fs::create_dir_all(&path).unwrap();
		Self(path)
	}

	pub fn path(&self) -> &Path {
		&self.0
	}
}

impl Drop for ScratchDir {
	fn drop(&mut self) {
		let _ = fs::remove_dir_all(&self.0);
	}
}

/// Encodes an animated GIF whose frames are solid colors derived from `seed`
pub fn make_gif(seed: u8, count: u8, width: u32, height: u32) -> Vec<u8> {
	let mut buffer = Vec::new();
	{
		let mut encoder = GifEncoder::new(&mut buffer);
		let frames = (0..count).map(|i| {
			let color = Rgba([
				seed.wrapping_mul(11),
				255 - seed.wrapping_mul(7),
				i.wrapping_mul(60),
				255,
			]);
			Frame::new(RgbaImage::from_pixel(width, height, color))
		});
		encoder.encode_frames(frames).unwrap();
	}
	buffer
}

/// Writes one GIF per asset of `manifest` into `dir`
pub fn write_gifs(manifest: &Manifest, dir: &Path) {
	for (i, name) in manifest.asset_names().into_iter().enumerate() {
		let frames = 2 + (i % 3) as u8;
		fs::write(dir.join(format!("{name}.gif")), make_gif(i as u8, frames, 12, 12)).unwrap();
	}
}

/// In-memory catalog with `frames` stub frames per asset
pub fn stub_catalog(manifest: Manifest, frames: u8) -> Catalog {
	let source: MemorySource = manifest
		.asset_names()
		.into_iter()
		.enumerate()
		.map(|(i, name)| {
			let frames = (0..frames).map(|f| vec![0xFF, 0xD8, i as u8, f, 0xFF, 0xD9]).collect();
			Clip::new(name, frames).unwrap()
		})
		.collect();
	Catalog::build(manifest, &source).unwrap()
}
