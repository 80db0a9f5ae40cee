//! Benchmark helper utilities for emoface
//!
//! Clips are synthesized in memory: each frame is a JPEG-shaped byte string
//! (SOI marker, filler, EOI marker) of a chosen size. The parser and the face
//! selector only look at framing, so no real image data is needed.

use emoface_types::{
	catalog::{Catalog, MemorySource},
	clip::Clip,
	manifest::{Manifest, ManifestRevision},
};

/// Generates one JPEG-shaped frame of `size` bytes (at least 4)
pub fn generate_frame(size: usize, seed: u8) -> Vec<u8> {
	let size = size.max(4);
	let mut frame = Vec::with_capacity(size);
	frame.extend_from_slice(&[0xFF, 0xD8]);
	frame.extend((0..size - 4).map(|i| (i as u8).wrapping_add(seed)));
	frame.extend_from_slice(&[0xFF, 0xD9]);
	frame
}

/// Generates a clip with `frames` frames of `frame_size` bytes each
pub fn generate_clip(name: &str, frames: usize, frame_size: usize) -> Clip {
	let frames = (0..frames).map(|i| generate_frame(frame_size, i as u8)).collect();
	Clip::new(name, frames).expect("synthetic clip is valid")
}

/// Generates the packed `.fclp` bytes of a synthetic clip
pub fn generate_clip_bytes(frames: usize, frame_size: usize) -> Vec<u8> {
	generate_clip("bench", frames, frame_size).to_bytes()
}

/// Builds the catalog of a revision with synthetic clips for every asset
pub fn generate_catalog(revision: ManifestRevision, frames: usize) -> Catalog {
	let manifest = Manifest::embedded(revision).expect("embedded manifest is valid");
	let source: MemorySource = manifest
		.asset_names()
		.into_iter()
		.enumerate()
		.map(|(i, name)| generate_clip(name, frames + i % 5, 512))
		.collect();
	Catalog::build(manifest, &source).expect("every asset is provided")
}
