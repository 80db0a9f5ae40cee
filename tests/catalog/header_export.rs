//! Firmware header export from baked clips

use std::fs;

use emoface::prelude::*;

use crate::{ScratchDir, write_gifs};

#[test_log::test]
fn test_headers_for_every_asset() {
	let scratch = ScratchDir::new("headers");
	let manifest = Manifest::active().unwrap();
	write_gifs(&manifest, scratch.path());
	let catalog = Catalog::build(manifest, &DirectorySource::new(scratch.path())).unwrap();

	let mut emotion_h = Vec::new();
	write_catalog_header(catalog.manifest(), &HeaderOptions::default(), &mut emotion_h).unwrap();
	let emotion_h = String::from_utf8(emotion_h).unwrap();

	for clip in catalog.clips() {
		assert!(emotion_h.contains(&format!("emoji_h\\{}.h\"", clip.name())));

		let mut out = Vec::new();
		write_clip_header(clip, &mut out).unwrap();
		let text = String::from_utf8(out).unwrap();

		assert!(text.starts_with(&format!("#ifndef {}_H\n", clip.name().to_uppercase())));
		assert!(text.contains(&format!("VideoInfo {} = {{", clip.name())));
		assert!(text.contains(&format!("const uint16_t {}_NUM_FRAMES = {};", clip.name(), clip.num_frames())));
		assert_eq!(text.matches("_jpg_frame_").count(), usize::from(clip.num_frames()) * 2);
	}

	let list = format!("VideoInfo* {}[] = {{ ", catalog.manifest().list_symbol());
	assert!(emotion_h.contains(&list));
	assert!(emotion_h.ends_with("#endif // EMOTION_H\n"));
}

#[test_log::test]
fn test_header_lists_match_constants() {
	for revision in ManifestRevision::ALL {
		let manifest = Manifest::embedded(revision).unwrap();
		let mut out = Vec::new();
		write_catalog_header(&manifest, &HeaderOptions::default(), &mut out).unwrap();
		let text = String::from_utf8(out).unwrap();

		let list_line = text.lines().find(|line| line.contains(manifest.list_symbol())).unwrap();
		let entries = list_line.matches('&').count();
		let indexed = manifest
			.defined_emotions()
			.into_iter()
			.filter(|emotion| manifest.emotion_asset(*emotion).is_some())
			.count();
		assert_eq!(entries, indexed, "{revision}");
	}
}

#[test_log::test]
fn test_written_files_round_trip_through_disk() {
	let scratch = ScratchDir::new("header_files");
	let clip = Clip::new("ptit", vec![vec![0xFF, 0xD8, 0x10, 0xFF, 0xD9]]).unwrap();
	clip.save(scratch.path().join("ptit.fclp")).unwrap();

	let reopened = Clip::open(scratch.path().join("ptit.fclp")).unwrap();
	let target = scratch.path().join("ptit.h");
	let mut file = fs::File::create(&target).unwrap();
	write_clip_header(&reopened, &mut file).unwrap();
	drop(file);

	let text = fs::read_to_string(&target).unwrap();
	assert!(text.contains("  0xFF,0xD8,0x10,0xFF,0xD9,\n};"));
	assert!(text.contains("const uint16_t ptit_frame_sizes[] PROGMEM = {\n  5,\n};"));
}
