//! GIF sources to packed clips to a catalog on disk

use std::fs;

use emoface::prelude::*;

use crate::{ScratchDir, make_gif, write_gifs};

#[test_log::test]
fn test_bake_then_build_active_catalog() {
	let scratch = ScratchDir::new("bake_build");
	let gifs = scratch.path().join("emoji_gif");
	let clips = scratch.path().join("emoji");
	fs::create_dir_all(&gifs).unwrap();

	let manifest = Manifest::active().unwrap();
	write_gifs(&manifest, &gifs);

	let outcomes = bake_dir(&gifs, &clips, &BakeOptions::default()).unwrap();
	assert_eq!(outcomes.len(), manifest.asset_names().len());
	assert!(outcomes.iter().all(|outcome| outcome.result.is_ok()));

	let catalog = Catalog::build(manifest, &DirectorySource::new(&clips)).unwrap();

	for entry in catalog.manifest().emotions() {
		let clip = catalog.emotion(entry.emotion).unwrap();
		assert_eq!(clip.name(), entry.asset);
		assert_eq!(clip.dimensions(), Some((12, 12)));
		assert!(clip.frames().all(|frame| frame.starts_with(&[0xFF, 0xD8])));
	}
	assert_eq!(catalog.emotion_list().len(), catalog.manifest().emotions().len());
	assert_eq!(catalog.clips().len(), catalog.manifest().asset_names().len());
	assert!(catalog.audit().is_empty());
}

#[test_log::test]
fn test_directory_source_bakes_missing_clips() {
	let scratch = ScratchDir::new("lazy_bake");
	let manifest = Manifest::embedded(ManifestRevision::Initial).unwrap();
	write_gifs(&manifest, scratch.path());

	let options = BakeOptions {
		max_frames: 1,
		resize: Some((6, 4)),
		..BakeOptions::default()
	};
	let source = DirectorySource::new(scratch.path()).with_bake_options(options);
	let catalog = Catalog::build(manifest, &source).unwrap();

	let neutral = catalog.neutral();
	assert_eq!(neutral.name(), "binhthuong");
	assert_eq!(neutral.num_frames(), 1);
	assert_eq!(neutral.dimensions(), Some((6, 4)));
}

#[test_log::test]
fn test_packed_clip_wins_over_gif() {
	let scratch = ScratchDir::new("packed_first");
	fs::write(scratch.path().join("vuive.gif"), make_gif(1, 3, 8, 8)).unwrap();
	let packed = Clip::new("vuive", vec![vec![0xFF, 0xD8, 0x01, 0xFF, 0xD9]]).unwrap();
	packed.save(scratch.path().join("vuive.fclp")).unwrap();

	let loaded = DirectorySource::new(scratch.path()).load("vuive").unwrap();
	assert_eq!(loaded, packed);
}

#[test_log::test]
fn test_missing_asset_names_the_asset() {
	let scratch = ScratchDir::new("missing");
	let manifest = Manifest::embedded(ManifestRevision::Stunned).unwrap();
	write_gifs(&manifest, scratch.path());
	fs::remove_file(scratch.path().join("hoamat.gif")).unwrap();

	let result = Catalog::build(manifest, &DirectorySource::new(scratch.path()));
	assert!(matches!(result, Err(CatalogError::MissingAsset(name)) if name == "hoamat"));
}

#[test_log::test]
fn test_corrupt_clip_reports_load_error() {
	let scratch = ScratchDir::new("corrupt");
	fs::write(scratch.path().join("buon.fclp"), b"FCLP\x01").unwrap();

	let result = DirectorySource::new(scratch.path()).load("buon");
	assert!(matches!(result, Err(CatalogError::AssetLoad { name, .. }) if name == "buon"));
}

#[test_log::test]
fn test_configured_asset_dir() {
	let scratch = ScratchDir::new("configured");
	let manifest = Manifest::active().unwrap();
	write_gifs(&manifest, scratch.path());

	let text = format!(
		"asset_dir = {:?}\n[bake]\nmax_frames = 2\n",
		scratch.path().display().to_string()
	);
	let config = FaceConfig::from_toml_str(&text).unwrap();
	let catalog = Catalog::build(config.manifest().unwrap(), &config.asset_source()).unwrap();

	assert!(catalog.clips().iter().all(|clip| clip.num_frames() <= 2));
}
