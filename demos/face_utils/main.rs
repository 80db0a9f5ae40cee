//! Face asset utility.
//!
//! Subcommands:
//! - `bake`: convert a directory of animated GIFs into packed `.fclp` clips.
//! - `manifest`: print a catalog manifest revision.
//! - `catalog`: build the catalog from the asset directory and report on it.
//! - `header`: write `emotion.h` and per-clip firmware headers.
//! - `cue`: classify utterances by keyword.
//! - `face`: replay server messages and show which clip the face plays.

use std::{
	fs,
	io::{self, BufWriter, Write},
	path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use emoface::prelude::*;
use walkdir::WalkDir;

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	let config = FaceConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

	match cli.command {
		Command::Bake(args) => run_bake(args, &config),
		Command::Manifest(args) => run_manifest(args, &config),
		Command::Catalog(args) => run_catalog(args, &config),
		Command::Header(args) => run_header(args, &config),
		Command::Cue(args) => run_cue(args, &config),
		Command::Face(args) => run_face(args, &config),
	}
}

#[derive(Parser)]
#[command(name = "face_utils")]
#[command(author = "emoface project")]
#[command(version)]
#[command(about = "Bake, inspect and export robot face clips", long_about = None)]
struct Cli {
	/// Configuration file (toml, json or yaml)
	#[arg(short, long, global = true, value_name = "FILE", env = "EMOFACE_CONFIG")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Bake every GIF in a directory into packed clips
	Bake(BakeArgs),
	/// Print a manifest revision
	Manifest(ManifestArgs),
	/// Build the catalog and report resolved clips
	Catalog(CatalogArgs),
	/// Write firmware C headers
	Header(HeaderArgs),
	/// Classify utterances by keyword
	Cue(CueArgs),
	/// Replay server messages through the face selector
	Face(FaceArgs),
}

#[derive(Args)]
struct BakeArgs {
	/// Directory of GIF sources
	#[arg(short, long, value_name = "DIR", default_value = "resource/emoji_gif")]
	input: PathBuf,

	/// Output directory, defaults to the configured asset directory
	#[arg(short, long, value_name = "DIR")]
	output: Option<PathBuf>,

	/// Maximum frames per clip
	#[arg(long, value_name = "COUNT")]
	max_frames: Option<usize>,

	/// JPEG quality (1-100)
	#[arg(short, long, value_name = "QUALITY")]
	quality: Option<u8>,

	/// Resize frames, e.g. 240x240
	#[arg(long, value_name = "WxH", value_parser = parse_size)]
	resize: Option<(u32, u32)>,
}

#[derive(Args)]
struct ManifestArgs {
	/// Revision number (1-3), defaults to the configured manifest
	#[arg(short, long, value_name = "N")]
	revision: Option<u32>,

	/// Print as JSON
	#[arg(long, default_value_t = false)]
	json: bool,
}

#[derive(Args)]
struct CatalogArgs {
	/// Asset directory, defaults to the configured one
	#[arg(short = 'd', long, value_name = "DIR")]
	asset_dir: Option<PathBuf>,

	/// Also list every clip with its fingerprint
	#[arg(short, long, default_value_t = false)]
	verbose: bool,
}

#[derive(Args)]
struct HeaderArgs {
	/// Revision number (1-3), defaults to the configured manifest
	#[arg(short, long, value_name = "N")]
	revision: Option<u32>,

	/// Where to write emotion.h, `-` for stdout
	#[arg(short, long, value_name = "FILE", default_value = "-")]
	output: PathBuf,

	/// Directory of packed clips to export as per-clip headers
	#[arg(long, value_name = "DIR")]
	clips: Option<PathBuf>,

	/// Destination of per-clip headers
	#[arg(long, value_name = "DIR", default_value = "resource/emoji_h")]
	clip_output: PathBuf,
}

#[derive(Args)]
struct CueArgs {
	/// Utterances to classify
	#[arg(value_name = "TEXT", required = true)]
	texts: Vec<String>,
}

#[derive(Args)]
struct FaceArgs {
	/// Server text messages, in order (`PROCESSING_START`, `01`, `TTS_END`, ...)
	#[arg(value_name = "MESSAGE")]
	messages: Vec<String>,

	/// Frames to advance after each message
	#[arg(short, long, value_name = "COUNT", default_value_t = 1)]
	frames: usize,

	/// Seed for idle animations
	#[arg(long, value_name = "SEED")]
	seed: Option<u64>,
}

fn parse_size(value: &str) -> Result<(u32, u32), String> {
	let (width, height) =
		value.split_once(['x', 'X']).ok_or_else(|| format!("expected WxH, got '{}'", value))?;
	let width = width.trim().parse::<u32>().map_err(|e| format!("bad width: {e}"))?;
	let height = height.trim().parse::<u32>().map_err(|e| format!("bad height: {e}"))?;
	Ok((width, height))
}

fn select_manifest(revision: Option<u32>, config: &FaceConfig) -> Result<Manifest> {
	let manifest = match revision {
		Some(number) => Manifest::embedded(ManifestRevision::from_u32(number)?)?,
		None => config.manifest()?,
	};
	Ok(manifest)
}

fn run_bake(args: BakeArgs, config: &FaceConfig) -> Result<()> {
	if !args.input.is_dir() {
		bail!("{} is not a directory", args.input.display());
	}

	let mut options = config.bake;
	if let Some(max_frames) = args.max_frames {
		options.max_frames = max_frames;
	}
	if let Some(quality) = args.quality {
		options.jpeg_quality = quality;
	}
	if args.resize.is_some() {
		options.resize = args.resize;
	}

	let output = args.output.unwrap_or_else(|| config.asset_dir.clone());
	println!("🔥 Baking {} -> {}", args.input.display(), output.display());

	let outcomes = bake_dir(&args.input, &output, &options)?;
	let mut failures = 0usize;
	for outcome in &outcomes {
		match &outcome.result {
			Ok(baked) => println!(
				"  ✅ {:<16} {:>3} frames {:>8} bytes",
				baked.name, baked.frames, baked.bytes
			),
			Err(err) => {
				failures += 1;
				println!("  ❌ {} - {}", outcome.source.display(), err);
			}
		}
	}

	println!("Baked {} of {} files", outcomes.len() - failures, outcomes.len());
	if failures > 0 {
		bail!("{} files failed to bake", failures);
	}
	Ok(())
}

fn run_manifest(args: ManifestArgs, config: &FaceConfig) -> Result<()> {
	let manifest = select_manifest(args.revision, config)?;

	if args.json {
		println!("{}", serde_json::to_string_pretty(&manifest)?);
		return Ok(());
	}

	let active = if manifest.revision().is_active() {
		" (active)"
	} else {
		""
	};
	println!("📋 Manifest {}{}", manifest.revision(), active);
	println!("{}:", manifest.list_symbol());
	for entry in manifest.emotions() {
		println!("  [{}] {:<9} -> {}", entry.emotion.to_u8(), entry.emotion.name(), entry.asset);
	}
	if !manifest.animations().is_empty() {
		println!("animationList: {}", manifest.animations().join(", "));
	}
	for (label, asset) in
		[("logo", manifest.logo()), ("stunned", manifest.stunned()), ("thinking", manifest.thinking())]
	{
		if let Some(asset) = asset {
			println!("{:<9}{}", format!("{label}:"), asset);
		}
	}
	println!("{} distinct assets", manifest.asset_names().len());
	Ok(())
}

fn run_catalog(args: CatalogArgs, config: &FaceConfig) -> Result<()> {
	let manifest = config.manifest()?;
	let asset_dir = args.asset_dir.unwrap_or_else(|| config.asset_dir.clone());
	let source = DirectorySource::new(&asset_dir).with_bake_options(config.bake);

	let catalog = Catalog::build(manifest, &source)
		.with_context(|| format!("Failed to build catalog from {}", asset_dir.display()))?;

	println!("📦 Catalog {} from {}", catalog.manifest().revision(), asset_dir.display());
	for emotion in Emotion::ALL {
		match catalog.emotion(emotion) {
			Some(clip) => println!(
				"  {:<9} {:<12} {:>3} frames {:>6} ms",
				emotion.name(),
				clip.name(),
				clip.num_frames(),
				clip.duration_ms(config.frame_delay_ms)
			),
			None => println!("  {:<9} (not defined, shows neutral)", emotion.name()),
		}
	}
	println!("  {} idle animations", catalog.animation_count());

	if args.verbose {
		for clip in catalog.clips() {
			println!("  {:<12} {}", clip.name(), clip.fingerprint());
		}
	}

	let aliases = catalog.audit();
	for alias in &aliases {
		println!("⚠️  identical data: {}", alias.assets.join(", "));
	}
	println!("{} clips, {} aliased groups", catalog.clips().len(), aliases.len());
	Ok(())
}

fn run_header(args: HeaderArgs, config: &FaceConfig) -> Result<()> {
	let manifest = select_manifest(args.revision, config)?;

	if args.output == Path::new("-") {
		let stdout = io::stdout();
		let mut writer = stdout.lock();
		write_catalog_header(&manifest, &config.header, &mut writer)?;
		writer.flush()?;
	} else {
		let mut writer = BufWriter::new(
			fs::File::create(&args.output)
				.with_context(|| format!("Failed to create {}", args.output.display()))?,
		);
		write_catalog_header(&manifest, &config.header, &mut writer)?;
		writer.flush()?;
		println!("📝 Wrote {}", args.output.display());
	}

	if let Some(clips) = args.clips {
		fs::create_dir_all(&args.clip_output)?;
		for path in collect_clips(&clips)? {
			let clip = Clip::open(&path).with_context(|| format!("Failed to read {}", path.display()))?;
			let target = args.clip_output.join(format!("{}.h", clip.name()));
			let mut writer = BufWriter::new(fs::File::create(&target)?);
			write_clip_header(&clip, &mut writer)?;
			writer.flush()?;
			println!("📝 Wrote {} ({} frames)", target.display(), clip.num_frames());
		}
	}
	Ok(())
}

fn collect_clips(root: &Path) -> Result<Vec<PathBuf>> {
	let mut files = Vec::new();
	for entry in WalkDir::new(root).follow_links(false) {
		let entry = match entry {
			Ok(entry) => entry,
			Err(err) => {
				println!("{}", err);
				continue;
			}
		};
		let is_clip = entry.path().extension().and_then(|ext| ext.to_str()) == Some("fclp");
		if entry.file_type().is_file() && is_clip {
			files.push(entry.into_path());
		}
	}
	files.sort();
	Ok(files)
}

fn run_cue(args: CueArgs, config: &FaceConfig) -> Result<()> {
	let classifier = config.cue_classifier();
	for text in &args.texts {
		match classifier.matching(text) {
			Some((emotion, keyword)) => println!(
				"{} -> {} (wire {}, keyword '{}')",
				text,
				emotion,
				emotion.wire_code().unwrap_or("--"),
				keyword
			),
			None => println!("{} -> no keyword match", text),
		}
	}
	Ok(())
}

fn run_face(args: FaceArgs, config: &FaceConfig) -> Result<()> {
	let catalog = Catalog::build(config.manifest()?, &config.asset_source())?;
	let blank = config.blank_frame().context("Failed to encode the blank frame")?;
	let blank_label = format!("<blank {}x{}>", config.blank_size.0, config.blank_size.1);
	let selector = match args.seed {
		Some(seed) => FaceSelector::seeded(&catalog, seed),
		None => FaceSelector::new(&catalog),
	};
	let mut selector = selector.with_blank_frame(&blank);

	let mut face = FaceState::default();
	face.on_connected();
	for text in &args.messages {
		face.on_message(&ControlMessage::parse(text));
		let mut bytes = 0usize;
		for _ in 0..args.frames {
			bytes += selector.next_frame(face.state, face.emotion).map_or(0, <[u8]>::len);
		}
		let clip = selector.current().map_or(blank_label.as_str(), |clip| clip.name());
		println!(
			"{:<18} {:<17} {:<9} {} @ {} ({} bytes)",
			text,
			face.state.to_string(),
			face.emotion.name(),
			clip,
			selector.cursor(),
			bytes
		);
	}
	Ok(())
}
