//! This crate provides the core types of the `emoface` project: the emotions a
//! talking robot can show, the JPEG clips that animate them, and the catalog that
//! wires clips to emotions for the device firmware.
//!
//! # Building Blocks
//!
//! - **Emotion**: the closed set of emotions with their firmware constants and wire codes
//! - **Clip**: a named sequence of JPEG frames (`VideoInfo` on the device), stored as `.fclp`
//! - **Manifest**: which asset plays which role in a header revision (r1, r2, r3)
//! - **Catalog**: the immutable registry resolving manifest entries to loaded clips
//! - **Face**: choosing the clip and frame to show for the device state
//! - **Header**: C header generation for the firmware
//! - **Bake**: converting animated GIFs into clips
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use emoface_types::prelude::*;
//!
//! let config = FaceConfig::load(None).unwrap();
//! let catalog = Catalog::build(config.manifest().unwrap(), &config.asset_source()).unwrap();
//! let mut selector = FaceSelector::new(&catalog);
//! let frame = selector.next_frame(DeviceState::Streaming, Emotion::Happy);
//! ```
//!
//! Or use explicit paths:
//!
//! ```no_run
//! use emoface_types::{clip::Clip, emotion::Emotion};
//!
//! let clip = Clip::open("resource/emoji/vuive.fclp").unwrap();
//! assert_eq!(Emotion::from_wire("01"), Some(Emotion::Happy));
//! ```

pub mod bake;
pub mod catalog;
pub mod clip;
pub mod cue;
pub mod emotion;
pub mod error;
pub mod face;
pub mod header;
pub mod manifest;
pub mod settings;
pub mod signal;
pub mod symbol;

/// `use emoface_types::prelude::*;` to import commonly used items.
pub mod prelude;
