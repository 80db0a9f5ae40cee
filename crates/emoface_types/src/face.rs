//! Choosing what the face shows.
//!
//! [`FaceSelector`] turns the device state and the current emotion into a clip
//! from the [`Catalog`] and walks its frames. It does not pace frames; the caller
//! asks for the next frame at its own rate.
//!
//! | State                              | Clip                                    |
//! |------------------------------------|-----------------------------------------|
//! | `OfflineWifi`                      | none (blank screen)                     |
//! | `DisconnectedWs`                   | stunned, else neutral                   |
//! | `Waiting`                          | thinking, else neutral                  |
//! | `Free`                             | random idle animation, else neutral     |
//! | `Streaming`, `PlayingResponse`     | current emotion, else neutral           |

use std::sync::Arc;

use log::{debug, warn};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::{catalog::Catalog, clip::Clip, emotion::Emotion, signal::DeviceState};

/// What kind of clip the face shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceMode {
	/// Nothing
	Blank,
	/// Stunned face
	Stunned,
	/// Thinking face
	Thinking,
	/// Face for an emotion
	Emotion(Emotion),
	/// Random idle animations
	Roaming,
}

impl FaceMode {
	/// Mode for a device state and emotion
	pub fn for_state(state: DeviceState, emotion: Emotion) -> Self {
		match state {
			DeviceState::OfflineWifi => Self::Blank,
			DeviceState::DisconnectedWs => Self::Stunned,
			DeviceState::Waiting => Self::Thinking,
			DeviceState::Free => Self::Roaming,
			DeviceState::Streaming | DeviceState::PlayingResponse => Self::Emotion(emotion),
		}
	}
}

/// Picks clips from a catalog and steps through their frames
pub struct FaceSelector<'a, R = SmallRng> {
	catalog: &'a Catalog,
	rng: R,
	mode: Option<FaceMode>,
	clip: Option<&'a Arc<Clip>>,
	cursor: usize,
	blank: Option<&'a [u8]>,
}

impl<'a> FaceSelector<'a, SmallRng> {
	/// Creates a selector seeded from the OS
	pub fn new(catalog: &'a Catalog) -> Self {
		Self::with_rng(catalog, SmallRng::from_os_rng())
	}

	/// Creates a selector with a fixed seed, for reproducible roaming
	pub fn seeded(catalog: &'a Catalog, seed: u64) -> Self {
		Self::with_rng(catalog, SmallRng::seed_from_u64(seed))
	}
}

impl<'a, R: Rng> FaceSelector<'a, R> {
	/// Creates a selector drawing idle animations from `rng`
	pub fn with_rng(catalog: &'a Catalog, rng: R) -> Self {
		Self {
			catalog,
			rng,
			mode: None,
			clip: None,
			cursor: 0,
			blank: None,
		}
	}

	/// Frame returned while blank, e.g. from [`crate::bake::blank_frame`]
	pub fn with_blank_frame(mut self, frame: &'a [u8]) -> Self {
		self.blank = Some(frame);
		self
	}

	/// Current mode, `None` before the first selection
	pub fn mode(&self) -> Option<FaceMode> {
		self.mode
	}

	/// Clip currently shown
	pub fn current(&self) -> Option<&'a Arc<Clip>> {
		self.clip
	}

	/// Index of the frame the next call to [`Self::next_frame`] returns
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	/// Updates the selection for the given state and emotion
	///
	/// The frame cursor restarts whenever the mode or the clip changes. In
	/// roaming mode a new animation is drawn each time the current one has played
	/// through once.
	pub fn select(&mut self, state: DeviceState, emotion: Emotion) -> Option<&'a Arc<Clip>> {
		let mode = FaceMode::for_state(state, emotion);
		let mode_changed = self.mode != Some(mode);

		let finished = self.clip.is_some_and(|clip| self.cursor >= clip.frames().len());
		let next = match mode {
			FaceMode::Roaming if mode_changed || self.clip.is_none() || finished => Some(self.draw_animation()),
			FaceMode::Roaming => self.clip,
			FaceMode::Blank => None,
			FaceMode::Stunned => Some(self.stunned()),
			FaceMode::Thinking => Some(self.catalog.thinking().unwrap_or_else(|| self.catalog.neutral())),
			FaceMode::Emotion(emotion) => Some(self.catalog.emotion_or_neutral(emotion)),
		};

		let clip_changed = match (self.clip, next) {
			(Some(old), Some(new)) => !Arc::ptr_eq(old, new),
			(None, None) => false,
			_ => true,
		};
		let redrawn = mode == FaceMode::Roaming && finished;
		if mode_changed || clip_changed || redrawn {
			if let Some(clip) = next {
				debug!("Face {:?} -> '{}'", mode, clip.name());
			}
			if let FaceMode::Emotion(emotion) = mode
				&& !self.catalog.defines(emotion)
			{
				warn!("No clip for {}, showing neutral", emotion);
			}
			self.cursor = 0;
		} else if finished {
			self.cursor = 0;
		}

		self.mode = Some(mode);
		self.clip = next;
		next
	}

	/// Returns the next frame to display
	///
	/// A blank screen yields the frame set with [`Self::with_blank_frame`], or
	/// `None` without one.
	pub fn next_frame(&mut self, state: DeviceState, emotion: Emotion) -> Option<&'a [u8]> {
		let Some(clip) = self.select(state, emotion) else {
			return self.blank;
		};
		let frame = clip.frame(self.cursor)?;
		self.cursor += 1;
		Some(frame)
	}

	fn stunned(&self) -> &'a Arc<Clip> {
		self.catalog.emotion(Emotion::Stunned).unwrap_or_else(|| self.catalog.neutral())
	}

	fn draw_animation(&mut self) -> &'a Arc<Clip> {
		let animations = self.catalog.animations();
		if animations.is_empty() {
			return self.catalog.neutral();
		}
		&animations[self.rng.random_range(0..animations.len())]
	}
}
