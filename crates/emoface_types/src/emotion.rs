//! Emotional states shown on the face.
//!
//! Each emotion has a fixed integer constant that doubles as its index into the
//! emotion list of a catalog, and the first three also have a two-character wire
//! code used by the conversation server.

use std::{fmt::Formatter, str::FromStr};

use serde::Serialize;

use crate::error::EmotionError;

/// Constant for [`Emotion::Neutral`]
pub const EMOTION_NEUTRAL: u8 = 0;

/// Constant for [`Emotion::Happy`]
pub const EMOTION_HAPPY: u8 = 1;

/// Constant for [`Emotion::Sad`]
pub const EMOTION_SAD: u8 = 2;

/// Constant for [`Emotion::Stunned`]
pub const EMOTION_STUNNED: u8 = 3;

/// Number of known emotions
pub const EMOTION_COUNT: usize = 4;

/// Emotional state of the face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Emotion {
	/// Calm, default face
	#[default]
	Neutral = EMOTION_NEUTRAL,
	/// Happy face
	Happy = EMOTION_HAPPY,
	/// Sad face
	Sad = EMOTION_SAD,
	/// Petrified face, shown when the server connection is lost
	Stunned = EMOTION_STUNNED,
}

impl Emotion {
	/// All emotions in constant order
	pub const ALL: [Emotion; EMOTION_COUNT] = [Self::Neutral, Self::Happy, Self::Sad, Self::Stunned];

	/// Converts a u8 constant to `Emotion`
	pub fn from_u8(value: u8) -> Result<Self, EmotionError> {
		match value {
			EMOTION_NEUTRAL => Ok(Self::Neutral),
			EMOTION_HAPPY => Ok(Self::Happy),
			EMOTION_SAD => Ok(Self::Sad),
			EMOTION_STUNNED => Ok(Self::Stunned),
			_ => Err(EmotionError::InvalidConstant(value)),
		}
	}

	/// Converts `Emotion` to its u8 constant
	pub const fn to_u8(self) -> u8 {
		self as u8
	}

	/// Index of this emotion in an emotion list
	pub const fn index(self) -> usize {
		self as usize
	}

	/// Lowercase name used in manifests
	pub const fn name(self) -> &'static str {
		match self {
			Self::Neutral => "neutral",
			Self::Happy => "happy",
			Self::Sad => "sad",
			Self::Stunned => "stunned",
		}
	}

	/// Name of the firmware constant
	pub const fn c_constant(self) -> &'static str {
		match self {
			Self::Neutral => "EMOTION_NEUTRAL",
			Self::Happy => "EMOTION_HAPPY",
			Self::Sad => "EMOTION_SAD",
			Self::Stunned => "EMOTION_STUNNED",
		}
	}

	/// Vietnamese label carried as a comment next to the firmware constant
	pub const fn label(self) -> &'static str {
		match self {
			Self::Neutral => "Bình thường",
			Self::Happy => "Vui vẻ",
			Self::Sad => "Buồn",
			Self::Stunned => "Hóa đá",
		}
	}

	/// Parses a server wire code (`"00"`, `"01"`, `"10"`)
	///
	/// Returns `None` for anything else; stunned has no wire code.
	pub fn from_wire(code: &str) -> Option<Self> {
		match code {
			"00" => Some(Self::Neutral),
			"01" => Some(Self::Happy),
			"10" => Some(Self::Sad),
			_ => None,
		}
	}

	/// Server wire code of this emotion
	pub const fn wire_code(self) -> Option<&'static str> {
		match self {
			Self::Neutral => Some("00"),
			Self::Happy => Some("01"),
			Self::Sad => Some("10"),
			Self::Stunned => None,
		}
	}
}

impl std::fmt::Display for Emotion {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Neutral => write!(f, "Neutral"),
			Self::Happy => write!(f, "Happy"),
			Self::Sad => write!(f, "Sad"),
			Self::Stunned => write!(f, "Stunned"),
		}
	}
}

impl FromStr for Emotion {
	type Err = EmotionError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let lower = s.trim().to_ascii_lowercase();
		Self::ALL
			.into_iter()
			.find(|emotion| emotion.name() == lower)
			.ok_or_else(|| EmotionError::UnknownName(s.to_string()))
	}
}

impl TryFrom<u8> for Emotion {
	type Error = EmotionError;

	fn try_from(value: u8) -> Result<Self, Self::Error> {
		Self::from_u8(value)
	}
}

impl From<Emotion> for u8 {
	fn from(emotion: Emotion) -> Self {
		emotion.to_u8()
	}
}
