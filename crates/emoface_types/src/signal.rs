//! Device states and the server control messages that drive them.
//!
//! The conversation server talks to the device over a websocket. Binary frames
//! carry reply audio; text frames carry the control messages parsed here, which
//! move the device between listening, thinking and speaking, and set the emotion
//! the face shows while speaking.

use std::fmt::Formatter;

use log::debug;
use serde::Serialize;

use crate::emotion::Emotion;

/// Server is processing the user's utterance
pub const PROCESSING_START: &str = "PROCESSING_START";

/// Server finished streaming reply audio
pub const TTS_END: &str = "TTS_END";

/// Server is listening
pub const LISTENING: &str = "LISTENING";

/// Connection and conversation state of the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum DeviceState {
	/// No Wi-Fi connection
	#[default]
	OfflineWifi,
	/// Wi-Fi is up but the server connection is down
	DisconnectedWs,
	/// Connected and idle for a while
	Free,
	/// Streaming microphone audio to the server
	Streaming,
	/// Waiting for the server to answer
	Waiting,
	/// Playing the server's reply
	PlayingResponse,
}

impl DeviceState {
	/// Whether the microphone streams in this state
	pub fn streams_audio(self) -> bool {
		matches!(self, Self::Streaming | Self::Free)
	}
}

impl std::fmt::Display for DeviceState {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::OfflineWifi => write!(f, "OFFLINE_WIFI"),
			Self::DisconnectedWs => write!(f, "DISCONNECTED_WS"),
			Self::Free => write!(f, "FREE"),
			Self::Streaming => write!(f, "STREAMING"),
			Self::Waiting => write!(f, "WAITING"),
			Self::PlayingResponse => write!(f, "PLAYING_RESPONSE"),
		}
	}
}

/// Text control message from the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlMessage {
	/// `PROCESSING_START`
	ProcessingStart,
	/// `TTS_END`
	TtsEnd,
	/// `LISTENING`
	Listening,
	/// Emotion wire code (`00`, `01`, `10`)
	Emotion(Emotion),
	/// Anything else
	Unknown(String),
}

impl ControlMessage {
	/// Parses a text frame
	pub fn parse(text: &str) -> Self {
		match text {
			PROCESSING_START => Self::ProcessingStart,
			TTS_END => Self::TtsEnd,
			LISTENING => Self::Listening,
			other => match Emotion::from_wire(other) {
				Some(emotion) => Self::Emotion(emotion),
				None => Self::Unknown(other.to_string()),
			},
		}
	}
}

impl From<&str> for ControlMessage {
	fn from(text: &str) -> Self {
		Self::parse(text)
	}
}

/// Device state plus the emotion the face should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FaceState {
	/// Current device state
	pub state: DeviceState,
	/// Current emotion
	pub emotion: Emotion,
}

impl FaceState {
	/// Creates a state
	pub fn new(state: DeviceState, emotion: Emotion) -> Self {
		Self {
			state,
			emotion,
		}
	}

	/// Applies a server control message
	pub fn on_message(&mut self, message: &ControlMessage) {
		match message {
			ControlMessage::ProcessingStart => self.transition(DeviceState::Waiting, Some(Emotion::Neutral)),
			ControlMessage::TtsEnd => self.transition(DeviceState::Streaming, Some(Emotion::Neutral)),
			ControlMessage::Emotion(emotion) => {
				debug!("Emotion from server: {}", emotion);
				self.emotion = *emotion;
			}
			ControlMessage::Listening => {}
			ControlMessage::Unknown(text) => debug!("Ignoring unknown control message '{}'", text),
		}
	}

	/// Reply audio started arriving
	pub fn on_audio(&mut self) {
		self.transition(DeviceState::PlayingResponse, None);
	}

	/// Server connection established
	pub fn on_connected(&mut self) {
		self.transition(DeviceState::Streaming, None);
	}

	/// Server connection lost
	pub fn on_disconnected(&mut self) {
		self.transition(DeviceState::DisconnectedWs, None);
	}

	/// Nothing received for the idle timeout; only applies while streaming
	pub fn on_idle_timeout(&mut self) {
		if self.state.streams_audio() {
			self.transition(DeviceState::Free, None);
		}
	}

	fn transition(&mut self, state: DeviceState, emotion: Option<Emotion>) {
		if self.state != state {
			debug!("State {} -> {}", self.state, state);
		}
		self.state = state;
		if let Some(emotion) = emotion {
			self.emotion = emotion;
		}
	}
}
