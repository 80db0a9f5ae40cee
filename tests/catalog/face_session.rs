//! A conversation replayed through the signal state machine and face selector

use emoface::prelude::*;

use crate::stub_catalog;

fn clip_name<'a>(selector: &FaceSelector<'a>) -> &'a str {
	selector.current().map_or("<blank>", |clip| clip.name())
}

#[test_log::test]
fn test_conversation_drives_the_face() {
	let manifest = Manifest::embedded(ManifestRevision::Full).unwrap();
	let catalog = stub_catalog(manifest, 4);
	let mut selector = FaceSelector::seeded(&catalog, 3);
	let mut face = FaceState::default();

	assert!(selector.next_frame(face.state, face.emotion).is_none());

	face.on_disconnected();
	selector.next_frame(face.state, face.emotion).unwrap();
	assert_eq!(clip_name(&selector), "hoamat");

	face.on_connected();
	selector.next_frame(face.state, face.emotion).unwrap();
	assert_eq!(clip_name(&selector), "binhthuong");

	for text in ["PROCESSING_START", "01"] {
		face.on_message(&ControlMessage::parse(text));
	}
	selector.next_frame(face.state, face.emotion).unwrap();
	assert_eq!(clip_name(&selector), "suynghi2");

	face.on_audio();
	let frame = selector.next_frame(face.state, face.emotion).unwrap();
	assert_eq!(clip_name(&selector), "vuive");
	assert_eq!(frame, catalog.emotion(Emotion::Happy).unwrap().frame(0).unwrap());

	face.on_message(&ControlMessage::parse("TTS_END"));
	selector.next_frame(face.state, face.emotion).unwrap();
	assert_eq!(clip_name(&selector), "binhthuong");

	face.on_idle_timeout();
	selector.next_frame(face.state, face.emotion).unwrap();
	let roaming = selector.current().unwrap();
	assert!(catalog.animations().iter().any(|clip| std::sync::Arc::ptr_eq(clip, roaming)));
}

#[test_log::test]
fn test_first_revision_falls_back_to_neutral() {
	let manifest = Manifest::embedded(ManifestRevision::Initial).unwrap();
	let catalog = stub_catalog(manifest, 2);
	let mut selector = FaceSelector::seeded(&catalog, 3);

	for state in [DeviceState::DisconnectedWs, DeviceState::Waiting, DeviceState::Free] {
		selector.next_frame(state, Emotion::Sad).unwrap();
		assert_eq!(clip_name(&selector), "binhthuong", "{state}");
	}
}

#[test_log::test]
fn test_cues_feed_emotion_codes() {
	let classifier = CueClassifier::default();
	let mut face = FaceState::new(DeviceState::Waiting, Emotion::Neutral);

	let emotion = classifier.classify("hôm nay tớ được quà").unwrap();
	let code = emotion.wire_code().unwrap();
	face.on_message(&ControlMessage::parse(code));

	assert_eq!(face.emotion, Emotion::Happy);
}
