//! Benchmark suite for catalog lookups and face selection
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml --bench face_select

use criterion::{Criterion, criterion_group, criterion_main};
use emoface_benches::generate_catalog;
use emoface_types::{
	emotion::Emotion, face::FaceSelector, manifest::ManifestRevision, signal::DeviceState,
};
use std::hint::black_box;

/// Lookups by firmware constant
fn bench_lookup(c: &mut Criterion) {
	let catalog = generate_catalog(ManifestRevision::Full, 20);

	c.bench_function("catalog_emotion_at", |b| {
		b.iter(|| {
			for constant in 0..5u8 {
				black_box(catalog.emotion_at(black_box(constant)));
			}
		});
	});
}

/// Steady playback and idle roaming
fn bench_next_frame(c: &mut Criterion) {
	let catalog = generate_catalog(ManifestRevision::Full, 20);
	let mut group = c.benchmark_group("face_next_frame");

	group.bench_function("emotion", |b| {
		let mut selector = FaceSelector::seeded(&catalog, 1);
		b.iter(|| black_box(selector.next_frame(DeviceState::PlayingResponse, Emotion::Happy)));
	});

	group.bench_function("roaming", |b| {
		let mut selector = FaceSelector::seeded(&catalog, 1);
		b.iter(|| black_box(selector.next_frame(DeviceState::Free, Emotion::Neutral)));
	});

	group.finish();
}

criterion_group!(benches, bench_lookup, bench_next_frame);
criterion_main!(benches);
