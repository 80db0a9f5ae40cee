//! Benchmark suite for packed clip parsing
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml --bench clip_parse

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use emoface_benches::{generate_clip, generate_clip_bytes};
use emoface_types::{clip::Clip, header::write_clip_header};
use std::hint::black_box;

/// Parse clips of increasing frame counts
fn bench_parse(c: &mut Criterion) {
	let mut group = c.benchmark_group("clip_parse");

	for frames in [10usize, 40, 80] {
		let data = generate_clip_bytes(frames, 4096);
		group.throughput(Throughput::Bytes(data.len() as u64));
		group.bench_with_input(BenchmarkId::new("from_bytes", frames), &data, |b, data| {
			b.iter(|| {
				let result = Clip::from_bytes("bench", black_box(data));
				black_box(result)
			});
		});
	}

	group.finish();
}

/// Fingerprinting, as done by the catalog audit
fn bench_fingerprint(c: &mut Criterion) {
	let clip = generate_clip("bench", 80, 4096);

	c.bench_function("clip_fingerprint", |b| {
		b.iter(|| black_box(&clip).fingerprint());
	});
}

/// Firmware header emission
fn bench_clip_header(c: &mut Criterion) {
	let clip = generate_clip("bench", 20, 2048);
	let mut group = c.benchmark_group("clip_header");
	group.throughput(Throughput::Bytes(clip.data_len() as u64));

	group.bench_function("write_clip_header", |b| {
		let mut out = Vec::with_capacity(clip.data_len() * 6);
		b.iter(|| {
			out.clear();
			write_clip_header(black_box(&clip), &mut out).unwrap();
			black_box(out.len())
		});
	});

	group.finish();
}

criterion_group!(benches, bench_parse, bench_fingerprint, bench_clip_header);
criterion_main!(benches);
