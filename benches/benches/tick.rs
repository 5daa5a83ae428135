//! Benchmark suite for the per-tick update
//!
//! This benchmark measures `Character::update` in steady state and while
//! unwinding long pre-action chains, plus the cost of expanding a chain on push.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use spriteact_benches::{CHAIN_HEAD, chained_character, ticks_to_drain};
use spriteact_core::prelude::*;
use std::hint::black_box;

/// Benchmark a character idling with some velocity to integrate
fn bench_steady_update(c: &mut Criterion) {
	let mut group = c.benchmark_group("update_steady");
	group.throughput(Throughput::Elements(1));

	let mut character = chained_character(1, 8);
	group.bench_function("idle", |b| {
		b.iter(|| {
			character.set_velocity(Vec2::new(6, 4));
			black_box(character.update())
		});
	});

	group.finish();
}

/// Benchmark draining chains of increasing length
fn bench_chain_drain(c: &mut Criterion) {
	let mut group = c.benchmark_group("update_chain");

	for chain_len in [1, 4, 16] {
		let ticks = ticks_to_drain(chain_len, 4);
		group.throughput(Throughput::Elements(ticks as u64));
		group.bench_with_input(BenchmarkId::new("drain", chain_len), &chain_len, |b, &len| {
			let mut character = chained_character(len, 4);
			b.iter(|| {
				character.push(CHAIN_HEAD).unwrap();
				for _ in 0..ticks {
					black_box(character.update());
				}
			});
		});
	}

	group.finish();
}

/// Benchmark push expansion alone
fn bench_push(c: &mut Criterion) {
	let mut group = c.benchmark_group("push");

	for chain_len in [1, 8, 24] {
		group.bench_with_input(BenchmarkId::new("expand", chain_len), &chain_len, |b, &len| {
			let mut character = chained_character(len, 2);
			b.iter(|| {
				character.push(black_box(CHAIN_HEAD)).unwrap();
				black_box(character.pop_until_base())
			});
		});
	}

	group.finish();
}

criterion_group!(benches, bench_steady_update, bench_chain_drain, bench_push);
criterion_main!(benches);
