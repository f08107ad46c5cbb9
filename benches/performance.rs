// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for fretnoter
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Scale and chord realization
//! - Scale membership analysis across the whole chord catalog
//! - Reverse chord lookup for inputs of different sizes
//! - Fretboard layout

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use fretnoter::fretboard::{parse_tuning, Board, STANDARD_TUNING};
use fretnoter::music::{build_chord, build_scale, chords_in_scale, detect_chord, Note};

/// Benchmark realizing a scale and a chord
fn bench_builders(c: &mut Criterion) {
    c.bench_function("build_scale", |b| {
        b.iter(|| build_scale(black_box("C"), black_box("Major (Ionian)")))
    });

    c.bench_function("build_chord", |b| {
        b.iter(|| build_chord(black_box("F#"), black_box("m11")))
    });
}

/// Benchmark membership analysis (12 roots x full chord catalog)
fn bench_chords_in_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("chords_in_scale");

    for scale in ["Pentatonic Minor", "Major (Ionian)", "Metallica"] {
        group.bench_with_input(BenchmarkId::from_parameter(scale), &scale, |b, &scale| {
            b.iter(|| chords_in_scale(black_box("A"), scale))
        });
    }

    group.finish();
}

/// Benchmark reverse chord lookup
fn bench_detect_chord(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_chord");

    let inputs: [&[&str]; 4] = [
        &["C"],
        &["C", "G"],
        &["C", "E", "G"],
        &["C", "E", "G", "A#", "D", "F"],
    ];
    for notes in inputs {
        group.bench_with_input(BenchmarkId::from_parameter(notes.len()), &notes, |b, notes| {
            b.iter(|| detect_chord(black_box(*notes)))
        });
    }

    group.finish();
}

/// Benchmark laying a scale out on a six-string fretboard
fn bench_board_layout(c: &mut Criterion) {
    let tuning = parse_tuning(STANDARD_TUNING).unwrap();

    c.bench_function("scale_board", |b| {
        b.iter(|| Board::scale(black_box(&tuning), Note::E, "Natural Minor (Aeolian)"))
    });
}

criterion_group!(
    benches,
    bench_builders,
    bench_chords_in_scale,
    bench_detect_chord,
    bench_board_layout,
);
criterion_main!(benches);
