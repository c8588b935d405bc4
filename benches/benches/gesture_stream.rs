// Copyright 2025 the Sweep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the gesture hot path: tracker accumulation and full
//! classifier stream processing.

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use kurbo::Point;
use std::hint::black_box;
use sweep_gestures::{GestureClassifier, GestureTracker};
use sweep_pointer::{ContactRouter, PointerId, PointerSample};

const STREAM_LEN: u32 = 1_000;

/// A jittery but mostly rightward drag, `len` samples long.
fn drag_positions(len: u32) -> Vec<(Point, f64)> {
    (1..=len)
        .map(|i| {
            let i = f64::from(i);
            let wobble = (i * 0.7).sin() * 3.0;
            (Point::new(i * 2.0, wobble), i * 0.004)
        })
        .collect()
}

fn bench_tracker_submit(c: &mut Criterion) {
    let positions = drag_positions(STREAM_LEN);
    c.bench_function("tracker_submit_1k", |b| {
        b.iter_batched(
            || GestureTracker::new(PointerId(0), Point::ORIGIN, 0.0),
            |mut tracker| {
                for &(position, time) in &positions {
                    tracker.submit(position, time);
                }
                black_box(tracker.sameness())
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_classifier_stream(c: &mut Criterion) {
    // Four interleaved contacts, each pressing, dragging, and releasing.
    let mut samples = Vec::new();
    for pointer in 0..4 {
        samples.push(PointerSample::new(
            PointerId(pointer),
            Point::new(f64::from(pointer) * 100.0, 0.0),
            0.0,
            true,
        ));
    }
    for (position, time) in drag_positions(STREAM_LEN) {
        for pointer in 0..4 {
            let origin = f64::from(pointer) * 100.0;
            samples.push(PointerSample::new(
                PointerId(pointer),
                Point::new(origin + position.x, position.y),
                time,
                true,
            ));
        }
    }
    for pointer in 0..4 {
        samples.push(PointerSample::new(
            PointerId(pointer),
            Point::new(f64::from(pointer) * 100.0 + 2000.0, 0.0),
            5.0,
            false,
        ));
    }

    c.bench_function("classifier_stream_4x1k", |b| {
        b.iter_batched(
            || {
                let mut classifier = GestureClassifier::new();
                classifier.subscribe_swiped(|swipe| {
                    black_box(swipe.velocity);
                });
                (classifier, ContactRouter::new())
            },
            |(mut classifier, mut router)| {
                for sample in &samples {
                    classifier.process(&mut router, sample);
                }
                black_box(classifier.active_count())
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_tracker_submit, bench_classifier_stream);
criterion_main!(benches);
