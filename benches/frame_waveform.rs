//! Criterion benchmarks for frame and clock waveform generation.
//!
//! Frame generation runs once per acquisition setup change, but large ROIs
//! produce buffers of several million samples, so it should stay well below
//! a frame period.
//!
//! Run with: cargo bench --bench frame_waveform

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use galvo_scan::waveform::{
    clock_waveform_size, frame_waveform_size, generate_galvo_waveform_frame, generate_line_clock,
    WaveformParams,
};

fn square(size: u32) -> WaveformParams {
    WaveformParams {
        width: size,
        height: size,
        resolution: size,
        undershoot: 50,
        ..Default::default()
    }
}

/// Full X|Y frame buffer for common square resolutions.
fn frame_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("galvo_frame");

    for size in [256u32, 512, 1024, 2048] {
        let params = square(size);
        let mut frame = vec![0.0; frame_waveform_size(&params).unwrap()];

        group.throughput(Throughput::Elements(frame.len() as u64));
        group.bench_with_input(BenchmarkId::new("generate", size), &params, |b, params| {
            b.iter(|| {
                generate_galvo_waveform_frame(black_box(params), &mut frame).unwrap();
            });
        });
    }

    group.finish();
}

/// Line clock fill.
fn clock_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_clock");

    for size in [512u32, 2048] {
        let params = square(size);
        let mut clock = vec![0u8; clock_waveform_size(&params).unwrap()];

        group.throughput(Throughput::Elements(clock.len() as u64));
        group.bench_with_input(BenchmarkId::new("generate", size), &params, |b, params| {
            b.iter(|| {
                generate_line_clock(black_box(params), &mut clock).unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, frame_generation, clock_generation);
criterion_main!(benches);
