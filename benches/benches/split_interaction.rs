// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use understory_split::closest::closest_number;
use understory_split::{Direction, Key, KeyInput, Primary, SizeUnit, SplitConfig, SplitPanel};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// A wandering pointer path across the container, like a user dragging back and forth.
fn gen_drag_path(count: usize, extent: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    let mut x = extent * 0.5;
    for _ in 0..count {
        x = (x + (rng.next_f64() - 0.5) * 24.0).clamp(-20.0, extent + 20.0);
        out.push(Point::new(x, 0.0));
    }
    out
}

fn gen_snap_points(count: usize, extent: f64) -> Vec<f64> {
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    (0..count).map(|_| rng.next_f64() * extent).collect()
}

fn mounted(config: SplitConfig, size: f64) -> SplitPanel {
    let mut panel = SplitPanel::new(config, size);
    panel.mount(Size::new(1600.0, 900.0), Size::new(4.0, 900.0));
    panel
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag");
    let path = gen_drag_path(4096, 1600.0);
    group.throughput(Throughput::Elements(path.len() as u64));

    let plain = SplitConfig::default();
    let snapping = SplitConfig {
        snap_points: gen_snap_points(16, 100.0),
        ..Default::default()
    };
    let collapsing = SplitConfig {
        primary: Some(Primary::End),
        direction: Direction::Rtl,
        size_unit: SizeUnit::Pixels,
        collapsible: true,
        min_size: Some(200.0),
        collapse_threshold: Some(40.0),
        snap_points: gen_snap_points(16, 1600.0),
        ..Default::default()
    };

    for (name, config) in [
        ("plain", plain),
        ("snap16", snapping),
        ("rtl_end_collapse", collapsing),
    ] {
        group.bench_function(name, |b| {
            b.iter_batched(
                || mounted(config.clone(), 50.0),
                |mut panel| {
                    panel.drag_start();
                    for &p in &path {
                        panel.drag_move(p);
                    }
                    panel.drag_end();
                    black_box(panel.drain_events().len());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_keyboard(c: &mut Criterion) {
    let mut group = c.benchmark_group("keyboard");
    let keys: Vec<KeyInput> = (0..1024)
        .map(|i| match i % 5 {
            0 => KeyInput::new(Key::ArrowRight),
            1 => KeyInput::shifted(Key::ArrowLeft),
            2 => KeyInput::new(Key::ArrowLeft),
            3 => KeyInput::shifted(Key::ArrowRight),
            _ => KeyInput::new(Key::Other),
        })
        .collect();
    group.throughput(Throughput::Elements(keys.len() as u64));
    group.bench_function("arrows_bounded", |b| {
        let config = SplitConfig {
            min_size: Some(10.0),
            max_size: Some(90.0),
            ..Default::default()
        };
        b.iter_batched(
            || mounted(config.clone(), 50.0),
            |mut panel| {
                for &k in &keys {
                    black_box(panel.handle_keydown(k));
                }
                black_box(panel.size());
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_closest(c: &mut Criterion) {
    let mut group = c.benchmark_group("closest_number");
    for n in [8_usize, 64, 512] {
        let candidates = gen_snap_points(n, 1600.0);
        group.bench_function(format!("n{n}"), |b| {
            let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
            b.iter(|| black_box(closest_number(&candidates, rng.next_f64() * 1600.0)));
        });
    }
    group.finish();
}

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize");
    let widths: Vec<f64> = (0..1024).map(|i| 800.0 + (i % 400) as f64).collect();
    group.throughput(Throughput::Elements(widths.len() as u64));
    group.bench_function("primary_start", |b| {
        let config = SplitConfig {
            primary: Some(Primary::Start),
            ..Default::default()
        };
        b.iter_batched(
            || mounted(config.clone(), 30.0),
            |mut panel| {
                for &w in &widths {
                    panel.resize(Size::new(w, 900.0));
                }
                black_box(panel.grid_template());
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_drag, bench_keyboard, bench_closest, bench_resize);
criterion_main!(benches);
