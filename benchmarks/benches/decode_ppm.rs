/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use tint_benches::synthetic_ppm;
use tint_ppm::{encode, PPMDecoder};

fn bench_decode(c: &mut Criterion) {
    let data = synthetic_ppm(512, 512);
    let mut group = c.benchmark_group("ppm: Plain decode");

    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("tint-ppm", |b| {
        b.iter(|| black_box(PPMDecoder::new(data.as_bytes()).decode().unwrap()))
    });
}

fn bench_encode(c: &mut Criterion) {
    let data = synthetic_ppm(512, 512);
    let image = PPMDecoder::new(data.as_bytes()).decode().unwrap();
    let mut group = c.benchmark_group("ppm: Plain encode");

    group.throughput(Throughput::Elements(image.pixels().len() as u64));

    group.bench_function("tint-ppm", |b| b.iter(|| black_box(encode(&image))));
}

criterion_group!(name=benches;
      config={
      let c = Criterion::default();
        c.measurement_time(Duration::from_secs(20))
      };
    targets=bench_decode, bench_encode);

criterion_main!(benches);
