use std::hint::black_box;

use apple_vgc::format_shr::{SHR_FILE_SIZE, extract};
use apple_vgc::{DecodeOptions, PixelFormat, decode, decode_with};
use criterion::{Criterion, criterion_group, criterion_main};

fn noise_screen() -> Vec<u8> {
    let mut state = 0x1234_5678u32;
    (0..SHR_FILE_SIZE)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state as u8
        })
        .collect()
}

fn bench_decode(c: &mut Criterion) {
    let file = noise_screen();
    let image = extract(&file).expect("valid");

    c.bench_function("extract", |b| b.iter(|| extract(black_box(&file))));

    c.bench_function("decode_sequential", |b| {
        b.iter(|| decode(black_box(&image.bitmap), &image.scbs, &image.palettes));
    });

    let parallel = DecodeOptions {
        parallel: true,
        ..DecodeOptions::default()
    };
    c.bench_function("decode_parallel", |b| {
        b.iter(|| decode_with(black_box(&image), parallel));
    });

    let raster = decode(&image.bitmap, &image.scbs, &image.palettes);
    c.bench_function("export_rgba8", |b| {
        b.iter(|| black_box(&raster).to_bytes(PixelFormat::Rgba8));
    });
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
