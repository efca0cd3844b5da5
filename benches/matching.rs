use criterion::{criterion_group, criterion_main, Criterion};
use screenmatch::{find_matches, MatchOptions, PixelView};
use std::hint::black_box;

fn gray(v: u32) -> u32 {
    (v << 16) | (v << 8) | v
}

fn make_image(width: usize, height: usize) -> Vec<u32> {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            data.push(gray(((x * 13) ^ (y * 7) ^ (x * y)) as u32 & 0xFF));
        }
    }
    data
}

fn extract_patch(
    image: &[u32],
    img_width: usize,
    x0: usize,
    y0: usize,
    width: usize,
    height: usize,
) -> Vec<u32> {
    let mut out = Vec::with_capacity(width * height);
    for y in 0..height {
        let row = (y0 + y) * img_width;
        for x in 0..width {
            out.push(image[row + x0 + x]);
        }
    }
    out
}

fn bench_find_matches(c: &mut Criterion) {
    let img_width = 360;
    let img_height = 240;
    let image = make_image(img_width, img_height);
    let source = PixelView::from_slice(&image, img_width, img_height).unwrap();

    let tpl_width = 24;
    let tpl_height = 24;
    let tpl_data = extract_patch(&image, img_width, 120, 100, tpl_width, tpl_height);
    let template = PixelView::from_slice(&tpl_data, tpl_width, tpl_height).unwrap();

    let options = MatchOptions::default();
    c.bench_function("find_matches_360x240_tpl24", |b| {
        b.iter(|| black_box(find_matches(source, template, &options)));
    });

    let permissive = MatchOptions {
        threshold: 0.0,
        max_matches: 10,
        deadline: None,
    };
    c.bench_function("find_matches_360x240_tpl24_threshold0", |b| {
        b.iter(|| black_box(find_matches(source, template, &permissive)));
    });
}

criterion_group!(benches, bench_find_matches);
criterion_main!(benches);
