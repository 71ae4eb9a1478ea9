use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use image::{DynamicImage, Rgb, RgbImage};
use repo_tidy::markdown::fix_math_pipes;
use repo_tidy::processing::{encode_image, prepare_for_format, CompressionOptions};
use repo_tidy::ImageKind;

fn test_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x * y) % 256) as u8])
    }))
}

fn test_document(sections: usize) -> String {
    let mut doc = String::new();
    for i in 0..sections {
        doc.push_str(&format!("## Section {}\n\n", i));
        doc.push_str("The norm $|x|$ and the set $\\{y | y > 0\\}$.\n\n");
        doc.push_str("$$\nP(A|B) = \\frac{P(B|A)P(A)}{P(B)}\n$$\n\n");
        doc.push_str("```sh\ngrep '$a|b$' notes.md | wc -l\n```\n\n");
        doc.push_str("| col | col |\n|-----|-----|\n| `a|b` | $5 |\n\n");
    }
    doc
}

fn bench_jpeg_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("jpeg_encoding");

    for (width, height) in [(320, 240), (1280, 720)] {
        let img = test_image(width, height);
        let options = CompressionOptions::default();

        group.bench_with_input(
            BenchmarkId::new("encode", format!("{}x{}", width, height)),
            &img,
            |b, img| b.iter(|| encode_image(black_box(img), ImageKind::Jpeg, black_box(&options))),
        );
    }

    group.finish();
}

fn bench_png_encoding(c: &mut Criterion) {
    let img = test_image(256, 256);
    let options = CompressionOptions::new(Some(60), false).unwrap();

    c.bench_function("png_encoding_256", |b| {
        b.iter(|| encode_image(black_box(&img), ImageKind::Png, black_box(&options)))
    });
}

fn bench_prepare_for_jpeg(c: &mut Criterion) {
    let img = DynamicImage::new_rgba8(1024, 768);

    c.bench_function("prepare_rgba_for_jpeg", |b| {
        b.iter(|| prepare_for_format(black_box(img.clone()), ImageKind::Jpeg))
    });
}

fn bench_fix_math_pipes(c: &mut Criterion) {
    let mut group = c.benchmark_group("fix_math_pipes");

    for sections in [10, 500] {
        let doc = test_document(sections);
        group.bench_with_input(BenchmarkId::from_parameter(sections), &doc, |b, doc| {
            b.iter(|| fix_math_pipes(black_box(doc)).len())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_jpeg_encoding,
    bench_png_encoding,
    bench_prepare_for_jpeg,
    bench_fix_math_pipes
);
criterion_main!(benches);
