use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use identicon::domain::entities::{BitPattern, Canvas, ContentHash, Rgb};
use identicon::domain::repositories::IconEncoder;
use identicon::infrastructure::cache::IconCache;
use identicon::{IdenticonGenerator, PngIconEncoder};

fn bench_pipeline_stages(c: &mut Criterion) {
    let hash = ContentHash::of_user(5);
    let pattern = BitPattern::from_hash(&hash);
    let color = Rgb::from_hash(&hash);
    let canvas = Canvas::render(&pattern, color);
    let encoder = PngIconEncoder::new();

    let mut group = c.benchmark_group("stages");
    group.bench_function("md5", |b| b.iter(|| ContentHash::of_user(black_box(5))));
    group.bench_function("pattern", |b| b.iter(|| BitPattern::from_hash(black_box(&hash))));
    group.bench_function("render", |b| b.iter(|| Canvas::render(black_box(&pattern), color)));
    group.bench_function("encode", |b| b.iter(|| encoder.encode(black_box(&canvas))));
    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let generator = IdenticonGenerator::new(PngIconEncoder::new());
    c.bench_function("generate_identicon", |b| {
        b.iter(|| generator.generate_identicon(black_box(123_456)))
    });

    let cache = IconCache::new(16);
    c.bench_function("generate_identicon_cached", |b| {
        b.iter(|| cache.get_or_generate(black_box(123_456), &generator))
    });
}

fn bench_batch(c: &mut Criterion) {
    let generator = IdenticonGenerator::new(PngIconEncoder::new());
    let mut group = c.benchmark_group("batch");
    for &n in &[10usize, 100, 1_000] {
        let ids: Vec<i64> = (0..n as i64).collect();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &ids, |b, ids| {
            b.iter(|| generator.generate_batch(ids))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pipeline_stages, bench_generate, bench_batch);
criterion_main!(benches);
